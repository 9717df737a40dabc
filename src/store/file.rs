use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::{best_score, raise_score, rank, LeaderboardEntry, ScoreStore, ScoreTable};
use crate::models::errors::StoreResult;

/// Score records kept in a pretty-printed JSON file keyed by user.
///
/// The whole table is loaded on open and rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    table: ScoreTable,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let table = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => ScoreTable::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => ScoreTable::new(),
            Err(err) => return Err(err.into()),
        };
        tracing::debug!("opened score file {} ({} records)", path.display(), table.len());
        Ok(JsonFileStore { path, table })
    }

    fn flush(&self, table: &ScoreTable) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // Write then rename so a crash never leaves a truncated file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(table)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn read_best_score(&self, user: Option<&str>) -> StoreResult<u32> {
        Ok(best_score(&self.table, user))
    }

    fn write_best_score(
        &mut self,
        user: Option<&str>,
        display_name: Option<&str>,
        score: u32,
    ) -> StoreResult<()> {
        // The table only takes the new score once it is on disk, so a failed
        // write is retried in full next time.
        let mut table = self.table.clone();
        if raise_score(&mut table, user, display_name, score, Utc::now()) {
            self.flush(&table)?;
            self.table = table;
        }
        Ok(())
    }

    fn leaderboard(&self, limit: usize) -> StoreResult<Vec<LeaderboardEntry>> {
        Ok(rank(&self.table, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::StoreError;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("scores.json")).unwrap();
        assert_eq!(store.read_best_score(None).unwrap(), 0);
        assert!(store.leaderboard(10).unwrap().is_empty());
    }

    #[test]
    fn scores_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.write_best_score(Some("ada"), None, 2048).unwrap();
        store.write_best_score(None, None, 512).unwrap();
        store.write_best_score(Some("ada"), None, 1024).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.read_best_score(Some("ada")).unwrap(), 2048);
        assert_eq!(reopened.read_best_score(None).unwrap(), 512);
        let board = reopened.leaderboard(10).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].display_name, "ada");
    }

    #[test]
    fn record_fields_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.write_best_score(Some("ada"), None, 64).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let record = &json["ada"];
        assert_eq!(record["high_score"], 64);
        assert_eq!(record["display_name"], "ada");
        assert!(record["created_at"].is_string());
        assert!(record["last_updated"].is_string());
    }

    #[test]
    fn failed_write_is_not_remembered() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        let path = blocker.join("scores.json");
        let mut store = JsonFileStore::open(&path).unwrap();

        // A plain file where the parent directory should be.
        fs::write(&blocker, "").unwrap();
        assert!(store.write_best_score(Some("ada"), None, 512).is_err());
        assert_eq!(store.read_best_score(Some("ada")).unwrap(), 0);

        fs::remove_file(&blocker).unwrap();
        store.write_best_score(Some("ada"), None, 512).unwrap();
        assert!(path.exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.read_best_score(Some("ada")).unwrap(), 512);
    }

    #[test]
    fn display_name_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.write_best_score(Some("u-17"), Some("Ada"), 256).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let board = reopened.leaderboard(10).unwrap();
        assert_eq!(board[0].user, "u-17");
        assert_eq!(board[0].display_name, "Ada");
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Serialization(_))
        ));
    }
}
