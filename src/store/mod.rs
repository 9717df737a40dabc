//! Best-score persistence
//!
//! The engine never talks to a store directly. The driver reads the best
//! score before a session and hands new best scores to a [`ScoreStore`]
//! when the engine reports them.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::constants::ANONYMOUS_KEY;
use crate::models::errors::StoreResult;

/// Persisted best score of one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub display_name: String,
    pub high_score: u32,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// One row of the leaderboard. Ranks start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user: String,
    pub display_name: String,
    pub high_score: u32,
}

/// Durable best-score storage keyed by an optional user identity.
pub trait ScoreStore {
    /// Best score recorded for `user`, 0 when absent.
    fn read_best_score(&self, user: Option<&str>) -> StoreResult<u32>;

    /// Record `score` for `user`. A lower score never replaces a higher one.
    ///
    /// `display_name` is what the leaderboard shows; the user key is used
    /// when it is absent.
    fn write_best_score(
        &mut self,
        user: Option<&str>,
        display_name: Option<&str>,
        score: u32,
    ) -> StoreResult<()>;

    /// Top `limit` signed-in users ordered by high score.
    fn leaderboard(&self, limit: usize) -> StoreResult<Vec<LeaderboardEntry>>;
}

pub(crate) type ScoreTable = BTreeMap<String, ScoreRecord>;

pub(crate) fn store_key(user: Option<&str>) -> &str {
    user.unwrap_or(ANONYMOUS_KEY)
}

pub(crate) fn best_score(table: &ScoreTable, user: Option<&str>) -> u32 {
    table
        .get(store_key(user))
        .map(|record| record.high_score)
        .unwrap_or(0)
}

/// Insert or raise the record for `user`. Returns true if the table changed.
pub(crate) fn raise_score(
    table: &mut ScoreTable,
    user: Option<&str>,
    display_name: Option<&str>,
    score: u32,
    now: DateTime<Utc>,
) -> bool {
    let key = store_key(user);
    match table.get_mut(key) {
        Some(record) if record.high_score >= score => false,
        Some(record) => {
            record.high_score = score;
            record.last_updated = now;
            if let Some(name) = display_name {
                record.display_name = name.to_string();
            }
            true
        }
        None => {
            table.insert(
                key.to_string(),
                ScoreRecord {
                    display_name: display_name.unwrap_or(key).to_string(),
                    high_score: score,
                    created_at: now,
                    last_updated: now,
                },
            );
            true
        }
    }
}

/// Signed-in users by descending high score, ties broken by user key.
pub(crate) fn rank(table: &ScoreTable, limit: usize) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(&String, &ScoreRecord)> = table
        .iter()
        .filter(|(user, _)| user.as_str() != ANONYMOUS_KEY)
        .collect();
    rows.sort_by(|a, b| b.1.high_score.cmp(&a.1.high_score).then_with(|| a.0.cmp(b.0)));

    rows.into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (user, record))| LeaderboardEntry {
            rank: i + 1,
            user: user.clone(),
            display_name: record.display_name.clone(),
            high_score: record.high_score,
        })
        .collect()
}
