use chrono::Utc;

use super::{best_score, raise_score, rank, LeaderboardEntry, ScoreStore, ScoreTable};
use crate::models::errors::{StoreError, StoreResult};

/// In-memory store. Doubles as a local-only store and as a test double
/// that can be told to fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: ScoreTable,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `(user, score)` pairs.
    pub fn with_scores(scores: &[(Option<&str>, u32)]) -> Self {
        let mut store = Self::new();
        let now = Utc::now();
        for (user, score) in scores {
            raise_score(&mut store.table, *user, None, *score, now);
        }
        store
    }

    /// Make every subsequent call fail as if the backend were offline.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

impl ScoreStore for MemoryStore {
    fn read_best_score(&self, user: Option<&str>) -> StoreResult<u32> {
        self.check_available()?;
        Ok(best_score(&self.table, user))
    }

    fn write_best_score(
        &mut self,
        user: Option<&str>,
        display_name: Option<&str>,
        score: u32,
    ) -> StoreResult<()> {
        self.check_available()?;
        raise_score(&mut self.table, user, display_name, score, Utc::now());
        Ok(())
    }

    fn leaderboard(&self, limit: usize) -> StoreResult<Vec<LeaderboardEntry>> {
        self.check_available()?;
        Ok(rank(&self.table, limit))
    }
}
