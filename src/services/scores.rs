//! Best-score synchronisation
//!
//! A local store is always present; a remote store is optional. The best
//! score is the max of both. Write failures are logged and swallowed: the
//! in-memory value stays authoritative and the caller may retry later.

use crate::models::errors::StoreResult;
use crate::store::{LeaderboardEntry, ScoreStore};

pub struct ScoreSync {
    local: Box<dyn ScoreStore>,
    remote: Option<Box<dyn ScoreStore>>,
    user: Option<String>,
    display_name: Option<String>,
}

impl ScoreSync {
    pub fn new(local: Box<dyn ScoreStore>, remote: Option<Box<dyn ScoreStore>>, user: Option<String>) -> Self {
        ScoreSync {
            local,
            remote,
            user,
            display_name: None,
        }
    }

    /// Name shown on the leaderboard instead of the user key.
    pub fn with_display_name(mut self, display_name: Option<String>) -> Self {
        self.display_name = display_name;
        self
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Read both stores and return the larger best score.
    ///
    /// Whichever side holds the lower value is brought up to date. A store
    /// that cannot be read counts as 0 for this session.
    pub fn reconcile(&mut self) -> u32 {
        let user = self.user.as_deref();
        let name = self.display_name.as_deref();

        let local = self.local.read_best_score(user).unwrap_or_else(|err| {
            tracing::warn!("reading local best score failed: {}", err);
            0
        });

        let Some(remote_store) = self.remote.as_mut() else {
            return local;
        };

        let remote = match remote_store.read_best_score(user) {
            Ok(score) => Some(score),
            Err(err) => {
                tracing::warn!("reading remote best score failed: {}", err);
                None
            }
        };

        let best = local.max(remote.unwrap_or(0));

        if let Some(remote) = remote {
            if remote < best {
                if let Err(err) = remote_store.write_best_score(user, name, best) {
                    tracing::warn!("pushing local best score {} to remote failed: {}", best, err);
                }
            }
        }
        if local < best {
            if let Err(err) = self.local.write_best_score(user, name, best) {
                tracing::warn!("caching remote best score {} locally failed: {}", best, err);
            }
        }

        tracing::info!("best score for {} is {}", user.unwrap_or("anonymous"), best);
        best
    }

    /// Persist a new best score to every store.
    ///
    /// Returns true only if all writes succeeded. Failures never propagate.
    pub fn persist(&mut self, score: u32) -> bool {
        let user = self.user.as_deref();
        let name = self.display_name.as_deref();
        let mut ok = true;

        if let Err(err) = self.local.write_best_score(user, name, score) {
            tracing::warn!("saving best score {} locally failed: {}", score, err);
            ok = false;
        }
        if let Some(remote) = self.remote.as_mut() {
            if let Err(err) = remote.write_best_score(user, name, score) {
                tracing::warn!("saving best score {} remotely failed: {}", score, err);
                ok = false;
            }
        }
        ok
    }

    /// Leaderboard from the remote store, or the local one when offline-only.
    pub fn leaderboard(&self, limit: usize) -> StoreResult<Vec<LeaderboardEntry>> {
        match &self.remote {
            Some(remote) => remote.leaderboard(limit),
            None => self.local.leaderboard(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shares a MemoryStore so tests can inspect it after handing it over.
    struct Shared(Rc<RefCell<MemoryStore>>);

    impl ScoreStore for Shared {
        fn read_best_score(&self, user: Option<&str>) -> StoreResult<u32> {
            self.0.borrow().read_best_score(user)
        }
        fn write_best_score(
            &mut self,
            user: Option<&str>,
            display_name: Option<&str>,
            score: u32,
        ) -> StoreResult<()> {
            self.0.borrow_mut().write_best_score(user, display_name, score)
        }
        fn leaderboard(&self, limit: usize) -> StoreResult<Vec<LeaderboardEntry>> {
            self.0.borrow().leaderboard(limit)
        }
    }

    fn shared(scores: &[(Option<&str>, u32)]) -> Rc<RefCell<MemoryStore>> {
        Rc::new(RefCell::new(MemoryStore::with_scores(scores)))
    }

    #[test]
    fn local_only_returns_local_score() {
        let local = shared(&[(None, 300)]);
        let mut sync = ScoreSync::new(Box::new(Shared(local.clone())), None, None);
        assert_eq!(sync.reconcile(), 300);
    }

    #[test]
    fn higher_remote_is_cached_locally() {
        let local = shared(&[(Some("ada"), 100)]);
        let remote = shared(&[(Some("ada"), 900)]);
        let mut sync = ScoreSync::new(
            Box::new(Shared(local.clone())),
            Some(Box::new(Shared(remote.clone()))),
            Some("ada".to_string()),
        );
        assert_eq!(sync.reconcile(), 900);
        assert_eq!(local.borrow().read_best_score(Some("ada")).unwrap(), 900);
    }

    #[test]
    fn higher_local_is_pushed_to_remote() {
        let local = shared(&[(Some("ada"), 1200)]);
        let remote = shared(&[(Some("ada"), 40)]);
        let mut sync = ScoreSync::new(
            Box::new(Shared(local.clone())),
            Some(Box::new(Shared(remote.clone()))),
            Some("ada".to_string()),
        );
        assert_eq!(sync.reconcile(), 1200);
        assert_eq!(remote.borrow().read_best_score(Some("ada")).unwrap(), 1200);
    }

    #[test]
    fn offline_remote_falls_back_to_local() {
        let local = shared(&[(Some("ada"), 64)]);
        let remote = shared(&[(Some("ada"), 4096)]);
        remote.borrow_mut().set_unavailable(true);
        let mut sync = ScoreSync::new(
            Box::new(Shared(local.clone())),
            Some(Box::new(Shared(remote.clone()))),
            Some("ada".to_string()),
        );
        assert_eq!(sync.reconcile(), 64);
    }

    #[test]
    fn persist_reports_partial_failure_but_keeps_writing() {
        let local = shared(&[]);
        let remote = shared(&[]);
        remote.borrow_mut().set_unavailable(true);
        let mut sync = ScoreSync::new(
            Box::new(Shared(local.clone())),
            Some(Box::new(Shared(remote.clone()))),
            Some("ada".to_string()),
        );
        assert!(!sync.persist(256));
        assert_eq!(local.borrow().read_best_score(Some("ada")).unwrap(), 256);

        remote.borrow_mut().set_unavailable(false);
        assert!(sync.persist(256));
        assert_eq!(remote.borrow().read_best_score(Some("ada")).unwrap(), 256);
    }

    #[test]
    fn persist_writes_the_display_name() {
        let local = shared(&[]);
        let mut sync = ScoreSync::new(Box::new(Shared(local.clone())), None, Some("u-17".to_string()))
            .with_display_name(Some("Ada".to_string()));
        assert!(sync.persist(128));

        let board = local.borrow().leaderboard(10).unwrap();
        assert_eq!(board[0].user, "u-17");
        assert_eq!(board[0].display_name, "Ada");
    }

    #[test]
    fn leaderboard_prefers_remote() {
        let local = shared(&[(Some("me"), 10)]);
        let remote = shared(&[(Some("ada"), 500), (Some("bob"), 200)]);
        let sync = ScoreSync::new(
            Box::new(Shared(local)),
            Some(Box::new(Shared(remote))),
            Some("me".to_string()),
        );
        let board = sync.leaderboard(10).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].user, "ada");
    }
}
