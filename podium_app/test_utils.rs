#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };
    use uuid::Uuid;

    use podium_types::{
        common::Player,
        errors::{ApplicationError, CacheError, DbError},
    };

    use crate::{
        cache::{LeaderboardCache, TOP_PLAYERS_KEY},
        repository::PlayerRepository,
    };

    fn store_down() -> ApplicationError {
        ApplicationError::Infrastructure("player store unavailable".to_string())
    }

    /// In-memory player store. Keeps insertion order so ties on score rank
    /// the same way the real store does.
    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<Vec<Player>>>,
        top_by_score_calls: Arc<Mutex<Vec<i64>>>,
        fail_writes: Arc<AtomicBool>,
        fail_reads: Arc<AtomicBool>,
        fail_top_queries: Arc<AtomicBool>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_players(players: Vec<Player>) -> Self {
            let repo = Self::default();
            *repo.players.lock().unwrap() = players;
            repo
        }

        pub fn count(&self) -> usize {
            self.players.lock().unwrap().len()
        }

        /// Limits passed to `top_by_score`, in call order.
        pub fn top_by_score_calls(&self) -> Vec<i64> {
            self.top_by_score_calls.lock().unwrap().clone()
        }

        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        pub fn fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }

        pub fn fail_top_queries(&self, fail: bool) {
            self.fail_top_queries.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn insert(&self, player: &Player) -> Result<(), ApplicationError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(store_down());
            }
            self.players.lock().unwrap().push(player.clone());
            Ok(())
        }

        async fn update(&self, player: &Player) -> Result<(), ApplicationError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(store_down());
            }
            let mut players = self.players.lock().unwrap();
            match players.iter_mut().find(|p| p.id == player.id) {
                Some(existing) => {
                    existing.name = player.name.clone();
                    existing.score = player.score;
                    Ok(())
                }
                None => Err(ApplicationError::Db(DbError::PlayerNotFound(player.id))),
            }
        }

        async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(store_down());
            }
            self.players
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == player_id)
                .cloned()
                .ok_or_else(|| ApplicationError::Db(DbError::PlayerNotFound(player_id)))
        }

        async fn top_by_score(&self, limit: i64) -> Result<Vec<Player>, ApplicationError> {
            self.top_by_score_calls.lock().unwrap().push(limit);
            if self.fail_top_queries.load(Ordering::SeqCst) {
                return Err(store_down());
            }
            let mut players = self.players.lock().unwrap().clone();
            // stable: ties keep insertion order
            players.sort_by(|a, b| b.score.cmp(&a.score));
            players.truncate(limit.max(0) as usize);
            Ok(players)
        }
    }

    /// In-memory stand-in for the top players cache. There is no TTL: a
    /// stored snapshot lives until it's overwritten or `clear` is called.
    #[derive(Default, Clone)]
    pub struct MockLeaderboardCache {
        snapshot: Arc<Mutex<Option<Vec<Player>>>>,
        get_calls: Arc<AtomicUsize>,
        set_calls: Arc<AtomicUsize>,
        fail_gets: Arc<AtomicBool>,
        fail_sets: Arc<AtomicBool>,
    }

    impl MockLeaderboardCache {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_snapshot(players: Vec<Player>) -> Self {
            let cache = Self::default();
            *cache.snapshot.lock().unwrap() = Some(players);
            cache
        }

        /// What's currently stored, read without going through the trait.
        pub fn snapshot(&self) -> Option<Vec<Player>> {
            self.snapshot.lock().unwrap().clone()
        }

        pub fn clear(&self) {
            *self.snapshot.lock().unwrap() = None;
        }

        pub fn get_calls(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }

        pub fn set_calls(&self) -> usize {
            self.set_calls.load(Ordering::SeqCst)
        }

        pub fn fail_gets(&self, fail: bool) {
            self.fail_gets.store(fail, Ordering::SeqCst);
        }

        pub fn fail_sets(&self, fail: bool) {
            self.fail_sets.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl LeaderboardCache for MockLeaderboardCache {
        async fn get_top_players(&self) -> Result<Vec<Player>, ApplicationError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_gets.load(Ordering::SeqCst) {
                return Err(CacheError::Unavailable("connection refused".to_string()).into());
            }
            self.snapshot
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| CacheError::Miss(TOP_PLAYERS_KEY).into())
        }

        async fn set_top_players(&self, players: &[Player]) -> Result<(), ApplicationError> {
            self.set_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_sets.load(Ordering::SeqCst) {
                return Err(CacheError::Unavailable("connection refused".to_string()).into());
            }
            *self.snapshot.lock().unwrap() = Some(players.to_vec());
            Ok(())
        }
    }
}
