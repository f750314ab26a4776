use std::sync::Arc;

use crate::{cache::LeaderboardCache, repository::PlayerRepository};

/// Process-wide handles to the player store and the top players cache.
///
/// Built once at startup and shared by every request; it holds no state of
/// its own besides the two handles.
#[derive(Clone)]
pub struct Storage {
    players: Arc<dyn PlayerRepository>,
    cache: Arc<dyn LeaderboardCache>,
}

impl Storage {
    pub fn new(players: Arc<dyn PlayerRepository>, cache: Arc<dyn LeaderboardCache>) -> Self {
        Self { players, cache }
    }

    pub fn players(&self) -> Arc<dyn PlayerRepository> {
        self.players.clone()
    }

    pub fn cache(&self) -> Arc<dyn LeaderboardCache> {
        self.cache.clone()
    }
}
