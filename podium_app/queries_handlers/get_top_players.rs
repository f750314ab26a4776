use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use podium_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetTopPlayers},
    storage::Storage,
};

/// Cache-aside read of the leaderboard.
///
/// A cached snapshot is returned exactly as stored, even when it holds more
/// (or fewer) players than `limit`: the cache has a single key and is
/// normally filled by the fixed-size refresh that follows every write.
/// On a miss the store is queried for `limit` players and that result is
/// cached on a best-effort basis.
pub struct GetTopPlayersHandler {}

impl GetTopPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetTopPlayers> for GetTopPlayersHandler {
    #[instrument(skip_all, fields(limit = query.limit))]
    async fn handle(
        &self,
        query: GetTopPlayers,
        storage: &Storage,
        _config: &Arc<Config>,
    ) -> Result<<GetTopPlayers as Query>::Output, ApplicationError> {
        let cache = storage.cache();

        match cache.get_top_players().await {
            Ok(players) => {
                debug!(count = players.len(), "Top players served from cache");
                return Ok(players);
            }
            Err(e) => debug!(error = %e, "Top players cache unusable, reading from store"),
        }

        let limit = query.limit.max(1);
        let players = storage.players().top_by_score(limit).await?;

        if let Err(e) = cache.set_top_players(&players).await {
            warn!(error = %e, "Unable to populate top players cache");
        }

        Ok(players)
    }
}
