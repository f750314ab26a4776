use tracing::debug;

use podium_types::errors::ApplicationError;

use crate::storage::Storage;

/// Recomputes the top `size` players from the store and overwrites the
/// cached snapshot with them.
/// Should be called after any write that can change the ranking.
pub async fn refresh_top_players_cache(
    storage: &Storage,
    size: i64,
) -> Result<(), ApplicationError> {
    let players = storage.players().top_by_score(size.max(1)).await?;
    storage.cache().set_top_players(&players).await?;

    debug!(count = players.len(), "Top players cache refreshed");
    Ok(())
}
