use podium_types::{common::Player, errors::ApplicationError};

/// The single key the top players snapshot lives under.
pub const TOP_PLAYERS_KEY: &str = "top_players";

/// Holds one precomputed "top players" snapshot.
///
/// The snapshot is not keyed by size: whatever was stored last is what
/// `get_top_players` hands back. Expiration is the implementation's job,
/// callers never pass a TTL.
#[async_trait::async_trait]
pub trait LeaderboardCache: Send + Sync {
    /// Returns the cached snapshot. Any error (miss, transport, decoding)
    /// means the snapshot can't be trusted.
    async fn get_top_players(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Overwrites the snapshot.
    async fn set_top_players(&self, players: &[Player]) -> Result<(), ApplicationError>;
}
