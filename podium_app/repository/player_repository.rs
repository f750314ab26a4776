use uuid::Uuid;

use podium_types::common::Player;
use podium_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Inserts a brand new player.
    async fn insert(&self, player: &Player) -> Result<(), ApplicationError>;

    /// Updates name and score of an existing player.
    /// Fails with `DbError::PlayerNotFound` when no record has that id.
    async fn update(&self, player: &Player) -> Result<(), ApplicationError>;

    /// Returns a player by id.
    async fn get_by_id(&self, player_id: Uuid) -> Result<Player, ApplicationError>;

    /// Returns up to `limit` players ordered by score, highest first.
    async fn top_by_score(&self, limit: i64) -> Result<Vec<Player>, ApplicationError>;
}
