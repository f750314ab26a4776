use podium_types::common::Player;
use uuid::Uuid;

use crate::cqrs::Query;

/// Fetch the player entity by player id.
pub struct GetPlayerById {
    pub player_id: Uuid,
}

impl Query for GetPlayerById {
    type Output = Player;
}

/// Fetch the highest scoring players, served from the cache when possible.
pub struct GetTopPlayers {
    pub limit: i64,
}

impl Query for GetTopPlayers {
    type Output = Vec<Player>;
}
