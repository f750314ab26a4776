use podium_types::common::Player;
use uuid::Uuid;

use crate::cqrs::Command;

/// Creates a new player. The id is chosen by the caller and must not exist
/// yet.
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub id: Uuid,
    pub name: String,
    pub score: i64,
}

impl Command for CreatePlayer {
    type Output = Player;
}

/// Overwrites name and score of an existing player.
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub id: Uuid,
    pub name: String,
    pub score: i64,
}

impl Command for UpdatePlayer {
    type Output = Player;
}
