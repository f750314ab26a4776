use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ranked player.
///
/// `id` is assigned once, when the player is first created, and never
/// changes afterwards. `score` is only ever used as the ranking key, higher
/// is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub score: i64,
}

impl Player {
    /// Builds a brand new player with a freshly generated id.
    pub fn new(name: String, score: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            score,
        }
    }
}
