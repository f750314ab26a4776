use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use podium_types::common;

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub score: i64,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

impl From<Player> for common::Player {
    fn from(row: Player) -> Self {
        common::Player {
            id: row.id,
            name: row.name,
            score: row.score,
        }
    }
}
