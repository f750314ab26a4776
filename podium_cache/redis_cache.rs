use redis::{AsyncCommands, aio::ConnectionManager};
use std::time::Duration;

use podium_app::cache::{LeaderboardCache, TOP_PLAYERS_KEY};
use podium_types::{
    Result,
    common::Player,
    errors::{ApplicationError, CacheError},
};

/// Redis backed top players cache.
///
/// The snapshot is stored as a JSON array under `top_players` and written
/// with `SET .. EX`, so Redis takes care of the expiration.
#[derive(Clone)]
pub struct RedisLeaderboardCache {
    conn: ConnectionManager,
    ttl: Duration,
}

impl RedisLeaderboardCache {
    /// Opens a managed connection and makes sure the server answers.
    pub async fn connect(redis_url: &str, ttl: Duration) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let mut conn = ConnectionManager::new(client).await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        tracing::info!(ttl_secs = ttl.as_secs(), "Connected to Redis");
        Ok(Self::new(conn, ttl))
    }

    pub fn new(conn: ConnectionManager, ttl: Duration) -> Self {
        Self { conn, ttl }
    }

    fn ttl_secs(&self) -> u64 {
        self.ttl.as_secs().max(1)
    }
}

#[async_trait::async_trait]
impl LeaderboardCache for RedisLeaderboardCache {
    async fn get_top_players(&self) -> Result<Vec<Player>, ApplicationError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(TOP_PLAYERS_KEY).await.map_err(CacheError::from)?;
        let raw = raw.ok_or(CacheError::Miss(TOP_PLAYERS_KEY))?;

        let players = serde_json::from_str(&raw).map_err(CacheError::from)?;
        Ok(players)
    }

    async fn set_top_players(&self, players: &[Player]) -> Result<(), ApplicationError> {
        let data = serde_json::to_string(players).map_err(CacheError::from)?;
        let mut conn = self.conn.clone();
        let _: () = conn
            .set_ex(TOP_PLAYERS_KEY, data, self.ttl_secs())
            .await
            .map_err(CacheError::from)?;

        Ok(())
    }
}
