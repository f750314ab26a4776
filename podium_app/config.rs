use dotenvy::dotenv;
use std::env;

pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_TOP_PLAYERS_LIMIT: i64 = 10;
pub const DEFAULT_CACHE_REFRESH_SIZE: i64 = 100;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// How many players `GET /players/top` asks for.
    pub top_players_limit: i64,
    /// How many players are recomputed into the cache after every write.
    pub cache_refresh_size: i64,
    pub cache_ttl_secs: u64,
    pub redis_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            top_players_limit: DEFAULT_TOP_PLAYERS_LIMIT,
            cache_refresh_size: DEFAULT_CACHE_REFRESH_SIZE,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("PODIUM_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(DEFAULT_HTTP_PORT),
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let top_players_limit = match env::var("PODIUM_TOP_PLAYERS_LIMIT") {
            Ok(val) => val
                .parse::<i64>()
                .unwrap_or(DEFAULT_TOP_PLAYERS_LIMIT)
                .max(1),
            Err(_) => DEFAULT_TOP_PLAYERS_LIMIT,
        };

        let cache_refresh_size = match env::var("PODIUM_CACHE_REFRESH_SIZE") {
            Ok(val) => val
                .parse::<i64>()
                .unwrap_or(DEFAULT_CACHE_REFRESH_SIZE)
                .max(1),
            Err(_) => DEFAULT_CACHE_REFRESH_SIZE,
        };

        let cache_ttl_secs = match env::var("PODIUM_CACHE_TTL_SECS") {
            Ok(val) => val.parse::<u64>().unwrap_or(DEFAULT_CACHE_TTL_SECS).max(1),
            Err(_) => DEFAULT_CACHE_TTL_SECS,
        };

        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());

        Self {
            http_port,
            top_players_limit,
            cache_refresh_size,
            cache_ttl_secs,
            redis_url,
        }
    }
}
