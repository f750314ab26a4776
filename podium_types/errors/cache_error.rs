use thiserror::Error;

/// Errors for the top players cache.
///
/// Callers are not required to tell a miss apart from an unreachable
/// cache, both simply mean "go to the store".
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache entry '{0}' not found")]
    Miss(&'static str),

    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    #[error("Cached value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}
