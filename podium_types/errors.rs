use thiserror::Error;

pub mod cache_error;
pub mod db_error;

pub use cache_error::CacheError;
pub use db_error::DbError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl ApplicationError {
    /// True when the error means "no such record" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Db(DbError::PlayerNotFound(_)))
    }
}
