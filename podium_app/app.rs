use std::sync::Arc;
use tracing::warn;

use podium_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    helpers::refresh_top_players_cache,
    storage::Storage,
};

/// What happened to the top players cache after a write landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheRefresh {
    Refreshed,
    /// The write is durable but the cached snapshot could not be rebuilt.
    /// It stays stale until the next successful refresh or until it expires.
    Failed(String),
}

impl CacheRefresh {
    pub fn is_refreshed(&self) -> bool {
        matches!(self, CacheRefresh::Refreshed)
    }
}

/// Result of a successful command: the written value plus the outcome of
/// the cache refresh that followed it.
#[derive(Debug, Clone)]
pub struct WriteOutcome<T> {
    pub value: T,
    pub cache_refresh: CacheRefresh,
}

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// Its primary roles are:
/// 1. Dispatching Commands and Queries to their respective handlers.
/// 2. Rebuilding the top players snapshot after every successful command.
pub struct AppBus {
    config: Arc<Config>,
    storage: Storage,
}

impl AppBus {
    pub fn new(config: Arc<Config>, storage: Storage) -> Self {
        Self { config, storage }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    /// - If the handler fails, its error is returned and the cache is left alone.
    /// - If the handler succeeds, the write is reported as done no matter
    ///   what happens next, and the cache is recomputed from the store.
    pub async fn execute<C, H>(
        &self,
        cmd: C,
        handler: H,
    ) -> Result<WriteOutcome<C::Output>, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let value = handler.handle(cmd, &self.storage, &self.config).await?;

        let cache_refresh =
            match refresh_top_players_cache(&self.storage, self.config.cache_refresh_size).await {
                Ok(()) => CacheRefresh::Refreshed,
                Err(e) => {
                    warn!(error = %e, "Write applied but top players cache refresh failed");
                    CacheRefresh::Failed(e.to_string())
                }
            };

        Ok(WriteOutcome {
            value,
            cache_refresh,
        })
    }

    /// Executes a query.
    /// A query is an operation that reads system state and returns data.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        handler.handle(query, &self.storage, &self.config).await
    }
}
