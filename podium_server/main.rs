use std::{sync::Arc, time::Duration};

use podium_app::{app::AppBus, config::Config, storage::Storage};
use podium_cache::RedisLeaderboardCache;
use podium_db::{PostgresPlayerRepository, establish_connection_pool, run_migrations};
use podium_types::{Result, errors::ApplicationError};
use podium_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let (config, app_bus) = setup_app().await?;
    let state = AppState::new(app_bus);

    WebRouter::serve(state, config.http_port).await
}

async fn setup_app() -> Result<(Arc<Config>, Arc<AppBus>), ApplicationError> {
    let config = Arc::new(Config::from_env());

    let db_pool = establish_connection_pool().await?;
    run_migrations(&db_pool).await?;
    tracing::info!("Database ready");

    let cache = RedisLeaderboardCache::connect(
        &config.redis_url,
        Duration::from_secs(config.cache_ttl_secs),
    )
    .await?;

    let storage = Storage::new(
        Arc::new(PostgresPlayerRepository::new(db_pool)),
        Arc::new(cache),
    );
    let app_bus = Arc::new(AppBus::new(config.clone(), storage));

    Ok((config, app_bus))
}
