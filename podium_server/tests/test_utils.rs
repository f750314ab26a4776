#[cfg(test)]
pub mod tests {
    use reqwest::Client;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    use podium_app::{
        app::AppBus,
        config::Config,
        storage::Storage,
        test_utils::tests::{MockLeaderboardCache, MockPlayerRepository},
    };
    use podium_types::{Result, errors::ApplicationError};
    use podium_web::{AppState, WebRouter};

    pub struct TestApp {
        pub client: Client,
        pub base_url: String,
        pub players: MockPlayerRepository,
        pub cache: MockLeaderboardCache,
    }

    impl TestApp {
        pub fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Starts the real router on an ephemeral port, backed by in-memory
    /// store and cache.
    pub async fn setup_web_app() -> Result<TestApp, ApplicationError> {
        setup_web_app_with(MockPlayerRepository::new(), MockLeaderboardCache::new()).await
    }

    pub async fn setup_web_app_with(
        players: MockPlayerRepository,
        cache: MockLeaderboardCache,
    ) -> Result<TestApp, ApplicationError> {
        let storage = Storage::new(Arc::new(players.clone()), Arc::new(cache.clone()));
        let app_bus = Arc::new(AppBus::new(Arc::new(Config::default()), storage));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;
        let addr = listener
            .local_addr()
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = WebRouter::serve_on(listener, AppState::new(app_bus)).await {
                eprintln!("test server stopped: {e}");
            }
        });

        Ok(TestApp {
            client: Client::new(),
            base_url: format!("http://{}", addr),
            players,
            cache,
        })
    }
}
