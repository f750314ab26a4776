use async_trait::async_trait;
use std::sync::Arc;

use podium_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetPlayerById},
    storage::Storage,
};

pub struct GetPlayerByIdHandler {}

impl GetPlayerByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetPlayerById> for GetPlayerByIdHandler {
    async fn handle(
        &self,
        query: GetPlayerById,
        storage: &Storage,
        _config: &Arc<Config>,
    ) -> Result<<GetPlayerById as Query>::Output, ApplicationError> {
        storage.players().get_by_id(query.player_id).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use podium_types::{Result, common::Player};

    use super::*;
    use crate::test_utils::tests::{MockLeaderboardCache, MockPlayerRepository};

    #[tokio::test]
    async fn test_get_player_by_id_is_a_pure_read() -> Result<()> {
        let ada = Player::new("Ada".to_string(), 100);
        let repo = MockPlayerRepository::with_players(vec![ada.clone()]);
        let cache = MockLeaderboardCache::new();
        let storage = Storage::new(Arc::new(repo.clone()), Arc::new(cache.clone()));
        let config = Arc::new(Config::default());
        let handler = GetPlayerByIdHandler::new();

        let first = handler
            .handle(GetPlayerById { player_id: ada.id }, &storage, &config)
            .await?;
        let second = handler
            .handle(GetPlayerById { player_id: ada.id }, &storage, &config)
            .await?;

        assert_eq!(first, ada);
        assert_eq!(first, second);
        assert_eq!(repo.count(), 1);
        assert_eq!(cache.get_calls(), 0);
        assert_eq!(cache.set_calls(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_player_by_id_not_found() {
        let storage = Storage::new(
            Arc::new(MockPlayerRepository::new()),
            Arc::new(MockLeaderboardCache::new()),
        );
        let config = Arc::new(Config::default());

        let result = GetPlayerByIdHandler::new()
            .handle(
                GetPlayerById {
                    player_id: Uuid::new_v4(),
                },
                &storage,
                &config,
            )
            .await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_get_player_by_id_store_failure_is_not_not_found() {
        let ada = Player::new("Ada".to_string(), 100);
        let repo = MockPlayerRepository::with_players(vec![ada.clone()]);
        repo.fail_reads(true);
        let storage = Storage::new(Arc::new(repo), Arc::new(MockLeaderboardCache::new()));
        let config = Arc::new(Config::default());

        let result = GetPlayerByIdHandler::new()
            .handle(GetPlayerById { player_id: ada.id }, &storage, &config)
            .await;

        assert!(matches!(result, Err(ref e) if !e.is_not_found()));
    }
}
