use std::sync::Arc;
use tracing::{info, instrument};

use podium_types::Result;
use podium_types::common::Player;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreatePlayer},
    storage::Storage,
};

pub struct CreatePlayerCommandHandler {}

impl Default for CreatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreatePlayer> for CreatePlayerCommandHandler {
    #[instrument(skip_all, fields(player_id = %command.id, score = command.score))]
    async fn handle(
        &self,
        command: CreatePlayer,
        storage: &Storage,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let player = Player {
            id: command.id,
            name: command.name,
            score: command.score,
        };

        storage.players().insert(&player).await?;
        info!("Player created");

        Ok(player)
    }
}
