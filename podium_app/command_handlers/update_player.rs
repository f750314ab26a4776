use std::sync::Arc;
use tracing::{info, instrument};

use podium_types::Result;
use podium_types::common::Player;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdatePlayer},
    storage::Storage,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    #[instrument(skip_all, fields(player_id = %command.id, score = command.score))]
    async fn handle(
        &self,
        command: UpdatePlayer,
        storage: &Storage,
        _config: &Arc<Config>,
    ) -> Result<Player> {
        let player = Player {
            id: command.id,
            name: command.name,
            score: command.score,
        };

        storage.players().update(&player).await?;
        info!("Player updated");

        Ok(player)
    }
}
