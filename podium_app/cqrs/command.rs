use async_trait::async_trait;
use podium_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, storage::Storage};

/// A marker trait for Command structs.
/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync {
    /// What the command hands back once it's durably applied.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Commands.
/// It only performs the write: refreshing the top players cache afterwards
/// is the job of the AppBus.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        storage: &Storage,
        config: &Arc<Config>,
    ) -> Result<C::Output, ApplicationError>;
}
