mod create_player;
mod update_player;

pub use create_player::CreatePlayerCommandHandler;
pub use update_player::UpdatePlayerCommandHandler;
