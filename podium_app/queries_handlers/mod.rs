mod get_player_by_id;
mod get_top_players;

pub use get_player_by_id::GetPlayerByIdHandler;
pub use get_top_players::GetTopPlayersHandler;
