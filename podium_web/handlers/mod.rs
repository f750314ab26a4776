mod helpers;
mod player_handler;

pub(crate) use helpers::*;
pub use player_handler::{PlayerPayload, get_player, top_players, upsert_player};
