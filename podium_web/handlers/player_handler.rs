use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use podium_app::{
    command_handlers::{CreatePlayerCommandHandler, UpdatePlayerCommandHandler},
    cqrs::{
        commands::{CreatePlayer, UpdatePlayer},
        queries::{GetPlayerById, GetTopPlayers},
    },
    queries_handlers::{GetPlayerByIdHandler, GetTopPlayersHandler},
};

use crate::{
    handlers::{error_response, json_error, write_response},
    http::AppState,
};

/// Body of `POST /players`. Without an id (or with the nil uuid) a new
/// player is created, otherwise the existing one is updated.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub score: i64,
}

/// POST /players – Create or update a player.
pub async fn upsert_player(
    State(state): State<AppState>,
    payload: Result<Json<PlayerPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_error(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    let result = match payload.id.filter(|id| !id.is_nil()) {
        None => {
            state
                .app_bus
                .execute(
                    CreatePlayer {
                        id: Uuid::new_v4(),
                        name: payload.name,
                        score: payload.score,
                    },
                    CreatePlayerCommandHandler::new(),
                )
                .await
        }
        Some(id) => {
            state
                .app_bus
                .execute(
                    UpdatePlayer {
                        id,
                        name: payload.name,
                        score: payload.score,
                    },
                    UpdatePlayerCommandHandler::new(),
                )
                .await
        }
    };

    match result {
        Ok(outcome) => write_response(outcome),
        Err(e) => error_response(e),
    }
}

/// GET /players/{id} – Fetch a single player.
pub async fn get_player(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(player_id) = Uuid::parse_str(&id) else {
        return json_error(StatusCode::BAD_REQUEST, "Invalid ID format");
    };

    match state
        .app_bus
        .query(GetPlayerById { player_id }, GetPlayerByIdHandler::new())
        .await
    {
        Ok(player) => (StatusCode::OK, Json(player)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /players/top – The leaderboard, possibly straight from the cache.
pub async fn top_players(State(state): State<AppState>) -> Response {
    let limit = state.app_bus.config().top_players_limit;

    match state
        .app_bus
        .query(GetTopPlayers { limit }, GetTopPlayersHandler::new())
        .await
    {
        Ok(players) => (StatusCode::OK, Json(players)).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_without_id() {
        let payload: PlayerPayload =
            serde_json::from_str(r#"{"name": "Ada", "score": 100}"#).unwrap();

        assert!(payload.id.is_none());
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.score, 100);
    }

    #[test]
    fn test_payload_requires_name_and_score() {
        assert!(serde_json::from_str::<PlayerPayload>(r#"{"score": 1}"#).is_err());
        assert!(serde_json::from_str::<PlayerPayload>(r#"{"name": "Ada"}"#).is_err());
        assert!(
            serde_json::from_str::<PlayerPayload>(r#"{"name": "Ada", "score": "high"}"#).is_err()
        );
    }
}
