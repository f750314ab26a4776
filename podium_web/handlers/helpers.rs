use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use podium_app::app::{CacheRefresh, WriteOutcome};
use podium_types::{common::Player, errors::ApplicationError};

pub const CACHE_REFRESH_WARNING: &str = "199 podium \"leaderboard cache refresh failed\"";

/// Helper: a JSON `{"error": ...}` body with the given status.
pub fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Helper: maps an application error to the matching HTTP response.
pub fn error_response(err: ApplicationError) -> Response {
    if err.is_not_found() {
        return json_error(StatusCode::NOT_FOUND, "Player not found");
    }

    tracing::error!(error = %err, "Request failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
}

/// Helper: 200 with the written player. A failed cache refresh doesn't
/// change the status, it only adds a `Warning` header.
pub fn write_response(outcome: WriteOutcome<Player>) -> Response {
    let mut response = (StatusCode::OK, Json(outcome.value)).into_response();

    if let CacheRefresh::Failed(_) = outcome.cache_refresh {
        response.headers_mut().insert(
            header::WARNING,
            HeaderValue::from_static(CACHE_REFRESH_WARNING),
        );
    }

    response
}
