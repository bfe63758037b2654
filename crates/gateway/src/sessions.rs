use {
    axum::{
        Json, Router,
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    },
    serde_json::json,
    tracing::error,
};

use crate::state::AppState;

/// Session routes, mounted under the versioned API prefix.
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/sessions", get(list_sessions).post(create_session))
}

/// Placeholder listing; the sync service backend will populate it.
async fn list_sessions(State(state): State<AppState>) -> Response {
    match state.sessions.list().await {
        Ok(sessions) => Json(json!({ "sessions": sessions })).into_response(),
        Err(e) => {
            error!(error = %e, "session list failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

/// Create a voice session. Any request body is ignored: the creation
/// schema is owned by the sync service and not defined yet.
async fn create_session(State(state): State<AppState>) -> Response {
    match state.sessions.create().await {
        Ok(id) => Json(json!({ "session_id": id })).into_response(),
        Err(e) => {
            error!(error = %e, "session create failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}
