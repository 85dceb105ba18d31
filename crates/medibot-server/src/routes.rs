//! HTTP routes for the custom-action webhook.
//!
//! | Method | Path       | Purpose                                   |
//! |--------|------------|-------------------------------------------|
//! | POST   | `/webhook` | run the action named in `next_action`     |
//! | GET    | `/health`  | liveness probe                            |
//! | GET    | `/actions` | list registered action names              |

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use medibot_contracts::{
    error::MedibotError,
    protocol::{ActionCall, ActionDescriptor, ActionErrorBody, ActionResponse},
};
use medibot_core::ActionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ActionRegistry>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed action call: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Action(#[from] MedibotError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::BadRequest(_) => {
                warn!(reason = %message, "rejecting malformed action call");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Action(MedibotError::UnknownAction { action_name }) => {
                let body = ActionErrorBody {
                    error: message,
                    action_name,
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::Action(_) => {
                error!(error = %message, "action failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}

/// Build the router over `registry`.
pub fn build_app(registry: Arc<ActionRegistry>) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/health", get(health))
        .route("/actions", get(actions))
        .with_state(AppState { registry })
        .layer(TraceLayer::new_for_http())
}

async fn webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ActionResponse>, ApiError> {
    let call: ActionCall =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let response = state.registry.run(call)?;
    Ok(Json(response))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn actions(State(state): State<AppState>) -> Json<Vec<ActionDescriptor>> {
    Json(state.registry.descriptors())
}
