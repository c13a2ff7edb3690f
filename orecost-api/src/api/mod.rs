//! HTTP API handlers for orecost-api

pub mod clan_costs;
pub mod docs;
pub mod health;
pub mod hero_equipments;
pub mod player_costs;

pub use clan_costs::get_clan_costs;
pub use docs::docs_routes;
pub use health::health_routes;
pub use hero_equipments::get_hero_equipments;
pub use player_costs::get_player_costs;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::usecases::UseCaseError;

/// HTTP-facing error for all handlers
#[derive(Debug)]
pub enum ApiError {
    MissingTag,
    InvalidTag(String),
    /// Hard upstream failure; the upstream status is surfaced verbatim.
    Upstream { status: u16, message: String },
    Internal(String),
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::Upstream { status, source } => {
                // Status 0 means no response was obtained at all.
                let status = if status == 0 { 502 } else { status };
                let message = match source {
                    Some(e) => e.to_string(),
                    None => format!("upstream returned status {status}"),
                };
                ApiError::Upstream { status, message }
            }
            UseCaseError::MalformedPayload(e) => {
                ApiError::Internal(format!("malformed upstream payload: {e}"))
            }
            UseCaseError::InvalidTag(tag) => ApiError::InvalidTag(tag),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingTag => (StatusCode::BAD_REQUEST, "missing tag".to_string()),
            ApiError::InvalidTag(tag) => (StatusCode::BAD_REQUEST, format!("invalid tag: {tag}")),
            ApiError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
