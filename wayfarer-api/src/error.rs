//! Errors surfaced to API clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors a route can answer with.
///
/// Reference misses inside a projection never surface here; only lookups of
/// the requested entity itself can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No relation is stored under the requested identifier.
    #[error("Relation not found")]
    RelationNotFound {
        /// Requested identifier.
        id: String,
    },
    /// No experience is stored under the requested identifier.
    #[error("Experience not found")]
    ExperienceNotFound {
        /// Requested identifier.
        id: String,
    },
    /// No route matched the request path.
    #[error("Not found")]
    RouteNotFound,
}

impl ApiError {
    /// HTTP status reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::RelationNotFound { .. } | Self::ExperienceNotFound { .. } | Self::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

/// JSON body carried by every error response.
#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
