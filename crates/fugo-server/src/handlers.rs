//! HTTP Handlers

use axum::{
    Json,
    body::Body,
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub url: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Image host not allowed: {0}")]
    ImageNotAllowed(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl ServerError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::ImageNotAllowed(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::ImageNotAllowed(_) => "IMAGE_NOT_ALLOWED",
            Self::Upstream(_) => "UPSTREAM_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse { error: self.to_string(), code: self.code().into() }),
        )
            .into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", version: env!("CARGO_PKG_VERSION") })
}

/// Stream an allow-listed remote image
///
/// Upstream redirects are answered with 502 like any other non-success status.
pub async fn image_proxy(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Result<Response, ServerError> {
    if !state.images.allows(&query.url) {
        tracing::warn!("Rejected image url {}", query.url);
        return Err(ServerError::ImageNotAllowed(query.url));
    }

    let upstream = state.http.get(&query.url).send().await.map_err(|e| {
        tracing::error!("Image fetch failed for {}: {}", query.url, e);
        ServerError::Upstream(e.to_string())
    })?;

    let status = upstream.status();
    if !status.is_success() {
        tracing::warn!("Image upstream {} answered {}", query.url, status);
        return Err(ServerError::Upstream(format!("upstream answered {status}")));
    }

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, state.image_cache_control.clone()),
        ],
        Body::from_stream(upstream.bytes_stream()),
    )
        .into_response())
}
