use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Deserialize;

use crate::{
    AppState,
    color::{ColorMatch, ResolveError, Rgb},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(resolve_color))
}

#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    /// Sampled pixel as [r, g, b]
    rgb: Vec<i64>,
}

/// POST / and POST /api/color - Resolve a sampled pixel to its nearest named color
pub async fn resolve_color(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ColorRequest>,
) -> Result<Json<ColorMatch>, (StatusCode, String)> {
    let rgb = Rgb::from_components(&request.rgb)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let matched = state.palette.resolve(rgb).map_err(|e| match e {
        ResolveError::InvalidInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        ResolveError::EmptyPalette => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    tracing::debug!(hex = %matched.hex, name = %matched.name, "resolved pixel");

    Ok(Json(matched))
}
