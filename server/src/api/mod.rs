pub mod color;
mod palette;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Build the full application router.
///
/// The bare `POST /` route is the wire contract the original mobile
/// client speaks; the same handler also lives at `POST /api/color`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(color::resolve_color))
        .nest("/api", router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the API router
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/color", color::router())
        .nest("/palette", palette::router())
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    palette_size: usize,
}

/// GET /api/health - Liveness probe
async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        palette_size: state.palette.len(),
    })
}
