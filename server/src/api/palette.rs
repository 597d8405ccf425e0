use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_palette))
}

#[derive(Debug, Serialize)]
pub struct PaletteEntry {
    name: String,
    r: u8,
    g: u8,
    b: u8,
    hex: String,
}

/// GET /api/palette - List the loaded reference palette in match order
async fn list_palette(State(state): State<Arc<AppState>>) -> Json<Vec<PaletteEntry>> {
    let entries = state
        .palette
        .entries()
        .iter()
        .map(|entry| PaletteEntry {
            name: entry.name.clone(),
            r: entry.rgb.r,
            g: entry.rgb.g,
            b: entry.rgb.b,
            hex: entry.rgb.hex(),
        })
        .collect();

    Json(entries)
}
