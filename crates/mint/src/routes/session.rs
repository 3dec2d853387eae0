//! Saved-cards endpoints: list, save, clear, export.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use cardmint_common::constants::EXPORT_TIMESTAMP_FORMAT;
use cardmint_common::{CardRecord, SessionEntry};

use crate::state::AppState;

#[derive(Serialize)]
pub struct SavedListResponse {
    total: usize,
    entries: Vec<SessionEntry>,
}

/// List saved cards in insertion order
pub async fn list_saved(State(state): State<AppState>) -> Json<SavedListResponse> {
    let entries = state.vault.entries().await;
    Json(SavedListResponse {
        total: entries.len(),
        entries,
    })
}

#[derive(Deserialize)]
pub struct SaveRequest {
    cards: Vec<CardRecord>,
}

#[derive(Serialize)]
pub struct SaveResponse {
    saved: usize,
    total: usize,
}

/// Save a batch of cards into the session vault
pub async fn save_cards(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, StatusCode> {
    if payload.cards.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let saved = state.vault.append(payload.cards).await;
    let total = state.vault.len().await;

    tracing::debug!(saved, total, "Cards saved to session vault");

    Ok(Json(SaveResponse { saved, total }))
}

#[derive(Serialize)]
pub struct ClearResponse {
    cleared: usize,
}

/// Clear every saved card
pub async fn clear_saved(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.vault.clear().await;
    tracing::info!(cleared, "Session vault cleared");
    Json(ClearResponse { cleared })
}

/// Download saved cards as a pipe-delimited text attachment
pub async fn export_saved(State(state): State<AppState>) -> impl IntoResponse {
    let text = state.vault.export_text().await;
    let filename = export_filename(chrono::Local::now());

    (
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        text,
    )
}

fn export_filename(now: chrono::DateTime<chrono::Local>) -> String {
    format!("cards_saved_{}.txt", now.format(EXPORT_TIMESTAMP_FORMAT))
}
