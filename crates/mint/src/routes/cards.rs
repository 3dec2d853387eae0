//! Card batch generation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use cardmint_common::{CardRecord, CardmintError, Expiry, MaskedPattern};

use crate::state::AppState;

use super::error_status;

#[derive(Deserialize)]
pub struct GenerateRequest {
    /// Masked BIN pattern; 'x' marks a randomized digit
    pattern: String,

    /// Number of cards requested
    count: u32,

    /// Two-digit expiry month; omit together with `exp_year` for a random
    /// expiry
    exp_month: Option<String>,
    exp_year: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    generated: usize,
    attempts: u32,
    cards: Vec<CardRecord>,

    /// The batch in the exported line format
    text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

/// Generate a batch of Luhn-valid cards
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, StatusCode> {
    let pattern = MaskedPattern::parse(&payload.pattern).map_err(error_status)?;
    let expiry = request_expiry(
        &state,
        payload.exp_month.as_deref(),
        payload.exp_year.as_deref(),
    )
    .map_err(error_status)?;

    let report = state
        .assembler
        .generate_batch(&pattern, payload.count, &expiry)
        .map_err(error_status)?;

    // An empty batch is a reportable condition, not an error response.
    let error_message = if report.cards.is_empty() {
        tracing::warn!(
            pattern = %pattern,
            attempts = report.attempts,
            "No valid cards produced"
        );
        Some("no valid cards produced".to_string())
    } else {
        None
    };

    tracing::debug!(
        pattern = %pattern,
        requested = payload.count,
        generated = report.cards.len(),
        attempts = report.attempts,
        "Generated card batch"
    );

    Ok(Json(GenerateResponse {
        generated: report.cards.len(),
        attempts: report.attempts,
        text: report.to_text(),
        cards: report.cards,
        error_message,
    }))
}

fn request_expiry(
    state: &AppState,
    month: Option<&str>,
    year: Option<&str>,
) -> Result<Expiry, CardmintError> {
    match (month, year) {
        (Some(month), Some(year)) => Expiry::parse(month, year),
        (None, None) => {
            let generator = &state.config.generator;
            Ok(Expiry::random(
                &mut rand::rng(),
                generator.random_year_min,
                generator.random_year_max,
            ))
        }
        _ => Err(CardmintError::InvalidInput(
            "exp_month and exp_year must be supplied together".to_string(),
        )),
    }
}
