//! HTTP route handlers for Mint.

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use cardmint_common::CardmintError;

use crate::state::AppState;

mod cards;
mod health;
mod lookup;
mod session;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health & Status
        .route("/health", get(health::health_check))

        // Card generation
        .route("/cards/generate", post(cards::generate))

        // BIN metadata
        .route("/bin/{bin}", get(lookup::lookup_bin))

        // Saved cards
        .route(
            "/saved",
            get(session::list_saved)
                .post(session::save_cards)
                .delete(session::clear_saved),
        )
        .route("/saved/export", get(session::export_saved))

        // Browser-facing tool: request tracing plus permissive CORS
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )

        // Add shared state
        .with_state(state)
}

/// Map a core error onto the HTTP status it defines
pub(crate) fn error_status(err: CardmintError) -> StatusCode {
    tracing::debug!(error = %err, "Request rejected");
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
