use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{self, SharedLedger};

/// Build the axum router with all royalty endpoints.
///
/// CORS is open for all routes; the API serves browser front ends directly.
pub fn build_router(ledger: SharedLedger) -> Router {
    Router::new()
        .route("/", get(handler::home_handler))
        .route("/health", get(handler::health_handler))
        .route("/authors", get(handler::list_authors_handler))
        .route("/authors/:id", get(handler::author_detail_handler))
        .route("/authors/:id/sales", get(handler::author_sales_handler))
        .route(
            "/authors/:id/withdrawals",
            get(handler::author_withdrawals_handler),
        )
        .route("/withdrawals", post(handler::create_withdrawal_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ledger)
}
