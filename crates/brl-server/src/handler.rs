use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use brl_ledger::{
    AuthorDetail, AuthorSummary, RoyaltyLedger, SaleEntry, WithdrawalEntry, WithdrawalReceipt,
    WithdrawalRequest,
};
use brl_types::AuthorId;

use crate::error::ApiError;

/// Ledger handle shared across handlers through axum state.
pub type SharedLedger = Arc<RoyaltyLedger>;

/// Root handler: service banner and endpoint directory.
pub async fn home_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "BookLeaf Author Royalty API",
        "endpoints": [
            "GET /authors",
            "GET /authors/<id>",
            "GET /authors/<id>/sales",
            "POST /withdrawals",
            "GET /authors/<id>/withdrawals"
        ]
    }))
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /authors — every author with derived earnings and balance.
pub async fn list_authors_handler(
    State(ledger): State<SharedLedger>,
) -> Json<Vec<AuthorSummary>> {
    Json(ledger.author_summaries())
}

/// GET /authors/:id — full author view with per-book stats.
pub async fn author_detail_handler(
    State(ledger): State<SharedLedger>,
    Path(id): Path<u32>,
) -> Result<Json<AuthorDetail>, ApiError> {
    Ok(Json(ledger.author_detail(AuthorId(id))?))
}

/// GET /authors/:id/sales — sale events for the author's books, newest first.
pub async fn author_sales_handler(
    State(ledger): State<SharedLedger>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<SaleEntry>>, ApiError> {
    Ok(Json(ledger.author_sales(AuthorId(id))?))
}

/// POST /withdrawals — validate and record a withdrawal request.
///
/// A body that fails to parse is treated as an empty one, so the engine
/// reports the missing fields with the contract's 400 message instead of
/// axum's default rejection.
pub async fn create_withdrawal_handler(
    State(ledger): State<SharedLedger>,
    body: Result<Json<WithdrawalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WithdrawalReceipt>), ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable withdrawal body");
            WithdrawalRequest::default()
        }
    };
    let receipt = ledger.create_withdrawal(&request)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /authors/:id/withdrawals — the author's requests, newest first.
pub async fn author_withdrawals_handler(
    State(ledger): State<SharedLedger>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<WithdrawalEntry>>, ApiError> {
    Ok(Json(ledger.author_withdrawals(AuthorId(id))?))
}
