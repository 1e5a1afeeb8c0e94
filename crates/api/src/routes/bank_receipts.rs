//! Bank receipt endpoints.

use axum::{Json, Router, extract::State, routing::get};
use payflow_core::payment::{BankReceipt, PaymentLifecycle};

use crate::AppState;
use crate::error::ApiResult;

async fn list_bank_receipts(State(state): State<AppState>) -> ApiResult<Json<Vec<BankReceipt>>> {
    let receipts = state
        .with_store(|store| PaymentLifecycle::new(store).list_receipts())
        .await?;
    Ok(Json(receipts))
}

/// Creates bank receipt routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/bank-receipts", get(list_bank_receipts))
}
