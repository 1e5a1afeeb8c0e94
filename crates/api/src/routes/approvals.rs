//! Approval endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::Utc;
use payflow_core::approval::{ApprovalFilter, ApprovalService, ApprovalView};
use payflow_core::workflow::{ApprovalStatus, BulkOutcome, PaymentType};
use payflow_shared::types::ApprovalId;
use serde::Deserialize;
use tracing::info;

use super::{enum_param, true_flag};
use crate::AppState;
use crate::error::ApiResult;
use crate::extractors::ActingUser;

/// Query parameters for listing approvals.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListApprovalsQuery {
    /// Decision state.
    pub status: Option<String>,
    /// `true` keeps only approvals needing CFO sign-off.
    #[serde(rename = "CFOHighValuePayments")]
    pub cfo_high_value_payments: Option<String>,
    /// `Domestic` or `Foreign`.
    pub payment_type: Option<String>,
    /// `true` keeps only overdue approvals.
    pub is_overdue: Option<String>,
}

impl ListApprovalsQuery {
    fn filter(&self) -> ApiResult<ApprovalFilter> {
        Ok(ApprovalFilter {
            status: enum_param("Status", self.status.as_deref(), ApprovalStatus::parse)?,
            cfo_required: true_flag(self.cfo_high_value_payments.as_deref()),
            payment_type: enum_param(
                "PaymentType",
                self.payment_type.as_deref(),
                PaymentType::parse,
            )?,
            overdue: true_flag(self.is_overdue.as_deref()),
        })
    }
}

/// Body of the bulk approve and reject calls.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApprovalIdsRequest {
    /// Approvals to act on.
    pub approval_ids: Vec<ApprovalId>,
}

async fn list_approvals(
    State(state): State<AppState>,
    Query(query): Query<ListApprovalsQuery>,
) -> ApiResult<Json<Vec<ApprovalView>>> {
    let filter = query.filter()?;
    let approvals = state
        .with_store(move |store| ApprovalService::new(store).list(&filter, Utc::now()))
        .await?;
    Ok(Json(approvals))
}

async fn get_approval(
    State(state): State<AppState>,
    Path(id): Path<ApprovalId>,
) -> ApiResult<Json<ApprovalView>> {
    let approval = state
        .with_store(move |store| ApprovalService::new(store).get(id, Utc::now()))
        .await?;
    Ok(Json(approval))
}

async fn approve(
    State(state): State<AppState>,
    user: ActingUser,
    Json(request): Json<ApprovalIdsRequest>,
) -> ApiResult<Json<BulkOutcome<ApprovalId>>> {
    let acting_user = user.clone();
    let outcome = state
        .with_store(move |store| {
            ApprovalService::new(store).approve(
                &request.approval_ids,
                acting_user.as_str(),
                Utc::now(),
            )
        })
        .await?;
    info!(
        user = %user.as_str(),
        processed = outcome.processed.len(),
        skipped = outcome.skipped.len(),
        "Approvals approved"
    );
    Ok(Json(outcome))
}

async fn reject(
    State(state): State<AppState>,
    user: ActingUser,
    Json(request): Json<ApprovalIdsRequest>,
) -> ApiResult<Json<BulkOutcome<ApprovalId>>> {
    let outcome = state
        .with_store(move |store| ApprovalService::new(store).reject(&request.approval_ids))
        .await?;
    info!(
        user = %user.as_str(),
        processed = outcome.processed.len(),
        skipped = outcome.skipped.len(),
        "Approvals rejected"
    );
    Ok(Json(outcome))
}

/// Creates approval routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/approvals", get(list_approvals))
        .route("/approvals/approve", post(approve))
        .route("/approvals/reject", post(reject))
        .route("/approvals/{id}", get(get_approval))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app, get, post};
    use axum::Router;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    async fn submitted(app: &Router, amount: &str, payment_type: &str) {
        let body = json!({
            "PaymentDate": "2026-03-05",
            "Amount": amount,
            "Currency": "GBP",
            "PaymentType": payment_type,
            "BeneficiaryId": 1
        });
        let (_, created) = post(app, "/api/v1/payments", "alice", &body).await;
        let uri = format!("/api/v1/payments/{}/submit-for-approval", created["Id"]);
        post(app, &uri, "alice", &Value::Null).await;
    }

    #[tokio::test]
    async fn test_list_and_filter() {
        let app = app();
        submitted(&app, "100", "Domestic").await;
        submitted(&app, "600000", "Domestic").await;
        submitted(&app, "2000000", "Foreign").await;

        let (status, all) = get(&app, "/api/v1/approvals").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 3);
        assert_eq!(all[0]["IsOverdue"], false);

        let (_, cfo) = get(&app, "/api/v1/approvals?CFOHighValuePayments=true").await;
        assert_eq!(cfo.as_array().unwrap().len(), 2);

        let (_, unfiltered) = get(&app, "/api/v1/approvals?CFOHighValuePayments=false").await;
        assert_eq!(unfiltered.as_array().unwrap().len(), 3);

        let (_, foreign) = get(&app, "/api/v1/approvals?PaymentType=Foreign").await;
        assert_eq!(foreign.as_array().unwrap().len(), 1);
        assert_eq!(foreign[0]["IsOutOfRange"], true);

        let (_, overdue) = get(&app, "/api/v1/approvals?IsOverdue=true").await;
        assert!(overdue.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_approve_skips_unknown_ids() {
        let app = app();
        submitted(&app, "100", "Domestic").await;

        let (status, outcome) = post(
            &app,
            "/api/v1/approvals/approve",
            "bob",
            &json!({ "ApprovalIds": [1, 99] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["Processed"], json!([1]));
        assert_eq!(outcome["Skipped"], json!([99]));

        let (_, approval) = get(&app, "/api/v1/approvals/1").await;
        assert_eq!(approval["Status"], "Approved");
        assert_eq!(approval["Approver1"], "bob");

        let (_, payment) = get(&app, "/api/v1/payments/1").await;
        assert_eq!(payment["Status"], "Approved");

        let (_, queue) = get(&app, "/api/v1/release-queue").await;
        assert_eq!(queue.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bulk_reject() {
        let app = app();
        submitted(&app, "100", "Domestic").await;

        let (_, outcome) = post(
            &app,
            "/api/v1/approvals/reject",
            "bob",
            &json!({ "ApprovalIds": [1] }),
        )
        .await;
        assert_eq!(outcome["Processed"], json!([1]));

        let (_, payment) = get(&app, "/api/v1/payments/1").await;
        assert_eq!(payment["Status"], "Rejected");

        let (_, rejected) = get(&app, "/api/v1/approvals?Status=Rejected").await;
        assert_eq!(rejected.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_approval_is_404() {
        let (status, error) = get(&app(), "/api/v1/approvals/7").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["Code"], "NOT_FOUND");
    }
}
