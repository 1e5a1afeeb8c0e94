//! Payment endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use payflow_core::dashboard::{DashboardAggregator, DashboardSummary};
use payflow_core::duplicate::{DuplicateCheck, PaymentKeys};
use payflow_core::payment::{Payment, PaymentFilter, PaymentInput, PaymentLifecycle, ReceiptImport};
use payflow_core::workflow::{PaymentStatus, PaymentType};
use payflow_shared::types::PaymentId;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::{enum_param, true_flag};
use crate::AppState;
use crate::error::ApiResult;
use crate::extractors::ActingUser;

/// Query parameters for listing payments.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPaymentsQuery {
    /// `Domestic` or `Foreign`.
    pub payment_type: Option<String>,
    /// Exact reference.
    pub reference: Option<String>,
    /// `true` restricts to ERP payments; anything else restricts to manual ones.
    #[serde(rename = "IsERP")]
    pub is_erp: Option<String>,
    /// Lifecycle status.
    pub status: Option<String>,
    /// Creator.
    pub created_by: Option<String>,
}

impl ListPaymentsQuery {
    fn filter(self) -> ApiResult<PaymentFilter> {
        Ok(PaymentFilter {
            payment_type: enum_param(
                "PaymentType",
                self.payment_type.as_deref(),
                PaymentType::parse,
            )?,
            reference: self.reference.filter(|r| !r.is_empty()),
            is_erp: self
                .is_erp
                .as_deref()
                .map(|raw| raw == "true"),
            status: enum_param("Status", self.status.as_deref(), PaymentStatus::parse)?,
            created_by: self.created_by.filter(|c| !c.is_empty()),
        })
    }
}

async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<ListPaymentsQuery>,
) -> ApiResult<Json<Vec<Payment>>> {
    let filter = query.filter()?;
    let payments = state
        .with_store(move |store| PaymentLifecycle::new(store).list(&filter))
        .await?;
    Ok(Json(payments))
}

async fn create_payment(
    State(state): State<AppState>,
    user: ActingUser,
    Json(input): Json<PaymentInput>,
) -> ApiResult<impl IntoResponse> {
    let amount = input.amount;
    let acting_user = user.clone();
    let id = state
        .with_store(move |store| {
            PaymentLifecycle::new(store).create(&input, acting_user.as_str(), Utc::now())
        })
        .await?;
    info!(payment_id = %id, amount = %amount, user = %user.as_str(), "Payment created");
    Ok((StatusCode::CREATED, Json(json!({ "Id": id }))))
}

async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> ApiResult<Json<Payment>> {
    let payment = state
        .with_store(move |store| PaymentLifecycle::new(store).get(id))
        .await?;
    Ok(Json(payment))
}

async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
    Json(input): Json<PaymentInput>,
) -> ApiResult<Json<Payment>> {
    let payment = state
        .with_store(move |store| PaymentLifecycle::new(store).update(id, &input))
        .await?;
    info!(payment_id = %id, "Payment updated");
    Ok(Json(payment))
}

async fn duplicate_check(
    State(state): State<AppState>,
    Query(keys): Query<PaymentKeys>,
) -> ApiResult<Json<DuplicateCheck>> {
    let is_duplicate = state
        .with_store(move |store| PaymentLifecycle::new(store).duplicate_check(&keys))
        .await?;
    Ok(Json(DuplicateCheck { is_duplicate }))
}

async fn dashboard_items(State(state): State<AppState>) -> ApiResult<Json<DashboardSummary>> {
    let now = Utc::now();
    let summary = state
        .with_store(move |store| store.read(|s| DashboardAggregator::summarize(s, now)))
        .await?;
    Ok(Json(summary))
}

async fn submit_for_approval(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
) -> ApiResult<impl IntoResponse> {
    let approval_id = state
        .with_store(move |store| {
            PaymentLifecycle::new(store).submit_for_approval(id, Utc::now())
        })
        .await?;
    info!(payment_id = %id, approval_id = %approval_id, "Payment submitted for approval");
    Ok((StatusCode::CREATED, Json(json!({ "ApprovalId": approval_id }))))
}

async fn import_receipt(
    State(state): State<AppState>,
    Path(id): Path<PaymentId>,
    body: Option<Json<ReceiptImport>>,
) -> ApiResult<impl IntoResponse> {
    let import = body.map(|Json(import)| import).unwrap_or_default();
    let receipt_id = state
        .with_store(move |store| {
            PaymentLifecycle::new(store).import_receipt(id, &import, Utc::now())
        })
        .await?;
    info!(payment_id = %id, bank_receipt_id = %receipt_id, "Bank receipt imported");
    Ok((StatusCode::CREATED, Json(json!({ "BankReceiptId": receipt_id }))))
}

/// Creates payment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments", get(list_payments).post(create_payment))
        .route("/payments/duplicate-check", get(duplicate_check))
        .route("/payments/dashboard-items", get(dashboard_items))
        .route("/payments/{id}", get(get_payment).put(update_payment))
        .route(
            "/payments/{id}/submit-for-approval",
            post(submit_for_approval),
        )
        .route("/payments/{id}/import-receipts", post(import_receipt))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app, get, post, put};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    fn body(amount: &str, reference: Option<&str>) -> Value {
        let mut body = json!({
            "InvoiceNumber": format!("INV-{amount}"),
            "PaymentDate": "2026-03-05",
            "Amount": amount,
            "Currency": "GBP",
            "PaymentType": "Domestic",
            "BeneficiaryId": 1
        });
        if let Some(reference) = reference {
            body["Reference"] = json!(reference);
        }
        body
    }

    #[tokio::test]
    async fn test_create_generates_reference_and_snapshot() {
        let app = app();

        let (status, created) = post(&app, "/api/v1/payments", "alice", &body("1500", None)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["Id"], 1);

        let (_, payment) = get(&app, "/api/v1/payments/1").await;
        assert_eq!(payment["Reference"], "PMT-000001");
        assert_eq!(payment["Status"], "Draft");
        assert_eq!(payment["BeneficiaryName"], "ACME LIMITED");
        assert_eq!(payment["CreatedBy"], "alice");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_beneficiary() {
        let mut input = body("10", None);
        input["BeneficiaryId"] = json!(42);

        let (status, error) = post(&app(), "/api/v1/payments", "alice", &input).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["Code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_reference_conflict() {
        let app = app();
        post(&app, "/api/v1/payments", "alice", &body("10", Some("REF-1"))).await;

        let (status, error) = post(&app, "/api/v1/payments", "alice", &body("20", Some("REF-1"))).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(error["Code"], "REFERENCE_IN_USE");
    }

    #[tokio::test]
    async fn test_update_only_while_draft() {
        let app = app();
        post(&app, "/api/v1/payments", "alice", &body("10", None)).await;

        let (status, updated) = put(&app, "/api/v1/payments/1", "alice", &body("25", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["Amount"], "25");

        post(&app, "/api/v1/payments/1/submit-for-approval", "alice", &Value::Null).await;
        let (status, error) = put(&app, "/api/v1/payments/1", "alice", &body("30", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["Code"], "NOT_EDITABLE");
    }

    #[tokio::test]
    async fn test_list_filters() {
        let app = app();
        post(&app, "/api/v1/payments", "alice", &body("10", None)).await;
        post(&app, "/api/v1/payments", "bob", &body("20", None)).await;

        let (_, mine) = get(&app, "/api/v1/payments?CreatedBy=bob").await;
        assert_eq!(mine.as_array().unwrap().len(), 1);

        let (_, drafts) = get(&app, "/api/v1/payments?Status=Draft&PaymentType=Domestic").await;
        assert_eq!(drafts.as_array().unwrap().len(), 2);

        let (_, erp) = get(&app, "/api/v1/payments?IsERP=true").await;
        assert!(erp.as_array().unwrap().is_empty());

        let (status, _) = get(&app, "/api/v1/payments?Status=Paid").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_duplicate_check_by_invoice() {
        let app = app();
        post(&app, "/api/v1/payments", "alice", &body("10", None)).await;

        let (_, hit) = get(&app, "/api/v1/payments/duplicate-check?InvoiceNumber=INV-10").await;
        assert_eq!(hit["IsDuplicate"], true);

        let (_, triple) = get(
            &app,
            "/api/v1/payments/duplicate-check?BeneficiaryId=1&Amount=10&Date=2026-03-05",
        )
        .await;
        assert_eq!(triple["IsDuplicate"], true);

        let (_, partial) = get(&app, "/api/v1/payments/duplicate-check?BeneficiaryId=1&Amount=10").await;
        assert_eq!(partial["IsDuplicate"], false);
    }

    #[tokio::test]
    async fn test_submit_twice_is_invalid_transition() {
        let app = app();
        post(&app, "/api/v1/payments", "alice", &body("10", None)).await;

        let (status, submitted) =
            post(&app, "/api/v1/payments/1/submit-for-approval", "alice", &Value::Null).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(submitted["ApprovalId"], 1);

        let (status, error) =
            post(&app, "/api/v1/payments/1/submit-for-approval", "alice", &Value::Null).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["Code"], "INVALID_TRANSITION");
    }

    #[tokio::test]
    async fn test_dashboard_items_on_fresh_seed() {
        let (status, summary) = get(&app(), "/api/v1/payments/dashboard-items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["ReadyToRelease"], 0);
        assert_eq!(summary["ApprovalRequired"], 0);
        assert_eq!(summary["NearSLA"]["Within30Minutes"], 0);
        assert_eq!(summary["AccountVerificationStatistics"]["Passed"]["LastWeek"], 1);
    }
}
