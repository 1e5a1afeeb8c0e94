//! End-to-end workflow over HTTP.
//!
//! Runs the router against a JSON-file store, so each request goes through
//! the same persistence path the server uses.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use payflow_api::{AppState, create_router};

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    user: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("incominguser", user);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn payment(amount: &str, payment_type: &str) -> Value {
    json!({
        "InvoiceNumber": format!("INV-{amount}"),
        "PaymentDate": "2026-03-05",
        "Amount": amount,
        "Currency": "GBP",
        "PaymentType": payment_type,
        "BeneficiaryId": 1,
        "PaymentMethod": "Faster Payments"
    })
}

// ============================================================================
// Test: Create -> submit -> approve -> release -> settle
// ============================================================================
#[tokio::test]
async fn test_payment_lifecycle_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    let app = create_router(AppState::new(payflow_db::open(&path, true).unwrap()));

    let (status, created) = call(
        &app,
        "POST",
        "/api/v1/payments",
        "alice",
        Some(payment("750000", "Domestic")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let payment_id = created["Id"].as_u64().unwrap();

    let (_, submitted) = call(
        &app,
        "POST",
        &format!("/api/v1/payments/{payment_id}/submit-for-approval"),
        "alice",
        None,
    )
    .await;
    let approval_id = submitted["ApprovalId"].clone();

    let (_, dashboard) = call(&app, "GET", "/api/v1/payments/dashboard-items", "alice", None).await;
    assert_eq!(dashboard["ApprovalRequired"], 1);
    assert_eq!(dashboard["NearSLA"]["Within2Hours"], 1);

    let (_, approval) = call(&app, "GET", &format!("/api/v1/approvals/{approval_id}"), "bob", None).await;
    assert_eq!(approval["CfoApprovalRequired"], true);
    assert_eq!(approval["IsOutOfRange"], false);

    let (_, outcome) = call(
        &app,
        "POST",
        "/api/v1/approvals/approve",
        "bob",
        Some(json!({ "ApprovalIds": [approval_id.clone()] })),
    )
    .await;
    assert_eq!(outcome["Processed"], json!([approval_id]));

    let (_, queue) = call(&app, "GET", "/api/v1/release-queue?Status=Pending", "carol", None).await;
    let item_id = queue[0]["Id"].clone();

    let (_, batch) = call(
        &app,
        "POST",
        "/api/v1/release-queue/release",
        "carol",
        Some(json!({ "ReleaseQueueIds": [item_id] })),
    )
    .await;
    assert_eq!(batch["Count"], 1);
    assert_eq!(batch["TotalAmount"], "750000");

    let (status, _) = call(
        &app,
        "POST",
        &format!("/api/v1/payments/{payment_id}/import-receipts"),
        "ops",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, settled) = call(&app, "GET", &format!("/api/v1/payments/{payment_id}"), "alice", None).await;
    assert_eq!(settled["Status"], "Settled");

    // The file holds everything the router reported.
    let reopened = payflow_db::open(&path, false).unwrap();
    let state = reopened.snapshot().unwrap();
    assert_eq!(state.payments.len(), 1);
    assert_eq!(state.approvals.len(), 1);
    assert_eq!(state.release_queue.len(), 1);
    assert_eq!(state.bank_receipts.len(), 1);
}

// ============================================================================
// Test: Foreign payments need two distinct approvers
// ============================================================================
#[tokio::test]
async fn test_foreign_dual_authorization_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_router(AppState::new(
        payflow_db::open(dir.path().join("db.json"), true).unwrap(),
    ));

    call(&app, "POST", "/api/v1/payments", "alice", Some(payment("5000", "Foreign"))).await;
    call(&app, "POST", "/api/v1/payments/1/submit-for-approval", "alice", None).await;

    let approve = |user: &'static str| {
        let app = app.clone();
        async move {
            call(
                &app,
                "POST",
                "/api/v1/approvals/approve",
                user,
                Some(json!({ "ApprovalIds": [1] })),
            )
            .await
        }
    };

    approve("bob").await;
    let (_, first) = call(&app, "GET", "/api/v1/approvals/1", "bob", None).await;
    assert_eq!(first["AwaitingSecondApprover"], true);

    approve("bob").await;
    let (_, same_user) = call(&app, "GET", "/api/v1/approvals/1", "bob", None).await;
    assert_eq!(same_user["AwaitingSecondApprover"], true);

    approve("dana").await;
    let (_, second) = call(&app, "GET", "/api/v1/approvals/1", "dana", None).await;
    assert_eq!(second["AwaitingSecondApprover"], false);
    assert_eq!(second["Approver2"], "dana");

    let (_, queue) = call(&app, "GET", "/api/v1/release-queue", "carol", None).await;
    assert_eq!(queue.as_array().unwrap().len(), 1);
}

// ============================================================================
// Test: Acting user defaults to "system"
// ============================================================================
#[tokio::test]
async fn test_missing_header_records_system_user() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_router(AppState::new(
        payflow_db::open(dir.path().join("db.json"), true).unwrap(),
    ));

    let request = Request::post("/api/v1/payments")
        .header("content-type", "application/json")
        .body(Body::from(payment("10", "Domestic").to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, fetched) = call(&app, "GET", "/api/v1/payments/1", "ignored", None).await;
    assert_eq!(fetched["CreatedBy"], "system");
}
