//! Release queue endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::Utc;
use payflow_core::release::{BatchSummary, ReleaseFilter, ReleaseQueue, ReleaseQueueItem};
use payflow_core::workflow::{BulkOutcome, PaymentType, ReleaseStatus};
use payflow_shared::types::ReleaseQueueId;
use serde::Deserialize;
use tracing::info;

use super::enum_param;
use crate::AppState;
use crate::error::ApiResult;
use crate::extractors::ActingUser;

/// Query parameters for listing the release queue.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListReleaseQueueQuery {
    /// `Domestic` or `Foreign`.
    pub payment_type: Option<String>,
    /// Release state.
    pub status: Option<String>,
}

/// Body of the release and reject calls.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReleaseQueueIdsRequest {
    /// Queue items to act on.
    pub release_queue_ids: Vec<ReleaseQueueId>,
}

async fn list_release_queue(
    State(state): State<AppState>,
    Query(query): Query<ListReleaseQueueQuery>,
) -> ApiResult<Json<Vec<ReleaseQueueItem>>> {
    let filter = ReleaseFilter {
        payment_type: enum_param("PaymentType", query.payment_type.as_deref(), PaymentType::parse)?,
        status: enum_param("Status", query.status.as_deref(), ReleaseStatus::parse)?,
    };
    let items = state
        .with_store(move |store| ReleaseQueue::new(store).list(&filter))
        .await?;
    Ok(Json(items))
}

async fn get_release_item(
    State(state): State<AppState>,
    Path(id): Path<ReleaseQueueId>,
) -> ApiResult<Json<ReleaseQueueItem>> {
    let item = state
        .with_store(move |store| ReleaseQueue::new(store).get(id))
        .await?;
    Ok(Json(item))
}

async fn release(
    State(state): State<AppState>,
    user: ActingUser,
    Json(request): Json<ReleaseQueueIdsRequest>,
) -> ApiResult<Json<BatchSummary>> {
    let acting_user = user.clone();
    let summary = state
        .with_store(move |store| {
            ReleaseQueue::new(store).release(
                &request.release_queue_ids,
                acting_user.as_str(),
                Utc::now(),
            )
        })
        .await?;
    info!(
        batch_id = %summary.batch_id,
        count = summary.count,
        total_amount = %summary.total_amount,
        user = %user.as_str(),
        "Batch released"
    );
    Ok(Json(summary))
}

async fn reject(
    State(state): State<AppState>,
    user: ActingUser,
    Json(request): Json<ReleaseQueueIdsRequest>,
) -> ApiResult<Json<BulkOutcome<ReleaseQueueId>>> {
    let outcome = state
        .with_store(move |store| ReleaseQueue::new(store).reject(&request.release_queue_ids))
        .await?;
    info!(
        user = %user.as_str(),
        processed = outcome.processed.len(),
        skipped = outcome.skipped.len(),
        "Release items rejected"
    );
    Ok(Json(outcome))
}

/// Creates release queue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/release-queue", get(list_release_queue))
        .route("/release-queue/release", post(release))
        .route("/release-queue/reject", post(reject))
        .route("/release-queue/{id}", get(get_release_item))
}
