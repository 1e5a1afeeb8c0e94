//! Demo data endpoints.

use axum::{Json, Router, extract::State, routing::post};
use chrono::Utc;
use payflow_core::settings::SettingsService;
use serde_json::{Value, json};
use tracing::warn;

use crate::AppState;
use crate::error::ApiResult;
use crate::extractors::ActingUser;

/// Replaces every record with the demo seed.
async fn reset_demo(State(state): State<AppState>, user: ActingUser) -> ApiResult<Json<Value>> {
    let seed = payflow_db::demo_state(Utc::now());
    state
        .with_store(move |store| SettingsService::new(store).reset_to(seed))
        .await?;
    warn!(user = %user.as_str(), "Demo data reset");
    Ok(Json(json!({ "Message": "Demo data reset" })))
}

/// Creates demo routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/demo/reset-demo", post(reset_demo))
}
