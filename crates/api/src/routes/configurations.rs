//! Configuration endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use payflow_core::settings::{ConfigEntry, SettingsService};
use payflow_shared::types::ConfigurationId;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extractors::ActingUser;

/// Body of a configuration update.
///
/// `Value` may be sent as a string, number or boolean.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateConfigurationRequest {
    /// New value.
    pub value: Value,
}

impl UpdateConfigurationRequest {
    fn value_text(&self) -> ApiResult<String> {
        match &self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(ApiError::validation(format!(
                "Value must be a string, number or boolean, got {other}"
            ))),
        }
    }
}

async fn list_configurations(State(state): State<AppState>) -> ApiResult<Json<Vec<ConfigEntry>>> {
    let entries = state
        .with_store(|store| SettingsService::new(store).list())
        .await?;
    Ok(Json(entries))
}

async fn update_configuration(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<ConfigurationId>,
    Json(request): Json<UpdateConfigurationRequest>,
) -> ApiResult<Json<ConfigEntry>> {
    let value = request.value_text()?;
    let entry = state
        .with_store(move |store| SettingsService::new(store).update(id, &value))
        .await?;
    info!(
        configuration_id = %id,
        key = %entry.key,
        value = %entry.value,
        user = %user.as_str(),
        "Configuration updated"
    );
    Ok(Json(entry))
}

/// Creates configuration routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/configurations", get(list_configurations))
        .route("/configurations/{id}", put(update_configuration))
}
