//! Beneficiary endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use payflow_core::beneficiary::{
    Beneficiary, BeneficiaryFilter, BeneficiaryInput, BeneficiaryRegistry,
};
use payflow_core::duplicate::{BeneficiaryKeys, DuplicateCheck};
use payflow_core::verification::{AccountDetails, VerificationOutcome};
use payflow_shared::types::BeneficiaryId;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extractors::ActingUser;

/// Query parameters for listing beneficiaries.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBeneficiariesQuery {
    /// `true` or `false`.
    pub is_active: Option<String>,
}

impl ListBeneficiariesQuery {
    fn filter(&self) -> ApiResult<BeneficiaryFilter> {
        let is_active = match self.is_active.as_deref().map(str::trim) {
            None | Some("") => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(other) => {
                return Err(ApiError::validation(format!("unknown IsActive '{other}'")));
            }
        };
        Ok(BeneficiaryFilter { is_active })
    }
}

async fn list_beneficiaries(
    State(state): State<AppState>,
    Query(query): Query<ListBeneficiariesQuery>,
) -> ApiResult<Json<Vec<Beneficiary>>> {
    let filter = query.filter()?;
    let beneficiaries = state
        .with_store(move |store| BeneficiaryRegistry::new(store).list(filter))
        .await?;
    Ok(Json(beneficiaries))
}

async fn create_beneficiary(
    State(state): State<AppState>,
    user: ActingUser,
    Json(input): Json<BeneficiaryInput>,
) -> ApiResult<impl IntoResponse> {
    let acting_user = user.clone();
    let id = state
        .with_store(move |store| {
            BeneficiaryRegistry::new(store).create(&input, acting_user.as_str(), Utc::now())
        })
        .await?;
    info!(beneficiary_id = %id, user = %user.as_str(), "Beneficiary created");
    Ok((StatusCode::CREATED, Json(json!({ "Id": id }))))
}

async fn get_beneficiary(
    State(state): State<AppState>,
    Path(id): Path<BeneficiaryId>,
) -> ApiResult<Json<Beneficiary>> {
    let beneficiary = state
        .with_store(move |store| BeneficiaryRegistry::new(store).get(id))
        .await?;
    Ok(Json(beneficiary))
}

async fn update_beneficiary(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<BeneficiaryId>,
    Json(input): Json<BeneficiaryInput>,
) -> ApiResult<Json<Beneficiary>> {
    let acting_user = user.clone();
    let beneficiary = state
        .with_store(move |store| {
            BeneficiaryRegistry::new(store).update(id, &input, acting_user.as_str(), Utc::now())
        })
        .await?;
    info!(beneficiary_id = %id, user = %user.as_str(), "Beneficiary updated");
    Ok(Json(beneficiary))
}

async fn delete_beneficiary(
    State(state): State<AppState>,
    Path(id): Path<BeneficiaryId>,
) -> ApiResult<StatusCode> {
    state
        .with_store(move |store| BeneficiaryRegistry::new(store).remove(id))
        .await?;
    info!(beneficiary_id = %id, "Beneficiary deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn duplicate_check(
    State(state): State<AppState>,
    Query(keys): Query<BeneficiaryKeys>,
) -> ApiResult<Json<DuplicateCheck>> {
    let is_duplicate = state
        .with_store(move |store| BeneficiaryRegistry::new(store).duplicate_check(&keys))
        .await?;
    Ok(Json(DuplicateCheck { is_duplicate }))
}

async fn account_verification(Query(details): Query<AccountDetails>) -> Json<VerificationOutcome> {
    Json(BeneficiaryRegistry::verify(&details))
}

/// Creates beneficiary routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/beneficiaries",
            get(list_beneficiaries).post(create_beneficiary),
        )
        .route("/beneficiaries/duplicate-check", get(duplicate_check))
        .route("/beneficiaries/account-verification", get(account_verification))
        .route(
            "/beneficiaries/{id}",
            get(get_beneficiary)
                .put(update_beneficiary)
                .delete(delete_beneficiary),
        )
}
