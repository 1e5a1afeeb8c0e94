//! API route definitions.

use axum::Router;

use crate::AppState;
use crate::error::{ApiError, ApiResult};

pub mod approvals;
pub mod bank_receipts;
pub mod beneficiaries;
pub mod configurations;
pub mod demo;
pub mod health;
pub mod payments;
pub mod release_queue;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(beneficiaries::routes())
        .merge(payments::routes())
        .merge(approvals::routes())
        .merge(release_queue::routes())
        .merge(bank_receipts::routes())
        .merge(configurations::routes())
        .merge(demo::routes())
}

/// Parses an optional enum query parameter, rejecting unknown values.
fn enum_param<T>(
    name: &str,
    raw: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> ApiResult<Option<T>> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(value) => parse(value)
            .map(Some)
            .ok_or_else(|| ApiError::validation(format!("unknown {name} '{value}'"))),
    }
}

/// Flag parameters only filter when spelled exactly `true`.
fn true_flag(raw: Option<&str>) -> Option<bool> {
    (raw == Some("true")).then_some(true)
}
