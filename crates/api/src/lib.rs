//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes under `/api/v1`
//! - The acting-user extractor
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use payflow_core::Store;
use payflow_shared::AppError;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The record store.
    pub store: Arc<Store>,
}

impl AppState {
    /// Wraps a store for sharing across handlers.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Runs `f` against the store on the blocking thread pool.
    ///
    /// Store calls take the store lock and write the backing file, so they
    /// stay off the async workers.
    pub async fn with_store<T, E, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&Store) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: Into<ApiError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || f(&store))
            .await
            .map_err(|e| AppError::Internal(format!("store task failed: {e}")))?
            .map_err(Into::into)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Utc;
    use payflow_core::WorkflowError;

    fn state() -> AppState {
        AppState::new(Store::in_memory(payflow_db::demo_state(Utc::now())))
    }

    #[tokio::test]
    async fn test_with_store_returns_closure_result() {
        let count = state()
            .with_store(|store| store.read(|s| s.beneficiaries.len()))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_with_store_maps_domain_errors() {
        let err = state()
            .with_store(|_| Err::<(), _>(WorkflowError::Validation("bad".into())))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_with_store_panic_is_internal_error_and_store_stays_usable() {
        let state = state();

        let err = state
            .with_store(|_| -> Result<(), WorkflowError> { panic!("boom") })
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let count = state
            .with_store(|store| store.read(|s| s.configurations.len()))
            .await
            .unwrap();
        assert_eq!(count, 5);
    }
}
