//! Payment workflow state machine for Payflow.
//!
//! This module implements the payment lifecycle transitions and the
//! error taxonomy shared by every workflow operation.
//!
//! # Modules
//!
//! - `types` - Status enums (PaymentStatus, ApprovalStatus, ReleaseStatus, PaymentType)
//! - `error` - Workflow error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::{ApprovalStatus, BulkOutcome, PaymentStatus, PaymentType, ReleaseStatus};
