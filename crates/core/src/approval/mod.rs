//! Approval workflow: requests opened at submission, decided in bulk.
//!
//! # Modules
//!
//! - `types` - Approval records, views and filters
//! - `engine` - Threshold flags, approver slots, overdue and escalation rules
//! - `service` - Bulk approve / reject and queries over the store

pub mod engine;
pub mod service;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::ApprovalEngine;
pub use service::ApprovalService;
pub use types::{Approval, ApprovalFilter, ApprovalView};
