//! Core business logic for Payflow.
//!
//! This crate contains the payment approval and release workflow with ZERO
//! web or file dependencies. Persistence goes through the `StoreBackend`
//! trait; the JSON-file backend lives in `payflow-db`.
//!
//! # Modules
//!
//! - `workflow` - Status enums, transition rules and the error taxonomy
//! - `verification` - Simulated account verification
//! - `duplicate` - Duplicate detection for payees and payments
//! - `settings` - Configuration entries read at call time
//! - `beneficiary` - Payee registry
//! - `payment` - Payment lifecycle and bank receipts
//! - `approval` - Approval requests, thresholds and escalation
//! - `release` - Batch release queue
//! - `dashboard` - Point-in-time operational summary
//! - `store` - Transactional record store

pub mod approval;
pub mod beneficiary;
pub mod dashboard;
pub mod duplicate;
pub mod payment;
pub mod release;
pub mod settings;
pub mod store;
pub mod verification;
pub mod workflow;

#[cfg(test)]
mod fixtures;

pub use store::{Store, StoreBackend, StoreError, StoreState};
pub use workflow::WorkflowError;
