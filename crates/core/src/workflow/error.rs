//! Workflow error types for the payment lifecycle.
//!
//! This module defines all error types that can occur during
//! workflow operations such as submissions, approvals, releases, and
//! the supporting beneficiary and configuration updates.

use payflow_shared::types::{
    ApprovalId, BeneficiaryId, ConfigurationId, PaymentId, ReleaseQueueId,
};
use thiserror::Error;

use crate::store::StoreError;
use crate::workflow::types::PaymentStatus;

/// Errors that can occur during workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: PaymentStatus,
        /// The attempted target status.
        to: PaymentStatus,
    },

    /// Attempted to edit a payment outside of Draft.
    #[error("Payment {id} cannot be edited in status {status}")]
    NotEditable {
        /// The payment.
        id: PaymentId,
        /// Its current status.
        status: PaymentStatus,
    },

    /// Payment not found.
    #[error("Payment {0} not found")]
    PaymentNotFound(PaymentId),

    /// Beneficiary not found.
    #[error("Beneficiary {0} not found")]
    BeneficiaryNotFound(BeneficiaryId),

    /// Approval not found.
    #[error("Approval {0} not found")]
    ApprovalNotFound(ApprovalId),

    /// Release queue item not found.
    #[error("Release queue item {0} not found")]
    ReleaseItemNotFound(ReleaseQueueId),

    /// Configuration entry not found.
    #[error("Configuration {0} not found")]
    ConfigurationNotFound(ConfigurationId),

    /// A caller-supplied payment reference collides with an existing one.
    #[error("Payment reference {0} is already in use")]
    ReferenceInUse(String),

    /// Malformed input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store read or write failure.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl WorkflowError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } | Self::NotEditable { .. } | Self::Validation(_) => 400,

            Self::PaymentNotFound(_)
            | Self::BeneficiaryNotFound(_)
            | Self::ApprovalNotFound(_)
            | Self::ReleaseItemNotFound(_)
            | Self::ConfigurationNotFound(_) => 404,

            Self::ReferenceInUse(_) => 409,

            Self::Persistence(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::NotEditable { .. } => "NOT_EDITABLE",
            Self::PaymentNotFound(_)
            | Self::BeneficiaryNotFound(_)
            | Self::ApprovalNotFound(_)
            | Self::ReleaseItemNotFound(_)
            | Self::ConfigurationNotFound(_) => "NOT_FOUND",
            Self::ReferenceInUse(_) => "REFERENCE_IN_USE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
        }
    }
}

impl From<StoreError> for WorkflowError {
    fn from(err: StoreError) -> Self {
        Self::Persistence(err.to_string())
    }
}
