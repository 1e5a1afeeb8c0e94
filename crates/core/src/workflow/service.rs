//! Workflow service for payment state transitions.
//!
//! This module implements the core state machine logic for moving a
//! payment through the approval workflow.

use crate::workflow::error::WorkflowError;
use crate::workflow::types::PaymentStatus;

/// Stateless service for managing payment workflow transitions.
///
/// Direct operations (`submit`) validate and fail loudly. Transitions that
/// follow from an action on a derived record (approval, release item) go
/// through [`WorkflowService::propagate`], which never fails.
pub struct WorkflowService;

impl WorkflowService {
    /// Submit a draft payment for approval.
    ///
    /// # Returns
    /// * `Ok(PaymentStatus::PendingApproval)` if the payment is a draft
    /// * `Err(WorkflowError::InvalidTransition)` otherwise
    pub fn submit(current_status: PaymentStatus) -> Result<PaymentStatus, WorkflowError> {
        match current_status {
            PaymentStatus::Draft => Ok(PaymentStatus::PendingApproval),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: PaymentStatus::PendingApproval,
            }),
        }
    }

    /// Settle a payment against a bank receipt.
    ///
    /// Reconciliation overrides whatever state the payment was in.
    #[must_use]
    pub fn settle(_current_status: PaymentStatus) -> PaymentStatus {
        PaymentStatus::Settled
    }

    /// Resolve a status change triggered by a derived record.
    ///
    /// Returns `Some(target)` when the payment should move, `None` when the
    /// change is a no-op (already there, or not a legal move from here).
    #[must_use]
    pub fn propagate(current: PaymentStatus, target: PaymentStatus) -> Option<PaymentStatus> {
        if current != target && Self::is_valid_transition(current, target) {
            Some(target)
        } else {
            None
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Draft → PendingApproval (submit)
    /// - PendingApproval → Approved | Rejected (approval decision)
    /// - Approved → Released | Rejected (release queue decision)
    /// - any non-settled status → Settled (bank receipt)
    #[must_use]
    pub fn is_valid_transition(from: PaymentStatus, to: PaymentStatus) -> bool {
        matches!(
            (from, to),
            (PaymentStatus::Draft, PaymentStatus::PendingApproval)
                | (
                    PaymentStatus::PendingApproval,
                    PaymentStatus::Approved | PaymentStatus::Rejected
                )
                | (
                    PaymentStatus::Approved,
                    PaymentStatus::Released | PaymentStatus::Rejected
                )
        ) || (to == PaymentStatus::Settled && from != PaymentStatus::Settled)
    }
}
