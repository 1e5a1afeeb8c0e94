//! Workflow status types shared by payments, approvals, and the release queue.
//!
//! This module defines the status enums that drive the payment lifecycle
//! and the derived approval / release records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status in the approval workflow.
///
/// Payments progress through these states from creation to settlement.
/// The valid transitions are:
/// - Draft → PendingApproval (submit)
/// - PendingApproval → Approved (approve)
/// - PendingApproval → Rejected (reject)
/// - Approved → Released (release)
/// - Approved → Rejected (release queue reject)
/// - any → Settled (bank receipt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Payment is being drafted and can be modified.
    Draft,
    /// Payment has been submitted and waits for an approver.
    #[serde(alias = "Pending Approval")]
    PendingApproval,
    /// Payment has been approved and sits in the release queue.
    Approved,
    /// Payment was rejected (terminal for this cycle).
    Rejected,
    /// Payment was released to the bank in a batch.
    Released,
    /// Payment was reconciled against a bank receipt.
    Settled,
}

impl PaymentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingApproval => "PendingApproval",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Released => "Released",
            Self::Settled => "Settled",
        }
    }

    /// Parses a status from a string, ignoring case and spaces.
    pub fn parse(s: &str) -> Option<Self> {
        match s.replace(' ', "").to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pendingapproval" => Some(Self::PendingApproval),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "released" => Some(Self::Released),
            "settled" => Some(Self::Settled),
            _ => None,
        }
    }

    /// Returns true if the payment details can still be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true once the payment has left the bank-side boundary.
    ///
    /// Such payments only accept the receipt-driven move to `Settled`.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Released | Self::Settled)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment routing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    /// Same-country payment (sort code / account number).
    Domestic,
    /// Cross-border payment (IBAN / SWIFT).
    Foreign,
}

impl PaymentType {
    /// Returns the string representation of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "Domestic",
            Self::Foreign => "Foreign",
        }
    }

    /// Parses a payment type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "domestic" => Some(Self::Domestic),
            "foreign" => Some(Self::Foreign),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of an approval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// Waiting for an approver.
    Pending,
    /// Approved at least once.
    Approved,
    /// Rejected.
    Rejected,
}

impl ApprovalStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Release status of a queue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseStatus {
    /// Approved and waiting to be released.
    Pending,
    /// Released in a batch.
    Released,
    /// Pulled from the queue.
    Rejected,
}

impl ReleaseStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Released => "Released",
            Self::Rejected => "Rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "released" => Some(Self::Released),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-id result of a bulk operation.
///
/// Ids that were unknown or not eligible land in `skipped`; they never
/// roll back the ids that were processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BulkOutcome<I> {
    /// Ids the operation applied to.
    pub processed: Vec<I>,
    /// Ids that were skipped.
    pub skipped: Vec<I>,
}

impl<I> Default for BulkOutcome<I> {
    fn default() -> Self {
        Self {
            processed: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<I> BulkOutcome<I> {
    /// Records an id as processed.
    pub fn mark_processed(&mut self, id: I) {
        self.processed.push(id);
    }

    /// Records an id as skipped.
    pub fn mark_skipped(&mut self, id: I) {
        self.skipped.push(id);
    }
}
