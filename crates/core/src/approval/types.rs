//! Approval records and read-time views.

use chrono::{DateTime, Utc};
use payflow_shared::types::{ApprovalId, PaymentId, Validity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::verification::VerificationStatus;
use crate::workflow::types::{ApprovalStatus, PaymentType};

/// An approval request opened when a payment is submitted.
///
/// The payment snapshot fields never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Approval {
    /// Approval ID.
    pub id: ApprovalId,
    /// Payment this approval decides.
    pub payment_id: PaymentId,
    /// Payment reference at submission.
    pub payment_ref: String,
    /// Payee name at submission.
    pub beneficiary_name: String,
    /// Amount at submission.
    pub amount: Decimal,
    /// Currency at submission.
    pub currency: String,
    /// Payment type at submission.
    pub payment_type: PaymentType,
    /// Decision state.
    pub status: ApprovalStatus,
    /// First approver.
    #[serde(default)]
    pub approver1: Option<String>,
    /// Second, distinct approver.
    #[serde(default)]
    pub approver2: Option<String>,
    /// Number of approve actions applied.
    #[serde(default)]
    pub approved_count: u32,
    /// Amount is at or above the CFO threshold.
    pub cfo_approval_required: bool,
    /// CFO has signed off. Never set by the workflow.
    #[serde(default)]
    pub cfo_approved: bool,
    /// Amount is above the anomaly threshold.
    pub is_out_of_range: bool,
    /// Payment was flagged as a duplicate.
    pub is_duplicate: bool,
    /// Stored escalation flag.
    #[serde(default)]
    pub is_escalated: bool,
    /// Decision due by.
    pub deadline: DateTime<Utc>,
    /// Payee verification state at submission.
    #[serde(default)]
    pub verification_status: VerificationStatus,
    /// Payee verification message at submission.
    #[serde(default)]
    pub verification_note: String,
    /// Free-text comments.
    #[serde(default)]
    pub comments: String,
    /// Payment creator.
    pub created_by: String,
    /// Submission time.
    pub created_date: DateTime<Utc>,
    /// Validity window.
    #[serde(flatten)]
    pub validity: Validity,
}

/// An approval with its time-dependent flags evaluated.
///
/// `IsEscalated` in the serialized form is the derived value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApprovalView {
    /// The approval.
    #[serde(flatten)]
    pub approval: Approval,
    /// Pending past its deadline.
    pub is_overdue: bool,
    /// Foreign payment under dual authorization still missing an approver.
    pub awaiting_second_approver: bool,
}

/// Filter for listing approvals. Every supplied field must match.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApprovalFilter {
    /// Decision state.
    pub status: Option<ApprovalStatus>,
    /// Only approvals needing CFO sign-off.
    pub cfo_required: Option<bool>,
    /// Domestic or foreign.
    pub payment_type: Option<PaymentType>,
    /// Only overdue (or not overdue) approvals.
    pub overdue: Option<bool>,
}
