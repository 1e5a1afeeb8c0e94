//! Release queue items and batch results.

use chrono::{DateTime, Utc};
use payflow_shared::types::{ApprovalId, PaymentId, ReleaseQueueId, Validity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::approval::Approval;
use crate::verification::VerificationStatus;
use crate::workflow::types::{ApprovalStatus, PaymentType, ReleaseStatus};

/// An approved payment waiting to be released to the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReleaseQueueItem {
    /// Item ID.
    pub id: ReleaseQueueId,
    /// Approval this item came from.
    pub approval_id: ApprovalId,
    /// Payment to release.
    pub payment_id: PaymentId,
    /// Approval state when queued.
    pub approval_status: ApprovalStatus,
    /// Release state.
    pub release_status: ReleaseStatus,
    /// Batch the item went out in; fixed once released.
    #[serde(default)]
    pub batch_id: Option<String>,
    /// Releaser.
    #[serde(default)]
    pub released_by: Option<String>,
    /// Release time.
    #[serde(default)]
    pub released_date: Option<DateTime<Utc>>,
    /// Payment reference.
    pub payment_ref: String,
    /// Payee name.
    pub beneficiary_name: String,
    /// Amount.
    pub amount: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// Domestic or foreign.
    pub payment_type: PaymentType,
    /// Payee verification state.
    #[serde(default)]
    pub verification_status: VerificationStatus,
    /// Payment was flagged as a duplicate.
    #[serde(default)]
    pub duplicate_flag: bool,
    /// Amount was above the anomaly threshold.
    #[serde(default)]
    pub out_of_range_flag: bool,
    /// Approval comments.
    #[serde(default)]
    pub comments: String,
    /// Approval deadline.
    pub deadline: DateTime<Utc>,
    /// Payment creator.
    pub created_by: String,
    /// Submission time.
    pub created_date: DateTime<Utc>,
    /// Validity window.
    #[serde(flatten)]
    pub validity: Validity,
}

impl ReleaseQueueItem {
    /// Queues an approved approval for release.
    #[must_use]
    pub fn queue(id: ReleaseQueueId, approval: &Approval, now: DateTime<Utc>) -> Self {
        Self {
            id,
            approval_id: approval.id,
            payment_id: approval.payment_id,
            approval_status: approval.status,
            release_status: ReleaseStatus::Pending,
            batch_id: None,
            released_by: None,
            released_date: None,
            payment_ref: approval.payment_ref.clone(),
            beneficiary_name: approval.beneficiary_name.clone(),
            amount: approval.amount,
            currency: approval.currency.clone(),
            payment_type: approval.payment_type,
            verification_status: approval.verification_status,
            duplicate_flag: approval.is_duplicate,
            out_of_range_flag: approval.is_out_of_range,
            comments: approval.comments.clone(),
            deadline: approval.deadline,
            created_by: approval.created_by.clone(),
            created_date: approval.created_date,
            validity: Validity::open_from(now),
        }
    }
}

/// Result of one release call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchSummary {
    /// Batch identifier, e.g. `BATCH-3F9A01C2`.
    pub batch_id: String,
    /// Items released in this call.
    pub count: usize,
    /// Sum of the released amounts.
    pub total_amount: Decimal,
}

/// Filter for listing the release queue. Every supplied field must match.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseFilter {
    /// Domestic or foreign.
    pub payment_type: Option<PaymentType>,
    /// Release state.
    pub status: Option<ReleaseStatus>,
}

impl ReleaseFilter {
    /// Returns true if `item` passes the filter.
    #[must_use]
    pub fn matches(&self, item: &ReleaseQueueItem) -> bool {
        self.payment_type.is_none_or(|t| item.payment_type == t)
            && self.status.is_none_or(|s| item.release_status == s)
    }
}
