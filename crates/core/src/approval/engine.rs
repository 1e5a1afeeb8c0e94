//! Approval rules: flags derived at submission and at read time.

use chrono::{DateTime, Utc};
use payflow_shared::types::{ApprovalId, Validity, far_future};
use rust_decimal::Decimal;

use crate::approval::types::{Approval, ApprovalFilter, ApprovalView};
use crate::beneficiary::Beneficiary;
use crate::payment::Payment;
use crate::settings::Settings;
use crate::verification::VerificationStatus;
use crate::workflow::types::{ApprovalStatus, PaymentType};

/// Stateless approval rules.
pub struct ApprovalEngine;

impl ApprovalEngine {
    /// CFO sign-off is required at or above the threshold.
    #[must_use]
    pub fn cfo_required(amount: Decimal, settings: &Settings<'_>) -> bool {
        amount >= settings.cfo_threshold()
    }

    /// Amounts strictly above the anomaly threshold are out of range.
    #[must_use]
    pub fn out_of_range(amount: Decimal, settings: &Settings<'_>) -> bool {
        amount > settings.anomaly_threshold()
    }

    /// Opens the approval for a payment being submitted.
    ///
    /// Verification fields come from the payee's current record, or stay
    /// Pending when the payee is gone.
    #[must_use]
    pub fn open(
        id: ApprovalId,
        payment: &Payment,
        beneficiary: Option<&Beneficiary>,
        settings: &Settings<'_>,
        now: DateTime<Utc>,
    ) -> Approval {
        let (verification_status, verification_note) = beneficiary
            .map(|b| (b.verification_status, b.verification_note.clone()))
            .unwrap_or((VerificationStatus::Pending, String::new()));

        Approval {
            id,
            payment_id: payment.id,
            payment_ref: payment.reference.clone(),
            beneficiary_name: payment.beneficiary_name.clone(),
            amount: payment.amount,
            currency: payment.currency.clone(),
            payment_type: payment.payment_type,
            status: ApprovalStatus::Pending,
            approver1: None,
            approver2: None,
            approved_count: 0,
            cfo_approval_required: Self::cfo_required(payment.amount, settings),
            cfo_approved: false,
            is_out_of_range: Self::out_of_range(payment.amount, settings),
            is_duplicate: payment.is_duplicate,
            is_escalated: false,
            deadline: now
                .checked_add_signed(settings.escalation_window())
                .map_or_else(far_future, |deadline| deadline.min(far_future())),
            verification_status,
            verification_note,
            comments: String::new(),
            created_by: payment.created_by.clone(),
            created_date: now,
            validity: Validity::open_from(now),
        }
    }

    /// Applies one approve action by `user`.
    ///
    /// Fills the first empty approver slot; the second slot only takes a
    /// user different from the first. Returns false for rejected approvals,
    /// which are left untouched.
    pub fn record_approval(approval: &mut Approval, user: &str) -> bool {
        if approval.status == ApprovalStatus::Rejected {
            return false;
        }

        approval.status = ApprovalStatus::Approved;
        approval.approved_count += 1;
        if approval.approver1.is_none() {
            approval.approver1 = Some(user.to_string());
        } else if approval.approver2.is_none() && approval.approver1.as_deref() != Some(user) {
            approval.approver2 = Some(user.to_string());
        }
        true
    }

    /// Pending and past the deadline.
    #[must_use]
    pub fn is_overdue(approval: &Approval, now: DateTime<Utc>) -> bool {
        approval.status == ApprovalStatus::Pending && approval.deadline < now
    }

    /// Escalated if flagged, or overdue at `now`.
    #[must_use]
    pub fn is_escalated_at(approval: &Approval, now: DateTime<Utc>) -> bool {
        approval.is_escalated || Self::is_overdue(approval, now)
    }

    /// Foreign payment under dual authorization with fewer than two approvers.
    #[must_use]
    pub fn awaiting_second_approver(approval: &Approval, settings: &Settings<'_>) -> bool {
        approval.payment_type == PaymentType::Foreign
            && settings.dual_auth_foreign_payments()
            && approval.status != ApprovalStatus::Rejected
            && (approval.approver1.is_none() || approval.approver2.is_none())
    }

    /// Evaluates the time-dependent flags of `approval` at `now`.
    #[must_use]
    pub fn view(approval: &Approval, settings: &Settings<'_>, now: DateTime<Utc>) -> ApprovalView {
        let mut evaluated = approval.clone();
        evaluated.is_escalated = Self::is_escalated_at(approval, now);
        ApprovalView {
            is_overdue: Self::is_overdue(approval, now),
            awaiting_second_approver: Self::awaiting_second_approver(approval, settings),
            approval: evaluated,
        }
    }

    /// Returns true if `approval` passes `filter` at `now`.
    #[must_use]
    pub fn matches(filter: &ApprovalFilter, approval: &Approval, now: DateTime<Utc>) -> bool {
        filter.status.is_none_or(|s| approval.status == s)
            && filter
                .cfo_required
                .is_none_or(|c| approval.cfo_approval_required == c)
            && filter.payment_type.is_none_or(|t| approval.payment_type == t)
            && filter
                .overdue
                .is_none_or(|o| Self::is_overdue(approval, now) == o)
    }
}
