//! Bank receipts: settlement notices matched to payments.

use chrono::{DateTime, NaiveDate, Utc};
use payflow_shared::types::{BankReceiptId, PaymentId, Validity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payment::types::Payment;

/// Bank-side outcome of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReceiptStatus {
    /// Paid.
    Accepted,
    /// Bounced.
    Rejected,
}

/// How well a receipt lines up with a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Matched to exactly one payment.
    Matched,
    /// No payment found.
    Unmatched,
    /// Matched with differences.
    PartiallyMatched,
}

/// Acknowledgement state of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AckStatus {
    /// Acknowledged.
    Accepted,
    /// Refused.
    Rejected,
}

/// A settlement notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankReceipt {
    /// Receipt ID.
    pub id: BankReceiptId,
    /// Bank reference, e.g. `BNK-000001`.
    pub bank_ref: String,
    /// Payment this receipt settles.
    pub matched_payment_id: PaymentId,
    /// Payment reference at import time.
    pub payment_ref: String,
    /// Payee name at import time.
    pub beneficiary_name: String,
    /// Amount.
    pub amount: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// Payment method.
    #[serde(default)]
    pub method: Option<String>,
    /// Bank-side outcome.
    pub status: ReceiptStatus,
    /// Reason text for the outcome.
    #[serde(default)]
    pub status_reason: String,
    /// Value date.
    pub value_date: NaiveDate,
    /// When the receipt arrived.
    pub received_date: DateTime<Utc>,
    /// Match state.
    pub match_status: MatchStatus,
    /// Acknowledgement state.
    pub ack_status: AckStatus,
    /// Validity window.
    #[serde(flatten)]
    pub validity: Validity,
}

impl BankReceipt {
    /// Builds an accepted, matched receipt for `payment`.
    #[must_use]
    pub fn matched(
        id: BankReceiptId,
        payment: &Payment,
        import: &ReceiptImport,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            bank_ref: format!("BNK-{:06}", id.into_inner()),
            matched_payment_id: payment.id,
            payment_ref: payment.reference.clone(),
            beneficiary_name: payment.beneficiary_name.clone(),
            amount: payment.amount,
            currency: payment.currency.clone(),
            method: payment.payment_method.clone(),
            status: ReceiptStatus::Accepted,
            status_reason: import.status_reason.clone().unwrap_or_default(),
            value_date: import.value_date.unwrap_or_else(|| now.date_naive()),
            received_date: now,
            match_status: MatchStatus::Matched,
            ack_status: AckStatus::Accepted,
            validity: Validity::open_from(now),
        }
    }
}

/// Optional details supplied with a receipt import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReceiptImport {
    /// Value date; defaults to the import date.
    #[serde(default)]
    pub value_date: Option<NaiveDate>,
    /// Reason text.
    #[serde(default)]
    pub status_reason: Option<String>,
}
