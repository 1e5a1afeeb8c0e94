//! Payment records and inputs.

use chrono::{DateTime, NaiveDate, Utc};
use payflow_shared::types::{BeneficiaryId, PaymentId, Validity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::beneficiary::Beneficiary;
use crate::duplicate::PaymentKeys;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::{PaymentStatus, PaymentType};

/// An instruction to pay a beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Unique reference.
    pub reference: String,
    /// Supplier invoice number.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Date the payment is due.
    pub payment_date: NaiveDate,
    /// Amount in `currency`.
    pub amount: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// Domestic or foreign.
    pub payment_type: PaymentType,
    /// Payee.
    pub beneficiary_id: BeneficiaryId,
    /// Payee name at creation time.
    pub beneficiary_name: String,
    /// Payee sort code at creation time.
    #[serde(default)]
    pub sort_code: Option<String>,
    /// Payee account number at creation time.
    #[serde(default)]
    pub account_number: Option<String>,
    /// Payee IBAN at creation time.
    #[serde(default, rename = "IBAN")]
    pub iban: Option<String>,
    /// Payee SWIFT code at creation time.
    #[serde(default)]
    pub swift_code: Option<String>,
    /// Payment method, e.g. "Faster Payments".
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Remittance advice text.
    #[serde(default)]
    pub remittance_advice: Option<String>,
    /// Cost centre.
    #[serde(default)]
    pub cost_centre: Option<String>,
    /// General ledger code.
    #[serde(default, rename = "GLCode")]
    pub gl_code: Option<String>,
    /// Reason code.
    #[serde(default)]
    pub reason_code: Option<String>,
    /// Whether the payment came from the ERP.
    #[serde(default, rename = "IsERP")]
    pub is_erp: bool,
    /// ERP reference.
    #[serde(default, rename = "ERPRef")]
    pub erp_ref: Option<String>,
    /// Lifecycle status.
    pub status: PaymentStatus,
    /// Whether a matching payment existed at creation.
    #[serde(default)]
    pub is_duplicate: bool,
    /// Creator.
    pub created_by: String,
    /// Creation time.
    pub created_date: DateTime<Utc>,
    /// Validity window.
    #[serde(flatten)]
    pub validity: Validity,
}

impl Payment {
    /// Copies the payee details from `beneficiary`.
    pub fn snapshot_beneficiary(&mut self, beneficiary: &Beneficiary) {
        self.beneficiary_id = beneficiary.id;
        self.beneficiary_name.clone_from(&beneficiary.beneficiary_name);
        self.sort_code.clone_from(&beneficiary.sort_code);
        self.account_number.clone_from(&beneficiary.account_number);
        self.iban.clone_from(&beneficiary.iban);
        self.swift_code.clone_from(&beneficiary.swift_code);
    }

    /// Overwrites the editable fields from `input`.
    ///
    /// Status, ID, reference and audit fields are left alone.
    pub fn apply(&mut self, input: &PaymentInput) {
        self.invoice_number.clone_from(&input.invoice_number);
        self.payment_date = input.payment_date;
        self.amount = input.amount;
        self.currency.clone_from(&input.currency);
        self.payment_type = input.payment_type;
        self.payment_method.clone_from(&input.payment_method);
        self.remittance_advice.clone_from(&input.remittance_advice);
        self.cost_centre.clone_from(&input.cost_centre);
        self.gl_code.clone_from(&input.gl_code);
        self.reason_code.clone_from(&input.reason_code);
        self.is_erp = input.is_erp;
        self.erp_ref.clone_from(&input.erp_ref);
    }
}

/// Editable payment fields, as sent by create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentInput {
    /// Reference; generated when absent.
    #[serde(default)]
    pub reference: Option<String>,
    /// Supplier invoice number.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Date the payment is due.
    pub payment_date: NaiveDate,
    /// Amount.
    pub amount: Decimal,
    /// ISO currency code.
    pub currency: String,
    /// Domestic or foreign.
    pub payment_type: PaymentType,
    /// Payee.
    pub beneficiary_id: BeneficiaryId,
    /// Payment method.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Remittance advice text.
    #[serde(default)]
    pub remittance_advice: Option<String>,
    /// Cost centre.
    #[serde(default)]
    pub cost_centre: Option<String>,
    /// General ledger code.
    #[serde(default, rename = "GLCode")]
    pub gl_code: Option<String>,
    /// Reason code.
    #[serde(default)]
    pub reason_code: Option<String>,
    /// Whether the payment came from the ERP.
    #[serde(default, rename = "IsERP")]
    pub is_erp: bool,
    /// ERP reference.
    #[serde(default, rename = "ERPRef")]
    pub erp_ref: Option<String>,
}

impl PaymentInput {
    /// Rejects inputs no payment could be built from.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.amount <= Decimal::ZERO {
            return Err(WorkflowError::Validation(
                "Amount must be greater than zero".to_string(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(WorkflowError::Validation("Currency is required".to_string()));
        }
        if let Some(reference) = &self.reference
            && reference.trim().is_empty()
        {
            return Err(WorkflowError::Validation(
                "Reference cannot be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Keys used for duplicate detection.
    #[must_use]
    pub fn duplicate_keys(&self) -> PaymentKeys {
        PaymentKeys {
            invoice_number: self.invoice_number.clone(),
            beneficiary_id: Some(self.beneficiary_id),
            amount: Some(self.amount),
            payment_date: Some(self.payment_date),
        }
    }
}

/// Generated reference for a payment without one, e.g. `PMT-000042`.
#[must_use]
pub fn generated_reference(id: PaymentId) -> String {
    format!("PMT-{:06}", id.into_inner())
}

/// Filter for listing payments. Every supplied field must match.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    /// Domestic or foreign.
    pub payment_type: Option<PaymentType>,
    /// Exact reference.
    pub reference: Option<String>,
    /// ERP origin.
    pub is_erp: Option<bool>,
    /// Lifecycle status.
    pub status: Option<PaymentStatus>,
    /// Creator.
    pub created_by: Option<String>,
}

impl PaymentFilter {
    /// Returns true if `payment` passes the filter.
    #[must_use]
    pub fn matches(&self, payment: &Payment) -> bool {
        self.payment_type.is_none_or(|t| payment.payment_type == t)
            && self
                .reference
                .as_ref()
                .is_none_or(|r| &payment.reference == r)
            && self.is_erp.is_none_or(|e| payment.is_erp == e)
            && self.status.is_none_or(|s| payment.status == s)
            && self
                .created_by
                .as_ref()
                .is_none_or(|c| &payment.created_by == c)
    }
}
