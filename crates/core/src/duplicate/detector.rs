//! Exact-match duplicate detection.
//!
//! A record is a duplicate if it matches an existing one on ANY supplied
//! key. Absent or blank keys are skipped; they never act as wildcards.

use chrono::NaiveDate;
use payflow_shared::types::BeneficiaryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::beneficiary::Beneficiary;
use crate::payment::Payment;

/// Match keys for a beneficiary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BeneficiaryKeys {
    /// Account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// IBAN.
    #[serde(default, rename = "IBAN")]
    pub iban: Option<String>,
    /// SWIFT / BIC code.
    #[serde(default)]
    pub swift_code: Option<String>,
}

/// Match keys for a payment.
///
/// The beneficiary / amount / date triple only matches when all three are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentKeys {
    /// Supplier invoice number.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Beneficiary.
    #[serde(default)]
    pub beneficiary_id: Option<BeneficiaryId>,
    /// Amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Payment date.
    #[serde(default, rename = "Date", alias = "PaymentDate")]
    pub payment_date: Option<NaiveDate>,
}

/// Duplicate check response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DuplicateCheck {
    /// True if any existing record matched.
    pub is_duplicate: bool,
}

fn key(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

fn same(candidate: Option<&str>, existing: Option<&String>) -> bool {
    candidate.is_some() && candidate == existing.map(String::as_str)
}

/// Stateless duplicate detector.
pub struct DuplicateDetector;

impl DuplicateDetector {
    /// Returns true if any beneficiary matches on account number, IBAN, or SWIFT code.
    pub fn beneficiary_exists<'a>(
        existing: impl IntoIterator<Item = &'a Beneficiary>,
        keys: &BeneficiaryKeys,
    ) -> bool {
        let account_number = key(keys.account_number.as_ref());
        let iban = key(keys.iban.as_ref());
        let swift_code = key(keys.swift_code.as_ref());
        if account_number.is_none() && iban.is_none() && swift_code.is_none() {
            return false;
        }

        existing.into_iter().any(|b| {
            same(account_number, b.account_number.as_ref())
                || same(iban, b.iban.as_ref())
                || same(swift_code, b.swift_code.as_ref())
        })
    }

    /// Returns true if any payment matches on invoice number or on the
    /// beneficiary / amount / date triple.
    pub fn payment_exists<'a>(
        existing: impl IntoIterator<Item = &'a Payment>,
        keys: &PaymentKeys,
    ) -> bool {
        let invoice_number = key(keys.invoice_number.as_ref());
        let triple = match (keys.beneficiary_id, keys.amount, keys.payment_date) {
            (Some(beneficiary_id), Some(amount), Some(date)) => {
                Some((beneficiary_id, amount, date))
            }
            _ => None,
        };
        if invoice_number.is_none() && triple.is_none() {
            return false;
        }

        existing.into_iter().any(|p| {
            same(invoice_number, p.invoice_number.as_ref())
                || triple.is_some_and(|(beneficiary_id, amount, date)| {
                    p.beneficiary_id == beneficiary_id
                        && p.amount == amount
                        && p.payment_date == date
                })
        })
    }
}
