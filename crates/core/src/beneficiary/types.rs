//! Beneficiary records.

use chrono::{DateTime, Utc};
use payflow_shared::types::{BeneficiaryId, Validity};
use serde::{Deserialize, Serialize};

use crate::duplicate::BeneficiaryKeys;
use crate::verification::{AccountDetails, VerificationOutcome, VerificationStatus};

/// A payee and their bank details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Beneficiary {
    /// Beneficiary ID.
    pub id: BeneficiaryId,
    /// Payee name.
    pub beneficiary_name: String,
    /// UK sort code.
    #[serde(default)]
    pub sort_code: Option<String>,
    /// Account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// IBAN.
    #[serde(default, rename = "IBAN")]
    pub iban: Option<String>,
    /// SWIFT / BIC code.
    #[serde(default)]
    pub swift_code: Option<String>,
    /// ISO currency code.
    pub currency: String,
    /// ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Address line.
    #[serde(default)]
    pub address_line1: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Whether payments may target this payee.
    pub is_active: bool,
    /// Result of the last verification run.
    #[serde(default)]
    pub verification_status: VerificationStatus,
    /// Message of the last verification run.
    #[serde(default)]
    pub verification_note: String,
    /// Last editor.
    pub last_changed_by: String,
    /// Last edit time.
    pub last_changed_date: DateTime<Utc>,
    /// Validity window.
    #[serde(flatten)]
    pub validity: Validity,
}

impl Beneficiary {
    /// The bank details as submitted to the verifier.
    #[must_use]
    pub fn account_details(&self) -> AccountDetails {
        AccountDetails {
            beneficiary_name: Some(self.beneficiary_name.clone()),
            currency: Some(self.currency.clone()),
            sort_code: self.sort_code.clone(),
            account_number: self.account_number.clone(),
            iban: self.iban.clone(),
            swift_code: self.swift_code.clone(),
        }
    }

    /// Records a verification outcome, or resets to Pending when none ran.
    pub fn record_verification(&mut self, outcome: Option<VerificationOutcome>) {
        match outcome {
            Some(outcome) => {
                self.verification_status = outcome.status;
                self.verification_note = outcome.message;
            }
            None => {
                self.verification_status = VerificationStatus::Pending;
                self.verification_note = String::new();
            }
        }
    }
}

/// Editable beneficiary fields, as sent by create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BeneficiaryInput {
    /// Payee name.
    pub beneficiary_name: String,
    /// UK sort code.
    #[serde(default)]
    pub sort_code: Option<String>,
    /// Account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// IBAN.
    #[serde(default, rename = "IBAN")]
    pub iban: Option<String>,
    /// SWIFT / BIC code.
    #[serde(default)]
    pub swift_code: Option<String>,
    /// ISO currency code.
    pub currency: String,
    /// ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Address line.
    #[serde(default)]
    pub address_line1: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Active flag; new beneficiaries default to active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl BeneficiaryInput {
    /// Keys used for duplicate detection.
    #[must_use]
    pub fn duplicate_keys(&self) -> BeneficiaryKeys {
        BeneficiaryKeys {
            account_number: self.account_number.clone(),
            iban: self.iban.clone(),
            swift_code: self.swift_code.clone(),
        }
    }
}

/// Filter for listing beneficiaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeneficiaryFilter {
    /// Only active (or inactive) beneficiaries.
    pub is_active: Option<bool>,
}

impl BeneficiaryFilter {
    /// Returns true if `beneficiary` passes the filter.
    #[must_use]
    pub fn matches(&self, beneficiary: &Beneficiary) -> bool {
        self.is_active.is_none_or(|active| beneficiary.is_active == active)
    }
}
