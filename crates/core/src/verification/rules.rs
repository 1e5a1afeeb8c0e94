//! Account verification rules.
//!
//! A stand-in for a Confirmation-of-Payee check: an ordered list of rules
//! over the supplied bank details where the first failing rule wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verification state of a beneficiary's bank details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerificationStatus {
    /// Not verified yet.
    #[default]
    #[serde(alias = "Outstanding")]
    Pending,
    /// All rules passed.
    Passed,
    /// A rule failed.
    Failed,
}

impl VerificationStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bank details submitted for verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountDetails {
    /// Payee name.
    #[serde(default)]
    pub beneficiary_name: Option<String>,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// UK sort code, with or without hyphens.
    #[serde(default)]
    pub sort_code: Option<String>,
    /// Account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// International bank account number.
    #[serde(default, rename = "IBAN")]
    pub iban: Option<String>,
    /// SWIFT / BIC code.
    #[serde(default)]
    pub swift_code: Option<String>,
}

/// Outcome of a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// Passed or Failed.
    #[serde(rename = "VerificationStatus")]
    pub status: VerificationStatus,
    /// Human-readable reason.
    #[serde(rename = "VerificationMessage")]
    pub message: String,
}

impl VerificationOutcome {
    fn failed(message: &str) -> Self {
        Self {
            status: VerificationStatus::Failed,
            message: message.to_string(),
        }
    }

    fn passed() -> Self {
        Self {
            status: VerificationStatus::Passed,
            message: "Account verification successful".to_string(),
        }
    }

    /// Returns true if verification passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == VerificationStatus::Passed
    }
}

/// Minimum IBAN length accepted by the IBAN rule.
pub const MIN_IBAN_LENGTH: usize = 22;

/// Returns the field when it holds something other than whitespace.
fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// Stateless verifier for bank details.
pub struct AccountVerifier;

impl AccountVerifier {
    /// Runs the verification rules in order; the first failure wins.
    ///
    /// 1. GBP payee whose name contains "test" fails the CoP check.
    /// 2. Sort code ending in "00" (hyphens ignored) fails.
    /// 3. Account number whose last character is not an even digit fails.
    /// 4. IBAN starting with "ZZ" or shorter than 22 characters fails.
    #[must_use]
    pub fn verify(details: &AccountDetails) -> VerificationOutcome {
        let is_gbp = details.currency.as_deref() == Some("GBP");
        if is_gbp
            && let Some(name) = present(details.beneficiary_name.as_ref())
            && name.to_lowercase().contains("test")
        {
            return VerificationOutcome::failed("CoP check failed - name contains \"test\"");
        }

        if let Some(sort_code) = present(details.sort_code.as_ref())
            && sort_code.replace('-', "").ends_with("00")
        {
            return VerificationOutcome::failed("Sort code validation failed");
        }

        if let Some(account_number) = present(details.account_number.as_ref())
            && !ends_with_even_digit(account_number)
        {
            return VerificationOutcome::failed("Account number validation failed");
        }

        if let Some(iban) = present(details.iban.as_ref())
            && (iban.starts_with("ZZ") || iban.chars().count() < MIN_IBAN_LENGTH)
        {
            return VerificationOutcome::failed("IBAN validation failed");
        }

        VerificationOutcome::passed()
    }
}

/// A trailing non-digit counts as a failure, like an odd digit.
fn ends_with_even_digit(account_number: &str) -> bool {
    account_number
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .is_some_and(|d| d % 2 == 0)
}
