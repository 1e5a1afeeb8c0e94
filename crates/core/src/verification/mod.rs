//! Account verification simulator.
//!
//! Pure, deterministic pass/fail decision over a beneficiary's bank details.

pub mod rules;

#[cfg(test)]
mod rules_props;

pub use rules::{AccountDetails, AccountVerifier, VerificationOutcome, VerificationStatus};
