//! Duplicate detection for beneficiaries and payments.

pub mod detector;

#[cfg(test)]
mod detector_props;

pub use detector::{BeneficiaryKeys, DuplicateCheck, DuplicateDetector, PaymentKeys};
