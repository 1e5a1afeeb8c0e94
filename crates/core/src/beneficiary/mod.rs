//! Beneficiary registry: payees, their bank details and verification state.

pub mod service;
pub mod types;

pub use service::BeneficiaryRegistry;
pub use types::{Beneficiary, BeneficiaryFilter, BeneficiaryInput};
