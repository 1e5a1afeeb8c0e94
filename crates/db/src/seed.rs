//! Demo seed dataset.

use chrono::{DateTime, Utc};
use payflow_core::StoreState;
use payflow_core::beneficiary::Beneficiary;
use payflow_core::settings::default_entries;
use payflow_core::verification::VerificationStatus;
use payflow_shared::types::{BeneficiaryId, Validity};

/// One verified beneficiary, the default configuration, nothing else.
#[must_use]
pub fn demo_state(now: DateTime<Utc>) -> StoreState {
    StoreState {
        beneficiaries: vec![Beneficiary {
            id: BeneficiaryId::new(1),
            beneficiary_name: "ACME LIMITED".to_string(),
            sort_code: Some("12-34-56".to_string()),
            account_number: Some("87654320".to_string()),
            iban: Some(String::new()),
            swift_code: Some(String::new()),
            currency: "GBP".to_string(),
            country: Some("GB".to_string()),
            address_line1: Some("123 High Street".to_string()),
            city: Some("London".to_string()),
            postal_code: Some("EC1A 1BB".to_string()),
            is_active: true,
            verification_status: VerificationStatus::Passed,
            verification_note: String::new(),
            last_changed_by: "system".to_string(),
            last_changed_date: now,
            validity: Validity::open_from(now),
        }],
        configurations: default_entries(),
        ..StoreState::default()
    }
}
