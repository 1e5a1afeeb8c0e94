//! Shared builders for unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use payflow_shared::types::{BeneficiaryId, PaymentId, Validity};
use rust_decimal::Decimal;

use crate::beneficiary::{Beneficiary, BeneficiaryInput};
use crate::payment::{Payment, PaymentInput};
use crate::settings::default_entries;
use crate::store::{Store, StoreState};
use crate::verification::VerificationStatus;
use crate::workflow::types::{PaymentStatus, PaymentType};

pub(crate) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

pub(crate) fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
}

pub(crate) fn beneficiary(id: u64, name: &str) -> Beneficiary {
    Beneficiary {
        id: BeneficiaryId::new(id),
        beneficiary_name: name.to_string(),
        sort_code: Some("12-34-56".to_string()),
        account_number: Some(format!("8765432{}", (id % 5) * 2)),
        iban: None,
        swift_code: None,
        currency: "GBP".to_string(),
        country: Some("GB".to_string()),
        address_line1: None,
        city: None,
        postal_code: None,
        is_active: true,
        verification_status: VerificationStatus::Passed,
        verification_note: String::new(),
        last_changed_by: "system".to_string(),
        last_changed_date: now(),
        validity: Validity::open_from(now()),
    }
}

pub(crate) fn beneficiary_input(name: &str, account_number: &str) -> BeneficiaryInput {
    BeneficiaryInput {
        beneficiary_name: name.to_string(),
        sort_code: Some("40-47-84".to_string()),
        account_number: Some(account_number.to_string()),
        currency: "GBP".to_string(),
        country: Some("GB".to_string()),
        ..BeneficiaryInput::default()
    }
}

pub(crate) fn payment(id: u64, amount: Decimal) -> Payment {
    Payment {
        id: PaymentId::new(id),
        reference: format!("PMT-{id:06}"),
        invoice_number: Some(format!("INV-{id}")),
        payment_date: date(),
        amount,
        currency: "GBP".to_string(),
        payment_type: PaymentType::Domestic,
        beneficiary_id: BeneficiaryId::new(1),
        beneficiary_name: "ACME LIMITED".to_string(),
        sort_code: None,
        account_number: None,
        iban: None,
        swift_code: None,
        payment_method: Some("Faster Payments".to_string()),
        remittance_advice: None,
        cost_centre: None,
        gl_code: None,
        reason_code: None,
        is_erp: false,
        erp_ref: None,
        status: PaymentStatus::Draft,
        is_duplicate: false,
        created_by: "alice".to_string(),
        created_date: now(),
        validity: Validity::open_from(now()),
    }
}

pub(crate) fn payment_input(amount: Decimal) -> PaymentInput {
    PaymentInput {
        reference: None,
        invoice_number: None,
        payment_date: date(),
        amount,
        currency: "GBP".to_string(),
        payment_type: PaymentType::Domestic,
        beneficiary_id: BeneficiaryId::new(1),
        payment_method: Some("Faster Payments".to_string()),
        remittance_advice: None,
        cost_centre: None,
        gl_code: None,
        reason_code: None,
        is_erp: false,
        erp_ref: None,
    }
}

/// Default configuration plus one verified beneficiary with ID 1.
pub(crate) fn state() -> StoreState {
    StoreState {
        beneficiaries: vec![beneficiary(1, "ACME LIMITED")],
        configurations: default_entries(),
        ..StoreState::default()
    }
}

pub(crate) fn store() -> Store {
    Store::in_memory(state())
}
