//! Property tests for duplicate detection.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::beneficiary::Beneficiary;
use crate::duplicate::detector::{BeneficiaryKeys, DuplicateDetector, PaymentKeys};
use crate::fixtures;

fn account_strategy() -> impl Strategy<Value = String> {
    "[0-9]{8}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A beneficiary always matches its own bank details.
    #[test]
    fn prop_beneficiary_reflexive(account in account_strategy(), swift in "[A-Z]{6}[A-Z0-9]{2}") {
        let mut beneficiary = fixtures::beneficiary(1, "ACME LIMITED");
        beneficiary.account_number = Some(account.clone());
        beneficiary.swift_code = Some(swift.clone());
        let keys = BeneficiaryKeys {
            account_number: Some(account),
            iban: None,
            swift_code: Some(swift),
        };
        prop_assert!(DuplicateDetector::beneficiary_exists(&[beneficiary], &keys));
    }

    /// A payment always matches its own triple.
    #[test]
    fn prop_payment_reflexive(cents in 1i64..1_000_000_000i64) {
        let amount = Decimal::new(cents, 2);
        let mut payment = fixtures::payment(1, amount);
        payment.invoice_number = None;
        let keys = PaymentKeys {
            invoice_number: None,
            beneficiary_id: Some(payment.beneficiary_id),
            amount: Some(amount),
            payment_date: Some(payment.payment_date),
        };
        prop_assert!(DuplicateDetector::payment_exists(&[payment], &keys));
    }

    /// Nothing is a duplicate of an empty collection.
    #[test]
    fn prop_empty_collection_never_matches(account in account_strategy()) {
        let keys = BeneficiaryKeys {
            account_number: Some(account),
            ..BeneficiaryKeys::default()
        };
        let none: [Beneficiary; 0] = [];
        prop_assert!(!DuplicateDetector::beneficiary_exists(&none, &keys));
    }

    /// Distinct account numbers with no other keys never match.
    #[test]
    fn prop_distinct_accounts_do_not_match(a in account_strategy(), b in account_strategy()) {
        prop_assume!(a != b);
        let mut beneficiary = fixtures::beneficiary(1, "ACME LIMITED");
        beneficiary.account_number = Some(a);
        let keys = BeneficiaryKeys {
            account_number: Some(b),
            ..BeneficiaryKeys::default()
        };
        prop_assert!(!DuplicateDetector::beneficiary_exists(&[beneficiary], &keys));
    }
}
