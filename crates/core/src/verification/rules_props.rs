//! Property-based tests for AccountVerifier.

use proptest::prelude::*;

use crate::verification::rules::{AccountDetails, AccountVerifier, VerificationStatus};

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z ]{0,30}"
}

fn arb_currency() -> impl Strategy<Value = String> {
    prop_oneof![Just("GBP".to_string()), Just("EUR".to_string()), Just("USD".to_string())]
}

fn arb_details() -> impl Strategy<Value = AccountDetails> {
    (
        proptest::option::of(arb_name()),
        proptest::option::of(arb_currency()),
        proptest::option::of("[0-9]{2}-[0-9]{2}-[0-9]{2}"),
        proptest::option::of("[0-9]{6,10}"),
        proptest::option::of("[A-Z]{2}[0-9A-Z]{10,30}"),
    )
        .prop_map(|(name, currency, sort_code, account_number, iban)| AccountDetails {
            beneficiary_name: name,
            currency,
            sort_code,
            account_number,
            iban,
            swift_code: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Same input, same outcome.
    #[test]
    fn prop_verify_is_deterministic(details in arb_details()) {
        prop_assert_eq!(AccountVerifier::verify(&details), AccountVerifier::verify(&details));
    }

    /// A sort code ending in "00" always fails unless the CoP rule fired first.
    #[test]
    fn prop_sort_code_ending_00_fails(
        mut details in arb_details(),
        prefix in "[0-9]{2}-[0-9]{2}-",
    ) {
        details.sort_code = Some(format!("{prefix}00"));
        let outcome = AccountVerifier::verify(&details);
        prop_assert_eq!(outcome.status, VerificationStatus::Failed);
        prop_assert!(
            outcome.message == "Sort code validation failed"
                || outcome.message.contains("CoP check failed")
        );
    }

    /// An odd final digit always fails unless an earlier rule fired.
    #[test]
    fn prop_odd_account_number_fails(
        mut details in arb_details(),
        prefix in "[0-9]{5,9}",
        last in prop_oneof![Just('1'), Just('3'), Just('5'), Just('7'), Just('9')],
    ) {
        details.account_number = Some(format!("{prefix}{last}"));
        let outcome = AccountVerifier::verify(&details);
        prop_assert_eq!(outcome.status, VerificationStatus::Failed);
        prop_assert!(
            outcome.message == "Account number validation failed"
                || outcome.message == "Sort code validation failed"
                || outcome.message.contains("CoP check failed")
        );
    }

    /// A GBP payee named "Test Co" fails the CoP check whatever else is supplied.
    #[test]
    fn prop_test_co_gbp_always_fails_cop(mut details in arb_details()) {
        details.beneficiary_name = Some("Test Co".to_string());
        details.currency = Some("GBP".to_string());
        let outcome = AccountVerifier::verify(&details);
        prop_assert_eq!(outcome.status, VerificationStatus::Failed);
        prop_assert!(outcome.message.contains("CoP check failed"));
    }
}
