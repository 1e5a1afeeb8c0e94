//! Property-based tests for WorkflowService.

use proptest::prelude::*;

use crate::workflow::error::WorkflowError;
use crate::workflow::service::WorkflowService;
use crate::workflow::types::PaymentStatus;

/// Strategy for generating random PaymentStatus values.
fn arb_status() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Draft),
        Just(PaymentStatus::PendingApproval),
        Just(PaymentStatus::Approved),
        Just(PaymentStatus::Rejected),
        Just(PaymentStatus::Released),
        Just(PaymentStatus::Settled),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Only drafts can be submitted.
    #[test]
    fn prop_submit_only_from_draft(status in arb_status()) {
        let result = WorkflowService::submit(status);
        if status == PaymentStatus::Draft {
            prop_assert_eq!(result.unwrap(), PaymentStatus::PendingApproval);
        } else {
            let is_invalid_transition = matches!(
                result,
                Err(WorkflowError::InvalidTransition { from, to })
                    if from == status && to == PaymentStatus::PendingApproval
            );
            prop_assert!(is_invalid_transition);
        }
    }

    /// Propagation agrees with the transition table.
    #[test]
    fn prop_propagate_matches_transition_table(
        from in arb_status(),
        to in arb_status(),
    ) {
        let result = WorkflowService::propagate(from, to);
        if from != to && WorkflowService::is_valid_transition(from, to) {
            prop_assert_eq!(result, Some(to));
        } else {
            prop_assert_eq!(result, None);
        }
    }

    /// Released and settled payments only ever move to Settled.
    #[test]
    fn prop_immutable_payments_only_settle(
        from in prop_oneof![Just(PaymentStatus::Released), Just(PaymentStatus::Settled)],
        to in arb_status(),
    ) {
        if WorkflowService::is_valid_transition(from, to) {
            prop_assert_eq!(to, PaymentStatus::Settled);
        }
    }

    /// Rejected is terminal except for reconciliation.
    #[test]
    fn prop_rejected_is_terminal(to in arb_status()) {
        let valid = WorkflowService::is_valid_transition(PaymentStatus::Rejected, to);
        prop_assert_eq!(valid, to == PaymentStatus::Settled);
    }
}
