//! Property tests for approval thresholds and approver slots.

use chrono::{TimeZone, Utc};
use payflow_shared::types::ApprovalId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::approval::engine::ApprovalEngine;
use crate::fixtures;
use crate::settings::types::CFO_APPROVAL_THRESHOLD;
use crate::settings::{ConfigEntry, Settings, default_entries};
use payflow_shared::types::ConfigurationId;

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=200_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// CFO sign-off is required exactly at or above the configured threshold.
    #[test]
    fn prop_cfo_flag_matches_threshold(amount in amount_strategy(), threshold in amount_strategy()) {
        let entries = vec![ConfigEntry::number(
            ConfigurationId::new(1),
            CFO_APPROVAL_THRESHOLD,
            &threshold.to_string(),
        )];
        let settings = Settings::new(&entries);
        prop_assert_eq!(ApprovalEngine::cfo_required(amount, &settings), amount >= threshold);
    }

    /// Out of range implies CFO sign-off under the default thresholds.
    #[test]
    fn prop_out_of_range_implies_cfo(amount in amount_strategy()) {
        let entries = default_entries();
        let settings = Settings::new(&entries);
        if ApprovalEngine::out_of_range(amount, &settings) {
            prop_assert!(ApprovalEngine::cfo_required(amount, &settings));
        }
    }

    /// However many approvals arrive, the two slots never hold the same user.
    #[test]
    fn prop_approver_slots_distinct(users in prop::collection::vec("[a-c]", 1..8)) {
        let entries = default_entries();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut approval = ApprovalEngine::open(
            ApprovalId::new(1),
            &fixtures::payment(1, Decimal::ONE),
            None,
            &Settings::new(&entries),
            now,
        );
        for user in &users {
            ApprovalEngine::record_approval(&mut approval, user);
        }

        prop_assert_eq!(approval.approved_count, u32::try_from(users.len()).unwrap());
        prop_assert_eq!(approval.approver1.as_deref(), Some(users[0].as_str()));
        if let Some(second) = &approval.approver2 {
            prop_assert_ne!(Some(second), approval.approver1.as_ref());
        }
    }
}
