//! Dashboard aggregation.
//!
//! A point-in-time projection over the store document: counts only, no
//! writes.

pub mod types;

use chrono::{DateTime, Duration, Utc};

use crate::approval::ApprovalEngine;
use crate::store::StoreState;
use crate::verification::VerificationStatus;
use crate::workflow::types::{ApprovalStatus, ReleaseStatus};

pub use types::{DashboardSummary, NearSla, VerificationStatistics, WindowCounts};

/// Stateless dashboard aggregator.
pub struct DashboardAggregator;

impl DashboardAggregator {
    /// Summarizes `state` as seen at `now`.
    #[must_use]
    pub fn summarize(state: &StoreState, now: DateTime<Utc>) -> DashboardSummary {
        let pending: Vec<_> = state
            .approvals
            .iter()
            .filter(|a| a.status == ApprovalStatus::Pending)
            .collect();

        DashboardSummary {
            ready_to_release: state
                .release_queue
                .iter()
                .filter(|r| r.release_status == ReleaseStatus::Pending)
                .count(),
            approval_required: pending.len(),
            bank_receipts: state.bank_receipts.len(),
            account_verification_statistics: Self::verification_statistics(state, now),
            anomalies_detected: state.approvals.iter().filter(|a| a.is_out_of_range).count(),
            escalations_triggered: state
                .approvals
                .iter()
                .filter(|a| ApprovalEngine::is_escalated_at(a, now))
                .count(),
            near_sla: Self::near_sla(pending.iter().map(|a| a.deadline), now),
        }
    }

    fn verification_statistics(state: &StoreState, now: DateTime<Utc>) -> VerificationStatistics {
        let tally = |status: VerificationStatus| {
            let changed: Vec<_> = state
                .beneficiaries
                .iter()
                .filter(|b| b.verification_status == status)
                .map(|b| b.last_changed_date)
                .collect();
            let within = |days: i64| {
                let since = now - Duration::days(days);
                changed.iter().filter(|&&at| at > since && at <= now).count()
            };
            WindowCounts {
                last_week: within(7),
                last_month: within(30),
                last_year: within(365),
            }
        };

        VerificationStatistics {
            passed: tally(VerificationStatus::Passed),
            outstanding: tally(VerificationStatus::Pending),
            failed: tally(VerificationStatus::Failed),
        }
    }

    fn near_sla(deadlines: impl Iterator<Item = DateTime<Utc>>, now: DateTime<Utc>) -> NearSla {
        let remaining: Vec<Duration> = deadlines
            .map(|deadline| deadline - now)
            .filter(|left| *left >= Duration::zero())
            .collect();
        let within = |limit: Duration| remaining.iter().filter(|&&left| left <= limit).count();

        NearSla {
            within30_minutes: within(Duration::minutes(30)),
            within1_hour: within(Duration::hours(1)),
            within2_hours: within(Duration::hours(2)),
        }
    }
}
