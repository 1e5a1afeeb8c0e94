//! Approval decisions over a store.

use chrono::{DateTime, Utc};
use payflow_shared::types::ApprovalId;

use crate::approval::engine::ApprovalEngine;
use crate::approval::types::{ApprovalFilter, ApprovalView};
use crate::payment::propagate_status;
use crate::release::ReleaseQueueItem;
use crate::store::Store;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::{ApprovalStatus, BulkOutcome, PaymentStatus, ReleaseStatus};

/// Bulk approve / reject and approval queries.
#[derive(Debug, Clone, Copy)]
pub struct ApprovalService<'a> {
    store: &'a Store,
}

impl<'a> ApprovalService<'a> {
    /// Creates the service over a store.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Approves each id as `acting_user`.
    ///
    /// For every known, non-rejected approval: records the approver, queues
    /// the approval for release once, and moves its payment to Approved.
    /// Unknown and rejected ids are skipped.
    pub fn approve(
        &self,
        ids: &[ApprovalId],
        acting_user: &str,
        now: DateTime<Utc>,
    ) -> Result<BulkOutcome<ApprovalId>, WorkflowError> {
        self.store.transact(|state| {
            let mut outcome = BulkOutcome::default();
            for &id in ids {
                let Some(approval) = state.approval_mut(id) else {
                    outcome.mark_skipped(id);
                    continue;
                };
                if !ApprovalEngine::record_approval(approval, acting_user) {
                    outcome.mark_skipped(id);
                    continue;
                }
                let approval = approval.clone();

                if state.release_item_for(id).is_none() {
                    let release_id = state.next_release_id();
                    state
                        .release_queue
                        .push(ReleaseQueueItem::queue(release_id, &approval, now));
                }
                propagate_status(state, approval.payment_id, PaymentStatus::Approved);
                outcome.mark_processed(id);
            }
            Ok(outcome)
        })
    }

    /// Rejects each id.
    ///
    /// The payment moves to Rejected and a still-pending release item is
    /// pulled from the queue. Unknown and already rejected ids are skipped,
    /// as are approvals whose payment has already been released.
    pub fn reject(&self, ids: &[ApprovalId]) -> Result<BulkOutcome<ApprovalId>, WorkflowError> {
        self.store.transact(|state| {
            let mut outcome = BulkOutcome::default();
            for &id in ids {
                let released = state
                    .release_item_for(id)
                    .is_some_and(|r| r.release_status == ReleaseStatus::Released);
                let Some(approval) = state.approval_mut(id) else {
                    outcome.mark_skipped(id);
                    continue;
                };
                if released || approval.status == ApprovalStatus::Rejected {
                    outcome.mark_skipped(id);
                    continue;
                }
                approval.status = ApprovalStatus::Rejected;
                let payment_id = approval.payment_id;

                if let Some(item) = state
                    .release_queue
                    .iter_mut()
                    .find(|r| r.approval_id == id && r.release_status == ReleaseStatus::Pending)
                {
                    item.release_status = ReleaseStatus::Rejected;
                    item.approval_status = ApprovalStatus::Rejected;
                }
                propagate_status(state, payment_id, PaymentStatus::Rejected);
                outcome.mark_processed(id);
            }
            Ok(outcome)
        })
    }

    /// Fetches one approval with its flags evaluated at `now`.
    pub fn get(&self, id: ApprovalId, now: DateTime<Utc>) -> Result<ApprovalView, WorkflowError> {
        self.store
            .read(|state| {
                state
                    .approval(id)
                    .map(|a| ApprovalEngine::view(a, &state.settings(), now))
            })?
            .ok_or(WorkflowError::ApprovalNotFound(id))
    }

    /// Lists approvals passing `filter` at `now`.
    pub fn list(
        &self,
        filter: &ApprovalFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<ApprovalView>, WorkflowError> {
        Ok(self.store.read(|state| {
            let settings = state.settings();
            state
                .approvals
                .iter()
                .filter(|a| ApprovalEngine::matches(filter, a, now))
                .map(|a| ApprovalEngine::view(a, &settings, now))
                .collect()
        })?)
    }
}
