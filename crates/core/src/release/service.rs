//! Batch release and rejection of queued payments.

use chrono::{DateTime, Utc};
use payflow_shared::types::ReleaseQueueId;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::payment::propagate_status;
use crate::release::types::{BatchSummary, ReleaseFilter, ReleaseQueueItem};
use crate::store::Store;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::{BulkOutcome, PaymentStatus, ReleaseStatus};

/// A fresh batch identifier: `BATCH-` and 8 uppercase hex characters.
#[must_use]
pub fn new_batch_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("BATCH-{}", hex[..8].to_ascii_uppercase())
}

/// Release queue operations over a store.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseQueue<'a> {
    store: &'a Store,
}

impl<'a> ReleaseQueue<'a> {
    /// Creates the service over a store.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Releases each pending item under one new batch.
    ///
    /// Unknown, released and rejected items are skipped, so an item is
    /// released at most once. The summary covers only this call.
    ///
    /// # Errors
    ///
    /// - `Validation` if the batch total does not fit a `Decimal`; nothing
    ///   is released in that case
    pub fn release(
        &self,
        ids: &[ReleaseQueueId],
        acting_user: &str,
        now: DateTime<Utc>,
    ) -> Result<BatchSummary, WorkflowError> {
        let batch_id = new_batch_id();
        self.store.transact(|state| {
            let mut count = 0;
            let mut total_amount = Decimal::ZERO;
            for &id in ids {
                let Some(item) = state.release_item_mut(id) else {
                    continue;
                };
                if item.release_status != ReleaseStatus::Pending {
                    continue;
                }
                item.release_status = ReleaseStatus::Released;
                item.released_by = Some(acting_user.to_string());
                item.released_date = Some(now);
                item.batch_id = Some(batch_id.clone());
                count += 1;
                total_amount = total_amount.checked_add(item.amount).ok_or_else(|| {
                    WorkflowError::Validation("Batch total amount is out of range".to_string())
                })?;

                let payment_id = item.payment_id;
                propagate_status(state, payment_id, PaymentStatus::Released);
            }
            Ok(BatchSummary {
                batch_id: batch_id.clone(),
                count,
                total_amount,
            })
        })
    }

    /// Pulls each pending item from the queue and rejects its payment.
    pub fn reject(
        &self,
        ids: &[ReleaseQueueId],
    ) -> Result<BulkOutcome<ReleaseQueueId>, WorkflowError> {
        self.store.transact(|state| {
            let mut outcome = BulkOutcome::default();
            for &id in ids {
                let Some(item) = state.release_item_mut(id) else {
                    outcome.mark_skipped(id);
                    continue;
                };
                if item.release_status != ReleaseStatus::Pending {
                    outcome.mark_skipped(id);
                    continue;
                }
                item.release_status = ReleaseStatus::Rejected;

                let payment_id = item.payment_id;
                propagate_status(state, payment_id, PaymentStatus::Rejected);
                outcome.mark_processed(id);
            }
            Ok(outcome)
        })
    }

    /// Fetches one item.
    pub fn get(&self, id: ReleaseQueueId) -> Result<ReleaseQueueItem, WorkflowError> {
        self.store
            .read(|state| state.release_item(id).cloned())?
            .ok_or(WorkflowError::ReleaseItemNotFound(id))
    }

    /// Lists items passing `filter`, in queue order.
    pub fn list(&self, filter: &ReleaseFilter) -> Result<Vec<ReleaseQueueItem>, WorkflowError> {
        Ok(self.store.read(|state| {
            state
                .release_queue
                .iter()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect()
        })?)
    }
}
