//! The store document: every collection of records in one value.

use payflow_shared::types::{
    ApprovalId, BankReceiptId, BeneficiaryId, ConfigurationId, PaymentId, ReleaseQueueId,
};
use serde::{Deserialize, Serialize};

use crate::approval::Approval;
use crate::beneficiary::Beneficiary;
use crate::payment::{BankReceipt, Payment};
use crate::release::ReleaseQueueItem;
use crate::settings::{ConfigEntry, Settings};

/// All records, shaped like the persisted JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    /// Payees.
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
    /// Payments.
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Approval requests derived from submitted payments.
    #[serde(default)]
    pub approvals: Vec<Approval>,
    /// Release queue items derived from approved approvals.
    #[serde(default)]
    pub release_queue: Vec<ReleaseQueueItem>,
    /// Inbound settlement notices.
    #[serde(default)]
    pub bank_receipts: Vec<BankReceipt>,
    /// Key/value configuration.
    #[serde(default)]
    pub configurations: Vec<ConfigEntry>,
}

impl StoreState {
    /// Typed view over the configuration entries.
    #[must_use]
    pub fn settings(&self) -> Settings<'_> {
        Settings::new(&self.configurations)
    }

    /// Finds a beneficiary by ID.
    #[must_use]
    pub fn beneficiary(&self, id: BeneficiaryId) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.id == id)
    }

    /// Finds a beneficiary by ID for mutation.
    pub fn beneficiary_mut(&mut self, id: BeneficiaryId) -> Option<&mut Beneficiary> {
        self.beneficiaries.iter_mut().find(|b| b.id == id)
    }

    /// Finds a payment by ID.
    #[must_use]
    pub fn payment(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.iter().find(|p| p.id == id)
    }

    /// Finds a payment by ID for mutation.
    pub fn payment_mut(&mut self, id: PaymentId) -> Option<&mut Payment> {
        self.payments.iter_mut().find(|p| p.id == id)
    }

    /// Finds a payment by its reference string.
    #[must_use]
    pub fn payment_by_reference(&self, reference: &str) -> Option<&Payment> {
        self.payments.iter().find(|p| p.reference == reference)
    }

    /// Finds an approval by ID.
    #[must_use]
    pub fn approval(&self, id: ApprovalId) -> Option<&Approval> {
        self.approvals.iter().find(|a| a.id == id)
    }

    /// Finds an approval by ID for mutation.
    pub fn approval_mut(&mut self, id: ApprovalId) -> Option<&mut Approval> {
        self.approvals.iter_mut().find(|a| a.id == id)
    }

    /// Finds a release queue item by ID.
    #[must_use]
    pub fn release_item(&self, id: ReleaseQueueId) -> Option<&ReleaseQueueItem> {
        self.release_queue.iter().find(|r| r.id == id)
    }

    /// Finds a release queue item by ID for mutation.
    pub fn release_item_mut(&mut self, id: ReleaseQueueId) -> Option<&mut ReleaseQueueItem> {
        self.release_queue.iter_mut().find(|r| r.id == id)
    }

    /// Finds the release queue item derived from an approval.
    #[must_use]
    pub fn release_item_for(&self, approval_id: ApprovalId) -> Option<&ReleaseQueueItem> {
        self.release_queue
            .iter()
            .find(|r| r.approval_id == approval_id)
    }

    /// Finds a configuration entry by ID for mutation.
    pub fn configuration_mut(&mut self, id: ConfigurationId) -> Option<&mut ConfigEntry> {
        self.configurations.iter_mut().find(|c| c.id == id)
    }

    /// Next free beneficiary ID.
    #[must_use]
    pub fn next_beneficiary_id(&self) -> BeneficiaryId {
        BeneficiaryId::next_after(self.beneficiaries.iter().map(|b| b.id))
    }

    /// Next free payment ID.
    #[must_use]
    pub fn next_payment_id(&self) -> PaymentId {
        PaymentId::next_after(self.payments.iter().map(|p| p.id))
    }

    /// Next free approval ID.
    #[must_use]
    pub fn next_approval_id(&self) -> ApprovalId {
        ApprovalId::next_after(self.approvals.iter().map(|a| a.id))
    }

    /// Next free release queue ID.
    #[must_use]
    pub fn next_release_id(&self) -> ReleaseQueueId {
        ReleaseQueueId::next_after(self.release_queue.iter().map(|r| r.id))
    }

    /// Next free bank receipt ID.
    #[must_use]
    pub fn next_receipt_id(&self) -> BankReceiptId {
        BankReceiptId::next_after(self.bank_receipts.iter().map(|r| r.id))
    }
}
