//! Payment lifecycle: creation, edits, submission and settlement.

use chrono::{DateTime, Utc};
use payflow_shared::types::{ApprovalId, BankReceiptId, PaymentId, Validity};

use crate::approval::ApprovalEngine;
use crate::duplicate::{DuplicateDetector, PaymentKeys};
use crate::payment::receipt::{BankReceipt, ReceiptImport};
use crate::payment::types::{Payment, PaymentFilter, PaymentInput, generated_reference};
use crate::store::{Store, StoreState};
use crate::workflow::error::WorkflowError;
use crate::workflow::service::WorkflowService;
use crate::workflow::types::PaymentStatus;

/// Moves the payment behind a derived record to `target`.
///
/// Missing payments and transitions the state machine refuses are no-ops.
/// Returns true if the payment changed.
pub(crate) fn propagate_status(
    state: &mut StoreState,
    payment_id: PaymentId,
    target: PaymentStatus,
) -> bool {
    let Some(payment) = state.payment_mut(payment_id) else {
        return false;
    };
    match WorkflowService::propagate(payment.status, target) {
        Some(next) => {
            payment.status = next;
            true
        }
        None => false,
    }
}

/// First `PMT-` reference from `id` onwards that no payment holds yet.
fn free_generated_reference(state: &StoreState, id: PaymentId) -> String {
    (id.into_inner()..)
        .map(|n| generated_reference(PaymentId::new(n)))
        .find(|reference| state.payment_by_reference(reference).is_none())
        .unwrap_or_else(|| generated_reference(id))
}

/// Payment operations over a store.
#[derive(Debug, Clone, Copy)]
pub struct PaymentLifecycle<'a> {
    store: &'a Store,
}

impl<'a> PaymentLifecycle<'a> {
    /// Creates the service over a store.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a Draft payment.
    ///
    /// # Errors
    ///
    /// - `Validation` for a non-positive amount or missing currency
    /// - `BeneficiaryNotFound` if the payee does not exist
    /// - `ReferenceInUse` if a supplied reference is taken
    ///
    /// Without a supplied reference the payment gets `PMT-{id}`, moving on
    /// to the next number while that reference is already taken.
    pub fn create(
        &self,
        input: &PaymentInput,
        acting_user: &str,
        now: DateTime<Utc>,
    ) -> Result<PaymentId, WorkflowError> {
        input.validate()?;
        self.store.transact(|state| {
            let beneficiary = state
                .beneficiary(input.beneficiary_id)
                .ok_or(WorkflowError::BeneficiaryNotFound(input.beneficiary_id))?;

            let id = state.next_payment_id();
            let reference = match &input.reference {
                Some(reference) => {
                    let reference = reference.trim().to_string();
                    if state.payment_by_reference(&reference).is_some() {
                        return Err(WorkflowError::ReferenceInUse(reference));
                    }
                    reference
                }
                None => free_generated_reference(state, id),
            };
            let is_duplicate =
                DuplicateDetector::payment_exists(&state.payments, &input.duplicate_keys());

            let mut payment = Payment {
                id,
                reference,
                invoice_number: None,
                payment_date: input.payment_date,
                amount: input.amount,
                currency: input.currency.clone(),
                payment_type: input.payment_type,
                beneficiary_id: input.beneficiary_id,
                beneficiary_name: String::new(),
                sort_code: None,
                account_number: None,
                iban: None,
                swift_code: None,
                payment_method: None,
                remittance_advice: None,
                cost_centre: None,
                gl_code: None,
                reason_code: None,
                is_erp: false,
                erp_ref: None,
                status: PaymentStatus::Draft,
                is_duplicate,
                created_by: acting_user.to_string(),
                created_date: now,
                validity: Validity::open_from(now),
            };
            payment.snapshot_beneficiary(beneficiary);
            payment.apply(input);

            state.payments.push(payment);
            Ok(id)
        })
    }

    /// Replaces the editable fields of a Draft payment.
    ///
    /// The payee snapshot is retaken and the duplicate flag recomputed
    /// against every other payment.
    ///
    /// # Errors
    ///
    /// - `PaymentNotFound` if the payment does not exist
    /// - `NotEditable` if it has left Draft
    /// - `BeneficiaryNotFound` if the new payee does not exist
    /// - `ReferenceInUse` if a supplied reference belongs to another payment
    pub fn update(&self, id: PaymentId, input: &PaymentInput) -> Result<Payment, WorkflowError> {
        input.validate()?;
        self.store.transact(|state| {
            let current = state.payment(id).ok_or(WorkflowError::PaymentNotFound(id))?;
            if !current.status.is_editable() {
                return Err(WorkflowError::NotEditable {
                    id,
                    status: current.status,
                });
            }
            let beneficiary = state
                .beneficiary(input.beneficiary_id)
                .cloned()
                .ok_or(WorkflowError::BeneficiaryNotFound(input.beneficiary_id))?;

            let reference = match &input.reference {
                Some(reference) => {
                    let reference = reference.trim().to_string();
                    if state
                        .payment_by_reference(&reference)
                        .is_some_and(|other| other.id != id)
                    {
                        return Err(WorkflowError::ReferenceInUse(reference));
                    }
                    Some(reference)
                }
                None => None,
            };
            let is_duplicate = DuplicateDetector::payment_exists(
                state.payments.iter().filter(|p| p.id != id),
                &input.duplicate_keys(),
            );

            let payment = state
                .payment_mut(id)
                .ok_or(WorkflowError::PaymentNotFound(id))?;
            payment.apply(input);
            payment.snapshot_beneficiary(&beneficiary);
            payment.is_duplicate = is_duplicate;
            if let Some(reference) = reference {
                payment.reference = reference;
            }
            Ok(payment.clone())
        })
    }

    /// Fetches one payment.
    pub fn get(&self, id: PaymentId) -> Result<Payment, WorkflowError> {
        self.store
            .read(|state| state.payment(id).cloned())?
            .ok_or(WorkflowError::PaymentNotFound(id))
    }

    /// Lists payments passing `filter`, in creation order.
    pub fn list(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, WorkflowError> {
        Ok(self.store.read(|state| {
            state
                .payments
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect()
        })?)
    }

    /// Checks a candidate payment against every stored payment.
    pub fn duplicate_check(&self, keys: &PaymentKeys) -> Result<bool, WorkflowError> {
        Ok(self
            .store
            .read(|state| DuplicateDetector::payment_exists(&state.payments, keys))?)
    }

    /// Submits a Draft payment and opens its approval.
    ///
    /// The status change and the new approval are written together.
    ///
    /// # Errors
    ///
    /// - `PaymentNotFound` if the payment does not exist
    /// - `InvalidTransition` if it is not a Draft
    pub fn submit_for_approval(
        &self,
        id: PaymentId,
        now: DateTime<Utc>,
    ) -> Result<ApprovalId, WorkflowError> {
        self.store.transact(|state| {
            let payment = state
                .payment_mut(id)
                .ok_or(WorkflowError::PaymentNotFound(id))?;
            payment.status = WorkflowService::submit(payment.status)?;
            let payment = payment.clone();

            let approval_id = state.next_approval_id();
            let approval = ApprovalEngine::open(
                approval_id,
                &payment,
                state.beneficiary(payment.beneficiary_id),
                &state.settings(),
                now,
            );
            state.approvals.push(approval);
            Ok(approval_id)
        })
    }

    /// Records a bank receipt for a payment and settles it.
    ///
    /// Settlement applies whatever status the payment was in.
    ///
    /// # Errors
    ///
    /// - `PaymentNotFound` if the payment does not exist
    pub fn import_receipt(
        &self,
        id: PaymentId,
        import: &ReceiptImport,
        now: DateTime<Utc>,
    ) -> Result<BankReceiptId, WorkflowError> {
        self.store.transact(|state| {
            let receipt_id = state.next_receipt_id();
            let payment = state
                .payment_mut(id)
                .ok_or(WorkflowError::PaymentNotFound(id))?;
            payment.status = WorkflowService::settle(payment.status);

            let receipt = BankReceipt::matched(receipt_id, payment, import, now);
            state.bank_receipts.push(receipt);
            Ok(receipt_id)
        })
    }

    /// Lists every bank receipt.
    pub fn list_receipts(&self) -> Result<Vec<BankReceipt>, WorkflowError> {
        Ok(self.store.read(|state| state.bank_receipts.clone())?)
    }
}
