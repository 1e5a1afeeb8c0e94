//! Beneficiary registry over the store.

use chrono::{DateTime, Utc};
use payflow_shared::types::{BeneficiaryId, Validity};

use crate::beneficiary::types::{Beneficiary, BeneficiaryFilter, BeneficiaryInput};
use crate::duplicate::{BeneficiaryKeys, DuplicateDetector};
use crate::store::Store;
use crate::verification::{
    AccountDetails, AccountVerifier, VerificationOutcome, VerificationStatus,
};
use crate::workflow::error::WorkflowError;

/// Beneficiary maintenance and lookups.
#[derive(Debug, Clone, Copy)]
pub struct BeneficiaryRegistry<'a> {
    store: &'a Store,
}

impl<'a> BeneficiaryRegistry<'a> {
    /// Creates the service over a store.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Registers a beneficiary.
    ///
    /// Verification runs when `COP_ACCOUNT_VERIFICATION_ENABLED` is on;
    /// otherwise the beneficiary starts Pending.
    pub fn create(
        &self,
        input: &BeneficiaryInput,
        acting_user: &str,
        now: DateTime<Utc>,
    ) -> Result<BeneficiaryId, WorkflowError> {
        validate(input)?;
        self.store.transact(|state| {
            let id = state.next_beneficiary_id();
            let verify = state.settings().cop_verification_enabled();

            let mut beneficiary = Beneficiary {
                id,
                beneficiary_name: String::new(),
                sort_code: None,
                account_number: None,
                iban: None,
                swift_code: None,
                currency: String::new(),
                country: None,
                address_line1: None,
                city: None,
                postal_code: None,
                is_active: input.is_active.unwrap_or(true),
                verification_status: VerificationStatus::Pending,
                verification_note: String::new(),
                last_changed_by: acting_user.to_string(),
                last_changed_date: now,
                validity: Validity::open_from(now),
            };
            apply(&mut beneficiary, input);
            let outcome = verify.then(|| AccountVerifier::verify(&beneficiary.account_details()));
            beneficiary.record_verification(outcome);

            state.beneficiaries.push(beneficiary);
            Ok(id)
        })
    }

    /// Replaces the editable fields and re-runs verification.
    ///
    /// # Errors
    ///
    /// - `BeneficiaryNotFound` if the beneficiary does not exist
    pub fn update(
        &self,
        id: BeneficiaryId,
        input: &BeneficiaryInput,
        acting_user: &str,
        now: DateTime<Utc>,
    ) -> Result<Beneficiary, WorkflowError> {
        validate(input)?;
        self.store.transact(|state| {
            let verify = state.settings().cop_verification_enabled();
            let beneficiary = state
                .beneficiary_mut(id)
                .ok_or(WorkflowError::BeneficiaryNotFound(id))?;

            apply(beneficiary, input);
            if let Some(is_active) = input.is_active {
                beneficiary.is_active = is_active;
            }
            let outcome = verify.then(|| AccountVerifier::verify(&beneficiary.account_details()));
            beneficiary.record_verification(outcome);
            beneficiary.last_changed_by = acting_user.to_string();
            beneficiary.last_changed_date = now;
            Ok(beneficiary.clone())
        })
    }

    /// Removes a beneficiary outright.
    ///
    /// Payments keep their own snapshot of the payee details.
    pub fn remove(&self, id: BeneficiaryId) -> Result<(), WorkflowError> {
        self.store.transact(|state| {
            let before = state.beneficiaries.len();
            state.beneficiaries.retain(|b| b.id != id);
            if state.beneficiaries.len() == before {
                return Err(WorkflowError::BeneficiaryNotFound(id));
            }
            Ok(())
        })
    }

    /// Fetches one beneficiary.
    pub fn get(&self, id: BeneficiaryId) -> Result<Beneficiary, WorkflowError> {
        self.store
            .read(|state| state.beneficiary(id).cloned())?
            .ok_or(WorkflowError::BeneficiaryNotFound(id))
    }

    /// Lists beneficiaries passing `filter`.
    pub fn list(&self, filter: BeneficiaryFilter) -> Result<Vec<Beneficiary>, WorkflowError> {
        Ok(self.store.read(|state| {
            state
                .beneficiaries
                .iter()
                .filter(|b| filter.matches(b))
                .cloned()
                .collect()
        })?)
    }

    /// Checks bank details against every registered beneficiary.
    pub fn duplicate_check(&self, keys: &BeneficiaryKeys) -> Result<bool, WorkflowError> {
        Ok(self
            .store
            .read(|state| DuplicateDetector::beneficiary_exists(&state.beneficiaries, keys))?)
    }

    /// Runs account verification on ad-hoc details without storing anything.
    #[must_use]
    pub fn verify(details: &AccountDetails) -> VerificationOutcome {
        AccountVerifier::verify(details)
    }
}

fn validate(input: &BeneficiaryInput) -> Result<(), WorkflowError> {
    if input.beneficiary_name.trim().is_empty() {
        return Err(WorkflowError::Validation(
            "BeneficiaryName is required".to_string(),
        ));
    }
    if input.currency.trim().is_empty() {
        return Err(WorkflowError::Validation("Currency is required".to_string()));
    }
    Ok(())
}

fn apply(beneficiary: &mut Beneficiary, input: &BeneficiaryInput) {
    beneficiary.beneficiary_name = input.beneficiary_name.trim().to_string();
    beneficiary.sort_code.clone_from(&input.sort_code);
    beneficiary.account_number.clone_from(&input.account_number);
    beneficiary.iban.clone_from(&input.iban);
    beneficiary.swift_code.clone_from(&input.swift_code);
    beneficiary.currency = input.currency.trim().to_string();
    beneficiary.country.clone_from(&input.country);
    beneficiary.address_line1.clone_from(&input.address_line1);
    beneficiary.city.clone_from(&input.city);
    beneficiary.postal_code.clone_from(&input.postal_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::settings::SettingsService;
    use chrono::Duration;
    use payflow_shared::types::ConfigurationId;

    #[test]
    fn test_create_runs_verification_when_enabled() {
        let store = fixtures::store();
        let registry = BeneficiaryRegistry::new(&store);

        let passed = registry
            .create(&fixtures::beneficiary_input("Northwind Ltd", "12345678"), "alice", fixtures::now())
            .unwrap();
        let failed = registry
            .create(&fixtures::beneficiary_input("Test Supplies", "12345678"), "alice", fixtures::now())
            .unwrap();

        let passed = registry.get(passed).unwrap();
        assert_eq!(passed.id, BeneficiaryId::new(2));
        assert!(passed.is_active);
        assert_eq!(passed.verification_status, VerificationStatus::Passed);
        assert_eq!(passed.verification_note, "Account verification successful");
        assert_eq!(passed.last_changed_by, "alice");

        let failed = registry.get(failed).unwrap();
        assert_eq!(failed.verification_status, VerificationStatus::Failed);
        assert_eq!(failed.verification_note, "CoP check failed - name contains \"test\"");
    }

    #[test]
    fn test_create_stays_pending_when_disabled() {
        let store = fixtures::store();
        SettingsService::new(&store)
            .update(ConfigurationId::new(4), "false")
            .unwrap();

        let registry = BeneficiaryRegistry::new(&store);
        let id = registry
            .create(&fixtures::beneficiary_input("Test Supplies", "12345671"), "alice", fixtures::now())
            .unwrap();

        let beneficiary = registry.get(id).unwrap();
        assert_eq!(beneficiary.verification_status, VerificationStatus::Pending);
        assert!(beneficiary.verification_note.is_empty());
    }

    #[test]
    fn test_create_honours_inactive_flag() {
        let store = fixtures::store();
        let registry = BeneficiaryRegistry::new(&store);
        let mut input = fixtures::beneficiary_input("Dormant Co", "12345678");
        input.is_active = Some(false);

        registry.create(&input, "alice", fixtures::now()).unwrap();

        let inactive = registry
            .list(BeneficiaryFilter {
                is_active: Some(false),
            })
            .unwrap();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].beneficiary_name, "Dormant Co");
        assert_eq!(registry.list(BeneficiaryFilter::default()).unwrap().len(), 2);
    }

    #[test]
    fn test_create_requires_name() {
        let store = fixtures::store();
        let result = BeneficiaryRegistry::new(&store).create(
            &fixtures::beneficiary_input("  ", "12345678"),
            "alice",
            fixtures::now(),
        );
        assert!(matches!(result, Err(WorkflowError::Validation(_))));
    }

    #[test]
    fn test_update_reverifies_and_stamps() {
        let store = fixtures::store();
        let registry = BeneficiaryRegistry::new(&store);
        let later = fixtures::now() + Duration::days(1);

        let updated = registry
            .update(
                BeneficiaryId::new(1),
                &fixtures::beneficiary_input("ACME LIMITED", "87654321"),
                "bob",
                later,
            )
            .unwrap();

        assert_eq!(updated.verification_status, VerificationStatus::Failed);
        assert_eq!(updated.verification_note, "Account number validation failed");
        assert_eq!(updated.last_changed_by, "bob");
        assert_eq!(updated.last_changed_date, later);
        assert_eq!(updated.validity.valid_from, fixtures::now());
    }

    #[test]
    fn test_update_and_remove_unknown_are_not_found() {
        let store = fixtures::store();
        let registry = BeneficiaryRegistry::new(&store);
        let missing = BeneficiaryId::new(9);

        assert!(matches!(
            registry.update(missing, &fixtures::beneficiary_input("X", "2"), "bob", fixtures::now()),
            Err(WorkflowError::BeneficiaryNotFound(_))
        ));
        assert!(matches!(
            registry.remove(missing),
            Err(WorkflowError::BeneficiaryNotFound(_))
        ));
    }

    #[test]
    fn test_remove_is_hard_delete() {
        let store = fixtures::store();
        let registry = BeneficiaryRegistry::new(&store);

        registry.remove(BeneficiaryId::new(1)).unwrap();

        assert!(registry.list(BeneficiaryFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_check_against_registry() {
        let store = fixtures::store();
        let registry = BeneficiaryRegistry::new(&store);

        let hit = BeneficiaryKeys {
            account_number: Some("87654322".to_string()),
            ..BeneficiaryKeys::default()
        };
        let miss = BeneficiaryKeys {
            account_number: Some("11111112".to_string()),
            iban: Some(String::new()),
            swift_code: None,
        };

        assert!(registry.duplicate_check(&hit).unwrap());
        assert!(!registry.duplicate_check(&miss).unwrap());
    }
}
