//! Administrative access to configuration entries.

use payflow_shared::types::ConfigurationId;

use crate::settings::types::{
    ANOMALY_DETECTION_THRESHOLD, CFO_APPROVAL_THRESHOLD, COP_ACCOUNT_VERIFICATION_ENABLED,
    ConfigEntry, DUAL_AUTH_FOREIGN_PAYMENTS, ESCALATION_TIME_LIMIT_HOURS,
};
use crate::store::{Store, StoreState};
use crate::workflow::error::WorkflowError;

/// The five entries every fresh store starts with.
#[must_use]
pub fn default_entries() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::number(ConfigurationId::new(1), CFO_APPROVAL_THRESHOLD, "500000"),
        ConfigEntry::number(ConfigurationId::new(2), ANOMALY_DETECTION_THRESHOLD, "1000000"),
        ConfigEntry::number(ConfigurationId::new(3), ESCALATION_TIME_LIMIT_HOURS, "2"),
        ConfigEntry::boolean(ConfigurationId::new(4), COP_ACCOUNT_VERIFICATION_ENABLED, true),
        ConfigEntry::boolean(ConfigurationId::new(5), DUAL_AUTH_FOREIGN_PAYMENTS, true),
    ]
}

/// Configuration reads and administrative updates.
#[derive(Debug, Clone, Copy)]
pub struct SettingsService<'a> {
    store: &'a Store,
}

impl<'a> SettingsService<'a> {
    /// Creates the service over a store.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Lists every configuration entry.
    pub fn list(&self) -> Result<Vec<ConfigEntry>, WorkflowError> {
        Ok(self.store.read(|s| s.configurations.clone())?)
    }

    /// Replaces the value of one entry after checking it against its type.
    ///
    /// # Errors
    ///
    /// - `ConfigurationNotFound` if no entry has `id`
    /// - `Validation` if `value` does not parse as the entry's type
    pub fn update(&self, id: ConfigurationId, value: &str) -> Result<ConfigEntry, WorkflowError> {
        self.store.transact(|state| {
            let entry = state
                .configuration_mut(id)
                .ok_or(WorkflowError::ConfigurationNotFound(id))?;
            entry.validate(value)?;
            entry.value = value.trim().to_string();
            Ok(entry.clone())
        })
    }

    /// Replaces the whole document, e.g. with the demo seed.
    pub fn reset_to(&self, seed: StoreState) -> Result<(), WorkflowError> {
        self.store.transact(|state| {
            *state = seed;
            Ok(())
        })
    }
}
