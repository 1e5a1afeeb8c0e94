//! Configuration entries and the typed settings view.

use chrono::Duration;
use payflow_shared::types::ConfigurationId;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::workflow::error::WorkflowError;

/// Amount at or above which the CFO must sign off.
pub const CFO_APPROVAL_THRESHOLD: &str = "CFO_APPROVAL_THRESHOLD";
/// Amount above which a payment is flagged as out of range.
pub const ANOMALY_DETECTION_THRESHOLD: &str = "ANOMALY_DETECTION_THRESHOLD";
/// Hours an approval may stay pending before it is overdue.
pub const ESCALATION_TIME_LIMIT_HOURS: &str = "ESCALATION_TIME_LIMIT_HOURS";
/// Whether new beneficiaries run through account verification.
pub const COP_ACCOUNT_VERIFICATION_ENABLED: &str = "COP_ACCOUNT_VERIFICATION_ENABLED";
/// Whether foreign payments need two distinct approvers.
pub const DUAL_AUTH_FOREIGN_PAYMENTS: &str = "DUAL_AUTH_FOREIGN_PAYMENTS";

/// Default CFO threshold.
pub const DEFAULT_CFO_THRESHOLD: Decimal = Decimal::from_parts(500_000, 0, 0, false, 0);
/// Default anomaly threshold.
pub const DEFAULT_ANOMALY_THRESHOLD: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Default escalation window in hours.
pub const DEFAULT_ESCALATION_HOURS: i64 = 2;

/// Declared type of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigDataType {
    /// Decimal number.
    Number,
    /// `true` / `false`.
    Boolean,
    /// Free text.
    String,
}

impl fmt::Display for ConfigDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String => "string",
        };
        write!(f, "{s}")
    }
}

/// One configuration entry; values are stored as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigEntry {
    /// Entry ID.
    pub id: ConfigurationId,
    /// Lookup key.
    pub key: String,
    /// Declared type.
    pub data_type: ConfigDataType,
    /// String-encoded value.
    pub value: String,
}

impl ConfigEntry {
    /// Creates a number entry.
    #[must_use]
    pub fn number(id: ConfigurationId, key: &str, value: &str) -> Self {
        Self::typed(id, key, ConfigDataType::Number, value)
    }

    /// Creates a boolean entry.
    #[must_use]
    pub fn boolean(id: ConfigurationId, key: &str, value: bool) -> Self {
        Self::typed(id, key, ConfigDataType::Boolean, &value.to_string())
    }

    fn typed(id: ConfigurationId, key: &str, data_type: ConfigDataType, value: &str) -> Self {
        Self {
            id,
            key: key.to_string(),
            data_type,
            value: value.to_string(),
        }
    }

    /// Parses the value as a number.
    #[must_use]
    pub fn as_number(&self) -> Option<Decimal> {
        Decimal::from_str(self.value.trim()).ok()
    }

    /// Parses the value as a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Checks that `value` parses as this entry's declared type.
    pub fn validate(&self, value: &str) -> Result<(), WorkflowError> {
        let candidate = Self {
            value: value.to_string(),
            ..self.clone()
        };
        let ok = match self.data_type {
            ConfigDataType::Number => candidate.as_number().is_some(),
            ConfigDataType::Boolean => candidate.as_bool().is_some(),
            ConfigDataType::String => true,
        };
        if ok {
            Ok(())
        } else {
            Err(WorkflowError::Validation(format!(
                "{} expects a {} value, got {value:?}",
                self.key, self.data_type
            )))
        }
    }
}

/// Typed, read-only view over configuration entries.
///
/// Missing or unparsable values fall back to defaults.
#[derive(Debug, Clone, Copy)]
pub struct Settings<'a> {
    entries: &'a [ConfigEntry],
}

impl<'a> Settings<'a> {
    /// Wraps a slice of entries.
    #[must_use]
    pub fn new(entries: &'a [ConfigEntry]) -> Self {
        Self { entries }
    }

    /// Finds an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a ConfigEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Reads a number, or `default`.
    #[must_use]
    pub fn number(&self, key: &str, default: Decimal) -> Decimal {
        self.get(key)
            .and_then(ConfigEntry::as_number)
            .unwrap_or(default)
    }

    /// Reads a boolean, or `default`.
    #[must_use]
    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(ConfigEntry::as_bool).unwrap_or(default)
    }

    /// CFO sign-off threshold.
    #[must_use]
    pub fn cfo_threshold(&self) -> Decimal {
        self.number(CFO_APPROVAL_THRESHOLD, DEFAULT_CFO_THRESHOLD)
    }

    /// Anomaly threshold.
    #[must_use]
    pub fn anomaly_threshold(&self) -> Decimal {
        self.number(ANOMALY_DETECTION_THRESHOLD, DEFAULT_ANOMALY_THRESHOLD)
    }

    /// Time an approval may stay pending, at minute resolution.
    #[must_use]
    pub fn escalation_window(&self) -> Duration {
        let hours = self.number(
            ESCALATION_TIME_LIMIT_HOURS,
            Decimal::from(DEFAULT_ESCALATION_HOURS),
        );
        hours
            .checked_mul(Decimal::from(60))
            .and_then(|minutes| minutes.round().to_i64())
            .and_then(Duration::try_minutes)
            .unwrap_or_else(|| Duration::hours(DEFAULT_ESCALATION_HOURS))
    }

    /// Whether account verification runs on beneficiary changes.
    #[must_use]
    pub fn cop_verification_enabled(&self) -> bool {
        self.flag(COP_ACCOUNT_VERIFICATION_ENABLED, true)
    }

    /// Whether foreign payments need two distinct approvers.
    #[must_use]
    pub fn dual_auth_foreign_payments(&self) -> bool {
        self.flag(DUAL_AUTH_FOREIGN_PAYMENTS, true)
    }
}
