//! Validity window carried by every stored record.
//!
//! A record with `ValidTo` at the far-future sentinel is the current version.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Returns the sentinel `9999-12-31T23:59:59Z` used for open-ended validity.
#[must_use]
pub fn far_future() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Validity window of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Validity {
    /// Start of validity (inclusive).
    pub valid_from: DateTime<Utc>,
    /// End of validity (inclusive).
    pub valid_to: DateTime<Utc>,
}

impl Validity {
    /// Opens a window starting at `from` with no end.
    #[must_use]
    pub fn open_from(from: DateTime<Utc>) -> Self {
        Self {
            valid_from: from,
            valid_to: far_future(),
        }
    }

    /// Returns true if the window has no end.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.valid_to >= far_future()
    }

    /// Returns true if `at` falls inside the window.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.valid_from <= at && at <= self.valid_to
    }
}
