//! Typed IDs for type-safe entity references.
//!
//! Records are numbered per collection, so every ID wraps a `u64`.
//! Using typed IDs prevents accidentally passing a `PaymentId` where an `ApprovalId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Creates an ID from a raw number.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the inner number.
            #[must_use]
            pub const fn into_inner(self) -> u64 {
                self.0
            }

            /// Returns the ID that follows the largest of `existing`.
            ///
            /// An empty collection starts at 1.
            #[must_use]
            pub fn next_after<I>(existing: I) -> Self
            where
                I: IntoIterator<Item = Self>,
            {
                Self(existing.into_iter().map(|id| id.0).max().unwrap_or(0) + 1)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(BeneficiaryId, "Unique identifier for a beneficiary.");
typed_id!(PaymentId, "Unique identifier for a payment.");
typed_id!(ApprovalId, "Unique identifier for an approval request.");
typed_id!(ReleaseQueueId, "Unique identifier for a release queue item.");
typed_id!(BankReceiptId, "Unique identifier for a bank receipt.");
typed_id!(ConfigurationId, "Unique identifier for a configuration entry.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
