//! Payments and their settlement receipts.
//!
//! # Modules
//!
//! - `types` - Payment records, inputs and filters
//! - `receipt` - Bank receipts
//! - `lifecycle` - Create, edit, submit and settle operations

pub mod lifecycle;
pub mod receipt;
pub mod types;

pub(crate) use lifecycle::propagate_status;
pub use lifecycle::PaymentLifecycle;
pub use receipt::{AckStatus, BankReceipt, MatchStatus, ReceiptImport, ReceiptStatus};
pub use types::{Payment, PaymentFilter, PaymentInput, generated_reference};
