//! Release queue: approved payments waiting to go to the bank in batches.

pub mod service;
pub mod types;

pub use service::{ReleaseQueue, new_batch_id};
pub use types::{BatchSummary, ReleaseFilter, ReleaseQueueItem};
