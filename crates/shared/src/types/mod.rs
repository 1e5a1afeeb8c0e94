//! Common types used across the application.

pub mod id;
pub mod validity;

pub use id::*;
pub use validity::{Validity, far_future};
