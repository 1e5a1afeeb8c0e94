//! Key/value configuration governing workflow thresholds and toggles.
//!
//! Values are read from the store at call time; nothing is cached.

pub mod service;
pub mod types;

pub use service::{SettingsService, default_entries};
pub use types::{ConfigDataType, ConfigEntry, Settings};
