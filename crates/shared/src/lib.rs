//! Shared types, errors, and configuration for Payflow.
//!
//! This crate provides common types used across all other crates:
//! - Typed numeric IDs for type-safe entity references
//! - The validity window carried by every stored record
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
