//! Configuration loading and layering.
//!
//! Handles `.devchains.toml` loading, environment variable resolution,
//! and conversion into [`crate::chains::ChainSettings`].

pub mod loader;

pub use loader::{ChainsConfig, Config, ConfigError, LogConfig, VerificationConfig};
