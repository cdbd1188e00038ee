//! Configuration loading and validation for curator
//!
//! Settings are read once at startup from the environment, overridden by
//! command line flags, validated, and then passed down as an immutable value.

pub mod loader;
pub mod settings;

pub use loader::SettingsLoader;
pub use settings::{ElasticsearchSettings, RuntimeSettings, Settings, TlsSettings};

#[cfg(test)]
mod settings_tests;
