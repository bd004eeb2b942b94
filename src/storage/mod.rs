//! Configuration storage.

pub mod config;

pub use config::{AppConfig, ConfigError, LinkSettings, UiSettings};
