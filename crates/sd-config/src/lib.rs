//! Sales dashboard configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the dashboard config file
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation of thresholds and windows

pub mod dashboard;
pub mod resolve;
pub mod validate;

pub use dashboard::{
    AlertThresholds, DashboardConfig, RoleDirectory, SheetSettings, TrendSettings,
};
pub use resolve::{resolve_config, ConfigError, ConfigSource, ResolvedConfig, CONFIG_ENV_VAR};
pub use validate::{validate_config, ValidationError};
