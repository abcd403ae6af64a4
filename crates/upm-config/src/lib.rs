// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! # UPM Configuration System
//!
//! Type-safe configuration loader for UPM host tools with support for:
//! - TOML file parsing (`upm_configuration.toml`)
//! - Environment variable overrides
//! - CLI argument overrides
//! - Validation with aggregated error reporting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use upm_config::{load_config, UpmConfig};
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! println!("Spin threshold: {} ns", config.timing.spin_threshold_ns);
//! println!("Log level: {}", config.logging.level);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    load_config_or_default, CONFIG_FILE_NAME,
};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = UpmConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_parse_error_conversion() {
        let err = toml::from_str::<UpmConfig>("[timing\nspin_threshold_ns = 1").unwrap_err();
        let config_err = ConfigError::from(err);
        assert!(matches!(config_err, ConfigError::ParseError(_)));
        assert!(config_err.to_string().starts_with("Invalid TOML syntax"));
    }
}
