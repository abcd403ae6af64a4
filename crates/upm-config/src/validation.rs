// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! This module checks that configuration values are within valid ranges
//! before any backend or subscriber is built from them.

use crate::{ConfigError, ConfigResult, UpmConfig};

/// Log levels understood by the subscriber filter
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Spinning longer than this is a scheduler's job
pub const MAX_SPIN_THRESHOLD_NS: u64 = 1_000_000;

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    InvalidLogLevel { level: String },
    SpinThresholdTooLarge { threshold_ns: u64 },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel { level } => {
                write!(
                    f,
                    "logging.level = '{}' is not one of {}",
                    level,
                    VALID_LOG_LEVELS.join(", ")
                )
            }
            Self::SpinThresholdTooLarge { threshold_ns } => {
                write!(
                    f,
                    "timing.spin_threshold_ns = {} exceeds the {} ns limit",
                    threshold_ns, MAX_SPIN_THRESHOLD_NS
                )
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Known log level
/// - Spin threshold no larger than 1 ms
/// - Non-empty log directory when one is set
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &UpmConfig) -> ConfigResult<()> {
    let errors = collect_validation_errors(config);
    if errors.is_empty() {
        return Ok(());
    }

    let error_messages = errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::ValidationError(format!(
        "Configuration validation failed:\n{}",
        error_messages
    )))
}

/// All validation problems in `config`, empty when it is valid
pub fn collect_validation_errors(config: &UpmConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    let level = config.logging.level.to_lowercase();
    if !VALID_LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidLogLevel {
            level: config.logging.level.clone(),
        });
    }

    if config.timing.spin_threshold_ns > MAX_SPIN_THRESHOLD_NS {
        errors.push(ConfigValidationError::SpinThresholdTooLarge {
            threshold_ns: config.timing.spin_threshold_ns,
        });
    }

    if let Some(dir) = &config.logging.log_dir {
        if dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError::InvalidValue {
                field: "logging.log_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_valid_config_passes() {
        let mut config = UpmConfig::default();
        config.logging.level = "DEBUG".to_string();
        config.timing.spin_threshold_ns = MAX_SPIN_THRESHOLD_NS;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = UpmConfig::default();
        config.logging.level = "verbose".to_string();
        assert_eq!(
            collect_validation_errors(&config),
            vec![ConfigValidationError::InvalidLogLevel {
                level: "verbose".to_string()
            }]
        );
    }

    #[test]
    fn test_errors_are_aggregated() {
        let mut config = UpmConfig::default();
        config.logging.level = "loud".to_string();
        config.timing.spin_threshold_ns = MAX_SPIN_THRESHOLD_NS + 1;
        config.logging.log_dir = Some(PathBuf::new());

        assert_eq!(collect_validation_errors(&config).len(), 3);

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("logging.level"));
        assert!(message.contains("timing.spin_threshold_ns"));
        assert!(message.contains("logging.log_dir"));
    }
}
