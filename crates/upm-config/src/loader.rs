// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::validation::validate_config;
use crate::{ConfigError, ConfigResult, LogFormat, UpmConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for in the working directory and its parents
pub const CONFIG_FILE_NAME: &str = "upm_configuration.toml";

/// Override key and the environment variable feeding it
const ENV_OVERRIDES: [(&str, &str); 4] = [
    ("log_level", "UPM_LOG_LEVEL"),
    ("log_format", "UPM_LOG_FORMAT"),
    ("log_dir", "UPM_LOG_DIR"),
    ("spin_threshold_ns", "UPM_SPIN_THRESHOLD_NS"),
];

/// Find the UPM configuration file
///
/// Search order:
/// 1. `UPM_CONFIG_PATH` environment variable
/// 2. Current working directory: `./upm_configuration.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("UPM_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by UPM_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        search_paths.extend(
            cwd.ancestors()
                .skip(1)
                .take(5)
                .map(|dir| dir.join(CONFIG_FILE_NAME)),
        );
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "UPM configuration file '{}' not found in any of these locations:\n{}\n\nSet UPM_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Returns
///
/// Complete, validated `UpmConfig` with all overrides applied
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<UpmConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    tracing::debug!("Loading configuration from {}", config_file.display());
    let content = fs::read_to_string(&config_file)?;
    let config: UpmConfig = toml::from_str(&content)?;

    finish(config, cli_args)
}

/// Like `load_config`, but a missing file falls back to built-in defaults
///
/// Only a discovery miss in the working directory and its parents is
/// absorbed. An explicit `config_path` or `UPM_CONFIG_PATH` that does not
/// exist is still an error.
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<UpmConfig> {
    // An explicit path, or one named by UPM_CONFIG_PATH, must exist
    if config_path.is_some() || env::var_os("UPM_CONFIG_PATH").is_some() {
        return load_config(config_path, cli_args);
    }

    match find_config_file() {
        Ok(path) => load_config(Some(&path), cli_args),
        Err(ConfigError::FileNotFound(searched)) => {
            tracing::warn!("No configuration file, using defaults. {}", searched);
            finish(UpmConfig::default(), cli_args)
        }
        Err(e) => Err(e),
    }
}

fn finish(
    mut config: UpmConfig,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<UpmConfig> {
    apply_environment_overrides(&mut config)?;
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli)?;
    }
    validate_config(&config)?;
    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `UPM_LOG_LEVEL` -> `logging.level`
/// - `UPM_LOG_FORMAT` -> `logging.format`
/// - `UPM_LOG_DIR` -> `logging.log_dir`
/// - `UPM_SPIN_THRESHOLD_NS` -> `timing.spin_threshold_ns`
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a variable is set but unparsable
pub fn apply_environment_overrides(config: &mut UpmConfig) -> ConfigResult<()> {
    for (key, var) in ENV_OVERRIDES {
        if let Ok(value) = env::var(var) {
            apply_override(config, key, &value)?;
        }
    }
    Ok(())
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"log_level": "debug", "spin_threshold_ns": "5000"}`)
///
/// Unknown keys are ignored.
pub fn apply_cli_overrides(
    config: &mut UpmConfig,
    cli_args: &HashMap<String, String>,
) -> ConfigResult<()> {
    for (key, value) in cli_args {
        apply_override(config, key, value)?;
    }
    Ok(())
}

fn apply_override(config: &mut UpmConfig, key: &str, value: &str) -> ConfigResult<()> {
    match key {
        "log_level" => config.logging.level = value.trim().to_lowercase(),
        "log_format" => config.logging.format = value.parse::<LogFormat>()?,
        "log_dir" => {
            config.logging.log_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            }
        }
        "spin_threshold_ns" => {
            config.timing.spin_threshold_ns = value.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue(format!(
                    "timing.spin_threshold_ns must be an unsigned integer, got '{}': {}",
                    value, e
                ))
            })?;
        }
        other => tracing::debug!("Ignoring unknown configuration override '{}'", other),
    }
    Ok(())
}
