// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Unified logging initialization for UPM host tools
//!
//! Installs a `tracing` subscriber with a console layer (text or JSON) and,
//! with the `file-logging` feature, a daily-rolling JSON file layer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};
use upm_config::{LogFormat, LoggingConfig};

use crate::cli::CrateDebugFlags;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging initialization result
///
/// Keep it alive for the life of the program: dropping it flushes and
/// stops the file writer.
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Directory receiving log files, `None` for console-only logging
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Build the subscriber filter from the base level and per-crate flags
///
/// `RUST_LOG`-style directives are not read from the environment; the
/// configured level and `--debug-*` flags are the only inputs.
pub fn build_env_filter(config: &LoggingConfig, debug_flags: &CrateDebugFlags) -> Result<EnvFilter> {
    let directives = debug_flags.to_filter_string(&config.level.to_lowercase());
    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter directives: {}", directives))
}

/// Initialize logging with console output and optional file output
///
/// # Arguments
/// * `config` - Logging section of the UPM configuration
/// * `debug_flags` - Per-crate debug flags for filtering
///
/// # Errors
/// Fails if the filter cannot be built, the log directory cannot be
/// created, or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, debug_flags: &CrateDebugFlags) -> Result<LoggingGuard> {
    let env_filter = build_env_filter(config, debug_flags)?;

    let console_layer: BoxedLayer = match config.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed(),
    };
    #[cfg_attr(not(feature = "file-logging"), allow(unused_mut))]
    let mut layers = vec![console_layer];

    #[cfg(feature = "file-logging")]
    let (file_guard, log_dir) = match &config.log_dir {
        Some(dir) => {
            let (layer, guard) = file_layer(dir)?;
            layers.push(layer);
            (Some(guard), Some(dir.clone()))
        }
        None => (None, None),
    };

    #[cfg(not(feature = "file-logging"))]
    let log_dir: Option<PathBuf> = None;

    Registry::default()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    #[cfg(not(feature = "file-logging"))]
    {
        if let Some(dir) = &config.log_dir {
            tracing::warn!(
                "logging.log_dir = {} ignored: built without the file-logging feature",
                dir.display()
            );
        }
    }

    tracing::debug!("Logging initialized (level: {}, format: {})", config.level, config.format);

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guard: file_guard,
        log_dir,
    })
}

#[cfg(feature = "file-logging")]
fn file_layer(dir: &Path) -> Result<(BoxedLayer, tracing_appender::non_blocking::WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, "upm.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .boxed();

    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter() {
        let config = LoggingConfig {
            level: "WARN".to_string(),
            ..LoggingConfig::default()
        };
        let flags = CrateDebugFlags::from_args(vec!["--debug-upm-utilities".to_string()]);
        let filter = build_env_filter(&config, &flags).unwrap();
        let rendered = filter.to_string().to_lowercase();
        assert!(rendered.contains("upm_utilities=debug"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn test_build_env_filter_rejects_bad_level() {
        let config = LoggingConfig {
            level: "upm=loud".to_string(),
            ..LoggingConfig::default()
        };
        assert!(build_env_filter(&config, &CrateDebugFlags::default()).is_err());
    }

    #[cfg(feature = "file-logging")]
    #[test]
    fn test_file_layer_creates_log_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs").join("probe");
        let (_layer, _guard) = file_layer(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_init_only_once() {
        let flags = CrateDebugFlags::default();
        let config = LoggingConfig::default();
        let guard = init_logging(&config, &flags).unwrap();
        assert!(guard.log_dir().is_none());

        assert!(init_logging(&config, &flags).is_err());
    }
}
