// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration file to host backend, end to end.

#![cfg(feature = "platform-std")]

use std::collections::HashMap;
use std::fs;
use std::time::{Duration, Instant};

use tempfile::TempDir;
use upm::config::{load_config, LogFormat};
use upm::{configured_platform, TimeProvider};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("upm_configuration.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_file_settings_reach_backend() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[timing]
spin_threshold_ns = 200000

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = load_config(Some(&path), None).unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    let platform = configured_platform(&config.timing);
    assert_eq!(platform.spin_threshold(), Duration::from_micros(200));

    let start = Instant::now();
    platform.delay_us(150);
    assert!(start.elapsed() >= Duration::from_micros(150));
}

#[test]
fn test_cli_override_beats_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[timing]\nspin_threshold_ns = 1000\n");

    let mut cli = HashMap::new();
    cli.insert("spin_threshold_ns".to_string(), "0".to_string());

    let config = load_config(Some(&path), Some(&cli)).unwrap();
    assert_eq!(configured_platform(&config.timing).spin_threshold(), Duration::ZERO);
}

#[test]
fn test_rejected_threshold_never_builds_backend() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[timing]\nspin_threshold_ns = 5000000\n");
    assert!(load_config(Some(&path), None).is_err());
}
