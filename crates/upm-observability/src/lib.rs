// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! # upm-observability
//!
//! Logging infrastructure for UPM host tools.
//!
//! Provides consistent `tracing` setup across UPM crates with per-crate
//! debug flag support.
//!
//! ## Features
//! - `file-logging`: Daily-rolling JSON log files (desktop only)

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known UPM crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "upm",
    "upm-utilities",
    "upm-config",
    "upm-observability",
];
