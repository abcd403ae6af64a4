// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! # UPM - timing utilities for sensor and actuator drivers
//!
//! Umbrella crate re-exporting the delay, clock snapshot and AQI helpers from
//! `upm-utilities`, with the platform backend selected by Cargo feature.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! upm = "0.1"  # Default: host backend + config + logging
//! ```
//!
//! ```rust,no_run
//! use upm::prelude::*;
//!
//! let start = clock_init();
//! delay_ms(50);
//! println!("waited {} us", elapsed_us(&start));
//! println!("AQI for 20 ug/m3: {}", ugm3_to_aqi(20.0));
//! ```
//!
//! ## Feature Flags
//!
//! - **`platform-std`** (default): host backend, plus the `config` and
//!   `observability` layers
//! - **`platform-zephyr`**: Zephyr RTOS backend, `no_std`
//!   (use with `default-features = false`)
//! - **`file-logging`**: daily-rolling JSON log files
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application: upm-timing-probe                          │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Infrastructure: upm-config, upm-observability          │
//! │  (TOML + overrides, tracing subscriber)                 │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  HAL: upm-utilities                                     │
//! │  (TimeProvider, PosixTime / ZephyrTime, AQI)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

#![cfg_attr(not(feature = "platform-std"), no_std)]

pub use upm_utilities as utilities;
pub use upm_utilities::{
    active_platform, aqi_category, clock_init, delay, delay_ms, delay_ns, delay_us, elapsed_ms,
    elapsed_ns, elapsed_us, ugm3_to_aqi, ActivePlatform, AqiCategory, ClockSnapshot, PlatformType,
    TickRate, TimeProvider,
};

#[cfg(feature = "platform-std")]
pub use upm_utilities::PosixTime;

#[cfg(feature = "platform-zephyr")]
pub use upm_utilities::ZephyrTime;

// Host-only infrastructure
#[cfg(feature = "platform-std")]
pub use upm_config as config;

#[cfg(feature = "platform-std")]
pub use upm_observability as observability;

/// Build the host backend described by the `[timing]` configuration section
#[cfg(feature = "platform-std")]
pub fn configured_platform(timing: &upm_config::TimingConfig) -> PosixTime {
    let threshold = core::time::Duration::from_nanos(timing.spin_threshold_ns);
    tracing::debug!(spin_threshold_ns = timing.spin_threshold_ns, "configured host timing backend");
    PosixTime::with_spin_threshold(threshold)
}

/// Prelude - commonly used functions and types
pub mod prelude {
    pub use upm_utilities::prelude::*;

    #[cfg(feature = "platform-std")]
    pub use crate::configured_platform;
}
