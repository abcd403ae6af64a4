// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! # UPM Utilities
//!
//! Timing primitives shared by UPM sensor and actuator drivers, plus an
//! air-quality helper.
//!
//! This crate provides:
//! - **HAL trait** (`hal` module): `TimeProvider`, the capability set every
//!   platform backend implements (delays, monotonic now, elapsed)
//! - **Platform backends** (`platforms` module): POSIX-like host OS and
//!   Zephyr RTOS, selected by Cargo feature at build time
//! - **Free functions**: `delay`, `delay_ms`, `delay_us`, `delay_ns`,
//!   `clock_init`, `elapsed_ms`, `elapsed_us`, `elapsed_ns`
//! - **AQI conversion** (`aqi` module): `ugm3_to_aqi`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use upm_utilities::{clock_init, delay_ms, elapsed_us};
//!
//! let start = clock_init();
//! delay_ms(20);
//! let waited_us = elapsed_us(&start);
//! assert!(waited_us >= 20_000);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default) - POSIX-like backend on top of `std::thread::sleep` and
//!   `std::time::Instant`
//! - `zephyr` - Zephyr backend on top of `k_sleep`, `k_busy_wait` and the
//!   kernel uptime tick counter (build with `default-features = false`)

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "zephyr")))]
compile_error!("upm-utilities needs a platform backend: enable the `std` or `zephyr` feature");

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// EPA Air Quality Index conversion.
pub mod aqi;
/// Opaque monotonic clock snapshots and elapsed-time queries.
pub mod clock;
/// Blocking delays routed to the active backend.
pub mod delay;
/// Hardware abstraction traits shared by all backends.
pub mod hal;
/// Concrete platform backends (POSIX host, Zephyr RTOS).
pub mod platforms;
/// Kernel tick rate conversions.
pub mod ticks;

pub use aqi::{aqi_category, ugm3_to_aqi, AqiCategory, Breakpoint, PM25_BREAKPOINTS};
pub use clock::{clock_init, elapsed_ms, elapsed_ns, elapsed_us, ClockSnapshot};
pub use delay::{delay, delay_ms, delay_ns, delay_us};
pub use hal::TimeProvider;
pub use platforms::{active_platform, ActivePlatform, PlatformType};
pub use ticks::TickRate;

#[cfg(feature = "std")]
pub use platforms::PosixTime;

#[cfg(feature = "zephyr")]
pub use platforms::ZephyrTime;

/// Prelude module for convenient imports
///
/// ```no_run
/// use upm_utilities::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aqi::{ugm3_to_aqi, AqiCategory};
    pub use crate::clock::{clock_init, elapsed_ms, elapsed_ns, elapsed_us, ClockSnapshot};
    pub use crate::delay::{delay, delay_ms, delay_ns, delay_us};
    pub use crate::hal::TimeProvider;
}
