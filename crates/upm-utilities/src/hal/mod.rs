// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hardware Abstraction Layer (HAL) trait definitions for timing
//!
//! Every platform backend implements `TimeProvider`:
//! - Monotonic time source (`now`, `nanos_between`)
//! - Blocking delays at s/ms/us/ns granularity

/// Timekeeping abstractions (monotonic clock, delays).
pub mod time;

pub use time::TimeProvider;
