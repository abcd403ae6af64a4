// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Monotonic clock snapshots
//!
//! ```rust,no_run
//! use upm_utilities::{clock_init, elapsed_us};
//!
//! let start = clock_init();
//! // ... talk to the sensor ...
//! let took_us = elapsed_us(&start);
//! ```

use core::time::Duration;

use crate::hal::TimeProvider;
use crate::platforms::{active_platform, ActivePlatform};

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;

type RawInstant = <ActivePlatform as TimeProvider>::Instant;

/// Opaque timestamp on the active platform's monotonic clock
///
/// Only meaningful against a later reading on the same platform: on the
/// POSIX backend it holds seconds and nanoseconds, on Zephyr a kernel tick
/// count. Snapshots are never mutated after capture.
#[derive(Debug, Clone, Copy)]
pub struct ClockSnapshot {
    instant: RawInstant,
}

impl ClockSnapshot {
    /// Capture the current monotonic time
    pub fn now() -> Self {
        Self {
            instant: active_platform().now(),
        }
    }

    /// Time elapsed since this snapshot, zero if the clock reads earlier
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns())
    }

    /// Whole milliseconds elapsed since this snapshot
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns() / NANOS_PER_MILLI
    }

    /// Whole microseconds elapsed since this snapshot
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_ns() / NANOS_PER_MICRO
    }

    /// Nanoseconds elapsed since this snapshot
    ///
    /// Resolution is whatever the platform clock offers; sub-microsecond
    /// figures are best effort.
    pub fn elapsed_ns(&self) -> u64 {
        active_platform().elapsed_ns(&self.instant)
    }
}

/// Initialize a clock snapshot at the current monotonic time
///
/// # Example
/// ```rust,no_run
/// use upm_utilities::{clock_init, elapsed_ms};
///
/// let start = clock_init();
/// let delta_ms = elapsed_ms(&start);
/// ```
pub fn clock_init() -> ClockSnapshot {
    ClockSnapshot::now()
}

/// Milliseconds elapsed since `clock` was initialized
pub fn elapsed_ms(clock: &ClockSnapshot) -> u64 {
    clock.elapsed_ms()
}

/// Microseconds elapsed since `clock` was initialized
pub fn elapsed_us(clock: &ClockSnapshot) -> u64 {
    clock.elapsed_us()
}

/// Nanoseconds elapsed since `clock` was initialized
pub fn elapsed_ns(clock: &ClockSnapshot) -> u64 {
    clock.elapsed_ns()
}
