// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! POSIX-like host backend
//!
//! Monotonic time comes from `std::time::Instant` (`CLOCK_MONOTONIC` on
//! Linux), sleeps from `std::thread::sleep`, which resumes after signal
//! interruption until the full duration has passed.

use core::time::Duration;
use std::thread;
use std::time::Instant;

use crate::hal::TimeProvider;

/// Host OS timing backend
///
/// Delays at or below `spin_threshold` busy-wait on the monotonic clock
/// instead of asking the scheduler, trading CPU for accuracy on very short
/// waits. The default threshold is zero: every delay sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosixTime {
    spin_threshold: Duration,
}

impl PosixTime {
    /// Backend that always sleeps
    pub const fn new() -> Self {
        Self {
            spin_threshold: Duration::ZERO,
        }
    }

    /// Backend that busy-waits for delays up to `spin_threshold`
    pub const fn with_spin_threshold(spin_threshold: Duration) -> Self {
        Self { spin_threshold }
    }

    /// Longest delay served by busy-waiting
    pub const fn spin_threshold(&self) -> Duration {
        self.spin_threshold
    }

    fn spin_for(&self, duration: Duration) {
        let start = Instant::now();
        while start.elapsed() < duration {
            core::hint::spin_loop();
        }
    }
}

impl Default for PosixTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for PosixTime {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn nanos_between(&self, earlier: &Instant, later: &Instant) -> u64 {
        let nanos = later.saturating_duration_since(*earlier).as_nanos();
        u64::try_from(nanos).unwrap_or(u64::MAX)
    }

    fn delay_ns(&self, ns: u64) {
        if ns == 0 {
            return;
        }
        let duration = Duration::from_nanos(ns);
        if duration <= self.spin_threshold {
            self.spin_for(duration);
        } else {
            thread::sleep(duration);
        }
    }
}
