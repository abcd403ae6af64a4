// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Blocking delays on the active platform
//!
//! All functions suspend only the calling thread or task, for at least the
//! requested time. Nothing is returned and nothing can fail.

use crate::hal::TimeProvider;
use crate::platforms::active_platform;

/// Delay for a number of seconds
pub fn delay(seconds: u32) {
    tracing::trace!(seconds, "delay");
    active_platform().delay_s(seconds);
}

/// Delay for a number of milliseconds
pub fn delay_ms(ms: u32) {
    tracing::trace!(ms, "delay_ms");
    active_platform().delay_ms(ms);
}

/// Delay for a number of microseconds
pub fn delay_us(us: u32) {
    tracing::trace!(us, "delay_us");
    active_platform().delay_us(us);
}

/// Delay for a number of nanoseconds
///
/// Sub-microsecond accuracy is generally unavailable on a stock OS and not
/// every architecture has a high resolution timer, so treat this as a lower
/// bound only.
pub fn delay_ns(ns: u64) {
    tracing::trace!(ns, "delay_ns");
    active_platform().delay_ns(ns);
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::clock::{clock_init, elapsed_ms, elapsed_ns, elapsed_us};

    #[test]
    fn test_delay_ms_blocks_at_least_requested() {
        for requested in [0u32, 1, 5, 20] {
            let start = clock_init();
            delay_ms(requested);
            assert!(elapsed_ms(&start) >= u64::from(requested));
        }
    }

    #[test]
    fn test_delay_us_blocks_at_least_requested() {
        let start = clock_init();
        delay_us(750);
        assert!(elapsed_us(&start) >= 750);
    }

    #[test]
    fn test_delay_ns_blocks_at_least_requested() {
        let start = clock_init();
        delay_ns(50_000);
        assert!(elapsed_ns(&start) >= 50_000);
    }

    #[test]
    fn test_delay_seconds() {
        let start = clock_init();
        delay(1);
        assert!(elapsed_ms(&start) >= 1_000);
    }
}
