// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Debug;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Time and delay abstraction for UPM platforms
///
/// Implementations must read a monotonic source: wall-clock adjustments
/// never move `now()` backwards.
pub trait TimeProvider {
    /// Platform-specific monotonic timestamp
    type Instant: Copy + Debug;

    /// Capture the current value of the monotonic time source
    fn now(&self) -> Self::Instant;

    /// Nanoseconds from `earlier` to `later`
    ///
    /// # Returns
    /// Zero when `later` precedes `earlier`, `u64::MAX` on overflow
    fn nanos_between(&self, earlier: &Self::Instant, later: &Self::Instant) -> u64;

    /// Block for at least the specified number of nanoseconds
    ///
    /// Sub-microsecond accuracy is best effort on every platform.
    ///
    /// # Arguments
    /// * `ns` - Nanoseconds to delay
    fn delay_ns(&self, ns: u64);

    /// Block for at least the specified number of microseconds
    ///
    /// # Arguments
    /// * `us` - Microseconds to delay
    fn delay_us(&self, us: u32) {
        self.delay_ns(u64::from(us) * NANOS_PER_MICRO);
    }

    /// Block for at least the specified number of milliseconds
    ///
    /// # Arguments
    /// * `ms` - Milliseconds to delay
    fn delay_ms(&self, ms: u32) {
        self.delay_ns(u64::from(ms) * NANOS_PER_MILLI);
    }

    /// Block for at least the specified number of seconds
    ///
    /// # Arguments
    /// * `s` - Seconds to delay
    fn delay_s(&self, s: u32) {
        self.delay_ns(u64::from(s) * NANOS_PER_SEC);
    }

    /// Nanoseconds elapsed since `since` was captured
    fn elapsed_ns(&self, since: &Self::Instant) -> u64 {
        let now = self.now();
        self.nanos_between(since, &now)
    }
}
