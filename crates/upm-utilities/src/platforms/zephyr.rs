// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Zephyr RTOS backend
//!
//! Time is the kernel uptime tick counter; thread sleeps go through
//! `k_sleep` and short waits through `k_busy_wait`. Requires a kernel built
//! without `CONFIG_USERSPACE` (the `z_impl_*` entry points are called
//! directly) and with `CONFIG_TIMEOUT_64BIT`.

use crate::hal::TimeProvider;
use crate::ticks::TickRate;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

mod sys {
    /// `k_timeout_t` with 64-bit ticks
    #[repr(C)]
    pub struct KTimeout {
        pub ticks: i64,
    }

    extern "C" {
        pub fn z_impl_k_uptime_ticks() -> i64;
        pub fn z_impl_k_sleep(timeout: KTimeout) -> i32;
        pub fn z_impl_k_busy_wait(usec_to_wait: u32);
    }
}

/// Zephyr kernel timing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZephyrTime {
    rate: TickRate,
}

impl ZephyrTime {
    /// Backend using the tick rate baked in at build time
    pub const fn new() -> Self {
        Self {
            rate: TickRate::BUILD,
        }
    }

    /// Backend for a kernel configured with a different tick rate
    pub const fn with_tick_rate(rate: TickRate) -> Self {
        Self { rate }
    }

    /// Kernel tick rate used for conversions
    pub const fn tick_rate(&self) -> TickRate {
        self.rate
    }

    fn sleep_nanos(&self, nanos: u64) {
        if nanos == 0 {
            return;
        }
        // Negative tick counts are K_FOREVER and friends.
        let ticks = i64::try_from(self.rate.nanos_to_ticks_ceil(nanos)).unwrap_or(i64::MAX);
        unsafe {
            sys::z_impl_k_sleep(sys::KTimeout { ticks });
        }
    }

    fn busy_wait_micros(&self, mut micros: u64) {
        while micros > 0 {
            let chunk = u32::try_from(micros).unwrap_or(u32::MAX);
            unsafe { sys::z_impl_k_busy_wait(chunk) }
            micros -= u64::from(chunk);
        }
    }
}

impl Default for ZephyrTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for ZephyrTime {
    type Instant = u64;

    fn now(&self) -> u64 {
        let ticks = unsafe { sys::z_impl_k_uptime_ticks() };
        u64::try_from(ticks).unwrap_or(0)
    }

    fn nanos_between(&self, earlier: &u64, later: &u64) -> u64 {
        self.rate.ticks_to_nanos(later.saturating_sub(*earlier))
    }

    fn delay_ns(&self, ns: u64) {
        self.busy_wait_micros(ns.div_ceil(NANOS_PER_MICRO));
    }

    fn delay_us(&self, us: u32) {
        self.busy_wait_micros(u64::from(us));
    }

    fn delay_ms(&self, ms: u32) {
        self.sleep_nanos(u64::from(ms) * NANOS_PER_MILLI);
    }

    fn delay_s(&self, s: u32) {
        self.sleep_nanos(u64::from(s) * NANOS_PER_SEC);
    }
}
