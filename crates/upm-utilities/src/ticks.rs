// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Conversions between kernel ticks and nanoseconds
//!
//! RTOS kernels count time in ticks of a fixed rate. Sleeps must round up to
//! whole ticks so a caller never waits less than requested; elapsed-time
//! readings truncate.

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Tick rate used when the build environment does not provide one
pub const DEFAULT_TICKS_PER_SEC: u64 = 10_000;

/// Ticks per second of a kernel system clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickRate(u64);

impl TickRate {
    /// Rate taken from `CONFIG_SYS_CLOCK_TICKS_PER_SEC` at build time
    pub const BUILD: TickRate = TickRate(parse_ticks_per_sec(option_env!(
        "CONFIG_SYS_CLOCK_TICKS_PER_SEC"
    )));

    /// Create a tick rate, `None` for a zero rate
    pub const fn new(ticks_per_sec: u64) -> Option<Self> {
        if ticks_per_sec == 0 {
            None
        } else {
            Some(TickRate(ticks_per_sec))
        }
    }

    /// Ticks per second
    pub const fn ticks_per_sec(self) -> u64 {
        self.0
    }

    /// Convert a tick count to nanoseconds, truncating
    pub fn ticks_to_nanos(self, ticks: u64) -> u64 {
        let nanos = u128::from(ticks) * NANOS_PER_SEC / u128::from(self.0);
        u64::try_from(nanos).unwrap_or(u64::MAX)
    }

    /// Convert nanoseconds to ticks, rounding up to the next whole tick
    pub fn nanos_to_ticks_ceil(self, nanos: u64) -> u64 {
        let scaled = u128::from(nanos) * u128::from(self.0);
        let ticks = scaled.div_ceil(NANOS_PER_SEC);
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }
}

impl Default for TickRate {
    fn default() -> Self {
        TickRate::BUILD
    }
}

/// Parse a decimal tick rate, falling back to `DEFAULT_TICKS_PER_SEC`
const fn parse_ticks_per_sec(value: Option<&str>) -> u64 {
    let bytes = match value {
        Some(v) => v.as_bytes(),
        None => return DEFAULT_TICKS_PER_SEC,
    };
    if bytes.is_empty() {
        return DEFAULT_TICKS_PER_SEC;
    }

    let mut acc: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if !digit.is_ascii_digit() {
            return DEFAULT_TICKS_PER_SEC;
        }
        acc = match acc.checked_mul(10) {
            Some(v) => v,
            None => return DEFAULT_TICKS_PER_SEC,
        };
        acc = match acc.checked_add((digit - b'0') as u64) {
            Some(v) => v,
            None => return DEFAULT_TICKS_PER_SEC,
        };
        i += 1;
    }

    if acc == 0 {
        DEFAULT_TICKS_PER_SEC
    } else {
        acc
    }
}
