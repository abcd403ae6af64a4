// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Platform backends for the timing HAL
//!
//! Each backend implements `crate::hal::TimeProvider`. Exactly one of them
//! is the `ActivePlatform` behind the crate's free functions; the choice is
//! made by Cargo feature at build time, never at runtime.
//!
//! Available backends:
//! - POSIX-like host OS (`std` feature): Linux, macOS, other unixes
//! - Zephyr RTOS (`zephyr` feature): any Zephyr board, `no_std`
//!
//! When both features are enabled (feature unification in a workspace) the
//! POSIX backend is active and the Zephyr backend stays available by type.

#[cfg(feature = "std")]
pub mod posix;

#[cfg(feature = "zephyr")]
pub mod zephyr;

#[cfg(feature = "std")]
pub use posix::PosixTime;

#[cfg(feature = "zephyr")]
pub use zephyr::ZephyrTime;

/// Backend behind `delay*`, `clock_init` and `elapsed_*`
#[cfg(feature = "std")]
pub type ActivePlatform = PosixTime;

/// Backend behind `delay*`, `clock_init` and `elapsed_*`
#[cfg(all(feature = "zephyr", not(feature = "std")))]
pub type ActivePlatform = ZephyrTime;

/// Default-configured instance of the active backend
pub const fn active_platform() -> ActivePlatform {
    ActivePlatform::new()
}

/// Backend families known to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    /// General-purpose OS with POSIX-like sleep and monotonic clock
    Posix,
    /// Zephyr RTOS kernel
    Zephyr,
}

impl PlatformType {
    /// Get platform type name
    pub fn name(&self) -> &'static str {
        match self {
            PlatformType::Posix => "POSIX",
            PlatformType::Zephyr => "Zephyr",
        }
    }

    /// Backend selected for this build
    pub const fn active() -> Self {
        #[cfg(feature = "std")]
        {
            PlatformType::Posix
        }
        #[cfg(all(feature = "zephyr", not(feature = "std")))]
        {
            PlatformType::Zephyr
        }
    }
}
