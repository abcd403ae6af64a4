// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Timing probe for UPM host builds.
//!
//! Measures each delay unit against the monotonic clock and reports requested
//! vs. measured durations, so the backend can be checked on a new machine or
//! with a new spin threshold. Optionally converts PM2.5 readings to AQI.

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use upm::config::{load_config_or_default, LogFormat};
use upm::observability::{debug_flags_help, init_logging, parse_debug_flags};
use upm::{aqi_category, configured_platform, ugm3_to_aqi, ClockSnapshot, PlatformType, TimeProvider};

/// UPM timing probe - measure delay accuracy and convert PM2.5 readings
#[derive(Parser, Debug)]
#[command(name = "upm-timing-probe", version, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Path to upm_configuration.toml (default: discovered, or built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Measurements per delay unit
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Requested length of the millisecond delay
    #[arg(long, default_value_t = 10)]
    delay_ms: u32,

    /// Requested length of the microsecond delay
    #[arg(long, default_value_t = 500)]
    delay_us: u32,

    /// Requested length of the nanosecond delay
    #[arg(long, default_value_t = 50_000)]
    delay_ns: u64,

    /// Also measure a one-second delay
    #[arg(long, default_value_t = false)]
    seconds: bool,

    /// Override timing.spin_threshold_ns
    #[arg(long)]
    spin_threshold_ns: Option<u64>,

    /// Override logging.format (text, json)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// PM2.5 concentration (ug/m3) to convert; may be repeated
    #[arg(long = "ugm3", value_name = "UGM3")]
    ugm3: Vec<f64>,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn cli_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if self.verbose {
            overrides.insert("log_level".to_string(), "debug".to_string());
        }
        if let Some(threshold) = self.spin_threshold_ns {
            overrides.insert("spin_threshold_ns".to_string(), threshold.to_string());
        }
        if let Some(format) = self.log_format {
            overrides.insert("log_format".to_string(), format.to_string());
        }
        overrides
    }
}

/// Min / mean / max of the measured durations for one delay unit
#[derive(Debug, Default)]
struct Measurement {
    requested: Duration,
    min: Duration,
    max: Duration,
    total: Duration,
    samples: u32,
    short: u32,
}

impl Measurement {
    fn new(requested: Duration) -> Self {
        Self {
            requested,
            min: Duration::MAX,
            ..Self::default()
        }
    }

    fn record(&mut self, measured: Duration) {
        self.min = self.min.min(measured);
        self.max = self.max.max(measured);
        self.total += measured;
        self.samples += 1;
        if measured < self.requested {
            self.short += 1;
        }
    }

    fn mean(&self) -> Duration {
        if self.samples == 0 {
            Duration::ZERO
        } else {
            self.total / self.samples
        }
    }
}

fn measure<P, F>(platform: &P, label: &str, requested: Duration, iterations: u32, delay: F)
where
    P: TimeProvider,
    F: Fn(&P),
{
    let mut measurement = Measurement::new(requested);
    for _ in 0..iterations {
        let start = platform.now();
        delay(platform);
        measurement.record(Duration::from_nanos(platform.elapsed_ns(&start)));
    }

    info!(
        "{:<7} requested {:>12?}  min {:>12?}  mean {:>12?}  max {:>12?}",
        label,
        measurement.requested,
        measurement.min,
        measurement.mean(),
        measurement.max
    );
    if measurement.short > 0 {
        warn!(
            "{}: {} of {} delays returned early",
            label, measurement.short, measurement.samples
        );
    }
}

fn main() -> Result<()> {
    // --debug-<crate> flags are read by parse_debug_flags, not clap
    let args = Args::parse_from(env::args().filter(|arg| !arg.starts_with("--debug-")));

    let config = load_config_or_default(args.config.as_deref(), Some(&args.cli_overrides()))
        .context("Failed to load UPM configuration")?;

    let _logging = init_logging(&config.logging, &parse_debug_flags())
        .context("Failed to initialize logging")?;

    let platform = configured_platform(&config.timing);
    info!(
        "UPM timing probe v{} on {} backend (spin threshold {:?})",
        upm::utilities::VERSION,
        PlatformType::active().name(),
        platform.spin_threshold()
    );
    debug!("Configuration: {:?}", config);

    let since_start = ClockSnapshot::now();

    if args.seconds {
        measure(&platform, "delay_s", Duration::from_secs(1), args.iterations, |p| p.delay_s(1));
    }
    measure(
        &platform,
        "delay_ms",
        Duration::from_millis(u64::from(args.delay_ms)),
        args.iterations,
        |p| p.delay_ms(args.delay_ms),
    );
    measure(
        &platform,
        "delay_us",
        Duration::from_micros(u64::from(args.delay_us)),
        args.iterations,
        |p| p.delay_us(args.delay_us),
    );
    measure(
        &platform,
        "delay_ns",
        Duration::from_nanos(args.delay_ns),
        args.iterations,
        |p| p.delay_ns(args.delay_ns),
    );

    info!("Probe finished in {} ms", since_start.elapsed_ms());

    for ugm3 in &args.ugm3 {
        let aqi = ugm3_to_aqi(*ugm3);
        info!("PM2.5 {:>7.1} ug/m3 -> AQI {:>3} ({})", ugm3, aqi, aqi_category(aqi));
    }

    Ok(())
}
