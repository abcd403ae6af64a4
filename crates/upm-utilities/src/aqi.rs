// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! EPA Air Quality Index for fine particulate matter (PM2.5)
//!
//! Implements the piecewise-linear EPA formula
//!
//! ```text
//! I = (I_hi - I_lo) / (C_hi - C_lo) * (C - C_lo) + I_lo
//! ```
//!
//! over the 2012 PM2.5 breakpoint table. Concentrations are truncated to
//! one decimal before lookup and the index is rounded to the nearest
//! integer, as the EPA reporting rules require. The arithmetic runs on
//! integer tenths of µg/m³ so breakpoint edges are exact.
//!
//! Out-of-table input: negative or NaN concentrations map to 0, anything
//! above the last breakpoint maps to 500.

/// Concentrations are handled in tenths of µg/m³.
const TENTHS_PER_UNIT: f64 = 10.0;

/// Absorbs binary representation error before truncating to tenths
/// (`35.4 * 10.0` must land on 354, not 353).
const TRUNCATION_EPSILON: f64 = 1e-6;

/// Highest index on the scale
pub const AQI_MAX: i32 = 500;

/// EPA health category for an AQI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiCategory {
    /// 0 - 50
    Good,
    /// 51 - 100
    Moderate,
    /// 101 - 150
    UnhealthyForSensitiveGroups,
    /// 151 - 200
    Unhealthy,
    /// 201 - 300
    VeryUnhealthy,
    /// 301 - 500
    Hazardous,
}

impl AqiCategory {
    /// Get category label as published by the EPA
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

impl core::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the breakpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Lowest concentration of the row, in tenths of µg/m³
    pub conc_lo_tenths: u32,
    /// Highest concentration of the row, in tenths of µg/m³
    pub conc_hi_tenths: u32,
    /// Index at `conc_lo_tenths`
    pub aqi_lo: i32,
    /// Index at `conc_hi_tenths`
    pub aqi_hi: i32,
    /// Category the row belongs to
    pub category: AqiCategory,
}

impl Breakpoint {
    const fn new(
        conc_lo_tenths: u32,
        conc_hi_tenths: u32,
        aqi_lo: i32,
        aqi_hi: i32,
        category: AqiCategory,
    ) -> Self {
        Self {
            conc_lo_tenths,
            conc_hi_tenths,
            aqi_lo,
            aqi_hi,
            category,
        }
    }

    /// Whether `tenths` falls inside this row
    pub fn contains(&self, tenths: u32) -> bool {
        (self.conc_lo_tenths..=self.conc_hi_tenths).contains(&tenths)
    }

    /// Linear interpolation inside the row, rounded half up
    fn interpolate(&self, tenths: u32) -> i32 {
        let span_aqi = i64::from(self.aqi_hi - self.aqi_lo);
        let span_conc = i64::from(self.conc_hi_tenths - self.conc_lo_tenths);
        let offset = i64::from(tenths - self.conc_lo_tenths);

        let numerator = span_aqi * offset;
        let rounded = (2 * numerator + span_conc) / (2 * span_conc);
        self.aqi_lo + rounded as i32
    }
}

/// EPA 2012 PM2.5 breakpoints (24-hour average)
pub const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0, 120, 0, 50, AqiCategory::Good),
    Breakpoint::new(121, 354, 51, 100, AqiCategory::Moderate),
    Breakpoint::new(355, 554, 101, 150, AqiCategory::UnhealthyForSensitiveGroups),
    Breakpoint::new(555, 1504, 151, 200, AqiCategory::Unhealthy),
    Breakpoint::new(1505, 2504, 201, 300, AqiCategory::VeryUnhealthy),
    Breakpoint::new(2505, 3504, 301, 400, AqiCategory::Hazardous),
    Breakpoint::new(3505, 5004, 401, 500, AqiCategory::Hazardous),
];

/// Return the AQI (EPA PM2.5 scale) for a concentration in µg/m³
///
/// # Arguments
/// * `ugm3` - micrograms per cubic meter, as reported by the sensor
///
/// # Returns
/// Index in 0..=500; negative or NaN input gives 0, input above 500.4
/// gives 500
pub fn ugm3_to_aqi(ugm3: f64) -> i32 {
    if ugm3.is_nan() || ugm3 <= 0.0 {
        return 0;
    }

    let last = &PM25_BREAKPOINTS[PM25_BREAKPOINTS.len() - 1];
    let scaled = ugm3 * TENTHS_PER_UNIT + TRUNCATION_EPSILON;
    if scaled >= f64::from(last.conc_hi_tenths + 1) {
        return AQI_MAX;
    }

    // In range and non-negative: `as` truncates toward zero.
    let tenths = scaled as u32;
    PM25_BREAKPOINTS
        .iter()
        .find(|bp| bp.contains(tenths))
        .map_or(AQI_MAX, |bp| bp.interpolate(tenths))
}

/// EPA category for an AQI value, values outside 0..=500 are clamped
pub fn aqi_category(aqi: i32) -> AqiCategory {
    match aqi {
        i32::MIN..=50 => AqiCategory::Good,
        51..=100 => AqiCategory::Moderate,
        101..=150 => AqiCategory::UnhealthyForSensitiveGroups,
        151..=200 => AqiCategory::Unhealthy,
        201..=300 => AqiCategory::VeryUnhealthy,
        _ => AqiCategory::Hazardous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_concentration() {
        assert_eq!(ugm3_to_aqi(0.0), 0);
    }

    #[test]
    fn test_good_moderate_boundary() {
        assert_eq!(ugm3_to_aqi(12.0), 50);
        assert_eq!(ugm3_to_aqi(12.1), 51);
    }

    #[test]
    fn test_moderate_sensitive_boundary() {
        assert_eq!(ugm3_to_aqi(35.4), 100);
        assert_eq!(ugm3_to_aqi(35.5), 101);
    }

    #[test]
    fn test_every_row_edge_hits_table_values() {
        for bp in PM25_BREAKPOINTS.iter() {
            let lo = f64::from(bp.conc_lo_tenths) / 10.0;
            let hi = f64::from(bp.conc_hi_tenths) / 10.0;
            assert_eq!(ugm3_to_aqi(lo), bp.aqi_lo, "low edge {}", lo);
            assert_eq!(ugm3_to_aqi(hi), bp.aqi_hi, "high edge {}", hi);
        }
    }

    #[test]
    fn test_interpolation_rounds_to_nearest() {
        // 50 / 12.0 * 5.0 = 20.83
        assert_eq!(ugm3_to_aqi(5.0), 21);
        // 49 / 23.3 * (20.0 - 12.1) + 51 = 67.61
        assert_eq!(ugm3_to_aqi(20.0), 68);
        // 49 / 94.9 * (100.0 - 55.5) + 151 = 173.98
        assert_eq!(ugm3_to_aqi(100.0), 174);
    }

    #[test]
    fn test_truncates_to_one_decimal() {
        // 12.05 and 12.09 both read as 12.0
        assert_eq!(ugm3_to_aqi(12.05), 50);
        assert_eq!(ugm3_to_aqi(12.09), 50);
        assert_eq!(ugm3_to_aqi(35.49), 100);
    }

    #[test]
    fn test_out_of_table_policy() {
        assert_eq!(ugm3_to_aqi(-1.0), 0);
        assert_eq!(ugm3_to_aqi(f64::NAN), 0);
        assert_eq!(ugm3_to_aqi(f64::NEG_INFINITY), 0);
        assert_eq!(ugm3_to_aqi(500.4), 500);
        assert_eq!(ugm3_to_aqi(500.5), 500);
        assert_eq!(ugm3_to_aqi(10_000.0), 500);
        assert_eq!(ugm3_to_aqi(f64::INFINITY), 500);
    }

    #[test]
    fn test_monotonic_over_table() {
        let mut previous = 0;
        for tenths in 0..=5_100u32 {
            let aqi = ugm3_to_aqi(f64::from(tenths) / 10.0);
            assert!(aqi >= previous, "AQI dropped at {} tenths", tenths);
            previous = aqi;
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(aqi_category(ugm3_to_aqi(0.0)), AqiCategory::Good);
        assert_eq!(aqi_category(ugm3_to_aqi(12.1)), AqiCategory::Moderate);
        assert_eq!(
            aqi_category(ugm3_to_aqi(35.5)),
            AqiCategory::UnhealthyForSensitiveGroups
        );
        assert_eq!(aqi_category(ugm3_to_aqi(55.5)), AqiCategory::Unhealthy);
        assert_eq!(aqi_category(ugm3_to_aqi(150.5)), AqiCategory::VeryUnhealthy);
        assert_eq!(aqi_category(ugm3_to_aqi(250.5)), AqiCategory::Hazardous);
        assert_eq!(aqi_category(-7), AqiCategory::Good);
        assert_eq!(aqi_category(900), AqiCategory::Hazardous);
        assert_eq!(
            AqiCategory::UnhealthyForSensitiveGroups.label(),
            "Unhealthy for Sensitive Groups"
        );
    }

    #[test]
    fn test_table_rows_match_categories() {
        for bp in PM25_BREAKPOINTS.iter() {
            assert_eq!(aqi_category(bp.aqi_lo), bp.category);
            assert_eq!(aqi_category(bp.aqi_hi), bp.category);
        }
    }
}
