// Copyright 2025 UPM Contributors
// SPDX-License-Identifier: Apache-2.0

//! PM2.5 to AQI conversion through the umbrella crate.

use upm::utilities::aqi::PM25_BREAKPOINTS;
use upm::{aqi_category, ugm3_to_aqi, AqiCategory};

#[test]
fn test_zero_is_zero() {
    assert_eq!(ugm3_to_aqi(0.0), 0);
}

#[test]
fn test_category_boundaries() {
    assert_eq!(ugm3_to_aqi(12.0), 50);
    assert_eq!(ugm3_to_aqi(12.1), 51);
    assert_eq!(ugm3_to_aqi(35.4), 100);
    assert_eq!(ugm3_to_aqi(35.5), 101);
    assert_eq!(ugm3_to_aqi(55.4), 150);
    assert_eq!(ugm3_to_aqi(55.5), 151);
}

#[test]
fn test_every_row_hits_its_end_points() {
    for row in PM25_BREAKPOINTS.iter() {
        let lo = f64::from(row.conc_lo_tenths) / 10.0;
        let hi = f64::from(row.conc_hi_tenths) / 10.0;
        if lo > 0.0 {
            assert_eq!(ugm3_to_aqi(lo), row.aqi_lo, "low end of {:?}", row);
        }
        assert_eq!(ugm3_to_aqi(hi), row.aqi_hi, "high end of {:?}", row);
        assert_eq!(aqi_category(row.aqi_hi), row.category);
    }
}

#[test]
fn test_out_of_table_readings() {
    assert_eq!(ugm3_to_aqi(-3.0), 0);
    assert_eq!(ugm3_to_aqi(f64::NAN), 0);
    assert_eq!(ugm3_to_aqi(500.4), 500);
    assert_eq!(ugm3_to_aqi(800.0), 500);
    assert_eq!(ugm3_to_aqi(f64::INFINITY), 500);
}

#[test]
fn test_typical_sensor_readings() {
    let readings = [(5.0, AqiCategory::Good), (20.0, AqiCategory::Moderate), (100.0, AqiCategory::Unhealthy)];
    for (ugm3, expected) in readings {
        assert_eq!(aqi_category(ugm3_to_aqi(ugm3)), expected, "{} ug/m3", ugm3);
    }
}
