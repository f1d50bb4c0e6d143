/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! post-decode plausibility checks for ephemeris streams
//!
//! this guards against silently accepting garbage data, e.g. a wrong reference frame or
//! corruption that happens to preserve the declared length. It is advisory - results are
//! logged, not turned into failures

use tracing::info;

use crate::{EphemPoint,SatelliteInfo};

/// Earth mean radius approximation used to derive altitude from geocentric distance
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// geocentric distance and derived altitude of a single ephemeris point
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct PointCheck {
    pub jd: f64,
    pub r_km: f64,
    pub altitude_km: f64,
}

impl PointCheck {
    pub fn of (p: &EphemPoint)->Self {
        let r_km = (p.x*p.x + p.y*p.y + p.z*p.z).sqrt();
        PointCheck { jd: p.jd, r_km, altitude_km: r_km - EARTH_RADIUS_KM }
    }
}

/// plausibility summary over the first and last point of a stream
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct PlausibilityReport {
    pub first: PointCheck,
    pub last: Option<PointCheck>,
    pub expected_altitude_km: f64,
}

/// compute and log the plausibility report for a decoded stream. None for empty streams
pub fn check_points (points: &[EphemPoint], sat_info: &SatelliteInfo)->Option<PlausibilityReport> {
    let first = PointCheck::of( points.first()?);
    let last = if points.len() > 1 { Some( PointCheck::of( points.last()?)) } else { None };

    let report = PlausibilityReport { first, last, expected_altitude_km: sat_info.altitude_km };
    log_report( &report);

    Some(report)
}

fn log_report (report: &PlausibilityReport) {
    let first = &report.first;
    info!("first point: JD {:.6}, r={:.1} km", first.jd, first.r_km);
    if let Some(last) = &report.last {
        info!("last point:  JD {:.6}, r={:.1} km", last.jd, last.r_km);
    }
    info!("orbital altitude: ~{:.0} km (expected ~{:.0} km)", first.altitude_km, report.expected_altitude_km);
}
