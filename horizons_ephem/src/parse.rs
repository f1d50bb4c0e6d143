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

//! parsing of Horizons vector ephemeris responses
//!
//! the API wraps its report in a JSON envelope with a `result` string field. The report
//! itself is semi-structured text in which the CSV data span is bracketed by literal
//! `$$SOE` / `$$EOE` marker lines

use serde::Deserialize;
use tracing::{debug,warn};

use crate::EphemPoint;
use crate::errors::{malformed_response, HorizonsEphemError, Result};

/// start/end-of-ephemeris sentinels of the Horizons report format
pub const SOE_MARKER: &str = "$$SOE";
pub const EOE_MARKER: &str = "$$EOE";

/// JSON envelope of a Horizons API response
#[derive(Deserialize,Debug)]
pub struct HorizonsResponse {
    pub result: Option<String>,
    pub error: Option<String>,
}

/// extract ephemeris points from the raw UTF-8 body of a Horizons API response.
/// Returns the points in report order plus the number of skipped (unparseable) rows
pub fn parse_response (body: &str)->Result<(Vec<EphemPoint>,usize)> {
    let envelope: HorizonsResponse = serde_json::from_str( body)
        .map_err(|e| malformed_response!("not a Horizons JSON envelope: {e}"))?;

    if let Some(error) = envelope.error {
        return Err( HorizonsEphemError::UpstreamError(error));
    }

    match envelope.result {
        Some(result) => Ok( parse_vector_table( &result)),
        None => Err( malformed_response!("envelope has no result field")),
    }
}

/// scan the report text for the `$$SOE`..`$$EOE` data span and convert its CSV rows.
///
/// Each row reads `JDTDB, Calendar Date, X, Y, Z,` - we take fields 0,2,3,4 and ignore
/// the redundant calendar date. Rows that are too short or fail numeric conversion are
/// logged and skipped, never fatal - Horizons occasionally interleaves annotation lines.
/// A missing end marker just stops the scan at end of text, a missing start marker
/// yields an empty stream (the caller decides whether that is an error)
pub fn parse_vector_table (text: &str)->(Vec<EphemPoint>,usize) {
    let mut points: Vec<EphemPoint> = Vec::new();
    let mut n_skipped = 0;
    let mut in_data = false;

    for line in text.lines() {
        let line = line.trim();

        if line == SOE_MARKER {
            in_data = true;
        } else if line == EOE_MARKER {
            break;
        } else if in_data && !line.is_empty() {
            match parse_vector_row( line) {
                Some(p) => points.push(p),
                None => {
                    warn!("skipping unparseable row: {:.50}", line);
                    n_skipped += 1;
                }
            }
        }
    }

    debug!("parsed {} points ({} rows skipped)", points.len(), n_skipped);
    (points, n_skipped)
}

fn parse_vector_row (line: &str)->Option<EphemPoint> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 5 { return None }

    let jd: f64 = fields[0].trim().parse().ok()?;
    let x: f64 = fields[2].trim().parse().ok()?;
    let y: f64 = fields[3].trim().parse().ok()?;
    let z: f64 = fields[4].trim().parse().ok()?;

    Some( EphemPoint{ jd, x, y, z })
}
