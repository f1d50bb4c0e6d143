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

use serde_json::json;

use horizons_ephem::HorizonsEphemError;
use horizons_ephem::parse::{parse_response,parse_vector_table};

const REPORT: &str = "\
*******************************************************************************
Revised: Jan 01, 2024              ISS (ZARYA)                          -125544
*******************************************************************************
JDTDB, Calendar Date (TDB), X, Y, Z,
$$SOE
2460310.500000000, A.D. 2024-Jan-01 00:00:00.0000,  4.213760E+03, -5.011330E+03,  1.523800E+03,
2460310.500694444, A.D. 2024-Jan-01 00:01:00.0000,  4.480020E+03, -4.790110E+03,  1.601400E+03,
this row is a footnote, not data,
2460310.501388888, A.D. 2024-Jan-01 00:02:00.0000,  4.731950E+03, -4.551760E+03,  1.676200E+03,
$$EOE
*******************************************************************************
Coordinate system description: ICRF
";

#[test]
fn test_tolerant_table_parse () {
    let (points, n_skipped) = parse_vector_table( REPORT);

    assert_eq!( points.len(), 3);
    assert_eq!( n_skipped, 1);

    // row order preserved, survivors only
    assert_eq!( points[0].jd, 2460310.5);
    assert_eq!( points[0].x, 4213.76);
    assert_eq!( points[0].y, -5011.33);
    assert_eq!( points[0].z, 1523.8);
    assert!( points[1].jd < points[2].jd);
    assert_eq!( points[2].x, 4731.95);
}

#[test]
fn test_short_row_is_skipped () {
    let report = "$$SOE\n2460310.5, A.D. 2024-Jan-01, 1.0, 2.0,\n$$EOE\n"; // 4 fields only
    let (points, n_skipped) = parse_vector_table( report);

    assert!( points.is_empty());
    assert_eq!( n_skipped, 1);
}

#[test]
fn test_missing_start_marker () {
    // no $$SOE means no data span - empty stream but not an error at this layer
    let (points, n_skipped) = parse_vector_table( "some header\n2460310.5, date, 1.0, 2.0, 3.0,\n$$EOE\n");
    assert!( points.is_empty());
    assert_eq!( n_skipped, 0);
}

#[test]
fn test_missing_end_marker () {
    // Horizons truncating the report just stops the scan at end of text
    let report = "$$SOE\n2460310.5, d, 1.0, 2.0, 3.0,\n2460310.6, d, 4.0, 5.0, 6.0,\n";
    let (points, n_skipped) = parse_vector_table( report);

    assert_eq!( points.len(), 2);
    assert_eq!( n_skipped, 0);
    assert_eq!( points[1].z, 6.0);
}

#[test]
fn test_envelope_result () {
    let body = json!({ "signature": { "version": "1.2" }, "result": REPORT }).to_string();
    let (points, n_skipped) = parse_response( &body).unwrap();

    assert_eq!( points.len(), 3);
    assert_eq!( n_skipped, 1);
}

#[test]
fn test_envelope_error () {
    let body = json!({ "error": "No ephemeris for target \"ISS\" prior to A.D. 1998-NOV-20" }).to_string();
    let res = parse_response( &body);

    match res {
        Err(HorizonsEphemError::UpstreamError(msg)) => assert!( msg.contains("No ephemeris")),
        other => panic!("expected UpstreamError, got {other:?}")
    }
}

#[test]
fn test_envelope_without_result () {
    let body = json!({ "signature": { "version": "1.2" } }).to_string();
    assert!( matches!( parse_response( &body), Err(HorizonsEphemError::MalformedResponseError(_))));
}

#[test]
fn test_non_json_body () {
    assert!( matches!( parse_response( "<html>503</html>"), Err(HorizonsEphemError::MalformedResponseError(_))));
}
