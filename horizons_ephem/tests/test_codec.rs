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

use horizons_ephem::EphemPoint;
use horizons_ephem::codec::{decode_points,encode_points,encoded_len,HEADER_LEN,RECORD_LEN};
use horizons_ephem::HorizonsEphemError;

fn sample_points () -> Vec<EphemPoint> {
    vec![
        EphemPoint { jd: 2460310.5, x: 4213.76, y: -5011.33, z: 1523.8 },
        EphemPoint { jd: 2460310.500694444, x: 4480.02, y: -4790.11, z: 1601.4 },
        EphemPoint { jd: 2460310.501388888, x: 4731.95, y: -4551.76, z: 1676.2 },
    ]
}

#[test]
fn test_roundtrip () {
    let points = sample_points();
    let data = encode_points( &points);
    let decoded = decode_points( &data).unwrap();

    assert_eq!( decoded, points); // exact f64 equality, field for field
}

#[test]
fn test_empty_roundtrip () {
    let data = encode_points( &[]);
    assert_eq!( data.len(), HEADER_LEN);
    assert_eq!( data, vec![0u8; 4]);

    let decoded = decode_points( &data).unwrap();
    assert!( decoded.is_empty());
}

#[test]
fn test_encoded_length_law () {
    for n in [0usize, 1, 2, 7, 100] {
        let points: Vec<EphemPoint> = (0..n).map( |i| {
            EphemPoint { jd: 2460000.5 + i as f64, x: i as f64, y: -(i as f64), z: 0.5 }
        }).collect();

        let data = encode_points( &points);
        assert_eq!( data.len(), HEADER_LEN + RECORD_LEN * n);
        assert_eq!( data.len(), encoded_len(n));
    }
}

#[test]
fn test_layout () {
    // the renderer depends on these exact offsets
    let points = vec![ EphemPoint { jd: 1.5, x: 2.5, y: 3.5, z: 4.5 } ];
    let data = encode_points( &points);

    assert_eq!( &data[0..4], &1u32.to_le_bytes());
    assert_eq!( &data[4..12], &1.5f64.to_le_bytes());
    assert_eq!( &data[12..20], &2.5f64.to_le_bytes());
    assert_eq!( &data[20..28], &3.5f64.to_le_bytes());
    assert_eq!( &data[28..36], &4.5f64.to_le_bytes());
}

#[test]
fn test_reject_short_input () {
    for data in [&[][..], &[0u8][..], &[0u8,0,0][..]] {
        let res = decode_points( data);
        assert!( matches!( res, Err(HorizonsEphemError::TruncatedDataError(_))), "accepted {} bytes", data.len());
    }
}

#[test]
fn test_reject_length_mismatch () {
    let points = sample_points();
    let data = encode_points( &points);

    let mut truncated = data.clone();
    truncated.pop();
    assert!( matches!( decode_points( &truncated), Err(HorizonsEphemError::TruncatedDataError(_))));

    let mut padded = data.clone();
    padded.push( 0);
    assert!( matches!( decode_points( &padded), Err(HorizonsEphemError::TruncatedDataError(_))));

    // count declares more records than the buffer holds
    let mut overdeclared = data.clone();
    overdeclared[0..4].copy_from_slice( &100u32.to_le_bytes());
    assert!( matches!( decode_points( &overdeclared), Err(HorizonsEphemError::TruncatedDataError(_))));
}
