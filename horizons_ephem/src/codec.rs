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

//! binary serialization of ephemeris point streams
//!
//! the layout is a hard external contract - the sky renderer maps the file directly:
//! ```text
//!   offset 0         u32 LE   point count
//!   offset 4 + 32*i  f64 LE   jd[i]
//!   offset 12 + 32*i f64 LE   x_km[i]
//!   offset 20 + 32*i f64 LE   y_km[i]
//!   offset 28 + 32*i f64 LE   z_km[i]
//! ```
//! no magic, no version tag, no checksum, no padding

use bytes::{Buf,BufMut,BytesMut};

use crate::EphemPoint;
use crate::errors::{truncated_data, Result};

pub const HEADER_LEN: usize = 4;
pub const RECORD_LEN: usize = 32;

/// number of bytes `encode_points` produces for `n` points
pub fn encoded_len (n: usize)->usize {
    HEADER_LEN + RECORD_LEN * n
}

/// serialize points into the fixed little-endian layout. This is total - it cannot
/// fail for finite inputs (non-finite coordinates are a caller contract violation)
pub fn encode_points (points: &[EphemPoint])->Vec<u8> {
    let mut buf = BytesMut::with_capacity( encoded_len( points.len()));

    buf.put_u32_le( points.len() as u32);
    for p in points {
        buf.put_f64_le( p.jd);
        buf.put_f64_le( p.x);
        buf.put_f64_le( p.y);
        buf.put_f64_le( p.z);
    }

    buf.to_vec()
}

/// inverse of [`encode_points`]. Rejects buffers that are shorter than the header or
/// whose length does not match the declared point count
pub fn decode_points (data: &[u8])->Result<Vec<EphemPoint>> {
    if data.len() < HEADER_LEN {
        return Err( truncated_data!("{} bytes is shorter than header", data.len()));
    }

    let mut buf = data;
    let count = buf.get_u32_le() as usize;

    let expected = encoded_len( count);
    if data.len() != expected {
        return Err( truncated_data!("expected {} bytes for {} points, got {}", expected, count, data.len()));
    }

    let mut points = Vec::with_capacity( count);
    for _ in 0..count {
        let jd = buf.get_f64_le();
        let x = buf.get_f64_le();
        let y = buf.get_f64_le();
        let z = buf.get_f64_le();
        points.push( EphemPoint{ jd, x, y, z });
    }

    Ok(points)
}
