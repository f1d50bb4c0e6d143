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
#![allow(unused)]
#![doc = include_str!("../doc/horizons_ephem.md")]

use std::{
    collections::HashMap, io::Write as IoWrite, path::{Path,PathBuf}, time::Duration
};
use async_trait::async_trait;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use reqwest::{Client,StatusCode};
use serde::{Deserialize,Serialize};
use tracing::{info,warn};

pub mod codec;
pub mod parse;
pub mod verify;

mod errors;
pub use errors::*;

use errors::{invalid_window, op_failed};
use verify::PlausibilityReport;

/* #region configuration *************************************************************************/

/// general Horizons API / fetch parameters configuration
#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct HorizonsConfig {
    /// API endpoint (e.g. https://ssd.jpl.nasa.gov/api/horizons.api)
    pub url: String,

    /// identifying User-Agent header value for API requests
    pub user_agent: String,

    /// request timeout - result payloads can be large
    pub timeout: Duration,

    /// point count above which we warn before fetching (undocumented Horizons result size limit)
    pub max_expected_points: usize,
}

impl Default for HorizonsConfig {
    fn default() -> Self {
        Self {
            url: "https://ssd.jpl.nasa.gov/api/horizons.api".to_string(),
            user_agent: "horizons-ephem/0.1".to_string(),
            timeout: Duration::from_secs(120),
            max_expected_points: 90_000,
        }
    }
}

/// load a RON config of given type from an explicit filesystem path
pub fn load_config<C,P> (path: P) -> Result<C> where C: for <'a> serde::Deserialize<'a>, P: AsRef<Path> {
    let data = std::fs::read( path.as_ref())?;
    ron::de::from_bytes( data.as_slice()).map_err( config_error)
}

/* #endregion configuration */

/* #region satellite catalog *********************************************************************/

/// static descriptor of a trackable object. The altitude is only used for post-decode
/// plausibility checks, never for computation
#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct SatelliteInfo {
    /// object identifier accepted by Horizons (NAIF id, e.g. "-125544" for the ISS)
    pub horizons_id: String,

    /// human readable display name
    pub name: String,

    /// nominal orbital altitude above Earth's surface
    pub altitude_km: f64,
}

lazy_static! {
    /// built-in satellite catalog. Extensible at startup by loading a RON catalog file
    pub static ref DEFAULT_CATALOG: HashMap<String,SatelliteInfo> = HashMap::from([
        ("iss".to_string(), SatelliteInfo {
            horizons_id: "-125544".to_string(),
            name: "ISS (International Space Station)".to_string(),
            altitude_km: 420.0
        }),
        ("hubble".to_string(), SatelliteInfo {
            horizons_id: "-48".to_string(),
            name: "Hubble Space Telescope".to_string(),
            altitude_km: 540.0
        }),
    ]);
}

/// get the satellite catalog - either the built-in one or a RON file replacing it
pub fn load_catalog (opt_path: Option<&Path>) -> Result<HashMap<String,SatelliteInfo>> {
    match opt_path {
        Some(path) => load_config( path),
        None => Ok( DEFAULT_CATALOG.clone()),
    }
}

/* #endregion satellite catalog */

/* #region time window ***************************************************************************/

/// the date range and step size of an ephemeris request. Dates are naive UTC midnights
#[derive(Clone,Copy,Serialize,Deserialize,Debug,PartialEq)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub step_minutes: u32,
}

impl TimeWindow {
    pub fn new (start: NaiveDate, end: NaiveDate, step_minutes: u32) -> Result<Self> {
        let window = TimeWindow { start, end, step_minutes };
        window.validate()?;
        Ok(window)
    }

    pub fn validate (&self) -> Result<()> {
        if self.end <= self.start {
            return Err( invalid_window!("end date {} not after start date {}", self.end, self.start));
        }
        if self.step_minutes == 0 {
            return Err( invalid_window!("step size must be a positive number of minutes"));
        }
        Ok(())
    }

    pub fn duration_minutes (&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// number of samples Horizons will produce for this window (fence-post included)
    pub fn expected_points (&self) -> usize {
        (self.duration_minutes() / self.step_minutes as i64) as usize + 1
    }
}

/* #endregion time window */

/* #region data model ****************************************************************************/

/// one ephemeris sample: fractional Julian Date plus geocentric equatorial position in km
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct EphemPoint {
    pub jd: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/* #endregion data model */

/* #region query / transport *********************************************************************/

/// the full Horizons request parameter set for a geocentric vector ephemeris:
/// vector table without velocities, Earth-centered, ICRF/J2000 equatorial frame,
/// geometric positions (no light-time correction), km/s units, CSV payload
#[derive(Debug)]
pub struct VectorQuery {
    pub params: Vec<(&'static str,String)>,
}

impl VectorQuery {
    pub fn new (sat_info: &SatelliteInfo, window: &TimeWindow) -> Self {
        let params = vec![
            ("format", "json".to_string()),
            ("COMMAND", sat_info.horizons_id.clone()),
            ("OBJ_DATA", "NO".to_string()),
            ("MAKE_EPHEM", "YES".to_string()),
            ("EPHEM_TYPE", "VECTORS".to_string()),
            ("CENTER", "500@399".to_string()),
            ("REF_PLANE", "FRAME".to_string()),
            ("VEC_TABLE", "2".to_string()),
            ("VEC_CORR", "NONE".to_string()),
            ("OUT_UNITS", "KM-S".to_string()),
            ("CSV_FORMAT", "YES".to_string()),
            ("START_TIME", window.start.format("%Y-%m-%d").to_string()),
            ("STOP_TIME", window.end.format("%Y-%m-%d").to_string()),
            // no embedded whitespace - Horizons rejects spaces in this field
            ("STEP_SIZE", format!("{}m", window.step_minutes)),
        ];
        VectorQuery { params }
    }

    pub fn get (&self, key: &str) -> Option<&str> {
        self.params.iter().find( |(k,_)| *k == key).map( |(_,v)| v.as_str())
    }

    /// render the request URL for diagnostics. The transport encodes params itself
    pub fn url (&self, base: &str) -> String {
        let query: Vec<String> = self.params.iter().map( |(k,v)| format!("{k}={v}")).collect();
        format!("{}?{}", base, query.join("&"))
    }
}

/// a trait to obtain raw ephemeris response bodies from external sources
#[async_trait]
pub trait EphemerisSource {
    async fn fetch_vectors (&self, query: &VectorQuery) -> Result<String>;
}

/// the live EphemerisSource, a thin wrapper around a reqwest Client with a bounded timeout
pub struct HorizonsClient {
    config: HorizonsConfig,
    client: Client,
}

impl HorizonsClient {
    pub fn new (config: HorizonsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout( config.timeout)
            .user_agent( config.user_agent.clone())
            .build()?;
        Ok( HorizonsClient { config, client })
    }
}

#[async_trait]
impl EphemerisSource for HorizonsClient {
    async fn fetch_vectors (&self, query: &VectorQuery) -> Result<String> {
        let response = self.client.get( &self.config.url).query( &query.params).send().await?;

        match response.status() {
            StatusCode::OK => Ok( response.text().await?),
            other => Err( op_failed!("request failed with code {}", other.as_str()))
        }
    }
}

/* #endregion query / transport */

/* #region pipeline ******************************************************************************/

/// diagnostics of a completed fetch-parse-encode cycle
#[derive(Debug)]
pub struct EphemSummary {
    pub n_points: usize,
    pub n_skipped: usize,
    pub file_len: u64,
    pub report: Option<PlausibilityReport>,
}

/// run one full ephemeris generation cycle: fetch vectors for the given satellite and
/// window, parse them, persist the binary artifact, then read it back, decode it and
/// check plausibility.
///
/// The read-back pass is deliberate - it verifies the artifact on disk, not the buffer
/// we encoded in memory, so a faulty encode/write pairing cannot slip through
pub async fn generate_ephemeris<S> (source: &S, sat_info: &SatelliteInfo, window: &TimeWindow, output_path: &Path) -> Result<EphemSummary>
    where S: EphemerisSource + Sync
{
    window.validate()?;

    info!("fetching {} ephemeris from {} to {} (step: {} min)..",
          sat_info.name, window.start, window.end, window.step_minutes);
    let query = VectorQuery::new( sat_info, window);
    let body = source.fetch_vectors( &query).await?;

    let (points, n_skipped) = parse::parse_response( &body)?;
    if points.is_empty() {
        return Err( HorizonsEphemError::EmptyResultError);
    }
    info!("parsed {} ephemeris points", points.len());

    let data = codec::encode_points( &points);
    write_ephemeris_file( &data, output_path)?;
    info!("wrote {} points to {} ({} bytes)", points.len(), output_path.display(), data.len());

    let read_back = std::fs::read( output_path)?;
    let decoded = codec::decode_points( &read_back)?;
    if decoded.len() != points.len() {
        return Err( op_failed!("read-back yielded {} of {} points", decoded.len(), points.len()));
    }
    let report = verify::check_points( &decoded, sat_info);

    Ok( EphemSummary { n_points: decoded.len(), n_skipped, file_len: read_back.len() as u64, report })
}

/// store encoded bytes at the given path. We write into a temp file in the target dir
/// first and rename into place so partial writes are never visible at the output path
fn write_ephemeris_file (data: &[u8], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all( parent)?;
            parent
        }
        _ => Path::new(".")
    };

    let mut file = tempfile::NamedTempFile::new_in( dir)?;
    file.write_all( data)?;
    file.persist( path).map_err( |e| op_failed!("could not persist ephemeris file: {e}"))?;

    Ok(())
}

/* #endregion pipeline */
