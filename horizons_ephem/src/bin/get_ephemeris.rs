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

use std::path::PathBuf;
use anyhow::{anyhow,Result};
use chrono::{Days,NaiveDate,Utc};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use horizons_ephem::{
    generate_ephemeris, load_catalog, load_config,
    HorizonsClient, HorizonsConfig, TimeWindow
};

#[derive(Parser)]
#[command(about="satellite ephemeris retrieval tool")]
struct Args {
    /// satellite catalog key (e.g. "iss")
    satellite: String,

    /// start date (YYYY-MM-DD), default: today
    #[arg(long)]
    start: Option<NaiveDate>,

    /// end date (YYYY-MM-DD), default: 30 days from start
    #[arg(long)]
    end: Option<NaiveDate>,

    /// time step in minutes
    #[arg(long, default_value_t=1)]
    step: u32,

    /// output file path, default: data/<satellite>_ephemeris.bin
    #[arg(long)]
    output: Option<PathBuf>,

    /// filename of a HorizonsConfig RON file (built-in defaults if not given)
    #[arg(long)]
    config: Option<PathBuf>,

    /// filename of a satellite catalog RON file (built-in catalog if not given)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main () -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config: HorizonsConfig = match &args.config {
        Some(path) => load_config( path)?,
        None => HorizonsConfig::default()
    };

    let catalog = load_catalog( args.catalog.as_deref())?;
    let sat_info = catalog.get( &args.satellite).ok_or_else( || {
        let mut keys: Vec<&str> = catalog.keys().map( |k| k.as_str()).collect();
        keys.sort();
        anyhow!("unknown satellite {:?} - known: {}", args.satellite, keys.join(", "))
    })?;

    let start = args.start.unwrap_or_else( || Utc::now().date_naive());
    let end = args.end.unwrap_or( start + Days::new(30));
    let window = TimeWindow::new( start, end, args.step)?;

    let expected = window.expected_points();
    println!("expected ~{} points for {} days at {} min intervals",
             expected, (window.end - window.start).num_days(), window.step_minutes);
    if expected > config.max_expected_points {
        warn!("large query ({expected} points) - Horizons may limit results, consider a larger step or shorter range");
    }

    let output = args.output.unwrap_or_else( || PathBuf::from( format!("data/{}_ephemeris.bin", args.satellite)));

    let client = HorizonsClient::new( config)?;
    let summary = generate_ephemeris( &client, sat_info, &window, &output).await?;

    println!("{} points in {} ({} bytes, {} rows skipped)",
             summary.n_points, output.display(), summary.file_len, summary.n_skipped);
    if let Some(report) = &summary.report {
        println!("orbital altitude ~{:.0} km (expected ~{:.0} km)",
                 report.first.altitude_km, report.expected_altitude_km);
    }

    Ok(())
}
