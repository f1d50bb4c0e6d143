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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HorizonsEphemError>;

#[derive(Error,Debug)]
pub enum HorizonsEphemError {

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("config error {0}")]
    ConfigError( String ),

    #[error("invalid time window {0}")]
    InvalidWindowError( String ),

    #[error("Horizons reported error {0}")]
    UpstreamError( String ),

    #[error("malformed Horizons response {0}")]
    MalformedResponseError( String ),

    #[error("no ephemeris points in response")]
    EmptyResultError,

    #[error("truncated ephemeris data {0}")]
    TruncatedDataError( String ),

    #[error("operation failed {0}")]
    OpFailedError( String ),
}

macro_rules! invalid_window {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::HorizonsEphemError::InvalidWindowError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_window;

macro_rules! malformed_response {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::HorizonsEphemError::MalformedResponseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use malformed_response;

macro_rules! truncated_data {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::HorizonsEphemError::TruncatedDataError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use truncated_data;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::HorizonsEphemError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;

pub fn config_error (msg: impl ToString)->HorizonsEphemError {
    HorizonsEphemError::ConfigError(msg.to_string())
}
