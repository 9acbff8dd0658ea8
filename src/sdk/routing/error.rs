use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    // Non-2xx answer from the geocoding service, body kept for the logs
    #[error("Geocoder returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Why a row contributed no waypoint. Never surfaced to the caller, only logged.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    UnparseableCoordinate,
    OutOfBounds,
    EmptyPlace,
    NoMatch,
    LookupFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnparseableCoordinate => f.write_str("coordinate is not a number"),
            SkipReason::OutOfBounds => f.write_str("coordinate out of range"),
            SkipReason::EmptyPlace => f.write_str("place text is empty"),
            SkipReason::NoMatch => f.write_str("geocoder found no match"),
            SkipReason::LookupFailed(err) => write!(f, "geocoder lookup failed: {}", err),
        }
    }
}
