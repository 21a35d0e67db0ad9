//! Error types for the visibility engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving locations, loading catalogs or
/// computing visibility. All variants are recoverable at the caller boundary:
/// each aborts only the current computation, never the process.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range latitude/longitude, or a failed time zone lookup
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Catalog header is missing a required column
    #[error("missing required columns: {0}")]
    MissingColumns(String),

    /// A required catalog cell is non-numeric, null or empty
    #[error("invalid values: {0}")]
    InvalidValues(String),

    /// The Sun never goes below the horizon in the sampled 24-hour window
    #[error("no night time on {date} at latitude {latitude_deg:.4}°; possibly polar day, try another date or location")]
    NoNightWindow {
        date: NaiveDate,
        latitude_deg: f64,
    },

    /// The uploaded bytes could not be read as delimited text
    #[error("file read error: {0}")]
    FileRead(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::FileRead(err.to_string())
    }
}
