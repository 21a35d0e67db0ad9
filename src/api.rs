//! Public API surface of the visibility engine.
//!
//! This file consolidates the value types shared by the services and the
//! HTTP layer. Everything is a plain value object created fresh per request;
//! types that cross the JSON boundary derive Serialize/Deserialize.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use crate::services::geodetic::ResolvedLocation;

/// Sentinel rendered for windows of stars that never show up at night.
pub const NOT_VISIBLE: &str = "Not visible";

/// Local civil time format used for window endpoints.
const WINDOW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Observer location on the Earth's surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoLocation {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude_deg: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(Error::InvalidCoordinates(format!(
                "latitude {} must be a number between -90 and 90 degrees",
                latitude_deg
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(Error::InvalidCoordinates(format!(
                "longitude {} must be a number between -180 and 180 degrees",
                longitude_deg
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// Time zone resolved for an observer location.
///
/// The offset is evaluated at the moment of resolution, not at the
/// observation date; see the geodetic service for the rationale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeZoneInfo {
    /// IANA zone identifier, e.g. "Europe/Berlin"
    pub iana_id: String,
    /// UTC offset in hours at resolution time, e.g. 5.75 for Asia/Kathmandu
    pub utc_offset_hours: f64,
}

impl TimeZoneInfo {
    pub fn new(iana_id: impl Into<String>, utc_offset_hours: f64) -> Self {
        Self {
            iana_id: iana_id.into(),
            utc_offset_hours,
        }
    }

    /// Parsed IANA zone for local-time conversions.
    pub fn timezone(&self) -> Result<Tz> {
        self.iana_id.parse().map_err(|e| {
            Error::InvalidCoordinates(format!("unrecognized time zone '{}': {}", self.iana_id, e))
        })
    }

    /// True when the zone lookup fell back to a pure-offset Etc/GMT zone,
    /// which typically means open sea or unpopulated desert.
    pub fn is_offset_fallback(&self) -> bool {
        self.iana_id.contains("Etc/GMT")
    }

    /// User-facing message for the offset fallback, when it applies.
    pub fn fallback_warning(&self) -> Option<String> {
        self.is_offset_fallback().then(|| {
            format!(
                "time zone fell back to fixed offset '{}': location may be open sea or desert",
                self.iana_id
            )
        })
    }
}

/// One star as loaded from a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarRecord {
    /// Star name, non-empty
    pub name: String,
    /// Right ascension in decimal degrees
    pub ra_deg: f64,
    /// Declination in decimal degrees
    pub dec_deg: f64,
    /// Visual magnitude; absent when the column is missing or the cell did not parse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag: Option<f64>,
}

/// Non-fatal issue discovered while loading a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CatalogWarning {
    /// The magnitude column exists but some cells were missing or non-numeric
    InvalidMagnitudes { count: usize },
}

impl std::fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogWarning::InvalidMagnitudes { count } => write!(
                f,
                "magnitude column includes {} invalid or missing value(s)",
                count
            ),
        }
    }
}

/// Ordered star catalog plus the loader's warning channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarCatalog {
    /// Stars in input file order
    pub stars: Vec<StarRecord>,
    /// Non-fatal issues surfaced to the caller
    pub warnings: Vec<CatalogWarning>,
    /// Whether the file carried a magnitude column at all
    pub has_magnitudes: bool,
}

impl StarCatalog {
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// First and last night-time instants a star is above the horizon,
/// in the observer's local civil time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl VisibilityWindow {
    pub fn start_string(&self) -> String {
        self.start.format(WINDOW_TIME_FORMAT).to_string()
    }

    pub fn end_string(&self) -> String {
        self.end.format(WINDOW_TIME_FORMAT).to_string()
    }
}

/// Per-star outcome of a visibility computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibilityResult {
    /// Minutes between the first and last visible night sample; 0 when never visible
    pub duration_minutes: f64,
    /// Observable window, absent when the star never clears the horizon at night
    pub window: Option<VisibilityWindow>,
}

impl VisibilityResult {
    pub fn is_visible(&self) -> bool {
        self.window.is_some()
    }

    /// Window start as "YYYY-MM-DD HH:MM" local time, or the sentinel.
    pub fn window_start_string(&self) -> String {
        self.window
            .as_ref()
            .map_or_else(|| NOT_VISIBLE.to_string(), |w| w.start_string())
    }

    /// Window end as "YYYY-MM-DD HH:MM" local time, or the sentinel.
    pub fn window_end_string(&self) -> String {
        self.window
            .as_ref()
            .map_or_else(|| NOT_VISIBLE.to_string(), |w| w.end_string())
    }
}

/// Full-grid altitude curves for the single-target variant, used for charting.
///
/// All four sequences are aligned 1:1 with the sampling grid and are neither
/// clipped nor resampled; the night mask segments the star trace into its
/// daylight and night portions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AltitudeSeries {
    /// Hours elapsed since local noon, 0.0 ..= 24.0
    pub hours_from_noon: Vec<f64>,
    /// Target altitude in degrees per sample
    pub star_alt_deg: Vec<f64>,
    /// Sun altitude in degrees per sample
    pub sun_alt_deg: Vec<f64>,
    /// True where the Sun is below the horizon
    pub night: Vec<bool>,
}

/// One output row of the batch computation: the input star extended with
/// its visibility columns. Window endpoints use the string contract
/// ("YYYY-MM-DD HH:MM" local time or the "Not visible" sentinel).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarVisibility {
    pub name: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag: Option<f64>,
    pub duration_minutes: f64,
    pub window_start: String,
    pub window_end: String,
}

impl StarVisibility {
    pub fn from_parts(star: &StarRecord, result: &VisibilityResult) -> Self {
        Self {
            name: star.name.clone(),
            ra_deg: star.ra_deg,
            dec_deg: star.dec_deg,
            mag: star.mag,
            duration_minutes: result.duration_minutes,
            window_start: result.window_start_string(),
            window_end: result.window_end_string(),
        }
    }
}
