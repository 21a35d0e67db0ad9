//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Chart and report row types are re-exported from the core API since they
//! already derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{AltitudeSeries, StarRecord, StarVisibility};

/// Query parameters for the location resolve endpoint.
///
/// Coordinates arrive as strings so malformed numbers surface as a domain
/// error with a stable code rather than an opaque extractor rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveQuery {
    /// Latitude in decimal degrees
    pub lat: String,
    /// Longitude in decimal degrees
    pub lon: String,
}

/// Resolved location response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocationDto {
    /// Latitude in decimal degrees
    pub latitude_deg: f64,
    /// Longitude in decimal degrees
    pub longitude_deg: f64,
    /// IANA time zone identifier
    pub timezone: String,
    /// UTC offset in hours at the resolved instant
    pub utc_offset_hours: f64,
    /// Current local time at the location, RFC 3339
    pub local_time: String,
    /// Set when the zone lookup fell back to a fixed Etc/GMT offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<crate::services::ResolvedLocation> for ResolvedLocationDto {
    fn from(resolved: crate::services::ResolvedLocation) -> Self {
        let warning = resolved.timezone.fallback_warning();
        Self {
            latitude_deg: resolved.location.latitude_deg,
            longitude_deg: resolved.location.longitude_deg,
            timezone: resolved.timezone.iana_id.clone(),
            utc_offset_hours: resolved.timezone.utc_offset_hours,
            local_time: resolved.local_time.to_rfc3339(),
            warning,
        }
    }
}

/// Request body for single-star visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarVisibilityRequest {
    /// Observer latitude in decimal degrees
    pub latitude_deg: f64,
    /// Observer longitude in decimal degrees
    pub longitude_deg: f64,
    /// Local calendar date for the observation night
    pub date: NaiveDate,
    /// Target right ascension in degrees
    pub ra_deg: f64,
    /// Target declination in degrees
    pub dec_deg: f64,
}

/// Response for single-star visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarVisibilityResponse {
    /// Visible-night span in minutes
    pub duration_minutes: f64,
    /// Window start, local time, or "Not visible"
    pub window_start: String,
    /// Window end, local time, or "Not visible"
    pub window_end: String,
    /// IANA time zone identifier used for local times
    pub timezone: String,
    /// UTC offset in hours on the requested date
    pub utc_offset_hours: f64,
    /// Altitude curves for charting
    pub series: AltitudeSeries,
}

/// Request body for catalog visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogVisibilityRequest {
    /// Observer latitude in decimal degrees
    pub latitude_deg: f64,
    /// Observer longitude in decimal degrees
    pub longitude_deg: f64,
    /// Local calendar date for the observation night
    pub date: NaiveDate,
    /// Raw catalog file content (CSV or TSV)
    pub catalog_text: String,
    /// Keep rows strictly longer than this many minutes (optional)
    #[serde(default)]
    pub min_duration_minutes: Option<f64>,
    /// Keep rows strictly brighter than this magnitude (optional)
    #[serde(default)]
    pub max_magnitude: Option<f64>,
}

/// Response for catalog visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogVisibilityResponse {
    /// IANA time zone identifier used for local times
    pub timezone: String,
    /// UTC offset in hours on the requested date
    pub utc_offset_hours: f64,
    /// Rows in the uploaded catalog
    pub total_rows: usize,
    /// Rows that survived the filters
    pub matched_rows: usize,
    /// Per-star report rows, catalog order
    pub rows: Vec<StarVisibility>,
    /// Non-fatal warnings (bad magnitudes, open-sea time zone fallback)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Service name
    pub service: String,
    /// Version of the crate
    pub version: String,
}
