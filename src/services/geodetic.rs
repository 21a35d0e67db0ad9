//! Observer location and time zone resolution.
//!
//! Maps a (latitude, longitude) pair to its IANA time zone by point-in-polygon
//! lookup, evaluates the UTC offset at the probe instant, and reports the
//! local wall-clock time. Open sea and unpopulated desert resolve to pure
//! Etc/GMT offset zones; that is flagged, not treated as an error.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use log::warn;
use once_cell::sync::Lazy;
use tzf_rs::DefaultFinder;

use crate::api::{GeoLocation, TimeZoneInfo};
use crate::error::{Error, Result};

/// Shared polygon dataset; construction decompresses it, so do it once.
static TZ_FINDER: Lazy<DefaultFinder> = Lazy::new(DefaultFinder::new);

/// Resolver output: validated location, zone info and the local wall-clock
/// time at the probe instant (informational, not used by the engine).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub location: GeoLocation,
    pub timezone: TimeZoneInfo,
    pub local_time: DateTime<Tz>,
}

/// Resolve an observer position to its time zone.
///
/// # Arguments
/// * `latitude_deg` / `longitude_deg` - observer position in decimal degrees
/// * `at` - instant at which the UTC offset is evaluated; callers normally
///   pass `Utc::now()`
///
/// # Returns
/// The resolved location, or [`Error::InvalidCoordinates`] when the inputs
/// are out of range or no zone covers the position.
pub fn resolve(latitude_deg: f64, longitude_deg: f64, at: DateTime<Utc>) -> Result<ResolvedLocation> {
    let location = GeoLocation::new(latitude_deg, longitude_deg)?;

    // tzf takes longitude first
    let zone_name = TZ_FINDER.get_tz_name(location.longitude_deg, location.latitude_deg);
    if zone_name.is_empty() {
        return Err(Error::InvalidCoordinates(format!(
            "no time zone found for ({:.4}, {:.4})",
            latitude_deg, longitude_deg
        )));
    }

    let zone: Tz = zone_name.parse().map_err(|e| {
        Error::InvalidCoordinates(format!("unrecognized time zone '{}': {}", zone_name, e))
    })?;

    let local_time = at.with_timezone(&zone);
    let utc_offset_hours = f64::from(local_time.offset().fix().local_minus_utc()) / 3600.0;
    let timezone = TimeZoneInfo::new(zone_name, utc_offset_hours);

    if timezone.is_offset_fallback() {
        warn!(
            "({:.4}, {:.4}) resolved to offset-only zone {}; location may be open sea or desert",
            latitude_deg, longitude_deg, timezone.iana_id
        );
    }

    Ok(ResolvedLocation {
        location,
        timezone,
        local_time,
    })
}

/// Resolve from raw text fields, the way form inputs arrive.
///
/// Fails with [`Error::InvalidCoordinates`] when either field does not parse
/// as a finite float, before any lookup happens.
pub fn resolve_str(latitude: &str, longitude: &str, at: DateTime<Utc>) -> Result<ResolvedLocation> {
    let latitude_deg = parse_angle(latitude, "latitude")?;
    let longitude_deg = parse_angle(longitude, "longitude")?;
    resolve(latitude_deg, longitude_deg, at)
}

fn parse_angle(text: &str, field: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidCoordinates(format!(
            "{} '{}' is not a number",
            field, trimmed
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn probe_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_resolve_greenwich() {
        let resolved = resolve(51.4769, 0.0, probe_instant()).unwrap();
        assert_eq!(resolved.timezone.iana_id, "Europe/London");
        assert_eq!(resolved.timezone.utc_offset_hours, 0.0);
        assert!(!resolved.timezone.is_offset_fallback());
    }

    #[test]
    fn test_resolve_is_deterministic_for_fixed_instant() {
        let a = resolve(28.7624, -17.8892, probe_instant()).unwrap();
        let b = resolve(28.7624, -17.8892, probe_instant()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.timezone.iana_id, "Atlantic/Canary");
    }

    #[test]
    fn test_resolve_rejects_out_of_range() {
        assert!(resolve(95.0, 0.0, probe_instant()).is_err());
        assert!(resolve(0.0, 200.0, probe_instant()).is_err());
    }

    #[test]
    fn test_parse_angle_rejects_text() {
        assert!(parse_angle("abc", "latitude").is_err());
        assert!(parse_angle("", "latitude").is_err());
        assert!(parse_angle("inf", "latitude").is_err());
        assert_eq!(parse_angle(" 45.5 ", "latitude").unwrap(), 45.5);
        assert_eq!(parse_angle("-17.8892", "longitude").unwrap(), -17.8892);
    }

    #[test]
    fn test_resolve_str_parse_gate() {
        assert!(matches!(
            resolve_str("fifty", "0.0", probe_instant()).unwrap_err(),
            Error::InvalidCoordinates(_)
        ));
        let resolved = resolve_str("51.4769", "0.0", probe_instant()).unwrap();
        assert_eq!(resolved.location.latitude_deg, 51.4769);
    }

    #[test]
    fn test_open_ocean_falls_back_to_offset_zone() {
        // Mid-Atlantic, nowhere near a country polygon
        let resolved = resolve(0.0, -30.0, probe_instant()).unwrap();
        assert!(resolved.timezone.is_offset_fallback());
        assert!(resolved.timezone.iana_id.starts_with("Etc/GMT"));
    }
}
