//! Low-precision solar ephemeris.

use super::Equatorial;
use crate::models::JulianDate;

/// Apparent geocentric equatorial position of the Sun.
///
/// Astronomical Almanac low-precision formula, accurate to about 0.01°
/// between 1950 and 2050. Input is a UTC instant as a Julian date; the
/// UT/TT difference is far below this accuracy.
pub fn sun_equatorial(jd: JulianDate) -> Equatorial {
    let n = jd.days_since_j2000();

    // Mean longitude and mean anomaly of the Sun, degrees
    let mean_longitude = (280.460 + 0.9856474 * n).rem_euclid(360.0);
    let mean_anomaly = (357.528 + 0.9856003 * n).rem_euclid(360.0).to_radians();

    // Ecliptic longitude with the equation-of-center correction
    let ecliptic_longitude = (mean_longitude
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin())
    .rem_euclid(360.0)
    .to_radians();

    // Mean obliquity of the ecliptic
    let obliquity = (23.439 - 0.0000004 * n).to_radians();

    let ra_deg = (ecliptic_longitude.sin() * obliquity.cos())
        .atan2(ecliptic_longitude.cos())
        .to_degrees()
        .rem_euclid(360.0);
    let dec_deg = (ecliptic_longitude.sin() * obliquity.sin()).asin().to_degrees();

    Equatorial::new(ra_deg, dec_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Utc};

    fn sun_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Equatorial {
        let dt = Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
        sun_equatorial(JulianDate::from_datetime(dt))
    }

    #[test]
    fn test_sun_at_march_equinox() {
        // 2024 March equinox: 2024-03-20 03:06 UTC, declination crosses zero
        let sun = sun_at(2024, 3, 20, 3, 6);
        assert_abs_diff_eq!(sun.dec_deg, 0.0, epsilon = 0.1);
    }

    #[test]
    fn test_sun_at_june_solstice() {
        // 2024 June solstice: 2024-06-20 20:51 UTC,
        // declination at maximum (+23.44°), RA at 6h (90°)
        let sun = sun_at(2024, 6, 20, 20, 51);
        assert_abs_diff_eq!(sun.dec_deg, 23.44, epsilon = 0.05);
        assert_abs_diff_eq!(sun.ra_deg, 90.0, epsilon = 0.5);
    }

    #[test]
    fn test_sun_at_december_solstice() {
        // 2024 December solstice: 2024-12-21 09:20 UTC
        let sun = sun_at(2024, 12, 21, 9, 20);
        assert_abs_diff_eq!(sun.dec_deg, -23.44, epsilon = 0.05);
        assert_abs_diff_eq!(sun.ra_deg, 270.0, epsilon = 0.5);
    }

    #[test]
    fn test_sun_declination_stays_within_obliquity() {
        // Scan one year at 10-day steps
        for step in 0..37 {
            let dt = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::days(step * 10);
            let sun = sun_equatorial(JulianDate::from_datetime(dt));
            assert!(
                sun.dec_deg.abs() <= 23.5,
                "declination {} out of bounds at {}",
                sun.dec_deg,
                dt
            );
            assert!((0.0..360.0).contains(&sun.ra_deg));
        }
    }
}
