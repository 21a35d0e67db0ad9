//! Greenwich and local mean sidereal time.

use crate::models::JulianDate;

/// Greenwich mean sidereal time in degrees, normalized to [0, 360).
///
/// Meeus, Astronomical Algorithms, formula 12.4. Sub-arcsecond against the
/// worked examples for dates within a few centuries of J2000.
pub fn gmst_deg(jd: JulianDate) -> f64 {
    let d = jd.days_since_j2000();
    let t = jd.centuries_since_j2000();
    (280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38_710_000.0)
        .rem_euclid(360.0)
}

/// Local mean sidereal time in degrees for an east-positive longitude,
/// normalized to [0, 360).
pub fn local_sidereal_deg(jd: JulianDate, longitude_deg: f64) -> f64 {
    (gmst_deg(jd) + longitude_deg).rem_euclid(360.0)
}
