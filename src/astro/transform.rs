//! Equatorial to horizontal coordinate transform.

use super::{Equatorial, Horizontal};

/// Transform fixed equatorial coordinates into observer-local horizontal
/// coordinates for the given latitude and local sidereal time.
///
/// Standard hour-angle formulation: H = LST - RA, then
/// `sin(alt) = sin(dec) sin(lat) + cos(dec) cos(lat) cos(H)`.
/// No refraction correction is applied.
pub fn horizontal(target: &Equatorial, latitude_deg: f64, lst_deg: f64) -> Horizontal {
    let hour_angle = (lst_deg - target.ra_deg).to_radians();
    let dec = target.dec_deg.to_radians();
    let lat = latitude_deg.to_radians();

    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_ha, cos_ha) = hour_angle.sin_cos();

    // Clamp against rounding drift right at the zenith
    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_ha).clamp(-1.0, 1.0);
    let alt_deg = sin_alt.asin().to_degrees();

    // Azimuth from North through East
    let north = cos_lat * sin_dec - sin_lat * cos_dec * cos_ha;
    let east = -cos_dec * sin_ha;
    let az_deg = east.atan2(north).to_degrees().rem_euclid(360.0);

    Horizontal { alt_deg, az_deg }
}
