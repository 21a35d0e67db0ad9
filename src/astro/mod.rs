//! Spherical-astronomy primitives for the visibility engine.
//!
//! Low-precision, era-appropriate textbook algorithms:
//!
//! - Greenwich mean sidereal time (Meeus formula 12.4)
//! - Solar RA/Dec from the Astronomical Almanac low-precision series
//!   (good to about 0.01° over 1950-2050)
//! - Hour-angle equatorial-to-horizontal transform
//!
//! All of these are far more accurate than the engine's 5-minute sampling
//! cadence can discriminate.

mod sidereal;
mod sun;
mod transform;

pub use sidereal::{gmst_deg, local_sidereal_deg};
pub use sun::sun_equatorial;
pub use transform::horizontal;

use serde::{Deserialize, Serialize};

/// Equatorial coordinates of a fixed celestial target, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in decimal degrees [0, 360)
    pub ra_deg: f64,
    /// Declination in decimal degrees [-90, 90]
    pub dec_deg: f64,
}

impl Equatorial {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }
}

/// Horizontal (observer-local) coordinates, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    /// Altitude above the horizon [-90, 90]
    pub alt_deg: f64,
    /// Azimuth from North through East [0, 360)
    pub az_deg: f64,
}
