//! Star visibility computation over a sampled 24-hour window.
//!
//! For every grid instant the Sun's altitude decides the night mask; a star
//! is observable at the night instants where its own altitude is positive.
//! The per-instant frame (local sidereal time, Sun altitude, night mask) is
//! computed once per request and shared across all stars, so a batch of N
//! stars costs N·M altitude evaluations plus one M-sample frame.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::api::{
    AltitudeSeries, GeoLocation, StarRecord, TimeZoneInfo, VisibilityResult, VisibilityWindow,
};
use crate::astro::{self, Equatorial};
use crate::error::{Error, Result};
use crate::models::{JulianDate, TimeGrid};

/// Per-request observation context: the sampling grid plus everything about
/// the night that does not depend on the target.
pub struct NightContext {
    grid: TimeGrid,
    zone: Tz,
    latitude_deg: f64,
    lst_deg: Vec<f64>,
    sun_alt_deg: Vec<f64>,
    night: Vec<bool>,
    night_indices: Vec<usize>,
}

impl NightContext {
    /// Build the context for one (date, offset, location) request.
    ///
    /// # Returns
    /// The context, or [`Error::NoNightWindow`] when the Sun never goes below
    /// the horizon in the sampled window (polar day).
    pub fn build(
        date: NaiveDate,
        utc_offset_hours: f64,
        location: &GeoLocation,
        timezone: &TimeZoneInfo,
    ) -> Result<Self> {
        let zone = timezone.timezone()?;
        let grid = TimeGrid::for_local_noon(date, utc_offset_hours);

        let mut lst_deg = Vec::with_capacity(grid.len());
        let mut sun_alt_deg = Vec::with_capacity(grid.len());
        for instant in grid.samples() {
            let jd = JulianDate::from_datetime(*instant);
            let lst = astro::local_sidereal_deg(jd, location.longitude_deg);
            let sun = astro::sun_equatorial(jd);
            lst_deg.push(lst);
            sun_alt_deg.push(astro::horizontal(&sun, location.latitude_deg, lst).alt_deg);
        }

        let night: Vec<bool> = sun_alt_deg.iter().map(|&alt| alt < 0.0).collect();
        let night_indices: Vec<usize> = night
            .iter()
            .enumerate()
            .filter_map(|(index, &dark)| dark.then_some(index))
            .collect();

        if night_indices.is_empty() {
            return Err(Error::NoNightWindow {
                date,
                latitude_deg: location.latitude_deg,
            });
        }

        Ok(Self {
            grid,
            zone,
            latitude_deg: location.latitude_deg,
            lst_deg,
            sun_alt_deg,
            night,
            night_indices,
        })
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Night mask aligned 1:1 with the grid samples.
    pub fn night_mask(&self) -> &[bool] {
        &self.night
    }

    /// Sun altitude in degrees at every grid sample.
    pub fn sun_altitudes(&self) -> &[f64] {
        &self.sun_alt_deg
    }

    /// Minutes between the first and last night sample.
    pub fn night_span_minutes(&self) -> f64 {
        let first = self.night_indices[0];
        let last = self.night_indices[self.night_indices.len() - 1];
        self.grid.elapsed_minutes(last) - self.grid.elapsed_minutes(first)
    }

    /// Altitude of a fixed equatorial target at every grid sample.
    pub fn target_altitudes(&self, target: &Equatorial) -> Vec<f64> {
        self.lst_deg
            .iter()
            .map(|&lst| astro::horizontal(target, self.latitude_deg, lst).alt_deg)
            .collect()
    }

    /// Derive the visibility window from a full-grid altitude curve.
    ///
    /// The window spans the first through last night samples where the
    /// altitude is positive; its length is reported in elapsed minutes.
    /// A curve that never clears the horizon at night yields a zero
    /// duration and no window.
    pub fn observe(&self, altitudes: &[f64]) -> VisibilityResult {
        let mut first = None;
        let mut last = None;
        for &index in &self.night_indices {
            if altitudes[index] > 0.0 {
                if first.is_none() {
                    first = Some(index);
                }
                last = Some(index);
            }
        }

        match (first, last) {
            (Some(start), Some(end)) => VisibilityResult {
                duration_minutes: self.grid.elapsed_minutes(end)
                    - self.grid.elapsed_minutes(start),
                window: Some(VisibilityWindow {
                    start: self.grid.sample(start).with_timezone(&self.zone),
                    end: self.grid.sample(end).with_timezone(&self.zone),
                }),
            },
            _ => VisibilityResult {
                duration_minutes: 0.0,
                window: None,
            },
        }
    }
}

/// Compute visibility for every star of a catalog, preserving input order.
///
/// # Arguments
/// * `stars` - catalog records; an empty slice yields an empty result
/// * `date` - local calendar date whose noon anchors the grid
/// * `utc_offset_hours` - offset used to place local noon, from the resolver
/// * `location` / `timezone` - resolver outputs for the observer
///
/// # Returns
/// One [`VisibilityResult`] per input star, or [`Error::NoNightWindow`].
pub fn compute_batch(
    stars: &[StarRecord],
    date: NaiveDate,
    utc_offset_hours: f64,
    location: &GeoLocation,
    timezone: &TimeZoneInfo,
) -> Result<Vec<VisibilityResult>> {
    let context = NightContext::build(date, utc_offset_hours, location, timezone)?;
    Ok(stars
        .iter()
        .map(|star| {
            let target = Equatorial::new(star.ra_deg, star.dec_deg);
            context.observe(&context.target_altitudes(&target))
        })
        .collect())
}

/// Compute visibility for one target, along with the full altitude curves
/// needed for charting.
pub fn compute_single(
    ra_deg: f64,
    dec_deg: f64,
    date: NaiveDate,
    utc_offset_hours: f64,
    location: &GeoLocation,
    timezone: &TimeZoneInfo,
) -> Result<(VisibilityResult, AltitudeSeries)> {
    let context = NightContext::build(date, utc_offset_hours, location, timezone)?;
    let altitudes = context.target_altitudes(&Equatorial::new(ra_deg, dec_deg));
    let result = context.observe(&altitudes);
    let series = AltitudeSeries {
        hours_from_noon: context.grid.hours_from_origin(),
        star_alt_deg: altitudes,
        sun_alt_deg: context.sun_alt_deg.clone(),
        night: context.night.clone(),
    };
    Ok((result, series))
}
