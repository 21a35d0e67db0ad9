//! Sampling grid for one local observing day.
//!
//! The grid anchors at local noon of the requested date and covers the
//! following 24 hours (plus one closing tick) at a fixed 5-minute cadence,
//! so a whole night is always contained in a single grid regardless of
//! the observer's longitude.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Sampling cadence of the visibility grid, in minutes.
pub const SAMPLE_MINUTES: i64 = 5;

/// Number of grid samples: 24 hours at 5-minute cadence, both endpoints included.
pub const GRID_SAMPLES: usize = 289;

/// Fixed-cadence sequence of absolute instants spanning one local day.
///
/// Immutable; rebuilt per (date, offset) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    origin: DateTime<Utc>,
    samples: Vec<DateTime<Utc>>,
}

impl TimeGrid {
    /// Build the grid for the local day of `date`.
    ///
    /// The origin is the UTC instant corresponding to `{date} 12:00:00` local,
    /// i.e. local noon minus the UTC offset. Fractional offsets (such as +5.75
    /// for Nepal) are honored to the second.
    pub fn for_local_noon(date: NaiveDate, utc_offset_hours: f64) -> Self {
        let offset_seconds = (utc_offset_hours * 3600.0).round() as i64;
        let origin = date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(12)
            - Duration::seconds(offset_seconds);
        let samples = (0..GRID_SAMPLES)
            .map(|k| origin + Duration::minutes(k as i64 * SAMPLE_MINUTES))
            .collect();
        Self { origin, samples }
    }

    /// UTC instant of local noon on the grid's date.
    pub fn origin(&self) -> DateTime<Utc> {
        self.origin
    }

    /// All sample instants, in order.
    pub fn samples(&self) -> &[DateTime<Utc>] {
        &self.samples
    }

    /// Sample instant at `index`. Panics if `index >= len()`.
    pub fn sample(&self, index: usize) -> DateTime<Utc> {
        self.samples[index]
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Minutes elapsed from the origin at sample `index`.
    pub fn elapsed_minutes(&self, index: usize) -> f64 {
        (index as i64 * SAMPLE_MINUTES) as f64
    }

    /// Hours elapsed from the origin at every sample, for charting (0.0 ..= 24.0).
    pub fn hours_from_origin(&self) -> Vec<f64> {
        (0..self.samples.len())
            .map(|k| (k as i64 * SAMPLE_MINUTES) as f64 / 60.0)
            .collect()
    }
}
