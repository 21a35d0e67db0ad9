//! Catalog report assembly: join computed visibility back onto the catalog
//! rows and apply the user's filters.

use crate::api::{StarRecord, StarVisibility, VisibilityResult};

/// Optional row filters. `None` fields are pass-through.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// Keep rows strictly longer than this many minutes.
    pub min_duration_minutes: Option<f64>,
    /// Keep rows strictly brighter than this magnitude. Rows without a
    /// magnitude always pass.
    pub max_magnitude: Option<f64>,
}

/// Zip catalog records with their visibility results into report rows,
/// preserving catalog order.
pub fn assemble_rows(stars: &[StarRecord], results: &[VisibilityResult]) -> Vec<StarVisibility> {
    stars
        .iter()
        .zip(results)
        .map(|(star, result)| StarVisibility::from_parts(star, result))
        .collect()
}

/// Apply [`FilterOptions`] to assembled rows.
///
/// Duration filtering is strict (`>`), so a threshold of 0 drops the rows
/// that are not visible at all. Magnitude filtering is strict (`<`) and
/// lower means brighter; a row with no magnitude is never dropped by it.
pub fn apply_filters(rows: Vec<StarVisibility>, filters: &FilterOptions) -> Vec<StarVisibility> {
    rows.into_iter()
        .filter(|row| {
            filters
                .min_duration_minutes
                .map_or(true, |floor| row.duration_minutes > floor)
        })
        .filter(|row| {
            filters
                .max_magnitude
                .map_or(true, |ceiling| row.mag.map_or(true, |mag| mag < ceiling))
        })
        .collect()
}
