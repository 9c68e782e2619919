//! Suggestion lists derived from a catalog snapshot.
//!
//! These feed the data-entry hints next to each query field. Everything is
//! recomputed from the snapshot on each call; nothing is cached.

use std::collections::BTreeSet;

use crate::part::{PartRecord, Rating};
use crate::snapshot::CatalogSnapshot;

/// Absolute window, in inches, used to pick length suggestions for a chosen
/// diameter. Independent of the matcher's relative tolerance.
pub const LENGTH_SUGGESTION_WINDOW_IN: f64 = 0.1;

/// Distinct nominal diameters across the whole catalog, ascending.
pub fn diameters(snapshot: &CatalogSnapshot) -> Vec<f64> {
    sorted_distinct(snapshot.iter().map(|part| part.pipe_size))
}

/// Distinct applicable pressure labels, sorted as strings.
pub fn pressure_labels(snapshot: &CatalogSnapshot) -> Vec<String> {
    distinct_labels(snapshot.iter().map(|part| &part.pressure_psig))
}

/// Distinct applicable temperature labels, sorted as strings.
pub fn temperature_labels(snapshot: &CatalogSnapshot) -> Vec<String> {
    distinct_labels(snapshot.iter().map(|part| &part.temperature_f))
}

/// Distinct overall lengths among parts whose pipe size lies strictly within
/// `window` inches of `diameter`, ascending.
pub fn lengths_near_diameter(snapshot: &CatalogSnapshot, diameter: f64, window: f64) -> Vec<f64> {
    sorted_distinct(
        snapshot
            .iter()
            .filter(|part| near_diameter(part, diameter, window))
            .map(|part| part.overall_length_oal_in),
    )
}

fn near_diameter(part: &PartRecord, diameter: f64, window: f64) -> bool {
    (part.pipe_size - diameter).abs() < window
}

fn sorted_distinct(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.filter(|value| value.is_finite()).collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

fn distinct_labels<'a>(ratings: impl Iterator<Item = &'a Rating>) -> Vec<String> {
    ratings
        .filter_map(Rating::label)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
