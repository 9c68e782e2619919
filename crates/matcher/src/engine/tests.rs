use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use catalog::{CatalogSnapshot, PartRecord, Rating};

use super::*;
use crate::metrics::{set_match_metrics, MatchMetrics};

fn part(number: &str, size: f64, oal: f64) -> PartRecord {
    PartRecord::new(number, size, oal, size + 0.5, size + 1.5)
}

fn rated(number: &str, size: f64, oal: f64, pressure: &str, temperature: &str) -> PartRecord {
    part(number, size, oal).with_ratings(Rating::from_label(pressure), Rating::from_label(temperature))
}

fn abc_catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(vec![
        part("A", 4.0, 10.0),
        part("B", 4.5, 10.5),
        part("C", 8.0, 20.0),
    ])
}

fn numbers<'a>(result: &MatchResult<'a>) -> Vec<&'a str> {
    result.parts().map(|p| p.part_number.as_str()).collect()
}

#[test]
fn diameter_and_length_admit_within_tolerance() {
    let catalog = abc_catalog();
    let query = MatchQuery::new().with_diameter(4.0).with_length(10.0);
    let result = match_parts(&catalog, &query);

    assert_eq!(numbers(&result), vec!["A", "B"]);
    assert!(!result.is_browse());

    let b = result.get(1).expect("B admitted");
    assert!((b.diameter_diff - 0.125).abs() < 1e-12);
    assert!((b.length_diff - 0.05).abs() < 1e-12);
    assert!((b.score - 0.175).abs() < 1e-12);
    assert_eq!(result.get(0).map(|hit| hit.score), Some(0.0));
}

#[test]
fn ranking_is_by_combined_relative_difference() {
    let catalog = CatalogSnapshot::new(vec![
        part("FAR", 4.7, 12.5),
        part("NEAR", 4.1, 10.2),
        part("EXACT", 4.0, 10.0),
    ]);
    let query = MatchQuery::new().with_diameter(4.0).with_length(10.0);
    let result = match_parts(&catalog, &query);

    assert_eq!(numbers(&result), vec!["EXACT", "NEAR", "FAR"]);
    assert!(result.hits().windows(2).all(|w| w[0].score <= w[1].score));
}

#[test]
fn pressure_substring_is_case_insensitive() {
    let catalog = CatalogSnapshot::new(vec![
        rated("P1", 4.0, 10.0, "150 @ 500°F", "500"),
        rated("P2", 4.0, 10.0, "300", "500"),
        rated("P3", 4.0, 10.0, "Full Vacuum", "500"),
    ]);

    let result = match_parts(&catalog, &MatchQuery::new().with_pressure("150"));
    assert_eq!(numbers(&result), vec!["P1"]);

    let result = match_parts(&catalog, &MatchQuery::new().with_pressure("VACUUM"));
    assert_eq!(numbers(&result), vec!["P3"]);
}

#[test]
fn not_applicable_ratings_never_satisfy_text_fields() {
    let catalog = CatalogSnapshot::new(vec![
        rated("NA", 4.0, 10.0, "NIL", "NIL"),
        rated("RATED", 4.0, 10.0, "150", "650"),
    ]);

    let result = match_parts(&catalog, &MatchQuery::new().with_pressure("ni"));
    assert!(result.is_empty());

    let result = match_parts(&catalog, &MatchQuery::new().with_temperature("650"));
    assert_eq!(numbers(&result), vec!["RATED"]);
}

#[test]
fn oversized_diameter_excluded_regardless_of_other_fields() {
    let catalog = CatalogSnapshot::new(vec![
        rated("WIDE", 5.0, 10.0, "150", "650"),
        rated("OK", 4.5, 10.0, "150", "650"),
    ]);
    let query = MatchQuery::new()
        .with_diameter(4.0)
        .with_length(10.0)
        .with_pressure("150")
        .with_temperature("650");
    let result = match_parts(&catalog, &query);

    // 5.0 vs 4.0 is a 25% miss; every other field matches exactly.
    assert_eq!(numbers(&result), vec!["OK"]);
}

#[test]
fn boundary_tolerance_is_inclusive() {
    let catalog = CatalogSnapshot::new(vec![part("EDGE", 4.0, 13.0)]);
    let result = match_parts(&catalog, &MatchQuery::new().with_length(10.0));
    assert_eq!(result.len(), 1);
}

#[test]
fn equal_scores_keep_catalog_order() {
    let catalog = CatalogSnapshot::new(vec![
        part("LOW", 3.5, 10.0),
        part("MID", 4.0, 10.0),
        part("HIGH", 4.5, 10.0),
    ]);
    let result = match_parts(&catalog, &MatchQuery::new().with_diameter(4.0));

    // LOW and HIGH are both 12.5% away.
    assert_eq!(numbers(&result), vec!["MID", "LOW", "HIGH"]);
}

#[test]
fn text_only_query_keeps_catalog_order() {
    let catalog = CatalogSnapshot::new(vec![
        rated("Z", 12.0, 20.0, "150", "650"),
        rated("Y", 2.0, 6.0, "150", "650"),
        rated("X", 6.0, 14.0, "300", "650"),
    ]);
    let result = match_parts(&catalog, &MatchQuery::new().with_pressure("150"));
    assert_eq!(numbers(&result), vec!["Z", "Y"]);
}

#[test]
fn empty_query_returns_whole_catalog() {
    let catalog = abc_catalog();
    let result = match_parts(&catalog, &MatchQuery::new());

    assert!(result.is_browse());
    assert_eq!(result.len(), catalog.len());

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for p in result.parts() {
        *counts.entry(p.part_number.as_str()).or_default() += 1;
    }
    for p in &catalog {
        assert_eq!(counts.get(p.part_number.as_str()), Some(&1));
    }
}

#[test]
fn zero_or_negative_numeric_fields_do_not_constrain() {
    let catalog = abc_catalog();

    let result = match_parts(&catalog, &MatchQuery::new().with_diameter(0.0));
    assert_eq!(numbers(&result), vec!["A", "B", "C"]);
    assert!(!result.is_browse());
    assert!(result.hits().iter().all(|hit| hit.score == 0.0));

    let result = match_parts(&catalog, &MatchQuery::new().with_length(-3.0));
    assert_eq!(result.len(), 3);
}

#[test]
fn no_admissions_is_an_empty_result() {
    let catalog = abc_catalog();
    let result = match_parts(&catalog, &MatchQuery::new().with_diameter(48.0));
    assert!(result.is_empty());
    assert_eq!(result.position_of("A"), None);
}

#[test]
fn empty_catalog_yields_empty_result() {
    let catalog = CatalogSnapshot::default();
    assert!(match_parts(&catalog, &MatchQuery::new()).is_empty());
    assert!(match_parts(&catalog, &MatchQuery::new().with_diameter(4.0)).is_empty());
}

#[test]
fn custom_tolerances_are_applied() -> Result<(), MatchError> {
    let matcher = Matcher::new(MatchConfig {
        diameter_tolerance: 0.10,
        length_tolerance: 0.30,
    })?;
    let catalog = abc_catalog();
    let result = matcher.match_parts(&catalog, &MatchQuery::new().with_diameter(4.0));
    assert_eq!(numbers(&result), vec!["A"]);
    Ok(())
}

#[test]
fn invalid_tolerances_are_rejected() {
    let err = Matcher::new(MatchConfig {
        diameter_tolerance: f64::INFINITY,
        length_tolerance: 0.3,
    });
    assert!(matches!(err, Err(MatchError::InvalidConfig(_))));
}

#[test]
fn position_of_tracks_rank() {
    let catalog = abc_catalog();
    let query = MatchQuery::new().with_diameter(4.5).with_length(10.5);
    let result = match_parts(&catalog, &query);
    assert_eq!(result.position_of("B"), Some(0));
    assert_eq!(result.position_of("A"), Some(1));
}

#[derive(Default)]
struct RecordingMetrics {
    events: Arc<RwLock<Vec<(usize, usize, bool)>>>,
}

impl MatchMetrics for RecordingMetrics {
    fn record_match(&self, catalog_len: usize, hit_count: usize, browse: bool, _latency: Duration) {
        self.events
            .write()
            .unwrap()
            .push((catalog_len, hit_count, browse));
    }
}

#[test]
fn metrics_recorder_observes_matches() {
    let metrics = Arc::new(RecordingMetrics::default());
    set_match_metrics(Some(metrics.clone()));

    // An unusual catalog size so concurrent tests do not collide.
    let catalog = CatalogSnapshot::new(
        (0..11)
            .map(|i| part(&format!("M-{i}"), 4.0 + f64::from(i), 10.0))
            .collect(),
    );
    let result = match_parts(&catalog, &MatchQuery::new().with_diameter(4.0));
    let _ = match_parts(&catalog, &MatchQuery::new());
    set_match_metrics(None);

    let events = metrics.events.read().unwrap().clone();
    assert!(events.contains(&(11, result.len(), false)));
    assert!(events.contains(&(11, 11, true)));
}
