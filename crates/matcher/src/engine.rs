use std::time::Instant;

use catalog::{CatalogSnapshot, PartRecord};
use tracing::debug;

use crate::metrics::metrics_recorder;
use crate::types::{MatchConfig, MatchError, MatchHit, MatchQuery, MatchResult};

#[cfg(test)]
mod tests;

/// Tolerant multi-field matcher over a catalog snapshot.
///
/// Stateless apart from its tolerances, so one instance can serve every
/// session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    config: MatchConfig,
}

/// Per-part evaluation of a query, before admission is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub diameter_diff: f64,
    pub length_diff: f64,
    pub admitted: bool,
}

impl Evaluation {
    pub fn score(&self) -> f64 {
        self.diameter_diff + self.length_diff
    }
}

impl Matcher {
    /// Construct a matcher after validating its tolerances.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score one part against the query and decide admission.
    ///
    /// A supplied diameter or length that is not strictly positive contributes
    /// a difference of 0 and does not constrain admission.
    pub fn evaluate(&self, part: &PartRecord, query: &MatchQuery) -> Evaluation {
        let diameter_diff = relative_diff(part.pipe_size, query.diameter);
        let length_diff = relative_diff(part.overall_length_oal_in, query.length);

        let diameter_ok =
            query.diameter.is_none() || diameter_diff <= self.config.diameter_tolerance;
        let length_ok = query.length.is_none() || length_diff <= self.config.length_tolerance;
        let pressure_ok = query
            .pressure_text()
            .is_none_or(|text| part.pressure_psig.contains_ignore_case(text));
        let temperature_ok = query
            .temperature_text()
            .is_none_or(|text| part.temperature_f.contains_ignore_case(text));

        Evaluation {
            diameter_diff,
            length_diff,
            admitted: diameter_ok && length_ok && pressure_ok && temperature_ok,
        }
    }

    /// Admit and rank catalog parts against the query.
    ///
    /// A blank query returns the whole catalog in catalog order with score 0.
    /// Otherwise admitted parts are ordered by ascending score; ties keep
    /// catalog order.
    pub fn match_parts<'a>(
        &self,
        catalog: &'a CatalogSnapshot,
        query: &MatchQuery,
    ) -> MatchResult<'a> {
        let start = Instant::now();
        let browse = query.is_empty();

        let hits = if browse {
            catalog
                .iter()
                .map(|part| MatchHit {
                    part,
                    score: 0.0,
                    diameter_diff: 0.0,
                    length_diff: 0.0,
                })
                .collect()
        } else {
            let mut hits: Vec<MatchHit<'a>> = catalog
                .iter()
                .filter_map(|part| {
                    let eval = self.evaluate(part, query);
                    eval.admitted.then(|| MatchHit {
                        part,
                        score: eval.score(),
                        diameter_diff: eval.diameter_diff,
                        length_diff: eval.length_diff,
                    })
                })
                .collect();
            // `sort_by` is stable, so equal scores keep catalog order.
            hits.sort_by(|a, b| a.score.total_cmp(&b.score));
            hits
        };

        let result = MatchResult::new(hits, browse);
        let latency = start.elapsed();
        debug!(
            catalog_len = catalog.len(),
            hits = result.len(),
            browse,
            elapsed_micros = latency.as_micros(),
            "match_pass"
        );

        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(catalog.len(), result.len(), browse, latency);
        }

        result
    }
}

/// Run a match pass with the default tolerances.
pub fn match_parts<'a>(catalog: &'a CatalogSnapshot, query: &MatchQuery) -> MatchResult<'a> {
    Matcher::default().match_parts(catalog, query)
}

fn relative_diff(actual: f64, requested: Option<f64>) -> f64 {
    match requested {
        Some(requested) if requested > 0.0 => (actual - requested).abs() / requested,
        _ => 0.0,
    }
}
