use catalog::PartRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Admission tolerances for the relative-difference fields.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in the configurator's YAML config.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Maximum `|pipe_size - query| / query` for admission.
    #[serde(default = "MatchConfig::default_diameter_tolerance")]
    pub diameter_tolerance: f64,
    /// Maximum `|oal - query| / query` for admission.
    #[serde(default = "MatchConfig::default_length_tolerance")]
    pub length_tolerance: f64,
}

impl MatchConfig {
    pub(crate) fn default_diameter_tolerance() -> f64 {
        0.20
    }

    pub(crate) fn default_length_tolerance() -> f64 {
        0.30
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.diameter_tolerance.is_finite() || self.diameter_tolerance < 0.0 {
            return Err(MatchError::InvalidConfig(
                "diameter_tolerance must be a finite value >= 0.0".into(),
            ));
        }
        if !self.length_tolerance.is_finite() || self.length_tolerance < 0.0 {
            return Err(MatchError::InvalidConfig(
                "length_tolerance must be a finite value >= 0.0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            diameter_tolerance: Self::default_diameter_tolerance(),
            length_tolerance: Self::default_length_tolerance(),
        }
    }
}

/// Canonicalized query fields. `None` (or empty text) means the field was
/// left blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchQuery {
    /// Nominal diameter in inches.
    pub diameter: Option<f64>,
    /// Overall length in inches.
    pub length: Option<f64>,
    /// Pressure text, matched as a case-insensitive substring of the rating.
    pub pressure: Option<String>,
    /// Temperature text, matched the same way.
    pub temperature: Option<String>,
}

impl MatchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diameter(mut self, inches: f64) -> Self {
        self.diameter = Some(inches);
        self
    }

    pub fn with_length(mut self, inches: f64) -> Self {
        self.length = Some(inches);
        self
    }

    pub fn with_pressure(mut self, text: impl Into<String>) -> Self {
        self.pressure = Some(text.into());
        self
    }

    pub fn with_temperature(mut self, text: impl Into<String>) -> Self {
        self.temperature = Some(text.into());
        self
    }

    pub(crate) fn pressure_text(&self) -> Option<&str> {
        non_empty(self.pressure.as_deref())
    }

    pub(crate) fn temperature_text(&self) -> Option<&str> {
        non_empty(self.temperature.as_deref())
    }

    /// True when all four fields are blank (browse-everything state).
    pub fn is_empty(&self) -> bool {
        self.diameter.is_none()
            && self.length.is_none()
            && self.pressure_text().is_none()
            && self.temperature_text().is_none()
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

/// A catalog part admitted by the matcher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchHit<'a> {
    pub part: &'a PartRecord,
    /// Rank score, `diameter_diff + length_diff`; lower is better.
    pub score: f64,
    pub diameter_diff: f64,
    pub length_diff: f64,
}

/// Ranked admitted parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    hits: Vec<MatchHit<'a>>,
    browse: bool,
}

impl<'a> MatchResult<'a> {
    pub(crate) fn new(hits: Vec<MatchHit<'a>>, browse: bool) -> Self {
        Self { hits, browse }
    }

    pub fn hits(&self) -> &[MatchHit<'a>] {
        &self.hits
    }

    /// Admitted parts in rank order.
    pub fn parts(&self) -> impl Iterator<Item = &'a PartRecord> + '_ {
        self.hits.iter().map(|hit| hit.part)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Whether the query was blank and the catalog passed through unranked.
    pub fn is_browse(&self) -> bool {
        self.browse
    }

    pub fn get(&self, position: usize) -> Option<&MatchHit<'a>> {
        self.hits.get(position)
    }

    /// Rank position of a part number, if admitted.
    pub fn position_of(&self, part_number: &str) -> Option<usize> {
        self.hits
            .iter()
            .position(|hit| hit.part.part_number == part_number)
    }

    pub fn into_hits(self) -> Vec<MatchHit<'a>> {
        self.hits
    }
}

/// Errors produced by the matching layer. Only configuration can be wrong;
/// a query never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
