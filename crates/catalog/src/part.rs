//! Catalog part records.
//!
//! [`PartRecord`] mirrors one row of the remote `bellows_parts` table. Rows
//! are read-only here; the catalog management collaborator owns writes.
//!
//! Pressure and temperature ratings are free-text labels in the catalog
//! (`"150"`, `"150 @ 500°F"`) and use the sentinel `"NIL"` for "not
//! applicable". That sentinel never leaves deserialization: it becomes
//! [`Rating::NotApplicable`].

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Catalog sentinel for "not applicable".
pub const NOT_APPLICABLE_SENTINEL: &str = "NIL";

/// A pressure or temperature rating label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Rating {
    /// Free-text label as stored in the catalog.
    Rated(String),
    #[default]
    NotApplicable,
}

impl Rating {
    /// Build a rating from raw catalog text. Empty text and the `NIL`
    /// sentinel (any case) map to [`Rating::NotApplicable`].
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_APPLICABLE_SENTINEL) {
            Rating::NotApplicable
        } else if trimmed.len() == label.len() {
            Rating::Rated(label)
        } else {
            Rating::Rated(trimmed.to_string())
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Rating::Rated(label) => Some(label.as_str()),
            Rating::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Rating::Rated(_))
    }

    /// Case-insensitive substring test used for admission. A not-applicable
    /// rating contains nothing.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        match self {
            Rating::Rated(label) => label.to_lowercase().contains(&needle.to_lowercase()),
            Rating::NotApplicable => false,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Rated(label) => f.write_str(label),
            Rating::NotApplicable => f.write_str(NOT_APPLICABLE_SENTINEL),
        }
    }
}

/// Catalog cells are sometimes text, sometimes numbers, sometimes null.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseCell {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl LooseCell {
    fn into_text(self) -> String {
        match self {
            LooseCell::Text(text) => text,
            LooseCell::Integer(value) => value.to_string(),
            LooseCell::Number(value) => value.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cell = Option::<LooseCell>::deserialize(deserializer)?;
        Ok(cell
            .map(|cell| Rating::from_label(cell.into_text()))
            .unwrap_or(Rating::NotApplicable))
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<LooseCell>::deserialize(deserializer)?;
    Ok(cell.map(LooseCell::into_text).unwrap_or_default())
}

/// Whether the rated cycle count assumes concurrent movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CyclesFormat {
    Concurrent,
    #[default]
    NonConcurrent,
}

impl CyclesFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            CyclesFormat::Concurrent => "Concurrent",
            CyclesFormat::NonConcurrent => "Non-concurrent",
        }
    }

    /// Lenient parse; anything not recognisably "concurrent" is the
    /// non-concurrent default.
    pub fn parse(text: &str) -> Self {
        let normalized: String = text
            .chars()
            .filter(|ch| ch.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        if normalized == "concurrent" {
            CyclesFormat::Concurrent
        } else {
            CyclesFormat::NonConcurrent
        }
    }
}

impl fmt::Display for CyclesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CyclesFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.as_deref().map(CyclesFormat::parse).unwrap_or_default())
    }
}

impl Serialize for CyclesFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Movement axis for the rated movement / spring-rate pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementAxis {
    Axial,
    Lateral,
    Angular,
}

/// Rated movement and paired spring rate along one axis.
///
/// Axial and lateral travel are in inches with spring rates in lbf/in;
/// angular travel is in degrees with a spring rate in ft-lb/deg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Movement {
    pub axis: MovementAxis,
    pub travel: f64,
    pub spring_rate: f64,
}

/// One bellows part from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    pub part_number: String,
    /// Nominal pipe size, inches.
    pub pipe_size: f64,
    pub overall_length_oal_in: f64,
    pub bellows_id_in: f64,
    pub bellows_od_in: f64,
    #[serde(default)]
    pub live_length_ll_in: f64,
    #[serde(default, deserialize_with = "loose_text")]
    pub number_of_plys: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub bellows_material: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub bellows_material_grade: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub weld_neck_material: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub weld_neck_grade: String,
    #[serde(default)]
    pub pressure_psig: Rating,
    #[serde(default)]
    pub temperature_f: Rating,
    #[serde(default, deserialize_with = "loose_text")]
    pub number_of_cycles: String,
    #[serde(default)]
    pub cycles_format: CyclesFormat,
    #[serde(default)]
    pub axial_movement_in: f64,
    #[serde(default)]
    pub axial_spring_rate_lbf_in: f64,
    #[serde(default)]
    pub lateral_movement_in: f64,
    #[serde(default)]
    pub lateral_spring_rate_lbf_in: f64,
    #[serde(default)]
    pub angular_movement_deg: f64,
    #[serde(default)]
    pub angular_spring_rate_ft_lbs_deg: f64,
    #[serde(default)]
    pub max_allowable_pressure_psig: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PartRecord {
    /// Minimal record with the dimensional fields set and everything else
    /// empty. Handy for callers that synthesize catalogs.
    pub fn new(
        part_number: impl Into<String>,
        pipe_size: f64,
        overall_length_oal_in: f64,
        bellows_id_in: f64,
        bellows_od_in: f64,
    ) -> Self {
        Self {
            part_number: part_number.into(),
            pipe_size,
            overall_length_oal_in,
            bellows_id_in,
            bellows_od_in,
            live_length_ll_in: 0.0,
            number_of_plys: String::new(),
            bellows_material: String::new(),
            bellows_material_grade: String::new(),
            weld_neck_material: String::new(),
            weld_neck_grade: String::new(),
            pressure_psig: Rating::NotApplicable,
            temperature_f: Rating::NotApplicable,
            number_of_cycles: String::new(),
            cycles_format: CyclesFormat::default(),
            axial_movement_in: 0.0,
            axial_spring_rate_lbf_in: 0.0,
            lateral_movement_in: 0.0,
            lateral_spring_rate_lbf_in: 0.0,
            angular_movement_deg: 0.0,
            angular_spring_rate_ft_lbs_deg: 0.0,
            max_allowable_pressure_psig: 0.0,
            image_url: None,
        }
    }

    pub fn with_ratings(mut self, pressure: Rating, temperature: Rating) -> Self {
        self.pressure_psig = pressure;
        self.temperature_f = temperature;
        self
    }

    /// `(ID + OD) / 2`, inches.
    pub fn mean_diameter(&self) -> f64 {
        (self.bellows_id_in + self.bellows_od_in) / 2.0
    }

    /// `(OD - ID) / 2`, inches.
    pub fn convolution_depth(&self) -> f64 {
        (self.bellows_od_in - self.bellows_id_in) / 2.0
    }

    pub fn movements(&self) -> [Movement; 3] {
        [
            Movement {
                axis: MovementAxis::Axial,
                travel: self.axial_movement_in,
                spring_rate: self.axial_spring_rate_lbf_in,
            },
            Movement {
                axis: MovementAxis::Lateral,
                travel: self.lateral_movement_in,
                spring_rate: self.lateral_spring_rate_lbf_in,
            },
            Movement {
                axis: MovementAxis::Angular,
                travel: self.angular_movement_deg,
                spring_rate: self.angular_spring_rate_ft_lbs_deg,
            },
        ]
    }

    /// Check the record invariants: non-empty part number, positive pipe
    /// size and overall length, `OD > ID >= 0`, all finite.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidPart {
            part_number: self.part_number.clone(),
            reason: reason.to_string(),
        };

        if self.part_number.trim().is_empty() {
            return Err(invalid("part_number must not be empty"));
        }
        let dimensions = [
            self.pipe_size,
            self.overall_length_oal_in,
            self.bellows_id_in,
            self.bellows_od_in,
        ];
        if dimensions.iter().any(|value| !value.is_finite()) {
            return Err(invalid("dimensions must be finite"));
        }
        if self.pipe_size <= 0.0 {
            return Err(invalid("pipe_size must be > 0"));
        }
        if self.overall_length_oal_in <= 0.0 {
            return Err(invalid("overall_length_oal_in must be > 0"));
        }
        if self.bellows_id_in < 0.0 {
            return Err(invalid("bellows_id_in must be >= 0"));
        }
        if self.bellows_od_in <= self.bellows_id_in {
            return Err(invalid("bellows_od_in must exceed bellows_id_in"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sentinel_and_empty_are_not_applicable() {
        assert_eq!(Rating::from_label("NIL"), Rating::NotApplicable);
        assert_eq!(Rating::from_label("nil "), Rating::NotApplicable);
        assert_eq!(Rating::from_label(""), Rating::NotApplicable);
        assert_eq!(Rating::from_label(" 150 "), Rating::Rated("150".into()));
    }

    #[test]
    fn not_applicable_never_substring_matches() {
        assert!(!Rating::NotApplicable.contains_ignore_case("nil"));
        assert!(Rating::from_label("150 @ 500°F").contains_ignore_case("500°f"));
    }

    #[test]
    fn deserializes_loose_catalog_row() {
        let row = json!({
            "part_number": "P-1",
            "pipe_size": 4,
            "overall_length_oal_in": 10.5,
            "bellows_id_in": 4.5,
            "bellows_od_in": 5.75,
            "number_of_plys": 2,
            "pressure_psig": 150,
            "temperature_f": null,
            "number_of_cycles": 3000,
            "cycles_format": "Concurrent"
        });
        let part: PartRecord = serde_json::from_value(row).expect("row parses");
        assert_eq!(part.number_of_plys, "2");
        assert_eq!(part.pressure_psig, Rating::Rated("150".into()));
        assert_eq!(part.temperature_f, Rating::NotApplicable);
        assert_eq!(part.number_of_cycles, "3000");
        assert_eq!(part.cycles_format, CyclesFormat::Concurrent);
        assert!(part.validate().is_ok());
    }

    #[test]
    fn rating_serializes_back_to_sentinel() {
        let value = serde_json::to_value(Rating::NotApplicable).expect("serialize");
        assert_eq!(value, json!("NIL"));
    }

    #[test]
    fn cycles_format_parse_is_lenient() {
        assert_eq!(CyclesFormat::parse("Non-concurrent"), CyclesFormat::NonConcurrent);
        assert_eq!(CyclesFormat::parse("CONCURRENT"), CyclesFormat::Concurrent);
        assert_eq!(CyclesFormat::parse("whatever"), CyclesFormat::NonConcurrent);
    }

    #[test]
    fn invariants_are_enforced() {
        let ok = PartRecord::new("P", 4.0, 10.0, 4.5, 5.75);
        assert!(ok.validate().is_ok());

        let inverted = PartRecord::new("P", 4.0, 10.0, 6.0, 5.0);
        assert!(matches!(
            inverted.validate(),
            Err(CatalogError::InvalidPart { reason, .. }) if reason.contains("bellows_od_in")
        ));

        let zero_length = PartRecord::new("P", 4.0, 0.0, 4.5, 5.75);
        assert!(zero_length.validate().is_err());

        let unnamed = PartRecord::new(" ", 4.0, 10.0, 4.5, 5.75);
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn derived_dimensions() {
        let part = PartRecord::new("P", 10.0, 20.0, 10.0, 14.0);
        assert_eq!(part.mean_diameter(), 12.0);
        assert_eq!(part.convolution_depth(), 2.0);
    }
}
