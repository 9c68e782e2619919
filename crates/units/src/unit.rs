//! Display unit vocabulary.
//!
//! The configurator stores every numeric query value in a fixed canonical
//! unit per [`Dimension`] (inches, psi, Fahrenheit). Display units are the
//! tokens a UI unit selector hands us (`"MM"`, `"BAR"`, `"°C"`, ...). Parsing
//! a token never fails: anything outside the closed vocabulary becomes
//! [`Unit::Unrecognized`] and is treated as already canonical.

use serde::{Deserialize, Serialize};

/// Physical quantity a query field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Pressure,
    Temperature,
}

impl Dimension {
    /// Token of the canonical unit for this dimension.
    pub fn canonical_token(self) -> &'static str {
        match self {
            Dimension::Length => LengthUnit::Inch.token(),
            Dimension::Pressure => PressureUnit::Psig.token(),
            Dimension::Temperature => TemperatureUnit::Fahrenheit.token(),
        }
    }
}

/// Length display units, expressed as multiplicative factors per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Inch,
    Millimeter,
    Foot,
    /// Legacy catalog token; carries the same factor as millimetres.
    Dm,
    /// Nominal bore, numerically identical to inches.
    NominalBore,
}

impl LengthUnit {
    /// Display units per canonical inch.
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Inch | LengthUnit::NominalBore => 1.0,
            LengthUnit::Millimeter | LengthUnit::Dm => 25.4,
            LengthUnit::Foot => 1.0 / 12.0,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            LengthUnit::Inch => "IN",
            LengthUnit::Millimeter => "MM",
            LengthUnit::Foot => "FT",
            LengthUnit::Dm => "DM",
            LengthUnit::NominalBore => "NB",
        }
    }

    /// Decimal places used when displaying a value in this unit.
    pub fn display_decimals(self) -> usize {
        match self {
            LengthUnit::Foot => 3,
            _ => 2,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match normalize_token(token).as_str() {
            "IN" | "INCH" | "INCHES" => Some(LengthUnit::Inch),
            "MM" => Some(LengthUnit::Millimeter),
            "FT" | "FEET" | "FOOT" => Some(LengthUnit::Foot),
            "DM" => Some(LengthUnit::Dm),
            "NB" => Some(LengthUnit::NominalBore),
            _ => None,
        }
    }
}

/// Pressure display units, expressed as multiplicative factors per psi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    Psig,
    Bar,
}

impl PressureUnit {
    pub fn factor(self) -> f64 {
        match self {
            PressureUnit::Psig => 1.0,
            PressureUnit::Bar => 0.0689476,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            PressureUnit::Psig => "PSIG",
            PressureUnit::Bar => "BAR",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match normalize_token(token).as_str() {
            "PSIG" | "PSI" => Some(PressureUnit::Psig),
            "BAR" => Some(PressureUnit::Bar),
            _ => None,
        }
    }
}

/// Temperature display units. Conversions between them are affine, so there
/// is deliberately no `factor` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn token(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        let normalized = normalize_token(token);
        match normalized.trim_start_matches(['°', 'º']) {
            "F" | "FAHRENHEIT" => Some(TemperatureUnit::Fahrenheit),
            "C" | "CELSIUS" => Some(TemperatureUnit::Celsius),
            _ => None,
        }
    }
}

/// A display unit resolved against a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Length(LengthUnit),
    Pressure(PressureUnit),
    Temperature(TemperatureUnit),
    /// Token not in the vocabulary for the requested dimension.
    Unrecognized,
}

impl Unit {
    /// Resolve a display token for `dimension`. Unknown tokens (including a
    /// valid token of another dimension) resolve to [`Unit::Unrecognized`].
    pub fn parse(token: &str, dimension: Dimension) -> Unit {
        let unit = match dimension {
            Dimension::Length => LengthUnit::from_token(token).map(Unit::Length),
            Dimension::Pressure => PressureUnit::from_token(token).map(Unit::Pressure),
            Dimension::Temperature => TemperatureUnit::from_token(token).map(Unit::Temperature),
        };
        match unit {
            Some(unit) => unit,
            None => {
                tracing::debug!(token, ?dimension, "unrecognized_unit_token");
                Unit::Unrecognized
            }
        }
    }

    /// Multiplicative factor relative to the canonical unit. Temperature and
    /// unrecognized tokens report 1.
    pub fn factor(self) -> f64 {
        match self {
            Unit::Length(unit) => unit.factor(),
            Unit::Pressure(unit) => unit.factor(),
            Unit::Temperature(_) | Unit::Unrecognized => 1.0,
        }
    }
}

fn normalize_token(token: &str) -> String {
    token.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_case_insensitive() {
        assert_eq!(
            Unit::parse("mm", Dimension::Length),
            Unit::Length(LengthUnit::Millimeter)
        );
        assert_eq!(
            Unit::parse(" bar ", Dimension::Pressure),
            Unit::Pressure(PressureUnit::Bar)
        );
        assert_eq!(
            Unit::parse("°c", Dimension::Temperature),
            Unit::Temperature(TemperatureUnit::Celsius)
        );
        assert_eq!(
            Unit::parse("F", Dimension::Temperature),
            Unit::Temperature(TemperatureUnit::Fahrenheit)
        );
    }

    #[test]
    fn cross_dimension_token_is_unrecognized() {
        assert_eq!(Unit::parse("BAR", Dimension::Length), Unit::Unrecognized);
        assert_eq!(Unit::parse("furlong", Dimension::Length), Unit::Unrecognized);
        assert_eq!(Unit::Unrecognized.factor(), 1.0);
    }

    #[test]
    fn legacy_length_tokens_carry_table_factors() {
        assert_eq!(LengthUnit::from_token("DM").map(LengthUnit::factor), Some(25.4));
        assert_eq!(LengthUnit::from_token("NB").map(LengthUnit::factor), Some(1.0));
    }
}
