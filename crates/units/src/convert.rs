use crate::parse::parse_value;
use crate::unit::{Dimension, TemperatureUnit, Unit};

/// Convert a display value into the canonical unit of `dimension`.
///
/// Length and pressure divide by the unit's factor. Temperature is affine:
/// only a Celsius source moves the value (`v * 9/5 + 32`); Fahrenheit and
/// unrecognized tokens are identity.
pub fn to_canonical(value: f64, from_unit: &str, dimension: Dimension) -> f64 {
    match Unit::parse(from_unit, dimension) {
        Unit::Temperature(TemperatureUnit::Celsius) => celsius_to_fahrenheit(value),
        Unit::Temperature(TemperatureUnit::Fahrenheit) => value,
        unit => value / unit.factor(),
    }
}

/// Convert a canonical value into `to_unit` without rounding.
pub fn from_canonical_value(value: f64, to_unit: &str, dimension: Dimension) -> f64 {
    match Unit::parse(to_unit, dimension) {
        Unit::Temperature(TemperatureUnit::Celsius) => fahrenheit_to_celsius(value),
        Unit::Temperature(TemperatureUnit::Fahrenheit) => value,
        unit => value * unit.factor(),
    }
}

/// Convert a canonical value into `to_unit` and format it for display.
pub fn from_canonical(value: f64, to_unit: &str, dimension: Dimension) -> String {
    let converted = from_canonical_value(value, to_unit, dimension);
    format_display(converted, to_unit, dimension)
}

/// Format an already-converted value with the rounding rules of its unit:
/// lengths in feet keep 3 decimals and other lengths 2, pressures keep 2,
/// temperatures round to the nearest integer (halves toward +∞).
pub fn format_display(value: f64, unit: &str, dimension: Dimension) -> String {
    match dimension {
        Dimension::Length => {
            let decimals = match Unit::parse(unit, dimension) {
                Unit::Length(length) => length.display_decimals(),
                _ => 2,
            };
            format!("{value:.decimals$}")
        }
        Dimension::Pressure => format!("{value:.2}"),
        Dimension::Temperature => format!("{}", round_half_up(value) as i64),
    }
}

/// Re-express a display string in another unit.
///
/// The text is read with [`parse_value`], brought back to canonical from the
/// previous unit and formatted in the new one. Temperatures use the direct
/// F↔C formulas so the additive offset is applied once per boundary crossing.
///
/// This is a one-shot conversion of text with no stored value behind it.
/// Chaining it compounds display rounding; code that toggles units back and
/// forth should keep the canonical value and call [`from_canonical`].
pub fn convert_display(text: &str, from_unit: &str, to_unit: &str, dimension: Dimension) -> String {
    let value = parse_value(text);
    match dimension {
        Dimension::Temperature => {
            let from = Unit::parse(from_unit, dimension);
            let to = Unit::parse(to_unit, dimension);
            let converted = match (from, to) {
                (
                    Unit::Temperature(TemperatureUnit::Fahrenheit),
                    Unit::Temperature(TemperatureUnit::Celsius),
                ) => fahrenheit_to_celsius(value),
                (
                    Unit::Temperature(TemperatureUnit::Celsius),
                    Unit::Temperature(TemperatureUnit::Fahrenheit),
                ) => celsius_to_fahrenheit(value),
                _ => value,
            };
            format_display(converted, to_unit, dimension)
        }
        Dimension::Length | Dimension::Pressure => {
            let canonical = to_canonical(value, from_unit, dimension);
            from_canonical(canonical, to_unit, dimension)
        }
    }
}

pub fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

fn round_half_up(value: f64) -> f64 {
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
