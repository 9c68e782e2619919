//! Bellows configurator unit layer.
//!
//! Query values arrive as free text in whatever unit the engineer picked.
//! This crate turns them into a fixed canonical unit per dimension so the
//! matcher and the catalog index only ever compare like with like.
//!
//! ## Canonical units
//!
//! | Dimension   | Canonical | Display units            |
//! |-------------|-----------|--------------------------|
//! | Length      | inch      | `IN`, `MM`, `FT` (+ `DM`, `NB`) |
//! | Pressure    | psi       | `PSIG`, `BAR`            |
//! | Temperature | °F        | `°F`, `°C`               |
//!
//! ## No failure path
//!
//! Nothing in here returns an error. Malformed numbers read as `0`, unknown
//! unit tokens act as the canonical unit (factor 1). The caller always gets
//! a value back.
//!
//! ```rust
//! use units::{from_canonical, to_canonical, Dimension};
//!
//! let inches = to_canonical(101.6, "MM", Dimension::Length);
//! assert!((inches - 4.0).abs() < 1e-9);
//! assert_eq!(from_canonical(inches, "FT", Dimension::Length), "0.333");
//! assert_eq!(to_canonical(100.0, "°C", Dimension::Temperature), 212.0);
//! ```

mod convert;
mod parse;
mod unit;

pub use crate::convert::{
    celsius_to_fahrenheit, convert_display, fahrenheit_to_celsius, format_display, from_canonical,
    from_canonical_value, to_canonical,
};
pub use crate::parse::parse_value;
pub use crate::unit::{Dimension, LengthUnit, PressureUnit, TemperatureUnit, Unit};

#[cfg(test)]
mod tests {
    use super::*;

    const LENGTH_UNITS: [&str; 5] = ["IN", "MM", "FT", "DM", "NB"];
    const PRESSURE_UNITS: [&str; 2] = ["PSIG", "BAR"];
    const TEMPERATURE_UNITS: [&str; 2] = ["°F", "°C"];

    fn tolerance(unit: &str, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Temperature => 0.5,
            Dimension::Length if unit == "FT" => 0.0005,
            _ => 0.005,
        }
    }

    fn assert_round_trip(value: f64, unit: &str, dimension: Dimension) {
        let canonical = to_canonical(value, unit, dimension);
        let shown = parse_value(&from_canonical(canonical, unit, dimension));
        assert!(
            (shown - value).abs() <= tolerance(unit, dimension),
            "{value} {unit} came back as {shown}"
        );
    }

    #[test]
    fn single_unit_round_trip() {
        for value in [0.0, 1.0, 4.5, 36.125, 250.0] {
            for unit in LENGTH_UNITS {
                assert_round_trip(value, unit, Dimension::Length);
            }
            for unit in PRESSURE_UNITS {
                assert_round_trip(value, unit, Dimension::Pressure);
            }
        }
        for value in [-40.0, 0.0, 32.0, 100.0, 1200.0] {
            for unit in TEMPERATURE_UNITS {
                assert_round_trip(value, unit, Dimension::Temperature);
            }
        }
    }

    #[test]
    fn chained_conversion_through_canonical_returns_home() {
        let cases: [(&[&str], Dimension, f64); 3] = [
            (&LENGTH_UNITS, Dimension::Length, 24.0),
            (&PRESSURE_UNITS, Dimension::Pressure, 150.0),
            (&TEMPERATURE_UNITS, Dimension::Temperature, 101.0),
        ];
        for (units, dimension, start) in cases {
            for a in units {
                for b in units {
                    let canonical = to_canonical(start, a, dimension);
                    let there = from_canonical_value(canonical, b, dimension);
                    let again = to_canonical(there, b, dimension);
                    let back = parse_value(&from_canonical(again, a, dimension));
                    assert!(
                        (back - start).abs() <= tolerance(a, dimension),
                        "{start} {a} -> {there} {b} -> {back} {a}"
                    );
                }
            }
        }
    }

    #[test]
    fn temperature_is_affine() {
        assert_eq!(to_canonical(0.0, "°C", Dimension::Temperature), 32.0);
        assert_eq!(to_canonical(100.0, "°C", Dimension::Temperature), 212.0);
        assert_eq!(to_canonical(70.0, "°F", Dimension::Temperature), 70.0);
        assert_eq!(from_canonical(212.0, "°C", Dimension::Temperature), "100");
        assert_eq!(convert_display("212", "°F", "°F", Dimension::Temperature), "212");
    }

    #[test]
    fn temperature_rounds_halves_up() {
        assert_eq!(format_display(-2.5, "°C", Dimension::Temperature), "-2");
        assert_eq!(format_display(2.5, "°C", Dimension::Temperature), "3");
        assert_eq!(format_display(-0.4, "°C", Dimension::Temperature), "0");
    }

    #[test]
    fn display_precision_follows_unit() {
        assert_eq!(from_canonical(12.0, "FT", Dimension::Length), "1.000");
        assert_eq!(from_canonical(4.0, "MM", Dimension::Length), "101.60");
        assert_eq!(from_canonical(4.0, "IN", Dimension::Length), "4.00");
        assert_eq!(from_canonical(150.0, "BAR", Dimension::Pressure), "10.34");
    }

    #[test]
    fn unknown_unit_is_treated_as_canonical() {
        assert_eq!(to_canonical(7.0, "cubits", Dimension::Length), 7.0);
        assert_eq!(from_canonical(7.0, "cubits", Dimension::Length), "7.00");
        assert_eq!(to_canonical(7.0, "K", Dimension::Temperature), 7.0);
    }

    #[test]
    fn unit_change_never_zeroes_a_value() {
        let mm = convert_display("4", "IN", "MM", Dimension::Length);
        assert_eq!(mm, "101.60");
        let back = convert_display(&mm, "MM", "IN", Dimension::Length);
        assert_eq!(back, "4.00");
    }
}
