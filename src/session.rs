//! Configurator session: the one mutable piece of the core.
//!
//! A [`ConfiguratorSession`] owns the user's query fields and selections and
//! re-derives every view (matches, schematic, spec sheet, suggestions) from
//! scratch on request. Nothing is cached, so no view can go stale. Each user
//! gets their own session; sessions share nothing but cheap catalog
//! snapshot clones.

use catalog::{index, spec_sheet, CatalogSnapshot, CyclesFormat, PartRecord, Rating, SpecRow};
use matcher::{MatchQuery, MatchResult, Matcher};
use schematic::{SchematicModel, CUFF_OPTIONS};
use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{from_canonical, parse_value, to_canonical, Dimension, TemperatureUnit, Unit};

use crate::config::{BellowsConfig, ConfigLoadError, UnitsYamlConfig};

/// The four query inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Diameter,
    Length,
    Pressure,
    Temperature,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Diameter,
        Field::Length,
        Field::Pressure,
        Field::Temperature,
    ];

    pub fn dimension(self) -> Dimension {
        match self {
            Field::Diameter | Field::Length => Dimension::Length,
            Field::Pressure => Dimension::Pressure,
            Field::Temperature => Dimension::Temperature,
        }
    }
}

/// Display text plus the unit it is expressed in.
///
/// `canonical` is the value last entered or selected, in the dimension's
/// canonical unit. Unit changes re-render `text` from it and never write it
/// back, so switching units any number of times cannot drift the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryField {
    pub text: String,
    pub unit: String,
    #[serde(default)]
    pub canonical: Option<f64>,
}

impl QueryField {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            unit: unit.into(),
            canonical: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn set_text(&mut self, text: String, dimension: Dimension) {
        self.canonical =
            (!text.is_empty()).then(|| to_canonical(parse_value(&text), &self.unit, dimension));
        self.text = text;
    }

    fn set_canonical(&mut self, text: String, canonical: Option<f64>) {
        self.text = text;
        self.canonical = canonical;
    }
}

#[derive(Debug, Clone)]
pub struct ConfiguratorSession {
    catalog: CatalogSnapshot,
    matcher: Matcher,
    length_window: f64,
    diameter: QueryField,
    length: QueryField,
    pressure: QueryField,
    temperature: QueryField,
    cuff_style: String,
    selected: Option<String>,
    cycles: String,
    cycles_format: CyclesFormat,
    application: String,
    custom_application: String,
}

impl ConfiguratorSession {
    /// Session over `catalog` with default tolerances and units.
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self::with_parts(
            catalog,
            Matcher::default(),
            index::LENGTH_SUGGESTION_WINDOW_IN,
            &UnitsYamlConfig::default(),
        )
    }

    /// Resolve the catalog named by `config` (falling back to the bundled
    /// dataset) and start a session over it.
    ///
    /// The config is validated first; a catalog failure only degrades to the
    /// bundled dataset, but bad tolerances or units are an error.
    pub fn from_config(config: &BellowsConfig) -> Result<Self, ConfigLoadError> {
        config.validate()?;
        let primary = config.catalog.build();
        let catalog = catalog::resolve_catalog(primary.as_deref());
        Self::with_config(catalog, config)
    }

    /// Start a session over an already-resolved catalog using the tolerances
    /// and default units from `config`.
    pub fn with_config(
        catalog: CatalogSnapshot,
        config: &BellowsConfig,
    ) -> Result<Self, ConfigLoadError> {
        config.validate()?;
        let matcher = Matcher::new(config.matcher)?;
        Ok(Self::with_parts(
            catalog,
            matcher,
            config.index.length_window_in,
            &config.units,
        ))
    }

    fn with_parts(
        catalog: CatalogSnapshot,
        matcher: Matcher,
        length_window: f64,
        units: &UnitsYamlConfig,
    ) -> Self {
        Self {
            catalog,
            matcher,
            length_window,
            diameter: QueryField::new(&units.diameter),
            length: QueryField::new(&units.length),
            pressure: QueryField::new(&units.pressure),
            temperature: QueryField::new(&units.temperature),
            cuff_style: CUFF_OPTIONS[0].to_string(),
            selected: None,
            cycles: String::new(),
            cycles_format: CyclesFormat::default(),
            application: String::new(),
            custom_application: String::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    /// Swap in a refreshed catalog. Query state is kept; a selection whose
    /// part disappeared is cleared.
    pub fn replace_catalog(&mut self, catalog: CatalogSnapshot) {
        self.catalog = catalog;
        if let Some(number) = &self.selected {
            if self.catalog.find(number).is_none() {
                debug!(part_number = %number, "selection_dropped_on_refresh");
                self.selected = None;
            }
        }
    }

    pub fn field(&self, field: Field) -> &QueryField {
        match field {
            Field::Diameter => &self.diameter,
            Field::Length => &self.length,
            Field::Pressure => &self.pressure,
            Field::Temperature => &self.temperature,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut QueryField {
        match field {
            Field::Diameter => &mut self.diameter,
            Field::Length => &mut self.length,
            Field::Pressure => &mut self.pressure,
            Field::Temperature => &mut self.temperature,
        }
    }

    /// Replace a field's text, interpreted in the field's current unit.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        self.field_mut(field).set_text(text.into(), field.dimension());
    }

    /// Change a field's unit, re-expressing the stored canonical value in the
    /// new unit.
    pub fn set_unit(&mut self, field: Field, unit: impl Into<String>) {
        let unit = unit.into();
        let dimension = field.dimension();
        let slot = self.field_mut(field);
        if let Some(canonical) = slot.canonical {
            let converted = from_canonical(canonical, &unit, dimension);
            debug!(?field, from = %slot.unit, to = %unit, canonical, converted = %converted, "unit_changed");
            slot.text = converted;
        }
        slot.unit = unit;
    }

    /// Canonicalized query for the matcher. Pressure and temperature text is
    /// matched as displayed.
    pub fn query(&self) -> MatchQuery {
        let text = |field: &QueryField| (!field.is_empty()).then(|| field.text.clone());
        MatchQuery {
            diameter: self.diameter.canonical,
            length: self.length.canonical,
            pressure: text(&self.pressure),
            temperature: text(&self.temperature),
        }
    }

    pub fn matches(&self) -> MatchResult<'_> {
        self.matcher.match_parts(&self.catalog, &self.query())
    }

    pub fn result_count(&self) -> usize {
        self.matches().len()
    }

    pub fn selected_part_number(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_part(&self) -> Option<&PartRecord> {
        self.selected
            .as_deref()
            .and_then(|number| self.catalog.find(number))
    }

    /// Select a part and copy its values into the query fields.
    ///
    /// Diameter and length are shown in the fields' current units, pressure
    /// takes the part's label, temperature the numeric part of its label
    /// (converted when the field is in °C). A not-applicable rating leaves
    /// the field blank. An empty `part_number` clears the selection; an
    /// unknown one is ignored and returns `false`.
    pub fn select_part(&mut self, part_number: &str) -> bool {
        if part_number.is_empty() {
            self.clear_selection();
            return true;
        }
        let Some(part) = self.catalog.find(part_number).cloned() else {
            debug!(part_number, "select_unknown_part");
            return false;
        };

        let diameter = from_canonical(part.pipe_size, &self.diameter.unit, Dimension::Length);
        self.diameter.set_canonical(diameter, Some(part.pipe_size));
        let length = from_canonical(
            part.overall_length_oal_in,
            &self.length.unit,
            Dimension::Length,
        );
        self.length
            .set_canonical(length, Some(part.overall_length_oal_in));
        let pressure = part.pressure_psig.label();
        self.pressure.set_canonical(
            pressure.unwrap_or_default().to_string(),
            pressure.map(parse_value),
        );
        let temperature = self.temperature_text_for(&part.temperature_f);
        self.temperature
            .set_canonical(temperature, part.temperature_f.label().map(parse_value));
        self.cycles = part.number_of_cycles.clone();
        self.cycles_format = part.cycles_format;
        self.selected = Some(part.part_number);
        debug!(part_number, "part_selected");
        true
    }

    fn temperature_text_for(&self, rating: &Rating) -> String {
        let Some(label) = rating.label() else {
            return String::new();
        };
        let fahrenheit = parse_value(label);
        match Unit::parse(&self.temperature.unit, Dimension::Temperature) {
            Unit::Temperature(TemperatureUnit::Celsius) => {
                units::format_display(units::fahrenheit_to_celsius(fahrenheit), "°C", Dimension::Temperature)
            }
            _ => fahrenheit.to_string(),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Select the next part in the current ranking. With nothing selected this
    /// picks the first. Returns whether the selection moved.
    pub fn next_part(&mut self) -> bool {
        let target = {
            let matches = self.matches();
            let next = match self.current_position(&matches) {
                Some(position) => position + 1,
                None => 0,
            };
            matches.get(next).map(|hit| hit.part.part_number.clone())
        };
        target.is_some_and(|number| self.select_part(&number))
    }

    /// Select the previous part in the current ranking. Does nothing at the
    /// top or when the selection is not ranked.
    pub fn previous_part(&mut self) -> bool {
        let target = {
            let matches = self.matches();
            self.current_position(&matches)
                .and_then(|position| position.checked_sub(1))
                .and_then(|previous| matches.get(previous))
                .map(|hit| hit.part.part_number.clone())
        };
        target.is_some_and(|number| self.select_part(&number))
    }

    fn current_position(&self, matches: &MatchResult<'_>) -> Option<usize> {
        self.selected
            .as_deref()
            .and_then(|number| matches.position_of(number))
    }

    pub fn cuff_style(&self) -> &str {
        &self.cuff_style
    }

    pub fn set_cuff_style(&mut self, style: impl Into<String>) {
        self.cuff_style = style.into();
    }

    pub fn set_application(&mut self, application: impl Into<String>) {
        self.application = application.into();
    }

    pub fn set_custom_application(&mut self, application: impl Into<String>) {
        self.custom_application = application.into();
    }

    /// The chosen application, else the free-text one, else empty.
    pub fn application(&self) -> &str {
        if !self.application.is_empty() {
            &self.application
        } else {
            &self.custom_application
        }
    }

    pub fn cycles(&self) -> (&str, CyclesFormat) {
        (&self.cycles, self.cycles_format)
    }

    pub fn set_cycles(&mut self, cycles: impl Into<String>, format: CyclesFormat) {
        self.cycles = cycles.into();
        self.cycles_format = format;
    }

    pub fn schematic(&self) -> SchematicModel {
        schematic::build(self.selected_part(), &self.cuff_style)
    }

    pub fn spec_sheet(&self) -> Vec<SpecRow> {
        spec_sheet(self.selected_part(), &self.cuff_style, self.application())
    }

    /// Catalog diameters in the diameter field's unit.
    pub fn diameter_suggestions(&self) -> Vec<String> {
        index::diameters(&self.catalog)
            .into_iter()
            .map(|size| from_canonical(size, &self.diameter.unit, Dimension::Length))
            .collect()
    }

    /// Lengths of parts near the entered diameter, in the length field's
    /// unit. Empty until a diameter is entered.
    pub fn length_suggestions(&self) -> Vec<String> {
        let Some(diameter) = self.diameter.canonical else {
            return Vec::new();
        };
        index::lengths_near_diameter(&self.catalog, diameter, self.length_window)
            .into_iter()
            .map(|oal| from_canonical(oal, &self.length.unit, Dimension::Length))
            .collect()
    }

    pub fn pressure_suggestions(&self) -> Vec<String> {
        index::pressure_labels(&self.catalog)
    }

    pub fn temperature_suggestions(&self) -> Vec<String> {
        index::temperature_labels(&self.catalog)
    }
}
