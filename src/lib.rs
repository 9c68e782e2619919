//! Workspace umbrella crate for the bellows configurator.
//!
//! This crate stitches the unit, catalog, matcher and schematic crates
//! together behind a single [`ConfiguratorSession`], and adds YAML
//! configuration on top. UI and document-export layers talk to the session;
//! they never need the member crates directly, though everything is
//! re-exported here for callers that do.
//!
//! ```
//! use bellows::{BellowsConfig, ConfiguratorSession, Field};
//!
//! let mut session = ConfiguratorSession::from_config(&BellowsConfig::default())
//!     .expect("default config is valid");
//! session.set_text(Field::Diameter, "4");
//! session.set_text(Field::Length, "10");
//!
//! let first = session.matches().parts().next().map(|p| p.part_number.clone());
//! if let Some(number) = first {
//!     session.select_part(&number);
//!     assert!(!session.schematic().is_empty());
//! }
//! ```

pub mod config;
pub mod session;

pub use crate::config::{BellowsConfig, ConfigLoadError, IndexYamlConfig, UnitsYamlConfig};
pub use crate::session::{ConfiguratorSession, Field, QueryField};

pub use catalog::{
    index, parse_catalog_json, resolve_catalog, spec_sheet, BundledSource, CatalogError,
    CatalogSnapshot, CatalogSource, CyclesFormat, JsonFileSource, PartRecord, Rating,
    SharedCatalog, SourceConfig, SpecRow, StaticSource,
};
pub use matcher::{
    match_parts, set_match_metrics, MatchConfig, MatchError, MatchHit, MatchMetrics, MatchQuery,
    MatchResult, Matcher,
};
pub use schematic::{
    build as build_schematic, CuffProfile, Label, Primitive, SchematicModel, CUFF_OPTIONS,
};
pub use units::{
    convert_display, from_canonical, parse_value, to_canonical, Dimension, LengthUnit,
    PressureUnit, TemperatureUnit, Unit,
};
