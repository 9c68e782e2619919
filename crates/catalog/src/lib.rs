//! # Bellows catalog (`catalog`)
//!
//! Read-only model of the bellows parts catalog and the projections the
//! configurator builds from it.
//!
//! ## What lives here
//!
//! - [`PartRecord`]: one catalog row. Pressure/temperature ratings are
//!   [`Rating`] values, so the `"NIL"` sentinel is gone after parsing.
//! - [`CatalogSnapshot`]: immutable, cheaply cloned view used for a whole
//!   matching or drawing pass. [`SharedCatalog`] swaps snapshots on refresh.
//! - Sources: [`CatalogSource`] with [`JsonFileSource`], [`StaticSource`] and
//!   the compiled-in [`BundledSource`]. [`resolve_catalog`] picks the primary
//!   source or falls back to the bundled rows, once per session.
//! - Suggestion index ([`index`]): distinct diameters, rating labels, and
//!   lengths available near a chosen diameter.
//! - [`spec_sheet`]: labelled technical specification rows for a part.
//!
//! ## Example
//!
//! ```
//! use catalog::{index, resolve_catalog, BundledSource};
//!
//! let snapshot = resolve_catalog(Some(&BundledSource));
//! let sizes = index::diameters(&snapshot);
//! assert!(sizes.windows(2).all(|w| w[0] < w[1]));
//!
//! let lengths = index::lengths_near_diameter(&snapshot, 4.0, index::LENGTH_SUGGESTION_WINDOW_IN);
//! assert!(!lengths.is_empty());
//! ```

mod error;
pub mod index;
mod part;
mod sheet;
mod snapshot;
mod source;

pub use crate::error::CatalogError;
pub use crate::part::{
    CyclesFormat, Movement, MovementAxis, PartRecord, Rating, NOT_APPLICABLE_SENTINEL,
};
pub use crate::sheet::{spec_sheet, SpecRow};
pub use crate::snapshot::{CatalogSnapshot, SharedCatalog};
pub use crate::source::{
    parse_catalog_json, resolve_catalog, BundledSource, CatalogSource, JsonFileSource,
    SourceConfig, StaticSource,
};
