//! # Bellows Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` decides which catalog parts satisfy a user's partial
//! specification and in what order to present them. It sits on top of the
//! catalog crate and only ever reads a [`catalog::CatalogSnapshot`], so a
//! refresh can never show it a half-updated table.
//!
//! ## Rules
//!
//! - Diameter and length use relative tolerances (20% and 30% by default,
//!   see [`MatchConfig`]). A blank or non-positive value leaves the field
//!   unconstrained.
//! - Pressure and temperature admit by case-insensitive substring of the
//!   part's rating label. Not-applicable ratings never match a non-empty text.
//! - Admitted parts rank by `diameter_diff + length_diff`, ascending. Ties
//!   keep catalog order.
//! - A fully blank [`MatchQuery`] passes the catalog through untouched.
//!
//! Nothing here fails at query time: no admissions is simply an empty
//! [`MatchResult`].
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{CatalogSnapshot, PartRecord};
//! use matcher::{MatchQuery, Matcher};
//!
//! let catalog = CatalogSnapshot::new(vec![
//!     PartRecord::new("A", 4.0, 10.0, 4.5, 5.75),
//!     PartRecord::new("B", 4.5, 10.5, 5.0, 6.25),
//!     PartRecord::new("C", 8.0, 20.0, 8.5, 10.0),
//! ]);
//!
//! let query = MatchQuery::new().with_diameter(4.0).with_length(10.0);
//! let result = Matcher::default().match_parts(&catalog, &query);
//!
//! let ranked: Vec<_> = result.parts().map(|p| p.part_number.as_str()).collect();
//! assert_eq!(ranked, ["A", "B"]);
//! ```
//!
//! ## Observability
//!
//! Every pass emits a `match_pass` debug event. Install a [`MatchMetrics`]
//! implementation via [`set_match_metrics`] to also record latency and
//! admission counts.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{match_parts, Evaluation, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{MatchConfig, MatchError, MatchHit, MatchQuery, MatchResult};
