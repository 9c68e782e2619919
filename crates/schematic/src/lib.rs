//! # Bellows Schematic (`schematic`)
//!
//! Turns a selected [`catalog::PartRecord`] and cuff style into a
//! [`SchematicModel`]: a renderer-agnostic list of drawing primitives on a
//! fixed 800×600 canvas.
//!
//! The drawing is stylized. Seven convolutions are always drawn on a fixed
//! body, and only the annotation text carries the part's real dimensions.
//! Rasterizing or exporting the model belongs to the caller.
//!
//! ```
//! use catalog::PartRecord;
//! use schematic::{build, CuffProfile};
//!
//! let part = PartRecord::new("BSI-1000-18-SS", 10.0, 18.0, 10.0, 14.0);
//! let model = build(Some(&part), "U CUFF");
//! assert_eq!(model.profile, Some(CuffProfile::UProfile));
//! assert_eq!(model.cuffs.len(), 2);
//!
//! assert!(build(None, "U CUFF").is_empty());
//! ```

mod builder;
mod cuff;
mod model;
pub mod primitive;

pub use crate::builder::{
    build, Layout, BODY_SPAN, CONVOLUTIONS, CONVOLUTION_HEIGHT, CUFF_LENGTH, INNER_RADIUS, TITLE,
};
pub use crate::cuff::{CuffProfile, CUFF_OPTIONS};
pub use crate::model::{SchematicModel, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use crate::primitive::{Label, Paint, Point, Primitive, Stroke, TextAnchor};
