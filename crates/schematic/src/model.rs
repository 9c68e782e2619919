use serde::Serialize;

use crate::cuff::CuffProfile;
use crate::primitive::{Gradient, Label, Primitive, BODY_SHADING, METAL_BOTTOM, METAL_TOP};

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Everything needed to reproduce the drawing: canvas, gradient tables and
/// primitives in paint order (body, cuffs, annotations, title).
///
/// A model built without a part is empty; renderers show a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchematicModel {
    pub width: f64,
    pub height: f64,
    pub profile: Option<CuffProfile>,
    pub gradients: Vec<Gradient>,
    pub body: Vec<Primitive>,
    pub cuffs: Vec<Primitive>,
    pub annotations: Vec<Primitive>,
    pub title: Vec<Label>,
}

impl SchematicModel {
    pub fn empty() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            profile: None,
            gradients: Vec::new(),
            body: Vec::new(),
            cuffs: Vec::new(),
            annotations: Vec::new(),
            title: Vec::new(),
        }
    }

    pub(crate) fn with_profile(profile: CuffProfile) -> Self {
        Self {
            profile: Some(profile),
            gradients: vec![METAL_TOP, METAL_BOTTOM, BODY_SHADING],
            ..Self::empty()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
            && self.cuffs.is_empty()
            && self.annotations.is_empty()
            && self.title.is_empty()
    }

    /// Every primitive in paint order. Title labels come last.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.body
            .iter()
            .chain(self.cuffs.iter())
            .chain(self.annotations.iter())
    }

    pub fn primitive_count(&self) -> usize {
        self.body.len() + self.cuffs.len() + self.annotations.len() + self.title.len()
    }

    /// All text, annotations first, then the title block.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.annotations
            .iter()
            .filter_map(Primitive::as_label)
            .chain(self.title.iter())
    }

    pub fn find_label(&self, prefix: &str) -> Option<&Label> {
        self.labels().find(|label| label.content.starts_with(prefix))
    }
}

impl Default for SchematicModel {
    fn default() -> Self {
        Self::empty()
    }
}
