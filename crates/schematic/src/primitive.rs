//! Drawing primitives in the fixed 800×600 logical coordinate space.
//!
//! Paint is symbolic: gradients are referenced by name and their stop tables
//! travel with the model, so an external renderer needs nothing else.

use serde::Serialize;

pub const OUTLINE: &str = "#1a1a1a";
pub const LABEL: &str = "#414042";
pub const DIM_LINE: &str = "#9ca3af";
pub const ACCENT: &str = "#C80A37";
pub const HIGHLIGHT: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Relative move, like an SVG `l dx dy`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient, 0.0..=1.0.
    pub offset: f64,
    pub color: &'static str,
}

const fn stop(offset: f64, color: &'static str) -> GradientStop {
    GradientStop { offset, color }
}

/// Vertical linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gradient {
    pub id: &'static str,
    /// True when offset 0.0 sits at the bottom edge.
    pub bottom_up: bool,
    pub stops: &'static [GradientStop],
}

pub const METAL_TOP: Gradient = Gradient {
    id: "metalGradientTop",
    bottom_up: false,
    stops: &[
        stop(0.0, "#414a4c"),
        stop(0.2, "#d1d5db"),
        stop(0.5, "#f3f4f6"),
        stop(0.8, "#9ca3af"),
        stop(1.0, "#111827"),
    ],
};

pub const METAL_BOTTOM: Gradient = Gradient {
    id: "metalGradientBottom",
    bottom_up: true,
    stops: &[
        stop(0.0, "#111827"),
        stop(0.2, "#d1d5db"),
        stop(0.5, "#f3f4f6"),
        stop(0.8, "#9ca3af"),
        stop(1.0, "#414a4c"),
    ],
};

pub const BODY_SHADING: Gradient = Gradient {
    id: "bodyShading",
    bottom_up: false,
    stops: &[
        stop(0.0, "#1a202c"),
        stop(0.1, "#e2e8f0"),
        stop(0.35, "#94a3b8"),
        stop(0.5, "#f1f5f9"),
        stop(0.65, "#94a3b8"),
        stop(0.9, "#e2e8f0"),
        stop(1.0, "#1a202c"),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Paint {
    None,
    MetalTop,
    MetalBottom,
    BodyShading,
    Solid(&'static str),
}

impl Paint {
    pub fn gradient(self) -> Option<&'static Gradient> {
        match self {
            Paint::MetalTop => Some(&METAL_TOP),
            Paint::MetalBottom => Some(&METAL_BOTTOM),
            Paint::BodyShading => Some(&BODY_SHADING),
            Paint::None | Paint::Solid(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    /// Dash and gap lengths; `None` is a solid line.
    pub dash: Option<(f64, f64)>,
    pub opacity: f64,
    pub round_cap: bool,
}

impl Stroke {
    pub const fn solid(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
            opacity: 1.0,
            round_cap: false,
        }
    }

    pub const fn dashed(color: &'static str, width: f64, dash: f64, gap: f64) -> Self {
        Self {
            color,
            width,
            dash: Some((dash, gap)),
            opacity: 1.0,
            round_cap: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub at: Point,
    pub content: String,
    pub anchor: TextAnchor,
    pub size: f64,
    pub color: &'static str,
    /// Degrees, rotated about `at`.
    pub rotation: f64,
    /// Vertically centre on `at` instead of sitting on the baseline.
    pub middle_baseline: bool,
}

impl Label {
    pub fn new(at: Point, content: impl Into<String>, anchor: TextAnchor, color: &'static str) -> Self {
        Self {
            at,
            content: content.into(),
            anchor,
            size: 10.0,
            color,
            rotation: 0.0,
            middle_baseline: false,
        }
    }

    pub fn sized(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    /// Cubic Bézier from `start` to `end`, closed back to `start` for fill.
    Cubic {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
        fill: Paint,
        stroke: Stroke,
    },
    Quadratic {
        start: Point,
        control: Point,
        end: Point,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// Open connected segments (leaders, arrowheads).
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Paint,
    },
    Text(Label),
}

impl Primitive {
    pub fn line(from: Point, to: Point, stroke: Stroke) -> Self {
        Primitive::Line { from, to, stroke }
    }

    pub fn polyline(points: Vec<Point>, stroke: Stroke) -> Self {
        Primitive::Polyline { points, stroke }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Primitive::Text(label) => Some(label),
            _ => None,
        }
    }
}
