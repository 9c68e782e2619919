use std::time::Instant;

use catalog::PartRecord;
use tracing::debug;

use crate::cuff::CuffProfile;
use crate::model::{SchematicModel, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::primitive::{
    Label, Paint, Point, Primitive, Stroke, TextAnchor, ACCENT, DIM_LINE, HIGHLIGHT, LABEL,
    OUTLINE,
};

/// Convolutions drawn, independent of the part's real count.
pub const CONVOLUTIONS: usize = 7;
pub const BODY_SPAN: f64 = 420.0;
pub const INNER_RADIUS: f64 = 100.0;
pub const CONVOLUTION_HEIGHT: f64 = 50.0;
pub const CUFF_LENGTH: f64 = 80.0;
/// How far the arc control points overshoot the outer radius.
const ARC_OVERSHOOT: f64 = 12.0;

pub const TITLE: &str = "TECHNICAL SCHEMATIC - BSI REV.A";

/// Derived body geometry. Fixed for every part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub center: Point,
    pub inner: f64,
    pub outer: f64,
    pub cell_width: f64,
    pub start_x: f64,
    pub end_x: f64,
}

impl Layout {
    pub fn standard() -> Self {
        let center = Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        Self {
            center,
            inner: INNER_RADIUS,
            outer: INNER_RADIUS + CONVOLUTION_HEIGHT,
            cell_width: BODY_SPAN / CONVOLUTIONS as f64,
            start_x: center.x - BODY_SPAN / 2.0,
            end_x: center.x + BODY_SPAN / 2.0,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Build the schematic for `part` drawn with `cuff_style`.
///
/// Pure and deterministic. `None` yields [`SchematicModel::empty`].
pub fn build(part: Option<&PartRecord>, cuff_style: &str) -> SchematicModel {
    let Some(part) = part else {
        return SchematicModel::empty();
    };

    let start = Instant::now();
    let layout = Layout::standard();
    let profile = CuffProfile::classify(cuff_style);

    let mut model = SchematicModel::with_profile(profile);
    model.body = body(&layout);
    model.cuffs = cuffs(&layout, profile);
    model.annotations = annotations(&layout, part);
    model.title = title_block(part);

    debug!(
        part_number = %part.part_number,
        profile = ?profile,
        primitives = model.primitive_count(),
        elapsed_micros = start.elapsed().as_micros(),
        "schematic_built"
    );
    model
}

fn body(layout: &Layout) -> Vec<Primitive> {
    let cy = layout.center.y;
    let mut out = Vec::with_capacity(CONVOLUTIONS * 4);

    for i in 0..CONVOLUTIONS {
        let xs = layout.start_x + i as f64 * layout.cell_width;
        let xm = xs + layout.cell_width / 2.0;
        let xe = xs + layout.cell_width;

        out.push(Primitive::Rect {
            origin: Point::new(xs, cy - layout.inner),
            width: layout.cell_width,
            height: layout.inner * 2.0,
            fill: Paint::BodyShading,
            stroke: None,
        });
        out.push(Primitive::Cubic {
            start: Point::new(xs, cy - layout.inner),
            control1: Point::new(xs, cy - layout.outer - ARC_OVERSHOOT),
            control2: Point::new(xe, cy - layout.outer - ARC_OVERSHOOT),
            end: Point::new(xe, cy - layout.inner),
            fill: Paint::MetalTop,
            stroke: Stroke::solid(OUTLINE, 1.2),
        });
        out.push(Primitive::Quadratic {
            start: Point::new(xs + 6.0, cy - layout.outer + 4.0),
            control: Point::new(xm, cy - layout.outer - 3.0),
            end: Point::new(xe - 6.0, cy - layout.outer + 4.0),
            stroke: Stroke {
                opacity: 0.4,
                round_cap: true,
                ..Stroke::solid(HIGHLIGHT, 3.0)
            },
        });
        out.push(Primitive::Cubic {
            start: Point::new(xs, cy + layout.inner),
            control1: Point::new(xs, cy + layout.outer + ARC_OVERSHOOT),
            control2: Point::new(xe, cy + layout.outer + ARC_OVERSHOOT),
            end: Point::new(xe, cy + layout.inner),
            fill: Paint::MetalBottom,
            stroke: Stroke::solid(OUTLINE, 1.2),
        });
    }
    out
}

fn cuffs(layout: &Layout, profile: CuffProfile) -> Vec<Primitive> {
    let radius = match profile {
        CuffProfile::Bare => return Vec::new(),
        CuffProfile::UProfile => layout.outer,
        CuffProfile::Standard => layout.inner,
    };
    let y = layout.center.y - radius;

    [layout.start_x - CUFF_LENGTH, layout.end_x]
        .into_iter()
        .map(|x| Primitive::Rect {
            origin: Point::new(x, y),
            width: CUFF_LENGTH,
            height: radius * 2.0,
            fill: Paint::BodyShading,
            stroke: Some(Stroke::solid(OUTLINE, 1.5)),
        })
        .collect()
}

fn annotations(layout: &Layout, part: &PartRecord) -> Vec<Primitive> {
    let Layout {
        center,
        inner,
        outer,
        cell_width,
        start_x,
        end_x,
    } = *layout;
    let (cx, cy) = (center.x, center.y);
    let thin = Stroke::solid(DIM_LINE, 0.5);
    let mut out = Vec::with_capacity(32);

    // Mean diameter: dashed span with arrowheads and a vertical label.
    let mean_x = start_x - 120.0;
    let top = Point::new(mean_x, cy - inner);
    let bottom = Point::new(mean_x, cy + inner);
    let accent = Stroke::solid(ACCENT, 1.0);
    out.push(Primitive::line(top, bottom, Stroke::dashed(ACCENT, 1.0, 4.0, 2.0)));
    out.push(Primitive::polyline(
        vec![top.offset(-3.0, 8.0), top, top.offset(3.0, 8.0)],
        accent,
    ));
    out.push(Primitive::polyline(
        vec![bottom.offset(-3.0, -8.0), bottom, bottom.offset(3.0, -8.0)],
        accent,
    ));
    out.push(Primitive::Text(Label {
        rotation: -90.0,
        middle_baseline: true,
        ..Label::new(
            Point::new(start_x - 125.0, cy),
            format!("MEAN DIA: {:.3}\"", part.mean_diameter()),
            TextAnchor::End,
            ACCENT,
        )
    }));

    // OD and ID reference lines.
    let reference = Stroke::dashed(DIM_LINE, 0.5, 2.0, 2.0);
    out.push(Primitive::line(
        Point::new(cx - 50.0, cy - outer),
        Point::new(cx + 50.0, cy - outer),
        reference,
    ));
    out.push(Primitive::Text(Label::new(
        Point::new(cx, cy - outer - 10.0),
        format!("OD: {}\"", part.bellows_od_in),
        TextAnchor::Middle,
        LABEL,
    )));
    out.push(Primitive::line(
        Point::new(cx - 30.0, cy - inner),
        Point::new(cx + 30.0, cy - inner),
        reference,
    ));
    out.push(Primitive::Text(Label::new(
        Point::new(cx, cy - inner + 15.0),
        format!("ID: {}\"", part.bellows_id_in),
        TextAnchor::Middle,
        LABEL,
    )));

    // Overall length across both cuffs.
    let oal_y = cy + outer + 40.0;
    let left = Point::new(start_x - CUFF_LENGTH, oal_y);
    let right = Point::new(end_x + CUFF_LENGTH, oal_y);
    out.push(Primitive::line(left, right, Stroke::solid(LABEL, 1.0)));
    for center in [left, right] {
        out.push(Primitive::Circle {
            center,
            radius: 2.0,
            fill: Paint::Solid(LABEL),
        });
    }
    out.push(Primitive::Text(Label::new(
        Point::new(cx, cy + outer + 55.0),
        format!("OAL: {}\"", part.overall_length_oal_in),
        TextAnchor::Middle,
        LABEL,
    )));

    let tangent_y = cy + outer + 20.0;
    out.push(Primitive::line(
        Point::new(start_x - CUFF_LENGTH, tangent_y),
        Point::new(start_x, tangent_y),
        Stroke::solid(DIM_LINE, 1.0),
    ));
    out.push(Primitive::Text(
        Label::new(
            Point::new(start_x - CUFF_LENGTH / 2.0, cy + outer + 32.0),
            "TANGENT",
            TextAnchor::Middle,
            LABEL,
        )
        .sized(8.0),
    ));

    // Crest and root callouts on the first convolution.
    let crest = Point::new(start_x + cell_width / 2.0, cy - outer - 5.0);
    let crest_knee = crest.offset(10.0, -25.0);
    out.push(Primitive::polyline(
        vec![crest, crest_knee, crest_knee.offset(15.0, 0.0)],
        thin,
    ));
    out.push(Primitive::Text(Label::new(
        Point::new(start_x + cell_width / 2.0 + 28.0, cy - outer - 30.0),
        "CREST",
        TextAnchor::Start,
        LABEL,
    )));

    let root = Point::new(start_x + cell_width, cy - inner);
    let root_knee = root.offset(5.0, -15.0);
    out.push(Primitive::polyline(
        vec![root, root_knee, root_knee.offset(15.0, 0.0)],
        thin,
    ));
    out.push(Primitive::Text(Label::new(
        Point::new(start_x + cell_width + 22.0, cy - inner - 15.0),
        "ROOT",
        TextAnchor::Start,
        LABEL,
    )));

    let pitch_y = cy - outer - 40.0;
    out.push(Primitive::line(
        Point::new(start_x + cell_width, pitch_y),
        Point::new(start_x + cell_width * 2.0, pitch_y),
        Stroke::solid(DIM_LINE, 1.0),
    ));
    out.push(Primitive::Text(
        Label::new(
            Point::new(start_x + cell_width * 1.5, pitch_y - 5.0),
            "PITCH",
            TextAnchor::Middle,
            LABEL,
        )
        .sized(8.0),
    ));

    let depth = Point::new(start_x + cell_width / 2.0, cy - outer / 2.0);
    out.push(Primitive::polyline(vec![depth, depth.offset(-60.0, -40.0)], thin));
    out.push(Primitive::Text(Label::new(
        Point::new(start_x - 65.0, cy - outer / 2.0 - 40.0),
        format!("CONVOLUTION DEPTH: {:.3}\"", part.convolution_depth()),
        TextAnchor::End,
        LABEL,
    )));

    out
}

fn title_block(part: &PartRecord) -> Vec<Label> {
    let right = CANVAS_WIDTH - 24.0;
    vec![
        Label::new(Point::new(right, 30.0), TITLE, TextAnchor::End, LABEL).sized(12.0),
        Label::new(
            Point::new(right, 46.0),
            format!("PART NO: {}", part.part_number),
            TextAnchor::End,
            DIM_LINE,
        ),
    ]
}
