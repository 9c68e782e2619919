use serde::Serialize;

use crate::part::PartRecord;

const DEFAULT_END_CONFIGURATION: &str = "Standard I Cuff";
const DEFAULT_APPLICATION: &str = "Industrial/General";
const DEFAULT_PLYS: &str = "Single Ply";

/// One labelled line of the technical specification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

impl SpecRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Technical specification rows for a selected part. No part, no rows.
///
/// Empty `cuff_style` / `application` fall back to the catalog defaults.
pub fn spec_sheet(part: Option<&PartRecord>, cuff_style: &str, application: &str) -> Vec<SpecRow> {
    let Some(part) = part else {
        return Vec::new();
    };

    let or_default = |value: &str, default: &str| {
        if value.trim().is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    };

    vec![
        SpecRow::new("Part Number", part.part_number.clone()),
        SpecRow::new("Nominal Size (Pipe)", inches(part.pipe_size)),
        SpecRow::new("Bellows ID", inches(part.bellows_id_in)),
        SpecRow::new("Bellows OD", inches(part.bellows_od_in)),
        SpecRow::new("Overall Length (OAL)", inches(part.overall_length_oal_in)),
        SpecRow::new("Number of Plys", or_default(&part.number_of_plys, DEFAULT_PLYS)),
        SpecRow::new("Live Length", inches(part.live_length_ll_in)),
        SpecRow::new(
            "Bellows Material",
            format!("{} {}", part.bellows_material, part.bellows_material_grade),
        ),
        SpecRow::new(
            "Weld Neck Detail",
            format!("{} {}", part.weld_neck_material, part.weld_neck_grade),
        ),
        SpecRow::new("Design Pressure", part.pressure_psig.to_string()),
        SpecRow::new("Design Temperature", part.temperature_f.to_string()),
        SpecRow::new(
            "Required Cycles",
            format!("{} ({})", part.number_of_cycles, part.cycles_format),
        ),
        SpecRow::new(
            "End Configuration",
            or_default(cuff_style, DEFAULT_END_CONFIGURATION),
        ),
        SpecRow::new(
            "Selected Application",
            or_default(application, DEFAULT_APPLICATION),
        ),
        SpecRow::new("Axial Movement", inches(part.axial_movement_in)),
        SpecRow::new(
            "Axial Spring Rate",
            format!("{} lbf/in", part.axial_spring_rate_lbf_in),
        ),
        SpecRow::new("Lateral Movement", inches(part.lateral_movement_in)),
        SpecRow::new(
            "Lateral Spring Rate",
            format!("{} lbf/in", part.lateral_spring_rate_lbf_in),
        ),
        SpecRow::new("Angular Movement", format!("{}°", part.angular_movement_deg)),
        SpecRow::new(
            "Angular Spring Rate",
            format!("{} ft-lbs/deg", part.angular_spring_rate_ft_lbs_deg),
        ),
        SpecRow::new(
            "Max Allowable Pressure",
            format!("{} psig", part.max_allowable_pressure_psig),
        ),
    ]
}

fn inches(value: f64) -> String {
    format!("{value}\"")
}
