use serde::Serialize;

/// Cuff styles offered to the user, in display order. The first entry is the
/// default selection.
pub const CUFF_OPTIONS: [&str; 4] = ["STANDARD I CUFF", "U CUFF", "WITHOUT CUFF", "TRUNCATED CUFF"];

/// How a cuff style is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CuffProfile {
    /// Rectangles spanning the inner radius.
    Standard,
    /// Rectangles spanning the outer radius.
    UProfile,
    /// No cuff rectangles at all.
    Bare,
}

impl CuffProfile {
    /// Classify a style string. Matching is case-sensitive; anything
    /// unrecognized draws as [`CuffProfile::Standard`].
    pub fn classify(style: &str) -> Self {
        if style.contains("WITHOUT") || style.contains("TRUNCATED") {
            CuffProfile::Bare
        } else if style.contains("U CUFF") {
            CuffProfile::UProfile
        } else {
            CuffProfile::Standard
        }
    }

    pub fn has_cuffs(self) -> bool {
        self != CuffProfile::Bare
    }
}
