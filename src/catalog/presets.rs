use serde::{Deserialize, Serialize};

use super::Categorized;
use crate::css::{evenly_spaced_stops, stops_css, GradientDirection, GradientKind, Keyword};
use crate::tools::shadow::{layers_css, ShadowLayer};

/// A named gradient. Colors are spread evenly when loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientPreset {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: GradientKind,
    #[serde(default)]
    pub direction: GradientDirection,
    pub colors: Vec<String>,
}

impl GradientPreset {
    /// The declaration this preset stands for.
    pub fn css(&self) -> String {
        let stops = stops_css(&evenly_spaced_stops(&self.colors));
        match self.kind {
            GradientKind::Linear => format!(
                "background: linear-gradient({}, {stops});",
                self.direction.keyword()
            ),
            GradientKind::Radial => format!("background: radial-gradient(circle, {stops});"),
        }
    }
}

impl Categorized for GradientPreset {
    fn category(&self) -> &str {
        &self.category
    }
}

/// A single shadow or a stack of up to four layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowPreset {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Loads into multi-layer mode when set
    #[serde(default)]
    pub multi: bool,
    pub layers: Vec<ShadowLayer>,
}

impl ShadowPreset {
    pub fn css(&self) -> String {
        format!("box-shadow: {};", layers_css(&self.layers))
    }
}

impl Categorized for ShadowPreset {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Corner radii as written in CSS, e.g. `"50%"` or `"12px"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadiusPreset {
    pub id: String,
    pub name: String,
    pub category: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_right: String,
    pub bottom_left: String,
}

impl BorderRadiusPreset {
    pub fn css(&self) -> String {
        format!(
            "border-radius: {} {} {} {};",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }

    pub fn corners(&self) -> [&str; 4] {
        [&self.top_left, &self.top_right, &self.bottom_right, &self.bottom_left]
    }
}

impl Categorized for BorderRadiusPreset {
    fn category(&self) -> &str {
        &self.category
    }
}
