use serde::{Deserialize, Serialize};

use super::keyword::keyword_enum;
use super::number::fmt_number;
use crate::collection::Bounds;

/// Both gradient tools keep between two and five stops.
pub const STOP_BOUNDS: Bounds = Bounds::new(2, 5);

keyword_enum! {
    #[derive(Default)]
    pub enum GradientKind {
        #[default]
        Linear => "linear", "Linear";
        Radial => "radial", "Radial";
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum GradientDirection {
        #[default]
        ToRight => "to right", "Left to Right";
        ToLeft => "to left", "Right to Left";
        ToBottom => "to bottom", "Top to Bottom";
        ToTop => "to top", "Bottom to Top";
        ToBottomRight => "to bottom right", "Top Left to Bottom Right";
        ToBottomLeft => "to bottom left", "Top Right to Bottom Left";
        ToTopRight => "to top right", "Bottom Left to Top Right";
        ToTopLeft => "to top left", "Bottom Right to Top Left";
    }
}

impl GradientDirection {
    /// The matching `bg-gradient-to-*` utility.
    pub fn tailwind_class(self) -> &'static str {
        match self {
            Self::ToRight => "bg-gradient-to-r",
            Self::ToLeft => "bg-gradient-to-l",
            Self::ToBottom => "bg-gradient-to-b",
            Self::ToTop => "bg-gradient-to-t",
            Self::ToBottomRight => "bg-gradient-to-br",
            Self::ToBottomLeft => "bg-gradient-to-bl",
            Self::ToTopRight => "bg-gradient-to-tr",
            Self::ToTopLeft => "bg-gradient-to-tl",
        }
    }

    /// Unit vector pointing where the gradient ends, y growing downwards.
    pub fn vector(self) -> (f32, f32) {
        let d = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            Self::ToRight => (1.0, 0.0),
            Self::ToLeft => (-1.0, 0.0),
            Self::ToBottom => (0.0, 1.0),
            Self::ToTop => (0.0, -1.0),
            Self::ToBottomRight => (d, d),
            Self::ToBottomLeft => (-d, d),
            Self::ToTopRight => (d, -d),
            Self::ToTopLeft => (-d, -d),
        }
    }
}

/// A `(color, position%)` point of a gradient. The id survives reordering so
/// controls can keep addressing the same stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub id: u32,
    pub color: String,
    pub position: f32,
}

impl ColorStop {
    pub fn new(id: u32, color: impl Into<String>, position: f32) -> Self {
        Self {
            id,
            color: color.into(),
            position,
        }
    }

    pub fn css(&self) -> String {
        format!("{} {}%", self.color, fmt_number(self.position))
    }
}

/// A single field edit on a color stop.
#[derive(Debug, Clone, PartialEq)]
pub enum StopField {
    Color(String),
    Position(f32),
}

/// Stops in ascending position order. The sort is stable, so stops sharing a
/// position keep their stored order.
pub fn sorted_stops(stops: &[ColorStop]) -> Vec<&ColorStop> {
    let mut sorted: Vec<&ColorStop> = stops.iter().collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
    sorted
}

/// `color p%, color p%, ...` in ascending position order.
pub fn stops_css(stops: &[ColorStop]) -> String {
    sorted_stops(stops)
        .into_iter()
        .map(ColorStop::css)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Spreads colors evenly from 0% to 100%, numbering ids from 1.
pub fn evenly_spaced_stops<S: AsRef<str>>(colors: &[S]) -> Vec<ColorStop> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            ColorStop::new(
                i as u32 + 1,
                color.as_ref(),
                (i as f32 / last * 100.0).round(),
            )
        })
        .collect()
}
