//! Building blocks shared by every generator: number and color formatting,
//! declaration blocks, the preview style descriptor and the small amount of
//! CSS parsing needed to compare emitted code against a preview.

mod color;
mod declaration;
mod gradient;
mod keyword;
mod number;
mod style;
pub mod tailwind;

pub use color::{
    alpha_percent, brightness, contrast_color, is_hex_color, mix, parse_css_color, parse_hex,
    random_hex, to_hex, Rgb, Rgba,
};
pub use declaration::{parse_declarations, split_top_level, CssBlock, Declaration};
pub use gradient::{
    evenly_spaced_stops, sorted_stops, stops_css, ColorStop, GradientDirection, GradientKind,
    StopField, STOP_BOUNDS,
};
pub use keyword::Keyword;
pub(crate) use keyword::keyword_enum;
pub use number::{fmt_number, px};
pub use style::{normalize_value, StyleDescriptor, StyleProperty};

use serde::{Deserialize, Serialize};

/// Which flavour of code a tool emits when it supports more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CodeMode {
    #[default]
    Css,
    Tailwind,
}

impl CodeMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::Tailwind => "Tailwind",
        }
    }
}
