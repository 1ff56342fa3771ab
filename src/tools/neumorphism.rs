use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::css::{keyword_enum, px, CssBlock, Keyword, StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::route::Route;

keyword_enum! {
    #[derive(Default)]
    pub enum NeumorphShape {
        #[default]
        Square => "square", "Square";
        Circle => "circle", "Circle";
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum NeumorphStyle {
        #[default]
        Raised => "raised", "Raised";
        Inset => "inset", "Inset";
        Flat => "flat", "Flat";
    }
}

/// Background with its light and dark shadow colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeumorphPalette {
    pub background: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

pub const PALETTES: [NeumorphPalette; 6] = [
    NeumorphPalette { background: "#e0e5ec", light: "#ffffff", dark: "#c8d0e7" },
    NeumorphPalette { background: "#f0f0f3", light: "#ffffff", dark: "#d1d9e6" },
    NeumorphPalette { background: "#e8e8e8", light: "#ffffff", dark: "#c5c5c5" },
    NeumorphPalette { background: "#f5f5f5", light: "#ffffff", dark: "#d4d4d4" },
    NeumorphPalette { background: "#ececec", light: "#ffffff", dark: "#c9c9c9" },
    NeumorphPalette { background: "#e3e3e3", light: "#ffffff", dark: "#c0c0c0" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct NeumorphismSettings {
    pub background: String,
    pub light_shadow: String,
    pub dark_shadow: String,
    pub distance: f32,
    pub intensity: f32,
    pub blur: f32,
    pub border_radius: f32,
    pub size: f32,
    pub shape: NeumorphShape,
    pub style: NeumorphStyle,
    pub padding: f32,
}

impl Default for NeumorphismSettings {
    fn default() -> Self {
        Self {
            background: "#e0e5ec".to_owned(),
            light_shadow: "#ffffff".to_owned(),
            dark_shadow: "#c8d0e7".to_owned(),
            distance: 6.0,
            intensity: 1.0,
            blur: 12.0,
            border_radius: 12.0,
            size: 200.0,
            shape: NeumorphShape::Square,
            style: NeumorphStyle::Raised,
            padding: 20.0,
        }
    }
}

impl NeumorphismSettings {
    /// Dark shadow towards the bottom right, light shadow towards the top
    /// left, both scaled by the intensity.
    pub fn box_shadow(&self) -> String {
        let distance = self.distance * self.intensity;
        let blur = px(self.blur * self.intensity);
        let dark = format!("{} {} {blur} {}", px(distance), px(distance), self.dark_shadow);
        let light = format!("{} {} {blur} {}", px(-distance), px(-distance), self.light_shadow);
        match self.style {
            NeumorphStyle::Raised => format!("{dark}, {light}"),
            NeumorphStyle::Inset => format!("inset {dark}, inset {light}"),
            NeumorphStyle::Flat => dark,
        }
    }

    pub fn border_radius(&self) -> String {
        match self.shape {
            NeumorphShape::Square => px(self.border_radius),
            NeumorphShape::Circle => "50%".to_owned(),
        }
    }
}

/// Soft UI element lit from the top left.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NeumorphismTool {
    pub settings: NeumorphismSettings,
}

impl NeumorphismTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn block(&self) -> CssBlock {
        let s = &self.settings;
        CssBlock::new()
            .declaration("background", s.background.clone())
            .declaration("border-radius", s.border_radius())
            .declaration("box-shadow", s.box_shadow())
            .declaration("width", px(s.size))
            .declaration("height", px(s.size))
            .declaration("padding", px(s.padding))
    }
}

impl Generator for NeumorphismTool {
    fn name(&self) -> &'static str {
        "Neumorphism Generator"
    }

    fn route(&self) -> Route {
        Route::Neumorphism
    }

    fn emit(&self) -> String {
        self.block().render()
    }

    fn preview(&self) -> StyleDescriptor {
        let s = &self.settings;
        StyleDescriptor::new()
            .with(StyleProperty::Background, s.background.clone())
            .with(StyleProperty::BorderRadius, s.border_radius())
            .with(StyleProperty::BoxShadow, s.box_shadow())
            .with(StyleProperty::Width, px(s.size))
            .with(StyleProperty::Height, px(s.size))
            .with(StyleProperty::Padding, px(s.padding))
            .with(StyleProperty::Color, "#666")
            .with(StyleProperty::FontSize, "14px")
            .with(StyleProperty::FontWeight, "500")
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        let palette = PALETTES.choose(rng).copied().unwrap_or(PALETTES[0]);
        self.settings = NeumorphismSettings {
            background: palette.background.to_owned(),
            light_shadow: palette.light.to_owned(),
            dark_shadow: palette.dark.to_owned(),
            distance: rng.random_range(3..18) as f32,
            intensity: rng.random_range(0.5..2.0_f32),
            blur: rng.random_range(8..28) as f32,
            border_radius: rng.random_range(5..30) as f32,
            size: rng.random_range(150..300) as f32,
            shape: NeumorphShape::ALL.choose(rng).copied().unwrap_or_default(),
            style: NeumorphStyle::ALL.choose(rng).copied().unwrap_or_default(),
            padding: rng.random_range(10..40) as f32,
        };
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::{parse_declarations, split_top_level};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_raised() {
        assert_eq!(
            NeumorphismTool::new().emit(),
            "background: #e0e5ec;\nborder-radius: 12px;\n\
             box-shadow: 6px 6px 12px #c8d0e7, -6px -6px 12px #ffffff;\n\
             width: 200px;\nheight: 200px;\npadding: 20px;"
        );
    }

    #[test]
    fn test_styles_and_intensity() {
        let mut tool = NeumorphismTool::new();
        tool.settings.intensity = 1.25;
        tool.settings.style = NeumorphStyle::Inset;
        assert_eq!(
            tool.settings.box_shadow(),
            "inset 7.5px 7.5px 15px #c8d0e7, inset -7.5px -7.5px 15px #ffffff"
        );
        tool.settings.style = NeumorphStyle::Flat;
        assert_eq!(tool.settings.box_shadow(), "7.5px 7.5px 15px #c8d0e7");
    }

    #[test]
    fn test_circle_emits_one_radius() {
        let mut tool = NeumorphismTool::new();
        tool.settings.shape = NeumorphShape::Circle;
        let css = tool.emit();
        assert_eq!(css.matches("border-radius").count(), 1);
        assert!(css.contains("border-radius: 50%;"));
        assert_eq!(tool.preview().get(StyleProperty::BorderRadius), Some("50%"));
    }

    #[test]
    fn test_random_settings() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut tool = NeumorphismTool::new();
        for _ in 0..300 {
            tool.randomize(&mut rng);
            let s = &tool.settings;
            assert!(PALETTES.iter().any(|p| p.background == s.background));
            assert!((3.0..18.0).contains(&s.distance));
            assert!((0.5..2.0).contains(&s.intensity));
            assert!((150.0..300.0).contains(&s.size));
            let terms = split_top_level(&s.box_shadow(), ',').len();
            assert_eq!(terms, if s.style == NeumorphStyle::Flat { 1 } else { 2 });
            let decls = parse_declarations(&tool.emit());
            assert!(tool.preview().mismatches(&decls).is_empty());
        }
    }
}
