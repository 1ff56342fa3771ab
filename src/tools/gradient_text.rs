use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::css::tailwind::{primary_font, utility};
use crate::css::{
    mix, parse_hex, px, random_hex, sorted_stops, stops_css, to_hex, CodeMode, ColorStop,
    CssBlock, GradientDirection, GradientKind, Keyword, StopField, StyleDescriptor,
    StyleProperty, STOP_BOUNDS,
};
use crate::generator::Generator;
use crate::id_generator::next_id;
use crate::route::Route;

pub const FONT_FAMILIES: [&str; 10] = [
    "Inter, sans-serif",
    "Montserrat, sans-serif",
    "Roboto, sans-serif",
    "Arial, sans-serif",
    "Helvetica, sans-serif",
    "Georgia, serif",
    "Times New Roman, serif",
    "Courier New, monospace",
    "Verdana, sans-serif",
    "Impact, sans-serif",
];

pub const FONT_WEIGHTS: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// A named linear gradient for text, `(color, position)` per stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPreset {
    pub name: &'static str,
    pub direction: GradientDirection,
    pub stops: &'static [(&'static str, f32)],
}

pub const TEXT_PRESETS: &[TextPreset] = &[
    TextPreset {
        name: "Sunset",
        direction: GradientDirection::ToRight,
        stops: &[("#FF5F6D", 0.0), ("#FFC371", 100.0)],
    },
    TextPreset {
        name: "Ocean",
        direction: GradientDirection::ToRight,
        stops: &[("#2193b0", 0.0), ("#6dd5ed", 100.0)],
    },
    TextPreset {
        name: "Purple Love",
        direction: GradientDirection::ToRight,
        stops: &[("#cc2b5e", 0.0), ("#753a88", 100.0)],
    },
    // five stops, the most a gradient holds
    TextPreset {
        name: "Rainbow",
        direction: GradientDirection::ToRight,
        stops: &[
            ("#ff0000", 0.0),
            ("#ffff00", 25.0),
            ("#00ff00", 50.0),
            ("#0000ff", 75.0),
            ("#9400d3", 100.0),
        ],
    },
    TextPreset {
        name: "Pastel",
        direction: GradientDirection::ToRight,
        stops: &[("#74ebd5", 0.0), ("#ACB6E5", 100.0)],
    },
    TextPreset {
        name: "Candy",
        direction: GradientDirection::ToBottomRight,
        stops: &[("#FF85B3", 0.0), ("#9F95EF", 100.0)],
    },
];

impl TextPreset {
    fn color_stops(&self) -> Vec<ColorStop> {
        self.stops
            .iter()
            .zip(1..)
            .map(|((color, position), id)| ColorStop::new(id, *color, *position))
            .collect()
    }
}

/// Text filled with a gradient through `background-clip: text`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTextTool {
    pub text: String,
    pub font_size: f32,
    pub font_weight: u16,
    pub font_family: String,
    pub kind: GradientKind,
    pub direction: GradientDirection,
    pub code_mode: CodeMode,
    stops: Vec<ColorStop>,
}

impl Default for GradientTextTool {
    fn default() -> Self {
        Self {
            text: "Gradient Text".to_owned(),
            font_size: 72.0,
            font_weight: 700,
            font_family: FONT_FAMILIES[0].to_owned(),
            kind: GradientKind::Linear,
            direction: GradientDirection::ToRight,
            code_mode: CodeMode::Css,
            stops: TEXT_PRESETS[0].color_stops(),
        }
    }
}

impl GradientTextTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn can_add_stop(&self) -> bool {
        STOP_BOUNDS.can_add(self.stops.len())
    }

    pub fn can_remove_stop(&self) -> bool {
        STOP_BOUNDS.can_remove(self.stops.len(), 1)
    }

    /// Inserts a stop in the middle of the widest gap between neighbouring
    /// stops, colored by interpolating those neighbours. Returns the new id.
    pub fn add_stop(&mut self) -> Option<u32> {
        if !self.can_add_stop() {
            return None;
        }
        let sorted = sorted_stops(&self.stops);
        let (before, after) = sorted
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .fold(None::<(&ColorStop, &ColorStop)>, |widest, (a, b)| match widest {
                Some((wa, wb)) if wb.position - wa.position >= b.position - a.position => {
                    Some((wa, wb))
                }
                _ => Some((a, b)),
            })?;

        let position = ((before.position + after.position) / 2.0).round();
        let span = after.position - before.position;
        let color = match (parse_hex(&before.color), parse_hex(&after.color)) {
            (Some(from), Some(to)) if span > 0.0 => {
                to_hex(mix(from, to, (position - before.position) / span))
            }
            _ => before.color.clone(),
        };

        let id = next_id(self.stops.iter().map(|s| s.id));
        self.stops.push(ColorStop::new(id, color, position));
        log::debug!("Added text gradient stop {id} at {position}%");
        Some(id)
    }

    pub fn remove_stop(&mut self, id: u32) -> bool {
        if !self.can_remove_stop() {
            return false;
        }
        let before = self.stops.len();
        self.stops.retain(|s| s.id != id);
        before != self.stops.len()
    }

    pub fn update_stop(&mut self, id: u32, field: StopField) -> bool {
        let Some(stop) = self.stops.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        match field {
            StopField::Color(color) => stop.color = color,
            StopField::Position(position) => stop.position = position,
        }
        true
    }

    /// Presets are linear.
    pub fn load_preset(&mut self, preset: &TextPreset) {
        log::info!("Loading text gradient preset {}", preset.name);
        self.stops = preset.color_stops();
        self.direction = preset.direction;
        self.kind = GradientKind::Linear;
    }

    /// The `background` value, ending in the `text` clip keyword.
    pub fn background(&self) -> String {
        let stops = stops_css(&self.stops);
        match self.kind {
            GradientKind::Linear => {
                format!("linear-gradient({}, {stops}) text", self.direction.keyword())
            }
            GradientKind::Radial => format!("radial-gradient(circle at center, {stops}) text"),
        }
    }

    pub fn css_rule(&self) -> String {
        CssBlock::new()
            .declaration("font-size", px(self.font_size))
            .declaration("font-weight", self.font_weight.to_string())
            .declaration("font-family", self.font_family.clone())
            .declaration("background", self.background())
            .declaration("background-clip", "text")
            .declaration("-webkit-background-clip", "text")
            .declaration("color", "transparent")
            .render_rule(".gradient-text")
    }

    /// A `<p>` using utility classes. Two-stop linear gradients map onto
    /// `bg-gradient-to-*`; anything else falls back to an inline style.
    pub fn tailwind_markup(&self) -> String {
        let mut classes = vec![
            utility("text", &px(self.font_size)),
            utility("font", &self.font_weight.to_string()),
            utility("font", &primary_font(&self.font_family)),
        ];
        let sorted = sorted_stops(&self.stops);
        let simple = self.kind == GradientKind::Linear && sorted.len() == 2;
        if simple {
            classes.push(self.direction.tailwind_class().to_owned());
            classes.push(utility("from", &sorted[0].color));
            classes.push(utility("to", &sorted[1].color));
        }
        classes.push("text-transparent".to_owned());
        classes.push("bg-clip-text".to_owned());

        let class_lines: String = classes.iter().map(|c| format!("  {c}\n")).collect();
        let style = if simple {
            String::new()
        } else {
            format!(" style=\"background: {};\"", self.background())
        };
        format!("<p class=\"\n{class_lines}\"{style}>\n  {}\n</p>", self.text)
    }
}

impl Generator for GradientTextTool {
    fn name(&self) -> &'static str {
        "Gradient Text Generator"
    }

    fn route(&self) -> Route {
        Route::GradientText
    }

    fn emit(&self) -> String {
        match self.code_mode {
            CodeMode::Css => self.css_rule(),
            CodeMode::Tailwind => self.tailwind_markup(),
        }
    }

    fn preview(&self) -> StyleDescriptor {
        StyleDescriptor::new()
            .with(StyleProperty::FontSize, px(self.font_size))
            .with(StyleProperty::FontWeight, self.font_weight.to_string())
            .with(StyleProperty::FontFamily, self.font_family.clone())
            .with(StyleProperty::Background, self.background())
            .with(StyleProperty::WebkitBackgroundClip, "text")
            .with(StyleProperty::BackgroundClip, "text")
            .with(StyleProperty::Color, "transparent")
            .with(StyleProperty::LineHeight, "1.2")
            .with(StyleProperty::Display, "inline-block")
    }

    /// Two stops at the ends and, half of the time, a third between 20% and
    /// 79%. Ids follow position order.
    fn randomize(&mut self, rng: &mut dyn RngCore) {
        let mut stops = vec![(random_hex(rng), 0.0), (random_hex(rng), 100.0)];
        if rng.random_bool(0.5) {
            stops.push((random_hex(rng), rng.random_range(20..80) as f32));
            stops.sort_by(|a, b| a.1.total_cmp(&b.1));
        }
        self.stops = stops
            .into_iter()
            .zip(1..)
            .map(|((color, position), id)| ColorStop::new(id, color, position))
            .collect();
        self.direction = GradientDirection::ALL.choose(rng).copied().unwrap_or_default();
        self.kind = GradientKind::Linear;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::{is_hex_color, parse_declarations};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_css_rule() {
        assert_eq!(
            GradientTextTool::new().emit(),
            ".gradient-text {\n  font-size: 72px;\n  font-weight: 700;\n  font-family: Inter, sans-serif;\n  \
             background: linear-gradient(to right, #FF5F6D 0%, #FFC371 100%) text;\n  \
             background-clip: text;\n  -webkit-background-clip: text;\n  color: transparent;\n}"
        );
    }

    #[test]
    fn test_tailwind_two_stops_use_classes() {
        let mut tool = GradientTextTool::new();
        tool.code_mode = CodeMode::Tailwind;
        tool.font_family = "Times New Roman, serif".into();
        tool.load_preset(&TEXT_PRESETS[5]);
        assert_eq!(
            tool.emit(),
            "<p class=\"\n  text-[72px]\n  font-[700]\n  font-[Times_New_Roman]\n  bg-gradient-to-br\n  \
             from-[#FF85B3]\n  to-[#9F95EF]\n  text-transparent\n  bg-clip-text\n\">\n  Gradient Text\n</p>"
        );
    }

    #[test]
    fn test_tailwind_complex_gradient_uses_inline_style() {
        let mut tool = GradientTextTool::new();
        tool.code_mode = CodeMode::Tailwind;
        tool.load_preset(&TEXT_PRESETS[3]);
        let markup = tool.emit();
        assert!(markup.contains("  text-transparent\n  bg-clip-text\n\" style=\"background: linear-gradient(to right, #ff0000 0%"));
        assert!(!markup.contains("bg-gradient-to-r"));
    }

    #[test]
    fn test_add_stop_splits_widest_gap() {
        let mut tool = GradientTextTool::new();
        tool.load_preset(&TextPreset {
            name: "test",
            direction: GradientDirection::ToRight,
            stops: &[("#ffffff", 0.0), ("#ffffff", 20.0), ("#000000", 100.0)],
        });
        assert_eq!(tool.add_stop(), Some(4));
        let added = tool.stops().last().unwrap();
        assert_eq!(added.position, 60.0);
        assert_eq!(added.color, "#808080");

        // 20..60 and 60..100 tie, the first one wins
        assert_eq!(tool.add_stop(), Some(5));
        let added = tool.stops().last().unwrap();
        assert_eq!(added.position, 40.0);
        assert_eq!(added.color, "#c0c0c0");
        assert_eq!(tool.add_stop(), None);
    }

    #[test]
    fn test_remove_keeps_two() {
        let mut tool = GradientTextTool::new();
        assert!(!tool.remove_stop(1));
        let id = tool.add_stop().unwrap();
        assert!(tool.remove_stop(id));
        assert_eq!(tool.stops().len(), 2);
    }

    #[test]
    fn test_presets_fit_stop_bounds() {
        for preset in TEXT_PRESETS {
            assert!(STOP_BOUNDS.contains(preset.stops.len()), "{}", preset.name);
        }
    }

    #[test]
    fn test_random_text_gradient() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut tool = GradientTextTool::new();
        for _ in 0..300 {
            tool.randomize(&mut rng);
            let stops = tool.stops();
            assert!((2..=3).contains(&stops.len()));
            assert!(stops.iter().all(|s| is_hex_color(&s.color)));
            assert!(stops.windows(2).all(|w| w[0].position <= w[1].position && w[0].id < w[1].id));
            let decls = parse_declarations(&tool.css_rule());
            assert!(tool.preview().mismatches(&decls).is_empty());
        }
    }
}
