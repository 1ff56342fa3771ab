use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::catalog::ShadowPreset;
use crate::collection::Bounds;
use crate::css::{alpha_percent, fmt_number, px, StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::route::Route;

pub const LAYER_BOUNDS: Bounds = Bounds::new(1, 4);

/// One `box-shadow` term. Lengths are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowLayer {
    pub horizontal_offset: f32,
    pub vertical_offset: f32,
    pub blur_radius: f32,
    pub spread_radius: f32,
    pub color: String,
    #[serde(default)]
    pub inset: bool,
}

impl Default for ShadowLayer {
    fn default() -> Self {
        Self {
            horizontal_offset: 0.0,
            vertical_offset: 4.0,
            blur_radius: 8.0,
            spread_radius: 0.0,
            color: black_with_opacity(20),
            inset: false,
        }
    }
}

impl ShadowLayer {
    /// The layer appended by "add layer".
    pub fn added() -> Self {
        Self {
            vertical_offset: 2.0,
            blur_radius: 4.0,
            color: black_with_opacity(10),
            ..Self::default()
        }
    }

    pub fn css(&self) -> String {
        format!(
            "{}{} {} {} {} {}",
            if self.inset { "inset " } else { "" },
            px(self.horizontal_offset),
            px(self.vertical_offset),
            px(self.blur_radius),
            px(self.spread_radius),
            self.color
        )
    }

    fn random(rng: &mut dyn RngCore) -> (Self, u8) {
        let opacity = rng.random_range(5..=34);
        let layer = Self {
            horizontal_offset: rng.random_range(-5..=5) as f32,
            vertical_offset: rng.random_range(1..=10) as f32,
            blur_radius: rng.random_range(3..=15) as f32,
            spread_radius: rng.random_range(-2..=3) as f32,
            color: black_with_opacity(opacity),
            inset: rng.random_bool(0.15),
        };
        (layer, opacity)
    }
}

/// Layer terms joined with `", "`, each prefixed by `inset` on its own.
pub fn layers_css(layers: &[ShadowLayer]) -> String {
    layers
        .iter()
        .map(ShadowLayer::css)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `rgba(0, 0, 0, o/100)` for an opacity percentage.
pub fn black_with_opacity(opacity: u8) -> String {
    format!("rgba(0, 0, 0, {})", fmt_number(f64::from(opacity) / 100.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMode {
    #[default]
    Single,
    Multi,
}

/// Box shadow with a single editable layer or a stack of up to four.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowTool {
    pub mode: ShadowMode,
    single: ShadowLayer,
    opacity: u8,
    layers: Vec<ShadowLayer>,
}

impl Default for ShadowTool {
    fn default() -> Self {
        Self {
            mode: ShadowMode::Single,
            single: ShadowLayer::default(),
            opacity: 20,
            layers: vec![ShadowLayer::default()],
        }
    }
}

impl ShadowTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(&self) -> &ShadowLayer {
        &self.single
    }

    /// Offsets, radii and inset of the single layer. Its color follows the
    /// opacity control.
    pub fn single_mut(&mut self) -> &mut ShadowLayer {
        &mut self.single
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity.min(100);
        self.single.color = black_with_opacity(self.opacity);
    }

    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut ShadowLayer> {
        self.layers.get_mut(index)
    }

    /// The layers the output is built from in the current mode.
    pub fn active_layers(&self) -> &[ShadowLayer] {
        match self.mode {
            ShadowMode::Single => std::slice::from_ref(&self.single),
            ShadowMode::Multi => &self.layers,
        }
    }

    pub fn can_add_layer(&self) -> bool {
        LAYER_BOUNDS.can_add(self.layers.len())
    }

    pub fn can_remove_layer(&self) -> bool {
        LAYER_BOUNDS.can_remove(self.layers.len(), 1)
    }

    pub fn add_layer(&mut self) -> bool {
        if !self.can_add_layer() {
            return false;
        }
        self.layers.push(ShadowLayer::added());
        true
    }

    pub fn remove_layer(&mut self, index: usize) -> bool {
        if !self.can_remove_layer() || index >= self.layers.len() {
            return false;
        }
        self.layers.remove(index);
        true
    }

    pub fn load_preset(&mut self, preset: &ShadowPreset) {
        log::info!("Loading shadow preset {}", preset.name);
        if preset.multi {
            self.mode = ShadowMode::Multi;
            self.layers = preset.layers.clone();
        } else if let Some(layer) = preset.layers.first() {
            self.mode = ShadowMode::Single;
            self.single = layer.clone();
            if let Some(opacity) = alpha_percent(&layer.color) {
                self.opacity = opacity;
            }
        }
    }
}

impl Generator for ShadowTool {
    fn name(&self) -> &'static str {
        "Box Shadow Tool"
    }

    fn route(&self) -> Route {
        Route::BoxShadow
    }

    fn emit(&self) -> String {
        format!("box-shadow: {};", layers_css(self.active_layers()))
    }

    fn preview(&self) -> StyleDescriptor {
        StyleDescriptor::new().with(StyleProperty::BoxShadow, layers_css(self.active_layers()))
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        if rng.random_bool(0.3) {
            self.mode = ShadowMode::Multi;
            let count = rng.random_range(2..=3);
            self.layers = (0..count).map(|_| ShadowLayer::random(rng).0).collect();
        } else {
            self.mode = ShadowMode::Single;
            let (layer, opacity) = ShadowLayer::random(rng);
            self.single = layer;
            self.opacity = opacity;
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::css::split_top_level;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_layer_output() {
        let mut tool = ShadowTool::new();
        assert_eq!(tool.emit(), "box-shadow: 0px 4px 8px 0px rgba(0, 0, 0, 0.2);");

        tool.single_mut().color = "rgba(0,0,0,0.2)".into();
        assert_eq!(tool.emit(), "box-shadow: 0px 4px 8px 0px rgba(0,0,0,0.2);");

        tool.single_mut().inset = true;
        tool.set_opacity(35);
        assert_eq!(tool.emit(), "box-shadow: inset 0px 4px 8px 0px rgba(0, 0, 0, 0.35);");
    }

    #[test]
    fn test_multi_layer_inset_only_where_set() {
        let mut tool = ShadowTool::new();
        tool.mode = ShadowMode::Multi;
        assert!(tool.add_layer());
        tool.layer_mut(1).unwrap().inset = true;
        let css = tool.emit();
        assert_eq!(
            css,
            "box-shadow: 0px 4px 8px 0px rgba(0, 0, 0, 0.2), inset 0px 2px 4px 0px rgba(0, 0, 0, 0.1);"
        );
    }

    #[test]
    fn test_layer_bounds() {
        let mut tool = ShadowTool::new();
        assert!(!tool.remove_layer(0));
        assert!(tool.add_layer() && tool.add_layer() && tool.add_layer());
        assert!(!tool.add_layer());
        assert_eq!(tool.layers().len(), 4);
        assert!(!tool.remove_layer(9));
        assert!(tool.remove_layer(0));
        assert_eq!(tool.layers().len(), 3);
    }

    #[test]
    fn test_presets_round_trip() {
        let catalog = Catalog::load().unwrap();
        let mut tool = ShadowTool::new();
        for preset in &catalog.shadows {
            tool.load_preset(preset);
            assert_eq!(tool.emit(), preset.css(), "{}", preset.name);
        }
    }

    #[test]
    fn test_presets_emit_reference_css() {
        let catalog = Catalog::load().unwrap();
        let expected = [
            ("Soft", ShadowMode::Single, "box-shadow: 0px 4px 8px 0px rgba(0, 0, 0, 0.2);"),
            ("Strong", ShadowMode::Single, "box-shadow: 0px 10px 25px -5px rgba(0, 0, 0, 0.4);"),
            ("Inner", ShadowMode::Single, "box-shadow: inset 0px 2px 4px 0px rgba(0, 0, 0, 0.15);"),
            (
                "Material Level 1",
                ShadowMode::Multi,
                "box-shadow: 0px 1px 3px 0px rgba(0, 0, 0, 0.12), 0px 1px 2px 0px rgba(0, 0, 0, 0.24);",
            ),
            (
                "Blue Glow",
                ShadowMode::Multi,
                "box-shadow: 0px 0px 10px 0px rgba(59, 130, 246, 0.5), 0px 0px 20px 5px rgba(59, 130, 246, 0.3);",
            ),
            (
                "Embossed",
                ShadowMode::Multi,
                "box-shadow: inset 1px 1px 2px 0px rgba(255, 255, 255, 0.6), inset -1px -1px 2px 0px rgba(0, 0, 0, 0.2);",
            ),
        ];
        let mut tool = ShadowTool::new();
        for (name, mode, css) in expected {
            let preset = catalog.shadows.iter().find(|p| p.name == name).unwrap();
            tool.load_preset(preset);
            assert_eq!(tool.mode, mode, "{name}");
            assert_eq!(tool.emit(), css, "{name}");
        }
    }

    #[test]
    fn test_random_layers_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tool = ShadowTool::new();
        for _ in 0..300 {
            tool.randomize(&mut rng);
            let layers = tool.active_layers();
            if tool.mode == ShadowMode::Multi {
                assert!((2..=3).contains(&layers.len()));
            } else {
                assert!((5..=34).contains(&tool.opacity()));
            }
            for layer in layers {
                assert!((-5.0..=5.0).contains(&layer.horizontal_offset));
                assert!((1.0..=10.0).contains(&layer.vertical_offset));
                assert!((3.0..=15.0).contains(&layer.blur_radius));
                assert!((-2.0..=3.0).contains(&layer.spread_radius));
                let alpha = alpha_percent(&layer.color).unwrap();
                assert!((5..=34).contains(&alpha));
            }
            let value = tool.emit();
            let terms = split_top_level(value.trim_start_matches("box-shadow: ").trim_end_matches(';'), ',');
            assert_eq!(terms.len(), layers.len());
        }
    }
}
