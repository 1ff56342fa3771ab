use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::catalog::GradientPreset;
use crate::css::{
    random_hex, sorted_stops, stops_css, ColorStop, GradientDirection, GradientKind, Keyword,
    StopField, StyleDescriptor, StyleProperty, STOP_BOUNDS,
};
use crate::generator::Generator;
use crate::id_generator::next_id;
use crate::route::Route;

/// Color of a freshly added stop.
pub const NEW_STOP_COLOR: &str = "#6366f1";

/// Linear or radial background gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTool {
    pub kind: GradientKind,
    pub direction: GradientDirection,
    stops: Vec<ColorStop>,
}

impl Default for GradientTool {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            direction: GradientDirection::ToRight,
            stops: vec![
                ColorStop::new(1, "#3490dc", 0.0),
                ColorStop::new(2, "#6574cd", 100.0),
            ],
        }
    }
}

impl GradientTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops in the order they were added.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn can_add_stop(&self) -> bool {
        STOP_BOUNDS.can_add(self.stops.len())
    }

    pub fn can_remove_stop(&self) -> bool {
        STOP_BOUNDS.can_remove(self.stops.len(), 1)
    }

    /// Appends a stop 20% past the furthest one. Returns false at five stops.
    pub fn add_stop(&mut self) -> bool {
        if !self.can_add_stop() {
            return false;
        }
        let last = sorted_stops(&self.stops)
            .last()
            .map_or(0.0, |stop| stop.position);
        let id = next_id(self.stops.iter().map(|s| s.id));
        self.stops
            .push(ColorStop::new(id, NEW_STOP_COLOR, (last + 20.0).min(100.0)));
        log::debug!("Added gradient stop {id}");
        true
    }

    /// Returns false when the stop is unknown or only two remain.
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

    pub fn load_preset(&mut self, preset: &GradientPreset) {
        log::info!("Loading gradient preset {}", preset.name);
        self.kind = preset.kind;
        self.direction = preset.direction;
        self.stops = crate::css::evenly_spaced_stops(&preset.colors);
    }

    /// The `background` value shared by the code and the preview.
    pub fn background(&self) -> String {
        let stops = stops_css(&self.stops);
        match self.kind {
            GradientKind::Linear => {
                format!("linear-gradient({}, {stops})", self.direction.keyword())
            }
            GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
        }
    }
}

impl Generator for GradientTool {
    fn name(&self) -> &'static str {
        "Gradient Generator"
    }

    fn route(&self) -> Route {
        Route::Gradient
    }

    fn emit(&self) -> String {
        format!("background: {};", self.background())
    }

    fn preview(&self) -> StyleDescriptor {
        StyleDescriptor::new().with(StyleProperty::Background, self.background())
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        let count = rng.random_range(2..=3);
        let colors: Vec<String> = (0..count).map(|_| random_hex(rng)).collect();
        self.kind = if rng.random_bool(0.2) {
            GradientKind::Radial
        } else {
            GradientKind::Linear
        };
        self.direction = GradientDirection::ALL
            .choose(rng)
            .copied()
            .unwrap_or_default();
        self.stops = crate::css::evenly_spaced_stops(&colors);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::css::is_hex_color;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_output() {
        assert_eq!(
            GradientTool::new().emit(),
            "background: linear-gradient(to right, #3490dc 0%, #6574cd 100%);"
        );
    }

    #[test]
    fn test_radial_ignores_direction() {
        let mut tool = GradientTool::new();
        tool.kind = GradientKind::Radial;
        tool.direction = GradientDirection::ToTopLeft;
        assert_eq!(
            tool.emit(),
            "background: radial-gradient(circle, #3490dc 0%, #6574cd 100%);"
        );
    }

    #[test]
    fn test_stop_bounds_and_ids() {
        let mut tool = GradientTool::new();
        assert!(tool.add_stop());
        assert!(tool.add_stop());
        assert!(tool.add_stop());
        assert!(!tool.add_stop());
        assert_eq!(tool.stops().len(), 5);
        let ids: Vec<u32> = tool.stops().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(tool.stops().iter().skip(2).all(|s| s.position == 100.0));

        assert!(tool.remove_stop(3));
        assert!(!tool.remove_stop(3));
        assert!(tool.remove_stop(1));
        assert!(tool.remove_stop(2));
        assert!(!tool.remove_stop(4));
        assert_eq!(tool.stops().len(), 2);
        assert!(tool.add_stop());
        assert_eq!(tool.stops().last().unwrap().id, 6);
    }

    #[test]
    fn test_color_edit_keeps_output_sorted() {
        let mut tool = GradientTool::new();
        tool.update_stop(1, StopField::Position(90.0));
        tool.update_stop(2, StopField::Color("#000000".into()));
        assert_eq!(
            tool.emit(),
            "background: linear-gradient(to right, #3490dc 90%, #000000 100%);"
        );
        assert_eq!(tool.stops()[0].id, 1);
    }

    #[test]
    fn test_presets_round_trip() {
        let catalog = Catalog::load().unwrap();
        let mut tool = GradientTool::new();
        for preset in &catalog.gradients {
            tool.load_preset(preset);
            assert_eq!(tool.emit(), preset.css());
        }
    }

    #[test]
    fn test_presets_emit_reference_css() {
        let catalog = Catalog::load().unwrap();
        let expected = [
            ("Ocean Blue", "background: linear-gradient(to right, #2e3192 0%, #1bffff 100%);"),
            ("Northern Lights", "background: linear-gradient(to bottom right, #43cea2 0%, #185a9d 100%);"),
            ("Royal Night", "background: linear-gradient(to top left, #141e30 0%, #243b55 50%, #0f2027 100%);"),
            (
                "Rainbow",
                "background: linear-gradient(to right, #ff0000 0%, #ffa500 25%, #ffff00 50%, #008000 75%, #0000ff 100%);",
            ),
            ("Sun Glow", "background: radial-gradient(circle, #fff200 0%, #ff7e00 100%);"),
            ("Blue Orb", "background: radial-gradient(circle, #89f7fe 0%, #66a6ff 50%, #3b5998 100%);"),
        ];
        let mut tool = GradientTool::new();
        for (name, css) in expected {
            let preset = catalog.gradients.iter().find(|p| p.name == name).unwrap();
            tool.load_preset(preset);
            assert_eq!(tool.emit(), css, "{name}");
        }
    }

    #[test]
    fn test_random_state_is_valid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tool = GradientTool::new();
        for _ in 0..200 {
            tool.randomize(&mut rng);
            assert!((2..=3).contains(&tool.stops().len()));
            assert!(tool.stops().iter().all(|s| is_hex_color(&s.color)));
            assert_eq!(tool.stops().first().unwrap().position, 0.0);
            assert_eq!(tool.stops().last().unwrap().position, 100.0);
        }
    }
}
