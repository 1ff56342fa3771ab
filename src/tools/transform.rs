use rand::{Rng, RngCore};

use crate::css::{fmt_number, px, random_hex, StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::route::Route;

/// The transform functions, each at identity by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Degrees
    pub rotate: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Degrees
    pub skew_x: f32,
    /// Degrees
    pub skew_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotate: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew_x: 0.0,
            skew_y: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl Transform {
    /// One token per non-identity function in the order rotate, scale,
    /// skewX, skewY, translateX, translateY.
    pub fn functions(&self) -> Vec<String> {
        let mut functions = Vec::new();
        if self.rotate != 0.0 {
            functions.push(format!("rotate({}deg)", fmt_number(self.rotate)));
        }
        if self.scale_x != 1.0 || self.scale_y != 1.0 {
            functions.push(format!(
                "scale({}, {})",
                fmt_number(self.scale_x),
                fmt_number(self.scale_y)
            ));
        }
        if self.skew_x != 0.0 {
            functions.push(format!("skewX({}deg)", fmt_number(self.skew_x)));
        }
        if self.skew_y != 0.0 {
            functions.push(format!("skewY({}deg)", fmt_number(self.skew_y)));
        }
        if self.translate_x != 0.0 {
            functions.push(format!("translateX({})", px(self.translate_x)));
        }
        if self.translate_y != 0.0 {
            functions.push(format!("translateY({})", px(self.translate_y)));
        }
        functions
    }

    /// The `transform` value; `none` when every function is at identity.
    pub fn value(&self) -> String {
        let functions = self.functions();
        if functions.is_empty() {
            "none".to_owned()
        } else {
            functions.join(" ")
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformTool {
    pub transform: Transform,
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub border_radius: f32,
}

impl Default for TransformTool {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            width: 200.0,
            height: 200.0,
            background: "#3490dc".to_owned(),
            border_radius: 0.0,
        }
    }
}

impl TransformTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts every function back to identity, leaving the element alone.
    pub fn reset_transforms(&mut self) {
        self.transform = Transform::default();
    }
}

/// A scale factor in `[0.5, 2)` with two decimals.
fn random_scale(rng: &mut dyn RngCore) -> f32 {
    let scale = rng.random_range(0.0..2.0_f32).max(0.5);
    (scale * 100.0).round() / 100.0
}

impl Generator for TransformTool {
    fn name(&self) -> &'static str {
        "CSS Transform"
    }

    fn route(&self) -> Route {
        Route::Transform
    }

    fn emit(&self) -> String {
        format!("transform: {};", self.transform.value())
    }

    fn preview(&self) -> StyleDescriptor {
        StyleDescriptor::new()
            .with(StyleProperty::Width, px(self.width))
            .with(StyleProperty::Height, px(self.height))
            .with(StyleProperty::BackgroundColor, self.background.clone())
            .with(StyleProperty::BorderRadius, px(self.border_radius))
            .with(StyleProperty::Transform, self.transform.value())
            .with(StyleProperty::Transition, "transform 0.3s ease")
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        self.transform = Transform {
            rotate: rng.random_range(0..360) as f32,
            scale_x: random_scale(rng),
            scale_y: random_scale(rng),
            skew_x: rng.random_range(-15..15) as f32,
            skew_y: rng.random_range(-15..15) as f32,
            translate_x: rng.random_range(-50..50) as f32,
            translate_y: rng.random_range(-50..50) as f32,
        };
        self.background = random_hex(rng);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::is_hex_color;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity_is_none() {
        assert_eq!(TransformTool::new().emit(), "transform: none;");
    }

    #[test]
    fn test_order_and_omission() {
        let mut tool = TransformTool::new();
        tool.transform.translate_y = -20.0;
        tool.transform.rotate = 45.0;
        tool.transform.scale_y = 1.5;
        assert_eq!(
            tool.emit(),
            "transform: rotate(45deg) scale(1, 1.5) translateY(-20px);"
        );
        tool.transform.skew_x = 10.0;
        tool.transform.skew_y = -5.0;
        tool.transform.translate_x = 3.0;
        assert_eq!(
            tool.emit(),
            "transform: rotate(45deg) scale(1, 1.5) skewX(10deg) skewY(-5deg) translateX(3px) translateY(-20px);"
        );
    }

    #[test]
    fn test_small_values_keep_their_digits() {
        let mut tool = TransformTool::new();
        tool.transform.rotate = 0.004;
        tool.transform.scale_x = 1.005;
        tool.transform.translate_x = 0.125;
        assert_eq!(
            tool.emit(),
            "transform: rotate(0.004deg) scale(1.005, 1) translateX(0.125px);"
        );
    }

    #[test]
    fn test_out_of_slider_range_passes_through() {
        let mut tool = TransformTool::new();
        tool.transform.rotate = 270.0;
        assert_eq!(tool.emit(), "transform: rotate(270deg);");
    }

    #[test]
    fn test_reset_transforms_keeps_element() {
        let mut tool = TransformTool::new();
        tool.background = "#000000".into();
        tool.transform.rotate = 10.0;
        tool.reset_transforms();
        assert_eq!(tool.emit(), "transform: none;");
        assert_eq!(tool.background, "#000000");
    }

    #[test]
    fn test_random_transform_in_range() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut tool = TransformTool::new();
        for _ in 0..300 {
            tool.randomize(&mut rng);
            let t = tool.transform;
            assert!((0.0..360.0).contains(&t.rotate));
            assert!((0.5..=2.0).contains(&t.scale_x) && (0.5..=2.0).contains(&t.scale_y));
            assert_eq!(t.scale_x, (t.scale_x * 100.0).round() / 100.0);
            assert!((-15.0..15.0).contains(&t.skew_x));
            assert!((-50.0..50.0).contains(&t.translate_y));
            assert!(is_hex_color(&tool.background));
            assert_eq!(tool.preview().get(StyleProperty::Transform), Some(t.value().as_str()));
        }
    }
}
