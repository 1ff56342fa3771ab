use rand::{Rng, RngCore};

use crate::css::{px, CssBlock, StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::route::Route;

/// A frosted glass look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassPreset {
    pub name: &'static str,
    pub background: &'static str,
    pub backdrop_blur: f32,
    pub border_radius: f32,
    pub border: &'static str,
    pub box_shadow: &'static str,
}

pub const GLASS_PRESETS: &[GlassPreset] = &[
    GlassPreset {
        name: "Classic Glass",
        background: "rgba(255, 255, 255, 0.25)",
        backdrop_blur: 10.0,
        border_radius: 16.0,
        border: "1px solid rgba(255, 255, 255, 0.18)",
        box_shadow: "0 8px 32px 0 rgba(31, 38, 135, 0.37)",
    },
    GlassPreset {
        name: "Dark Glass",
        background: "rgba(0, 0, 0, 0.25)",
        backdrop_blur: 15.0,
        border_radius: 20.0,
        border: "1px solid rgba(255, 255, 255, 0.1)",
        box_shadow: "0 8px 32px 0 rgba(0, 0, 0, 0.3)",
    },
    GlassPreset {
        name: "Subtle Glass",
        background: "rgba(255, 255, 255, 0.1)",
        backdrop_blur: 5.0,
        border_radius: 12.0,
        border: "1px solid rgba(255, 255, 255, 0.2)",
        box_shadow: "0 4px 16px 0 rgba(31, 38, 135, 0.2)",
    },
    GlassPreset {
        name: "Strong Glass",
        background: "rgba(255, 255, 255, 0.4)",
        backdrop_blur: 20.0,
        border_radius: 24.0,
        border: "2px solid rgba(255, 255, 255, 0.3)",
        box_shadow: "0 12px 40px 0 rgba(31, 38, 135, 0.5)",
    },
    GlassPreset {
        name: "Colored Glass",
        background: "rgba(99, 102, 241, 0.2)",
        backdrop_blur: 12.0,
        border_radius: 18.0,
        border: "1px solid rgba(99, 102, 241, 0.3)",
        box_shadow: "0 8px 32px 0 rgba(99, 102, 241, 0.3)",
    },
];

/// What sits behind the glass in the preview. Never part of the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub name: &'static str,
    pub value: &'static str,
}

impl Backdrop {
    /// The address inside a `url('...')` background, if this is one.
    pub fn image_url(&self) -> Option<&'static str> {
        let value = self.value;
        let start = value.find("url(")? + "url(".len();
        let end = start + value[start..].find(')')?;
        let url = value[start..end].trim().trim_matches(|c: char| c == '\'' || c == '"');
        (!url.is_empty()).then_some(url)
    }
}

/// Painted under an image backdrop while it loads, or if it never does.
pub const IMAGE_PLACEHOLDER: &str = "linear-gradient(135deg, #134e5e 0%, #71b280 100%)";

pub const BACKDROPS: &[Backdrop] = &[
    Backdrop {
        name: "Nature Image",
        value: "url('https://images.unsplash.com/photo-1575550959106-5a7defe28b56?q=80&w=2670&auto=format&fit=crop') center/cover",
    },
    Backdrop { name: "Purple Gradient", value: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)" },
    Backdrop { name: "Blue Gradient", value: "linear-gradient(135deg, #667eea 0%, #7db9e8 100%)" },
    Backdrop { name: "Pink Gradient", value: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)" },
    Backdrop { name: "Green Gradient", value: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)" },
    Backdrop { name: "Orange Gradient", value: "linear-gradient(135deg, #fa709a 0%, #fee140 100%)" },
    Backdrop { name: "Dark", value: "#1a1a1a" },
    Backdrop { name: "Light", value: "#f0f0f0" },
];

fn glass_block(
    background: &str,
    blur: f32,
    radius: f32,
    border: &str,
    shadow: &str,
) -> CssBlock {
    let blur = format!("blur({})", px(blur));
    CssBlock::new()
        .declaration("background", background)
        .declaration("backdrop-filter", blur.clone())
        .declaration("-webkit-backdrop-filter", blur)
        .declaration("border-radius", px(radius))
        .declaration("border", border)
        .declaration("box-shadow", shadow)
}

impl GlassPreset {
    pub fn css(&self) -> String {
        glass_block(
            self.background,
            self.backdrop_blur,
            self.border_radius,
            self.border,
            self.box_shadow,
        )
        .render()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlassmorphismTool {
    pub background: String,
    pub backdrop_blur: f32,
    pub border_radius: f32,
    pub border: String,
    pub box_shadow: String,
    /// Index into `BACKDROPS`
    pub backdrop: usize,
}

impl Default for GlassmorphismTool {
    fn default() -> Self {
        Self {
            background: "rgba(255, 255, 255, 0.25)".to_owned(),
            backdrop_blur: 5.0,
            border_radius: 16.0,
            border: "1px solid rgba(255, 255, 255, 0.18)".to_owned(),
            box_shadow: "0 8px 32px 0 rgba(31, 38, 135, 0.37)".to_owned(),
            backdrop: 0,
        }
    }
}

impl GlassmorphismTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backdrop(&self) -> &Backdrop {
        BACKDROPS.get(self.backdrop).unwrap_or(&BACKDROPS[0])
    }

    pub fn load_preset(&mut self, preset: &GlassPreset) {
        log::info!("Applying glass preset {}", preset.name);
        self.background = preset.background.to_owned();
        self.backdrop_blur = preset.backdrop_blur;
        self.border_radius = preset.border_radius;
        self.border = preset.border.to_owned();
        self.box_shadow = preset.box_shadow.to_owned();
    }

    fn block(&self) -> CssBlock {
        glass_block(
            &self.background,
            self.backdrop_blur,
            self.border_radius,
            &self.border,
            &self.box_shadow,
        )
    }
}

impl Generator for GlassmorphismTool {
    fn name(&self) -> &'static str {
        "Glassmorphism Generator"
    }

    fn route(&self) -> Route {
        Route::Glassmorphism
    }

    fn emit(&self) -> String {
        self.block().render()
    }

    fn preview(&self) -> StyleDescriptor {
        let blur = format!("blur({})", px(self.backdrop_blur));
        StyleDescriptor::new()
            .with(StyleProperty::Background, self.background.clone())
            .with(StyleProperty::BackdropFilter, blur.clone())
            .with(StyleProperty::WebkitBackdropFilter, blur)
            .with(StyleProperty::BorderRadius, px(self.border_radius))
            .with(StyleProperty::Border, self.border.clone())
            .with(StyleProperty::BoxShadow, self.box_shadow.clone())
    }

    /// Keeps the chosen backdrop.
    fn randomize(&mut self, rng: &mut dyn RngCore) {
        let opacity = rng.random_range(0.1..0.4_f32);
        let tint = if rng.random_bool(0.5) { "255, 255, 255" } else { "0, 0, 0" };
        let border_opacity = rng.random_range(0.1..0.3_f32);
        self.background = format!("rgba({tint}, {opacity:.2})");
        self.backdrop_blur = rng.random_range(5..25) as f32;
        self.border_radius = rng.random_range(8..28) as f32;
        self.border = format!("1px solid rgba(255, 255, 255, {border_opacity:.2})");

        let offset = rng.random_range(4..20);
        let blur = rng.random_range(16..56);
        let alpha = rng.random_range(0.1..0.5_f32);
        self.box_shadow = format!("0 {offset}px {blur}px 0 rgba(31, 38, 135, {alpha:.2})");
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::{alpha_percent, parse_declarations};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_classic_glass_round_trip() {
        let mut tool = GlassmorphismTool::new();
        tool.load_preset(&GLASS_PRESETS[0]);
        assert_eq!(
            tool.emit(),
            "background: rgba(255, 255, 255, 0.25);\n\
             backdrop-filter: blur(10px);\n\
             -webkit-backdrop-filter: blur(10px);\n\
             border-radius: 16px;\n\
             border: 1px solid rgba(255, 255, 255, 0.18);\n\
             box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37);"
        );
        for preset in GLASS_PRESETS {
            tool.load_preset(preset);
            assert_eq!(tool.emit(), preset.css());
        }
    }

    #[test]
    fn test_default_backdrop_is_the_photo() {
        let tool = GlassmorphismTool::new();
        assert_eq!(tool.backdrop().name, "Nature Image");
        let url = tool.backdrop().image_url().unwrap();
        assert!(url.starts_with("https://images.unsplash.com/"));
        assert!(!url.contains('\''));
        assert!(BACKDROPS[1..].iter().all(|b| b.image_url().is_none()));
    }

    #[test]
    fn test_random_glass() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut tool = GlassmorphismTool::new();
        tool.backdrop = 4;
        for _ in 0..300 {
            tool.randomize(&mut rng);
            let alpha = alpha_percent(&tool.background).unwrap();
            assert!((10..=40).contains(&alpha));
            assert!((5.0..25.0).contains(&tool.backdrop_blur));
            assert!((8.0..28.0).contains(&tool.border_radius));
            assert!(tool.box_shadow.starts_with("0 "));
            let decls = parse_declarations(&tool.emit());
            assert_eq!(decls.len(), 6);
            assert!(tool.preview().mismatches(&decls).is_empty());
        }
        assert_eq!(tool.backdrop().name, "Green Gradient");
    }
}
