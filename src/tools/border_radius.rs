use rand::{Rng, RngCore};

use crate::catalog::BorderRadiusPreset;
use crate::css::{fmt_number, keyword_enum, random_hex, Keyword, StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::route::Route;

keyword_enum! {
    #[derive(Default)]
    pub enum RadiusUnit {
        #[default]
        Px => "px", "px";
        Percent => "%", "%";
        Em => "em", "em";
        Rem => "rem", "rem";
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// CSS shorthand order.
    pub const ALL: [Corner; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "Top Left",
            Self::TopRight => "Top Right",
            Self::BottomRight => "Bottom Right",
            Self::BottomLeft => "Bottom Left",
        }
    }
}

/// Four corner radii sharing one unit, plus the preview box they apply to.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderRadiusTool {
    /// Indexed in `Corner::ALL` order
    corners: [f32; 4],
    pub unit: RadiusUnit,
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for BorderRadiusTool {
    fn default() -> Self {
        Self {
            corners: [10.0; 4],
            unit: RadiusUnit::Px,
            width: 200.0,
            height: 200.0,
            background: "#3490dc".to_owned(),
        }
    }
}

impl BorderRadiusTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corner(&self, corner: Corner) -> f32 {
        self.corners[corner as usize]
    }

    pub fn set_corner(&mut self, corner: Corner, value: f32) {
        self.corners[corner as usize] = value;
    }

    pub fn set_all(&mut self, value: f32) {
        self.corners = [value; 4];
    }

    pub fn radius(&self) -> String {
        self.corners
            .iter()
            .map(|v| format!("{}{}", fmt_number(*v), self.unit.keyword()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Loads the number and unit of every corner. Unparsable corners keep
    /// their current value; the unit comes from the first corner that has one.
    pub fn load_preset(&mut self, preset: &BorderRadiusPreset) {
        log::info!("Loading shape preset {}", preset.name);
        let mut unit = None;
        for (i, raw) in preset.corners().into_iter().enumerate() {
            match parse_length(raw) {
                Some((value, corner_unit)) => {
                    self.corners[i] = value;
                    unit = unit.or(corner_unit);
                }
                None => log::warn!("Unreadable corner radius in preset {}: {raw}", preset.id),
            }
        }
        self.unit = unit.unwrap_or(RadiusUnit::Px);
    }
}

/// Splits `"12.5rem"` into `12.5` and `rem`. A bare number has no unit.
pub fn parse_length(raw: &str) -> Option<(f32, Option<RadiusUnit>)> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(raw.len());
    let (number, unit) = raw.split_at(split);
    let value = number.parse().ok()?;
    if unit.is_empty() {
        return Some((value, None));
    }
    Some((value, Some(RadiusUnit::from_keyword(unit)?)))
}

impl Generator for BorderRadiusTool {
    fn name(&self) -> &'static str {
        "Border Radius Tool"
    }

    fn route(&self) -> Route {
        Route::BorderRadius
    }

    fn emit(&self) -> String {
        format!("border-radius: {};", self.radius())
    }

    fn preview(&self) -> StyleDescriptor {
        // The box follows percentages along, every other unit sizes it in px.
        let box_unit = if self.unit == RadiusUnit::Percent { "%" } else { "px" };
        StyleDescriptor::new()
            .with(StyleProperty::Width, format!("{}{box_unit}", fmt_number(self.width)))
            .with(StyleProperty::Height, format!("{}{box_unit}", fmt_number(self.height)))
            .with(StyleProperty::BackgroundColor, self.background.clone())
            .with(StyleProperty::BorderRadius, self.radius())
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        for corner in &mut self.corners {
            *corner = rng.random_range(0..50) as f32;
        }
        self.background = random_hex(rng);
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
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_px() {
        assert_eq!(BorderRadiusTool::new().emit(), "border-radius: 10px 10px 10px 10px;");
    }

    #[test]
    fn test_corners_and_units() {
        let mut tool = BorderRadiusTool::new();
        tool.set_corner(Corner::TopRight, 2.5);
        tool.set_corner(Corner::BottomLeft, 0.0);
        tool.unit = RadiusUnit::Rem;
        assert_eq!(tool.emit(), "border-radius: 10rem 2.5rem 10rem 0rem;");
        tool.set_all(50.0);
        tool.unit = RadiusUnit::Percent;
        assert_eq!(tool.emit(), "border-radius: 50% 50% 50% 50%;");
        assert_eq!(tool.preview().get(StyleProperty::Width), Some("200%"));
    }

    #[test]
    fn test_fractional_radius_is_not_rounded() {
        let mut tool = BorderRadiusTool::new();
        tool.unit = RadiusUnit::Rem;
        tool.set_all(0.125);
        assert_eq!(tool.emit(), "border-radius: 0.125rem 0.125rem 0.125rem 0.125rem;");
        tool.set_corner(Corner::TopLeft, 2.375);
        assert!(tool.emit().starts_with("border-radius: 2.375rem "));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("9999px"), Some((9999.0, Some(RadiusUnit::Px))));
        assert_eq!(parse_length("50%"), Some((50.0, Some(RadiusUnit::Percent))));
        assert_eq!(parse_length("1.5em"), Some((1.5, Some(RadiusUnit::Em))));
        assert_eq!(parse_length("0"), Some((0.0, None)));
        assert_eq!(parse_length("10vh"), None);
        assert_eq!(parse_length("px"), None);
    }

    #[test]
    fn test_presets_round_trip() {
        let catalog = Catalog::load().unwrap();
        let mut tool = BorderRadiusTool::new();
        for preset in &catalog.border_radii {
            tool.load_preset(preset);
            assert_eq!(tool.emit(), preset.css(), "{}", preset.name);
        }
    }

    #[test]
    fn test_random_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut tool = BorderRadiusTool::new();
        for _ in 0..200 {
            tool.randomize(&mut rng);
            assert!(Corner::ALL
                .iter()
                .all(|c| (0.0..50.0).contains(&tool.corner(*c))));
            assert!(is_hex_color(&tool.background));
        }
    }
}
