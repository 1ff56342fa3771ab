use serde::{Deserialize, Serialize};

use crate::css::contrast_color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shade {
    /// `"50"` through `"950"`
    pub shade: String,
    pub hex: String,
}

impl Shade {
    /// Black or white, whichever reads better on this shade.
    pub fn text_color(&self) -> &'static str {
        contrast_color(&self.hex)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorFamily {
    pub name: String,
    pub shades: Vec<Shade>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TailwindPalette {
    pub families: Vec<ColorFamily>,
}

impl TailwindPalette {
    pub fn family(&self, name: &str) -> Option<&ColorFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Looks up a hex value such as `("blue", "500")`.
    pub fn hex(&self, family: &str, shade: &str) -> Option<&str> {
        self.family(family)?
            .shades
            .iter()
            .find(|s| s.shade == shade)
            .map(|s| s.hex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::css::is_hex_color;

    #[test]
    fn test_palette_lookup() {
        let palette = Catalog::load().unwrap().tailwind;
        assert_eq!(palette.hex("blue", "500"), Some("#3b82f6"));
        assert_eq!(palette.hex("blue", "1000"), None);
        assert!(palette
            .families
            .iter()
            .flat_map(|f| &f.shades)
            .all(|s| is_hex_color(&s.hex)));
    }

    #[test]
    fn test_text_color_contrast() {
        let palette = Catalog::load().unwrap().tailwind;
        let slate = palette.family("slate").unwrap();
        assert_eq!(slate.shades.first().unwrap().text_color(), "#000000");
        assert_eq!(slate.shades.last().unwrap().text_color(), "#ffffff");
    }
}
