use crate::catalog::{Shade, TailwindPalette};

/// Which swatch was copied last, so the page can mark it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TailwindColors {
    copied: Option<(String, String)>,
}

impl TailwindColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the swatch as copied and returns the text for the clipboard.
    pub fn copy(&mut self, family: &str, shade: &Shade) -> String {
        self.copied = Some((family.to_owned(), shade.shade.clone()));
        shade.hex.clone()
    }

    pub fn is_copied(&self, family: &str, shade: &Shade) -> bool {
        self.copied
            .as_ref()
            .is_some_and(|(f, s)| f == family && *s == shade.shade)
    }

    pub fn clear_copied(&mut self) {
        self.copied = None;
    }

    /// `bg-blue-500` style class for a swatch.
    pub fn class_name(family: &str, shade: &Shade) -> String {
        format!("bg-{family}-{}", shade.shade)
    }

    pub fn shade_count(palette: &TailwindPalette) -> usize {
        palette.families.iter().map(|f| f.shades.len()).sum()
    }
}
