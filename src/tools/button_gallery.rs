use std::collections::HashSet;

use crate::catalog::{filter_by_category, ButtonCategory, ButtonSpec, ALL_CATEGORIES, BUTTON_CATEGORIES};
use crate::css::{parse_declarations, StyleDescriptor};

/// Browsing state of the button gallery. The buttons themselves live in the
/// catalog and are never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGallery {
    selected_category: String,
    /// Buttons currently showing their loading state
    loading: HashSet<String>,
}

impl Default for ButtonGallery {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_owned(),
            loading: HashSet::new(),
        }
    }
}

impl ButtonGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &'static [ButtonCategory] {
        BUTTON_CATEGORIES
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn select_category(&mut self, id: &str) {
        if BUTTON_CATEGORIES.iter().any(|c| c.id == id) {
            self.selected_category = id.to_owned();
        }
    }

    pub fn visible<'a>(&self, buttons: &'a [ButtonSpec]) -> Vec<&'a ButtonSpec> {
        filter_by_category(buttons, &self.selected_category)
    }

    /// Flips the loading state of buttons that have one. Returns whether
    /// the button is now loading.
    pub fn toggle_loading(&mut self, button: &ButtonSpec) -> bool {
        if !button.has_loading_state() {
            return false;
        }
        if self.loading.remove(&button.id) {
            false
        } else {
            self.loading.insert(button.id.clone());
            true
        }
    }

    pub fn is_loading(&self, button: &ButtonSpec) -> bool {
        self.loading.contains(&button.id)
    }

    /// The base style, overlaid with the `.loading` declarations while the
    /// button is loading.
    pub fn preview_style(&self, button: &ButtonSpec) -> StyleDescriptor {
        let mut declarations = parse_declarations(&button.css);
        if self.is_loading(button) {
            if let Some(loading) = &button.css_loading {
                declarations.extend(parse_declarations(loading));
            }
        }
        StyleDescriptor::from_declarations(&declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::load().unwrap();
        let mut gallery = ButtonGallery::new();
        assert_eq!(gallery.visible(&catalog.buttons).len(), catalog.buttons.len());

        gallery.select_category("fancy");
        let fancy = gallery.visible(&catalog.buttons);
        assert!(!fancy.is_empty());
        assert!(fancy.iter().all(|b| b.category == "fancy"));

        gallery.select_category("unknown");
        assert_eq!(gallery.selected_category(), "fancy");
    }

    #[test]
    fn test_every_category_has_buttons() {
        let catalog = Catalog::load().unwrap();
        let mut gallery = ButtonGallery::new();
        for category in gallery.categories() {
            gallery.select_category(category.id);
            assert!(!gallery.visible(&catalog.buttons).is_empty(), "{}", category.id);
        }
    }

    #[test]
    fn test_loading_toggle() {
        let catalog = Catalog::load().unwrap();
        let mut gallery = ButtonGallery::new();
        let spinner = catalog
            .buttons
            .iter()
            .find(|b| b.has_loading_state())
            .expect("catalog has a loading button");
        let plain = catalog.buttons.iter().find(|b| !b.has_loading_state()).unwrap();

        assert!(!gallery.toggle_loading(plain));
        assert!(gallery.toggle_loading(spinner));
        assert!(gallery.is_loading(spinner));
        assert_ne!(gallery.preview_style(spinner), spinner.preview_style());
        assert!(!gallery.toggle_loading(spinner));
        assert_eq!(gallery.preview_style(spinner), spinner.preview_style());
    }
}
