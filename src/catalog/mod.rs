//! Read-only tables loaded once at start-up: gradient, shadow and shape
//! presets, the button gallery and the Tailwind palette.
//!
//! The tables ship inside the binary as JSON. `Catalog::load` parses them
//! into owned values that are shared behind an `Arc` and never mutated;
//! loading a preset into a tool always clones out of the catalog.

mod buttons;
mod presets;
mod tailwind;

pub use buttons::{ButtonCategory, ButtonSpec, BUTTON_CATEGORIES};
pub use presets::{BorderRadiusPreset, GradientPreset, ShadowPreset};
pub use tailwind::{ColorFamily, Shade, TailwindPalette};

use serde::de::DeserializeOwned;

use crate::error::CatalogError;

const GRADIENT_PRESETS: &str = include_str!("../../assets/gradient_presets.json");
const SHADOW_PRESETS: &str = include_str!("../../assets/shadow_presets.json");
const BORDER_RADIUS_PRESETS: &str = include_str!("../../assets/border_radius_presets.json");
const BUTTONS: &str = include_str!("../../assets/buttons.json");
const TAILWIND_COLORS: &str = include_str!("../../assets/tailwind_colors.json");

/// The category every filter starts on.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone)]
pub struct Catalog {
    pub gradients: Vec<GradientPreset>,
    pub shadows: Vec<ShadowPreset>,
    pub border_radii: Vec<BorderRadiusPreset>,
    pub buttons: Vec<ButtonSpec>,
    pub tailwind: TailwindPalette,
}

impl Catalog {
    /// Parses the embedded tables.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self {
            gradients: parse_table("gradient", GRADIENT_PRESETS)?,
            shadows: parse_table("shadow", SHADOW_PRESETS)?,
            border_radii: parse_table("border radius", BORDER_RADIUS_PRESETS)?,
            buttons: parse_table("button", BUTTONS)?,
            tailwind: TailwindPalette {
                families: parse_table("tailwind", TAILWIND_COLORS)?,
            },
        };
        log::info!(
            "Loaded catalog: {} gradients, {} shadows, {} shapes, {} buttons, {} color families",
            catalog.gradients.len(),
            catalog.shadows.len(),
            catalog.border_radii.len(),
            catalog.buttons.len(),
            catalog.tailwind.families.len()
        );
        Ok(catalog)
    }
}

fn parse_table<T: DeserializeOwned>(table: &'static str, json: &str) -> Result<Vec<T>, CatalogError> {
    let rows: Vec<T> = serde_json::from_str(json).map_err(|source| CatalogError::Parse { table, source })?;
    if rows.is_empty() {
        return Err(CatalogError::Empty(table));
    }
    Ok(rows)
}

/// Catalog entries that belong to a named category.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// `"all"` followed by each distinct category in first-seen order.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_owned()];
    for item in items {
        if !categories.iter().any(|c| c == item.category()) {
            categories.push(item.category().to_owned());
        }
    }
    categories
}

/// A view over the items in `selected`; `"all"` keeps everything.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selected == ALL_CATEGORIES || item.category() == selected)
        .collect()
}
