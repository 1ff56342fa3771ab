use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::collection::Bounds;
use crate::css::{fmt_number, keyword_enum, px, CssBlock, Keyword, StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::id_generator::next_id;
use crate::route::Route;

pub const ITEM_BOUNDS: Bounds = Bounds::new(1, 8);

/// Colors handed out to new items.
pub const ITEM_PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

keyword_enum! {
    #[derive(Default)]
    pub enum FlexDirection {
        #[default]
        Row => "row", "Row";
        RowReverse => "row-reverse", "Row Reverse";
        Column => "column", "Column";
        ColumnReverse => "column-reverse", "Column Reverse";
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum JustifyContent {
        #[default]
        FlexStart => "flex-start", "Flex Start";
        FlexEnd => "flex-end", "Flex End";
        Center => "center", "Center";
        SpaceBetween => "space-between", "Space Between";
        SpaceAround => "space-around", "Space Around";
        SpaceEvenly => "space-evenly", "Space Evenly";
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum AlignItems {
        FlexStart => "flex-start", "Flex Start";
        FlexEnd => "flex-end", "Flex End";
        Center => "center", "Center";
        #[default]
        Stretch => "stretch", "Stretch";
        Baseline => "baseline", "Baseline";
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum FlexWrap {
        #[default]
        NoWrap => "nowrap", "No Wrap";
        Wrap => "wrap", "Wrap";
        WrapReverse => "wrap-reverse", "Wrap Reverse";
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum AlignSelf {
        #[default]
        Auto => "auto", "Auto";
        FlexStart => "flex-start", "Flex Start";
        FlexEnd => "flex-end", "Flex End";
        Center => "center", "Center";
        Stretch => "stretch", "Stretch";
        Baseline => "baseline", "Baseline";
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlexItem {
    pub id: u32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub align_self: AlignSelf,
    pub flex_grow: i32,
    pub flex_shrink: i32,
    pub order: i32,
}

impl FlexItem {
    pub fn new(id: u32, width: f32, height: f32, color: &str) -> Self {
        Self {
            id,
            width,
            height,
            color: color.to_owned(),
            align_self: AlignSelf::Auto,
            flex_grow: 0,
            flex_shrink: 1,
            order: 0,
        }
    }

    /// Size and color always, the flex properties only when they differ from
    /// their CSS defaults.
    pub fn block(&self) -> CssBlock {
        let mut block = CssBlock::new()
            .comment(format!("Item {}", self.id))
            .declaration("width", px(self.width))
            .declaration("height", px(self.height))
            .declaration("background-color", self.color.clone());
        if self.align_self != AlignSelf::Auto {
            block.push("align-self", self.align_self.keyword());
        }
        if self.flex_grow != 0 {
            block.push("flex-grow", self.flex_grow.to_string());
        }
        if self.flex_shrink != 1 {
            block.push("flex-shrink", self.flex_shrink.to_string());
        }
        if self.order != 0 {
            block.push("order", self.order.to_string());
        }
        block
    }

    pub fn preview(&self) -> StyleDescriptor {
        StyleDescriptor::new()
            .with(StyleProperty::Width, px(self.width))
            .with(StyleProperty::Height, px(self.height))
            .with(StyleProperty::BackgroundColor, self.color.clone())
            .with(StyleProperty::AlignSelf, self.align_self.keyword())
            .with(StyleProperty::FlexGrow, self.flex_grow.to_string())
            .with(StyleProperty::FlexShrink, self.flex_shrink.to_string())
            .with(StyleProperty::Order, self.order.to_string())
    }
}

/// Flex container with up to eight items and a (multi-)selection over them.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexboxTool {
    pub direction: FlexDirection,
    pub justify: JustifyContent,
    pub align: AlignItems,
    pub wrap: FlexWrap,
    pub gap: f32,
    pub background: String,
    pub height: f32,
    pub multi_select: bool,
    items: Vec<FlexItem>,
    selected: Vec<u32>,
}

impl Default for FlexboxTool {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            justify: JustifyContent::FlexStart,
            align: AlignItems::Stretch,
            wrap: FlexWrap::NoWrap,
            gap: 10.0,
            background: "#f3f4f6".to_owned(),
            height: 400.0,
            multi_select: false,
            items: vec![
                FlexItem::new(1, 100.0, 100.0, "#3b82f6"),
                FlexItem::new(2, 100.0, 150.0, "#10b981"),
                FlexItem::new(3, 100.0, 80.0, "#f59e0b"),
            ],
            selected: vec![1],
        }
    }
}

impl FlexboxTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[FlexItem] {
        &self.items
    }

    /// Selected ids in selection order.
    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    /// The item whose values the property controls show.
    pub fn primary_selection(&self) -> Option<&FlexItem> {
        let id = self.selected.first()?;
        self.items.iter().find(|item| item.id == *id)
    }

    /// Plain clicks replace the selection; with multi-select on (or
    /// `additive`, e.g. shift held) they toggle membership.
    pub fn toggle_selection(&mut self, id: u32, additive: bool) {
        if !self.items.iter().any(|item| item.id == id) {
            return;
        }
        if self.multi_select || additive {
            if let Some(pos) = self.selected.iter().position(|s| *s == id) {
                self.selected.remove(pos);
            } else {
                self.selected.push(id);
            }
        } else {
            self.selected = vec![id];
        }
    }

    /// Keeps only the first selected item.
    pub fn clear_selection(&mut self) {
        self.selected.truncate(1);
    }

    pub fn can_add_item(&self) -> bool {
        ITEM_BOUNDS.can_add(self.items.len())
    }

    pub fn can_remove_selected(&self) -> bool {
        ITEM_BOUNDS.can_remove(self.items.len(), self.selected.len())
    }

    /// Adds an item with a random size (70-119 x 70-139) and palette color.
    /// Returns the new id, or `None` at eight items.
    pub fn add_item(&mut self, rng: &mut dyn RngCore) -> Option<u32> {
        if !self.can_add_item() {
            return None;
        }
        let id = next_id(self.items.iter().map(|item| item.id));
        let color = ITEM_PALETTE.choose(rng).copied().unwrap_or(ITEM_PALETTE[0]);
        let width = rng.random_range(70..120) as f32;
        let height = rng.random_range(70..140) as f32;
        self.items.push(FlexItem::new(id, width, height, color));
        if self.multi_select {
            self.selected.push(id);
        } else {
            self.selected = vec![id];
        }
        log::debug!("Added flex item {id}");
        Some(id)
    }

    /// Removes every selected item as long as one remains, then selects the
    /// first remaining item.
    pub fn remove_selected(&mut self) -> bool {
        if !self.can_remove_selected() {
            return false;
        }
        self.items.retain(|item| !self.selected.contains(&item.id));
        self.selected = self.items.first().map(|item| vec![item.id]).unwrap_or_default();
        true
    }

    /// Applies `edit` to every selected item.
    pub fn update_selected(&mut self, mut edit: impl FnMut(&mut FlexItem)) {
        for item in self.items.iter_mut().filter(|item| self.selected.contains(&item.id)) {
            edit(item);
        }
    }

    pub fn container_block(&self) -> CssBlock {
        CssBlock::new()
            .comment("Container")
            .declaration("display", "flex")
            .declaration("flex-direction", self.direction.keyword())
            .declaration("justify-content", self.justify.keyword())
            .declaration("align-items", self.align.keyword())
            .declaration("flex-wrap", self.wrap.keyword())
            .declaration("gap", px(self.gap))
    }

    pub fn items_css(&self) -> String {
        self.items
            .iter()
            .map(|item| item.block().render())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Generator for FlexboxTool {
    fn name(&self) -> &'static str {
        "Flexbox Playground"
    }

    fn route(&self) -> Route {
        Route::Flexbox
    }

    fn emit(&self) -> String {
        format!("{}\n\n{}", self.container_block().render(), self.items_css())
    }

    /// The container; each item has its own `FlexItem::preview`.
    fn preview(&self) -> StyleDescriptor {
        StyleDescriptor::new()
            .with(StyleProperty::Display, "flex")
            .with(StyleProperty::FlexDirection, self.direction.keyword())
            .with(StyleProperty::JustifyContent, self.justify.keyword())
            .with(StyleProperty::AlignItems, self.align.keyword())
            .with(StyleProperty::FlexWrap, self.wrap.keyword())
            .with(StyleProperty::Gap, px(self.gap))
            .with(StyleProperty::BackgroundColor, self.background.clone())
            .with(StyleProperty::Height, format!("{}px", fmt_number(self.height)))
            .with(StyleProperty::Padding, "20px")
            .with(StyleProperty::BorderRadius, "8px")
            .with(StyleProperty::Overflow, "auto")
    }

    /// New container values; each item keeps its size and color and has a
    /// 30% chance per flex property of leaving its default.
    fn randomize(&mut self, rng: &mut dyn RngCore) {
        self.direction = FlexDirection::ALL.choose(rng).copied().unwrap_or_default();
        self.justify = JustifyContent::ALL.choose(rng).copied().unwrap_or_default();
        self.align = AlignItems::ALL.choose(rng).copied().unwrap_or_default();
        self.wrap = FlexWrap::ALL.choose(rng).copied().unwrap_or_default();
        self.gap = rng.random_range(0..30) as f32;

        for item in &mut self.items {
            item.align_self = if rng.random_bool(0.3) {
                AlignSelf::ALL.choose(rng).copied().unwrap_or_default()
            } else {
                AlignSelf::Auto
            };
            item.flex_grow = if rng.random_bool(0.3) { rng.random_range(0..3) } else { 0 };
            item.flex_shrink = if rng.random_bool(0.3) { rng.random_range(0..3) } else { 1 };
            item.order = if rng.random_bool(0.3) { rng.random_range(-2..3) } else { 0 };
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::parse_declarations;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_output_omits_default_item_properties() {
        let css = FlexboxTool::new().emit();
        assert_eq!(
            css.split("\n\n").next().unwrap(),
            "/* Container */\ndisplay: flex;\nflex-direction: row;\njustify-content: flex-start;\n\
             align-items: stretch;\nflex-wrap: nowrap;\ngap: 10px;"
        );
        assert!(css.contains("/* Item 2 */\nwidth: 100px;\nheight: 150px;\nbackground-color: #10b981;"));
        assert!(!css.contains("flex-grow"));
        assert!(!css.contains("align-self"));
    }

    #[test]
    fn test_non_default_item_properties_are_emitted() {
        let mut tool = FlexboxTool::new();
        tool.update_selected(|item| {
            item.flex_grow = 2;
            item.flex_shrink = 0;
            item.order = -1;
            item.align_self = AlignSelf::Center;
        });
        assert_eq!(
            tool.items()[0].block().render(),
            "/* Item 1 */\nwidth: 100px;\nheight: 100px;\nbackground-color: #3b82f6;\n\
             align-self: center;\nflex-grow: 2;\nflex-shrink: 0;\norder: -1;"
        );
        assert_eq!(tool.items()[1].flex_grow, 0);
    }

    #[test]
    fn test_item_bounds_and_selection_fallback() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tool = FlexboxTool::new();
        while tool.add_item(&mut rng).is_some() {}
        assert_eq!(tool.items().len(), 8);
        assert_eq!(tool.selected(), &[8]);
        let new = &tool.items()[7];
        assert!((70.0..120.0).contains(&new.width));
        assert!((70.0..140.0).contains(&new.height));
        assert!(ITEM_PALETTE.contains(&new.color.as_str()));

        tool.multi_select = true;
        for id in 1..=7 {
            tool.toggle_selection(id, false);
        }
        assert_eq!(tool.selected().len(), 8);
        assert!(!tool.remove_selected());

        tool.toggle_selection(3, false);
        assert!(tool.remove_selected());
        assert_eq!(tool.items().len(), 1);
        assert_eq!(tool.selected(), &[3]);
        assert!(!tool.remove_selected());
    }

    #[test]
    fn test_single_select_replaces() {
        let mut tool = FlexboxTool::new();
        tool.toggle_selection(2, false);
        assert_eq!(tool.selected(), &[2]);
        tool.toggle_selection(3, true);
        assert_eq!(tool.selected(), &[2, 3]);
        tool.clear_selection();
        assert_eq!(tool.selected(), &[2]);
        tool.toggle_selection(42, false);
        assert_eq!(tool.selected(), &[2]);
    }

    #[test]
    fn test_previews_agree_with_code() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut tool = FlexboxTool::new();
        for _ in 0..100 {
            tool.randomize(&mut rng);
            let container = parse_declarations(&tool.container_block().render());
            assert!(tool.preview().mismatches(&container).is_empty());
            for item in tool.items() {
                let decls = parse_declarations(&item.block().render());
                assert!(item.preview().mismatches(&decls).is_empty());
                assert!((-2..=2).contains(&item.order));
                assert!((0..=2).contains(&item.flex_grow));
            }
        }
    }
}
