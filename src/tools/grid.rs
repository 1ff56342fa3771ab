//! CSS Grid layout builder.
//!
//! Items are placed by explicit line numbers. Templates are free text, so the
//! number of tracks is recovered by [`count_tracks`], which understands
//! `repeat(n, ...)` and treats any other top-level token (including
//! `minmax(...)`) as a single track.

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::collection::Bounds;
use crate::css::tailwind::utility;
use crate::css::{px, split_top_level, CodeMode, CssBlock, StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::id_generator::next_id;
use crate::route::Route;
use crate::tools::flexbox::ITEM_PALETTE;

pub const ITEM_BOUNDS: Bounds = Bounds::new(1, 12);

/// File name used when the full layout is exported.
pub const GRID_EXPORT_FILE_NAME: &str = "grid-layout.html";

const GRID_LINES_SIZE: &str = "50px 50px";
const GRID_LINES_IMAGE: &str = "linear-gradient(to right, rgba(0, 0, 0, 0.05) 1px, transparent 1px), \
     linear-gradient(to bottom, rgba(0, 0, 0, 0.05) 1px, transparent 1px)";
const GRID_LINES_TAILWIND: &str = "bg-[size:50px_50px]\n\
     bg-[image:linear-gradient(to_right,rgba(0,0,0,0.05)_1px,transparent_1px),\
     linear-gradient(to_bottom,rgba(0,0,0,0.05)_1px,transparent_1px)]";

const RANDOM_ROW_TEMPLATES: [&str; 5] = [
    "repeat(3, 1fr)",
    "auto 1fr auto",
    "100px 1fr 100px",
    "repeat(2, 1fr) 2fr",
    "minmax(100px, auto) 1fr minmax(100px, auto)",
];

const RANDOM_COLUMN_TEMPLATES: [&str; 5] = [
    "repeat(3, 1fr)",
    "1fr 2fr 1fr",
    "repeat(4, 1fr)",
    "auto 1fr auto",
    "repeat(2, 2fr) 1fr",
];

/// Most tracks a template can define, the same limit browsers apply to
/// `repeat()`.
pub const MAX_TRACKS: usize = 10_000;

/// Lines per axis `least_occupied_cell` looks at.
const SCAN_LIMIT: u32 = 256;

/// Number of tracks a `grid-template-*` value defines, at most
/// `MAX_TRACKS`.
pub fn count_tracks(template: &str) -> usize {
    split_top_level(template, ' ')
        .iter()
        .map(|token| {
            let Some(args) = token
                .strip_prefix("repeat(")
                .and_then(|rest| rest.strip_suffix(')'))
            else {
                return 1;
            };
            let parts = split_top_level(args, ',');
            let times = parts
                .first()
                .and_then(|n| n.trim().parse::<usize>().ok())
                .unwrap_or(1)
                .min(MAX_TRACKS);
            let inner = parts.get(1..).map(|rest| rest.join(",")).unwrap_or_default();
            times.saturating_mul(count_tracks(&inner).max(1))
        })
        .fold(0usize, usize::saturating_add)
        .min(MAX_TRACKS)
}

/// A named area spanning `[row_start, row_end) x [col_start, col_end)`
/// in grid line numbers. Starts are always below ends.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub row_start: u32,
    pub row_end: u32,
    pub col_start: u32,
    pub col_end: u32,
}

impl GridItem {
    pub fn grid_row(&self) -> String {
        format!("{} / {}", self.row_start, self.row_end)
    }

    pub fn grid_column(&self) -> String {
        format!("{} / {}", self.col_start, self.col_end)
    }

    pub fn block(&self) -> CssBlock {
        CssBlock::new()
            .comment(format!("Item: {}", self.name))
            .declaration("grid-row", self.grid_row())
            .declaration("grid-column", self.grid_column())
            .declaration("background-color", self.color.clone())
    }

    pub fn tailwind(&self) -> String {
        format!(
            "/* Item: {} (Tailwind) */\nrow-start-{} row-end-{}\ncol-start-{} col-end-{}\n{}",
            self.name,
            self.row_start,
            self.row_end,
            self.col_start,
            self.col_end,
            utility("bg", &self.color)
        )
    }

    pub fn preview(&self) -> StyleDescriptor {
        StyleDescriptor::new()
            .with(StyleProperty::GridRow, self.grid_row())
            .with(StyleProperty::GridColumn, self.grid_column())
            .with(StyleProperty::BackgroundColor, self.color.clone())
    }

    /// The class the exported page gives this item.
    pub fn class_name(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// A single edit on the selected item.
#[derive(Debug, Clone, PartialEq)]
pub enum GridItemField {
    Name(String),
    Color(String),
    RowStart(u32),
    RowEnd(u32),
    ColStart(u32),
    ColEnd(u32),
}

/// Item of a built-in layout: name, color and `(row_start, row_end,
/// col_start, col_end)`.
pub type PresetItem = (&'static str, &'static str, [u32; 4]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPreset {
    pub name: &'static str,
    pub rows: &'static str,
    pub columns: &'static str,
    pub items: &'static [PresetItem],
}

pub const GRID_PRESETS: &[GridPreset] = &[
    GridPreset {
        name: "Basic Grid (3x3)",
        rows: "1fr 1fr 1fr",
        columns: "1fr 1fr 1fr",
        items: &[
            ("Item 1", "#3b82f6", [1, 2, 1, 2]),
            ("Item 2", "#10b981", [1, 2, 2, 3]),
            ("Item 3", "#f59e0b", [1, 2, 3, 4]),
            ("Item 4", "#ef4444", [2, 3, 1, 2]),
            ("Item 5", "#8b5cf6", [2, 3, 2, 3]),
            ("Item 6", "#ec4899", [2, 3, 3, 4]),
            ("Item 7", "#14b8a6", [3, 4, 1, 2]),
            ("Item 8", "#f97316", [3, 4, 2, 3]),
            ("Item 9", "#a855f7", [3, 4, 3, 4]),
        ],
    },
    GridPreset {
        name: "Classic Layout",
        rows: "100px 1fr 50px",
        columns: "1fr 4fr",
        items: &[
            ("Header", "#3b82f6", [1, 2, 1, 3]),
            ("Sidebar", "#10b981", [2, 3, 1, 2]),
            ("Content", "#f59e0b", [2, 3, 2, 3]),
            ("Footer", "#ef4444", [3, 4, 1, 3]),
        ],
    },
    GridPreset {
        name: "Dashboard",
        rows: "80px repeat(2, 1fr) 80px",
        columns: "repeat(4, 1fr)",
        items: &[
            ("Header", "#3b82f6", [1, 2, 1, 5]),
            ("Sidebar", "#10b981", [2, 4, 1, 2]),
            ("Main Content", "#f59e0b", [2, 3, 2, 4]),
            ("Stats", "#ef4444", [2, 3, 4, 5]),
            ("Chart 1", "#8b5cf6", [3, 4, 2, 3]),
            ("Chart 2", "#ec4899", [3, 4, 3, 5]),
            ("Footer", "#14b8a6", [4, 5, 1, 5]),
        ],
    },
];

fn preset_items(items: &[PresetItem]) -> Vec<GridItem> {
    items
        .iter()
        .zip(1..)
        .map(|((name, color, [row_start, row_end, col_start, col_end]), id)| GridItem {
            id,
            name: (*name).to_owned(),
            color: (*color).to_owned(),
            row_start: *row_start,
            row_end: *row_end,
            col_start: *col_start,
            col_end: *col_end,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridTool {
    row_template: String,
    column_template: String,
    /// Track counts of the last non-empty templates
    rows: usize,
    columns: usize,
    pub row_gap: f32,
    pub column_gap: f32,
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub show_grid_lines: bool,
    pub show_areas: bool,
    pub code_mode: CodeMode,
    items: Vec<GridItem>,
    selected: u32,
}

impl Default for GridTool {
    fn default() -> Self {
        Self {
            row_template: "1fr 1fr 1fr".to_owned(),
            column_template: "1fr 1fr 1fr".to_owned(),
            rows: 3,
            columns: 3,
            row_gap: 10.0,
            column_gap: 10.0,
            width: 600.0,
            height: 400.0,
            background: "#f3f4f6".to_owned(),
            show_grid_lines: true,
            show_areas: false,
            code_mode: CodeMode::Css,
            items: preset_items(&[
                ("Header", "#3b82f6", [1, 2, 1, 4]),
                ("Sidebar", "#10b981", [2, 4, 1, 2]),
                ("Content", "#f59e0b", [2, 4, 2, 4]),
            ]),
            selected: 1,
        }
    }
}

impl GridTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_template(&self) -> &str {
        &self.row_template
    }

    pub fn column_template(&self) -> &str {
        &self.column_template
    }

    pub fn set_row_template(&mut self, template: impl Into<String>) {
        self.row_template = template.into();
        let count = count_tracks(&self.row_template);
        if count > 0 {
            self.rows = count;
        }
    }

    pub fn set_column_template(&mut self, template: impl Into<String>) {
        self.column_template = template.into();
        let count = count_tracks(&self.column_template);
        if count > 0 {
            self.columns = count;
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The template as emitted: a blank template falls back to `1fr` per
    /// track of the last known count.
    pub fn rows_value(&self) -> String {
        template_value(&self.row_template, self.rows)
    }

    pub fn columns_value(&self) -> String {
        template_value(&self.column_template, self.columns)
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    pub fn selected(&self) -> u32 {
        self.selected
    }

    pub fn select(&mut self, id: u32) {
        if self.items.iter().any(|item| item.id == id) {
            self.selected = id;
        }
    }

    pub fn selected_item(&self) -> Option<&GridItem> {
        self.items.iter().find(|item| item.id == self.selected)
    }

    pub fn can_add_item(&self) -> bool {
        ITEM_BOUNDS.can_add(self.items.len())
    }

    pub fn can_remove_item(&self) -> bool {
        ITEM_BOUNDS.can_remove(self.items.len(), 1)
    }

    /// Row-major `(row, column)` of the least covered cell, both 1-based.
    ///
    /// Only lines up to the furthest item end are scanned, capped at
    /// `SCAN_LIMIT`. Past the furthest end every cell is empty, and the
    /// first empty cell in row-major order always lies inside that window.
    pub fn least_occupied_cell(&self) -> (u32, u32) {
        let furthest = |end: fn(&GridItem) -> u32| {
            self.items.iter().map(end).max().unwrap_or(1).min(SCAN_LIMIT)
        };
        let rows = (self.rows.max(1) as u32).min(furthest(|item: &GridItem| item.row_end));
        let columns = (self.columns.max(1) as u32).min(furthest(|item: &GridItem| item.col_end));

        let mut best = (1, 1);
        let mut min = usize::MAX;
        for r in 1..=rows {
            for c in 1..=columns {
                let count = self
                    .items
                    .iter()
                    .filter(|item| (item.row_start..item.row_end).contains(&r))
                    .filter(|item| (item.col_start..item.col_end).contains(&c))
                    .count();
                if count < min {
                    min = count;
                    best = (r, c);
                    if count == 0 {
                        return best;
                    }
                }
            }
        }
        best
    }

    /// Adds a 1x1 item on the least occupied cell and selects it.
    pub fn add_item(&mut self, rng: &mut dyn RngCore) -> Option<u32> {
        if !self.can_add_item() {
            return None;
        }
        let id = next_id(self.items.iter().map(|item| item.id));
        let (row, col) = self.least_occupied_cell();
        let color = ITEM_PALETTE.choose(rng).copied().unwrap_or(ITEM_PALETTE[0]);
        self.items.push(GridItem {
            id,
            name: format!("Item {id}"),
            color: color.to_owned(),
            row_start: row,
            row_end: row + 1,
            col_start: col,
            col_end: col + 1,
        });
        self.selected = id;
        log::debug!("Added grid item {id} at row {row}, column {col}");
        Some(id)
    }

    /// Removes the selected item and selects the first remaining one.
    pub fn remove_selected(&mut self) -> bool {
        if !self.can_remove_item() {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id != self.selected);
        if let Some(first) = self.items.first() {
            self.selected = first.id;
        }
        before != self.items.len()
    }

    /// Edits the selected item. Line numbers stay at least 1 and every
    /// start stays below its end; moving a start past the end drags the
    /// end along.
    pub fn update_selected(&mut self, field: GridItemField) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == self.selected) else {
            return;
        };
        match field {
            GridItemField::Name(name) => item.name = name,
            GridItemField::Color(color) => item.color = color,
            GridItemField::RowStart(v) => {
                item.row_start = v.clamp(1, u32::MAX - 1);
                item.row_end = item.row_end.max(item.row_start + 1);
            }
            GridItemField::RowEnd(v) => item.row_end = v.max(item.row_start.saturating_add(1)),
            GridItemField::ColStart(v) => {
                item.col_start = v.clamp(1, u32::MAX - 1);
                item.col_end = item.col_end.max(item.col_start + 1);
            }
            GridItemField::ColEnd(v) => item.col_end = v.max(item.col_start.saturating_add(1)),
        }
    }

    pub fn load_preset(&mut self, preset: &GridPreset) {
        log::info!("Loading grid preset {}", preset.name);
        self.set_row_template(preset.rows);
        self.set_column_template(preset.columns);
        self.items = preset_items(preset.items);
        self.selected = 1;
    }

    pub fn container_block(&self) -> CssBlock {
        let mut block = CssBlock::new()
            .comment("Grid Container")
            .declaration("display", "grid")
            .declaration("grid-template-rows", self.rows_value())
            .declaration("grid-template-columns", self.columns_value())
            .declaration("row-gap", px(self.row_gap))
            .declaration("column-gap", px(self.column_gap))
            .declaration("width", px(self.width))
            .declaration("height", px(self.height));
        if self.show_grid_lines {
            block.push("background-size", GRID_LINES_SIZE);
            block.push("background-image", GRID_LINES_IMAGE);
        }
        block
    }

    pub fn container_tailwind(&self) -> String {
        let mut lines = vec![
            "/* Tailwind CSS Grid Container */".to_owned(),
            "grid".to_owned(),
            utility("grid-rows", &self.rows_value()),
            utility("grid-cols", &self.columns_value()),
            utility("gap-y", &px(self.row_gap)),
            utility("gap-x", &px(self.column_gap)),
            utility("w", &px(self.width)),
            utility("h", &px(self.height)),
        ];
        if self.show_grid_lines {
            lines.push(GRID_LINES_TAILWIND.to_owned());
        }
        lines.join("\n")
    }

    /// A standalone page reproducing the layout, always in plain CSS.
    pub fn export_html(&self) -> String {
        let items = self
            .items
            .iter()
            .map(|item| {
                format!(
                    "<div class=\"grid-item {}\" style=\"grid-row: {}; grid-column: {}; background-color: {};\">{}</div>",
                    item.class_name(),
                    item.grid_row(),
                    item.grid_column(),
                    item.color,
                    item.name
                )
            })
            .collect::<Vec<_>>()
            .join("\n  ");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>CSS Grid Layout</title>
  <style>
    .grid-container {{
      display: grid;
      grid-template-rows: {rows};
      grid-template-columns: {columns};
      row-gap: {row_gap};
      column-gap: {column_gap};
      width: 100%;
      max-width: {width};
      height: {height};
      margin: 0 auto;
    }}

    .grid-item {{
      padding: 20px;
      display: flex;
      justify-content: center;
      align-items: center;
      color: white;
      font-family: system-ui, -apple-system, sans-serif;
      font-weight: bold;
    }}
  </style>
</head>
<body>
  <div class="grid-container">
  {items}
  </div>
</body>
</html>"#,
            rows = self.rows_value(),
            columns = self.columns_value(),
            row_gap = px(self.row_gap),
            column_gap = px(self.column_gap),
            width = px(self.width),
            height = px(self.height),
        )
    }
}

fn template_value(template: &str, count: usize) -> String {
    if template.trim().is_empty() {
        vec!["1fr"; count.max(1)].join(" ")
    } else {
        template.to_owned()
    }
}

impl Generator for GridTool {
    fn name(&self) -> &'static str {
        "CSS Grid Generator"
    }

    fn route(&self) -> Route {
        Route::CssGrid
    }

    fn emit(&self) -> String {
        match self.code_mode {
            CodeMode::Css => {
                let mut blocks = vec![self.container_block().render()];
                blocks.extend(self.items.iter().map(|item| item.block().render()));
                blocks.join("\n\n")
            }
            CodeMode::Tailwind => {
                let mut blocks = vec![self.container_tailwind()];
                blocks.extend(self.items.iter().map(GridItem::tailwind));
                blocks.join("\n\n")
            }
        }
    }

    /// The container; items carry their own `GridItem::preview`.
    fn preview(&self) -> StyleDescriptor {
        let (size, image) = if self.show_grid_lines {
            (GRID_LINES_SIZE, GRID_LINES_IMAGE)
        } else {
            ("0 0", "none")
        };
        StyleDescriptor::new()
            .with(StyleProperty::Display, "grid")
            .with(StyleProperty::GridTemplateRows, self.rows_value())
            .with(StyleProperty::GridTemplateColumns, self.columns_value())
            .with(StyleProperty::RowGap, px(self.row_gap))
            .with(StyleProperty::ColumnGap, px(self.column_gap))
            .with(StyleProperty::Width, px(self.width))
            .with(StyleProperty::Height, px(self.height))
            .with(StyleProperty::BackgroundColor, self.background.clone())
            .with(StyleProperty::Border, "1px solid #e5e7eb")
            .with(StyleProperty::BorderRadius, "8px")
            .with(StyleProperty::BackgroundSize, size)
            .with(StyleProperty::BackgroundImage, image)
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        let rows = RANDOM_ROW_TEMPLATES.choose(rng).copied().unwrap_or(RANDOM_ROW_TEMPLATES[0]);
        let columns = RANDOM_COLUMN_TEMPLATES
            .choose(rng)
            .copied()
            .unwrap_or(RANDOM_COLUMN_TEMPLATES[0]);
        self.set_row_template(rows);
        self.set_column_template(columns);
        self.row_gap = rng.random_range(5..25) as f32;
        self.column_gap = rng.random_range(5..25) as f32;

        let count = rng.random_range(3..=7);
        self.items = (1..=count)
            .map(|id| {
                let row_start = rng.random_range(1..=2);
                let col_start = rng.random_range(1..=2);
                GridItem {
                    id,
                    name: format!("Item {id}"),
                    color: ITEM_PALETTE.choose(rng).copied().unwrap_or(ITEM_PALETTE[0]).to_owned(),
                    row_start,
                    row_end: row_start + rng.random_range(1..=2),
                    col_start,
                    col_end: col_start + rng.random_range(1..=2),
                }
            })
            .collect();
        self.selected = 1;
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
    fn test_count_tracks() {
        assert_eq!(count_tracks("1fr 1fr 1fr"), 3);
        assert_eq!(count_tracks("repeat(4, 1fr)"), 4);
        assert_eq!(count_tracks("80px repeat(2, 1fr) 80px"), 4);
        assert_eq!(count_tracks("repeat(2, 1fr 2fr)"), 4);
        assert_eq!(count_tracks("minmax(100px, auto) 1fr minmax(100px, auto)"), 3);
        assert_eq!(count_tracks("   "), 0);
    }

    #[test]
    fn test_huge_repeats_are_capped() {
        assert_eq!(count_tracks("repeat(99999999999, repeat(99999999999, 1fr))"), MAX_TRACKS);
        assert_eq!(count_tracks("repeat(4000000000, 1fr) 1fr"), MAX_TRACKS);
        assert_eq!(count_tracks("repeat(20, 1fr 1fr)"), 40);
    }

    #[test]
    fn test_add_item_on_huge_grid() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut tool = GridTool::new();
        tool.set_row_template("repeat(4000000000, 1fr)");
        tool.set_column_template("repeat(4000000000, 1fr)");
        assert_eq!(tool.rows(), MAX_TRACKS);
        // the default layout leaves column 4 of row 1 empty
        let id = tool.add_item(&mut rng).unwrap();
        let added = tool.items().iter().find(|item| item.id == id).unwrap();
        assert_eq!((added.row_start, added.col_start), (1, 4));
    }

    #[test]
    fn test_default_css() {
        let css = GridTool::new().emit();
        let container = css.split("\n\n").next().unwrap();
        assert_eq!(
            container,
            format!(
                "/* Grid Container */\ndisplay: grid;\ngrid-template-rows: 1fr 1fr 1fr;\n\
                 grid-template-columns: 1fr 1fr 1fr;\nrow-gap: 10px;\ncolumn-gap: 10px;\n\
                 width: 600px;\nheight: 400px;\nbackground-size: 50px 50px;\n\
                 background-image: {GRID_LINES_IMAGE};"
            )
        );
        assert!(css.ends_with(
            "/* Item: Content */\ngrid-row: 2 / 4;\ngrid-column: 2 / 4;\nbackground-color: #f59e0b;"
        ));
    }

    #[test]
    fn test_tailwind_mode() {
        let mut tool = GridTool::new();
        tool.code_mode = CodeMode::Tailwind;
        tool.show_grid_lines = false;
        tool.load_preset(&GRID_PRESETS[2]);
        let code = tool.emit();
        assert!(code.starts_with(
            "/* Tailwind CSS Grid Container */\ngrid\ngrid-rows-[80px_repeat(2,_1fr)_80px]\n\
             grid-cols-[repeat(4,_1fr)]\ngap-y-[10px]\ngap-x-[10px]\nw-[600px]\nh-[400px]\n\n"
        ));
        assert!(code.contains("/* Item: Header (Tailwind) */\nrow-start-1 row-end-2\ncol-start-1 col-end-5\nbg-[#3b82f6]"));
    }

    #[test]
    fn test_blank_template_falls_back_to_last_count() {
        let mut tool = GridTool::new();
        tool.set_row_template("repeat(4, 1fr)");
        tool.set_row_template("");
        assert_eq!(tool.rows(), 4);
        assert_eq!(tool.rows_value(), "1fr 1fr 1fr 1fr");
    }

    #[test]
    fn test_add_uses_least_occupied_cell() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut tool = GridTool::new();
        // every cell is covered once by the default layout
        assert_eq!(tool.least_occupied_cell(), (1, 1));
        tool.load_preset(&GRID_PRESETS[1]);
        tool.update_selected(GridItemField::ColEnd(2));
        assert_eq!(tool.least_occupied_cell(), (1, 2));
        assert_eq!(tool.add_item(&mut rng), Some(5));
        let added = tool.selected_item().unwrap();
        assert_eq!((added.row_start, added.row_end, added.col_start, added.col_end), (1, 2, 2, 3));
        assert_eq!(added.name, "Item 5");
    }

    #[test]
    fn test_item_bounds_and_selection_fallback() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut tool = GridTool::new();
        while tool.add_item(&mut rng).is_some() {}
        assert_eq!(tool.items().len(), 12);
        assert_eq!(tool.selected(), 12);
        while tool.remove_selected() {}
        assert_eq!(tool.items().len(), 1);
        assert_eq!(tool.selected(), tool.items()[0].id);
    }

    #[test]
    fn test_updates_keep_start_before_end() {
        let mut tool = GridTool::new();
        tool.update_selected(GridItemField::RowStart(5));
        let item = tool.selected_item().unwrap();
        assert_eq!((item.row_start, item.row_end), (5, 6));
        tool.update_selected(GridItemField::RowEnd(2));
        assert_eq!(tool.selected_item().unwrap().row_end, 6);
        tool.update_selected(GridItemField::ColStart(0));
        assert_eq!(tool.selected_item().unwrap().col_start, 1);
    }

    #[test]
    fn test_line_edits_saturate_at_the_top() {
        let mut tool = GridTool::new();
        tool.update_selected(GridItemField::RowStart(u32::MAX));
        tool.update_selected(GridItemField::ColStart(u32::MAX));
        let item = tool.selected_item().unwrap();
        assert_eq!((item.row_start, item.row_end), (u32::MAX - 1, u32::MAX));
        assert_eq!((item.col_start, item.col_end), (u32::MAX - 1, u32::MAX));

        tool.update_selected(GridItemField::RowEnd(0));
        tool.update_selected(GridItemField::ColEnd(u32::MAX));
        let item = tool.selected_item().unwrap();
        assert!(item.row_end > item.row_start);
        assert_eq!(item.col_end, u32::MAX);
        assert!(tool.least_occupied_cell() >= (1, 1));
    }

    #[test]
    fn test_export_page() {
        let mut tool = GridTool::new();
        tool.load_preset(&GRID_PRESETS[2]);
        let html = tool.export_html();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("grid-template-rows: 80px repeat(2, 1fr) 80px;"));
        assert!(html.contains("max-width: 600px;"));
        assert!(html.contains(
            "<div class=\"grid-item main-content\" style=\"grid-row: 2 / 3; grid-column: 2 / 4; background-color: #f59e0b;\">Main Content</div>\n  <div class=\"grid-item stats\""
        ));
        assert!(html.ends_with("</body>\n</html>"));
    }

    #[test]
    fn test_random_layouts_are_valid() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut tool = GridTool::new();
        for _ in 0..300 {
            tool.randomize(&mut rng);
            assert!((3..=7).contains(&tool.items().len()));
            assert!((5.0..25.0).contains(&tool.row_gap));
            assert_eq!(tool.selected(), 1);
            for item in tool.items() {
                assert!(item.row_end > item.row_start);
                assert!(item.col_end > item.col_start);
            }
            let container = parse_declarations(&tool.container_block().render());
            assert!(tool.preview().mismatches(&container).is_empty());
        }
    }
}
