//! egui pages. Each tool gets a panel function that edits the tool in place
//! and reads its `emit`/`preview` output back every frame.

mod border_radius;
mod button_gallery;
mod flexbox;
mod glassmorphism;
mod gradient;
mod gradient_text;
mod grid;
pub mod home;
mod neumorphism;
mod shadow;
pub mod sidebar;
mod tailwind;
mod transform;

pub use button_gallery::button_gallery_panel;
pub use tailwind::tailwind_panel;

use egui::{Rect, Sense, Ui, Vec2};
use rand::RngCore;

use crate::catalog::{categories, Catalog, Categorized, ALL_CATEGORIES};
use crate::clipboard::ClipboardSink;
use crate::css::StyleDescriptor;
use crate::export::ExportSink;
use crate::generator::{Generator, ToolKind};
use crate::notify::Notifier;
use crate::policy::NumericPolicy;
use crate::renderer::Renderer;

/// Everything a panel may touch besides its own tool.
pub struct PanelContext<'a> {
    pub catalog: &'a Catalog,
    pub clipboard: &'a mut dyn ClipboardSink,
    pub export: &'a mut dyn ExportSink,
    pub notifier: &'a mut Notifier,
    pub rng: &'a mut dyn RngCore,
    pub policy: NumericPolicy,
    pub renderer: Renderer,
    /// Seconds, from `util::time::current_time_secs`
    pub now: f64,
}

impl PanelContext<'_> {
    /// Copies `text` and reports the outcome with a toast. Returns whether
    /// the copy went through.
    pub fn copy(&mut self, key: &str, text: &str) -> bool {
        match self.clipboard.copy(text) {
            Ok(()) => {
                log::info!("Copied {key} ({} bytes)", text.len());
                self.notifier.mark_copied(key, self.now);
                self.notifier.success("Copied to clipboard!", self.now);
                true
            }
            Err(err) => {
                log::error!("Copy of {key} failed: {err}");
                self.notifier.error("Failed to copy to clipboard", self.now);
                false
            }
        }
    }

    pub fn is_copied(&self, key: &str) -> bool {
        self.notifier.is_copied(key, self.now)
    }

    pub fn export(&mut self, file_name: &str, contents: &str) {
        match self.export.save(file_name, contents) {
            Ok(location) => {
                self.notifier.success(format!("Saved {location}"), self.now);
            }
            Err(err) => {
                log::error!("Export of {file_name} failed: {err}");
                self.notifier.error("Export failed", self.now);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolTab {
    #[default]
    Editor,
    Presets,
}

/// Per-page UI state that is not part of the generated output.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPage {
    pub tab: ToolTab,
    pub category: String,
}

impl Default for ToolPage {
    fn default() -> Self {
        Self {
            tab: ToolTab::Editor,
            category: ALL_CATEGORIES.to_owned(),
        }
    }
}

/// Shows the page for `tool`.
pub fn tool_panel(ui: &mut Ui, tool: &mut ToolKind, page: &mut ToolPage, cx: &mut PanelContext<'_>) {
    tool_header(ui, tool, cx);
    ui.separator();
    egui::ScrollArea::vertical().show(ui, |ui| match tool {
        ToolKind::Gradient(t) => gradient::gradient_panel(ui, t, page, cx),
        ToolKind::Shadow(t) => shadow::shadow_panel(ui, t, page, cx),
        ToolKind::BorderRadius(t) => border_radius::border_radius_panel(ui, t, page, cx),
        ToolKind::Flexbox(t) => flexbox::flexbox_panel(ui, t, cx),
        ToolKind::Grid(t) => grid::grid_panel(ui, t, cx),
        ToolKind::Transform(t) => transform::transform_panel(ui, t, cx),
        ToolKind::Glassmorphism(t) => glassmorphism::glassmorphism_panel(ui, t, cx),
        ToolKind::Neumorphism(t) => neumorphism::neumorphism_panel(ui, t, cx),
        ToolKind::GradientText(t) => gradient_text::gradient_text_panel(ui, t, cx),
    });
}

fn tool_header(ui: &mut Ui, tool: &mut ToolKind, cx: &mut PanelContext<'_>) {
    ui.horizontal(|ui| {
        ui.heading(tool.name());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("↺ Reset").clicked() {
                tool.reset();
            }
            if ui.button("🎲 Random").clicked() {
                tool.randomize(&mut *cx.rng);
            }
        });
    });
    ui.label(tool.route().description());
}

/// Editor / Presets switch for tools with a preset catalog.
fn tab_bar(ui: &mut Ui, page: &mut ToolPage) {
    ui.horizontal(|ui| {
        ui.selectable_value(&mut page.tab, ToolTab::Editor, "Editor");
        ui.selectable_value(&mut page.tab, ToolTab::Presets, "Presets");
    });
    ui.add_space(8.0);
}

/// Category chips above a preset grid.
fn category_filter<T: Categorized>(ui: &mut Ui, items: &[T], selected: &mut String) {
    ui.horizontal_wrapped(|ui| {
        for category in categories(items) {
            let label = capitalize(&category);
            if ui.selectable_label(*selected == category, label).clicked() {
                *selected = category;
            }
        }
    });
    ui.add_space(8.0);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Allocates a preview area of `size` and paints `style` centered in it
/// at `element` size.
fn preview_area(ui: &mut Ui, size: Vec2, element: Vec2, style: &StyleDescriptor, cx: &PanelContext<'_>) -> Rect {
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    painter.rect_filled(response.rect, 8.0, ui.visuals().extreme_bg_color);
    let rect = Rect::from_center_size(response.rect.center(), element);
    cx.renderer.paint_box(&painter, rect, style);
    response.rect
}

/// A small swatch button used by preset grids. Returns true when clicked.
fn preset_swatch(ui: &mut Ui, name: &str, style: &StyleDescriptor, cx: &PanelContext<'_>) -> bool {
    let size = egui::vec2(140.0, 100.0);
    let response = ui
        .vertical(|ui| {
            let (response, painter) = ui.allocate_painter(size, Sense::click());
            let inner = response.rect.shrink(12.0);
            cx.renderer.paint_box(&painter, inner, style);
            if response.hovered() {
                painter.rect_stroke(response.rect, 6.0, ui.visuals().selection.stroke);
            }
            ui.label(name);
            response
        })
        .inner;
    response.on_hover_text("Click to apply").clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::export::MemoryExport;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_copy_reports_success_and_failure() {
        let catalog = Catalog::load().unwrap();
        let mut clipboard = MemoryClipboard::default();
        let mut export = MemoryExport::default();
        let mut notifier = Notifier::new(1.0, 2.0);
        let mut rng = StdRng::seed_from_u64(1);
        let mut cx = PanelContext {
            catalog: &catalog,
            clipboard: &mut clipboard,
            export: &mut export,
            notifier: &mut notifier,
            rng: &mut rng,
            policy: NumericPolicy::PassThrough,
            renderer: Renderer,
            now: 5.0,
        };

        assert!(cx.copy("gradient", "background: red;"));
        assert!(cx.is_copied("gradient"));
        cx.export("grid-layout.html", "<html></html>");
        assert_eq!(cx.notifier.active().len(), 2);
        drop(cx);
        assert_eq!(clipboard.last(), Some("background: red;"));
        assert_eq!(export.files.len(), 1);

        clipboard.fail = true;
        let mut cx = PanelContext {
            catalog: &catalog,
            clipboard: &mut clipboard,
            export: &mut export,
            notifier: &mut notifier,
            rng: &mut rng,
            policy: NumericPolicy::PassThrough,
            renderer: Renderer,
            now: 10.0,
        };
        assert!(!cx.copy("shadow", "box-shadow: none;"));
        assert!(!cx.is_copied("shadow"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("all"), "All");
        assert_eq!(capitalize(""), "");
    }
}
