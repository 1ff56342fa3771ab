use egui::{vec2, Align2, Color32, FontId, Sense, Stroke, Ui};

use super::PanelContext;
use crate::css::{CodeMode, StyleProperty};
use crate::generator::Generator;
use crate::renderer::{grid_cells, layout_grid};
use crate::tools::grid::{GridItemField, GRID_EXPORT_FILE_NAME, GRID_PRESETS};
use crate::tools::GridTool;
use crate::widgets::{color_field, numeric_field, text_field, CodeBlock};

pub(super) fn grid_panel(ui: &mut Ui, tool: &mut GridTool, cx: &mut PanelContext<'_>) {
    ui.horizontal_wrapped(|ui| {
        ui.label("Layouts:");
        for preset in GRID_PRESETS {
            if ui.button(preset.name).clicked() {
                tool.load_preset(preset);
            }
        }
    });
    ui.add_space(8.0);

    preview(ui, tool, cx);
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        container_controls(&mut columns[0], tool, cx);
        item_controls(&mut columns[1], tool, cx);
    });

    ui.separator();
    ui.horizontal(|ui| {
        for mode in [CodeMode::Css, CodeMode::Tailwind] {
            ui.selectable_value(&mut tool.code_mode, mode, mode.label());
        }
        if ui.button("⬇ Export HTML").clicked() {
            let html = tool.export_html();
            cx.export(GRID_EXPORT_FILE_NAME, &html);
        }
    });
    let key = match tool.code_mode {
        CodeMode::Css => "grid-css",
        CodeMode::Tailwind => "grid-tailwind",
    };
    let title = match tool.code_mode {
        CodeMode::Css => "CSS Code",
        CodeMode::Tailwind => "Tailwind Classes",
    };
    CodeBlock::new(key, &tool.emit()).title(title).show(ui, cx);
}

fn preview(ui: &mut Ui, tool: &mut GridTool, cx: &PanelContext<'_>) {
    let available = ui.available_width();
    let size = vec2(tool.width.min(available), tool.height);
    let (response, painter) = ui.allocate_painter(vec2(available, size.y), Sense::hover());
    let container = egui::Rect::from_min_size(response.rect.min, size);
    let style = tool.preview();
    cx.renderer.paint_box(&painter, container, &style);

    let faint = Stroke::new(1.0, Color32::from_black_alpha(40));
    if tool.show_grid_lines {
        for cell in grid_cells(container, tool) {
            painter.rect_stroke(cell, 0.0, faint);
        }
    }

    let mut clicked = None;
    for (id, rect) in layout_grid(container, tool) {
        let Some(item) = tool.items().iter().find(|item| item.id == id) else {
            continue;
        };
        let fill = item.preview().with(StyleProperty::BorderRadius, "4px");
        cx.renderer.paint_box(&painter, rect, &fill);
        let label = if tool.show_areas {
            format!("{}\n{} / {}", item.name, item.grid_row(), item.grid_column())
        } else {
            item.name.clone()
        };
        painter.text(rect.center(), Align2::CENTER_CENTER, label, FontId::proportional(13.0), Color32::WHITE);
        if tool.selected() == id {
            painter.rect_stroke(rect.expand(2.0), 4.0, Stroke::new(3.0, Color32::from_rgb(99, 102, 241)));
        }
        if ui.interact(rect, ui.id().with(("grid-item", id)), Sense::click()).clicked() {
            clicked = Some(id);
        }
    }
    if let Some(id) = clicked {
        tool.select(id);
    }
}

fn container_controls(ui: &mut Ui, tool: &mut GridTool, cx: &PanelContext<'_>) {
    ui.strong("Container");
    let mut rows = tool.row_template().to_owned();
    if text_field(ui, "grid-template-rows", &mut rows) {
        tool.set_row_template(rows);
    }
    let mut columns = tool.column_template().to_owned();
    if text_field(ui, "grid-template-columns", &mut columns) {
        tool.set_column_template(columns);
    }
    ui.weak(format!("{} rows × {} columns", tool.rows(), tool.columns()));
    numeric_field(ui, "Row gap", &mut tool.row_gap, 0.0..=50.0, cx.policy);
    numeric_field(ui, "Column gap", &mut tool.column_gap, 0.0..=50.0, cx.policy);
    numeric_field(ui, "Width", &mut tool.width, 300.0..=1000.0, cx.policy);
    numeric_field(ui, "Height", &mut tool.height, 200.0..=800.0, cx.policy);
    color_field(ui, "Background", &mut tool.background);
    ui.checkbox(&mut tool.show_grid_lines, "Show grid lines");
    ui.checkbox(&mut tool.show_areas, "Show areas");
}

fn item_controls(ui: &mut Ui, tool: &mut GridTool, cx: &mut PanelContext<'_>) {
    ui.horizontal(|ui| {
        ui.strong("Items");
        if ui.add_enabled(tool.can_add_item(), egui::Button::new("+ Add")).clicked() {
            tool.add_item(&mut *cx.rng);
        }
        if ui.add_enabled(tool.can_remove_item(), egui::Button::new("🗑 Remove")).clicked() {
            tool.remove_selected();
        }
    });

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for item in tool.items() {
            if ui.selectable_label(tool.selected() == item.id, &item.name).clicked() {
                clicked = Some(item.id);
            }
        }
    });
    if let Some(id) = clicked {
        tool.select(id);
    }

    let Some(item) = tool.selected_item().cloned() else {
        return;
    };
    let mut edits = Vec::new();
    let mut name = item.name.clone();
    if text_field(ui, "Name", &mut name) {
        edits.push(GridItemField::Name(name));
    }
    let mut color = item.color.clone();
    if color_field(ui, "Color", &mut color) {
        edits.push(GridItemField::Color(color));
    }

    let max_row = tool.rows() as u32 + 1;
    let max_col = tool.columns() as u32 + 1;
    let mut line = |ui: &mut Ui, label: &str, value: u32, max: u32, field: fn(u32) -> GridItemField| {
        let mut value = value;
        if numeric_field(ui, label, &mut value, 1..=max, cx.policy) {
            edits.push(field(value));
        }
    };
    line(ui, "Row start", item.row_start, max_row, GridItemField::RowStart);
    line(ui, "Row end", item.row_end, max_row, GridItemField::RowEnd);
    line(ui, "Column start", item.col_start, max_col, GridItemField::ColStart);
    line(ui, "Column end", item.col_end, max_col, GridItemField::ColEnd);

    for edit in edits {
        tool.update_selected(edit);
    }
}
