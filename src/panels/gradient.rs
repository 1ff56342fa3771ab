use egui::{vec2, Ui};

use super::{category_filter, preset_swatch, preview_area, tab_bar, PanelContext, ToolPage, ToolTab};
use crate::catalog::filter_by_category;
use crate::css::{ColorStop, GradientKind, StopField, StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::tools::GradientTool;
use crate::widgets::{color_field, keyword_combo, numeric_field, CodeBlock};

/// An edit requested from the stop list.
pub(super) enum StopEdit {
    Update(u32, StopField),
    Remove(u32),
}

/// Color and position controls for every stop, in stored order.
pub(super) fn stop_list(ui: &mut Ui, stops: &[ColorStop], can_remove: bool, cx: &PanelContext<'_>) -> Vec<StopEdit> {
    let mut edits = Vec::new();
    for (i, stop) in stops.iter().enumerate() {
        ui.push_id(stop.id, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Stop {}", i + 1));
                if ui.add_enabled(can_remove, egui::Button::new("🗑")).clicked() {
                    edits.push(StopEdit::Remove(stop.id));
                }
            });
            let mut color = stop.color.clone();
            if color_field(ui, "Color", &mut color) {
                edits.push(StopEdit::Update(stop.id, StopField::Color(color)));
            }
            let mut position = stop.position;
            if numeric_field(ui, "Position %", &mut position, 0.0..=100.0, cx.policy) {
                edits.push(StopEdit::Update(stop.id, StopField::Position(position)));
            }
        });
        ui.add_space(4.0);
    }
    edits
}

pub(super) fn gradient_panel(ui: &mut Ui, tool: &mut GradientTool, page: &mut ToolPage, cx: &mut PanelContext<'_>) {
    tab_bar(ui, page);
    match page.tab {
        ToolTab::Editor => editor(ui, tool, cx),
        ToolTab::Presets => presets(ui, tool, page, cx),
    }
}

fn editor(ui: &mut Ui, tool: &mut GradientTool, cx: &mut PanelContext<'_>) {
    let width = ui.available_width();
    preview_area(ui, vec2(width, 220.0), vec2(width - 40.0, 180.0), &tool.preview(), cx);
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Type");
        ui.selectable_value(&mut tool.kind, GradientKind::Linear, "Linear");
        ui.selectable_value(&mut tool.kind, GradientKind::Radial, "Radial");
    });
    if tool.kind == GradientKind::Linear {
        keyword_combo(ui, "Direction", &mut tool.direction);
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.strong("Color Stops");
        if ui.add_enabled(tool.can_add_stop(), egui::Button::new("+ Add Stop")).clicked() {
            tool.add_stop();
        }
    });
    for edit in stop_list(ui, tool.stops(), tool.can_remove_stop(), cx) {
        match edit {
            StopEdit::Update(id, field) => {
                tool.update_stop(id, field);
            }
            StopEdit::Remove(id) => {
                tool.remove_stop(id);
            }
        }
    }

    ui.separator();
    CodeBlock::new("gradient", &tool.emit()).show(ui, cx);
}

fn presets(ui: &mut Ui, tool: &mut GradientTool, page: &mut ToolPage, cx: &mut PanelContext<'_>) {
    let catalog = cx.catalog;
    category_filter(ui, &catalog.gradients, &mut page.category);
    ui.horizontal_wrapped(|ui| {
        for preset in filter_by_category(&catalog.gradients, &page.category) {
            let css = preset.css();
            let value = css.trim_start_matches("background: ").trim_end_matches(';');
            let style = StyleDescriptor::new()
                .with(StyleProperty::Background, value)
                .with(StyleProperty::BorderRadius, "8px");
            if preset_swatch(ui, &preset.name, &style, cx) {
                tool.load_preset(preset);
                page.tab = ToolTab::Editor;
            }
        }
    });
}
