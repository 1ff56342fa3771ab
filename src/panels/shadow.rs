use egui::{vec2, Ui};

use super::{category_filter, preset_swatch, preview_area, tab_bar, PanelContext, ToolPage, ToolTab};
use crate::catalog::filter_by_category;
use crate::css::{StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::policy::NumericPolicy;
use crate::tools::shadow::{layers_css, ShadowLayer, ShadowMode};
use crate::tools::ShadowTool;
use crate::widgets::{numeric_field, text_field, CodeBlock};

const PREVIEW_BOX: &str = "#ffffff";

fn preview_style(box_shadow: String) -> StyleDescriptor {
    StyleDescriptor::new()
        .with(StyleProperty::BackgroundColor, PREVIEW_BOX)
        .with(StyleProperty::BorderRadius, "8px")
        .with(StyleProperty::BoxShadow, box_shadow)
}

fn geometry(ui: &mut Ui, layer: &mut ShadowLayer, policy: NumericPolicy) {
    numeric_field(ui, "Horizontal offset", &mut layer.horizontal_offset, -50.0..=50.0, policy);
    numeric_field(ui, "Vertical offset", &mut layer.vertical_offset, -50.0..=50.0, policy);
    numeric_field(ui, "Blur radius", &mut layer.blur_radius, 0.0..=100.0, policy);
    numeric_field(ui, "Spread radius", &mut layer.spread_radius, -50.0..=50.0, policy);
    ui.checkbox(&mut layer.inset, "Inset");
}

pub(super) fn shadow_panel(ui: &mut Ui, tool: &mut ShadowTool, page: &mut ToolPage, cx: &mut PanelContext<'_>) {
    tab_bar(ui, page);
    match page.tab {
        ToolTab::Editor => editor(ui, tool, cx),
        ToolTab::Presets => presets(ui, tool, page, cx),
    }
}

fn editor(ui: &mut Ui, tool: &mut ShadowTool, cx: &mut PanelContext<'_>) {
    let style = preview_style(layers_css(tool.active_layers()));
    let width = ui.available_width().max(300.0);
    preview_area(ui, vec2(width, 260.0), vec2(180.0, 180.0), &style, cx);
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Mode");
        ui.selectable_value(&mut tool.mode, ShadowMode::Single, "Single");
        ui.selectable_value(&mut tool.mode, ShadowMode::Multi, "Multiple layers");
    });

    match tool.mode {
        ShadowMode::Single => {
            geometry(ui, tool.single_mut(), cx.policy);
            let mut opacity = tool.opacity();
            if numeric_field(ui, "Opacity %", &mut opacity, 0..=100, cx.policy) {
                tool.set_opacity(opacity);
            }
        }
        ShadowMode::Multi => {
            let can_remove = tool.can_remove_layer();
            let mut remove = None;
            for index in 0..tool.layers().len() {
                let Some(layer) = tool.layer_mut(index) else {
                    continue;
                };
                ui.push_id(index, |ui| {
                    egui::CollapsingHeader::new(format!("Layer {}", index + 1))
                        .default_open(index == 0)
                        .show(ui, |ui| {
                            geometry(ui, layer, cx.policy);
                            text_field(ui, "Color", &mut layer.color);
                            if ui.add_enabled(can_remove, egui::Button::new("Remove layer")).clicked() {
                                remove = Some(index);
                            }
                        });
                });
            }
            if let Some(index) = remove {
                tool.remove_layer(index);
            }
            if ui.add_enabled(tool.can_add_layer(), egui::Button::new("+ Add Layer")).clicked() {
                tool.add_layer();
            }
        }
    }

    ui.separator();
    CodeBlock::new("box-shadow", &tool.emit()).show(ui, cx);
}

fn presets(ui: &mut Ui, tool: &mut ShadowTool, page: &mut ToolPage, cx: &mut PanelContext<'_>) {
    let catalog = cx.catalog;
    category_filter(ui, &catalog.shadows, &mut page.category);
    ui.horizontal_wrapped(|ui| {
        for preset in filter_by_category(&catalog.shadows, &page.category) {
            let style = preview_style(layers_css(&preset.layers));
            if preset_swatch(ui, &preset.name, &style, cx) {
                tool.load_preset(preset);
                page.tab = ToolTab::Editor;
            }
        }
    });
}
