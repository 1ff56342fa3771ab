use egui::{vec2, Ui};

use super::{category_filter, preset_swatch, preview_area, tab_bar, PanelContext, ToolPage, ToolTab};
use crate::catalog::filter_by_category;
use crate::css::{StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::renderer::element_size;
use crate::tools::border_radius::{Corner, RadiusUnit};
use crate::tools::BorderRadiusTool;
use crate::widgets::{color_field, keyword_combo, numeric_field, CodeBlock};

const PREVIEW_HEIGHT: f32 = 320.0;

pub(super) fn border_radius_panel(
    ui: &mut Ui,
    tool: &mut BorderRadiusTool,
    page: &mut ToolPage,
    cx: &mut PanelContext<'_>,
) {
    tab_bar(ui, page);
    match page.tab {
        ToolTab::Editor => editor(ui, tool, cx),
        ToolTab::Presets => presets(ui, tool, page, cx),
    }
}

fn editor(ui: &mut Ui, tool: &mut BorderRadiusTool, cx: &mut PanelContext<'_>) {
    let area = vec2(ui.available_width().max(320.0), PREVIEW_HEIGHT);
    let style = tool.preview();
    let element = element_size(&style, area, vec2(200.0, 200.0));
    preview_area(ui, area, element, &style, cx);
    ui.add_space(8.0);

    let max = if tool.unit == RadiusUnit::Percent { 50.0 } else { 100.0 };
    let mut all = tool.corner(Corner::TopLeft);
    if numeric_field(ui, "All corners", &mut all, 0.0..=max, cx.policy) {
        tool.set_all(all);
    }
    for corner in Corner::ALL {
        let mut value = tool.corner(corner);
        if numeric_field(ui, corner.label(), &mut value, 0.0..=max, cx.policy) {
            tool.set_corner(corner, value);
        }
    }
    keyword_combo(ui, "Unit", &mut tool.unit);

    ui.separator();
    let size_max = if tool.unit == RadiusUnit::Percent { 100.0 } else { 400.0 };
    numeric_field(ui, "Width", &mut tool.width, 50.0..=size_max, cx.policy);
    numeric_field(ui, "Height", &mut tool.height, 50.0..=size_max, cx.policy);
    color_field(ui, "Background", &mut tool.background);

    ui.separator();
    CodeBlock::new("border-radius", &tool.emit()).show(ui, cx);
}

fn presets(ui: &mut Ui, tool: &mut BorderRadiusTool, page: &mut ToolPage, cx: &mut PanelContext<'_>) {
    let catalog = cx.catalog;
    category_filter(ui, &catalog.border_radii, &mut page.category);
    ui.horizontal_wrapped(|ui| {
        for preset in filter_by_category(&catalog.border_radii, &page.category) {
            let radius = preset.corners().join(" ");
            let style = StyleDescriptor::new()
                .with(StyleProperty::BackgroundColor, tool.background.clone())
                .with(StyleProperty::BorderRadius, radius);
            if preset_swatch(ui, &preset.name, &style, cx) {
                tool.load_preset(preset);
                page.tab = ToolTab::Editor;
            }
        }
    });
}
