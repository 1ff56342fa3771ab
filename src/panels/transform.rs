use egui::{vec2, Ui};

use super::{preview_area, PanelContext};
use crate::generator::Generator;
use crate::renderer::element_size;
use crate::tools::TransformTool;
use crate::widgets::{color_field, numeric_field, CodeBlock};

pub(super) fn transform_panel(ui: &mut Ui, tool: &mut TransformTool, cx: &mut PanelContext<'_>) {
    let area = vec2(ui.available_width().max(320.0), 360.0);
    let style = tool.preview();
    let element = element_size(&style, area, vec2(150.0, 150.0));
    preview_area(ui, area, element, &style, cx);
    ui.add_space(8.0);

    let mut reset = false;
    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.horizontal(|ui| {
            ui.strong("Transform");
            reset = ui.small_button("Reset transforms").clicked();
        });
        let t = &mut tool.transform;
        numeric_field(ui, "Rotate (deg)", &mut t.rotate, -180.0..=180.0, cx.policy);
        numeric_field(ui, "Scale X", &mut t.scale_x, 0.1..=2.0, cx.policy);
        numeric_field(ui, "Scale Y", &mut t.scale_y, 0.1..=2.0, cx.policy);
        numeric_field(ui, "Skew X (deg)", &mut t.skew_x, -45.0..=45.0, cx.policy);
        numeric_field(ui, "Skew Y (deg)", &mut t.skew_y, -45.0..=45.0, cx.policy);
        numeric_field(ui, "Translate X (px)", &mut t.translate_x, -100.0..=100.0, cx.policy);
        numeric_field(ui, "Translate Y (px)", &mut t.translate_y, -100.0..=100.0, cx.policy);

        let ui = &mut columns[1];
        ui.strong("Element");
        numeric_field(ui, "Width", &mut tool.width, 50.0..=300.0, cx.policy);
        numeric_field(ui, "Height", &mut tool.height, 50.0..=300.0, cx.policy);
        numeric_field(ui, "Border radius", &mut tool.border_radius, 0.0..=150.0, cx.policy);
        color_field(ui, "Background", &mut tool.background);
    });
    if reset {
        tool.reset_transforms();
    }

    ui.separator();
    CodeBlock::new("transform", &tool.emit()).show(ui, cx);
}
