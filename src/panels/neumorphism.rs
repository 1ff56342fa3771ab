use egui::{vec2, Align2, Color32, FontId, Rect, Sense, Stroke, Ui};

use super::PanelContext;
use crate::css::StyleProperty;
use crate::generator::Generator;
use crate::renderer::{color32, element_size};
use crate::tools::neumorphism::{NeumorphShape, PALETTES};
use crate::tools::NeumorphismTool;
use crate::widgets::{color_field, keyword_combo, numeric_field, CodeBlock};

pub(super) fn neumorphism_panel(ui: &mut Ui, tool: &mut NeumorphismTool, cx: &mut PanelContext<'_>) {
    let style = tool.preview();
    let area = vec2(ui.available_width().max(360.0), 380.0);
    let (response, painter) = ui.allocate_painter(area, Sense::hover());
    let surface = color32(&tool.settings.background).unwrap_or(Color32::from_gray(224));
    painter.rect_filled(response.rect, 8.0, surface);
    let element = element_size(&style, area, vec2(200.0, 200.0));
    let rect = Rect::from_center_size(response.rect.center(), element);
    cx.renderer.paint_box(&painter, rect, &style);
    let text = style.get(StyleProperty::Color).and_then(color32).unwrap_or(Color32::GRAY);
    painter.text(rect.center(), Align2::CENTER_CENTER, "Neumorphism", FontId::proportional(14.0), text);
    ui.add_space(8.0);

    let s = &mut tool.settings;
    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.strong("Shape");
        keyword_combo(ui, "Shape", &mut s.shape);
        keyword_combo(ui, "Style", &mut s.style);
        numeric_field(ui, "Size", &mut s.size, 100.0..=300.0, cx.policy);
        if s.shape == NeumorphShape::Square {
            numeric_field(ui, "Border radius", &mut s.border_radius, 0.0..=50.0, cx.policy);
        }
        numeric_field(ui, "Padding", &mut s.padding, 0.0..=50.0, cx.policy);

        let ui = &mut columns[1];
        ui.strong("Shadow");
        numeric_field(ui, "Distance", &mut s.distance, 1.0..=20.0, cx.policy);
        numeric_field(ui, "Intensity", &mut s.intensity, 0.1..=2.0, cx.policy);
        numeric_field(ui, "Blur", &mut s.blur, 0.0..=50.0, cx.policy);
        color_field(ui, "Background", &mut s.background);
        color_field(ui, "Light shadow", &mut s.light_shadow);
        color_field(ui, "Dark shadow", &mut s.dark_shadow);
    });

    ui.separator();
    ui.strong("Palettes");
    ui.horizontal_wrapped(|ui| {
        for palette in PALETTES {
            let (response, painter) = ui.allocate_painter(vec2(48.0, 48.0), Sense::click());
            let fill = color32(palette.background).unwrap_or(Color32::GRAY);
            painter.rect_filled(response.rect, 8.0, fill);
            if let Some(dark) = color32(palette.dark) {
                painter.rect_stroke(response.rect.shrink(1.0), 8.0, Stroke::new(2.0, dark));
            }
            let response = response.on_hover_text(palette.background);
            if response.clicked() {
                s.background = palette.background.to_owned();
                s.light_shadow = palette.light.to_owned();
                s.dark_shadow = palette.dark.to_owned();
            }
        }
    });

    ui.separator();
    CodeBlock::new("neumorphism", &tool.emit()).show(ui, cx);
}
