use egui::{vec2, Align2, Color32, FontId, Rect, Sense, Ui};

use super::{preset_swatch, PanelContext};
use crate::css::{StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::tools::glassmorphism::{BACKDROPS, GLASS_PRESETS, IMAGE_PLACEHOLDER};
use crate::tools::GlassmorphismTool;
use crate::widgets::{numeric_field, text_field, CodeBlock};

const CARD_SIZE: egui::Vec2 = vec2(300.0, 200.0);

fn backdrop_style(value: &str) -> StyleDescriptor {
    StyleDescriptor::new()
        .with(StyleProperty::Background, value)
        .with(StyleProperty::BorderRadius, "8px")
}

pub(super) fn glassmorphism_panel(ui: &mut Ui, tool: &mut GlassmorphismTool, cx: &mut PanelContext<'_>) {
    let width = ui.available_width().max(360.0);
    let (response, painter) = ui.allocate_painter(vec2(width, 320.0), Sense::hover());
    let backdrop = tool.backdrop();
    match backdrop.image_url() {
        Some(url) => {
            cx.renderer.paint_box(&painter, response.rect, &backdrop_style(IMAGE_PLACEHOLDER));
            egui::Image::new(url).rounding(8.0).paint_at(ui, response.rect);
        }
        None => cx.renderer.paint_box(&painter, response.rect, &backdrop_style(backdrop.value)),
    }
    let card = Rect::from_center_size(response.rect.center(), CARD_SIZE);
    cx.renderer.paint_box(&painter, card, &tool.preview());
    painter.text(
        card.center(),
        Align2::CENTER_CENTER,
        "Glassmorphism",
        FontId::proportional(22.0),
        Color32::WHITE,
    );
    ui.add_space(8.0);

    egui::ComboBox::from_id_salt("glass-backdrop")
        .selected_text(tool.backdrop().name)
        .show_ui(ui, |ui| {
            for (index, backdrop) in BACKDROPS.iter().enumerate() {
                ui.selectable_value(&mut tool.backdrop, index, backdrop.name);
            }
        });

    text_field(ui, "Background", &mut tool.background);
    numeric_field(ui, "Backdrop blur", &mut tool.backdrop_blur, 0.0..=20.0, cx.policy);
    numeric_field(ui, "Border radius", &mut tool.border_radius, 0.0..=50.0, cx.policy);
    text_field(ui, "Border", &mut tool.border);
    text_field(ui, "Box shadow", &mut tool.box_shadow);

    ui.separator();
    ui.strong("Presets");
    ui.horizontal_wrapped(|ui| {
        for preset in GLASS_PRESETS {
            let style = StyleDescriptor::new()
                .with(StyleProperty::Background, preset.background)
                .with(StyleProperty::BorderRadius, format!("{}px", preset.border_radius))
                .with(StyleProperty::Border, preset.border)
                .with(StyleProperty::BoxShadow, preset.box_shadow);
            if preset_swatch(ui, preset.name, &style, cx) {
                tool.load_preset(preset);
            }
        }
    });

    ui.separator();
    CodeBlock::new("glassmorphism", &tool.emit()).show(ui, cx);
}
