use egui::{vec2, Align2, Color32, FontId, Sense, Stroke, Ui};

use super::{capitalize, PanelContext};
use crate::renderer::color32;
use crate::route::Route;
use crate::tools::TailwindColors;

const SWATCH: egui::Vec2 = vec2(72.0, 56.0);

pub fn tailwind_panel(ui: &mut Ui, colors: &mut TailwindColors, cx: &mut PanelContext<'_>) {
    ui.heading(Route::TailwindColors.title());
    ui.label(Route::TailwindColors.description());
    ui.weak("Click a swatch to copy its hex value");
    ui.separator();

    let catalog = cx.catalog;
    let palette = &catalog.tailwind;
    egui::ScrollArea::both().show(ui, |ui| {
        for family in &palette.families {
            ui.push_id(&family.name, |ui| {
                ui.strong(capitalize(&family.name));
                ui.horizontal(|ui| {
                    for shade in &family.shades {
                        let (response, painter) = ui.allocate_painter(SWATCH, Sense::click());
                        let fill = color32(&shade.hex).unwrap_or(Color32::GRAY);
                        let text = color32(shade.text_color()).unwrap_or(Color32::BLACK);
                        painter.rect_filled(response.rect, 6.0, fill);
                        let key = TailwindColors::class_name(&family.name, shade);
                        // The mark lasts as long as the copied indicator
                        let label = if colors.is_copied(&family.name, shade) && cx.is_copied(&key) {
                            "Copied!".to_owned()
                        } else {
                            shade.shade.clone()
                        };
                        painter.text(
                            response.rect.center() - vec2(0.0, 8.0),
                            Align2::CENTER_CENTER,
                            label,
                            FontId::proportional(13.0),
                            text,
                        );
                        painter.text(
                            response.rect.center() + vec2(0.0, 10.0),
                            Align2::CENTER_CENTER,
                            &shade.hex,
                            FontId::monospace(10.0),
                            text,
                        );
                        if response.hovered() {
                            painter.rect_stroke(response.rect, 6.0, Stroke::new(2.0, text));
                        }
                        let response = response.on_hover_text(&key);
                        if response.clicked() {
                            let hex = colors.copy(&family.name, shade);
                            if !cx.copy(&key, &hex) {
                                colors.clear_copied();
                            }
                        }
                    }
                });
                ui.add_space(6.0);
            });
        }
    });
}
