use egui::{vec2, Align2, Color32, FontId, Rect, Sense, Ui};

use super::PanelContext;
use crate::catalog::ButtonSpec;
use crate::css::StyleProperty;
use crate::renderer::color32;
use crate::route::Route;
use crate::tools::ButtonGallery;

const CARD_WIDTH: f32 = 220.0;
const BUTTON_SIZE: egui::Vec2 = vec2(150.0, 44.0);

pub fn button_gallery_panel(ui: &mut Ui, gallery: &mut ButtonGallery, cx: &mut PanelContext<'_>) {
    ui.heading(Route::ButtonGallery.title());
    ui.label(Route::ButtonGallery.description());
    ui.separator();

    let mut selected = None;
    ui.horizontal_wrapped(|ui| {
        for category in gallery.categories() {
            if ui
                .selectable_label(gallery.selected_category() == category.id, category.name)
                .clicked()
            {
                selected = Some(category.id);
            }
        }
    });
    if let Some(id) = selected {
        gallery.select_category(id);
    }
    ui.add_space(8.0);

    let catalog = cx.catalog;
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for button in gallery.visible(&catalog.buttons) {
                ui.push_id(&button.id, |ui| button_card(ui, gallery, button, cx));
            }
        });
    });
}

fn button_card(ui: &mut Ui, gallery: &mut ButtonGallery, button: &ButtonSpec, cx: &mut PanelContext<'_>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical_centered(|ui| {
            ui.strong(&button.name);

            let (response, painter) = ui.allocate_painter(vec2(CARD_WIDTH, 80.0), Sense::hover());
            let rect = Rect::from_center_size(response.rect.center(), BUTTON_SIZE);
            let clicked = ui.interact(rect, ui.id().with("preview"), Sense::click()).clicked();
            let style = gallery.preview_style(button);
            cx.renderer.paint_box(&painter, rect, &style);
            let text = style
                .get(StyleProperty::Color)
                .and_then(color32)
                .unwrap_or(Color32::WHITE);
            let label = if gallery.is_loading(button) { "…" } else { button.label() };
            painter.text(rect.center(), Align2::CENTER_CENTER, label, FontId::proportional(15.0), text);
            if clicked {
                gallery.toggle_loading(button);
            }
            if button.has_loading_state() {
                ui.weak("Click to toggle loading");
            }

            ui.horizontal(|ui| {
                let css_key = format!("button-css-{}", button.id);
                let css_label = if cx.is_copied(&css_key) { "✔ Copied!" } else { "📋 CSS" };
                if ui.button(css_label).clicked() {
                    cx.copy(&css_key, &button.full_css());
                }
                let html_key = format!("button-html-{}", button.id);
                let html_label = if cx.is_copied(&html_key) { "✔ Copied!" } else { "📋 HTML" };
                if ui.button(html_label).clicked() {
                    cx.copy(&html_key, &button.html);
                }
            });
        });
    });
}
