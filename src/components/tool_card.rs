use eframe::egui;

use crate::route::Route;

/// A clickable entry for one page: a square icon button when `compact`,
/// otherwise a card with the page title and description.
pub struct ToolCard {
    pub route: Route,
    pub selected: bool,
    pub compact: bool,
}

impl ToolCard {
    pub fn new(route: Route, selected: bool) -> Self {
        Self {
            route,
            selected,
            compact: false,
        }
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = if self.compact {
            egui::vec2(36.0, 36.0)
        } else {
            egui::vec2(260.0, 120.0)
        };
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let dark = ui.visuals().dark_mode;
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246)
            } else if response.hovered() {
                if dark { egui::Color32::from_gray(48) } else { egui::Color32::from_gray(225) }
            } else if dark {
                egui::Color32::from_gray(32)
            } else {
                egui::Color32::from_gray(245)
            };
            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                ui.visuals().text_color()
            };
            let painter = ui.painter();
            painter.rect_filled(rect, 8.0, bg_color);

            if self.compact {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    self.route.icon(),
                    egui::FontId::proportional(20.0),
                    text_color,
                );
            } else {
                let left = rect.left_top() + egui::vec2(16.0, 16.0);
                painter.text(
                    left,
                    egui::Align2::LEFT_TOP,
                    format!("{}  {}", self.route.icon(), self.route.title()),
                    egui::FontId::proportional(17.0),
                    text_color,
                );
                let galley = painter.layout(
                    self.route.description().to_owned(),
                    egui::FontId::proportional(13.0),
                    ui.visuals().weak_text_color(),
                    rect.width() - 32.0,
                );
                painter.galley(left + egui::vec2(0.0, 32.0), galley, text_color);
            }

            if self.selected || response.hovered() {
                painter.rect_stroke(
                    rect,
                    8.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        if self.compact {
            response.on_hover_text(self.route.title())
        } else {
            response
        }
    }
}
