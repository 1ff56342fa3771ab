use egui::{Color32, FontId, RichText, ScrollArea, Ui};

use crate::panels::PanelContext;

/// Read-only monospace code with a copy button that flips to "Copied!"
/// for a while after a successful copy.
pub struct CodeBlock<'a> {
    key: &'a str,
    code: &'a str,
    title: &'a str,
}

impl<'a> CodeBlock<'a> {
    pub fn new(key: &'a str, code: &'a str) -> Self {
        Self { key, code, title: "CSS Code" }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn show(self, ui: &mut Ui, cx: &mut PanelContext<'_>) {
        ui.horizontal(|ui| {
            ui.strong(self.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if cx.is_copied(self.key) { "✔ Copied!" } else { "📋 Copy" };
                if ui.button(label).clicked() {
                    cx.copy(self.key, self.code);
                }
            });
        });
        egui::Frame::none()
            .fill(if ui.visuals().dark_mode {
                Color32::from_gray(24)
            } else {
                Color32::from_gray(240)
            })
            .rounding(6.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt(self.key)
                    .max_height(240.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(self.code).font(FontId::monospace(13.0)));
                    });
            });
    }
}
