use egui::Ui;

use crate::components::ToolCard;
use crate::route::{search, Route};

/// The landing page: a search box over the tool cards. Returns the route
/// of a clicked card.
pub fn home_panel(ui: &mut Ui, term: &mut String) -> Option<Route> {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading("Frontend Toolbox");
        ui.label(Route::Home.description());
        ui.add_space(12.0);
        ui.add(
            egui::TextEdit::singleline(term)
                .hint_text("🔍 Search tools...")
                .desired_width(360.0),
        );
    });
    ui.add_space(16.0);

    let routes = search(term);
    if routes.is_empty() {
        ui.vertical_centered(|ui| {
            ui.weak(format!("No tools found matching \"{}\"", term.trim()));
        });
        return None;
    }

    let mut target = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
            for route in routes {
                if ToolCard::new(route, false).show(ui).clicked() {
                    log::debug!("Opened {} from the home page", route.title());
                    target = Some(route);
                }
            }
        });
    });
    target
}
