use crate::app::{apply_theme, ToolboxApp};
use crate::components::ToolCard;
use crate::policy::NumericPolicy;
use crate::route::Route;

pub fn sidebar(app: &mut ToolboxApp, ctx: &egui::Context) {
    let collapsed = app.config().sidebar_collapsed;
    egui::SidePanel::left("sidebar")
        .resizable(!collapsed)
        .exact_width(if collapsed { 56.0 } else { 220.0 })
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if !collapsed {
                    ui.heading("Toolbox");
                }
                let toggle = if collapsed { "▶" } else { "◀" };
                if ui.small_button(toggle).on_hover_text("Toggle sidebar").clicked() {
                    app.config_mut().sidebar_collapsed = !collapsed;
                }
            });
            ui.separator();

            let active = app.route();
            let mut target = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                for &route in Route::ALL {
                    let selected = active == route;
                    let clicked = if collapsed {
                        ToolCard::new(route, selected).compact().show(ui).clicked()
                    } else {
                        ui.selectable_label(selected, format!("{}  {}", route.icon(), route.title()))
                            .clicked()
                    };
                    if clicked {
                        log::info!("Page selected from sidebar: {}", route.title());
                        target = Some(route);
                    }
                }
            });
            if let Some(route) = target {
                app.navigate(route);
            }

            ui.separator();
            let dark = app.config().dark_mode;
            let theme = match (dark, collapsed) {
                (true, true) => "☀".to_owned(),
                (false, true) => "🌙".to_owned(),
                (true, false) => "☀ Light mode".to_owned(),
                (false, false) => "🌙 Dark mode".to_owned(),
            };
            if ui.button(theme).clicked() {
                app.config_mut().dark_mode = !dark;
                apply_theme(ctx, !dark);
            }

            if !collapsed {
                ui.collapsing("Settings", |ui| {
                    ui.label("Typed numbers outside a slider");
                    let policy = &mut app.config_mut().numeric_policy;
                    for option in [NumericPolicy::PassThrough, NumericPolicy::Clamp] {
                        ui.radio_value(policy, option, option.label());
                    }

                    ui.add_space(6.0);
                    let mut notification = app.config().notification_secs;
                    let mut copied = app.config().copied_indicator_secs;
                    let mut changed = false;
                    ui.horizontal(|ui| {
                        ui.label("Toast (s)");
                        changed |= ui
                            .add(egui::DragValue::new(&mut notification).range(0.2..=10.0).speed(0.1))
                            .changed();
                    });
                    ui.horizontal(|ui| {
                        ui.label("Copied mark (s)");
                        changed |= ui
                            .add(egui::DragValue::new(&mut copied).range(0.2..=10.0).speed(0.1))
                            .changed();
                    });
                    if changed {
                        app.set_timer_durations(notification, copied);
                    }
                });
            }
        });
}
