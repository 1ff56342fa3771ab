use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Catalog;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::ToolboxConfig;
use crate::error::ToolboxError;
use crate::export::{platform_sink, ExportSink};
use crate::generator::ToolKind;
use crate::notify::Notifier;
use crate::panels::{self, home, sidebar, PanelContext, ToolPage};
use crate::renderer::Renderer;
use crate::route::Route;
use crate::tools::{ButtonGallery, TailwindColors};
use crate::util::time::current_time_secs;

/// What the central panel shows. Rebuilt from scratch on every navigation,
/// so leaving a page discards its edits.
#[derive(Debug, Clone)]
pub enum Page {
    Home { search: String },
    Tool { tool: ToolKind, page: ToolPage },
    Buttons(ButtonGallery),
    Tailwind(TailwindColors),
}

impl Page {
    pub fn for_route(route: Route, catalog: &Catalog) -> Self {
        if let Some(tool) = ToolKind::for_route(route, catalog) {
            return Self::Tool {
                tool,
                page: ToolPage::default(),
            };
        }
        match route {
            Route::ButtonGallery => Self::Buttons(ButtonGallery::new()),
            Route::TailwindColors => Self::Tailwind(TailwindColors::new()),
            _ => Self::Home {
                search: String::new(),
            },
        }
    }
}

pub struct ToolboxApp {
    config: ToolboxConfig,
    /// The load error is kept as text for the error screen
    catalog: Result<Arc<Catalog>, String>,
    route: Route,
    page: Page,
    notifier: Notifier,
    rng: StdRng,
    renderer: Renderer,
    clipboard: Box<dyn ClipboardSink>,
    export: Box<dyn ExportSink>,
}

impl ToolboxApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let config: ToolboxConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_config(&cc.egui_ctx, config)
    }

    pub fn with_config(ctx: &egui::Context, config: ToolboxConfig) -> Self {
        apply_theme(ctx, config.dark_mode);
        let catalog = Catalog::load().map(Arc::new).map_err(|err| {
            let err = ToolboxError::from(err);
            log::error!("Failed to load the preset catalog: {err}");
            err.to_string()
        });
        let export = platform_sink(&config);
        Self::with_parts(config, catalog, Box::new(SystemClipboard::new(ctx)), export)
    }

    /// Assembles the app around the given sinks.
    pub fn with_parts(
        config: ToolboxConfig,
        catalog: Result<Arc<Catalog>, String>,
        clipboard: Box<dyn ClipboardSink>,
        export: Box<dyn ExportSink>,
    ) -> Self {
        let notifier = Notifier::new(config.notification_secs, config.copied_indicator_secs);
        Self {
            config,
            catalog,
            route: Route::Home,
            page: Page::Home {
                search: String::new(),
            },
            notifier,
            rng: StdRng::from_os_rng(),
            renderer: Renderer,
            clipboard,
            export,
        }
    }

    pub fn config(&self) -> &ToolboxConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ToolboxConfig {
        &mut self.config
    }

    /// Updates the toast and copied-indicator durations, in seconds.
    pub fn set_timer_durations(&mut self, notification_secs: f64, copied_secs: f64) {
        self.config.notification_secs = notification_secs;
        self.config.copied_indicator_secs = copied_secs;
        self.notifier.set_durations(notification_secs, copied_secs);
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Switches to `route` with a fresh page. Re-selecting the current
    /// route keeps its state.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        let Ok(catalog) = &self.catalog else {
            return;
        };
        log::info!("Navigating to {}", route.path());
        self.page = Page::for_route(route, catalog);
        self.route = route;
    }

    fn central_panel(&mut self, ui: &mut egui::Ui, now: f64) {
        let catalog = match &self.catalog {
            Ok(catalog) => Arc::clone(catalog),
            Err(err) => {
                error_screen(ui, err);
                return;
            }
        };

        let mut cx = PanelContext {
            catalog: &catalog,
            clipboard: self.clipboard.as_mut(),
            export: self.export.as_mut(),
            notifier: &mut self.notifier,
            rng: &mut self.rng,
            policy: self.config.numeric_policy,
            renderer: self.renderer,
            now,
        };

        let mut target = None;
        match &mut self.page {
            Page::Home { search } => target = home::home_panel(ui, search),
            Page::Tool { tool, page } => panels::tool_panel(ui, tool, page, &mut cx),
            Page::Buttons(gallery) => panels::button_gallery_panel(ui, gallery, &mut cx),
            Page::Tailwind(colors) => panels::tailwind_panel(ui, colors, &mut cx),
        }
        if let Some(route) = target {
            self.navigate(route);
        }
    }
}

pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

fn error_screen(ui: &mut egui::Ui, err: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading("Something went wrong");
        ui.label("The preset catalog could not be loaded.");
        ui.colored_label(ui.visuals().error_fg_color, err);
    });
}

impl eframe::App for ToolboxApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = current_time_secs();
        self.notifier.prune(now);

        sidebar::sidebar(self, ctx);
        egui::CentralPanel::default().show(ctx, |ui| self.central_panel(ui, now));

        self.notifier.show(ctx);
        if let Some(delay) = self.notifier.next_expiry(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(delay.max(0.0)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::export::MemoryExport;

    fn app() -> ToolboxApp {
        let catalog = Catalog::load().map(Arc::new).map_err(|e| e.to_string());
        ToolboxApp::with_parts(
            ToolboxConfig::default(),
            catalog,
            Box::new(MemoryClipboard::default()),
            Box::new(MemoryExport::default()),
        )
    }

    #[test]
    fn test_starts_on_home() {
        let app = app();
        assert_eq!(app.route(), Route::Home);
        assert!(matches!(app.page(), Page::Home { .. }));
    }

    #[test]
    fn test_navigation_builds_fresh_pages() {
        let mut app = app();
        app.navigate(Route::CssGrid);
        assert!(matches!(app.page(), Page::Tool { tool: ToolKind::Grid(_), .. }));
        app.navigate(Route::ButtonGallery);
        assert!(matches!(app.page(), Page::Buttons(_)));
        app.navigate(Route::TailwindColors);
        assert!(matches!(app.page(), Page::Tailwind(_)));

        app.navigate(Route::Gradient);
        if let Page::Tool { tool: ToolKind::Gradient(t), .. } = &mut app.page {
            t.add_stop();
        }
        app.navigate(Route::Home);
        app.navigate(Route::Gradient);
        let Page::Tool { tool: ToolKind::Gradient(t), .. } = app.page() else {
            panic!("expected the gradient tool");
        };
        assert_eq!(t.stops().len(), 2);
    }

    #[test]
    fn test_timer_durations_reach_the_notifier() {
        let mut app = app();
        app.set_timer_durations(0.5, 3.0);
        assert_eq!(app.config().copied_indicator_secs, 3.0);
        assert_eq!(app.config().notification_secs, 0.5);

        app.notifier.mark_copied("gradient", 0.0);
        assert!(app.notifier.is_copied("gradient", 2.5));
        app.notifier.success("Copied to clipboard!", 0.0);
        app.notifier.prune(0.6);
        assert!(app.notifier.active().is_empty());
    }

    #[test]
    fn test_broken_catalog_stays_home() {
        let mut app = ToolboxApp::with_parts(
            ToolboxConfig::default(),
            Err("bad json".to_owned()),
            Box::new(MemoryClipboard::default()),
            Box::new(MemoryExport::default()),
        );
        app.navigate(Route::Flexbox);
        assert_eq!(app.route(), Route::Home);
    }
}
