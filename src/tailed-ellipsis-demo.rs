//! Tailed Ellipsis demo application
//!
//! Shows the `TailedEllipsis` widget in the settings it was built for:
//! - Galleries of fixed-width boxes around one text
//! - A box whose width follows a slider, to watch live resizing
//! - A table of generated rows with resizable columns
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, settings persistence and options
//! - `state/` - Story and layout state
//! - `stories/` - Story definitions and generated table data
//! - `ui/` - UI panel rendering

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod state;
mod stories;
mod ui;

use app::{AppState, DemoOptions, SettingsCoordinator, ThemeCoordinator};
use ui::panel_manager::PanelManager;

/// Initializes the demo and launches the eframe window.
fn main() -> eframe::Result {
    // Set up logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tailed_ellipsis=info,tailed_ellipsis_demo=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "tailed-ellipsis-demo".to_owned());

    let options = match app::parse_options(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {err:#}");
            app::print_usage(&program);
            std::process::exit(2);
        }
    };

    if options.help {
        app::print_usage(&program);
        return Ok(());
    }

    tracing::info!(?options, "starting tailed ellipsis demo");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("Tailed Ellipsis"),
        ..Default::default()
    };

    eframe::run_native(
        "Tailed Ellipsis",
        native_options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, &options)))),
    )
}

/// The demo application.
///
/// Rendering is delegated to `PanelManager`; the app owns the state and
/// closes every frame by flushing the resize registry.
struct DemoApp {
    state: AppState,
}

impl DemoApp {
    /// Creates the app from persisted settings and command-line options.
    fn new(cc: &eframe::CreationContext, options: &DemoOptions) -> Self {
        let settings = SettingsCoordinator::load(cc.storage);
        Self {
            state: AppState::from_settings(settings, options),
        }
    }
}

impl eframe::App for DemoApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save(storage, &self.state.settings());
    }

    /// Main update loop.
    ///
    /// 1. Apply theme
    /// 2. Render all panels via PanelManager
    /// 3. Deliver resize reports collected while rendering
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        PanelManager::render_all_panels(ctx, &mut self.state);

        self.state.end_pass();
    }
}
