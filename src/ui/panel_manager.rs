//! Panel orchestration and layout management.
//!
//! Coordinates the header, status bar and the story panel.

use crate::app::AppState;
use crate::stories::Story;
use crate::ui::{gallery_panel, header, status_bar, table_panel};

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) {
        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render_header(ui, state);
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let story_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(story_frame)
            .show(ctx, |ui| {
                let story = state.story.current();
                ui.heading(story.label());
                ui.separator();

                match story {
                    Story::Table => table_panel::render_table_panel(ui, state),
                    _ => gallery_panel::render_gallery_panel(ui, state, story),
                }
            });
    }
}
