//! Status bar UI rendering
//!
//! Shows how many widgets the resize registry currently observes.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Formats the registry statistics shown in the status bar.
pub fn format_registry_status(mounted: usize, last_batch: usize) -> String {
    format!("Observed tails: {} | Last resize batch: {}", mounted, last_batch)
}

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let (mounted, last_batch) = state
            .registry()
            .map(|registry| (registry.len(), registry.last_dispatched()))
            .unwrap_or((0, 0));

        ui.label(RichText::new(format_registry_status(mounted, last_batch)).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(state.story.current().label()).strong());
    });
}
