//! Applies light or dark visuals.

use crate::app::AppState;

/// Coordinates visual theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame; a theme change re-lays out text and is picked up
    /// by the tail measurements on the next pass.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let visuals = if state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }
}
