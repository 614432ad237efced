//! Header panel UI rendering
//!
//! Handles the top bar with the story selector, table controls and theme toggle.

use eframe::egui;
use crate::app::AppState;
use crate::stories::Story;

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("Story:");

        let mut selected = state.story.current();
        egui::ComboBox::from_id_salt("story_selector")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for story in Story::ALL {
                    ui.selectable_value(&mut selected, story, story.label());
                }
            });
        state.story.select(selected);

        if selected == Story::Table {
            ui.separator();

            let mut rows = state.story.row_count();
            let mut seed = state.story.seed();
            ui.label("Rows:");
            let rows_changed = ui
                .add(egui::DragValue::new(&mut rows).range(0..=10_000))
                .changed();
            ui.label("Seed:");
            let seed_changed = ui.add(egui::DragValue::new(&mut seed)).changed();

            if rows_changed || seed_changed {
                state.story.regenerate(rows, seed);
            }

            if ui.button("🎲 Shuffle").clicked() {
                state.story.regenerate(rows, seed.wrapping_add(1));
            }
        }

        // Push theme toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.dark_mode { "☀ Light" } else { "🌙 Dark" };
            if ui.button(label).clicked() {
                state.dark_mode = !state.dark_mode;
                ui.ctx().request_repaint();
            }
        });
    });
}
