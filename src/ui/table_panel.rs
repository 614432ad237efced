//! Table panel UI rendering
//!
//! Renders the generated rows with one tailed cell per column. Rows are not
//! virtualized; every row stays mounted while the table story is shown.

use eframe::egui;
use tailed_ellipsis::TailedEllipsis;

use crate::app::AppState;
use crate::stories::TABLE_TAIL_LENGTH;
use crate::ui::table_header::{render_table_header, CELL_PADDING};

/// Height of one table row
pub const ROW_HEIGHT: f32 = 22.0;

/// Renders the table story
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_table_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let (story, layout, registry) = state.table_parts_mut();

    egui::ScrollArea::both()
        .id_salt("table_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_table_header(ui, layout, registry);

            let widths = *layout.column_widths();
            let stripe = ui.visuals().faint_bg_color;

            for (row_index, row) in story.rows().iter().enumerate() {
                let row_start = ui.cursor().min;
                let total_width: f32 = widths.iter().sum();
                let (row_rect, _) = ui.allocate_exact_size(
                    egui::vec2(total_width, ROW_HEIGHT),
                    egui::Sense::hover(),
                );

                if row_index % 2 == 1 {
                    ui.painter().rect_filled(row_rect, 0.0, stripe);
                }

                let mut x_offset = 0.0;
                for (column, (text, width)) in row.cells().into_iter().zip(widths).enumerate() {
                    let cell_rect = egui::Rect::from_min_size(
                        egui::pos2(row_start.x + x_offset + CELL_PADDING, row_start.y),
                        egui::vec2((width - 2.0 * CELL_PADDING).max(0.0), ROW_HEIGHT),
                    );
                    let mut cell_ui = ui.new_child(
                        egui::UiBuilder::new()
                            .max_rect(cell_rect)
                            .layout(egui::Layout::left_to_right(egui::Align::Center)),
                    );
                    TailedEllipsis::new(text, TABLE_TAIL_LENGTH)
                        .title(text)
                        .id_salt(("cell", row_index, column))
                        .show(&mut cell_ui, registry);
                    x_offset += width;
                }
            }
        });
}
