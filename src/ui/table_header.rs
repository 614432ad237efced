//! Table header component rendering
//!
//! Handles the rendering of resizable column headers for the table story.
//! Header labels are tailed themselves, so narrow columns keep the end of
//! their name.

use eframe::egui;
use egui::Color32;
use tailed_ellipsis::{ResizeRegistry, TailedEllipsis};

use crate::state::{LayoutState, COLUMN_NAMES};

/// Height of the header row
pub const HEADER_HEIGHT: f32 = 24.0;

/// Horizontal padding inside each cell
pub const CELL_PADDING: f32 = 4.0;

/// Renders the resizable column headers for the table
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `layout` - Mutable reference to layout state containing column_widths
/// * `registry` - Resize registry shared by the header labels
pub fn render_table_header(ui: &mut egui::Ui, layout: &mut LayoutState, registry: &mut ResizeRegistry) {
    let start_pos = ui.cursor().min;
    let widths = *layout.column_widths();
    let total_width: f32 = widths.iter().sum();

    // Reserve space for the entire header row
    let (header_rect, _) = ui.allocate_exact_size(
        egui::vec2(total_width, HEADER_HEIGHT),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(header_rect, 0.0, ui.visuals().faint_bg_color);

    let mut x_offset = 0.0;
    for (i, name) in COLUMN_NAMES.iter().enumerate() {
        let width = widths[i];

        let label_rect = egui::Rect::from_min_size(
            egui::pos2(start_pos.x + x_offset + CELL_PADDING, start_pos.y),
            egui::vec2((width - 2.0 * CELL_PADDING).max(0.0), HEADER_HEIGHT),
        );
        let mut label_ui = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(label_rect)
                .layout(egui::Layout::left_to_right(egui::Align::Center)),
        );
        let strong = label_ui.visuals().strong_text_color();
        TailedEllipsis::new(name, 3)
            .text_style(egui::TextStyle::Button)
            .color(strong)
            .id_salt(("header", i))
            .show(&mut label_ui, registry);

        x_offset += width;

        // Column resize handle on the right edge of every column
        let handle_width = 8.0;
        let handle_rect = egui::Rect::from_center_size(
            egui::pos2(start_pos.x + x_offset, start_pos.y + HEADER_HEIGHT / 2.0),
            egui::vec2(handle_width, HEADER_HEIGHT),
        );

        let handle_id = ui.id().with(("header_resize", i));
        let handle_response = ui.interact(handle_rect, handle_id, egui::Sense::drag());

        // Handle dragging
        if handle_response.dragged() {
            layout.resize_column(i, handle_response.drag_delta().x);
        }

        // Visual feedback
        let color = if handle_response.hovered() || handle_response.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
            Color32::from_rgb(100, 150, 255)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color.gamma_multiply(0.5)
        };

        ui.painter().rect_filled(handle_rect.shrink(2.0), 0.0, color);
    }
}
