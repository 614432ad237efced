//! Gallery panel UI rendering
//!
//! Shows one text inside boxes of fixed widths, plus one box whose width
//! follows a slider so the resize path can be watched live.

use eframe::egui;
use egui::{Color32, Stroke};
use tailed_ellipsis::{ResizeRegistry, TailedEllipsis};

use crate::app::AppState;
use crate::state::CUSTOM_WIDTH_RANGE;
use crate::stories::{GallerySpec, Story};

/// Renders the gallery for `story`
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `story` - Story to render; must have a gallery
pub fn render_gallery_panel(ui: &mut egui::Ui, state: &mut AppState, story: Story) {
    let Some(spec) = story.gallery() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label("Custom width:");
        ui.add(egui::Slider::new(state.layout.custom_width_mut(), CUSTOM_WIDTH_RANGE).suffix(" px"));
    });
    ui.separator();

    let custom_width = state.layout.custom_width();
    let registry = state.registry_mut();

    egui::ScrollArea::vertical()
        .id_salt("gallery_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, &width) in spec.widths.iter().enumerate() {
                render_gallery_box(ui, registry, &spec, width, (story, i));
            }

            ui.add_space(10.0);
            ui.label(format!("Custom ({:.0} px):", custom_width));
            render_gallery_box(ui, registry, &spec, custom_width, (story, "custom"));
        });
}

/// One bordered box of the given content width holding the widget.
fn render_gallery_box(
    ui: &mut egui::Ui,
    registry: &mut ResizeRegistry,
    spec: &GallerySpec,
    width: f32,
    id_salt: impl std::hash::Hash,
) {
    egui::Frame::NONE
        .stroke(Stroke::new(1.0, Color32::GRAY))
        .inner_margin(5.0)
        .outer_margin(5.0)
        .show(ui, |ui| {
            ui.set_width(width);
            TailedEllipsis::new(spec.text, spec.tail_length)
                .title(spec.text)
                .id_salt(id_salt)
                .show(ui, registry);
        });
}
