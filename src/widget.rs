//! The tailed ellipsis widget
//!
//! Renders a string as two adjacent runs: a head that is elided with `…`
//! when space runs out, and a tail of fixed character length that is always
//! painted in full. The tail width is tracked through a shared
//! [`ResizeRegistry`]; the head gets whatever the container has left.

use std::hash::Hash;
use std::sync::Arc;

use egui::text::{LayoutJob, TextFormat, TextWrapping};
use egui::{Color32, FontId, Galley, Id, Painter, Response, Sense, TextStyle, Ui};

use crate::layout::{plan_truncation, TruncationPlan, MIN_HEAD_CHARS};
use crate::registry::ResizeRegistry;
use crate::split::tail_start;

/// Per-widget state kept in egui memory between passes.
///
/// Removed again when the registry drops the widget's tail fragment.
#[derive(Debug, Clone, Copy, Default)]
struct TailState {
    /// Last width delivered by the registry, in whole pixels
    tail_width: Option<u32>,
}

/// Text truncated from the head while its last characters stay visible.
///
/// ```ignore
/// let mut registry = ResizeRegistry::new();
/// TailedEllipsis::new("quarterly-report-final.pdf", 4)
///     .title("quarterly-report-final.pdf")
///     .show(ui, &mut registry);
/// // once per frame, after every widget sharing the registry was shown
/// registry.end_pass();
/// ```
#[must_use = "You should call .show()"]
pub struct TailedEllipsis<'a> {
    text: &'a str,
    tail_length: usize,
    title: Option<&'a str>,
    text_style: Option<TextStyle>,
    color: Option<Color32>,
    id_salt: Option<Id>,
}

/// What [`TailedEllipsis::show`] did this pass.
#[derive(Debug)]
pub struct TailedEllipsisOutput {
    /// Response of the allocated area; carries the title as hover text
    pub response: Response,
    /// Id of the widget; its memory slot lives under it
    pub id: Id,
    /// Id under which the tail fragment is registered
    pub tail_id: Id,
    /// Layout decision for this pass
    pub plan: TruncationPlan,
    /// Tail width used for the plan, `None` until measured
    pub tail_width: Option<u32>,
    /// True if head characters were replaced by the ellipsis
    pub head_elided: bool,
    /// Width of the painted runs before clipping to the allocated rect
    pub content_width: f32,
}

impl<'a> TailedEllipsis<'a> {
    /// Creates a widget keeping the last `tail_length` characters of `text` visible.
    pub fn new(text: &'a str, tail_length: usize) -> Self {
        Self {
            text,
            tail_length,
            title: None,
            text_style: None,
            color: None,
            id_salt: None,
        }
    }

    /// Hover text for the whole widget.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Text style used for both runs. Defaults to [`TextStyle::Body`].
    ///
    /// Named styles (`TextStyle::Name`) registered in the egui style act as
    /// styling classes.
    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    /// Text color. Defaults to the visuals' text color.
    pub fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    /// Stable identity for the widget.
    ///
    /// Without a salt the widget uses the next auto id of the `Ui`, which is
    /// only stable while the surrounding layout does not change order.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    /// Lays out and paints the widget.
    ///
    /// The tail fragment is registered with `registry` the first time the
    /// widget is shown and measured immediately, so the first frame is already
    /// correct. Later width changes arrive through
    /// [`ResizeRegistry::end_pass`]; the pass that queued one is discarded so
    /// the stale layout is never painted. Call `end_pass` inside the same
    /// `Context::run` for this to take effect.
    pub fn show(self, ui: &mut Ui, registry: &mut ResizeRegistry) -> TailedEllipsisOutput {
        let id = match self.id_salt {
            Some(salt) => ui.make_persistent_id(salt),
            None => ui.next_auto_id(),
        };
        let tail_id = id.with("tail");

        let font_id = self
            .text_style
            .clone()
            .unwrap_or(TextStyle::Body)
            .resolve(ui.style());
        let color = self.color.unwrap_or_else(|| ui.visuals().text_color());

        let (head, tail) = self.text.split_at(tail_start(self.text, self.tail_length));

        let painter = ui.painter();
        let full_galley = painter.layout_no_wrap(self.text.to_owned(), font_id.clone(), color);
        let tail_galley = painter.layout_no_wrap(tail.to_owned(), font_id.clone(), color);
        let min_head_width = MIN_HEAD_CHARS * char_width(painter, &font_id);

        let measured_tail = tail_galley.size().x;
        if registry.is_registered(tail_id) {
            if registry.observe(tail_id, measured_tail) {
                ui.ctx().request_discard("tail width changed");
            }
        } else {
            let ctx = ui.ctx().clone();
            registry.register(
                tail_id,
                Box::new(move |width| {
                    ctx.data_mut(|d| d.get_temp_mut_or_default::<TailState>(id).tail_width = Some(width));
                    ctx.request_repaint();
                }),
            );
            let ctx = ui.ctx().clone();
            registry.on_unmount(tail_id, Box::new(move || ctx.data_mut(|d| d.remove::<TailState>(id))));
            registry.measure_now(tail_id, measured_tail);
        }

        let tail_width = ui.data(|d| d.get_temp::<TailState>(id)).and_then(|s| s.tail_width);
        let available_width = ui.available_width();
        let plan = plan_truncation(
            available_width,
            full_galley.size().x,
            tail_width,
            min_head_width,
        );

        let desired_size = egui::vec2(
            full_galley.size().x.min(available_width.max(0.0)),
            full_galley.size().y.max(tail_galley.size().y),
        );
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        let head_galley = match plan.head_max_width {
            Some(max_width) if plan.ellipsis_shown => {
                Some(layout_head(ui.painter(), head, font_id, color, max_width))
            }
            _ => None,
        };
        let head_elided = head_galley.as_ref().is_some_and(|galley| galley.elided);
        let content_width = match &head_galley {
            Some(head_galley) => head_galley.size().x + tail_galley.size().x,
            None => full_galley.size().x,
        };

        if ui.is_rect_visible(rect) {
            // Overflow past the allocated rect is hidden
            let painter = ui.painter_at(rect);
            match head_galley {
                Some(head_galley) => {
                    let head_pos = egui::pos2(rect.left(), rect.center().y - head_galley.size().y / 2.0);
                    let tail_pos = egui::pos2(
                        rect.left() + head_galley.size().x,
                        rect.center().y - tail_galley.size().y / 2.0,
                    );
                    painter.galley(head_pos, head_galley, color);
                    painter.galley(tail_pos, tail_galley, color);
                }
                None => {
                    let pos = egui::pos2(rect.left(), rect.center().y - full_galley.size().y / 2.0);
                    painter.galley(pos, full_galley, color);
                }
            }
        }

        let response = match self.title {
            Some(title) => response.on_hover_text(title),
            None => response,
        };

        TailedEllipsisOutput {
            response,
            id,
            tail_id,
            plan,
            tail_width,
            head_elided,
            content_width,
        }
    }
}

/// Width of the `0` glyph, the CSS `ch` unit.
fn char_width(painter: &Painter, font_id: &FontId) -> f32 {
    painter
        .layout_no_wrap("0".to_owned(), font_id.clone(), Color32::WHITE)
        .size()
        .x
}

/// Lays out the head on a single row, eliding with `…` past `max_width`.
fn layout_head(
    painter: &Painter,
    head: &str,
    font_id: FontId,
    color: Color32,
    max_width: f32,
) -> Arc<Galley> {
    let mut job = LayoutJob::single_section(head.to_owned(), TextFormat::simple(font_id, color));
    job.wrap = TextWrapping::truncate_at_width(max_width);
    painter.layout_job(job)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_once(width: f32, mut add: impl FnMut(&mut Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.allocate_ui(egui::vec2(width, 40.0), |ui| add(ui));
            });
        });
    }

    #[test]
    fn test_builder_defaults() {
        let widget = TailedEllipsis::new("hello", 2);
        assert_eq!(widget.text, "hello");
        assert_eq!(widget.tail_length, 2);
        assert!(widget.title.is_none());
        assert!(widget.text_style.is_none());
        assert!(widget.color.is_none());
        assert!(widget.id_salt.is_none());
    }

    #[test]
    fn test_builder_options() {
        let widget = TailedEllipsis::new("hello", 2)
            .title("greeting")
            .text_style(TextStyle::Monospace)
            .color(Color32::RED)
            .id_salt("greeting");
        assert_eq!(widget.title, Some("greeting"));
        assert_eq!(widget.text_style, Some(TextStyle::Monospace));
        assert_eq!(widget.color, Some(Color32::RED));
        assert_eq!(widget.id_salt, Some(Id::new("greeting")));
    }

    #[test]
    fn test_first_pass_is_measured() {
        let mut registry = ResizeRegistry::new();
        let mut output = None;
        run_once(800.0, |ui| {
            output = Some(TailedEllipsis::new("abcdefghij", 3).show(ui, &mut registry));
        });

        let output = output.expect("widget shown");
        assert!(output.tail_width.is_some());
        assert!(registry.is_registered(output.tail_id));
        assert_eq!(registry.delivered_width(output.tail_id), output.tail_width);
    }

    #[test]
    fn test_repeated_passes_keep_one_entry() {
        let ctx = egui::Context::default();
        let mut registry = ResizeRegistry::new();

        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    TailedEllipsis::new("report-2024.pdf", 4)
                        .id_salt("report")
                        .show(ui, &mut registry);
                });
            });
            registry.end_pass();
        }

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_memory_slot_released_on_unmount() {
        let ctx = egui::Context::default();
        let mut registry = ResizeRegistry::new();
        let mut shown = None;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                shown = Some(TailedEllipsis::new("report-2024.pdf", 4).show(ui, &mut registry));
            });
        });
        registry.end_pass();
        let id = shown.expect("widget shown").id;
        assert!(ctx.data(|d| d.get_temp::<TailState>(id)).is_some());

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |_ui| {});
        });
        registry.end_pass();
        assert!(registry.is_empty());
        assert!(ctx.data(|d| d.get_temp::<TailState>(id)).is_none());
    }
}
