//! Truncation planning
//!
//! Pure width arithmetic shared by the widget and its tests. All widths are
//! in egui points.

/// Number of character widths the head keeps even in very narrow containers.
pub const MIN_HEAD_CHARS: f32 = 2.0;

/// How the widget lays out its two fragments for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncationPlan {
    /// True when the head is rendered separately with an ellipsis budget
    pub ellipsis_shown: bool,
    /// Maximum width of the head fragment; `None` means unconstrained
    pub head_max_width: Option<f32>,
}

impl TruncationPlan {
    /// Plan for a widget whose full text is rendered in a single run.
    pub const UNCONSTRAINED: Self = Self {
        ellipsis_shown: false,
        head_max_width: None,
    };
}

/// Rounds a measured width up to whole pixels.
///
/// Rounding up keeps sub-pixel tails from being clipped by a fraction of a
/// pixel. Negative and non-finite widths collapse to zero.
pub fn ceil_px(width: f32) -> u32 {
    if !width.is_finite() || width <= 0.0 {
        return 0;
    }
    width.ceil() as u32
}

/// Computes the head budget for one pass.
///
/// # Arguments
/// * `container_width` - Width available to the whole widget
/// * `full_text_width` - Natural width of the untruncated text
/// * `tail_width` - Last measured tail width, `None` before the first measurement
/// * `min_head_width` - Floor for the head budget (usually two character widths)
pub fn plan_truncation(
    container_width: f32,
    full_text_width: f32,
    tail_width: Option<u32>,
    min_head_width: f32,
) -> TruncationPlan {
    let Some(tail_width) = tail_width else {
        // Not measured yet: a zero budget would flash an empty head
        return TruncationPlan::UNCONSTRAINED;
    };

    if full_text_width <= container_width {
        return TruncationPlan::UNCONSTRAINED;
    }

    let budget = (container_width - tail_width as f32).max(min_head_width.max(0.0));
    TruncationPlan {
        ellipsis_shown: true,
        head_max_width: Some(budget),
    }
}
