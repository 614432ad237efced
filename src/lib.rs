//! Tail-preserving ellipsis for egui
//!
//! [`TailedEllipsis`] renders a single line of text that is elided from the
//! head while its last characters stay visible, the way file names, ids and
//! e-mail addresses are usually shortened in table cells. Widgets share one
//! [`ResizeRegistry`] that keeps their tail width current across font, zoom
//! and text changes.

pub mod layout;
pub mod registry;
pub mod split;
pub mod widget;

// Export the widget
pub use widget::{TailedEllipsis, TailedEllipsisOutput};

// Export resize observation
pub use registry::{ResizeCallback, ResizeEntry, ResizeRegistry, UnmountCallback};

// Export layout helpers
pub use layout::{ceil_px, plan_truncation, TruncationPlan, MIN_HEAD_CHARS};
pub use split::TailSplit;
