//! State management modules for the demo.
//!
//! This module contains state-only logic (no UI concerns):
//! - Story state (selected story, generated table rows)
//! - Layout state (table column widths, custom gallery width)

mod layout_state;
mod story_state;

pub use layout_state::{LayoutState, COLUMN_NAMES, CUSTOM_WIDTH_RANGE};
pub use story_state::{StoryState, DEFAULT_ROWS, DEFAULT_SEED};
