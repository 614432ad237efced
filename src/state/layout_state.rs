//! UI layout state management.
//!
//! This module encapsulates all state related to UI layout,
//! including table column widths and the custom gallery width.

use serde::{Deserialize, Serialize};

/// Column headers of the table story, in display order.
pub const COLUMN_NAMES: [&str; 3] = ["Name", "Text", "Email"];

/// Narrowest a table column can be dragged.
pub const MIN_COLUMN_WIDTH: f32 = 30.0;

/// Narrowest and widest value of the custom gallery width slider.
pub const CUSTOM_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 20.0..=900.0;

/// State related to UI layout and sizing.
///
/// Responsibilities:
/// - Tracking table column widths
/// - Tracking the width of the user-resizable gallery box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Column widths for the table story [Name, Text, Email]
    column_widths: [f32; 3],
    /// Width of the extra gallery box driven by the slider
    custom_width: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            column_widths: [200.0, 400.0, 250.0],
            custom_width: 300.0,
        }
    }

    /// Creates a layout state from persisted values, clamping them into range.
    pub fn with_widths(column_widths: [f32; 3], custom_width: f32) -> Self {
        let mut layout = Self::new();
        for (i, width) in column_widths.into_iter().enumerate() {
            layout.set_column_width(i, width);
        }
        layout.set_custom_width(custom_width);
        layout
    }

    // ===== Layout Queries =====

    /// Returns the column widths array.
    pub fn column_widths(&self) -> &[f32; 3] {
        &self.column_widths
    }

    /// Returns the width of the custom gallery box.
    pub fn custom_width(&self) -> f32 {
        self.custom_width
    }

    // ===== Layout Mutations =====

    /// Sets one column width, never narrower than [`MIN_COLUMN_WIDTH`].
    ///
    /// Out-of-range column indices and non-finite widths are ignored.
    pub fn set_column_width(&mut self, column: usize, width: f32) {
        if !width.is_finite() {
            return;
        }
        if let Some(slot) = self.column_widths.get_mut(column) {
            *slot = width.max(MIN_COLUMN_WIDTH);
        }
    }

    /// Widens or narrows a column by `delta`.
    pub fn resize_column(&mut self, column: usize, delta: f32) {
        if let Some(&width) = self.column_widths.get(column) {
            self.set_column_width(column, width + delta);
        }
    }

    /// Sets the custom gallery width, clamped to [`CUSTOM_WIDTH_RANGE`].
    pub fn set_custom_width(&mut self, width: f32) {
        if width.is_finite() {
            self.custom_width = width.clamp(*CUSTOM_WIDTH_RANGE.start(), *CUSTOM_WIDTH_RANGE.end());
        }
    }

    /// Returns a mutable reference to the custom width (for slider widgets).
    pub(crate) fn custom_width_mut(&mut self) -> &mut f32 {
        &mut self.custom_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_column_respects_minimum() {
        let mut layout = LayoutState::new();
        layout.resize_column(0, -1000.0);
        assert_eq!(layout.column_widths()[0], MIN_COLUMN_WIDTH);

        layout.resize_column(0, 20.0);
        assert_eq!(layout.column_widths()[0], MIN_COLUMN_WIDTH + 20.0);
    }

    #[test]
    fn test_invalid_updates_are_ignored() {
        let mut layout = LayoutState::new();
        let before = layout.clone();
        layout.set_column_width(7, 100.0);
        layout.set_column_width(1, f32::NAN);
        layout.set_custom_width(f32::INFINITY);
        assert_eq!(layout, before);
    }

    #[test]
    fn test_with_widths_clamps() {
        let layout = LayoutState::with_widths([1.0, 120.0, 500.0], 5000.0);
        assert_eq!(layout.column_widths(), &[MIN_COLUMN_WIDTH, 120.0, 500.0]);
        assert_eq!(layout.custom_width(), *CUSTOM_WIDTH_RANGE.end());
    }
}
