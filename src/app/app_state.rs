//! Centralized application state for the demo.
//!
//! Composes the focused state components and owns the [`ResizeRegistry`]
//! shared by every widget in the window.

use tailed_ellipsis::ResizeRegistry;

use crate::app::{DemoOptions, DemoSettings};
use crate::state::{LayoutState, StoryState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Selected story and table rows
    pub story: StoryState,

    /// Column and gallery widths
    pub layout: LayoutState,

    /// Dark or light visuals
    pub dark_mode: bool,

    /// Resize observation for all widgets; created on first use
    registry: Option<ResizeRegistry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::from_settings(DemoSettings::default(), &DemoOptions::default())
    }

    /// Builds state from persisted settings, letting command-line options win.
    pub fn from_settings(settings: DemoSettings, options: &DemoOptions) -> Self {
        let story = options.story.unwrap_or(settings.story);
        let rows = options.rows.unwrap_or(settings.rows);
        let seed = options.seed.unwrap_or(settings.seed);

        Self {
            story: StoryState::new(story, rows, seed),
            layout: LayoutState::with_widths(settings.column_widths, settings.custom_width),
            dark_mode: settings.dark_mode,
            registry: None,
        }
    }

    /// Snapshot of everything worth persisting.
    pub fn settings(&self) -> DemoSettings {
        DemoSettings {
            story: self.story.current(),
            rows: self.story.row_count(),
            seed: self.story.seed(),
            column_widths: *self.layout.column_widths(),
            custom_width: self.layout.custom_width(),
            dark_mode: self.dark_mode,
        }
    }

    // ===== Resize Registry =====

    /// Returns the registry, creating it on first use.
    pub fn registry_mut(&mut self) -> &mut ResizeRegistry {
        self.registry.get_or_insert_with(|| {
            tracing::debug!("creating resize registry");
            ResizeRegistry::new()
        })
    }

    /// Returns the registry if any widget has been shown yet.
    pub fn registry(&self) -> Option<&ResizeRegistry> {
        self.registry.as_ref()
    }

    /// Borrows the pieces the table panel needs at the same time.
    pub fn table_parts_mut(&mut self) -> (&StoryState, &mut LayoutState, &mut ResizeRegistry) {
        let registry = self.registry.get_or_insert_with(ResizeRegistry::new);
        (&self.story, &mut self.layout, registry)
    }

    /// Finishes the frame: sweeps unmounted widgets and delivers resize reports.
    pub fn end_pass(&mut self) {
        if let Some(registry) = self.registry.as_mut() {
            registry.end_pass();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::Story;

    #[test]
    fn test_registry_created_on_first_use() {
        let mut state = AppState::new();
        assert!(state.registry().is_none());

        state.end_pass();
        assert!(state.registry().is_none());

        assert!(state.registry_mut().is_empty());
        assert!(state.registry().is_some());
    }

    #[test]
    fn test_options_override_settings() {
        let settings = DemoSettings {
            story: Story::LongText,
            rows: 4,
            ..DemoSettings::default()
        };
        let options = DemoOptions {
            story: Some(Story::Table),
            ..DemoOptions::default()
        };

        let state = AppState::from_settings(settings, &options);
        assert_eq!(state.story.current(), Story::Table);
        assert_eq!(state.story.rows().len(), 4);
    }

    #[test]
    fn test_settings_snapshot() {
        let mut state = AppState::new();
        state.layout.set_column_width(1, 123.0);
        state.dark_mode = false;

        let settings = state.settings();
        assert_eq!(settings.column_widths[1], 123.0);
        assert!(!settings.dark_mode);
    }
}
