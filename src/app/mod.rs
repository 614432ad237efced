//! Application-level modules for the demo.
//!
//! This module contains centralized state, settings persistence, theme
//! application and command-line options.

mod app_state;
mod options;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use options::{parse_options, print_usage, DemoOptions};
pub use settings_coordinator::{DemoSettings, SettingsCoordinator};
pub use theme_coordinator::ThemeCoordinator;
