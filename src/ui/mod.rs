//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the demo:
//! - Header panel (story selector, theme toggle, table controls)
//! - Gallery panel (fixed-width boxes around one text)
//! - Table panel (generated rows with tailed cells)
//! - Table header component (resizable column headers)
//! - Status bar (registry statistics)
//! - Panel manager (panel orchestration and layout)

pub mod gallery_panel;
pub mod header;
pub mod panel_manager;
pub mod status_bar;
pub mod table_header;
pub mod table_panel;
