//! Demo stories
//!
//! Each story shows the widget in a fixed setting: galleries of boxes with
//! fixed widths, or a table with resizable columns.

mod table_data;

pub use table_data::{generate_rows, TableRow};

use serde::{Deserialize, Serialize};

/// A text shown in boxes of several fixed widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySpec {
    pub text: &'static str,
    pub tail_length: usize,
    pub widths: &'static [f32],
}

/// Tail length used by every table cell.
pub const TABLE_TAIL_LENGTH: usize = 5;

const README_TEXT: &str = "I don't love ellipsis";

const LONG_TEXT: &str = "The text-overflow property specifies how overflowed content that is not \
displayed should be signaled to the user.";

/// The stories the demo can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Story {
    #[default]
    Readme,
    LongText,
    Screenshot,
    Table,
}

impl Story {
    pub const ALL: [Story; 4] = [Story::Readme, Story::LongText, Story::Screenshot, Story::Table];

    /// Display name for the story selector.
    pub fn label(self) -> &'static str {
        match self {
            Story::Readme => "Readme example",
            Story::LongText => "Long text",
            Story::Screenshot => "Screenshot",
            Story::Table => "Table",
        }
    }

    /// Name accepted by `--story`.
    pub fn cli_name(self) -> &'static str {
        match self {
            Story::Readme => "readme",
            Story::LongText => "long-text",
            Story::Screenshot => "screenshot",
            Story::Table => "table",
        }
    }

    /// Parses a `--story` value.
    pub fn from_cli_name(name: &str) -> Option<Story> {
        Story::ALL
            .into_iter()
            .find(|story| story.cli_name().eq_ignore_ascii_case(name))
    }

    /// Gallery layout for this story; `None` for the table.
    pub fn gallery(self) -> Option<GallerySpec> {
        match self {
            Story::Readme => Some(GallerySpec {
                text: README_TEXT,
                tail_length: 13,
                widths: &[125.0, 135.0],
            }),
            Story::LongText => Some(GallerySpec {
                text: LONG_TEXT,
                tail_length: 5,
                widths: &[150.0, 250.0, 350.0, 450.0, 550.0, 650.0, 750.0],
            }),
            Story::Screenshot => Some(GallerySpec {
                text: README_TEXT,
                tail_length: 13,
                widths: &[100.0, 120.0, 125.0],
            }),
            Story::Table => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_names_round_trip() {
        for story in Story::ALL {
            assert_eq!(Story::from_cli_name(story.cli_name()), Some(story));
        }
        assert_eq!(Story::from_cli_name("TABLE"), Some(Story::Table));
        assert_eq!(Story::from_cli_name("nope"), None);
    }

    #[test]
    fn test_galleries() {
        let readme = Story::Readme.gallery().unwrap();
        assert_eq!(readme.tail_length, 13);
        assert_eq!(readme.widths, &[125.0, 135.0]);

        let long = Story::LongText.gallery().unwrap();
        assert_eq!(long.widths.len(), 7);
        assert!(long.text.ends_with("user."));

        assert!(Story::Table.gallery().is_none());
    }

    #[test]
    fn test_story_serializes_by_name() {
        let json = serde_json::to_string(&Story::LongText).unwrap();
        assert_eq!(json, "\"LongText\"");
        let back: Story = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Story::LongText);
    }
}
