//! Story selection and table data state.

use crate::stories::{generate_rows, Story, TableRow};

/// Default number of generated table rows.
pub const DEFAULT_ROWS: usize = 10;

/// Default RNG seed for table rows.
pub const DEFAULT_SEED: u64 = 42;

/// State related to the story being shown.
///
/// Responsibilities:
/// - Tracking the selected story
/// - Owning the generated table rows and the parameters they came from
#[derive(Debug, Clone)]
pub struct StoryState {
    current: Story,
    row_count: usize,
    seed: u64,
    rows: Vec<TableRow>,
}

impl Default for StoryState {
    fn default() -> Self {
        Self::new(Story::default(), DEFAULT_ROWS, DEFAULT_SEED)
    }
}

impl StoryState {
    /// Creates story state and generates the table rows.
    pub fn new(current: Story, row_count: usize, seed: u64) -> Self {
        Self {
            current,
            row_count,
            seed,
            rows: generate_rows(row_count, seed),
        }
    }

    // ===== Queries =====

    pub fn current(&self) -> Story {
        self.current
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    // ===== Mutations =====

    /// Switches to another story.
    pub fn select(&mut self, story: Story) {
        if story != self.current {
            tracing::info!(story = story.cli_name(), "switching story");
            self.current = story;
        }
    }

    /// Regenerates the table with a new row count and seed.
    pub fn regenerate(&mut self, row_count: usize, seed: u64) {
        self.row_count = row_count;
        self.seed = seed;
        self.rows = generate_rows(row_count, seed);
        tracing::debug!(row_count, seed, "regenerated table rows");
    }
}
