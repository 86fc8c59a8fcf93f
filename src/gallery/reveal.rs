// SPDX-License-Identifier: MPL-2.0
//! Progressive disclosure of gallery rows.
//!
//! The gallery starts with a fixed number of visible rows and grows by a
//! fixed step on each "load more". "Show less" collapses back to the initial
//! floor. `expanded` tracks which control set the UI shows: `true` means the
//! single primary button, `false` means the paired load-more/show-less
//! buttons entered after the first reveal.

/// Default initial visible row count (and the floor `show_less` returns to).
pub const DEFAULT_INITIAL_ROWS: usize = 2;

/// Default number of rows added per `load_more`.
pub const DEFAULT_ROWS_PER_STEP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    visible_row_count: usize,
    expanded: bool,
    initial_rows: usize,
    rows_per_step: usize,
}

impl RevealState {
    pub fn new(initial_rows: usize, rows_per_step: usize) -> Self {
        // A zero floor or step would make the controls inert.
        let initial_rows = initial_rows.max(1);
        let rows_per_step = rows_per_step.max(1);

        Self {
            visible_row_count: initial_rows,
            expanded: true,
            initial_rows,
            rows_per_step,
        }
    }

    /// Number of rows currently revealed. May exceed the total row count;
    /// callers slice with `min(total)`.
    pub fn visible_row_count(&self) -> usize {
        self.visible_row_count
    }

    /// Whether the UI is in its initial single-button mode.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Reveals the next step of rows and switches the UI into the paired
    /// two-button mode.
    pub fn load_more(&mut self) {
        self.visible_row_count += self.rows_per_step;
        self.expanded = false;
    }

    /// Collapses back to the initial floor and restores single-button mode.
    pub fn show_less(&mut self) {
        self.visible_row_count = self.initial_rows;
        self.expanded = true;
    }

    /// True while rows beyond the revealed count exist.
    pub fn has_more_rows(&self, total_rows: usize) -> bool {
        self.visible_row_count < total_rows
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_ROWS, DEFAULT_ROWS_PER_STEP)
    }
}
