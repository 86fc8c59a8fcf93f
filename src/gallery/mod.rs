// SPDX-License-Identifier: MPL-2.0
//! Gallery state: row layout, progressive reveal, and the lightbox.
//!
//! [`GalleryController`] is the single owner of gallery state. It holds the
//! immutable catalog, derives the viewport class from the window width,
//! caches the packed rows (rebuilt only when the class or catalog changes),
//! and hosts the reveal and lightbox sub-states. All transitions are
//! synchronous and total; the controller performs no I/O.

pub mod layout;
pub mod lightbox;
pub mod reveal;

pub use layout::{pack, row_capacity, RowParity, TrailingRows, ViewportClass};
pub use lightbox::{AnchorRect, Lightbox};
pub use reveal::RevealState;

use crate::catalog::{Catalog, Image, ImageId};

/// Layout knobs, sourced from `[layout]` in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Width at or above which the viewport counts as `Wide`.
    pub breakpoint_width: f32,
    /// Rows visible at startup and after `show_less`.
    pub initial_rows: usize,
    /// Rows added per `load_more`.
    pub rows_per_step: usize,
    /// Policy for a final row short of its capacity.
    pub trailing_rows: TrailingRows,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            breakpoint_width: crate::config::DEFAULT_BREAKPOINT_WIDTH,
            initial_rows: reveal::DEFAULT_INITIAL_ROWS,
            rows_per_step: reveal::DEFAULT_ROWS_PER_STEP,
            trailing_rows: TrailingRows::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    catalog: Catalog,
    options: LayoutOptions,
    viewport: ViewportClass,
    rows: Vec<Vec<Image>>,
    reveal: RevealState,
    lightbox: Lightbox,
}

impl GalleryController {
    /// Creates a controller over `catalog`, classifying `initial_width`
    /// against the configured breakpoint.
    pub fn new(catalog: Catalog, options: LayoutOptions, initial_width: f32) -> Self {
        let viewport = ViewportClass::from_width(initial_width, options.breakpoint_width);
        let rows = pack(catalog.images(), viewport, options.trailing_rows);

        Self {
            catalog,
            options,
            viewport,
            rows,
            reveal: RevealState::new(options.initial_rows, options.rows_per_step),
            lightbox: Lightbox::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Reclassifies the viewport after a window resize. Rows are rebuilt
    /// only when the class actually changes; a missing or unchanged width
    /// signal leaves the layout at its last known state.
    pub fn set_viewport_width(&mut self, width: f32) {
        let viewport = ViewportClass::from_width(width, self.options.breakpoint_width);
        if viewport != self.viewport {
            self.viewport = viewport;
            self.rebuild_rows();
        }
    }

    /// Swaps in a freshly loaded catalog, resetting reveal and lightbox
    /// state for the new content.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.rebuild_rows();
        self.reveal = RevealState::new(self.options.initial_rows, self.options.rows_per_step);
        self.lightbox = Lightbox::new();
    }

    fn rebuild_rows(&mut self) {
        self.rows = pack(self.catalog.images(), self.viewport, self.options.trailing_rows);
    }

    /// All packed rows for the current viewport class.
    pub fn rows(&self) -> &[Vec<Image>] {
        &self.rows
    }

    /// The revealed prefix of the rows. Slicing is clamped, so a reveal
    /// count past the end simply yields every row.
    pub fn visible_rows(&self) -> &[Vec<Image>] {
        let end = self.reveal.visible_row_count().min(self.rows.len());
        &self.rows[..end]
    }

    pub fn has_more_rows(&self) -> bool {
        self.reveal.has_more_rows(self.rows.len())
    }

    pub fn is_expanded(&self) -> bool {
        self.reveal.is_expanded()
    }

    pub fn load_more(&mut self) {
        self.reveal.load_more();
    }

    pub fn show_less(&mut self) {
        self.reveal.show_less();
    }

    pub fn open_lightbox(&mut self, id: ImageId, anchor: AnchorRect) {
        self.lightbox.open(&self.catalog, id, anchor);
    }

    pub fn next_image(&mut self) {
        self.lightbox.next(&self.catalog);
    }

    pub fn previous_image(&mut self) {
        self.lightbox.previous(&self.catalog);
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }
}
