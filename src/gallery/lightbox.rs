// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine: full-screen viewing with cyclic navigation.
//!
//! The lightbox moves through four observable states:
//!
//! - **Closed**: nothing was ever opened (`current` is `None`).
//! - **Opening/Open**: `open` captured an image and the anchor rectangle of
//!   the thumbnail it came from; `is_open` is `true`.
//! - **Navigating**: `next`/`previous` replace `current` while `is_open`
//!   stays `true`. The anchor is deliberately left untouched; it only ever
//!   describes where the lightbox opened from.
//! - **Closing**: `close` clears `is_open` but keeps `current`, so the
//!   presentation layer can animate the last-viewed image back toward its
//!   anchor before the overlay disappears.
//!
//! Navigation calls without a current image, or with a current id that no
//! longer resolves in the catalog, are silent no-ops; the UI only exposes
//! navigation controls while the lightbox is open.

use crate::catalog::{Catalog, Image, ImageId};

/// Screen geometry of the thumbnail a lightbox opening was anchored to.
///
/// Captured by the presentation layer at click time and carried as opaque
/// data; the state machine never computes or interprets geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lightbox {
    current: Option<Image>,
    is_open: bool,
    anchor: AnchorRect,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay should be shown (possibly mid-transition).
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The image being viewed, or last viewed during the closing transition.
    pub fn current(&self) -> Option<&Image> {
        self.current.as_ref()
    }

    /// The thumbnail geometry the current viewing session opened from.
    pub fn anchor(&self) -> AnchorRect {
        self.anchor
    }

    /// Opens the lightbox on `id`, anchored at `anchor`.
    ///
    /// Unknown ids leave the state unchanged.
    pub fn open(&mut self, catalog: &Catalog, id: ImageId, anchor: AnchorRect) {
        if let Some(image) = catalog.get(id) {
            self.current = Some(image.clone());
            self.anchor = anchor;
            self.is_open = true;
        }
    }

    /// Advances to the next image in catalog order, wrapping from last to
    /// first. No-op when nothing is current or the current id went stale.
    pub fn next(&mut self, catalog: &Catalog) {
        if let Some(current) = &self.current {
            if let Some(next) = catalog.next_after(current.id) {
                self.current = Some(next.clone());
            }
        }
    }

    /// Steps back to the previous image in catalog order, wrapping from
    /// first to last. No-op when nothing is current or the id went stale.
    pub fn previous(&mut self, catalog: &Catalog) {
        if let Some(current) = &self.current {
            if let Some(previous) = catalog.previous_before(current.id) {
                self.current = Some(previous.clone());
            }
        }
    }

    /// Begins the closing transition: the overlay hides but `current` stays
    /// available for the animation out.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::path::PathBuf;

    fn catalog(count: u32) -> Catalog {
        Catalog::new(
            (1..=count)
                .map(|id| Image {
                    id,
                    src: PathBuf::from(format!("/{}.jpg", id)),
                })
                .collect(),
        )
        .expect("valid catalog")
    }

    fn rect(left: f32, top: f32) -> AnchorRect {
        AnchorRect {
            left,
            top,
            width: 160.0,
            height: 160.0,
        }
    }

    #[test]
    fn starts_closed_with_no_current_image() {
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn open_captures_image_and_anchor() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();

        lightbox.open(&catalog, 3, rect(40.0, 80.0));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current().map(|i| i.id), Some(3));
        assert_eq!(lightbox.anchor(), rect(40.0, 80.0));
    }

    #[test]
    fn open_with_unknown_id_is_a_no_op() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();

        lightbox.open(&catalog, 42, rect(0.0, 0.0));
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn next_and_previous_follow_catalog_order() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();
        lightbox.open(&catalog, 3, rect(0.0, 0.0));

        lightbox.next(&catalog);
        assert_eq!(lightbox.current().map(|i| i.id), Some(4));

        lightbox.previous(&catalog);
        lightbox.previous(&catalog);
        assert_eq!(lightbox.current().map(|i| i.id), Some(2));
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();

        lightbox.open(&catalog, 5, rect(0.0, 0.0));
        lightbox.next(&catalog);
        assert_eq!(lightbox.current().map(|i| i.id), Some(1));

        lightbox.previous(&catalog);
        assert_eq!(lightbox.current().map(|i| i.id), Some(5));
    }

    #[test]
    fn n_steps_forward_return_to_the_start() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();
        lightbox.open(&catalog, 2, rect(0.0, 0.0));

        for _ in 0..catalog.len() {
            lightbox.next(&catalog);
        }
        assert_eq!(lightbox.current().map(|i| i.id), Some(2));

        for _ in 0..catalog.len() {
            lightbox.previous(&catalog);
        }
        assert_eq!(lightbox.current().map(|i| i.id), Some(2));
    }

    #[test]
    fn navigation_without_a_current_image_is_a_no_op() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();

        lightbox.next(&catalog);
        lightbox.previous(&catalog);
        assert_eq!(lightbox.current(), None);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn navigation_with_a_stale_id_is_a_no_op() {
        let full = catalog(5);
        let mut lightbox = Lightbox::new();
        lightbox.open(&full, 5, rect(0.0, 0.0));

        // The image disappears from a rebuilt catalog; navigation holds still.
        let shrunk = catalog(3);
        lightbox.next(&shrunk);
        assert_eq!(lightbox.current().map(|i| i.id), Some(5));
        lightbox.previous(&shrunk);
        assert_eq!(lightbox.current().map(|i| i.id), Some(5));
    }

    #[test]
    fn close_keeps_the_current_image_for_the_transition_out() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();
        lightbox.open(&catalog, 4, rect(10.0, 20.0));

        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current().map(|i| i.id), Some(4));
        assert_eq!(lightbox.anchor(), rect(10.0, 20.0));
    }

    #[test]
    fn reopening_replaces_image_and_anchor() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();

        lightbox.open(&catalog, 1, rect(0.0, 0.0));
        lightbox.close();
        lightbox.open(&catalog, 2, rect(100.0, 200.0));

        assert!(lightbox.is_open());
        assert_eq!(lightbox.current().map(|i| i.id), Some(2));
        assert_eq!(lightbox.anchor(), rect(100.0, 200.0));
    }

    #[test]
    fn navigation_never_touches_the_anchor() {
        let catalog = catalog(5);
        let mut lightbox = Lightbox::new();
        lightbox.open(&catalog, 1, rect(33.0, 66.0));

        lightbox.next(&catalog);
        lightbox.next(&catalog);
        lightbox.previous(&catalog);
        assert_eq!(lightbox.anchor(), rect(33.0, 66.0));
    }
}
