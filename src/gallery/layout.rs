// SPDX-License-Identifier: MPL-2.0
//! Row packing: deterministic partitioning of the catalog into rows.
//!
//! Row widths alternate to produce the gallery's staggered look: odd rows
//! (1-indexed) are one image wider than even rows, and both widths shrink on
//! compact viewports. Packing is a pure function of its inputs; identical
//! inputs always yield the identical partition.

use crate::catalog::Image;
use serde::{Deserialize, Serialize};

/// Coarse viewport bucket driving row capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Wide,
}

impl ViewportClass {
    /// Classifies a viewport width against the configured breakpoint.
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width >= breakpoint {
            ViewportClass::Wide
        } else {
            ViewportClass::Compact
        }
    }
}

/// Alternating row classification, 1-indexed: the first row is `Odd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowParity {
    Odd,
    Even,
}

impl RowParity {
    fn flip(self) -> Self {
        match self {
            RowParity::Odd => RowParity::Even,
            RowParity::Even => RowParity::Odd,
        }
    }
}

/// Number of images a row holds for a given viewport class and parity.
pub fn row_capacity(viewport: ViewportClass, parity: RowParity) -> usize {
    match (viewport, parity) {
        (ViewportClass::Wide, RowParity::Odd) => 5,
        (ViewportClass::Wide, RowParity::Even) => 4,
        (ViewportClass::Compact, RowParity::Odd) => 3,
        (ViewportClass::Compact, RowParity::Even) => 2,
    }
}

/// Policy for a final row that never reaches its capacity.
///
/// `Drop` reproduces the historical behavior where images past the last full
/// row simply do not appear; `Partial` emits the remainder as a short final
/// row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingRows {
    Drop,
    #[default]
    Partial,
}

/// Partitions `images` (in order) into rows of alternating capacity.
pub fn pack(images: &[Image], viewport: ViewportClass, trailing: TrailingRows) -> Vec<Vec<Image>> {
    let mut rows = Vec::new();
    let mut row: Vec<Image> = Vec::new();
    let mut parity = RowParity::Odd;

    for image in images {
        row.push(image.clone());

        if row.len() == row_capacity(viewport, parity) {
            rows.push(std::mem::take(&mut row));
            parity = parity.flip();
        }
    }

    if !row.is_empty() && trailing == TrailingRows::Partial {
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Image, ImageId};
    use std::path::PathBuf;

    fn images(count: u32) -> Vec<Image> {
        (1..=count)
            .map(|id| Image {
                id,
                src: PathBuf::from(format!("/{}.jpg", id)),
            })
            .collect()
    }

    fn row_ids(row: &[Image]) -> Vec<ImageId> {
        row.iter().map(|image| image.id).collect()
    }

    #[test]
    fn from_width_classifies_against_breakpoint() {
        assert_eq!(
            ViewportClass::from_width(1024.0, 1024.0),
            ViewportClass::Wide
        );
        assert_eq!(
            ViewportClass::from_width(1023.9, 1024.0),
            ViewportClass::Compact
        );
        assert_eq!(
            ViewportClass::from_width(320.0, 1024.0),
            ViewportClass::Compact
        );
    }

    #[test]
    fn capacities_alternate_by_parity() {
        assert_eq!(row_capacity(ViewportClass::Wide, RowParity::Odd), 5);
        assert_eq!(row_capacity(ViewportClass::Wide, RowParity::Even), 4);
        assert_eq!(row_capacity(ViewportClass::Compact, RowParity::Odd), 3);
        assert_eq!(row_capacity(ViewportClass::Compact, RowParity::Even), 2);
    }

    #[test]
    fn nine_images_wide_fill_two_exact_rows() {
        let rows = pack(&images(9), ViewportClass::Wide, TrailingRows::Partial);
        assert_eq!(rows.len(), 2);
        assert_eq!(row_ids(&rows[0]), vec![1, 2, 3, 4, 5]);
        assert_eq!(row_ids(&rows[1]), vec![6, 7, 8, 9]);

        // Same partition under Drop: there is no remainder to discard.
        let dropped = pack(&images(9), ViewportClass::Wide, TrailingRows::Drop);
        assert_eq!(dropped, rows);
    }

    #[test]
    fn five_images_wide_form_a_single_row() {
        let rows = pack(&images(5), ViewportClass::Wide, TrailingRows::Partial);
        assert_eq!(rows.len(), 1);
        assert_eq!(row_ids(&rows[0]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn trailing_remainder_is_dropped_under_drop_policy() {
        let rows = pack(&images(12), ViewportClass::Wide, TrailingRows::Drop);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 5);
        assert_eq!(rows[1].len(), 4);
    }

    #[test]
    fn trailing_remainder_is_emitted_under_partial_policy() {
        let rows = pack(&images(12), ViewportClass::Wide, TrailingRows::Partial);
        assert_eq!(rows.len(), 3);
        assert_eq!(row_ids(&rows[2]), vec![10, 11, 12]);
    }

    #[test]
    fn compact_viewport_uses_three_two_capacities() {
        let rows = pack(&images(9), ViewportClass::Compact, TrailingRows::Partial);
        assert_eq!(rows.len(), 4);
        assert_eq!(row_ids(&rows[0]), vec![1, 2, 3]);
        assert_eq!(row_ids(&rows[1]), vec![4, 5]);
        assert_eq!(row_ids(&rows[2]), vec![6, 7, 8]);
        assert_eq!(row_ids(&rows[3]), vec![9]);

        let dropped = pack(&images(9), ViewportClass::Compact, TrailingRows::Drop);
        assert_eq!(dropped.len(), 3);
    }

    #[test]
    fn packing_is_deterministic() {
        let catalog = images(17);
        let first = pack(&catalog, ViewportClass::Wide, TrailingRows::Partial);
        let second = pack(&catalog, ViewportClass::Wide, TrailingRows::Partial);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_produces_no_rows() {
        assert!(pack(&[], ViewportClass::Wide, TrailingRows::Partial).is_empty());
        assert!(pack(&[], ViewportClass::Compact, TrailingRows::Drop).is_empty());
    }

    #[test]
    fn packing_preserves_catalog_order() {
        let rows = pack(&images(14), ViewportClass::Wide, TrailingRows::Partial);
        let flattened: Vec<ImageId> = rows.iter().flat_map(|row| row_ids(row)).collect();
        assert_eq!(flattened, (1..=14).collect::<Vec<_>>());
    }
}
