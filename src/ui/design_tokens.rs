// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the application's shared visual constants.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid, plus the tight gallery gap)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//!
//! Tokens are designed to be consistent; maintain the scale ratios when
//! modifying them and run the validation tests.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (red scale, after the gallery's accent)
    pub const PRIMARY_400: Color = Color::from_rgb(0.92, 0.35, 0.32);
    pub const PRIMARY_500: Color = Color::from_rgb(0.86, 0.22, 0.2);
    pub const PRIMARY_600: Color = Color::from_rgb(0.72, 0.16, 0.15);
    pub const PRIMARY_700: Color = Color::from_rgb(0.58, 0.12, 0.11);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.75;
    pub const OVERLAY_HOVER: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units

    /// Gap between gallery thumbnails; intentionally off-grid so the rows
    /// read as a single mosaic rather than separate cards.
    pub const GRID_GAP: f32 = 6.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Gallery thumbnails (square), per viewport class
    pub const THUMB_WIDE: f32 = 160.0;
    pub const THUMB_COMPACT: f32 = 96.0;

    // Gallery header band above the rows
    pub const HEADER_HEIGHT: f32 = 96.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - the gallery heading
    pub const TITLE_LG: f32 = 30.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - hints, secondary labels
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::GRID_GAP > 0.0);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::THUMB_WIDE > sizing::THUMB_COMPACT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn thumbnails_fit_their_breakpoints() {
        // Five wide thumbnails plus gaps must fit the default breakpoint.
        let widest_row = 5.0 * sizing::THUMB_WIDE + 4.0 * spacing::GRID_GAP;
        assert!(widest_row < crate::config::DEFAULT_BREAKPOINT_WIDTH);
    }
}
