// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styling (buttons, containers, overlays).
//!
//! Style functions follow the Iced 0.14 closure-based styling API: each
//! function returns a closure over `(Theme, Status)` suitable for passing to
//! a widget's `.style()`.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Border, Color, Theme};

/// Button styles.
pub mod button_styles {
    use super::*;

    /// The gallery's primary action button: brand red pill, white label.
    pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
            _ => palette::PRIMARY_500,
        };

        button::Style {
            background: Some(background.into()),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }

    /// Circular dark button used for lightbox controls over the backdrop.
    pub fn overlay_control(_theme: &Theme, status: button::Status) -> button::Style {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(
                Color {
                    a: alpha,
                    ..palette::BLACK
                }
                .into(),
            ),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }

    /// Invisible button wrapping a thumbnail; the image itself is the visual.
    pub fn thumbnail(_theme: &Theme, _status: button::Status) -> button::Style {
        button::Style {
            background: None,
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Container styles.
pub mod container_styles {
    use super::*;

    /// Dimmed full-window backdrop behind the lightbox, with the given alpha
    /// so the transition can fade it in and out.
    pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
        move |_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: alpha,
                    ..palette::BLACK
                }
                .into(),
            ),
            ..Default::default()
        }
    }

    /// Placeholder tile shown behind a thumbnail while its pixels arrive.
    pub fn thumbnail_slot(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(palette::GRAY_700.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }

    /// Small translucent disc behind the expand badge on each thumbnail.
    pub fn expand_badge(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::BLACK
                }
                .into(),
            ),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}
