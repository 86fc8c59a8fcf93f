// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so repeated views reuse the parsed asset.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g., `cross` not `close_lightbox`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    expand,
    "expand.svg",
    "Expand icon: four arrows pointing outward."
);
define_icon!(
    chevron_left,
    "chevron_left.svg",
    "Chevron pointing left."
);
define_icon!(
    chevron_right,
    "chevron_right.svg",
    "Chevron pointing right."
);
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");

/// Constrains an icon to a square of the given size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
