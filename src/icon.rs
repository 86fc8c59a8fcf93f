// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//!
//! The mosaic logo ships as an embedded SVG and is rasterized at startup for
//! the window title bar. Any parse or render failure yields `None`; the
//! window simply keeps the platform default icon.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG logo into a window icon.
pub fn load_window_icon() -> Option<Icon> {
    // Embedded so packaging never has to locate assets on disk.
    const SVG_SOURCE: &str = include_str!("../assets/branding/iced_mosaic.svg");

    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let source_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / source_size.width(),
        ICON_SIZE as f32 / source_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
