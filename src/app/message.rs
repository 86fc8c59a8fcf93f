// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::ui::{grid, lightbox};
use iced::keyboard::Key;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Lightbox(lightbox::Message),
    /// The window was resized; drives the viewport class.
    WindowResized(Size),
    /// A key was pressed and not captured by any widget.
    KeyPressed(Key),
    /// Periodic tick while a lightbox transition is in flight.
    Tick(Instant),
    /// Trigger the open folder dialog from the empty state.
    OpenFolderDialog,
    /// Result from the open folder dialog.
    OpenFolderDialogResult(Option<PathBuf>),
    /// Result from asynchronously loading a catalog source.
    CatalogLoaded {
        result: Result<Catalog, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog source to load on startup: a `.toml` manifest or an
    /// image directory.
    pub catalog_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_MOSAIC_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
