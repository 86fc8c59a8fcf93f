// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state transitions funnel through [`update`]; each handler is a small
//! function so the policy around a message stays easy to audit.

use super::{App, Message};
use crate::catalog::{self, Catalog};
use crate::error::Result;
use crate::ui::lightbox::Transition;
use crate::ui::{grid, lightbox};
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{Size, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Handles a top-level message, mutating the application state and possibly
/// spawning a follow-up task.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Grid(message) => handle_grid_message(app, message),
        Message::Lightbox(message) => {
            handle_lightbox_message(app, message);
            Task::none()
        }
        Message::WindowResized(size) => {
            handle_window_resized(app, size);
            Task::none()
        }
        Message::KeyPressed(key) => {
            handle_key_pressed(app, key);
            Task::none()
        }
        Message::Tick(now) => {
            handle_tick(app, now);
            Task::none()
        }
        Message::OpenFolderDialog => Task::perform(pick_folder(), Message::OpenFolderDialogResult),
        Message::OpenFolderDialogResult(selection) => match selection {
            Some(path) => {
                Task::perform(load_catalog(path), |result| Message::CatalogLoaded { result })
            }
            None => Task::none(),
        },
        Message::CatalogLoaded { result } => {
            handle_catalog_loaded(app, result);
            Task::none()
        }
    }
}

fn handle_grid_message(app: &mut App, message: grid::Message) -> Task<Message> {
    match message {
        grid::Message::ThumbnailPressed { id, row, col } => {
            // The anchor is computed from the grid's deterministic layout at
            // press time; the gallery core just carries it.
            let row_len = app
                .gallery
                .visible_rows()
                .get(row)
                .map(Vec::len)
                .unwrap_or(0);
            let anchor = grid::thumbnail_anchor(
                app.window_size,
                app.gallery.viewport(),
                row_len,
                row,
                col,
                app.scroll_offset,
            );

            app.gallery.open_lightbox(id, anchor);
            if app.gallery.lightbox().is_open() {
                app.transition = Some(Transition::opening(
                    Instant::now(),
                    app.transition_duration(),
                ));
            }
        }
        grid::Message::LoadMorePressed => app.gallery.load_more(),
        grid::Message::ShowLessPressed => app.gallery.show_less(),
        grid::Message::Scrolled(offset) => app.scroll_offset = offset,
    }

    Task::none()
}

fn handle_lightbox_message(app: &mut App, message: lightbox::Message) {
    match message {
        lightbox::Message::NextPressed => app.gallery.next_image(),
        lightbox::Message::PreviousPressed => app.gallery.previous_image(),
        lightbox::Message::ClosePressed | lightbox::Message::BackdropPressed => close_lightbox(app),
    }
}

fn close_lightbox(app: &mut App) {
    if app.gallery.lightbox().is_open() {
        app.gallery.close_lightbox();
        app.transition = Some(Transition::closing(
            Instant::now(),
            app.transition_duration(),
        ));
    }
}

fn handle_window_resized(app: &mut App, size: Size) {
    app.window_size = size;
    app.gallery.set_viewport_width(size.width);
}

/// Keyboard shortcuts are only live while the lightbox is open; the grid has
/// no keyboard surface of its own.
fn handle_key_pressed(app: &mut App, key: Key) {
    if !app.gallery.lightbox().is_open() {
        return;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowRight) => app.gallery.next_image(),
        Key::Named(Named::ArrowLeft) => app.gallery.previous_image(),
        Key::Named(Named::Escape) => close_lightbox(app),
        _ => {}
    }
}

fn handle_tick(app: &mut App, now: Instant) {
    if let Some(transition) = app.transition {
        if transition.is_finished(now) {
            app.transition = None;
        }
    }
}

fn handle_catalog_loaded(app: &mut App, result: Result<Catalog>) {
    match result {
        Ok(catalog) => {
            app.gallery.replace_catalog(catalog);
            app.warning = None;
        }
        Err(_) => {
            app.warning = Some("notification-catalog-load-error".to_string());
        }
    }
}

/// Shows the native folder picker.
async fn pick_folder() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Loads a catalog source off the UI thread: a `.toml` manifest, or a
/// directory to scan.
pub(super) async fn load_catalog(path: PathBuf) -> Result<Catalog> {
    let loaded = tokio::task::spawn_blocking(move || {
        if path.is_dir() {
            catalog::scan_directory(&path)
        } else {
            catalog::load_manifest(&path)
        }
    })
    .await;

    match loaded {
        Ok(result) => result,
        Err(join_error) => Err(crate::error::Error::Io(join_error.to_string())),
    }
}
