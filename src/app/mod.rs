// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery controller, localization, and
//! configuration, and translates messages into state transitions or side
//! effects like catalog loading. Policy decisions (window sizing, transition
//! duration, startup loading) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::lightbox::Transition;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state bridging the gallery core, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    gallery: GalleryController,
    /// Last known window size; the width drives the viewport class.
    window_size: Size,
    /// Current vertical scroll offset of the grid.
    scroll_offset: f32,
    /// In-flight lightbox open/close animation, if any.
    transition: Option<Transition>,
    /// Pending warning shown to the user, as an i18n key.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.catalog().len())
            .field("viewport", &self.gallery.viewport())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let gallery = GalleryController::new(
            Default::default(),
            config.layout_options(),
            WINDOW_DEFAULT_WIDTH as f32,
        );

        Self {
            i18n: I18n::default(),
            config,
            gallery,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            scroll_offset: 0.0,
            transition: None,
            warning: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// catalog loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let gallery = GalleryController::new(
            Default::default(),
            config.layout_options(),
            WINDOW_DEFAULT_WIDTH as f32,
        );

        let app = App {
            i18n,
            config,
            gallery,
            warning: config_warning,
            ..Self::default()
        };

        let task = match flags.catalog_path {
            Some(path) => Task::perform(update::load_catalog(PathBuf::from(path)), |result| {
                Message::CatalogLoaded { result }
            }),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.config.general.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Duration of the lightbox open/close transition, from config.
    fn transition_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.config.transition_ms()))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        // Openness factor for the overlay: an in-flight transition wins,
        // otherwise a settled open lightbox renders fully expanded.
        let overlay_factor = match (&self.transition, self.gallery.lightbox().is_open()) {
            (Some(transition), _) => Some(transition.factor(Instant::now())),
            (None, true) => Some(1.0),
            (None, false) => None,
        };

        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            window_size: self.window_size,
            overlay_factor,
            warning: self.warning.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_animation_subscription(self.transition.is_some()),
        ])
    }
}
