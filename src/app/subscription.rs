// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes feed the viewport class, uncaptured key presses feed the
//! lightbox shortcuts, and a fast tick runs only while a lightbox transition
//! is in flight.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between animation ticks while a transition runs (~60 fps).
const ANIMATION_TICK_MS: u64 = 16;

/// Listens for native window and keyboard events.
///
/// Key presses are forwarded whole; the update loop decides whether the
/// lightbox is open and the key means anything. Captured keyboard events
/// (e.g. focused text input) are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the animation tick subscription, active only while a lightbox
/// transition is running.
pub fn create_animation_subscription(transitioning: bool) -> Subscription<Message> {
    if transitioning {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
