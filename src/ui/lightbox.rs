// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: full-screen image view with navigation controls and the
//! anchored open/close transition.
//!
//! The state machine in [`crate::gallery::lightbox`] only says whether the
//! lightbox is open and where it opened from; everything visual lives here.
//! A [`Transition`] interpolates the overlay between the clicked thumbnail's
//! anchor rectangle and the full window, driven by tick messages from the
//! application's animation subscription.

use crate::catalog::Image;
use crate::gallery::AnchorRect;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles::{button_styles, container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::tooltip::Position;
use iced::widget::{button, container, image, mouse_area, stack, tooltip, Text};
use iced::{ContentFit, Element, Length, Padding, Size};
use std::time::{Duration, Instant};

/// Messages emitted by the lightbox overlay.
#[derive(Debug, Clone)]
pub enum Message {
    NextPressed,
    PreviousPressed,
    ClosePressed,
    BackdropPressed,
}

/// Direction of an in-flight open/close transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Opening,
    Closing,
}

/// An in-flight open or close animation.
///
/// Progress is a pure function of the clock, so the transition needs no
/// per-frame mutation; the animation subscription merely triggers redraws.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    phase: Phase,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    pub fn opening(now: Instant, duration: Duration) -> Self {
        Self {
            phase: Phase::Opening,
            started_at: now,
            duration,
        }
    }

    pub fn closing(now: Instant, duration: Duration) -> Self {
        Self {
            phase: Phase::Closing,
            started_at: now,
            duration,
        }
    }

    pub fn is_closing(&self) -> bool {
        self.phase == Phase::Closing
    }

    /// Raw progress through the transition, linear in time.
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Openness factor in `[0, 1]`: 0 is the anchor rectangle, 1 is the full
    /// window. Opening eases out toward 1; closing eases back toward 0.
    pub fn factor(&self, now: Instant) -> f32 {
        let eased = ease_out_cubic(self.progress(now));
        match self.phase {
            Phase::Opening => eased,
            Phase::Closing => 1.0 - eased,
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inverted = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverted * inverted * inverted
}

fn lerp(from: f32, to: f32, factor: f32) -> f32 {
    from + (to - from) * factor
}

/// The overlay's image placement for a given openness factor: interpolated
/// between the anchor rectangle and the full window.
pub fn frame(anchor: AnchorRect, window: Size, factor: f32) -> AnchorRect {
    AnchorRect {
        left: lerp(anchor.left, 0.0, factor),
        top: lerp(anchor.top, 0.0, factor),
        width: lerp(anchor.width, window.width, factor),
        height: lerp(anchor.height, window.height, factor),
    }
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: &'a Image,
    pub anchor: AnchorRect,
    pub window: Size,
    /// Openness factor; 1.0 once the opening transition settles.
    pub factor: f32,
}

/// Render the lightbox overlay for stacking above the grid.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let factor = ctx.factor.clamp(0.0, 1.0);
    let placed = frame(ctx.anchor, ctx.window, factor);

    let backdrop = mouse_area(
        container(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
            .style(container_styles::backdrop(factor * opacity::OVERLAY_STRONG))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::BackdropPressed);

    let picture = image(image::Handle::from_path(&ctx.current.src))
        .content_fit(ContentFit::Contain)
        .opacity(factor)
        .width(Length::Fixed(placed.width))
        .height(Length::Fixed(placed.height));

    let positioned = container(picture)
        .padding(Padding {
            top: placed.top.max(0.0),
            left: placed.left.max(0.0),
            ..Padding::ZERO
        })
        .align_x(Horizontal::Left)
        .align_y(Vertical::Top)
        .width(Length::Fill)
        .height(Length::Fill);

    let previous = container(labeled(
        button(icons::sized(icons::chevron_left(), sizing::ICON_LG))
            .on_press(Message::PreviousPressed)
            .style(button_styles::overlay_control)
            .padding(spacing::SM),
        ctx.i18n.tr("lightbox-previous"),
        Position::Right,
    ))
    .align_y(Vertical::Center)
    .height(Length::Fill)
    .padding(Padding {
        left: spacing::XL,
        ..Padding::ZERO
    });

    let next = container(labeled(
        button(icons::sized(icons::chevron_right(), sizing::ICON_LG))
            .on_press(Message::NextPressed)
            .style(button_styles::overlay_control)
            .padding(spacing::SM),
        ctx.i18n.tr("lightbox-next"),
        Position::Left,
    ))
    .align_x(Horizontal::Right)
    .align_y(Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(Padding {
        right: spacing::XL,
        ..Padding::ZERO
    });

    let close = container(labeled(
        button(icons::sized(icons::cross(), sizing::ICON_MD))
            .on_press(Message::ClosePressed)
            .style(button_styles::overlay_control)
            .padding(spacing::SM),
        ctx.i18n.tr("lightbox-close"),
        Position::Bottom,
    ))
    .align_x(Horizontal::Right)
    .width(Length::Fill)
    .padding(spacing::MD);

    stack![backdrop, positioned, previous, next, close].into()
}

/// Wraps a control in a hover tooltip carrying its localized label.
fn labeled<'a>(
    control: impl Into<Element<'a, Message>>,
    label: String,
    position: Position,
) -> Element<'a, Message> {
    tooltip(control, Text::new(label), position).into()
}
