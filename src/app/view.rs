// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the gallery grid (or the empty state) and stacks the lightbox
//! overlay above it while one is showing.

use super::Message;
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button_styles;
use crate::ui::{grid, lightbox};
use iced::alignment::Horizontal;
use iced::widget::{button, container, stack, Column, Text};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryController,
    pub window_size: Size,
    /// Lightbox openness factor; `None` while no overlay is showing.
    pub overlay_factor: Option<f32>,
    /// Pending warning, as an i18n key.
    pub warning: Option<&'a str>,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = if ctx.gallery.catalog().is_empty() {
        view_empty_state(ctx.i18n)
    } else {
        grid::view(grid::ViewContext {
            i18n: ctx.i18n,
            rows: ctx.gallery.visible_rows(),
            has_more_rows: ctx.gallery.has_more_rows(),
            expanded: ctx.gallery.is_expanded(),
            viewport: ctx.gallery.viewport(),
        })
        .map(Message::Grid)
    };

    let base = match ctx.warning {
        Some(key) => with_warning_banner(base, ctx.i18n.tr(key)),
        None => base,
    };

    match overlay(&ctx) {
        Some(overlay) => stack![base, overlay].into(),
        None => base,
    }
}

fn overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let factor = ctx.overlay_factor?;
    let current = ctx.gallery.lightbox().current()?;

    Some(
        lightbox::view(lightbox::ViewContext {
            i18n: ctx.i18n,
            current,
            anchor: ctx.gallery.lightbox().anchor(),
            window: ctx.window_size,
            factor,
        })
        .map(Message::Lightbox),
    )
}

fn view_empty_state(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("gallery-empty-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("gallery-empty-hint")).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("gallery-open-folder")).size(typography::BODY))
                .on_press(Message::OpenFolderDialog)
                .style(button_styles::primary)
                .padding([spacing::XS, spacing::MD]),
        );

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn with_warning_banner(base: Element<'_, Message>, text: String) -> Element<'_, Message> {
    let banner = container(Text::new(text).size(typography::BODY_SM))
        .center_x(Length::Fill)
        .padding(spacing::XS);

    Column::new()
        .push(container(base).height(Length::Fill))
        .push(banner)
        .into()
}
