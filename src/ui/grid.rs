// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: the staggered rows of thumbnails plus the reveal controls.
//!
//! The grid is a pure view over the controller's state; presses bubble up as
//! [`Message`]s for the application update loop. Because the row layout is
//! deterministic (fixed thumbnail size per viewport class, fixed gap,
//! centered rows), the on-screen rectangle of any thumbnail can be computed
//! here at click time and handed to the lightbox as its anchor.

use crate::catalog::{Image, ImageId};
use crate::gallery::{AnchorRect, ViewportClass};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button_styles, container_styles};
use iced::alignment::Horizontal;
use iced::widget::{button, container, image, scrollable, stack, Column, Row, Text};
use iced::{ContentFit, Element, Length, Size};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub rows: &'a [Vec<Image>],
    pub has_more_rows: bool,
    pub expanded: bool,
    pub viewport: ViewportClass,
}

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was pressed; `row`/`col` index into the *visible* rows.
    ThumbnailPressed {
        id: ImageId,
        row: usize,
        col: usize,
    },
    LoadMorePressed,
    ShowLessPressed,
    /// The grid scrolled; carries the absolute vertical offset.
    Scrolled(f32),
}

/// Square thumbnail edge for a viewport class.
pub fn thumb_size(viewport: ViewportClass) -> f32 {
    match viewport {
        ViewportClass::Wide => sizing::THUMB_WIDE,
        ViewportClass::Compact => sizing::THUMB_COMPACT,
    }
}

/// Computes the on-screen rectangle of a visible thumbnail.
///
/// Mirrors the view's layout exactly: a fixed-height header band, rows
/// stacked with the grid gap, each row centered horizontally. `scroll_offset`
/// is the scrollable's current absolute vertical offset.
pub fn thumbnail_anchor(
    window: Size,
    viewport: ViewportClass,
    row_len: usize,
    row: usize,
    col: usize,
    scroll_offset: f32,
) -> AnchorRect {
    let thumb = thumb_size(viewport);
    let row_width = row_len as f32 * thumb + row_len.saturating_sub(1) as f32 * spacing::GRID_GAP;

    let left = (window.width - row_width) / 2.0 + col as f32 * (thumb + spacing::GRID_GAP);
    let top =
        sizing::HEADER_HEIGHT + row as f32 * (thumb + spacing::GRID_GAP) - scroll_offset;

    AnchorRect {
        left,
        top,
        width: thumb,
        height: thumb,
    }
}

/// Render the gallery grid with its reveal controls.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let thumb = thumb_size(ctx.viewport);

    let title = container(
        Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::HEADER_HEIGHT));

    let mut rows_column = Column::new()
        .spacing(spacing::GRID_GAP)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    for (row_index, row) in ctx.rows.iter().enumerate() {
        let mut row_widget = Row::new().spacing(spacing::GRID_GAP);
        for (col_index, entry) in row.iter().enumerate() {
            row_widget = row_widget.push(thumbnail(entry, row_index, col_index, thumb));
        }
        rows_column = rows_column.push(row_widget);
    }

    let controls = reveal_controls(&ctx);

    let content = Column::new()
        .push(title)
        .push(rows_column)
        .push(
            container(controls)
                .center_x(Length::Fill)
                .padding([spacing::LG, 0.0]),
        )
        .width(Length::Fill);

    scrollable(content)
        .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn thumbnail<'a>(
    entry: &'a Image,
    row: usize,
    col: usize,
    thumb: f32,
) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(&entry.src))
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(thumb))
        .height(Length::Fixed(thumb));

    let slot = container(picture)
        .style(container_styles::thumbnail_slot)
        .width(Length::Fixed(thumb))
        .height(Length::Fixed(thumb));

    // Centered expand badge, echoing the control that opens the lightbox.
    let badge = container(icons::sized(icons::expand(), sizing::ICON_SM))
        .style(container_styles::expand_badge)
        .padding(spacing::XXS);

    let badged = stack![
        slot,
        container(badge)
            .center_x(Length::Fixed(thumb))
            .center_y(Length::Fixed(thumb)),
    ];

    button(badged)
        .on_press(Message::ThumbnailPressed {
            id: entry.id,
            row,
            col,
        })
        .style(button_styles::thumbnail)
        .padding(0.0)
        .into()
}

/// The original control layout: one primary "Load More" button until it is
/// first used, then the paired "Load More | Show Less" pair. "Load More"
/// disappears from the pair once every row is revealed.
fn reveal_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let load_more = || {
        button(Text::new(ctx.i18n.tr("gallery-load-more")).size(typography::BODY))
            .on_press(Message::LoadMorePressed)
            .style(button_styles::primary)
            .padding([spacing::XS, spacing::MD])
    };

    let mut controls = Row::new().spacing(spacing::MD);

    if ctx.expanded {
        controls = controls.push(load_more());
    } else {
        if ctx.has_more_rows {
            controls = controls.push(load_more());
        }
        controls = controls.push(
            button(Text::new(ctx.i18n.tr("gallery-show-less")).size(typography::BODY))
                .on_press(Message::ShowLessPressed)
                .style(button_styles::primary)
                .padding([spacing::XS, spacing::MD]),
        );
    }

    controls.into()
}
