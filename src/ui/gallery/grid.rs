// SPDX-License-Identifier: MPL-2.0
//! Responsive tile grid.
//!
//! Columns come from [`GridLayout::rows`]. Every row has the same number of
//! cells; a short last row is padded with empty cells so its tiles keep the
//! column width instead of stretching.

use super::component::{Message, TileImage};
use crate::domain::gallery::Gallery;
use crate::domain::layout::GridLayout;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, column, container, image, text, tooltip, Column, Row, Space,
    Stack,
};
use iced::{alignment, ContentFit, Element, Length};

pub struct GridContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub layout: GridLayout,
    /// Width available to the grid before the max-content cap.
    pub available_width: f32,
    /// Resolved image for each gallery position.
    pub tiles: Vec<TileImage>,
}

pub fn view(ctx: GridContext<'_>) -> Element<'_, Message> {
    let count = ctx.gallery.len();
    let columns = ctx.layout.column_count(ctx.available_width, count);
    let mut tiles = ctx.tiles.into_iter();

    let rows = ctx
        .layout
        .rows(ctx.available_width, count)
        .into_iter()
        .map(|range| {
            let filled = range.len();
            let mut row = Row::new().spacing(ctx.layout.gap());
            for index in range {
                let image = tiles.next().unwrap_or(TileImage::Unavailable);
                row = row.push(tile(ctx.i18n, index, image));
            }
            for _ in filled..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            Element::from(row)
        });

    Column::with_children(rows)
        .spacing(ctx.layout.gap())
        .width(Length::Fill)
        .into()
}

fn tile<'a>(i18n: &I18n, index: usize, image_state: TileImage) -> Element<'a, Message> {
    let body: Element<'a, Message> = match image_state {
        TileImage::Ready(handle) => container(
            image(handle)
                .width(Length::Fill)
                .content_fit(ContentFit::Contain),
        )
        .style(styles::container::tile)
        .into(),
        TileImage::Unavailable => {
            let position = (index + 1).to_string();
            let label = column![
                text(i18n.tr("tile-unavailable")).size(typography::BODY),
                text(i18n.tr_with_args("tile-alt", &[("index", position.as_str())]))
                    .size(typography::CAPTION),
            ]
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center);

            container(center(label))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::TILE_HEIGHT))
                .style(styles::container::placeholder)
                .into()
        }
    };

    let open = button(body)
        .on_press(Message::TileClicked(index))
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::tile);

    let delete = tooltip(
        button(center(text(i18n.tr("delete-button")).size(typography::CAPTION)))
            .on_press(Message::DeletePressed(index))
            .width(Length::Fixed(sizing::DELETE_BUTTON))
            .height(Length::Fixed(sizing::DELETE_BUTTON))
            .padding(0)
            .style(styles::button::delete),
        text(i18n.tr("delete-button-tooltip")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    );

    let corner = container(delete)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::XXS + 1.0);

    Stack::new()
        .push(open)
        .push(corner)
        .width(Length::Fill)
        .into()
}
