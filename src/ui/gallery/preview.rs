// SPDX-License-Identifier: MPL-2.0
//! Modal preview of the selected image.
//!
//! The overlay covers the whole window with a dimmed backdrop and swallows
//! every click behind it. Any click on it, image included, closes it.

use super::component::{Message, TileImage};
use crate::domain::layout::PreviewFraction;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles;
use iced::widget::{center, container, image, mouse_area, opaque, text};
use iced::{ContentFit, Element, Length, Size};

pub fn view<'a>(
    i18n: &I18n,
    tile: TileImage,
    fraction: PreviewFraction,
    window: Size,
) -> Element<'a, Message> {
    let (max_width, max_height) = fraction.bounds(window.width, window.height);

    let content: Element<'a, Message> = match tile {
        // ScaleDown keeps small images at their natural size.
        TileImage::Ready(handle) => image(handle)
            .width(Length::Fixed(max_width))
            .height(Length::Fixed(max_height))
            .content_fit(ContentFit::ScaleDown)
            .into(),
        TileImage::Unavailable => text(i18n.tr("tile-unavailable"))
            .size(typography::BODY_LG)
            .color(palette::WHITE)
            .into(),
    };

    let backdrop = container(center(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::BackdropClicked))
}
