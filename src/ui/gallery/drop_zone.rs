// SPDX-License-Identifier: MPL-2.0
//! Dashed drop target with a centered hint.
//!
//! Drops are accepted anywhere in the window; this area only tells the user
//! where to aim. Clicking it opens the file picker.

use super::component::Message;
use crate::ui::design_tokens::{border, sizing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, LineDash, Path, Stroke};
use iced::widget::{center, mouse_area, text, Canvas, Stack};
use iced::{mouse, Element, Length, Rectangle, Renderer, Size, Theme};

static DASH_PATTERN: [f32; 2] = [border::DASH, border::DASH];

/// Canvas program drawing the dashed outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashedOutline;

impl DashedOutline {
    /// Outline rectangle inset by half the stroke so the line is not clipped.
    fn outline(bounds: Size) -> (iced::Point, Size) {
        let inset = border::WIDTH_MD / 2.0;
        (
            iced::Point::new(inset, inset),
            Size::new(
                (bounds.width - border::WIDTH_MD).max(0.0),
                (bounds.height - border::WIDTH_MD).max(0.0),
            ),
        )
    }
}

impl<M> canvas::Program<M> for DashedOutline {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let (origin, size) = Self::outline(bounds.size());

        frame.stroke(
            &Path::rectangle(origin, size),
            Stroke {
                line_dash: LineDash {
                    segments: &DASH_PATTERN,
                    offset: 0,
                },
                ..Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(ColorScheme::for_theme(theme).drop_zone)
            },
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

pub fn view<'a>(hint: String) -> Element<'a, Message> {
    let outline = Canvas::new(DashedOutline)
        .width(Length::Fill)
        .height(Length::Fill);

    let zone = Stack::new()
        .push(outline)
        .push(center(text(hint).size(typography::BODY_LG)))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT));

    mouse_area(zone).on_press(Message::AddClicked).into()
}
