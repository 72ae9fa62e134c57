// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Space};
use iced::{alignment, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Resolves the toast text in the current locale.
    #[must_use]
    pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
        if notification.message_args().is_empty() {
            return i18n.tr(notification.message_key());
        }
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    }

    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let marker = container(Space::new())
            .width(Length::Fixed(border::WIDTH_MD * 2.0))
            .height(Length::Fixed(typography::BODY * 1.5))
            .style(move |_theme: &Theme| container::Style {
                background: Some(accent.into()),
                ..Default::default()
            });

        let dismiss = tooltip(
            button(text("✕").size(typography::CAPTION))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(styles::button::dismiss),
            text(i18n.tr("notification-dismiss")).size(typography::CAPTION),
            tooltip::Position::Left,
        );

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(marker)
            .push(
                Container::new(
                    text(Self::message_text(notification, i18n)).size(typography::BODY),
                )
                .width(Length::Fill),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(accent))
            .into()
    }

    /// Stacks visible toasts in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts = Column::with_children(
            manager
                .visible()
                .map(|notification| Self::view(notification, i18n)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

        Container::new(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn message_text_interpolates_arguments() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let notification = Notification::warning("notification-add-skipped").with_arg("count", 2);
        assert_eq!(
            Toast::message_text(&notification, &i18n),
            "2 files could not be added"
        );
    }

    #[test]
    fn message_text_without_arguments() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let notification = Notification::warning("notification-snapshot-write-error");
        assert_eq!(
            Toast::message_text(&notification, &i18n),
            "Could not save the gallery"
        );
    }
}
