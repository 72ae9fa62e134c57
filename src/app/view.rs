// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery fills the window; toasts float above it, including above the
//! preview overlay.

use super::Message;
use crate::application::GalleryService;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{self, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub service: &'a GalleryService,
    pub gallery_ui: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = ctx
        .gallery_ui
        .view(gallery::ViewEnv {
            i18n: ctx.i18n,
            gallery: ctx.service.gallery(),
            selection: ctx.service.selection(),
        })
        .map(Message::Gallery);

    if !ctx.notifications.has_notifications() {
        return gallery_view;
    }

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(gallery_view)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
