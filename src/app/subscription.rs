// SPDX-License-Identifier: MPL-2.0
//! Subscription management for the application.
//!
//! Window events are routed to gallery messages; a periodic tick runs only
//! while toasts are on screen.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss check.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window-level events the gallery cares about.
///
/// Drops are accepted anywhere on the window, whatever widget is under the
/// cursor. Hover events are not forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL)
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
