// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.
//!
//! At most [`MAX_VISIBLE_NOTIFICATIONS`] toasts show at once; the rest wait
//! in FIFO order. Pushing a message that is already visible restarts its
//! timer instead of stacking a copy, so repeated write failures produce a
//! single toast.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "notification");
            }
            Severity::Error => {
                tracing::error!(key = notification.message_key(), "notification");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.message_key(), "notification");
            }
        }

        if let Some(existing) = self
            .visible
            .iter_mut()
            .find(|shown| shown.same_message(&notification))
        {
            existing.restart(Instant::now());
            return;
        }
        if self.queue.iter().any(|queued| queued.same_message(&notification)) {
            return;
        }

        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Dismisses every visible notification whose timer ran out at `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Drives whether the tick subscription runs.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            let Some(next) = self.queue.pop_front() else {
                break;
            };
            let mut next = next;
            next.restart(Instant::now());
            self.visible.push_back(next);
        }
    }
}
