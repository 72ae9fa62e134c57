// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for recoverable problems.
//!
//! - [`Notification`]: severity, i18n key and arguments
//! - [`Manager`]: visible set, queue and auto-dismiss
//! - [`Toast`]: rendering
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-add-skipped").with_arg("count", 2));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
