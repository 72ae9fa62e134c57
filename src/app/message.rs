// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::ReferenceMode;
use crate::ui::gallery;
use crate::ui::notifications;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Result of the native multi-file dialog; `None` when cancelled.
    FilesPicked(Option<Vec<PathBuf>>),
    /// One file dropped on the window. iced emits one event per file.
    FileDropped(PathBuf),
    WindowResized(Size),
}

/// Runtime flags passed in from the launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP47 form (e.g. `ja`).
    pub lang: Option<String>,
    /// Optional data directory override (for testing).
    /// Takes precedence over `ICED_GALLERY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for testing).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Overrides `gallery.reference_mode` from the settings file.
    pub reference_mode: Option<ReferenceMode>,
}
