// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Gallery operations run synchronously here; the only asynchronous work is
//! the native file dialog.

use super::Message;
use crate::application::port::SnapshotError;
use crate::application::{GalleryService, MountReport};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, Effect};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// Extensions offered by the picker filter. Dropped files are not filtered.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tif", "tiff",
];

/// Mutable view of the parts of `App` the handlers touch.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub service: &'a mut GalleryService,
    pub gallery_ui: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Rebuilds the tile cache after the gallery changed.
    fn sync_tiles(&mut self) {
        let service = &*self.service;
        self.gallery_ui
            .sync(service.gallery(), |image| service.resolve(image));
    }

    fn report_write(&mut self, result: Result<(), SnapshotError>) {
        if let Err(err) = result {
            self.notifications
                .push(Notification::warning(err.i18n_key()));
        }
    }
}

/// Turns the boot report into toasts.
pub fn report_mount(notifications: &mut notifications::Manager, report: &MountReport) {
    for err in &report.errors {
        notifications.push(Notification::warning(err.i18n_key()));
    }
    if report.stale > 0 {
        notifications.push(
            Notification::info("notification-stale-references").with_arg("count", report.stale),
        );
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery_ui.handle_message(message) {
        Effect::None => Task::none(),
        Effect::PickImages => handle_open_file_dialog(ctx.i18n),
        Effect::Select(index) => {
            if !ctx.service.select_index(index) {
                tracing::debug!(index, "ignoring selection of missing tile");
            }
            Task::none()
        }
        Effect::ClearSelection => {
            ctx.service.clear_selection();
            Task::none()
        }
        Effect::Delete(index) => {
            if let Some(outcome) = ctx.service.delete_image(index) {
                ctx.sync_tiles();
                ctx.report_write(outcome.persisted);
            }
            Task::none()
        }
    }
}

/// Opens the native multi-file dialog filtered to image extensions.
pub fn handle_open_file_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("add-images-dialog-title");
    let filter_name = i18n.tr("image-filter-name");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::FilesPicked,
    )
}

/// Handles the result of the open file dialog. A cancelled dialog and an
/// empty selection both leave the gallery untouched.
pub fn handle_files_picked(
    ctx: &mut UpdateContext<'_>,
    paths: Option<Vec<PathBuf>>,
) -> Task<Message> {
    match paths {
        Some(paths) => add_images(ctx, &paths),
        None => tracing::debug!("file dialog cancelled"),
    }
    Task::none()
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    add_images(ctx, std::slice::from_ref(&path));
    Task::none()
}

fn add_images(ctx: &mut UpdateContext<'_>, paths: &[PathBuf]) {
    let outcome = ctx.service.add_images(paths);

    if outcome.added > 0 {
        ctx.sync_tiles();
    }
    if !outcome.skipped.is_empty() {
        ctx.notifications.push(
            Notification::warning("notification-add-skipped")
                .with_arg("count", outcome.skipped.len()),
        );
    }
    if let Some(result) = outcome.persisted {
        ctx.report_write(result);
    }
}
