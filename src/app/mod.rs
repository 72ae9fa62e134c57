// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery service (domain state plus storage and
//! reference adapters) to the gallery screen and the toast manager, and
//! translates messages into side effects like snapshot writes or the file
//! dialog. Startup never fails: unusable settings, snapshots or directories
//! degrade to defaults and surface as notifications.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::IMAGE_EXTENSIONS;

use crate::application::port::{MediaReferenceProvider, SnapshotStore};
use crate::application::GalleryService;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{
    build_provider, FileKeyValueStore, JsonSnapshotStore, MemoryKeyValueStore,
};
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    service: GalleryService,
    gallery_ui: gallery::State,
    /// Resolved once at boot; `System` is not re-detected afterwards.
    theme: Theme,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("service", &self.service)
            .field("theme", &self.theme)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Opens the snapshot store under `data_dir`, or an in-memory one when no
/// data directory can be resolved (the gallery then lasts one session).
fn open_snapshot_store(data_dir: Option<&Path>) -> Box<dyn SnapshotStore> {
    match data_dir {
        Some(dir) => Box::new(JsonSnapshotStore::new(FileKeyValueStore::in_data_dir(dir))),
        None => {
            tracing::warn!("no data directory, the gallery will not survive a restart");
            Box::new(JsonSnapshotStore::new(MemoryKeyValueStore::new()))
        }
    }
}

/// The CLI flag wins over the settings file.
fn open_provider(
    config: &Config,
    flags: &Flags,
    data_dir: Option<&Path>,
) -> Box<dyn MediaReferenceProvider> {
    let mode = flags.reference_mode.unwrap_or(config.gallery.reference_mode);
    build_provider(mode, data_dir)
}

impl App {
    /// Initializes application state: settings, locale, the persisted
    /// gallery and the tile cache.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let data_dir =
            paths::get_app_data_dir_with_override(flags.data_dir.as_ref().map(PathBuf::from));
        let store = open_snapshot_store(data_dir.as_deref());
        let provider = open_provider(&config, &flags, data_dir.as_deref());
        let (service, report) = GalleryService::mount(store, provider);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }
        update::report_mount(&mut notifications, &report);

        let mut gallery_ui =
            gallery::State::new(config.gallery.grid_layout(), config.gallery.preview_fraction());
        gallery_ui.sync(service.gallery(), |image| service.resolve(image));

        let app = App {
            i18n,
            service,
            gallery_ui,
            theme: config.general.theme_mode.iced_theme(),
            notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let count = self.service.gallery().len().to_string();
        self.i18n
            .tr_with_args("window-title", &[("count", count.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            service: &mut self.service,
            gallery_ui: &mut self.gallery_ui,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::FilesPicked(paths) => update::handle_files_picked(&mut ctx, paths),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::WindowResized(size) => {
                ctx.gallery_ui.set_window_size(size);
                Task::none()
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            service: &self.service,
            gallery_ui: &self.gallery_ui,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReferenceMode;
    use crate::infrastructure::SNAPSHOT_KEY;
    use iced::Size;
    use std::fs;
    use tempfile::tempdir;

    fn flags_in(dir: &Path) -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            data_dir: Some(dir.join("data").to_string_lossy().into_owned()),
            config_dir: Some(dir.join("config").to_string_lossy().into_owned()),
            reference_mode: None,
        }
    }

    fn write_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").expect("write image");
        path
    }

    #[test]
    fn new_starts_with_empty_gallery_and_writes_snapshot() {
        let temp_dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(flags_in(temp_dir.path()));

        assert!(app.service.gallery().is_empty());
        assert!(!app.notifications.has_notifications());
        let snapshot = temp_dir
            .path()
            .join("data")
            .join("storage")
            .join(format!("{SNAPSHOT_KEY}.json"));
        assert_eq!(fs::read_to_string(snapshot).expect("snapshot"), "[]");
    }

    #[test]
    fn title_includes_image_count() {
        let temp_dir = tempdir().expect("temp dir");
        let image = write_image(temp_dir.path(), "cat.png");
        let (mut app, _task) = App::new(flags_in(temp_dir.path()));
        assert_eq!(app.title(), "IcedGallery");

        let _ = app.update(Message::FileDropped(image));
        assert_eq!(app.title(), "IcedGallery - 1 image");
    }

    #[test]
    fn gallery_survives_restart_with_path_references() {
        let temp_dir = tempdir().expect("temp dir");
        let first = write_image(temp_dir.path(), "a.png");
        let second = write_image(temp_dir.path(), "b.png");

        {
            let (mut app, _task) = App::new(flags_in(temp_dir.path()));
            let _ = app.update(Message::FilesPicked(Some(vec![first, second])));
            assert_eq!(app.service.gallery().len(), 2);
        }

        let (app, _task) = App::new(flags_in(temp_dir.path()));
        assert_eq!(app.service.gallery().len(), 2);
        assert_eq!(app.gallery_ui.cached_count(), 2);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn session_references_are_stale_after_restart() {
        let temp_dir = tempdir().expect("temp dir");
        let image = write_image(temp_dir.path(), "a.png");
        let mut flags = flags_in(temp_dir.path());
        flags.reference_mode = Some(ReferenceMode::Session);

        {
            let (mut app, _task) = App::new(flags.clone());
            let _ = app.update(Message::FileDropped(image));
        }

        let (app, _task) = App::new(flags);
        assert_eq!(app.service.gallery().len(), 1);
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(Notification::message_key)
            .collect();
        assert_eq!(keys, vec!["notification-stale-references"]);
    }

    #[test]
    fn malformed_snapshot_boots_empty_with_warning() {
        let temp_dir = tempdir().expect("temp dir");
        let storage = temp_dir.path().join("data").join("storage");
        fs::create_dir_all(&storage).expect("storage dir");
        fs::write(storage.join(format!("{SNAPSHOT_KEY}.json")), "{not json").expect("write");

        let (app, _task) = App::new(flags_in(temp_dir.path()));

        assert!(app.service.gallery().is_empty());
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(Notification::message_key)
            .collect();
        assert_eq!(keys, vec!["notification-snapshot-parse-error"]);
    }

    #[test]
    fn invalid_settings_fall_back_with_warning() {
        let temp_dir = tempdir().expect("temp dir");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("config dir");
        fs::write(config_dir.join("settings.toml"), "[gallery\nbroken").expect("write");

        let (app, _task) = App::new(flags_in(temp_dir.path()));

        assert_eq!(app.service.provider_name(), "path");
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-config-load-error"));
    }

    #[test]
    fn settings_choose_reference_mode_unless_overridden() {
        let temp_dir = tempdir().expect("temp dir");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("config dir");
        fs::write(
            config_dir.join("settings.toml"),
            "[gallery]\nreference_mode = \"library\"\n",
        )
        .expect("write");

        let (app, _task) = App::new(flags_in(temp_dir.path()));
        assert_eq!(app.service.provider_name(), "library");

        let mut flags = flags_in(temp_dir.path());
        flags.reference_mode = Some(ReferenceMode::Session);
        let (app, _task) = App::new(flags);
        assert_eq!(app.service.provider_name(), "session");
    }

    #[test]
    fn resize_updates_grid_width() {
        let temp_dir = tempdir().expect("temp dir");
        let (mut app, _task) = App::new(flags_in(temp_dir.path()));

        let _ = app.update(Message::WindowResized(Size::new(1000.0, 700.0)));
        assert_eq!(app.gallery_ui.window_size(), Size::new(1000.0, 700.0));
    }

    #[test]
    fn dismiss_removes_toast() {
        let temp_dir = tempdir().expect("temp dir");
        let (mut app, _task) = App::new(flags_in(temp_dir.path()));
        let _ = app.update(Message::FileDropped(temp_dir.path().join("missing.png")));

        let id = app
            .notifications
            .visible()
            .next()
            .map(Notification::id)
            .expect("skip warning");
        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn theme_comes_from_settings() {
        let temp_dir = tempdir().expect("temp dir");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("config dir");
        fs::write(
            config_dir.join("settings.toml"),
            "[general]\ntheme_mode = \"light\"\n",
        )
        .expect("write");

        let (mut app, _task) = App::new(flags_in(temp_dir.path()));
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Tick(std::time::Instant::now()),
        ));
        assert_eq!(app.theme(), Theme::Light);
    }
}
