// SPDX-License-Identifier: MPL-2.0
//! Gallery screen component.
//!
//! Holds only presentation state: decoded-image handles per reference, grid
//! geometry and the last known window size. The gallery itself and the
//! selection live in [`GalleryService`](crate::application::GalleryService);
//! user intents are reported back as [`Effect`]s.

use super::{drop_zone, grid, preview};
use crate::application::port::ImageSource;
use crate::domain::gallery::{Gallery, ImageRef, Selection};
use crate::domain::layout::{GridLayout, PreviewFraction};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, scrollable, text, Stack};
use iced::{alignment, Element, Length, Size};
use std::collections::HashMap;

/// Window size assumed until the first resize event arrives.
pub const INITIAL_WINDOW_SIZE: Size = Size::new(800.0, 650.0);

#[derive(Debug, Clone)]
pub enum Message {
    AddClicked,
    TileClicked(usize),
    DeletePressed(usize),
    BackdropClicked,
}

/// What the application must do in response to a component message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    PickImages,
    Select(usize),
    Delete(usize),
    ClearSelection,
}

/// Renderable state of one reference.
#[derive(Debug, Clone)]
pub enum TileImage {
    Ready(image::Handle),
    Unavailable,
}

impl TileImage {
    fn from_source(source: ImageSource) -> Self {
        match source {
            ImageSource::File(path) => TileImage::Ready(image::Handle::from_path(path)),
            ImageSource::Memory(bytes) => TileImage::Ready(image::Handle::from_bytes(bytes.to_vec())),
            ImageSource::Unavailable => TileImage::Unavailable,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, TileImage::Ready(_))
    }
}

pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub selection: &'a Selection,
}

#[derive(Debug)]
pub struct State {
    // One handle per distinct reference so iced keeps decoded images cached.
    tiles: HashMap<ImageRef, TileImage>,
    layout: GridLayout,
    preview: PreviewFraction,
    window_size: Size,
}

impl Default for State {
    fn default() -> Self {
        Self::new(GridLayout::default(), PreviewFraction::default())
    }
}

impl State {
    #[must_use]
    pub fn new(layout: GridLayout, preview: PreviewFraction) -> Self {
        Self {
            tiles: HashMap::new(),
            layout,
            preview,
            window_size: INITIAL_WINDOW_SIZE,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::AddClicked => Effect::PickImages,
            Message::TileClicked(index) => Effect::Select(index),
            Message::DeletePressed(index) => Effect::Delete(index),
            Message::BackdropClicked => Effect::ClearSelection,
        }
    }

    pub fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Brings the handle cache in line with `gallery`: new references are
    /// resolved, references no longer shown are dropped.
    pub fn sync(&mut self, gallery: &Gallery, resolve: impl Fn(&ImageRef) -> ImageSource) {
        self.tiles.retain(|image, _| gallery.contains(image));
        for image in gallery {
            if !self.tiles.contains_key(image) {
                let tile = TileImage::from_source(resolve(image));
                self.tiles.insert(image.clone(), tile);
            }
        }
    }

    #[must_use]
    pub fn tile_image(&self, image: &ImageRef) -> TileImage {
        self.tiles
            .get(image)
            .cloned()
            .unwrap_or(TileImage::Unavailable)
    }

    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.tiles.len()
    }

    /// Width the grid may use inside the page padding.
    #[must_use]
    pub fn grid_width(&self) -> f32 {
        (self.window_size.width - 2.0 * spacing::LG).max(0.0)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let i18n = env.i18n;

        let add_button = button(text(i18n.tr("add-images-button")).size(typography::BODY))
            .on_press(Message::AddClicked)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        let header = column![
            text(i18n.tr("gallery-title")).size(typography::TITLE_LG),
            add_button,
            drop_zone::view(i18n.tr("drop-zone-hint")),
        ]
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

        let tiles = env
            .gallery
            .iter()
            .map(|image| self.tile_image(image))
            .collect();

        let grid = grid::view(grid::GridContext {
            i18n,
            gallery: env.gallery,
            layout: self.layout,
            available_width: self.grid_width(),
            tiles,
        });

        let content = column![header, grid]
            .spacing(spacing::LG)
            .width(Length::Fill)
            .max_width(self.layout.content_width(self.grid_width()));

        let page = scrollable(
            container(content)
                .center_x(Length::Fill)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        match env.selection.current() {
            Some(selected) => Stack::new()
                .push(page)
                .push(preview::view(
                    i18n,
                    self.tile_image(selected),
                    self.preview,
                    self.window_size,
                ))
                .into(),
            None => page.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn gallery_of(handles: &[&str]) -> Gallery {
        Gallery::from_images(handles.iter().map(|h| ImageRef::from(*h)).collect())
    }

    fn resolver(image: &ImageRef) -> ImageSource {
        match image.scheme() {
            Some("file") => ImageSource::File(PathBuf::from("/tmp/a.png")),
            Some("session") => ImageSource::Memory(Arc::from(&b"bytes"[..])),
            _ => ImageSource::Unavailable,
        }
    }

    #[test]
    fn messages_map_to_effects() {
        let mut state = State::default();
        assert_eq!(state.handle_message(Message::AddClicked), Effect::PickImages);
        assert_eq!(state.handle_message(Message::TileClicked(2)), Effect::Select(2));
        assert_eq!(state.handle_message(Message::DeletePressed(0)), Effect::Delete(0));
        assert_eq!(
            state.handle_message(Message::BackdropClicked),
            Effect::ClearSelection
        );
    }

    #[test]
    fn sync_caches_one_entry_per_distinct_reference() {
        let mut state = State::default();
        state.sync(&gallery_of(&["file:///a", "session:x-1", "file:///a"]), resolver);

        assert_eq!(state.cached_count(), 2);
        assert!(state.tile_image(&ImageRef::from("file:///a")).is_ready());
        assert!(state.tile_image(&ImageRef::from("session:x-1")).is_ready());
    }

    #[test]
    fn sync_drops_removed_references() {
        let mut state = State::default();
        state.sync(&gallery_of(&["file:///a", "file:///b"]), resolver);
        state.sync(&gallery_of(&["file:///b"]), resolver);

        assert_eq!(state.cached_count(), 1);
        assert!(!state.tile_image(&ImageRef::from("file:///a")).is_ready());
    }

    #[test]
    fn unresolvable_reference_is_unavailable() {
        let mut state = State::default();
        state.sync(&gallery_of(&["gone:1"]), resolver);
        assert!(!state.tile_image(&ImageRef::from("gone:1")).is_ready());
    }

    #[test]
    fn grid_width_subtracts_page_padding() {
        let mut state = State::default();
        state.set_window_size(Size::new(648.0, 500.0));
        assert_eq!(state.grid_width(), 600.0);

        state.set_window_size(Size::new(10.0, 10.0));
        assert_eq!(state.grid_width(), 0.0);
    }
}
