// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a lightweight image gallery built with the Iced GUI framework.
//!
//! Images are added with a file dialog or by dropping them on the window,
//! shown in a responsive grid, enlarged in a modal preview and removed one by
//! one. The ordered list of image references survives restarts.
//!
//! # Layers
//!
//! - [`domain`] - gallery, selection and grid geometry, free of I/O
//! - [`application`] - ports (traits) and the [`application::GalleryService`]
//! - [`infrastructure`] - storage and image reference adapters
//! - [`ui`] / [`app`] - the Iced front end

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
