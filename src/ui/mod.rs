// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - Gallery screen: header, drop zone, grid and preview overlay
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
