// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: heading, picker button, drop zone, tile grid and
//! preview overlay.

pub mod component;
mod drop_zone;
mod grid;
mod preview;

pub use component::{Effect, Message, State, TileImage, ViewEnv};
