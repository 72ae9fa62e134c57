// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`ImageRef`](gallery::ImageRef),
//!   [`Gallery`](gallery::Gallery), [`Selection`](gallery::Selection))
//! - [`layout`]: Grid layout value objects ([`GridLayout`](layout::GridLayout),
//!   [`PreviewFraction`](layout::PreviewFraction))

pub mod gallery;
pub mod layout;
