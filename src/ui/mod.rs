// SPDX-License-Identifier: MPL-2.0
//! User interface views.
//!
//! Elm-style "state down, messages up": every view takes a borrowed
//! context and returns an element producing its own `Message` type, which the
//! application maps into its top-level message.
//!
//! - [`home`] - Wallpaper, status bar and app icon grid
//! - [`app_screen`] - Sliding app overlay with a back button
//! - [`settings`] - Animation, appearance and demo controls
//! - [`catalog`] - Labels, glyphs and accents of the stock apps
//! - [`styles`] - Centralized widget styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark color schemes and wallpapers

pub mod app_screen;
pub mod catalog;
pub mod design_tokens;
pub mod home;
pub mod settings;
pub mod styles;
pub mod theming;
