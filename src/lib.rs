// SPDX-License-Identifier: MPL-2.0
//! `oneui_shell` is a simulated phone home screen built with the Iced GUI
//! framework.
//!
//! Its core is a view-state transition engine ([`shell`]): a screen registry,
//! a state machine that keeps at most one screen active while sequencing
//! eased open and close animations, a swipe recognizer and a scripted
//! quick-switch demo. [`config`] persists user preferences, [`ui`] and
//! [`app`] render the engine state with Iced.

pub mod app;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
