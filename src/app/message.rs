// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{app_screen, home, settings};
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// view-level messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    AppScreen(app_screen::Message),
    Settings(settings::Message),
    Pointer(PointerEvent),
    WindowResized(Size),
    /// Animation clock; only subscribed while something is moving.
    Tick(Instant),
}

/// Mouse and touch input reduced to what the gesture recognizer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    /// Mouse presses carry no position; the last cursor position is used.
    Pressed(Option<Point>),
    Released(Option<Point>),
    Lost,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for preferences.toml).
    /// Takes precedence over `ONEUI_SHELL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Animation speed for this run, overriding the stored preference.
    pub speed: Option<f64>,
}
