// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every user-issued transition first cancels a running demo, then moves the
//! timeline to "now" and hands the request to the view-state machine.

use super::message::PointerEvent;
use crate::config::{
    PreferenceStore, Preferences, KEY_ANIM_EASING, KEY_ANIM_SPEED, KEY_ONEUI8_MODE, KEY_THEME,
    KEY_WALLPAPER,
};
use crate::error::Result;
use crate::shell::{DemoSequencer, GestureRecognizer, Outcome, ScreenId, ViewStateMachine};
use crate::ui::theming::ColorScheme;
use crate::ui::{app_screen, home, settings};
use iced::{Point, Size};
use std::time::Duration;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub machine: &'a mut ViewStateMachine,
    pub demo: &'a mut DemoSequencer,
    pub gestures: &'a mut GestureRecognizer,
    pub preferences: &'a mut Preferences,
    pub store: &'a mut PreferenceStore,
    pub colors: &'a mut ColorScheme,
    pub window_size: &'a mut Size,
    pub cursor: &'a mut Option<Point>,
    pub settings_open: &'a mut bool,
    /// Timeline position of this message.
    pub now: Duration,
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) {
    ctx.machine.advance_to(ctx.now);
    ctx.demo.advance(ctx.machine);
}

pub fn handle_home(ctx: &mut UpdateContext<'_>, message: home::Message) {
    match message {
        home::Message::IconPressed(id) => {
            user_transition(ctx, "open", |machine| machine.open(&id));
        }
        home::Message::SettingsPressed => {
            *ctx.settings_open = !*ctx.settings_open;
        }
    }
}

pub fn handle_app_screen(ctx: &mut UpdateContext<'_>, message: app_screen::Message) {
    match message {
        app_screen::Message::BackPressed(id) => {
            user_transition(ctx, "close", |machine| machine.close(&id));
        }
    }
}

pub fn handle_settings(ctx: &mut UpdateContext<'_>, message: settings::Message) {
    match message {
        settings::Message::SpeedSelected(speed) => {
            ctx.preferences.speed = speed;
            ctx.machine.set_speed(speed);
            save_key(ctx.store, KEY_ANIM_SPEED, speed.as_pref());
        }
        settings::Message::EasingSelected(profile) => {
            ctx.preferences.easing = profile;
            ctx.machine.set_profile(profile);
            save_key(ctx.store, KEY_ANIM_EASING, profile.as_pref());
        }
        settings::Message::OneUi8Toggled(enabled) => {
            ctx.preferences.oneui8_mode = enabled;
            ctx.machine.set_pace(ctx.preferences.pace());
            save_key(ctx.store, KEY_ONEUI8_MODE, enabled.to_string());
        }
        settings::Message::ThemeSelected(theme) => {
            ctx.preferences.theme = theme;
            *ctx.colors = ColorScheme::for_choice(theme);
            save_key(ctx.store, KEY_THEME, theme.as_pref());
        }
        settings::Message::WallpaperSelected(wallpaper) => {
            ctx.preferences.wallpaper = wallpaper;
            save_key(ctx.store, KEY_WALLPAPER, wallpaper.as_pref());
        }
        settings::Message::DemoPressed => {
            if ctx.demo.is_running() {
                ctx.demo.cancel();
            } else {
                ctx.machine.advance_to(ctx.now);
                ctx.demo.start(ctx.machine);
                ctx.demo.advance(ctx.machine);
            }
        }
        settings::Message::ClosePressed => {
            *ctx.settings_open = false;
        }
    }
}

pub fn handle_pointer(ctx: &mut UpdateContext<'_>, event: PointerEvent) {
    match event {
        PointerEvent::Moved(position) => {
            *ctx.cursor = Some(position);
            ctx.gestures.pointer_move(position);
        }
        PointerEvent::Pressed(position) => {
            if let Some(origin) = position.or(*ctx.cursor) {
                ctx.gestures.pointer_down(origin);
            }
        }
        PointerEvent::Released(position) => {
            if let Some(intent) = ctx.gestures.pointer_up(position.or(*ctx.cursor)) {
                user_transition(ctx, "swipe", |machine| machine.apply_intent(intent));
            }
        }
        PointerEvent::Lost => ctx.gestures.cancel(),
    }
}

pub fn handle_resize(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.window_size = size;
}

fn user_transition<F>(ctx: &mut UpdateContext<'_>, operation: &str, apply: F)
where
    F: FnOnce(&mut ViewStateMachine) -> Result<Outcome>,
{
    ctx.demo.cancel();
    ctx.machine.advance_to(ctx.now);

    match apply(ctx.machine) {
        Ok(Outcome::Applied) => {}
        Ok(Outcome::Ignored(reason)) => {
            log::debug!("{operation} ignored: {reason:?}");
        }
        Err(err) => {
            log::warn!("{operation} failed: {err}");
        }
    }
}

/// Writes one preference through to disk, logging failures.
fn save_key(store: &mut PreferenceStore, key: &str, value: impl Into<String>) {
    if let Err(err) = store.set(key, value) {
        log::warn!("failed to save preference `{key}`: {err}");
    }
}

/// Apps in the order the home grid shows them.
#[must_use]
pub fn grid_apps(machine: &ViewStateMachine) -> Vec<ScreenId> {
    machine
        .registry()
        .apps()
        .map(|screen| screen.id().clone())
        .collect()
}
