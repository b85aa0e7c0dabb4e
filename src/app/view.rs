// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: home over its wallpaper, then for each visible app
//! a scrim and the sliding app card (closing apps under the active one), then
//! the settings panel when open.

use super::message::Message;
use crate::config::Preferences;
use crate::shell::{ScreenId, ViewStateMachine, Visibility};
use crate::ui::design_tokens::spacing;
use crate::ui::theming::ColorScheme;
use crate::ui::{app_screen, home, settings, styles};
use iced::alignment::Horizontal;
use iced::widget::{container, Space, Stack};
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub machine: &'a ViewStateMachine,
    pub grid_apps: &'a [ScreenId],
    pub preferences: &'a Preferences,
    pub colors: &'a ColorScheme,
    pub window_size: Size,
    /// Downward drag toward a dismiss, from the gesture recognizer.
    pub dismiss_pull: f32,
    pub settings_open: bool,
    pub demo_running: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let machine = ctx.machine;

    let home_layer = home::view(home::ViewContext {
        apps: ctx.grid_apps,
        columns: home::columns_for(ctx.window_size),
        wallpaper: ctx.preferences.wallpaper,
        colors: ctx.colors,
        scroll_locked: machine.home_scroll_locked(),
    })
    .map(Message::Home);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(home_layer);

    for (id, visibility) in visible_apps(machine) {
        let progress = machine.transition_progress(id).unwrap_or(1.0);
        let strength = app_screen::card_alpha(visibility, progress);

        layers = layers
            .push(
                container(Space::new().width(Length::Fill).height(Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::scrim(ctx.colors, strength)),
            )
            .push(
                app_screen::view(app_screen::ViewContext {
                    id,
                    visibility,
                    progress,
                    window_height: ctx.window_size.height,
                    pull: ctx.dismiss_pull,
                    colors: ctx.colors,
                })
                .map(Message::AppScreen),
            );
    }

    if ctx.settings_open {
        let panel = settings::view(settings::ViewContext {
            preferences: ctx.preferences,
            demo_running: ctx.demo_running,
        })
        .map(Message::Settings);

        layers = layers.push(
            container(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::MD),
        );
    }

    layers.into()
}

/// Non-hidden apps in paint order: closing first, the active app last.
fn visible_apps(machine: &ViewStateMachine) -> Vec<(&ScreenId, Visibility)> {
    let mut visible: Vec<_> = machine
        .registry()
        .apps()
        .filter(|screen| screen.visibility() != Visibility::Hidden)
        .map(|screen| (screen.id(), screen.visibility()))
        .collect();
    visible.sort_by_key(|(_, visibility)| *visibility == Visibility::Active);
    visible
}
