// SPDX-License-Identifier: MPL-2.0
//! Settings panel: animation tuning, appearance and the quick demo.

use crate::config::{Preferences, ThemeChoice, Wallpaper, ANIMATION_SPEED_PRESETS};
use crate::shell::{AnimationSpeed, EasingProfile};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, pick_list, text, toggler, Column, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SpeedSelected(AnimationSpeed),
    EasingSelected(EasingProfile),
    OneUi8Toggled(bool),
    ThemeSelected(ThemeChoice),
    WallpaperSelected(Wallpaper),
    DemoPressed,
    ClosePressed,
}

pub struct ViewContext<'a> {
    pub preferences: &'a Preferences,
    pub demo_running: bool,
}

/// Speeds offered in the picker.
#[must_use]
pub fn speed_options() -> Vec<AnimationSpeed> {
    ANIMATION_SPEED_PRESETS
        .iter()
        .map(|&value| AnimationSpeed::new(value))
        .collect()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let prefs = ctx.preferences;

    let header = Row::new()
        .push(Text::new("Settings").size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(button(text("✕")).on_press(Message::ClosePressed))
        .align_y(Vertical::Center);

    let speed_options = speed_options();
    let selected_speed = speed_options.iter().copied().find(|s| *s == prefs.speed);
    let speed = labeled(
        "Animation speed",
        pick_list(speed_options, selected_speed, Message::SpeedSelected)
            .placeholder(prefs.speed.to_string())
            .padding(spacing::XS)
            .into(),
    );

    let easing = labeled(
        "Easing",
        pick_list(
            EasingProfile::ALL,
            Some(prefs.easing),
            Message::EasingSelected,
        )
        .padding(spacing::XS)
        .into(),
    );

    let oneui8 = labeled(
        "One UI 8 quick motion",
        toggler(prefs.oneui8_mode)
            .on_toggle(Message::OneUi8Toggled)
            .size(20.0)
            .into(),
    );

    let theme = labeled(
        "Theme",
        pick_list(ThemeChoice::ALL, Some(prefs.theme), Message::ThemeSelected)
            .padding(spacing::XS)
            .into(),
    );

    let wallpaper = labeled(
        "Wallpaper",
        pick_list(Wallpaper::ALL, Some(prefs.wallpaper), Message::WallpaperSelected)
            .padding(spacing::XS)
            .into(),
    );

    let demo_label = if ctx.demo_running {
        "Stop demo"
    } else {
        "Quick demo"
    };
    let demo = button(text(demo_label))
        .on_press(Message::DemoPressed)
        .style(styles::button::primary)
        .width(Length::Fill);

    container(
        Column::new()
            .push(header)
            .push(speed)
            .push(easing)
            .push(oneui8)
            .push(theme)
            .push(wallpaper)
            .push(demo)
            .spacing(spacing::MD),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::SETTINGS_PANEL_WIDTH))
    .style(styles::container::panel)
    .into()
}

fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .push(Text::new(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(control)
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .into()
}
