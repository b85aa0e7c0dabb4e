// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::config::Wallpaper;
use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::{wallpaper_background, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Settings panel surface.
///
/// Derived from the active Iced `Theme` background with a slight opacity so
/// the wallpaper shows through in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Full-window wallpaper behind the home grid.
pub fn wallpaper(choice: Wallpaper) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(wallpaper_background(choice)),
        ..Default::default()
    }
}

/// Rounded colored square behind an app glyph.
pub fn icon_tile(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius::ICON.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// App screen surface. `alpha` fades the whole card during transitions.
pub fn app_surface(colors: &ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let background = Color {
        a: alpha.clamp(0.0, 1.0),
        ..colors.surface_primary
    };
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Accent header band at the top of an app screen.
pub fn app_header(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(accent)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimming layer between home and an opening app.
pub fn scrim(colors: &ColorScheme, strength: f32) -> impl Fn(&Theme) -> container::Style {
    let color = Color {
        a: colors.scrim.a * strength.clamp(0.0, 1.0),
        ..colors.scrim
    };
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}
