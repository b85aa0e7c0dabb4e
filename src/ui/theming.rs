// SPDX-License-Identifier: MPL-2.0
//! Color schemes and wallpapers.

use crate::config::{ThemeChoice, Wallpaper};
use crate::ui::design_tokens::{opacity, palette};
use iced::gradient::Linear;
use iced::{Background, Color, Gradient, Radians, Theme};
use std::f32::consts::PI;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Labels drawn directly on the wallpaper.
    pub text_on_wallpaper: Color,

    pub brand_primary: Color,

    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_on_wallpaper: palette::WHITE,

            brand_primary: palette::PRIMARY_500,

            scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.16, 0.16, 0.18),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_on_wallpaper: palette::WHITE,

            brand_primary: palette::PRIMARY_400,

            scrim: Color {
                a: opacity::SCRIM + opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn for_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Dark => Self::dark(),
        }
    }
}

/// Iced theme matching the user's choice.
#[must_use]
pub fn iced_theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Light => Theme::Light,
        ThemeChoice::Dark => Theme::Dark,
    }
}

/// Top and bottom colors of a wallpaper gradient.
#[must_use]
pub fn wallpaper_stops(wallpaper: Wallpaper) -> (Color, Color) {
    match wallpaper {
        Wallpaper::Default => (
            Color::from_rgb(0.36, 0.47, 0.98),
            Color::from_rgb(0.62, 0.35, 0.9),
        ),
        Wallpaper::Sunset => (
            Color::from_rgb(1.0, 0.55, 0.33),
            Color::from_rgb(0.85, 0.22, 0.45),
        ),
        Wallpaper::Ocean => (
            Color::from_rgb(0.0, 0.6, 0.8),
            Color::from_rgb(0.02, 0.25, 0.55),
        ),
        Wallpaper::Night => (
            Color::from_rgb(0.08, 0.1, 0.22),
            Color::from_rgb(0.01, 0.01, 0.05),
        ),
    }
}

/// Vertical gradient background for the home screen.
#[must_use]
pub fn wallpaper_background(wallpaper: Wallpaper) -> Background {
    let (top, bottom) = wallpaper_stops(wallpaper);
    let linear = Linear::new(Radians(PI))
        .add_stop(0.0, top)
        .add_stop(1.0, bottom);
    Background::Gradient(Gradient::Linear(linear))
}
