// SPDX-License-Identifier: MPL-2.0
//! Display metadata for the stock apps.

use crate::shell::ScreenId;
use crate::ui::design_tokens::palette;
use iced::Color;

/// How an app looks on the home grid and on its own screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppMeta {
    pub label: &'static str,
    pub glyph: &'static str,
    pub accent: Color,
    pub blurb: &'static str,
}

const FALLBACK: AppMeta = AppMeta {
    label: "App",
    glyph: "•",
    accent: palette::PRIMARY_500,
    blurb: "",
};

#[must_use]
pub fn app_meta(id: &ScreenId) -> AppMeta {
    match id.as_str() {
        "camera" => AppMeta {
            label: "Camera",
            glyph: "◉",
            accent: palette::CAMERA,
            blurb: "Point, shoot, swipe away.",
        },
        "gallery" => AppMeta {
            label: "Gallery",
            glyph: "▦",
            accent: palette::GALLERY,
            blurb: "Recent photos and albums.",
        },
        "music" => AppMeta {
            label: "Music",
            glyph: "♪",
            accent: palette::MUSIC,
            blurb: "Now playing: nothing yet.",
        },
        "weather" => AppMeta {
            label: "Weather",
            glyph: "☀",
            accent: palette::WEATHER,
            blurb: "Sunny, 24°. Light breeze from the west.",
        },
        "clock" => AppMeta {
            label: "Clock",
            glyph: "◷",
            accent: palette::CLOCK,
            blurb: "Alarms, world clock and timers.",
        },
        "notes" => AppMeta {
            label: "Notes",
            glyph: "✎",
            accent: palette::NOTES,
            blurb: "Jot something down.",
        },
        _ => FALLBACK,
    }
}
