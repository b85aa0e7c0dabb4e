// SPDX-License-Identifier: MPL-2.0
//! Typed view over the [`PreferenceStore`](super::PreferenceStore).
//!
//! Every key resolves independently: an absent or unparseable value falls back
//! to its hardcoded default without affecting the others.

use super::defaults::{
    DEFAULT_ANIM_EASING_PREF, DEFAULT_ANIM_SPEED_PREF, DEFAULT_ONEUI8_MODE_PREF,
    DEFAULT_THEME_PREF, DEFAULT_WALLPAPER_PREF, KEY_ANIM_EASING, KEY_ANIM_SPEED,
    KEY_ONEUI8_MODE, KEY_THEME, KEY_WALLPAPER,
};
use super::PreferenceStore;
use crate::shell::timing::{AnimationSpeed, EasingProfile, MotionPace, TransitionConfig};
use std::fmt;

/// Light or dark shell chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 2] = [ThemeChoice::Light, ThemeChoice::Dark];

    /// Parses a stored preference value.
    #[must_use]
    pub fn from_pref(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pref(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

/// Home-screen wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wallpaper {
    #[default]
    Default,
    Sunset,
    Ocean,
    Night,
}

impl Wallpaper {
    pub const ALL: [Wallpaper; 4] = [
        Wallpaper::Default,
        Wallpaper::Sunset,
        Wallpaper::Ocean,
        Wallpaper::Night,
    ];

    #[must_use]
    pub fn from_pref(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "sunset" => Some(Self::Sunset),
            "ocean" => Some(Self::Ocean),
            "night" => Some(Self::Night),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pref(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sunset => "sunset",
            Self::Ocean => "ocean",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for Wallpaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Sunset => write!(f, "Sunset"),
            Self::Ocean => write!(f, "Ocean"),
            Self::Night => write!(f, "Night"),
        }
    }
}

/// Resolved user preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub speed: AnimationSpeed,
    pub easing: EasingProfile,
    /// One UI 8 quick motion. Only the literal `"false"` turns it off.
    pub oneui8_mode: bool,
    pub theme: ThemeChoice,
    pub wallpaper: Wallpaper,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::default(),
            easing: EasingProfile::default(),
            oneui8_mode: true,
            theme: ThemeChoice::default(),
            wallpaper: Wallpaper::default(),
        }
    }
}

impl Preferences {
    /// Reads every known key from `store`, falling back per key.
    #[must_use]
    pub fn resolve(store: &PreferenceStore) -> Self {
        let speed_raw = store.get_or(KEY_ANIM_SPEED, DEFAULT_ANIM_SPEED_PREF);
        let speed = AnimationSpeed::parse(speed_raw).unwrap_or_else(|| {
            log::warn!("invalid {KEY_ANIM_SPEED} {speed_raw:?}, using default");
            AnimationSpeed::default()
        });

        let easing_raw = store.get_or(KEY_ANIM_EASING, DEFAULT_ANIM_EASING_PREF);
        let easing = EasingProfile::from_pref(easing_raw).unwrap_or_else(|| {
            log::warn!("invalid {KEY_ANIM_EASING} {easing_raw:?}, using default");
            EasingProfile::default()
        });

        let oneui8_mode = store.get_or(KEY_ONEUI8_MODE, DEFAULT_ONEUI8_MODE_PREF) != "false";

        let theme_raw = store.get_or(KEY_THEME, DEFAULT_THEME_PREF);
        let theme = ThemeChoice::from_pref(theme_raw).unwrap_or_else(|| {
            log::warn!("invalid {KEY_THEME} {theme_raw:?}, using default");
            ThemeChoice::default()
        });

        let wallpaper_raw = store.get_or(KEY_WALLPAPER, DEFAULT_WALLPAPER_PREF);
        let wallpaper = Wallpaper::from_pref(wallpaper_raw).unwrap_or_else(|| {
            log::warn!("invalid {KEY_WALLPAPER} {wallpaper_raw:?}, using default");
            Wallpaper::default()
        });

        Self {
            speed,
            easing,
            oneui8_mode,
            theme,
            wallpaper,
        }
    }

    #[must_use]
    pub fn pace(&self) -> MotionPace {
        MotionPace::from_oneui8_mode(self.oneui8_mode)
    }

    /// Transition parameters for the view-state machine.
    #[must_use]
    pub fn transition_config(&self) -> TransitionConfig {
        TransitionConfig {
            speed: self.speed,
            profile: self.easing,
            pace: self.pace(),
        }
    }
}
