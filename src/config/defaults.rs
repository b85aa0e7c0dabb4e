// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the shell. Constants are organized by category.
//!
//! # Categories
//!
//! - **Preference keys**: names and fallback values stored in `preferences.toml`
//! - **Animation speed**: speed multiplier bounds and presets
//! - **Durations**: base open/close durations for each motion pace
//! - **Gestures**: swipe thresholds
//! - **Demo**: scripted quick-switch cadence

use std::time::Duration;

// ==========================================================================
// Preference Keys
// ==========================================================================

/// Animation speed multiplier, stored as a decimal string.
pub const KEY_ANIM_SPEED: &str = "anim-speed";

/// Easing profile name (`standard`, `elastic`, `custom`).
pub const KEY_ANIM_EASING: &str = "anim-easing";

/// One UI 8 quick-motion toggle (`true` / `false`).
pub const KEY_ONEUI8_MODE: &str = "oneui8-mode";

/// Theme name (`light`, `dark`).
pub const KEY_THEME: &str = "theme";

/// Wallpaper name (`default`, `sunset`, `ocean`, `night`).
pub const KEY_WALLPAPER: &str = "wallpaper";

/// Stored string used when `anim-speed` is absent.
pub const DEFAULT_ANIM_SPEED_PREF: &str = "1";

/// Stored string used when `anim-easing` is absent.
pub const DEFAULT_ANIM_EASING_PREF: &str = "elastic";

/// Stored string used when `oneui8-mode` is absent.
pub const DEFAULT_ONEUI8_MODE_PREF: &str = "true";

/// Stored string used when `theme` is absent.
pub const DEFAULT_THEME_PREF: &str = "light";

/// Stored string used when `wallpaper` is absent.
pub const DEFAULT_WALLPAPER_PREF: &str = "default";

// ==========================================================================
// Animation Speed
// ==========================================================================

/// Default animation speed multiplier (1.0 = reference timing).
pub const DEFAULT_ANIMATION_SPEED: f64 = 1.0;

/// Minimum animation speed (0.5x = twice as slow).
pub const MIN_ANIMATION_SPEED: f64 = 0.5;

/// Maximum animation speed (2.0x = twice as fast).
pub const MAX_ANIMATION_SPEED: f64 = 2.0;

/// Speeds offered by the settings panel.
pub const ANIMATION_SPEED_PRESETS: [f64; 5] = [0.5, 0.75, 1.0, 1.5, 2.0];

// ==========================================================================
// Transition Durations
// ==========================================================================

/// Base open duration with One UI 8 quick motion enabled.
pub const QUICK_OPEN_DURATION: Duration = Duration::from_millis(350);

/// Base close duration with One UI 8 quick motion enabled.
pub const QUICK_CLOSE_DURATION: Duration = Duration::from_millis(300);

/// Base open duration with the classic pace.
pub const CLASSIC_OPEN_DURATION: Duration = Duration::from_millis(500);

/// Base close duration with the classic pace.
pub const CLASSIC_CLOSE_DURATION: Duration = Duration::from_millis(400);

/// Extra wait after a scaled close duration so the exit animation has fully
/// finished before the screen is hidden.
pub const CLOSE_COMPLETION_BUFFER: Duration = Duration::from_millis(50);

// ==========================================================================
// Gestures
// ==========================================================================

/// Dominant-axis distance (px) a swipe must exceed to count as an intent.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Height (px) of the top band a downward dismiss swipe must start in.
pub const DISMISS_BAND_PX: f32 = 100.0;

// ==========================================================================
// Demo
// ==========================================================================

/// Apps the quick-switch demo rotates through.
pub const DEMO_CYCLE: [&str; 3] = ["camera", "gallery", "music"];

/// Number of `switch_to` calls the demo performs.
pub const DEMO_STEPS: usize = 6;

/// Delay between two demo switches.
pub const DEMO_STEP_INTERVAL: Duration = Duration::from_millis(300);

/// Pause after the last switch before the demo closes back to home.
pub const DEMO_FINAL_DELAY: Duration = Duration::from_millis(500);

// ==========================================================================
// Screens
// ==========================================================================

/// Identifier of the home screen.
pub const HOME_SCREEN_ID: &str = "home";

/// Apps installed on the simulated phone, in icon-grid order.
pub const DEFAULT_APPS: [&str; 6] = ["camera", "gallery", "music", "weather", "clock", "notes"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_bounds_contain_default() {
        assert!(MIN_ANIMATION_SPEED > 0.0);
        assert!(MIN_ANIMATION_SPEED <= DEFAULT_ANIMATION_SPEED);
        assert!(DEFAULT_ANIMATION_SPEED <= MAX_ANIMATION_SPEED);
    }

    #[test]
    fn speed_presets_are_sorted_and_in_range() {
        for pair in ANIMATION_SPEED_PRESETS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(ANIMATION_SPEED_PRESETS
            .iter()
            .all(|s| (MIN_ANIMATION_SPEED..=MAX_ANIMATION_SPEED).contains(s)));
    }

    #[test]
    fn demo_cycle_apps_are_installed() {
        for app in DEMO_CYCLE {
            assert!(DEFAULT_APPS.contains(&app));
        }
    }

    #[test]
    fn home_is_not_an_app() {
        assert!(!DEFAULT_APPS.contains(&HOME_SCREEN_ID));
    }
}
