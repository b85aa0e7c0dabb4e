// SPDX-License-Identifier: MPL-2.0
//! Transition timing: speed multiplier, easing profiles and base durations.
//!
//! Everything here is a pure lookup. The view-state machine asks for a
//! [`TransitionTiming`] when a transition starts and keeps the numbers it got,
//! so reconfiguring mid-transition only affects later transitions.

use crate::config::{
    CLASSIC_CLOSE_DURATION, CLASSIC_OPEN_DURATION,
    CLOSE_COMPLETION_BUFFER, DEFAULT_ANIMATION_SPEED, MAX_ANIMATION_SPEED, MIN_ANIMATION_SPEED,
    QUICK_CLOSE_DURATION, QUICK_OPEN_DURATION,
};
use std::fmt;
use std::time::Duration;

/// Animation speed multiplier, guaranteed to be within the valid range (0.5x - 2.0x).
///
/// # Example
///
/// ```
/// use oneui_shell::shell::timing::AnimationSpeed;
///
/// let speed = AnimationSpeed::new(1.5);
/// assert_eq!(speed.value(), 1.5);
///
/// // Values outside range are clamped
/// let too_fast = AnimationSpeed::new(10.0);
/// assert_eq!(too_fast.value(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpeed(f64);

impl AnimationSpeed {
    /// Creates a new speed, clamping to the valid range.
    ///
    /// Non-finite or non-positive input yields the default speed.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if !speed.is_finite() || speed <= 0.0 {
            return Self::default();
        }
        Self(speed.clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED))
    }

    /// Parses a stored preference value.
    ///
    /// Returns `None` for anything that is not a positive finite number.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let value: f64 = raw.trim().parse().ok()?;
        (value.is_finite() && value > 0.0).then(|| Self::new(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Textual form written to the preference store (`1`, `1.5`, `0.75`).
    #[must_use]
    pub fn as_pref(self) -> String {
        self.0.to_string()
    }

    /// Divides `base` by this speed.
    #[must_use]
    pub fn scale(self, base: Duration) -> Duration {
        let nanos = base.as_nanos() as f64 / self.0;
        Duration::from_nanos(nanos.round() as u64)
    }
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        Self(DEFAULT_ANIMATION_SPEED)
    }
}

impl fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// A CSS-style cubic bezier easing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t`.
    ///
    /// `t` is clamped to `[0, 1]`. The output may overshoot that range for
    /// curves with control points outside it (the elastic close curve does).
    #[must_use]
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_x(t);
        Self::component(s, self.y1, self.y2)
    }

    fn component(s: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn derivative(s: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Finds the curve parameter whose x equals `x`.
    fn solve_x(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let err = Self::component(s, self.x1, self.x2) - x;
            if err.abs() < 1e-6 {
                return s;
            }
            let d = Self::derivative(s, self.x1, self.x2);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        // Newton stalled; x(s) is monotonic for x1, x2 in [0, 1] so bisect.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let current = Self::component(s, self.x1, self.x2);
            if (current - x).abs() < 1e-6 {
                break;
            }
            if current < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

/// Entrance and exit curves of an easing profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingPair {
    pub open: CubicBezier,
    pub close: CubicBezier,
}

/// Named pair of interpolation curves for transition entrance and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingProfile {
    Standard,
    #[default]
    Elastic,
    Custom,
}

impl EasingProfile {
    pub const ALL: [EasingProfile; 3] = [
        EasingProfile::Standard,
        EasingProfile::Elastic,
        EasingProfile::Custom,
    ];

    #[must_use]
    pub fn from_pref(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "elastic" => Some(Self::Elastic),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pref(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Elastic => "elastic",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn curves(self) -> EasingPair {
        match self {
            Self::Standard => EasingPair {
                open: CubicBezier::new(0.25, 0.1, 0.25, 1.0),
                close: CubicBezier::new(0.25, 0.46, 0.45, 0.94),
            },
            Self::Elastic => EasingPair {
                open: CubicBezier::new(0.4, 0.0, 0.2, 1.0),
                close: CubicBezier::new(0.34, 1.56, 0.64, 1.0),
            },
            Self::Custom => EasingPair {
                open: CubicBezier::new(0.68, -0.55, 0.265, 1.55),
                close: CubicBezier::new(0.175, 0.885, 0.32, 1.275),
            },
        }
    }
}

impl fmt::Display for EasingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Elastic => write!(f, "Elastic"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

/// Base-duration set. One UI 8 mode selects the quick pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPace {
    #[default]
    Quick,
    Classic,
}

impl MotionPace {
    #[must_use]
    pub fn from_oneui8_mode(enabled: bool) -> Self {
        if enabled {
            Self::Quick
        } else {
            Self::Classic
        }
    }

    #[must_use]
    pub fn base_open(self) -> Duration {
        match self {
            Self::Quick => QUICK_OPEN_DURATION,
            Self::Classic => CLASSIC_OPEN_DURATION,
        }
    }

    #[must_use]
    pub fn base_close(self) -> Duration {
        match self {
            Self::Quick => QUICK_CLOSE_DURATION,
            Self::Classic => CLASSIC_CLOSE_DURATION,
        }
    }
}

/// Current transition parameters of a view-state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionConfig {
    pub speed: AnimationSpeed,
    pub profile: EasingProfile,
    pub pace: MotionPace,
}

impl TransitionConfig {
    #[must_use]
    pub fn timing(&self) -> TransitionTiming {
        timing_with_pace(self.profile, self.speed, self.pace)
    }
}

/// Resolved curves and durations for one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub open_curve: CubicBezier,
    pub close_curve: CubicBezier,
    pub base_open: Duration,
    pub base_close: Duration,
    pub speed: AnimationSpeed,
}

impl TransitionTiming {
    /// Open duration after applying the speed multiplier.
    #[must_use]
    pub fn effective_open(&self) -> Duration {
        self.speed.scale(self.base_open)
    }

    /// Close duration after applying the speed multiplier.
    #[must_use]
    pub fn effective_close(&self) -> Duration {
        self.speed.scale(self.base_close)
    }

    /// Delay between a close request and hiding the screen.
    #[must_use]
    pub fn close_completion_delay(&self) -> Duration {
        self.effective_close() + CLOSE_COMPLETION_BUFFER
    }
}

/// Timing for `profile` at `speed` with the default (quick) pace.
#[must_use]
pub fn timing(profile: EasingProfile, speed: AnimationSpeed) -> TransitionTiming {
    timing_with_pace(profile, speed, MotionPace::default())
}

#[must_use]
pub fn timing_with_pace(
    profile: EasingProfile,
    speed: AnimationSpeed,
    pace: MotionPace,
) -> TransitionTiming {
    let curves = profile.curves();
    TransitionTiming {
        open_curve: curves.open,
        close_curve: curves.close,
        base_open: pace.base_open(),
        base_close: pace.base_close(),
        speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANIMATION_SPEED_PRESETS;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(AnimationSpeed::new(0.1).value(), MIN_ANIMATION_SPEED);
        assert_abs_diff_eq!(AnimationSpeed::new(100.0).value(), MAX_ANIMATION_SPEED);
        assert_abs_diff_eq!(AnimationSpeed::new(1.5).value(), 1.5);
    }

    #[test]
    fn non_positive_speed_uses_default() {
        assert_abs_diff_eq!(AnimationSpeed::new(0.0).value(), 1.0);
        assert_abs_diff_eq!(AnimationSpeed::new(-2.0).value(), 1.0);
        assert_abs_diff_eq!(AnimationSpeed::new(f64::NAN).value(), 1.0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(AnimationSpeed::parse("fast").is_none());
        assert!(AnimationSpeed::parse("").is_none());
        assert!(AnimationSpeed::parse("-1").is_none());
        assert!(AnimationSpeed::parse("inf").is_none());
        assert_abs_diff_eq!(AnimationSpeed::parse(" 1.5 ").map(|s| s.value()).unwrap_or(0.0), 1.5);
    }

    #[test]
    fn as_pref_round_trips_through_parse() {
        for preset in ANIMATION_SPEED_PRESETS {
            let speed = AnimationSpeed::new(preset);
            assert_eq!(AnimationSpeed::parse(&speed.as_pref()), Some(speed));
        }
        assert_eq!(AnimationSpeed::default().as_pref(), "1");
    }

    #[test]
    fn scale_divides_by_speed() {
        let base = Duration::from_millis(300);
        assert_eq!(AnimationSpeed::new(2.0).scale(base), Duration::from_millis(150));
        assert_eq!(AnimationSpeed::new(0.5).scale(base), Duration::from_millis(600));
        assert_eq!(AnimationSpeed::new(1.5).scale(base), Duration::from_millis(200));
    }

    #[test]
    fn double_speed_close_completes_after_200ms() {
        let timing = timing(EasingProfile::Elastic, AnimationSpeed::new(2.0));
        assert_eq!(timing.base_close, Duration::from_millis(300));
        assert_eq!(timing.close_completion_delay(), Duration::from_millis(200));
    }

    #[test]
    fn classic_pace_is_slower() {
        let quick = timing_with_pace(EasingProfile::Standard, AnimationSpeed::default(), MotionPace::Quick);
        let classic =
            timing_with_pace(EasingProfile::Standard, AnimationSpeed::default(), MotionPace::Classic);
        assert!(classic.effective_open() > quick.effective_open());
        assert!(classic.effective_close() > quick.effective_close());
    }

    #[test]
    fn profiles_map_to_expected_curves() {
        assert_eq!(
            EasingProfile::Standard.curves().open,
            CubicBezier::new(0.25, 0.1, 0.25, 1.0)
        );
        assert_eq!(
            EasingProfile::Elastic.curves().close,
            CubicBezier::new(0.34, 1.56, 0.64, 1.0)
        );
        assert_eq!(
            EasingProfile::Custom.curves().open,
            CubicBezier::new(0.68, -0.55, 0.265, 1.55)
        );
    }

    #[test]
    fn easing_profile_parses_known_names_only() {
        assert_eq!(EasingProfile::from_pref("Standard"), Some(EasingProfile::Standard));
        assert_eq!(EasingProfile::from_pref("custom"), Some(EasingProfile::Custom));
        assert_eq!(EasingProfile::from_pref("spring"), None);
        assert_eq!(EasingProfile::default(), EasingProfile::Elastic);
    }

    #[test]
    fn ease_hits_endpoints() {
        for profile in EasingProfile::ALL {
            let pair = profile.curves();
            for curve in [pair.open, pair.close] {
                assert_abs_diff_eq!(curve.ease(0.0), 0.0);
                assert_abs_diff_eq!(curve.ease(1.0), 1.0);
                assert_abs_diff_eq!(curve.ease(-1.0), 0.0);
                assert_abs_diff_eq!(curve.ease(2.0), 1.0);
            }
        }
    }

    #[test]
    fn linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            assert_abs_diff_eq!(linear.ease(t), t, epsilon = 1e-4);
        }
    }

    #[test]
    fn symmetric_curve_passes_through_midpoint() {
        let ease_in_out = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
        assert_abs_diff_eq!(ease_in_out.ease(0.5), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn elastic_close_overshoots() {
        let close = EasingProfile::Elastic.curves().close;
        let peak = (1..100)
            .map(|i| close.ease(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0 + F32_EPSILON);
    }
}
