// SPDX-License-Identifier: MPL-2.0
//! Swipe recognition.
//!
//! Turns a pointer press / move / release sequence into at most one
//! [`SwipeIntent`]. Horizontal swipes cycle between apps; a downward swipe
//! that starts in the status-bar band dismisses the current app.

use crate::config::{DISMISS_BAND_PX, SWIPE_THRESHOLD_PX};
use iced::{Point, Vector};
use std::fmt;

/// Discrete result of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    Next,
    Previous,
    Dismiss,
}

impl fmt::Display for SwipeIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeIntent::Next => write!(f, "next"),
            SwipeIntent::Previous => write!(f, "previous"),
            SwipeIntent::Dismiss => write!(f, "dismiss"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Per-gesture tracking record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeState {
    pub origin: Point,
    pub current: Point,
}

impl SwipeState {
    #[must_use]
    pub fn delta(&self) -> Vector {
        self.current - self.origin
    }

    /// Axis with the larger absolute movement. Ties count as vertical.
    #[must_use]
    pub fn dominant_axis(&self) -> Axis {
        let delta = self.delta();
        if delta.x.abs() > delta.y.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Intent the gesture would produce if released now.
    #[must_use]
    pub fn classify(&self, thresholds: &GestureThresholds) -> Option<SwipeIntent> {
        let delta = self.delta();
        match self.dominant_axis() {
            Axis::Horizontal if delta.x.abs() > thresholds.swipe_px => {
                if delta.x < 0.0 {
                    Some(SwipeIntent::Next)
                } else {
                    Some(SwipeIntent::Previous)
                }
            }
            Axis::Vertical
                if delta.y > thresholds.swipe_px && self.origin.y < thresholds.dismiss_band_px =>
            {
                Some(SwipeIntent::Dismiss)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Minimum dominant-axis travel, exclusive.
    pub swipe_px: f32,
    /// Dismiss swipes must start above this y coordinate.
    pub dismiss_band_px: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            swipe_px: SWIPE_THRESHOLD_PX,
            dismiss_band_px: DISMISS_BAND_PX,
        }
    }
}

/// Resting phases. Resolution is not a phase: [`GestureRecognizer::pointer_up`]
/// classifies and returns to `Idle` in one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Idle,
    Tracking(SwipeState),
}

/// Pointer-tracking state machine: `Idle -> Tracking -> (resolved) -> Idle`.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    phase: GesturePhase,
    thresholds: GestureThresholds,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureThresholds::default())
    }
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            phase: GesturePhase::Idle,
            thresholds,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Starts tracking from `position`, discarding any gesture in flight.
    pub fn pointer_down(&mut self, position: Point) {
        self.phase = GesturePhase::Tracking(SwipeState {
            origin: position,
            current: position,
        });
    }

    /// Updates the current point. Ignored while idle.
    pub fn pointer_move(&mut self, position: Point) {
        if let GesturePhase::Tracking(state) = &mut self.phase {
            state.current = position;
        }
    }

    /// Resolves the gesture and returns to idle.
    ///
    /// Classification happens here, so the resolved step of the gesture
    /// lifecycle never outlives this call.
    ///
    /// `position` is the release point when known; otherwise the last move
    /// is used. Returns `None` for taps and sub-threshold drags.
    pub fn pointer_up(&mut self, position: Option<Point>) -> Option<SwipeIntent> {
        let GesturePhase::Tracking(mut state) = self.phase else {
            return None;
        };
        self.phase = GesturePhase::Idle;

        if let Some(position) = position {
            state.current = position;
        }

        let intent = state.classify(&self.thresholds);
        if let Some(intent) = intent {
            log::debug!("swipe resolved as {intent} (delta {:?})", state.delta());
        }
        intent
    }

    /// Abandons the gesture without emitting anything.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Downward travel of a drag that would dismiss if released past the
    /// threshold, for the card-follows-finger feedback. Advisory only.
    ///
    /// Zero while idle, for drags that start below the dismiss band, and for
    /// drags that are not mostly downward.
    #[must_use]
    pub fn dismiss_pull(&self) -> f32 {
        match self.phase {
            GesturePhase::Tracking(state)
                if state.origin.y < self.thresholds.dismiss_band_px
                    && state.dominant_axis() == Axis::Vertical =>
            {
                state.delta().y.max(0.0)
            }
            _ => 0.0,
        }
    }
}
