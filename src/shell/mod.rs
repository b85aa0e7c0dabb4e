// SPDX-License-Identifier: MPL-2.0
//! View-state transition engine.
//!
//! Owns which screen is visible, when close animations finish, how swipes map
//! to transitions and how the scripted demo plays. Nothing here draws; the
//! UI reads visibility and progress from [`ViewStateMachine`].

pub mod cycle;
pub mod demo;
pub mod driver;
pub mod gesture;
pub mod machine;
pub mod scheduler;
pub mod screen;
pub mod timing;

pub use cycle::AppCycle;
pub use demo::{DemoScript, DemoSequencer, DemoStep};
pub use driver::RunReport;
pub use gesture::{GestureRecognizer, GestureThresholds, SwipeIntent};
pub use machine::{IgnoreReason, Outcome, ViewStateMachine};
pub use scheduler::{Scheduler, TaskHandle};
pub use screen::{Screen, ScreenId, ScreenKind, ScreenRegistry, Visibility};
pub use timing::{
    AnimationSpeed, CubicBezier, EasingPair, EasingProfile, MotionPace, TransitionConfig,
    TransitionTiming,
};
