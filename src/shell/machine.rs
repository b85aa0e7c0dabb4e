// SPDX-License-Identifier: MPL-2.0
//! The view-state machine.
//!
//! Decides which screen is visible, sequences close animations and keeps the
//! single-active invariant: at any observation point at most one screen is
//! `Active`. Closing screens are hidden by scheduled completions that fire
//! when the timeline passes their deadline.
//!
//! Requests that would break an invariant (opening a screen that is still
//! closing, closing one that is not active) are dropped and reported as
//! [`Outcome::Ignored`]. Unknown screen ids are configuration errors.

use super::cycle::AppCycle;
use super::gesture::SwipeIntent;
use super::scheduler::Scheduler;
use super::screen::{Screen, ScreenId, ScreenRegistry, Visibility};
use super::timing::{AnimationSpeed, EasingProfile, MotionPace, TransitionConfig, TransitionTiming};
use crate::config::{DEFAULT_APPS, HOME_SCREEN_ID};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::time::Duration;

/// Result of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Why a request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyActive,
    StillClosing,
    NotActive,
    /// Home cannot be closed; it is what closing returns to.
    HomeScreen,
    /// A dismiss swipe arrived while home was showing.
    NothingToDismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingClose {
    screen: ScreenId,
}

#[derive(Debug, Clone)]
pub struct ViewStateMachine {
    registry: ScreenRegistry,
    cycle: AppCycle,
    config: TransitionConfig,
    completions: Scheduler<PendingClose>,
    /// Timing captured when each screen's current animation started.
    animations: HashMap<ScreenId, TransitionTiming>,
    now: Duration,
}

impl ViewStateMachine {
    /// Builds a machine over `registry`; every cycle entry must be a registered app.
    pub fn new(registry: ScreenRegistry, cycle: AppCycle, config: TransitionConfig) -> Result<Self> {
        for id in cycle.apps() {
            let screen = registry.require(id)?;
            if screen.is_home() {
                return Err(Error::Config(format!(
                    "home screen `{id}` cannot be part of the app cycle"
                )));
            }
        }

        Ok(Self {
            registry,
            cycle,
            config,
            completions: Scheduler::new(),
            animations: HashMap::new(),
            now: Duration::ZERO,
        })
    }

    /// Home plus the stock apps, cycling in icon order.
    pub fn standard(config: TransitionConfig) -> Result<Self> {
        let registry = ScreenRegistry::new(HOME_SCREEN_ID, DEFAULT_APPS)?;
        let cycle = AppCycle::new(DEFAULT_APPS)?;
        Self::new(registry, cycle, config)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    /// Timing new transitions will use.
    #[must_use]
    pub fn timing(&self) -> TransitionTiming {
        self.config.timing()
    }

    /// Current timeline position.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn active(&self) -> Option<&Screen> {
        self.registry.active()
    }

    pub fn visibility(&self, id: &ScreenId) -> Result<Visibility> {
        self.registry.visibility(id)
    }

    #[must_use]
    pub fn is_home_active(&self) -> bool {
        self.registry.home().visibility() == Visibility::Active
    }

    #[must_use]
    pub fn pending_completions(&self) -> usize {
        self.completions.len()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.completions.next_deadline()
    }

    /// True while a close is pending or an open animation is still running.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        if !self.completions.is_empty() {
            return true;
        }
        self.registry.active().is_some_and(|screen| {
            self.animations.get(screen.id()).is_some_and(|timing| {
                self.now < screen.changed_at() + timing.effective_open()
            })
        })
    }

    /// True while any app is on screen; home must not scroll underneath it.
    #[must_use]
    pub fn home_scroll_locked(&self) -> bool {
        self.registry
            .apps()
            .any(|s| s.visibility() != Visibility::Hidden)
    }

    /// Eased progress of the screen's current animation.
    ///
    /// `Active` screens report open progress, `Closing` screens report close
    /// progress, hidden screens report `None`. Screens shown without an
    /// animation (home at boot or after a close) report `1.0`.
    #[must_use]
    pub fn transition_progress(&self, id: &ScreenId) -> Option<f32> {
        let screen = self.registry.get(id)?;
        let elapsed = self.now.saturating_sub(screen.changed_at());
        let timing = self.animations.get(id);

        match (screen.visibility(), timing) {
            (Visibility::Hidden, _) => None,
            (Visibility::Active, None) => Some(1.0),
            (Visibility::Active, Some(timing)) => Some(
                timing
                    .open_curve
                    .ease(linear_progress(elapsed, timing.effective_open())),
            ),
            (Visibility::Closing, Some(timing)) => Some(
                timing
                    .close_curve
                    .ease(linear_progress(elapsed, timing.effective_close())),
            ),
            (Visibility::Closing, None) => Some(1.0),
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Changes the speed for later transitions.
    ///
    /// Completions already scheduled keep the delay computed when their
    /// close started.
    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.config.speed = speed;
    }

    pub fn set_profile(&mut self, profile: EasingProfile) {
        self.config.profile = profile;
    }

    pub fn set_pace(&mut self, pace: MotionPace) {
        self.config.pace = pace;
    }

    // ------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------

    /// Moves the timeline to `now` and runs every completion that is due.
    ///
    /// Returns the screens that became hidden, in completion order. The
    /// clock never moves backwards; an earlier `now` only re-checks due work.
    pub fn advance_to(&mut self, now: Duration) -> Vec<ScreenId> {
        self.now = self.now.max(now);

        let mut hidden = Vec::new();
        while let Some((_, pending)) = self.completions.pop_due(self.now) {
            self.complete_close(&pending.screen);
            hidden.push(pending.screen);
        }
        hidden
    }

    /// Advances the timeline by `delta`.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<ScreenId> {
        self.advance_to(self.now + delta)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Shows `id`, hiding whatever is active immediately.
    pub fn open(&mut self, id: &ScreenId) -> Result<Outcome> {
        let target = self.registry.require(id)?;
        match target.visibility() {
            Visibility::Active => Ok(self.ignore("open", id, IgnoreReason::AlreadyActive)),
            Visibility::Closing => Ok(self.ignore("open", id, IgnoreReason::StillClosing)),
            Visibility::Hidden => {
                if let Some(current) = self.registry.active().map(|s| s.id().clone()) {
                    self.registry
                        .set_visibility(&current, Visibility::Hidden, self.now);
                    self.animations.remove(&current);
                }
                self.activate(id);
                log::debug!("opened {id}");
                Ok(Outcome::Applied)
            }
        }
    }

    /// Starts closing the active app `id`; home returns once it is hidden.
    pub fn close(&mut self, id: &ScreenId) -> Result<Outcome> {
        let target = self.registry.require(id)?;
        if target.is_home() {
            return Ok(self.ignore("close", id, IgnoreReason::HomeScreen));
        }
        match target.visibility() {
            Visibility::Hidden => Ok(self.ignore("close", id, IgnoreReason::NotActive)),
            Visibility::Closing => Ok(self.ignore("close", id, IgnoreReason::StillClosing)),
            Visibility::Active => {
                self.begin_close(id);
                Ok(Outcome::Applied)
            }
        }
    }

    /// Replaces the active app with `id` without returning to home in between.
    ///
    /// The previous app starts closing and the target becomes active in the
    /// same step, so home never flashes between the two.
    pub fn switch_to(&mut self, id: &ScreenId) -> Result<Outcome> {
        let target = self.registry.require(id)?;
        match target.visibility() {
            Visibility::Active => Ok(self.ignore("switch", id, IgnoreReason::AlreadyActive)),
            Visibility::Closing => Ok(self.ignore("switch", id, IgnoreReason::StillClosing)),
            Visibility::Hidden => {
                if let Some(current) = self.registry.active().map(|s| (s.id().clone(), s.is_home())) {
                    match current {
                        (home, true) => {
                            self.registry
                                .set_visibility(&home, Visibility::Hidden, self.now);
                            self.animations.remove(&home);
                        }
                        (app, false) => self.begin_close(&app),
                    }
                }
                self.activate(id);
                log::debug!("switched to {id}");
                Ok(Outcome::Applied)
            }
        }
    }

    /// Applies a recognized swipe.
    ///
    /// `Next`/`Previous` move through the app cycle relative to the active
    /// app (from home they open the first / last app). `Dismiss` closes the
    /// active app.
    pub fn apply_intent(&mut self, intent: SwipeIntent) -> Result<Outcome> {
        let current = self.registry.active_app().map(|s| s.id().clone());

        match intent {
            SwipeIntent::Next | SwipeIntent::Previous => {
                let target = if intent == SwipeIntent::Next {
                    self.cycle.next_after(current.as_ref()).clone()
                } else {
                    self.cycle.previous_before(current.as_ref()).clone()
                };
                if current.is_some() {
                    self.switch_to(&target)
                } else {
                    self.open(&target)
                }
            }
            SwipeIntent::Dismiss => match current {
                Some(app) => self.close(&app),
                None => Ok(self.ignore(
                    "dismiss",
                    self.registry.home().id(),
                    IgnoreReason::NothingToDismiss,
                )),
            },
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn activate(&mut self, id: &ScreenId) {
        self.registry.set_visibility(id, Visibility::Active, self.now);
        self.animations.insert(id.clone(), self.config.timing());
    }

    fn begin_close(&mut self, id: &ScreenId) {
        let timing = self.config.timing();
        let deadline = self.now + timing.close_completion_delay();

        self.registry.set_visibility(id, Visibility::Closing, self.now);
        self.animations.insert(id.clone(), timing);
        self.completions
            .schedule(deadline, PendingClose { screen: id.clone() });
        log::debug!("closing {id}, hidden at {deadline:?}");
    }

    fn complete_close(&mut self, id: &ScreenId) {
        self.registry.set_visibility(id, Visibility::Hidden, self.now);
        self.animations.remove(id);

        if self.registry.active().is_none() {
            let home = self.registry.home().id().clone();
            self.registry.set_visibility(&home, Visibility::Active, self.now);
            self.animations.remove(&home);
        }
    }

    fn ignore(&self, operation: &str, id: &ScreenId, reason: IgnoreReason) -> Outcome {
        log::debug!("{operation} {id} dropped: {reason:?}");
        Outcome::Ignored(reason)
    }
}

fn linear_progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
}
