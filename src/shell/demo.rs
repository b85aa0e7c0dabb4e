// SPDX-License-Identifier: MPL-2.0
//! Scripted quick-switch showcase.
//!
//! Rapidly switches through a fixed list of apps, then closes back to home.
//! The cadence slows down with the animation speed. Every step goes through
//! the public view-state machine operations, so the demo obeys the same
//! invariants as user input.

use super::machine::{Outcome, ViewStateMachine};
use super::scheduler::Scheduler;
use super::screen::{ScreenId, ScreenRegistry};
use super::timing::TransitionTiming;
use crate::config::{DEMO_CYCLE, DEMO_FINAL_DELAY, DEMO_STEPS, DEMO_STEP_INTERVAL};
use crate::error::{Error, Result};
use std::time::Duration;

/// What the demo does and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoScript {
    pub cycle: Vec<ScreenId>,
    pub steps: usize,
    pub interval: Duration,
    /// Pause between the last switch and the closing step.
    pub final_delay: Duration,
}

impl Default for DemoScript {
    fn default() -> Self {
        Self {
            cycle: DEMO_CYCLE.iter().map(|&id| ScreenId::new(id)).collect(),
            steps: DEMO_STEPS,
            interval: DEMO_STEP_INTERVAL,
            final_delay: DEMO_FINAL_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoStep {
    Switch(ScreenId),
    FinalClose,
}

/// Drives a [`DemoScript`] through a [`ViewStateMachine`].
#[derive(Debug, Clone)]
pub struct DemoSequencer {
    script: DemoScript,
    steps: Scheduler<DemoStep>,
}

impl DemoSequencer {
    /// Validates the script against the registered screens.
    pub fn new(script: DemoScript, registry: &ScreenRegistry) -> Result<Self> {
        if script.cycle.is_empty() {
            return Err(Error::Config("demo cycle is empty".into()));
        }
        for id in &script.cycle {
            registry.require(id)?;
        }
        Ok(Self {
            script,
            steps: Scheduler::new(),
        })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.steps.is_empty()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.steps.next_deadline()
    }

    #[must_use]
    pub fn remaining_steps(&self) -> usize {
        self.steps.len()
    }

    /// Schedules the whole script from the machine's current time, replacing
    /// any run in flight.
    ///
    /// The cadence follows the machine's timing: see [`Self::step_interval`].
    pub fn start(&mut self, machine: &ViewStateMachine) {
        self.cancel();
        if self.script.steps == 0 {
            return;
        }

        let timing = machine.timing();
        let interval = self.step_interval(&timing);
        let final_delay = timing.speed.scale(self.script.final_delay);

        let mut at = machine.now();
        for index in 0..self.script.steps {
            let target = self.script.cycle[index % self.script.cycle.len()].clone();
            self.steps.schedule(at, DemoStep::Switch(target));
            if index + 1 < self.script.steps {
                at += interval;
            }
        }
        self.steps.schedule(at + final_delay, DemoStep::FinalClose);
        log::info!(
            "demo started: {} switches every {:?}",
            self.script.steps,
            interval
        );
    }

    /// Delay between two switches under `timing`.
    ///
    /// The scripted interval is stretched by the speed multiplier, and never
    /// drops below what lets an app finish closing before the cycle comes
    /// back to it.
    #[must_use]
    pub fn step_interval(&self, timing: &TransitionTiming) -> Duration {
        let scaled = timing.speed.scale(self.script.interval);
        let gaps = self.script.cycle.len().saturating_sub(1);
        let Ok(gaps) = u32::try_from(gaps) else {
            return scaled;
        };
        if gaps == 0 {
            return scaled;
        }

        let delay = timing.close_completion_delay();
        let mut revisit = delay / gaps;
        if revisit * gaps < delay {
            revisit += Duration::from_nanos(1);
        }
        scaled.max(revisit)
    }

    /// Drops every step that has not run yet.
    ///
    /// Closes already started in the machine still complete on their own.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.steps.cancel_all();
        if dropped > 0 {
            log::info!("demo cancelled, {dropped} steps dropped");
        }
        dropped
    }

    /// Runs every step due at the machine's current time.
    ///
    /// Returns the executed steps with the machine's verdict on each.
    pub fn advance(&mut self, machine: &mut ViewStateMachine) -> Vec<(DemoStep, Outcome)> {
        let mut executed = Vec::new();
        while let Some((_, step)) = self.steps.pop_due(machine.now()) {
            let result = match &step {
                DemoStep::Switch(id) => machine.switch_to(id),
                DemoStep::FinalClose => match machine.registry().active_app() {
                    Some(app) => {
                        let app = app.id().clone();
                        machine.close(&app)
                    }
                    None => Ok(Outcome::Applied),
                },
            };

            match result {
                Ok(outcome) => executed.push((step, outcome)),
                Err(err) => log::warn!("demo step {step:?} failed: {err}"),
            }
        }
        if !executed.is_empty() && !self.is_running() {
            log::info!("demo finished");
        }
        executed
    }
}
