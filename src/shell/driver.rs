// SPDX-License-Identifier: MPL-2.0
//! Headless driver.
//!
//! Runs the engine against `tokio::time` instead of a window: sleeps until
//! the next machine or demo deadline, advances both, and returns once
//! nothing is left to fire. Used by `--demo`.

use super::demo::DemoSequencer;
use super::machine::ViewStateMachine;
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};

/// What a driver run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Demo steps executed, including ignored ones.
    pub demo_steps: usize,
    /// Close completions fired.
    pub closes_completed: usize,
    /// The cancel watch flipped before the demo ran out.
    pub cancelled: bool,
}

/// Drives `machine` and `demo` until neither has pending work.
///
/// The machine's timeline is anchored to the tokio clock at call time.
/// Flipping `cancel` to `true` drops the remaining demo steps; closes that
/// already started still complete before the function returns.
pub async fn run(
    machine: &mut ViewStateMachine,
    demo: &mut DemoSequencer,
    mut cancel: watch::Receiver<bool>,
) -> RunReport {
    let origin = Instant::now()
        .checked_sub(machine.now())
        .unwrap_or_else(Instant::now);
    let mut report = RunReport::default();
    let mut watching = true;

    loop {
        if watching && *cancel.borrow_and_update() && demo.is_running() {
            demo.cancel();
            report.cancelled = true;
        }

        let next = [machine.next_deadline(), demo.next_deadline()]
            .into_iter()
            .flatten()
            .min();
        let Some(deadline) = next else {
            break;
        };

        tokio::select! {
            () = sleep_until(origin + deadline) => {}
            changed = cancel.changed(), if watching => {
                if changed.is_err() {
                    // Sender gone; nobody can cancel any more.
                    watching = false;
                }
                continue;
            }
        }

        let now = Instant::now().saturating_duration_since(origin);
        report.closes_completed += machine.advance_to(now).len();
        report.demo_steps += demo.advance(machine).len();
    }

    log::debug!("driver finished at {:?}: {report:?}", machine.now());
    report
}
