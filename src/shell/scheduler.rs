// SPDX-License-Identifier: MPL-2.0
//! One-shot scheduled tasks on the shell timeline.
//!
//! The timeline is a monotonic [`Duration`] measured from when the shell
//! booted. Nothing runs on its own: the owner polls [`Scheduler::pop_due`]
//! whenever its clock moves, which keeps every callback on the UI thread and
//! makes tests fully deterministic.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled task, doubling as its cancel token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

/// Deadline-ordered queue of pending actions.
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    // Keyed by (deadline, sequence) so equal deadlines fire in FIFO order.
    tasks: BTreeMap<(Duration, u64), A>,
    next_id: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<A> Scheduler<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to fire once the timeline reaches `at`.
    pub fn schedule(&mut self, at: Duration, action: A) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.insert((at, id), action);
        TaskHandle(id)
    }

    /// Cancels a pending task and returns its action.
    ///
    /// Returns `None` if the task already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<A> {
        let key = self.tasks.keys().find(|(_, id)| *id == handle.0).copied()?;
        self.tasks.remove(&key)
    }

    /// Drops every pending task.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// Removes and returns the earliest task whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TaskHandle, A)> {
        let first = self.tasks.first_key_value().map(|(key, _)| *key)?;
        if first.0 > now {
            return None;
        }
        self.tasks
            .remove(&first)
            .map(|action| (TaskHandle(first.1), action))
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.first_key_value().map(|((at, _), _)| *at)
    }

    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.keys().any(|(_, id)| *id == handle.0)
    }

    /// Iterates over pending actions in firing order.
    pub fn pending(&self) -> impl Iterator<Item = (Duration, &A)> {
        self.tasks.iter().map(|((at, _), action)| (*at, action))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_scheduler_is_empty() {
        let scheduler: Scheduler<&str> = Scheduler::new();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn pop_due_respects_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(200), "close");

        assert!(scheduler.pop_due(ms(199)).is_none());
        let (_, action) = scheduler.pop_due(ms(200)).expect("due at deadline");
        assert_eq!(action, "close");
        assert!(scheduler.is_empty());
    }

    #[test]
    fn tasks_fire_in_deadline_then_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), "c");
        scheduler.schedule(ms(100), "a");
        scheduler.schedule(ms(100), "b");

        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(ms(1_000)))
            .map(|(_, action)| action)
            .collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
    }

    #[test]
    fn cancel_removes_pending_task() {
        let mut scheduler = Scheduler::new();
        let keep = scheduler.schedule(ms(100), 1);
        let drop = scheduler.schedule(ms(100), 2);

        assert_eq!(scheduler.cancel(drop), Some(2));
        assert!(!scheduler.is_pending(drop));
        assert!(scheduler.is_pending(keep));
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(ms(10), ());
        assert!(scheduler.pop_due(ms(10)).is_some());

        assert_eq!(scheduler.cancel(handle), None);
    }

    #[test]
    fn cancel_all_reports_count() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(10), ());
        scheduler.schedule(ms(20), ());

        assert_eq!(scheduler.cancel_all(), 2);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn pending_lists_in_firing_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(50), 'y');
        scheduler.schedule(ms(20), 'x');

        let order: Vec<_> = scheduler.pending().map(|(at, a)| (at, *a)).collect();
        assert_eq!(order, vec![(ms(20), 'x'), (ms(50), 'y')]);
    }
}
