//! Cancellable fire-once timers.
//!
//! Timers are plain deadlines; nothing here sleeps. The owner asks for
//! [`Timers::next_deadline`], waits however its host waits, then calls
//! [`Timers::take_due`] with the current time.

use std::time::Instant;

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<K> {
    handle: TimerHandle,
    deadline: Instant,
    task: K,
}

/// Set of pending fire-once tasks.
///
/// The owner keeps the [`TimerHandle`] returned by [`Timers::schedule`] and
/// cancels through it when a newer event supersedes the task.
#[derive(Debug)]
pub struct Timers<K> {
    next_id: u64,
    pending: Vec<Pending<K>>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<K> Timers<K> {
    /// Create an empty timer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire at `deadline`.
    pub fn schedule(&mut self, task: K, deadline: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            deadline,
            task,
        });
        handle
    }

    /// Cancel a scheduled task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.deadline <= now);
        self.pending = pending;
        due.sort_by_key(|p| (p.deadline, p.handle.0));
        due.into_iter().map(|p| p.task).collect()
    }
}
