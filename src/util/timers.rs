//! Cancellable scheduled tasks on a virtual millisecond clock.
//!
//! DESIGN
//! ======
//! Page chrome only ever needs a handful of fire-and-forget delays (loader
//! grace period, navigation delay, notice auto-hide). Modelling them as data
//! keeps the state machines deterministic: callers pass `now` explicitly and
//! the browser runtime arms a single real timer for `next_deadline()`.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

/// Handle to a scheduled task, used to cancel it before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Clone, Debug)]
struct Scheduled<T> {
    id: TaskId,
    due_ms: u64,
    task: T,
}

/// Ordered queue of pending tasks keyed by their due time.
#[derive(Clone, Debug)]
pub struct TaskQueue<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self { next_id: 0, pending: Vec::new() }
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled { id, due_ms: now_ms.saturating_add(delay_ms), task });
        id
    }

    /// Drop a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    /// Earliest due time among pending tasks.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|s| s.due_ms).min()
    }

    /// Remove and return every task due at or before `now_ms`, oldest first.
    ///
    /// Tasks with equal due times come out in scheduling order.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<(TaskId, T)> {
        let (mut due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|s| s.due_ms <= now_ms);
        self.pending = rest;
        due.sort_by_key(|s| (s.due_ms, s.id));
        due.into_iter().map(|s| (s.id, s.task)).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
