#![forbid(unsafe_code)]

//! Deterministic timer queue on a virtual clock.
//!
//! Demos never sleep. A transition that needs a delayed follow-up schedules a
//! one-shot timer here; the host later drains due timers and routes each one
//! back to the widget that owns it.
//!
//! # Invariants
//!
//! 1. **Monotonic clock**: [`TimerQueue::now`] never moves backward.
//! 2. **Ordering**: due timers pop in `(deadline, scheduling order)` order.
//! 3. **Ownership**: every timer carries the [`MountId`] of the widget that
//!    scheduled it, so a whole widget's timers can be cancelled as a unit.
//! 4. **Cancellation is final**: a cancelled timer never pops.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use web_time::Duration;

/// Identity of one mounted widget instance.
///
/// Mount ids are never reused within a host, so a timer stamped with an old
/// mount id can always be told apart from the live widget's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(pub u64);

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mount-{}", self.0)
    }
}

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A timer that reached its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub owner: MountId,
    /// Widget-defined discriminator passed back on firing.
    pub tag: u64,
    pub deadline: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TimerId,
    owner: MountId,
    tag: u64,
}

/// Single-threaded timer queue.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    by_deadline: BTreeMap<(Duration, u64), Pending>,
    index: HashMap<TimerId, (Duration, u64)>,
}

impl TimerQueue {
    /// Create an empty queue at virtual time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a one-shot timer `after` from now.
    ///
    /// Deadlines saturate at [`Duration::MAX`].
    pub fn schedule(&mut self, owner: MountId, after: Duration, tag: u64) -> TimerId {
        self.next_id += 1;
        self.next_seq += 1;
        let id = TimerId(self.next_id);
        let key = (self.now.saturating_add(after), self.next_seq);
        self.by_deadline.insert(key, Pending { id, owner, tag });
        self.index.insert(id, key);
        tracing::trace!(timer = id.raw(), %owner, tag, deadline_ms = key.0.as_millis() as u64, "timer scheduled");
        id
    }

    /// Cancel one timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => {
                self.by_deadline.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Cancel every pending timer owned by `owner`, returning how many were dropped.
    pub fn cancel_owner(&mut self, owner: MountId) -> usize {
        let doomed: Vec<TimerId> = self
            .by_deadline
            .values()
            .filter(|p| p.owner == owner)
            .map(|p| p.id)
            .collect();
        for id in &doomed {
            self.cancel(*id);
        }
        doomed.len()
    }

    /// Whether a timer is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of pending timers owned by `owner`.
    #[must_use]
    pub fn pending_for(&self, owner: MountId) -> usize {
        self.by_deadline
            .values()
            .filter(|p| p.owner == owner)
            .count()
    }

    /// Total pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_deadline.len()
    }

    /// True if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_deadline.is_empty()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.by_deadline.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest timer whose deadline is at or before `until`.
    ///
    /// The clock moves to the popped timer's deadline so callbacks that
    /// schedule follow-ups measure their delay from the moment they fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<FiredTimer> {
        let (&key, _) = self.by_deadline.first_key_value()?;
        if key.0 > until {
            return None;
        }
        let pending = self.by_deadline.remove(&key)?;
        self.index.remove(&pending.id);
        if key.0 > self.now {
            self.now = key.0;
        }
        Some(FiredTimer {
            id: pending.id,
            owner: pending.owner,
            tag: pending.tag,
            deadline: key.0,
        })
    }

    /// Move the clock forward to `t`. Earlier values are ignored.
    pub fn advance_to(&mut self, t: Duration) {
        if t > self.now {
            self.now = t;
        }
    }
}
