//! Deadline queue owned by a single component.
//!
//! Nothing here touches the host clock: the owner passes `now_ms` in and
//! drains due events with [`Timers::pop_due`]. Dropping the queue (or calling
//! [`Timers::cancel_all`]) discards every pending timer, so an event can never
//! reach a component that has been torn down.

/// Handle to one scheduled timer. Components that only ever tear down
/// wholesale drop it and rely on [`Timers::cancel_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<E> {
    handle: TimerHandle,
    due_ms: u64,
    event: E,
}

#[derive(Debug)]
pub struct Timers<E> {
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `event` to fire once, `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due_ms: now_ms.saturating_add(delay_ms),
            event,
        });
        handle
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Remove and return the earliest event due at or before `now_ms`,
    /// together with its deadline. Equal deadlines fire in schedule order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, E)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= now_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.handle.0))
            .map(|(i, _)| i)?;
        let p = self.pending.remove(idx);
        Some((p.due_ms, p.event))
    }
}
