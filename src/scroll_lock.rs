//! Counting lock over the page's background scrolling.
//!
//! The first [`ScrollLock::acquire`] remembers the host's current overflow
//! value and sets it to `hidden`; dropping the last [`ScrollGuard`] puts the
//! remembered value back.

use std::cell::RefCell;
use std::rc::Rc;

/// Whatever owns the scrollable document (the `<body>` in the browser).
pub trait ScrollHost {
    fn overflow(&self) -> String;
    fn set_overflow(&mut self, value: &str);
}

struct LockState {
    host: Box<dyn ScrollHost>,
    depth: usize,
    saved: Option<String>,
}

#[derive(Clone)]
pub struct ScrollLock {
    state: Rc<RefCell<LockState>>,
}

impl std::fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLock")
            .field("depth", &self.depth())
            .finish()
    }
}

impl ScrollLock {
    pub fn new(host: impl ScrollHost + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(LockState {
                host: Box::new(host),
                depth: 0,
                saved: None,
            })),
        }
    }

    pub fn acquire(&self) -> ScrollGuard {
        let mut state = self.state.borrow_mut();
        if state.depth == 0 {
            let prior = state.host.overflow();
            state.saved = Some(prior);
            state.host.set_overflow("hidden");
        }
        state.depth += 1;
        ScrollGuard { lock: self.clone() }
    }

    pub fn depth(&self) -> usize {
        self.state.borrow().depth
    }

    pub fn is_locked(&self) -> bool {
        self.depth() > 0
    }

    fn release(&self) {
        let mut state = self.state.borrow_mut();
        state.depth = state.depth.saturating_sub(1);
        if state.depth == 0 {
            if let Some(prior) = state.saved.take() {
                state.host.set_overflow(&prior);
            }
        }
    }
}

/// Held while scrolling must stay suspended.
#[must_use = "scrolling is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollGuard {
    lock: ScrollLock,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}
