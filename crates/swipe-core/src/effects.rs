use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant};

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        if let Some(f) = self.0.borrow_mut().take() {
            f()
        }
    }

    pub fn is_spent(&self) -> bool {
        self.0.borrow().is_none()
    }
}

/// Helper to build the cleanup half of an effect.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

/// One-shot deadline polled from the frame loop.
///
/// The timeout fires at most once. Cancelling through the [`Dispose`] returned
/// by [`Timeout::canceller`] (or [`Timeout::cancel`]) guarantees that later
/// polls never fire, even if the deadline has already passed.
pub struct Timeout {
    deadline: Instant,
    state: Rc<Cell<TimeoutState>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimeoutState {
    Armed,
    Fired,
    Cancelled,
}

impl Timeout {
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            state: Rc::new(Cell::new(TimeoutState::Armed)),
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.state.get() == TimeoutState::Armed
    }

    /// Returns `true` exactly once: on the first poll at or after the deadline.
    pub fn poll(&self, now: Instant) -> bool {
        if self.is_armed() && now >= self.deadline {
            self.state.set(TimeoutState::Fired);
            log::trace!("timeout fired");
            return true;
        }
        false
    }

    pub fn cancel(&self) {
        if self.is_armed() {
            log::trace!("timeout cancelled");
            self.state.set(TimeoutState::Cancelled);
        }
    }

    /// A cleanup guard that cancels this timeout when run.
    pub fn canceller(&self) -> Dispose {
        let state = self.state.clone();
        on_unmount(move || {
            if state.get() == TimeoutState::Armed {
                state.set(TimeoutState::Cancelled);
            }
        })
    }
}
