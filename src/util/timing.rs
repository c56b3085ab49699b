//! Debounce and throttle on top of `gloo_timers`.
//!
//! Both helpers keep at most one pending timer. A debounced call replaces the
//! timer scheduled by the previous call; a throttled call runs immediately and
//! then closes a gate that reopens when its timer fires, replaying once if
//! anything was refused in between.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs the most recent call once `delay_ms` has passed without another.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, pending: RefCell::new(None) }
    }

    /// Cancel the pending call, if any, and schedule `f`.
    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        // Dropping a `Timeout` clears it.
        *self.pending.borrow_mut() = Some(Timeout::new(self.delay_ms, f));
    }
}

/// Open/closed state behind [`Throttle`]. A call refused while closed is
/// remembered so the latest state is applied once the gate reopens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThrottleGate {
    closed: bool,
    trailing: bool,
}

impl ThrottleGate {
    /// Pass through and close, or refuse while closed.
    pub fn try_enter(&mut self) -> bool {
        if self.closed {
            self.trailing = true;
            return false;
        }
        self.closed = true;
        true
    }

    /// Reopen the gate. Returns whether a call was refused since it closed.
    pub fn release(&mut self) -> bool {
        self.closed = false;
        std::mem::take(&mut self.trailing)
    }
}

/// Runs at most one call per `limit_ms`. Calls made while closed collapse
/// into a single trailing call when the window ends.
#[derive(Debug)]
pub struct Throttle {
    limit_ms: u32,
    gate: Rc<RefCell<ThrottleGate>>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: u32) -> Self {
        Self { limit_ms, gate: Rc::new(RefCell::new(ThrottleGate::default())) }
    }

    /// Run `f` now if the gate is open. Returns whether it ran.
    pub fn run(&self, f: &Rc<dyn Fn()>) -> bool {
        if !self.gate.borrow_mut().try_enter() {
            return false;
        }
        f();
        arm(Rc::clone(&self.gate), self.limit_ms, Rc::clone(f));
        true
    }
}

fn arm(gate: Rc<RefCell<ThrottleGate>>, limit_ms: u32, f: Rc<dyn Fn()>) {
    Timeout::new(limit_ms, move || {
        let trailing = gate.borrow_mut().release();
        if trailing && gate.borrow_mut().try_enter() {
            f();
            arm(gate, limit_ms, f);
        }
    })
    .forget();
}
