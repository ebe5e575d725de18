//! One-shot readiness broadcasts.
//!
//! A [`Signal`] fires at most once until it is reset. Subscribing to a signal
//! that has already fired runs the listener straight away, so components that
//! mount late still observe readiness without polling a flag.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Inner {
    fired: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

#[derive(Clone)]
pub struct Signal {
    name: &'static str,
    inner: Rc<Inner>,
}

impl Signal {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Rc::new(Inner::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_fired(&self) -> bool {
        self.inner.fired.get()
    }

    /// Registers `listener`. Runs it immediately if the signal already fired.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, listener.clone()));

        if self.is_fired() {
            listener();
        }

        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Fires the signal. Returns false if it had already fired since the last reset.
    pub fn fire(&self) -> bool {
        if self.inner.fired.replace(true) {
            return false;
        }
        tracing::debug!(signal = self.name, "signal fired");

        // Listeners may subscribe or unsubscribe while being notified.
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            listener();
        }
        true
    }

    pub fn reset(&self) {
        self.inner.fired.set(false);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl PartialEq for Signal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("fired", &self.is_fired())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Removes its listener from the signal when dropped.
pub struct Subscription {
    id: u64,
    inner: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn test_fires_once_until_reset() {
        let signal = Signal::new("layoutReady");
        let (count, listener) = counter();
        let _sub = signal.subscribe(listener);

        assert!(signal.fire());
        assert!(!signal.fire());
        assert_eq!(count.get(), 1);

        signal.reset();
        assert!(!signal.is_fired());
        assert!(signal.fire());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_late_subscriber_runs_immediately() {
        let signal = Signal::new("lenisReady");
        signal.fire();
        let (count, listener) = counter();
        let _sub = signal.subscribe(listener);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_dropped_subscription_is_not_notified() {
        let signal = Signal::new("layoutReady");
        let (count, listener) = counter();
        let sub = signal.subscribe(listener);
        drop(sub);
        assert_eq!(signal.listener_count(), 0);
        signal.fire();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_listener_may_subscribe_during_fire() {
        let signal = Signal::new("layoutReady");
        let nested: Rc<RefCell<Vec<Subscription>>> = Rc::default();
        let (count, listener) = counter();
        let listener = Rc::new(listener);
        let _outer = {
            let signal2 = signal.clone();
            let nested = nested.clone();
            signal.subscribe(move || {
                let l = listener.clone();
                nested.borrow_mut().push(signal2.subscribe(move || l()));
            })
        };
        signal.fire();
        // The nested listener saw the fired flag and ran on subscribe.
        assert_eq!(count.get(), 1);
        assert_eq!(signal.listener_count(), 2);
    }
}
