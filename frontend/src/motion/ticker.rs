//! Shared per-frame ticker.
//!
//! The smooth-scroll provider owns the only `requestAnimationFrame` loop and
//! forwards every frame here, so the scroll engine, trigger playback and
//! pointer effects all advance in lockstep.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    pub now: f64,
    /// Milliseconds since the previous frame, after lag smoothing.
    pub delta: f64,
}

/// When a frame arrives later than `threshold_ms`, pretend only `adjusted_ms` passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagSmoothing {
    pub threshold_ms: f64,
    pub adjusted_ms: f64,
}

type Callback = Rc<RefCell<dyn FnMut(FrameTime)>>;

#[derive(Default)]
struct Inner {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(u64, Callback)>>,
    last: Cell<Option<f64>>,
    lag_smoothing: Cell<Option<LagSmoothing>>,
}

#[derive(Clone, Default)]
pub struct Ticker {
    inner: Rc<Inner>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` disables lag smoothing, which keeps the scroll engine in sync
    /// with wall-clock time after a stalled frame.
    pub fn set_lag_smoothing(&self, smoothing: Option<LagSmoothing>) {
        self.inner.lag_smoothing.set(smoothing);
    }

    pub fn add(&self, callback: impl FnMut(FrameTime) + 'static) -> TickerHandle {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let callback: Callback = Rc::new(RefCell::new(callback));
        self.inner.callbacks.borrow_mut().push((id, callback));
        TickerHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tick(&self, now: f64) -> FrameTime {
        let mut delta = self.inner.last.get().map(|last| now - last).unwrap_or(0.0);
        if let Some(lag) = self.inner.lag_smoothing.get() {
            if delta > lag.threshold_ms {
                delta = lag.adjusted_ms;
            }
        }
        self.inner.last.set(Some(now));
        let frame = FrameTime { now, delta };

        let snapshot: Vec<Callback> = self
            .inner
            .callbacks
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in snapshot {
            // A callback that is already running (re-entrant tick) is skipped.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(frame);
            }
        }
        frame
    }
}

/// Removes its callback from the ticker when dropped.
pub struct TickerHandle {
    id: u64,
    inner: Weak<Inner>,
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.callbacks.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_between_frames() {
        let ticker = Ticker::new();
        assert_eq!(ticker.tick(1000.0).delta, 0.0);
        assert_eq!(ticker.tick(1016.0).delta, 16.0);
    }

    #[test]
    fn test_lag_smoothing_caps_delta() {
        let ticker = Ticker::new();
        ticker.set_lag_smoothing(Some(LagSmoothing {
            threshold_ms: 500.0,
            adjusted_ms: 33.0,
        }));
        ticker.tick(0.0);
        assert_eq!(ticker.tick(2000.0).delta, 33.0);
    }

    #[test]
    fn test_callbacks_run_until_handle_dropped() {
        let ticker = Ticker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handle = {
            let seen = seen.clone();
            ticker.add(move |frame| seen.borrow_mut().push(frame.now))
        };
        ticker.tick(1.0);
        ticker.tick(2.0);
        drop(handle);
        ticker.tick(3.0);
        assert_eq!(*seen.borrow(), vec![1.0, 2.0]);
        assert!(ticker.is_empty());
    }
}
