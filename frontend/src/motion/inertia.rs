//! Inertial (eased) scroll engine.
//!
//! Wheel input and programmatic `scroll_to` calls move a target position; the
//! animated position glides toward it once per frame along an easing curve.
//! The engine never touches the DOM: the provider applies `position()` to the
//! window after every `raf`.

use super::easing::Ease;
use super::timing::{lerp, progress};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOptions {
    pub duration_ms: f64,
    pub easing: Ease,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    /// Touch scrolling stays native; kept for completeness of the option set.
    pub touch_multiplier: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1_200.0,
            easing: Ease::ExpoOut,
            smooth_wheel: true,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollToOptions {
    pub offset: f64,
    /// Falls back to the engine's configured duration.
    pub duration_ms: Option<f64>,
    pub immediate: bool,
}

impl ScrollToOptions {
    pub fn immediate() -> Self {
        Self {
            offset: 0.0,
            duration_ms: Some(0.0),
            immediate: true,
        }
    }

    pub fn with_offset(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Glide {
    from: f64,
    to: f64,
    /// Set on the first frame after the glide was requested.
    start: Option<f64>,
    duration_ms: f64,
    easing: Ease,
}

#[derive(Debug)]
pub struct InertialScroll {
    options: ScrollOptions,
    animated: f64,
    target: f64,
    limit: f64,
    glide: Option<Glide>,
    stopped: bool,
    destroyed: bool,
    frames: u64,
}

impl Default for InertialScroll {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}

impl InertialScroll {
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            animated: 0.0,
            target: 0.0,
            // Unbounded until the first resize reports real dimensions.
            limit: f64::INFINITY,
            glide: None,
            stopped: false,
            destroyed: false,
            frames: 0,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.animated
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_scrolling(&self) -> bool {
        self.glide.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(0.0, self.limit.max(0.0))
    }

    /// Moves toward `position + offset`. An immediate (or zero-duration) scroll
    /// lands synchronously and returns the new position.
    pub fn scroll_to(&mut self, position: f64, opts: ScrollToOptions) -> Option<f64> {
        if self.destroyed {
            return None;
        }
        let destination = self.clamp(position + opts.offset);
        let duration_ms = opts.duration_ms.unwrap_or(self.options.duration_ms);

        if opts.immediate || duration_ms <= 0.0 {
            self.animated = destination;
            self.target = destination;
            self.glide = None;
            return Some(destination);
        }

        self.target = destination;
        self.glide = Some(Glide {
            from: self.animated,
            to: destination,
            start: None,
            duration_ms,
            easing: self.options.easing,
        });
        None
    }

    /// Feeds a wheel delta. Returns true when the engine consumed it and the
    /// native scroll should be suppressed.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if self.destroyed || self.stopped || !self.options.smooth_wheel {
            return false;
        }
        let destination = self.clamp(self.target + delta_y * self.options.wheel_multiplier);
        if destination == self.target && self.glide.is_none() {
            return true;
        }
        self.target = destination;
        self.glide = Some(Glide {
            from: self.animated,
            to: destination,
            start: None,
            duration_ms: self.options.duration_ms,
            easing: self.options.easing,
        });
        true
    }

    /// Adopts a position the browser reached on its own (scrollbar, keys).
    pub fn sync_native(&mut self, position: f64) {
        if self.glide.is_none() {
            let position = self.clamp(position);
            self.animated = position;
            self.target = position;
        }
    }

    pub fn resize(&mut self, content_height: f64, viewport_height: f64) {
        self.limit = (content_height - viewport_height).max(0.0);
        self.animated = self.clamp(self.animated);
        self.target = self.clamp(self.target);
        if let Some(glide) = self.glide.as_mut() {
            glide.to = glide.to.clamp(0.0, self.limit);
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.glide = None;
        self.target = self.animated;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Advances one frame and returns the animated position.
    pub fn raf(&mut self, now: f64) -> f64 {
        if self.destroyed {
            return self.animated;
        }
        self.frames += 1;

        if let Some(glide) = self.glide.as_mut() {
            let start = *glide.start.get_or_insert(now);
            let t = progress(start, now, glide.duration_ms);
            self.animated = lerp(glide.from, glide.to, glide.easing.apply(t));
            if t >= 1.0 {
                self.animated = glide.to;
                self.glide = None;
            }
        }
        self.animated
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.glide = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> InertialScroll {
        let mut engine = InertialScroll::default();
        engine.resize(5_000.0, 800.0);
        engine
    }

    #[test]
    fn test_immediate_scroll_is_synchronous() {
        let mut engine = engine();
        engine.scroll_to(1_500.0, ScrollToOptions::default());
        engine.raf(0.0);
        engine.raf(100.0);
        assert!(engine.is_scrolling());

        let landed = engine.scroll_to(0.0, ScrollToOptions::immediate());
        assert_eq!(landed, Some(0.0));
        assert_eq!(engine.position(), 0.0);
        assert!(!engine.is_scrolling());
    }

    #[test]
    fn test_zero_duration_counts_as_immediate() {
        let mut engine = engine();
        let opts = ScrollToOptions {
            duration_ms: Some(0.0),
            ..Default::default()
        };
        assert_eq!(engine.scroll_to(300.0, opts), Some(300.0));
    }

    #[test]
    fn test_glide_reaches_target_after_duration() {
        let mut engine = engine();
        assert_eq!(engine.scroll_to(1_000.0, ScrollToOptions::with_offset(-100.0)), None);
        engine.raf(0.0);
        let mid = engine.raf(600.0);
        assert!(mid > 0.0 && mid < 900.0);
        assert_eq!(engine.raf(1_200.0), 900.0);
        assert!(!engine.is_scrolling());
    }

    #[test]
    fn test_wheel_accumulates_and_clamps() {
        let mut engine = engine();
        assert!(engine.wheel(100.0));
        assert!(engine.wheel(100.0));
        assert_eq!(engine.target(), 200.0);
        assert!(engine.wheel(-10_000.0));
        assert_eq!(engine.target(), 0.0);
        assert!(engine.wheel(1_000_000.0));
        assert_eq!(engine.target(), 4_200.0);
    }

    #[test]
    fn test_stopped_engine_ignores_wheel() {
        let mut engine = engine();
        engine.stop();
        assert!(!engine.wheel(100.0));
        engine.start();
        assert!(engine.wheel(100.0));
    }

    #[test]
    fn test_resize_clamps_position() {
        let mut engine = engine();
        engine.scroll_to(4_000.0, ScrollToOptions::immediate());
        engine.resize(2_000.0, 800.0);
        assert_eq!(engine.position(), 1_200.0);
        assert_eq!(engine.limit(), 1_200.0);
    }

    #[test]
    fn test_native_sync_ignored_while_gliding() {
        let mut engine = engine();
        engine.sync_native(250.0);
        assert_eq!(engine.position(), 250.0);
        engine.scroll_to(1_000.0, ScrollToOptions::default());
        engine.sync_native(10.0);
        assert_eq!(engine.target(), 1_000.0);
    }

    #[test]
    fn test_destroyed_engine_is_inert() {
        let mut engine = engine();
        engine.destroy();
        assert_eq!(engine.scroll_to(100.0, ScrollToOptions::immediate()), None);
        assert!(!engine.wheel(10.0));
        engine.raf(5.0);
        assert_eq!(engine.frames(), 0);
    }
}
