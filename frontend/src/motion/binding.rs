//! Section animation bindings.
//!
//! A section describes its motion with [`AnimationOptions`] (an archetype plus
//! trigger thresholds), turns it into a [`BindingSpec`], and acquires it from
//! the runtime. The returned [`BindingHandle`] owns the triggers: dropping it
//! releases them. A [`BindingSlot`] holds at most one handle, so racing setup
//! paths (readiness broadcast and fallback timer) cannot bind twice.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::easing::Ease;
use super::layout::NodeId;
use super::trigger::{Anchor, Bound, Edge, MotionError, Scrub, TriggerId, TriggerSpec};
use super::tween::{MotionState, Timeline, Value};

/// Motion archetypes a section can pick from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Archetype {
    Fade,
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    Rotate,
    /// Drifts up by `speed` viewport heights while the section crosses the screen.
    Parallax { speed: f64 },
    /// Reveals the children one after another.
    Stagger { amount: f64 },
}

impl Archetype {
    fn states(&self) -> (MotionState, MotionState, Ease) {
        let hidden = MotionState::new().opacity(0.0);
        let shown = MotionState::new().opacity(1.0);
        match *self {
            Archetype::Fade => (hidden, shown, Ease::Power2Out),
            Archetype::FadeUp => (hidden.y(60.0), shown.y(0.0), Ease::Power3Out),
            Archetype::FadeDown => (hidden.y(-60.0), shown.y(0.0), Ease::Power3Out),
            Archetype::FadeLeft => (hidden.x(-60.0), shown.x(0.0), Ease::Power3Out),
            Archetype::FadeRight => (hidden.x(60.0), shown.x(0.0), Ease::Power3Out),
            Archetype::Scale => (hidden.scale(0.8), shown.scale(1.0), Ease::BackOut(1.7)),
            Archetype::Rotate => (hidden.rotation(10.0), shown.rotation(0.0), Ease::Power2Out),
            Archetype::Parallax { speed } => (
                MotionState::new().y(0.0),
                MotionState::new().y_value(Value::ViewportHeight(-speed)),
                Ease::Linear,
            ),
            Archetype::Stagger { .. } => (hidden.y(30.0), shown.y(0.0), Ease::Power3Out),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationOptions {
    pub archetype: Archetype,
    /// Seconds.
    pub duration: f64,
    pub delay: f64,
    pub start: &'static str,
    pub end: &'static str,
    pub scrub: Scrub,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            archetype: Archetype::FadeUp,
            duration: 1.0,
            delay: 0.0,
            start: "top 85%",
            end: "bottom 15%",
            scrub: Scrub::Off,
        }
    }
}

impl AnimationOptions {
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            ..Self::default()
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn start(mut self, start: &'static str) -> Self {
        self.start = start;
        self
    }

    /// Builds the trigger for `node`; `children` are only used by `Stagger`.
    pub fn build(&self, node: NodeId, children: &[NodeId]) -> Result<BindingSpec, MotionError> {
        let (from, to, ease) = self.archetype.states();

        let (spec, timeline) = match self.archetype {
            Archetype::Parallax { .. } => (
                TriggerSpec::while_visible(node),
                Timeline::from_to(node, from, to, 1.0, ease),
            ),
            Archetype::Stagger { amount } => {
                let spec = TriggerSpec {
                    scrub: self.scrub,
                    ..TriggerSpec::entrance(node)
                }
                .starting(self.start)?
                .ending(self.end)?;
                let timeline =
                    Timeline::staggered(children, from, to, self.duration, amount, ease)
                        .delayed(self.delay);
                (spec, timeline)
            }
            _ => {
                let spec = TriggerSpec {
                    scrub: self.scrub,
                    ..TriggerSpec::entrance(node)
                }
                .starting(self.start)?
                .ending(self.end)?;
                let timeline =
                    Timeline::from_to(node, from, to, self.duration, ease).delayed(self.delay);
                (spec, timeline)
            }
        };
        Ok(BindingSpec::single(spec, timeline))
    }
}

/// A pinned section whose inner track slides sideways while the page scrolls.
pub fn horizontal_scroll(container: NodeId, track: NodeId) -> BindingSpec {
    let spec = TriggerSpec {
        start: Anchor {
            element: Edge::Start,
            viewport: Edge::Start,
        },
        end: Bound::AfterOverflowX(track),
        scrub: Scrub::Smoothed(1.0),
        pin: true,
        invalidate_on_refresh: true,
        ..TriggerSpec::entrance(container)
    };
    let timeline = Timeline::from_to(
        track,
        MotionState::new().x(0.0),
        MotionState::new().x_value(Value::OverflowX(track)),
        1.0,
        Ease::Linear,
    );
    BindingSpec::single(spec, timeline)
}

/// Everything one section attaches in a single acquire.
#[derive(Clone, Debug, Default)]
pub struct BindingSpec {
    pub parts: Vec<(TriggerSpec, Timeline)>,
}

impl BindingSpec {
    pub fn single(spec: TriggerSpec, timeline: Timeline) -> Self {
        Self {
            parts: vec![(spec, timeline)],
        }
    }

    pub fn and(mut self, other: BindingSpec) -> Self {
        self.parts.extend(other.parts);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Trigger ids whose handles were dropped, waiting for the runtime to kill them.
pub(crate) type ReleaseQueue = Rc<RefCell<Vec<TriggerId>>>;

/// Owns a section's triggers. Dropping it releases them; releasing triggers
/// that a navigation already killed is harmless.
#[derive(Debug)]
pub struct BindingHandle {
    triggers: Vec<TriggerId>,
    /// Scroll session the triggers were created in.
    generation: u64,
    queue: Weak<RefCell<Vec<TriggerId>>>,
}

impl BindingHandle {
    pub(crate) fn new(triggers: Vec<TriggerId>, generation: u64, queue: &ReleaseQueue) -> Self {
        Self {
            triggers,
            generation,
            queue: Rc::downgrade(queue),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for BindingHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().extend(self.triggers.drain(..));
        }
    }
}

/// Per-component holder for at most one binding.
#[derive(Debug, Default)]
pub struct BindingSlot {
    handle: Option<BindingHandle>,
}

impl BindingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Runs `acquire` unless the slot already holds a binding from session
    /// `generation`. A binding from an earlier session was killed by the
    /// navigation that ended it and is replaced. Returns whether a new
    /// binding was stored.
    pub fn acquire_with(
        &mut self,
        generation: u64,
        acquire: impl FnOnce() -> Option<BindingHandle>,
    ) -> bool {
        match &self.handle {
            Some(handle) if handle.generation() == generation => return false,
            Some(_) => self.handle = None,
            None => {}
        }
        self.handle = acquire();
        self.handle.is_some()
    }

    pub fn release(&mut self) {
        self.handle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetypes_are_explicit_pairs() {
        let (from, to, _) = Archetype::FadeLeft.states();
        assert_eq!(from, MotionState::new().opacity(0.0).x(-60.0));
        assert_eq!(to, MotionState::new().opacity(1.0).x(0.0));

        let (from, to, ease) = Archetype::Scale.states();
        assert_eq!(from.scale, Some(0.8));
        assert_eq!(to.scale, Some(1.0));
        assert_eq!(ease, Ease::BackOut(1.7));
    }

    #[test]
    fn test_stagger_targets_children() {
        let spec = AnimationOptions::new(Archetype::Stagger { amount: 0.1 })
            .build(10, &[11, 12, 13])
            .unwrap();
        let (trigger, timeline) = &spec.parts[0];
        assert_eq!(trigger.trigger, 10);
        assert_eq!(timeline.nodes(), vec![11, 12, 13]);
    }

    #[test]
    fn test_parallax_is_scrubbed_and_measured() {
        let spec = AnimationOptions::new(Archetype::Parallax { speed: 0.5 })
            .build(3, &[])
            .unwrap();
        let (trigger, timeline) = &spec.parts[0];
        assert_eq!(trigger.scrub, Scrub::Locked);
        assert!(trigger.invalidate_on_refresh);
        assert!(timeline.is_measured());
    }

    #[test]
    fn test_bad_threshold_is_an_error() {
        let result = AnimationOptions::new(Archetype::Fade).start("top nowhere").build(1, &[]);
        assert!(matches!(result, Err(MotionError::InvalidEdge(_))));
    }

    #[test]
    fn test_slot_acquires_once() {
        let queue: ReleaseQueue = Rc::default();
        let mut slot = BindingSlot::new();
        let mut calls = 0;
        assert!(slot.acquire_with(1, || {
            calls += 1;
            Some(BindingHandle::new(vec![], 1, &queue))
        }));
        assert!(!slot.acquire_with(1, || {
            calls += 1;
            Some(BindingHandle::new(vec![], 1, &queue))
        }));
        assert_eq!(calls, 1);
        slot.release();
        assert!(!slot.is_bound());
    }

    #[test]
    fn test_slot_replaces_binding_from_previous_session() {
        let queue: ReleaseQueue = Rc::default();
        let mut slot = BindingSlot::new();
        slot.acquire_with(1, || Some(BindingHandle::new(vec![TriggerId(0)], 1, &queue)));
        assert!(slot.acquire_with(2, || Some(BindingHandle::new(vec![TriggerId(1)], 2, &queue))));
        // The old handle released its triggers on the way out.
        assert_eq!(*queue.borrow(), vec![TriggerId(0)]);
        assert!(!slot.acquire_with(2, || None));
        assert!(slot.is_bound());
    }
}
