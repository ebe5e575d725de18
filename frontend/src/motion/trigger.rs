//! Scroll triggers and the process-wide trigger registry.
//!
//! A trigger binds a scroll range, measured from a node's box against the
//! viewport, to playback of a [`Timeline`]. All triggers live in a single
//! [`TriggerRegistry`] so a navigation can kill every one of them at once,
//! including triggers whose owner never cleaned up.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::layout::{Layout, NodeId, Rect, StyleWrite};
use super::timing::normalize;
use super::tween::Timeline;

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("invalid trigger edge `{0}`")]
    InvalidEdge(String),
    #[error("trigger position `{0}` needs an element edge and a viewport edge")]
    InvalidAnchor(String),
    #[error("invalid toggle action `{0}`")]
    InvalidAction(String),
    #[error("toggle actions need exactly four entries, got `{0}`")]
    InvalidToggleActions(String),
}

/// A point along a box: one of its edges, a percentage of it, or a pixel offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Percent(f64),
    Pixels(f64),
}

impl Edge {
    fn offset(&self, length: f64) -> f64 {
        match *self {
            Edge::Start => 0.0,
            Edge::Center => length / 2.0,
            Edge::End => length,
            Edge::Percent(p) => length * p / 100.0,
            Edge::Pixels(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "top" | "left" => return Ok(Edge::Start),
            "center" => return Ok(Edge::Center),
            "bottom" | "right" => return Ok(Edge::End),
            _ => {}
        }
        let invalid = || MotionError::InvalidEdge(s.to_string());
        if let Some(p) = s.strip_suffix('%') {
            return p.parse().map(Edge::Percent).map_err(|_| invalid());
        }
        s.strip_suffix("px")
            .unwrap_or(s)
            .parse()
            .map(Edge::Pixels)
            .map_err(|_| invalid())
    }
}

/// `"<element edge> <viewport edge>"`: the trigger point is reached when the
/// element edge meets the viewport edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: Edge,
    pub viewport: Edge,
}

impl Anchor {
    pub fn scroll_position(&self, rect: &Rect, viewport_height: f64) -> f64 {
        rect.top + self.element.offset(rect.height) - self.viewport.offset(viewport_height)
    }
}

impl FromStr for Anchor {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [element, viewport] => Ok(Anchor {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            // A single edge means the same edge on both sides.
            [edge] => {
                let edge: Edge = edge.parse()?;
                Ok(Anchor {
                    element: edge,
                    viewport: edge,
                })
            }
            _ => Err(MotionError::InvalidAnchor(s.to_string())),
        }
    }
}

/// Where a trigger's range ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    At(Anchor),
    /// A fixed distance past the start (`"+=400"`).
    After(f64),
    /// Past the start by a node's horizontal overflow, re-measured on refresh.
    AfterOverflowX(NodeId),
}

impl FromStr for Bound {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().strip_prefix("+=") {
            Some(distance) => distance
                .trim()
                .strip_suffix("px")
                .unwrap_or(distance.trim())
                .parse()
                .map(Bound::After)
                .map_err(|_| MotionError::InvalidEdge(s.to_string())),
            None => s.parse().map(Bound::At),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for Action {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => Action::Play,
            "pause" => Action::Pause,
            "resume" => Action::Resume,
            "reverse" => Action::Reverse,
            "restart" => Action::Restart,
            "reset" => Action::Reset,
            "complete" => Action::Complete,
            "none" => Action::None,
            other => return Err(MotionError::InvalidAction(other.to_string())),
        })
    }
}

/// What happens on enter, leave, enter-back and leave-back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl Default for ToggleActions {
    /// Plays on the way down and rewinds when scrolled back above the start.
    fn default() -> Self {
        Self {
            on_enter: Action::Play,
            on_leave: Action::None,
            on_enter_back: Action::None,
            on_leave_back: Action::Reverse,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Action>, _>>()?;
        match actions.as_slice() {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter: *on_enter,
                on_leave: *on_leave,
                on_enter_back: *on_enter_back,
                on_leave_back: *on_leave_back,
            }),
            _ => Err(MotionError::InvalidToggleActions(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scrub {
    Off,
    /// Playhead follows scroll progress exactly.
    Locked,
    /// Playhead catches up with scroll progress over this many seconds.
    Smoothed(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TriggerSpec {
    pub trigger: NodeId,
    pub start: Anchor,
    pub end: Bound,
    pub scrub: Scrub,
    pub toggle_actions: ToggleActions,
    pub pin: bool,
    /// Re-resolve measured tween values on every refresh.
    pub invalidate_on_refresh: bool,
}

impl TriggerSpec {
    /// Entrance trigger: starts when the node's top reaches 85% of the viewport.
    pub fn entrance(trigger: NodeId) -> Self {
        Self {
            trigger,
            start: Anchor {
                element: Edge::Start,
                viewport: Edge::Percent(85.0),
            },
            end: Bound::At(Anchor {
                element: Edge::End,
                viewport: Edge::Percent(15.0),
            }),
            scrub: Scrub::Off,
            toggle_actions: ToggleActions::default(),
            pin: false,
            invalidate_on_refresh: false,
        }
    }

    /// Scrubbed across the whole time the node is on screen.
    pub fn while_visible(trigger: NodeId) -> Self {
        Self {
            start: Anchor {
                element: Edge::Start,
                viewport: Edge::End,
            },
            end: Bound::At(Anchor {
                element: Edge::End,
                viewport: Edge::Start,
            }),
            scrub: Scrub::Locked,
            invalidate_on_refresh: true,
            ..Self::entrance(trigger)
        }
    }

    pub fn starting(mut self, start: &str) -> Result<Self, MotionError> {
        self.start = start.parse()?;
        Ok(self)
    }

    pub fn ending(mut self, end: &str) -> Result<Self, MotionError> {
        self.end = end.parse()?;
        Ok(self)
    }

    pub fn with_actions(mut self, actions: &str) -> Result<Self, MotionError> {
        self.toggle_actions = actions.parse()?;
        Ok(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Zone {
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriggerId(pub(crate) u64);

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trigger#{}", self.0)
    }
}

#[derive(Debug)]
pub struct Trigger {
    spec: TriggerSpec,
    timeline: Timeline,
    start: f64,
    end: f64,
    zone: Option<Zone>,
    pin_offset: f64,
    pin_dirty: bool,
    measured: bool,
}

impl Trigger {
    fn new(spec: TriggerSpec, timeline: Timeline) -> Self {
        Self {
            spec,
            timeline,
            start: 0.0,
            end: 0.0,
            zone: None,
            pin_offset: 0.0,
            pin_dirty: false,
            measured: false,
        }
    }

    pub fn spec(&self) -> &TriggerSpec {
        &self.spec
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn range(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    pub fn progress(&self, scroll: f64) -> f64 {
        normalize(scroll, self.start, self.end)
    }

    /// Nodes this trigger holds on to: the animated ones plus the node it
    /// measures, which a pin also writes to.
    fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = self.timeline.nodes();
        if !nodes.contains(&self.spec.trigger) {
            nodes.push(self.spec.trigger);
        }
        nodes
    }

    fn measure(&mut self, layout: &dyn Layout) {
        let Some(mut rect) = layout.rect(self.spec.trigger) else {
            // Missing node: leave the trigger unmeasured and inert.
            return;
        };
        // The pin transform moves the box; measure where it sits unpinned.
        rect.top -= self.pin_offset;
        let viewport = layout.viewport().height;
        self.start = self.spec.start.scroll_position(&rect, viewport);
        self.end = match self.spec.end {
            Bound::At(anchor) => anchor.scroll_position(&rect, viewport),
            Bound::After(distance) => self.start + distance,
            Bound::AfterOverflowX(node) => {
                let width = layout.scroll_width(node).unwrap_or(0.0);
                self.start + (width - layout.viewport().width).max(0.0)
            }
        }
        .max(self.start);

        if !self.measured || self.spec.invalidate_on_refresh {
            self.timeline.resolve(layout);
        }
        self.measured = true;
        self.pin_dirty = self.spec.pin;
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Play => self.timeline.play(),
            Action::Pause => self.timeline.pause(),
            Action::Resume => self.timeline.resume(),
            Action::Reverse => self.timeline.reverse(),
            Action::Restart => self.timeline.restart(),
            Action::Reset => self.timeline.reset(),
            Action::Complete => self.timeline.complete(),
            Action::None => {}
        }
    }

    fn update(&mut self, scroll: f64) {
        if !self.measured {
            return;
        }
        let zone = if scroll < self.start {
            Zone::Before
        } else if scroll > self.end || (self.end == self.start && scroll >= self.end) {
            Zone::After
        } else {
            Zone::Active
        };

        if self.spec.scrub == Scrub::Off {
            let actions = self.spec.toggle_actions;
            match (self.zone, zone) {
                (None, Zone::Before) => {}
                (None, Zone::Active) | (Some(Zone::Before), Zone::Active) => {
                    self.apply(actions.on_enter)
                }
                (None, Zone::After) | (Some(Zone::Before), Zone::After) => {
                    self.apply(actions.on_enter);
                    self.apply(actions.on_leave);
                }
                (Some(Zone::Active), Zone::After) => self.apply(actions.on_leave),
                (Some(Zone::After), Zone::Active) => self.apply(actions.on_enter_back),
                (Some(Zone::Active), Zone::Before) => self.apply(actions.on_leave_back),
                (Some(Zone::After), Zone::Before) => {
                    self.apply(actions.on_enter_back);
                    self.apply(actions.on_leave_back);
                }
                _ => {}
            }
        }
        self.zone = Some(zone);

        if self.spec.scrub == Scrub::Locked {
            self.timeline.seek(self.progress(scroll));
        }

        if self.spec.pin {
            let offset = (scroll - self.start).clamp(0.0, self.end - self.start);
            if offset != self.pin_offset {
                self.pin_offset = offset;
                self.pin_dirty = true;
            }
        }
    }

    fn advance(&mut self, dt: f64, scroll: f64) {
        if let Scrub::Smoothed(lag) = self.spec.scrub {
            if !self.measured {
                return;
            }
            let target = self.progress(scroll);
            let current = self.timeline.progress();
            let step = if lag <= 0.0 { 1.0 } else { (dt / lag).min(1.0) };
            let next = current + (target - current) * step;
            self.timeline
                .seek(if (next - target).abs() < 1e-4 { target } else { next });
        } else {
            self.timeline.advance(dt);
        }
    }

    fn render(&mut self) -> Vec<StyleWrite> {
        if !self.measured {
            return Vec::new();
        }
        let mut writes = self.timeline.render();
        if self.pin_dirty {
            self.pin_dirty = false;
            let spacing = self.end - self.start;
            let css = format!(
                "transform: translate3d(0px, {}px, 0px); margin-bottom: {}px;",
                self.pin_offset, spacing
            );
            // A pinned node that is also tweened keeps both declarations.
            match writes.iter_mut().find(|w| w.node == self.spec.trigger) {
                Some(write) => {
                    write.css = format!(
                        "{} translate: 0px {}px; margin-bottom: {}px;",
                        write.css, self.pin_offset, spacing
                    )
                }
                None => writes.push(StyleWrite {
                    node: self.spec.trigger,
                    css,
                }),
            }
        }
        writes
    }
}

/// Every live trigger in the page session.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    next_id: u64,
    triggers: BTreeMap<TriggerId, Trigger>,
    scroll_memory: Option<f64>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn ids(&self) -> Vec<TriggerId> {
        self.triggers.keys().copied().collect()
    }

    pub fn get(&self, id: TriggerId) -> Option<&Trigger> {
        self.triggers.get(&id)
    }

    /// Registers a trigger, measures it and places it for the current scroll.
    pub fn create(
        &mut self,
        spec: TriggerSpec,
        timeline: Timeline,
        layout: &dyn Layout,
        scroll: f64,
    ) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        let mut trigger = Trigger::new(spec, timeline);
        trigger.measure(layout);
        trigger.update(scroll);
        tracing::debug!(%id, start = trigger.start, end = trigger.end, "trigger created");
        self.triggers.insert(id, trigger);
        id
    }

    /// Removes a trigger and returns the nodes whose inline style must be restored.
    /// Killing an unknown or already-killed trigger is a no-op.
    pub fn kill(&mut self, id: TriggerId) -> Vec<NodeId> {
        self.triggers
            .remove(&id)
            .map(|trigger| trigger.nodes())
            .unwrap_or_default()
    }

    pub fn kill_all(&mut self) -> Vec<NodeId> {
        let count = self.triggers.len();
        let mut nodes: Vec<NodeId> = std::mem::take(&mut self.triggers)
            .into_values()
            .flat_map(|trigger| trigger.nodes())
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        if count > 0 {
            tracing::debug!(count, "killed all triggers");
        }
        nodes
    }

    /// Re-measures every trigger. Returns the remembered scroll position the
    /// page should be restored to, if any.
    pub fn refresh(&mut self, layout: &dyn Layout, scroll: f64) -> Option<f64> {
        for trigger in self.triggers.values_mut() {
            trigger.measure(layout);
            trigger.update(scroll);
        }
        tracing::trace!(count = self.triggers.len(), "triggers refreshed");
        self.scroll_memory.filter(|remembered| *remembered != scroll)
    }

    pub fn remember_scroll(&mut self, scroll: f64) {
        self.scroll_memory = Some(scroll);
    }

    pub fn scroll_memory(&self) -> Option<f64> {
        self.scroll_memory
    }

    pub fn clear_scroll_memory(&mut self) {
        self.scroll_memory = None;
    }

    pub fn update(&mut self, scroll: f64) {
        for trigger in self.triggers.values_mut() {
            trigger.update(scroll);
        }
    }

    /// Advances playback by `dt` seconds.
    pub fn advance(&mut self, dt: f64, scroll: f64) {
        for trigger in self.triggers.values_mut() {
            trigger.advance(dt, scroll);
        }
    }

    pub fn render(&mut self) -> Vec<StyleWrite> {
        self.triggers
            .values_mut()
            .flat_map(|trigger| trigger.render())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::easing::Ease;
    use crate::motion::layout::fake::FakeLayout;
    use crate::motion::tween::{MotionState, Playback, Value};
    use pretty_assertions::assert_eq;

    fn fade(node: NodeId) -> Timeline {
        Timeline::from_to(
            node,
            MotionState::new().opacity(0.0),
            MotionState::new().opacity(1.0),
            1.0,
            Ease::Linear,
        )
    }

    #[test]
    fn test_parse_anchor() {
        assert_eq!(
            "top 85%".parse::<Anchor>().unwrap(),
            Anchor {
                element: Edge::Start,
                viewport: Edge::Percent(85.0)
            }
        );
        assert_eq!(
            "20% top".parse::<Anchor>().unwrap(),
            Anchor {
                element: Edge::Percent(20.0),
                viewport: Edge::Start
            }
        );
        assert_eq!(
            "left 120px".parse::<Anchor>().unwrap().viewport,
            Edge::Pixels(120.0)
        );
        assert!(matches!(
            "top middle".parse::<Anchor>(),
            Err(MotionError::InvalidEdge(_))
        ));
        assert!(matches!(
            "top 10% bottom".parse::<Anchor>(),
            Err(MotionError::InvalidAnchor(_))
        ));
    }

    #[test]
    fn test_parse_bound_and_actions() {
        assert_eq!("+=400".parse::<Bound>().unwrap(), Bound::After(400.0));
        assert_eq!(
            "play none none reverse".parse::<ToggleActions>().unwrap(),
            ToggleActions::default()
        );
        assert_eq!(
            "play jump none none".parse::<ToggleActions>(),
            Err(MotionError::InvalidAction("jump".to_string()))
        );
        assert!("play none".parse::<ToggleActions>().is_err());
    }

    #[test]
    fn test_range_from_layout() {
        let layout = FakeLayout::default().with_node(1, 2_000.0, 400.0);
        let mut registry = TriggerRegistry::new();
        let id = registry.create(TriggerSpec::entrance(1), fade(1), &layout, 0.0);
        // top hits 85% of an 800px viewport; bottom hits 15%.
        assert_eq!(registry.get(id).unwrap().range(), (1_320.0, 2_280.0));
        assert_eq!(registry.get(id).unwrap().zone(), Some(Zone::Before));
    }

    #[test]
    fn test_enter_plays_and_leave_back_reverses() {
        let layout = FakeLayout::default().with_node(1, 2_000.0, 400.0);
        let mut registry = TriggerRegistry::new();
        let id = registry.create(TriggerSpec::entrance(1), fade(1), &layout, 0.0);

        registry.update(1_500.0);
        assert_eq!(registry.get(id).unwrap().timeline().playback(), Playback::Forward);
        registry.advance(2.0, 1_500.0);
        assert_eq!(registry.get(id).unwrap().timeline().progress(), 1.0);

        registry.update(100.0);
        assert_eq!(registry.get(id).unwrap().timeline().playback(), Playback::Backward);
        registry.advance(2.0, 100.0);
        assert_eq!(registry.get(id).unwrap().timeline().progress(), 0.0);
    }

    #[test]
    fn test_already_visible_node_plays_on_creation() {
        let layout = FakeLayout::default().with_node(1, 100.0, 300.0);
        let mut registry = TriggerRegistry::new();
        let id = registry.create(TriggerSpec::entrance(1), fade(1), &layout, 0.0);
        assert_eq!(registry.get(id).unwrap().zone(), Some(Zone::Active));
        assert_eq!(registry.get(id).unwrap().timeline().playback(), Playback::Forward);
    }

    #[test]
    fn test_locked_scrub_tracks_progress() {
        let layout = FakeLayout::default().with_node(1, 1_000.0, 800.0);
        let mut registry = TriggerRegistry::new();
        let parallax = Timeline::from_to(
            1,
            MotionState::new().y(0.0),
            MotionState::new().y_value(Value::ViewportHeight(-0.5)),
            1.0,
            Ease::Linear,
        );
        let id = registry.create(TriggerSpec::while_visible(1), parallax, &layout, 0.0);
        // Range runs from 200 (top meets bottom) to 1800 (bottom meets top).
        registry.update(1_000.0);
        let trigger = registry.get(id).unwrap();
        assert_eq!(trigger.timeline().progress(), 0.5);
        assert_eq!(trigger.timeline().pose_of(0).unwrap().y, Some(-200.0));
    }

    #[test]
    fn test_pinned_trigger_holds_node() {
        let layout = FakeLayout::default()
            .with_node(1, 1_000.0, 800.0)
            .with_scroll_width(2, 3_280.0);
        let mut registry = TriggerRegistry::new();
        let spec = TriggerSpec {
            start: "top top".parse().unwrap(),
            end: Bound::AfterOverflowX(2),
            scrub: Scrub::Locked,
            pin: true,
            invalidate_on_refresh: true,
            ..TriggerSpec::entrance(1)
        };
        let slide = Timeline::from_to(
            2,
            MotionState::new().x(0.0),
            MotionState::new().x_value(Value::OverflowX(2)),
            1.0,
            Ease::Linear,
        );
        let id = registry.create(spec, slide, &layout, 0.0);
        assert_eq!(registry.get(id).unwrap().range(), (1_000.0, 3_000.0));

        registry.update(1_500.0);
        let writes = registry.render();
        assert!(writes.iter().any(|w| w.node == 1
            && w.css == "transform: translate3d(0px, 500px, 0px); margin-bottom: 2000px;"));
        assert!(writes
            .iter()
            .any(|w| w.node == 2 && w.css == "transform: translate3d(-500px, 0px, 0px);"));

        // The browser reports the box shifted by the pin transform; refresh
        // must still land on the unpinned range.
        let pinned_layout = FakeLayout::default()
            .with_node(1, 1_500.0, 800.0)
            .with_scroll_width(2, 3_280.0);
        registry.refresh(&pinned_layout, 1_500.0);
        assert_eq!(registry.get(id).unwrap().range(), (1_000.0, 3_000.0));
    }

    #[test]
    fn test_kill_all_returns_nodes_and_is_idempotent() {
        let layout = FakeLayout::default()
            .with_node(1, 100.0, 100.0)
            .with_node(2, 900.0, 100.0);
        let mut registry = TriggerRegistry::new();
        let first = registry.create(TriggerSpec::entrance(1), fade(1), &layout, 0.0);
        registry.create(TriggerSpec::entrance(2), fade(2), &layout, 0.0);
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.kill_all(), vec![1, 2]);
        assert!(registry.is_empty());
        assert!(registry.kill(first).is_empty());
        assert!(registry.kill_all().is_empty());
    }

    #[test]
    fn test_stagger_parent_is_released_with_children() {
        let layout = FakeLayout::default()
            .with_node(10, 600.0, 300.0)
            .with_node(11, 600.0, 100.0)
            .with_node(12, 700.0, 100.0);
        let timeline = Timeline::staggered(
            &[11, 12],
            MotionState::new().opacity(0.0),
            MotionState::new().opacity(1.0),
            0.8,
            0.1,
            Ease::Power3Out,
        );
        let mut registry = TriggerRegistry::new();
        let id = registry.create(TriggerSpec::entrance(10), timeline, &layout, 0.0);
        let mut released = registry.kill(id);
        released.sort_unstable();
        assert_eq!(released, vec![10, 11, 12]);
    }

    #[test]
    fn test_missing_node_leaves_trigger_inert() {
        let mut registry = TriggerRegistry::new();
        let id = registry.create(TriggerSpec::entrance(9), fade(9), &FakeLayout::default(), 0.0);
        registry.update(10_000.0);
        assert_eq!(registry.get(id).unwrap().zone(), None);
    }

    #[test]
    fn test_scroll_memory() {
        let mut registry = TriggerRegistry::new();
        let layout = FakeLayout::default();
        registry.remember_scroll(640.0);
        assert_eq!(registry.refresh(&layout, 0.0), Some(640.0));
        assert_eq!(registry.refresh(&layout, 640.0), None);
        registry.clear_scroll_memory();
        assert_eq!(registry.refresh(&layout, 0.0), None);
    }
}
