//! The page-wide motion runtime.
//!
//! One [`MotionRuntime`] lives in the smooth-scroll provider. It owns the
//! scroll engine, the trigger registry and the readiness session, and is
//! driven from two places only: [`MotionRuntime::navigate`] on a route change
//! and [`MotionRuntime::frame`] once per animation frame. Neither fires a
//! signal itself; the caller fires them after releasing its borrow so that
//! listeners are free to bind.

use crate::config::Timings;

use super::binding::{BindingHandle, BindingSpec, ReleaseQueue};
use super::inertia::{InertialScroll, ScrollOptions, ScrollToOptions};
use super::layout::{Layout, NodeId, StyleWrite};
use super::session::{Phase, ScrollSession, SessionEvent};
use super::signal::Signal;
use super::ticker::FrameTime;
use super::trigger::TriggerRegistry;

/// What the caller must apply after a navigation.
#[derive(Debug, Default, PartialEq)]
pub struct Navigation {
    pub generation: u64,
    /// Window scroll position to force, always the top of the page.
    pub scroll: f64,
    /// Nodes whose authored style must be restored.
    pub reverts: Vec<NodeId>,
}

/// What the caller must apply after a frame.
#[derive(Debug, Default, PartialEq)]
pub struct Frame {
    pub scroll: f64,
    pub writes: Vec<StyleWrite>,
    pub reverts: Vec<NodeId>,
    /// Set on the first frame after mount.
    pub engine_ready: bool,
    /// Generation that just became ready, if any.
    pub layout_ready: Option<u64>,
    /// The registry asked for the page to be put back at this position.
    pub restore_scroll: Option<f64>,
}

impl Frame {
    /// Fires the readiness signals this frame produced.
    pub fn fire(&self, engine: &Signal, layout: &Signal) {
        if self.engine_ready {
            engine.fire();
        }
        if self.layout_ready.is_some() {
            layout.fire();
        }
    }
}

pub struct MotionRuntime {
    engine: InertialScroll,
    registry: TriggerRegistry,
    session: ScrollSession,
    engine_signal: Signal,
    layout_signal: Signal,
    released: ReleaseQueue,
    engine_ready: bool,
}

impl MotionRuntime {
    pub fn new(options: ScrollOptions, timings: Timings) -> Self {
        Self {
            engine: InertialScroll::new(options),
            registry: TriggerRegistry::new(),
            session: ScrollSession::new(timings),
            engine_signal: Signal::new("engine-ready"),
            layout_signal: Signal::new("layout-ready"),
            released: ReleaseQueue::default(),
            engine_ready: false,
        }
    }

    pub fn engine(&self) -> &InertialScroll {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut InertialScroll {
        &mut self.engine
    }

    pub fn session(&self) -> &ScrollSession {
        &self.session
    }

    pub fn engine_signal(&self) -> Signal {
        self.engine_signal.clone()
    }

    pub fn layout_signal(&self) -> Signal {
        self.layout_signal.clone()
    }

    pub fn is_engine_ready(&self) -> bool {
        self.engine_ready
    }

    pub fn is_layout_ready(&self) -> bool {
        self.session.is_layout_ready()
    }

    /// Current scroll session; bindings made now are stamped with it.
    pub fn generation(&self) -> u64 {
        self.session.generation()
    }

    /// Live trigger count, after applying pending releases.
    pub fn trigger_count(&mut self) -> usize {
        self.drain_released();
        self.registry.len()
    }

    fn drain_released(&mut self) -> Vec<NodeId> {
        let released: Vec<_> = self.released.borrow_mut().drain(..).collect();
        let mut nodes: Vec<NodeId> = released
            .into_iter()
            .flat_map(|id| self.registry.kill(id))
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }

    /// Tears down the previous route and starts a session for `route`.
    /// Returns `None` when `route` is already the current route.
    pub fn navigate(&mut self, route: &str, now: f64, layout: &dyn Layout) -> Option<Navigation> {
        if self.session.generation() > 0
            && self.session.route() == route
            && self.session.phase() != Phase::Resetting
        {
            return None;
        }

        let generation = self.session.begin(route, now);
        self.layout_signal.reset();

        let mut reverts = self.drain_released();
        reverts.extend(self.registry.kill_all());
        reverts.sort_unstable();
        reverts.dedup();

        let scroll = self
            .engine
            .scroll_to(0.0, ScrollToOptions::immediate())
            .unwrap_or(0.0);
        let viewport = layout.viewport();
        self.engine.resize(layout.document_height(), viewport.height);
        self.registry.clear_scroll_memory();

        Some(Navigation {
            generation,
            scroll,
            reverts,
        })
    }

    /// Creates every trigger in `spec` against the current layout and scroll.
    pub fn bind(&mut self, spec: BindingSpec, layout: &dyn Layout) -> BindingHandle {
        let scroll = self.engine.position();
        let ids = spec
            .parts
            .into_iter()
            .map(|(trigger, timeline)| self.registry.create(trigger, timeline, layout, scroll))
            .collect();
        BindingHandle::new(ids, self.session.generation(), &self.released)
    }

    /// Style writes pending outside of a frame (new bindings render their
    /// start state straight away).
    pub fn flush(&mut self) -> (Vec<StyleWrite>, Vec<NodeId>) {
        let reverts = self.drain_released();
        (self.registry.render(), reverts)
    }

    pub fn scroll_to(&mut self, position: f64, opts: ScrollToOptions) -> Option<f64> {
        self.engine.scroll_to(position, opts)
    }

    pub fn frame(&mut self, time: FrameTime, layout: &dyn Layout) -> Frame {
        let mut frame = Frame {
            reverts: self.drain_released(),
            ..Frame::default()
        };
        if self.engine.is_destroyed() {
            frame.scroll = self.engine.position();
            return frame;
        }

        let mut scroll = self.engine.raf(time.now);

        if !self.engine_ready {
            self.engine_ready = true;
            frame.engine_ready = true;
            let viewport = layout.viewport();
            self.engine.resize(layout.document_height(), viewport.height);
            self.session.engine_ready(time.now);
        }

        for event in self.session.tick(time.now) {
            match event {
                SessionEvent::LayoutReady { generation, .. } => {
                    frame.layout_ready = Some(generation);
                }
                SessionEvent::Refresh => {
                    let restore = self.registry.refresh(layout, scroll);
                    let viewport = layout.viewport();
                    self.engine.resize(layout.document_height(), viewport.height);
                    // Memory is stale while a glide is in flight.
                    let idle = !self.engine.is_scrolling();
                    if let Some(position) = restore.filter(|_| idle) {
                        if let Some(landed) =
                            self.engine.scroll_to(position, ScrollToOptions::immediate())
                        {
                            scroll = landed;
                            frame.restore_scroll = Some(landed);
                        }
                    }
                }
            }
        }

        self.registry.update(scroll);
        self.registry.advance(time.delta / 1_000.0, scroll);
        frame.writes = self.registry.render();
        if !self.engine.is_scrolling() {
            self.registry.remember_scroll(scroll);
        }
        frame.scroll = scroll;
        frame
    }

    /// Provider unmount: disposes the engine, drops every trigger and clears
    /// readiness so a remount starts over.
    pub fn teardown(&mut self) -> Vec<NodeId> {
        self.engine.destroy();
        self.engine_ready = false;
        self.engine_signal.reset();
        self.layout_signal.reset();
        self.session.engine_lost();
        let mut nodes = self.drain_released();
        nodes.extend(self.registry.kill_all());
        nodes
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::motion::binding::{AnimationOptions, Archetype, BindingSlot};
    use crate::motion::layout::fake::FakeLayout;
    use pretty_assertions::assert_eq;

    fn layout() -> FakeLayout {
        FakeLayout::default()
            .with_node(1, 200.0, 400.0)
            .with_node(2, 1_400.0, 400.0)
            .with_node(3, 2_600.0, 400.0)
    }

    fn section(node: NodeId) -> BindingSpec {
        AnimationOptions::new(Archetype::FadeUp)
            .build(node, &[])
            .unwrap()
    }

    /// Runs a frame every 16ms in `[from, to]`, firing signals like the provider does.
    fn run(runtime: &mut MotionRuntime, layout: &FakeLayout, from: f64, to: f64) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut now = from;
        while now <= to {
            let frame = runtime.frame(FrameTime { now, delta: 16.0 }, layout);
            frame.fire(&runtime.engine_signal(), &runtime.layout_signal());
            frames.push(frame);
            now += 16.0;
        }
        frames
    }

    #[test]
    fn test_first_frame_reports_engine_ready_once() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        runtime.navigate("/", 0.0, &layout);
        let frames = run(&mut runtime, &layout, 0.0, 500.0);
        assert_eq!(frames.iter().filter(|f| f.engine_ready).count(), 1);
        assert_eq!(frames.iter().filter(|f| f.layout_ready.is_some()).count(), 1);
        assert!(runtime.engine_signal().is_fired());
        assert!(runtime.layout_signal().is_fired());
    }

    #[test]
    fn test_navigation_resets_scroll_and_triggers() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        runtime.navigate("/", 0.0, &layout);
        run(&mut runtime, &layout, 0.0, 300.0);

        let _first = runtime.bind(section(1), &layout);
        let _second = runtime.bind(section(2), &layout);
        runtime.scroll_to(1_200.0, ScrollToOptions::immediate());
        assert_eq!(runtime.trigger_count(), 2);

        let navigation = runtime.navigate("/about", 400.0, &layout).unwrap();
        assert_eq!(navigation.scroll, 0.0);
        assert_eq!(navigation.reverts, vec![1, 2]);
        assert_eq!(runtime.engine().position(), 0.0);
        assert_eq!(runtime.trigger_count(), 0);
        assert!(!runtime.is_layout_ready());
        assert!(!runtime.layout_signal().is_fired());
    }

    #[test]
    fn test_navigating_away_and_back_leaves_one_set() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());

        runtime.navigate("/", 0.0, &layout);
        let home = vec![
            runtime.bind(section(1), &layout),
            runtime.bind(section(2), &layout),
        ];

        runtime.navigate("/products", 100.0, &layout);
        // Home sections unmount after the navigation already killed their triggers.
        drop(home);
        let products = runtime.bind(section(3), &layout);
        assert_eq!(runtime.trigger_count(), 1);

        runtime.navigate("/", 200.0, &layout);
        drop(products);
        let _home = vec![
            runtime.bind(section(1), &layout),
            runtime.bind(section(2), &layout),
        ];
        assert_eq!(runtime.trigger_count(), 2);
    }

    #[test]
    fn test_same_route_is_a_noop() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        runtime.navigate("/", 0.0, &layout);
        let _handle = runtime.bind(section(1), &layout);
        assert!(runtime.navigate("/", 50.0, &layout).is_none());
        assert_eq!(runtime.trigger_count(), 1);
        assert_eq!(runtime.session().generation(), 1);
    }

    #[test]
    fn test_dropped_handle_reverts_its_nodes() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        runtime.navigate("/", 0.0, &layout);
        let handle = runtime.bind(section(2), &layout);
        drop(handle);
        let frame = runtime.frame(FrameTime { now: 0.0, delta: 0.0 }, &layout);
        assert_eq!(frame.reverts, vec![2]);
        assert_eq!(runtime.trigger_count(), 0);
    }

    #[test]
    fn test_double_setup_binds_once() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        runtime.navigate("/", 0.0, &layout);

        let mut slot = BindingSlot::new();
        // Readiness broadcast and fallback timer both try to set up.
        let generation = runtime.generation();
        slot.acquire_with(generation, || Some(runtime.bind(section(1), &layout)));
        slot.acquire_with(generation, || Some(runtime.bind(section(1), &layout)));
        assert_eq!(runtime.trigger_count(), 1);

        slot.release();
        assert_eq!(runtime.trigger_count(), 0);
    }

    #[test]
    fn test_mounted_section_rebinds_on_next_route() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        let mut slot = BindingSlot::new();

        // The same section instance stays mounted across both product pages.
        runtime.navigate("/products/a", 0.0, &layout);
        run(&mut runtime, &layout, 0.0, 1_500.0);
        let generation = runtime.generation();
        assert!(slot.acquire_with(generation, || Some(runtime.bind(section(1), &layout))));
        assert_eq!(runtime.trigger_count(), 1);

        runtime.navigate("/products/b", 1_520.0, &layout);
        assert_eq!(runtime.trigger_count(), 0);
        run(&mut runtime, &layout, 1_536.0, 3_000.0);
        assert!(runtime.is_layout_ready());

        let generation = runtime.generation();
        assert!(slot.acquire_with(generation, || Some(runtime.bind(section(1), &layout))));
        assert_eq!(runtime.trigger_count(), 1);
        assert_eq!(runtime.generation(), 2);
    }

    #[test]
    fn test_new_binding_renders_start_state() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        runtime.navigate("/", 0.0, &layout);
        let _handle = runtime.bind(section(3), &layout);
        let (writes, _) = runtime.flush();
        assert_eq!(
            writes,
            vec![StyleWrite {
                node: 3,
                css: "opacity: 0; transform: translate3d(0px, 60px, 0px);".to_string()
            }]
        );
    }

    #[test]
    fn test_rapid_navigation_single_broadcast() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let _subscription = runtime
            .layout_signal()
            .subscribe(move || counter.set(counter.get() + 1));

        runtime.navigate("/", 0.0, &layout);
        run(&mut runtime, &layout, 0.0, 48.0);
        runtime.navigate("/about", 50.0, &layout);
        run(&mut runtime, &layout, 64.0, 96.0);
        runtime.navigate("/", 100.0, &layout);
        run(&mut runtime, &layout, 112.0, 1_000.0);

        assert_eq!(fired.get(), 1);
        assert_eq!(runtime.session().route(), "/");
        assert!(runtime.is_layout_ready());
    }

    #[test]
    fn test_teardown_resets_readiness() {
        let layout = layout();
        let mut runtime = MotionRuntime::new(ScrollOptions::default(), Timings::default());
        runtime.navigate("/", 0.0, &layout);
        run(&mut runtime, &layout, 0.0, 300.0);
        let _handle = runtime.bind(section(1), &layout);

        assert_eq!(runtime.teardown(), vec![1]);
        assert!(!runtime.is_engine_ready());
        assert!(!runtime.engine_signal().is_fired());
        assert!(runtime.engine().is_destroyed());
    }
}
