use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions, Element, WheelEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::motion::binding::{BindingHandle, BindingSpec};
use crate::motion::dom::{self, DomNodes, ScrollTarget};
use crate::motion::inertia::{ScrollOptions, ScrollToOptions};
use crate::motion::layout::{Layout, NodeId};
use crate::motion::runtime::MotionRuntime;
use crate::motion::signal::Signal;
use crate::motion::ticker::Ticker;

/// Handle to the page's motion runtime, shared through context.
#[derive(Clone)]
pub struct Motion {
    runtime: Rc<RefCell<MotionRuntime>>,
    nodes: Rc<DomNodes>,
    ticker: Ticker,
    /// Last position written to the window, to skip redundant writes.
    applied: Rc<Cell<f64>>,
    ready: bool,
}

impl PartialEq for Motion {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.runtime, &other.runtime) && self.ready == other.ready
    }
}

impl Motion {
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn ticker(&self) -> Ticker {
        self.ticker.clone()
    }

    pub fn engine_signal(&self) -> Signal {
        self.runtime.borrow().engine_signal()
    }

    pub fn layout_signal(&self) -> Signal {
        self.runtime.borrow().layout_signal()
    }

    pub fn generation(&self) -> u64 {
        self.runtime.borrow().generation()
    }

    fn set_window_scroll(&self, position: f64) {
        self.applied.set(position);
        dom::set_window_scroll(position);
    }

    pub fn scroll_to(&self, target: ScrollTarget, opts: ScrollToOptions) {
        let Some(position) = self.nodes.resolve(&target) else {
            debug!("scroll target {:?} not found", target);
            return;
        };
        let landed = self.runtime.borrow_mut().scroll_to(position, opts);
        if let Some(landed) = landed {
            self.set_window_scroll(landed);
        }
    }

    /// Route-change teardown. Safe to call on every render: repeated calls for
    /// the same path do nothing.
    pub fn navigate(&self, path: &str) {
        let navigation = self
            .runtime
            .borrow_mut()
            .navigate(path, dom::now(), &*self.nodes);
        if let Some(navigation) = navigation {
            info!("route {} (session {})", path, navigation.generation);
            self.nodes.revert(&navigation.reverts);
            self.set_window_scroll(navigation.scroll);
        }
    }

    pub fn register(&self, node: &NodeRef) -> Option<NodeId> {
        node.cast::<Element>()
            .map(|element| self.nodes.register(element))
    }

    pub fn register_children(&self, node: &NodeRef) -> Vec<NodeId> {
        let Some(element) = node.cast::<Element>() else {
            return Vec::new();
        };
        let children = element.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .map(|child| self.nodes.register(child))
            .collect()
    }

    /// Drops registered nodes that ended up in no binding.
    pub fn forget(&self, ids: &[NodeId]) {
        self.nodes.revert(ids);
    }

    /// Attaches `spec` and renders its start state immediately.
    pub fn bind(&self, spec: BindingSpec) -> BindingHandle {
        let (handle, writes, reverts) = {
            let mut runtime = self.runtime.borrow_mut();
            let handle = runtime.bind(spec, &*self.nodes);
            let (writes, reverts) = runtime.flush();
            (handle, writes, reverts)
        };
        self.nodes.revert(&reverts);
        self.nodes.apply(&writes);
        handle
    }

    /// Suspends wheel smoothing, e.g. while a modal is open.
    pub fn stop(&self) {
        self.runtime.borrow_mut().engine_mut().stop();
    }

    pub fn start(&self) {
        self.runtime.borrow_mut().engine_mut().start();
    }
}

#[hook]
pub fn use_motion() -> Option<Motion> {
    use_context::<Motion>()
}

#[derive(Properties, PartialEq)]
pub struct SmoothScrollProps {
    pub children: Children,
}

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(frame_loop: &FrameLoop, handle: &Cell<Option<i32>>) {
    let Some(window) = window() else {
        return;
    };
    if let Some(callback) = frame_loop.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            handle.set(Some(id));
        }
    }
}

#[function_component(SmoothScrollProvider)]
pub fn smooth_scroll_provider(props: &SmoothScrollProps) -> Html {
    let runtime = use_mut_ref(|| MotionRuntime::new(ScrollOptions::default(), config::timings()));
    let nodes = use_memo(|_| DomNodes::new(), ());
    let ticker = use_memo(|_| Ticker::new(), ());
    let applied = use_memo(|_| Cell::new(0.0_f64), ());
    let ready = use_state(|| false);

    let motion = Motion {
        runtime: runtime.clone(),
        nodes: nodes.clone(),
        ticker: (*ticker).clone(),
        applied: applied.clone(),
        ready: *ready,
    };

    {
        let motion = motion.clone();
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                info!("smooth scroll engine starting");
                let ticker = motion.ticker();
                ticker.set_lag_smoothing(None);

                let frame_handle = {
                    let motion = motion.clone();
                    ticker.add(move |time| {
                        let frame = motion
                            .runtime
                            .borrow_mut()
                            .frame(time, &*motion.nodes);
                        motion.nodes.revert(&frame.reverts);
                        motion.nodes.apply(&frame.writes);
                        if frame.scroll != motion.applied.get() {
                            motion.set_window_scroll(frame.scroll);
                        }
                        if frame.engine_ready {
                            ready.set(true);
                        }
                        // Listeners bind, so fire with the runtime released.
                        frame.fire(&motion.engine_signal(), &motion.layout_signal());
                    })
                };

                let frame_loop: FrameLoop = Rc::new(RefCell::new(None));
                let raf_id = Rc::new(Cell::new(None));
                {
                    let ticker = ticker.clone();
                    let frame_loop_inner = frame_loop.clone();
                    let raf_id = raf_id.clone();
                    *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        ticker.tick(now);
                        request_frame(&frame_loop_inner, &raf_id);
                    }) as Box<dyn FnMut(f64)>));
                }
                request_frame(&frame_loop, &raf_id);

                let wheel = {
                    let motion = motion.clone();
                    Closure::wrap(Box::new(move |e: WheelEvent| {
                        let viewport = motion.nodes.viewport();
                        let height = motion.nodes.document_height();
                        let mut runtime = motion.runtime.borrow_mut();
                        // Content may have grown since the last measurement.
                        runtime.engine_mut().resize(height, viewport.height);
                        if runtime.engine_mut().wheel(e.delta_y()) {
                            e.prevent_default();
                        }
                    }) as Box<dyn FnMut(WheelEvent)>)
                };
                if let Some(window) = window() {
                    let options = AddEventListenerOptions::new();
                    options.set_passive(false);
                    if let Err(err) = window
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "wheel",
                            wheel.as_ref().unchecked_ref(),
                            &options,
                        )
                    {
                        warn!("failed to attach wheel listener: {:?}", err);
                    }
                }

                move || {
                    if let Some(window) = window() {
                        if let Some(id) = raf_id.get() {
                            if let Err(err) = window.cancel_animation_frame(id) {
                                warn!("failed to cancel animation frame: {:?}", err);
                            }
                        }
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "wheel",
                            wheel.as_ref().unchecked_ref(),
                        ) {
                            warn!("failed to detach wheel listener: {:?}", err);
                        }
                    }
                    frame_loop.borrow_mut().take();
                    drop(frame_handle);
                    let reverts = motion.runtime.borrow_mut().teardown();
                    motion.nodes.revert(&reverts);
                    info!("smooth scroll engine disposed");
                }
            },
            (),
        );
    }

    {
        // Scrollbar and keyboard scrolling bypass the engine.
        let motion = motion.clone();
        use_event_with_window("scroll", move |_: Event| {
            let position = dom::window_scroll();
            if (position - motion.applied.get()).abs() < 0.5 {
                return;
            }
            let mut runtime = motion.runtime.borrow_mut();
            if !runtime.engine().is_scrolling() {
                runtime.engine_mut().sync_native(position);
                motion.applied.set(position);
            }
        });
    }

    {
        let motion = motion.clone();
        use_event_with_window("resize", move |_: Event| {
            let viewport = motion.nodes.viewport();
            let height = motion.nodes.document_height();
            motion
                .runtime
                .borrow_mut()
                .engine_mut()
                .resize(height, viewport.height);
        });
    }

    html! {
        <ContextProvider<Motion> context={motion}>
            { for props.children.iter() }
        </ContextProvider<Motion>>
    }
}
