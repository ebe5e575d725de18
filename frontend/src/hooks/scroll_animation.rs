//! Section-level hook that attaches scroll-triggered motion once layout is ready.
//!
//! Setup can be requested twice: by the layout-ready broadcast (immediately
//! when it already fired) and by a fallback timer. The binding slot makes the
//! second request a no-op. A component that stays mounted across a route
//! change binds again on the new route's broadcast, replacing the binding the
//! navigation killed. Teardown cancels both and releases the binding.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::config;
use crate::context::smooth_scroll::{use_motion, Motion};
use crate::motion::binding::{AnimationOptions, Archetype, BindingSlot, BindingSpec};
use crate::motion::signal::Subscription;
use crate::motion::trigger::MotionError;

/// Attaches whatever `describe` returns. An empty spec (e.g. the node is not
/// mounted yet) binds nothing and leaves the slot free for the next attempt.
#[hook]
pub fn use_motion_binding<F>(describe: F)
where
    F: Fn(&Motion) -> Result<BindingSpec, MotionError> + 'static,
{
    let motion = use_motion();
    let slot = use_mut_ref(BindingSlot::new);

    use_effect_with_deps(
        move |_| {
            let mut guards: Option<(Subscription, Timeout)> = None;
            if let Some(motion) = motion {
                let signal = motion.layout_signal();
                let setup = {
                    let slot = slot.clone();
                    Rc::new(move || {
                        let generation = motion.generation();
                        slot.borrow_mut().acquire_with(generation, || match describe(&motion) {
                            Ok(spec) if spec.is_empty() => None,
                            Ok(spec) => Some(motion.bind(spec)),
                            Err(err) => {
                                warn!("animation skipped: {}", err);
                                None
                            }
                        });
                    })
                };

                // Runs right away when the page is already laid out.
                let subscription = {
                    let setup = setup.clone();
                    signal.subscribe(move || setup())
                };
                let fallback = Timeout::new(config::timings().binding_fallback_ms, move || {
                    debug!("layout-ready not seen, binding from fallback");
                    setup()
                });
                guards = Some((subscription, fallback));
            }

            move || {
                // Dropping the timeout cancels it.
                drop(guards);
                slot.borrow_mut().release();
            }
        },
        (),
    );
}

/// One archetype on one node; `Stagger` animates the node's children.
#[hook]
pub fn use_scroll_animation(node: NodeRef, options: AnimationOptions) {
    use_motion_binding(move |motion| {
        let Some(id) = motion.register(&node) else {
            return Ok(BindingSpec::default());
        };
        let children = match options.archetype {
            Archetype::Stagger { .. } => motion.register_children(&node),
            _ => Vec::new(),
        };
        options.build(id, &children).map_err(move |err| {
            let mut ids = children;
            ids.push(id);
            motion.forget(&ids);
            err
        })
    });
}
