use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::context::smooth_scroll::use_motion;
use crate::motion::follow::PointerFollower;

fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Soft glow trailing the pointer, stepped by the shared ticker.
#[function_component(CursorGlow)]
pub fn cursor_glow() -> Html {
    let glow = use_node_ref();
    let motion = use_motion();
    let follower = use_mut_ref(|| {
        let (width, height) = viewport_size();
        PointerFollower::new(width, height, config::timings().cursor_idle_ms)
    });

    {
        let follower = follower.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let now = crate::motion::dom::now();
            follower
                .borrow_mut()
                .pointer_moved(e.client_x() as f64, e.client_y() as f64, now);
        });
    }

    {
        let glow = glow.clone();
        use_effect_with_deps(
            move |_| {
                let handle = motion.map(|motion| {
                    motion.ticker().add(move |time| {
                        let frame = follower.borrow_mut().step(time.now);
                        if let Some(element) = glow.cast::<Element>() {
                            let _ = element.set_attribute("style", &frame.css());
                        }
                    })
                });
                move || drop(handle)
            },
            (),
        );
    }

    html! {
        <>
            <div class="cursor-glow" ref={glow}></div>
            <style>
                {r#"
                .cursor-glow {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 600px;
                    height: 600px;
                    border-radius: 50%;
                    pointer-events: none;
                    z-index: 0;
                    opacity: 0;
                    transition: opacity 0.5s;
                    will-change: transform, opacity;
                    background: radial-gradient(circle, rgba(99, 91, 255, 0.10) 0%, rgba(99, 91, 255, 0) 60%);
                }
                "#}
            </style>
        </>
    }
}
