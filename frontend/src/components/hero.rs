use yew::prelude::*;

use crate::components::reveal_text::RevealText;
use crate::context::smooth_scroll::use_motion;
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};
use crate::motion::dom::ScrollTarget;
use crate::motion::inertia::ScrollToOptions;

const CONSOLE_CARDS: [(&str, &str); 3] = [
    ("Data Assist", "Secure query routed to warehouse"),
    ("Cost Insights", "Budgets, renewals, and vendor usage"),
    ("Onboarding", "Guided experiences for product adoption"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let motion = use_motion();
    let subline = use_node_ref();
    let drift = use_node_ref();
    let console = use_node_ref();

    use_scroll_animation(
        subline.clone(),
        AnimationOptions::new(Archetype::FadeUp).delay(0.3).duration(0.6),
    );
    use_scroll_animation(
        console.clone(),
        AnimationOptions::new(Archetype::Scale).delay(0.5),
    );
    use_scroll_animation(
        drift.clone(),
        AnimationOptions::new(Archetype::Parallax { speed: 0.1 }),
    );

    let scroll_down = Callback::from(move |_: MouseEvent| {
        if let Some(motion) = &motion {
            motion.scroll_to(
                ScrollTarget::Selector("#features".to_string()),
                ScrollToOptions {
                    duration_ms: Some(1_500.0),
                    ..ScrollToOptions::default()
                },
            );
        }
    });

    html! {
        <section class="hero">
            <div class="hero__grid"></div>
            <div class="container hero__content">
                <RevealText text="Software done right." class="hero__headline" />
                <p class="hero__subline" ref={subline}>
                    {"Thoughtfully designed SaaS and AI products for teams that care about quality."}
                </p>

                <div class="hero__drift" ref={drift}>
                    <div class="hero__console" ref={console}>
                        <div class="hero__console-bar">
                            <span>{"Axobits Console: connect systems"}</span>
                            <span class="hero__spark">{"✦"}</span>
                        </div>
                        {
                            CONSOLE_CARDS.iter().map(|(title, caption)| html! {
                                <div class="hero__card">
                                    <div class="hero__card-title">{*title}</div>
                                    <div class="hero__card-caption">{*caption}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <button class="hero__scroll" onclick={scroll_down}>
                <span>{"Scroll"}</span>
                <span>{"↓"}</span>
            </button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 110vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 15rem 0 5rem;
                    overflow: hidden;
                    background: radial-gradient(ellipse at top, rgba(99, 91, 255, 0.18), transparent 60%);
                }
                .hero__grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.05;
                    background-image:
                        linear-gradient(rgba(255,255,255,0.1) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255,255,255,0.1) 1px, transparent 1px);
                    background-size: 100px 100px;
                    pointer-events: none;
                }
                .hero__content {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .hero__headline {
                    font-size: clamp(2.5rem, 7vw, 4.5rem);
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    margin: 0 0 1.5rem;
                    padding: 1rem 0;
                    overflow: hidden;
                }
                .hero__subline {
                    max-width: 42rem;
                    margin: 0 auto 3.5rem;
                    color: var(--muted);
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .hero__drift {
                    width: 100%;
                    max-width: 420px;
                }
                .hero__console {
                    padding: 1rem;
                    border-radius: 2rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                    box-shadow: 0 0 60px -20px rgba(99, 91, 255, 0.5);
                }
                .hero__console-bar {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.25rem;
                    margin-bottom: 1.5rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.875rem;
                    color: #d1d5db;
                }
                .hero__spark {
                    color: var(--brand-soft);
                }
                .hero__card {
                    padding: 1rem;
                    margin-top: 0.75rem;
                    border-radius: 1rem;
                    background: #10131a;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    text-align: left;
                }
                .hero__card-title {
                    font-weight: 600;
                    font-size: 1.125rem;
                }
                .hero__card-caption {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .hero__scroll {
                    position: absolute;
                    bottom: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: #6b7280;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                    animation: hero-bounce 1.5s ease-in-out infinite alternate;
                }
                .hero__scroll:hover {
                    color: #ffffff;
                }
                @keyframes hero-bounce {
                    from { transform: translateY(0); }
                    to { transform: translateY(10px); }
                }
                "#}
            </style>
        </section>
    }
}
