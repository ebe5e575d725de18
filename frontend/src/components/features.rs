use yew::prelude::*;

use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

const FEATURES: [(&str, &str); 6] = [
    (
        "Lightning Fast",
        "Performance-focused software that stays fast as your team and data scale.",
    ),
    (
        "Enterprise Security",
        "Security-first architecture with strong access controls and auditability.",
    ),
    (
        "Global Scale",
        "Designed for reliability, observability, and resilient deployments.",
    ),
    (
        "AI-Assisted",
        "Use AI where it helps: automation, insights, and faster decision-making.",
    ),
    (
        "Zero Trust",
        "Every request is verified. Every action is logged. Built for compliance needs.",
    ),
    (
        "Real-time Analytics",
        "Visibility into performance and usage with actionable reporting.",
    ),
];

#[function_component(Features)]
pub fn features() -> Html {
    let header = use_node_ref();
    let cards = use_node_ref();

    use_scroll_animation(header.clone(), AnimationOptions::new(Archetype::FadeUp));
    use_scroll_animation(
        cards.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.1 }).duration(0.8),
    );

    html! {
        <section class="features" id="features">
            <div class="container">
                <div class="features__header" ref={header}>
                    <span class="features__badge">{"Why AXOBITS"}</span>
                    <h2 class="section-title">{"Built for modern teams"}</h2>
                    <p>
                        {"AXOBITS builds SaaS products that prioritize speed, security, and clarity, so your teams can ship reliably."}
                    </p>
                </div>

                <div class="features__grid" ref={cards}>
                    {
                        FEATURES.iter().map(|(title, description)| html! {
                            <div class="features__card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .features {
                    position: relative;
                    padding: 7rem 0;
                    overflow: hidden;
                }
                .features__header {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .features__header p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .features__badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid var(--line);
                    color: #d1d5db;
                    font-size: 0.875rem;
                }
                .features__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .features__card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                    transition: border-color 0.3s;
                }
                .features__card:hover {
                    border-color: rgba(99, 91, 255, 0.3);
                }
                .features__card h3 {
                    margin: 0 0 0.75rem;
                    font-size: 1.25rem;
                }
                .features__card p {
                    margin: 0;
                    color: var(--muted);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .features__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
