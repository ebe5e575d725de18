use yew::prelude::*;

use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

const FOUNDATIONS: [(&str, &str); 4] = [
    (
        "Security-first by default",
        "Practical controls for access, encryption, and auditability, built into the product architecture.",
    ),
    (
        "Engineered for scale",
        "Built to stay reliable as data grows, teams expand, and workloads become more complex.",
    ),
    (
        "Operationally mature",
        "Observability, incident readiness, and maintainability are treated as core features.",
    ),
    (
        "Enterprise-ready foundations",
        "Designed for real-world constraints: compliance, governance, and long-term support.",
    ),
];

#[function_component(Stats)]
pub fn stats() -> Html {
    let backdrop = use_node_ref();
    let header = use_node_ref();
    let cards = use_node_ref();

    use_scroll_animation(
        backdrop.clone(),
        AnimationOptions::new(Archetype::Parallax { speed: 0.15 }),
    );
    use_scroll_animation(header.clone(), AnimationOptions::new(Archetype::Fade));
    use_scroll_animation(
        cards.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.1 }).start("top 80%"),
    );

    html! {
        <section class="stats">
            <div class="stats__backdrop" ref={backdrop}></div>
            <div class="container stats__inner">
                <div class="stats__header" ref={header}>
                    <h2 class="section-title">{"Foundations that hold up"}</h2>
                    <p>
                        {"AXOBITS focuses on the unglamorous details that make software dependable: security, reliability, and engineering discipline."}
                    </p>
                </div>
                <div class="stats__grid" ref={cards}>
                    {
                        FOUNDATIONS.iter().map(|(title, description)| html! {
                            <div class="stats__card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <p class="stats__note">
                    {"Prefer a conversation over a sales pitch? Talk to the AXOBITS team."}
                </p>
            </div>

            <style>
                {r#"
                .stats {
                    position: relative;
                    padding: 8rem 0;
                    overflow: hidden;
                }
                .stats__backdrop {
                    position: absolute;
                    inset: 0 0 -30% 0;
                    background: linear-gradient(180deg, #0b0b10, var(--bg));
                }
                .stats__inner {
                    position: relative;
                }
                .stats__header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .stats__header p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .stats__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .stats__card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.02);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .stats__card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.125rem;
                }
                .stats__card p {
                    margin: 0;
                    color: var(--muted);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .stats__note {
                    margin-top: 4rem;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) {
                    .stats__grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
