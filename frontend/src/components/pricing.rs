use yew::prelude::*;

use crate::context::modal::use_modal;
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

struct Engagement {
    title: &'static str,
    description: &'static str,
    highlights: [&'static str; 3],
}

const ENGAGEMENTS: [Engagement; 3] = [
    Engagement {
        title: "Product discovery",
        description: "Clarify scope, define success metrics, and map a plan that engineering teams can execute confidently.",
        highlights: ["Requirements + constraints", "Architecture direction", "Milestones and risks"],
    },
    Engagement {
        title: "Build and ship",
        description: "End-to-end delivery of production-grade software with clear milestones and reviewable outputs.",
        highlights: ["Implementation", "Testing and QA", "Deployment readiness"],
    },
    Engagement {
        title: "Long-term partnership",
        description: "Ongoing improvements, performance work, integrations, and platform hardening as your needs evolve.",
        highlights: ["Roadmap execution", "Reliability improvements", "Security and governance"],
    },
];

/// Engagement models. Every card opens the lead modal.
#[function_component(Pricing)]
pub fn pricing() -> Html {
    let header = use_node_ref();
    let cards = use_node_ref();
    let modal = use_modal();

    use_scroll_animation(
        header.clone(),
        AnimationOptions::new(Archetype::FadeUp).duration(0.8).start("top 80%"),
    );
    use_scroll_animation(
        cards.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.15 }).start("top 80%"),
    );

    let open_modal = modal
        .map(|modal| modal.open_callback::<MouseEvent>())
        .unwrap_or_else(Callback::noop);

    html! {
        <section class="pricing" id="pricing">
            <div class="container">
                <div class="pricing__header" ref={header}>
                    <span class="pricing__badge">{"Work with us"}</span>
                    <h2 class="section-title">{"A calm way to build"}</h2>
                    <p>
                        {"AXOBITS PRIVATE LIMITED partners with teams that value reliability and craft. Start with a short conversation and we'll propose a clear plan."}
                    </p>
                </div>

                <div class="pricing__cards" ref={cards}>
                    {
                        ENGAGEMENTS.iter().map(|engagement| html! {
                            <div class="pricing__card">
                                <h3>{engagement.title}</h3>
                                <p>{engagement.description}</p>
                                <ul>
                                    { for engagement.highlights.iter().map(|item| html! { <li>{*item}</li> }) }
                                </ul>
                                <button class="btn-primary" onclick={open_modal.clone()}>
                                    {"Talk to our team →"}
                                </button>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <p class="pricing__note">
                    {"Prefer email? Reach us via the contact form and we'll follow up."}
                </p>
            </div>

            <style>
                {r#"
                .pricing {
                    position: relative;
                    padding: 7rem 0;
                }
                .pricing__header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .pricing__header p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .pricing__badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid var(--line);
                    color: #d1d5db;
                    font-size: 0.875rem;
                }
                .pricing__cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .pricing__card {
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .pricing__card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.25rem;
                }
                .pricing__card p {
                    color: var(--muted);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .pricing__card ul {
                    flex-grow: 1;
                    margin: 0 0 2rem;
                    padding-left: 1.25rem;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    line-height: 2;
                }
                .pricing__card .btn-primary {
                    justify-content: center;
                }
                .pricing__note {
                    margin-top: 3rem;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) {
                    .pricing__cards {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
