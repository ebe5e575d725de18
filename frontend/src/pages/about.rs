use yew::prelude::*;

use crate::components::reveal_text::RevealText;
use crate::context::modal::use_modal;
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

const VALUES: [(&str, &str); 4] = [
    (
        "Practical engineering",
        "We choose simple approaches that work in production and are easy to maintain.",
    ),
    (
        "Clear communication",
        "We share progress early, document decisions, and keep stakeholders aligned.",
    ),
    (
        "Security by default",
        "We build with safe defaults, least privilege, and reviewable systems.",
    ),
    (
        "Long-term thinking",
        "We optimize for reliability, clarity, and sustainable delivery.",
    ),
];

const TEAM: [(&str, &str); 4] = [
    ("AXOBITS Leadership", "Product & Delivery"),
    ("AXOBITS Engineering", "Architecture & Systems"),
    ("AXOBITS Product", "Discovery & UX"),
    ("AXOBITS Security", "Security & Governance"),
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let modal = use_modal();
    let story = use_node_ref();
    let values = use_node_ref();
    let team = use_node_ref();

    use_scroll_animation(story.clone(), AnimationOptions::new(Archetype::FadeRight));
    use_scroll_animation(
        values.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.1 }),
    );
    use_scroll_animation(
        team.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.12 }),
    );

    let open_modal = modal
        .map(|modal| modal.open_callback::<MouseEvent>())
        .unwrap_or_else(Callback::noop);

    html! {
        <div class="about">
            <section class="container about__hero">
                <RevealText text="Delivery-first software partners" class="section-title" />
                <p>
                    {"AXOBITS PRIVATE LIMITED partners with teams to design, build, and ship reliable software, with clear milestones and production-ready delivery."}
                </p>
            </section>

            <section class="container about__story" ref={story}>
                <h2>{"Build, ship, and maintain serious software"}</h2>
                <p>{"AXOBITS PRIVATE LIMITED helps teams turn ideas into dependable systems with clean architecture, thoughtful UX, and disciplined execution."}</p>
                <p>{"We focus on foundations: security, performance, maintainability, and operational readiness."}</p>
                <p>{"The result is software that teams can ship confidently and run without surprises."}</p>
            </section>

            <section class="container">
                <h2 class="about__heading">{"What Drives Us"}</h2>
                <div class="about__grid" ref={values}>
                    {
                        VALUES.iter().map(|(title, description)| html! {
                            <div class="about__card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="container">
                <h2 class="about__heading">{"Meet Our Leaders"}</h2>
                <div class="about__grid" ref={team}>
                    {
                        TEAM.iter().map(|(name, role)| html! {
                            <div class="about__card">
                                <h3>{*name}</h3>
                                <p>{*role}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="container about__cta">
                <h2>{"Want to work with AXOBITS?"}</h2>
                <p>{"Share your goals and constraints, and we'll respond with a clear approach and next steps."}</p>
                <button class="btn-primary" onclick={open_modal}>{"Talk to our team"}</button>
            </section>

            <style>
                {r#"
                .about {
                    padding: 10rem 0 4rem;
                }
                .about__hero {
                    text-align: center;
                    margin-bottom: 6rem;
                }
                .about__hero p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .about__story {
                    max-width: 48rem;
                    margin-bottom: 6rem;
                }
                .about__story p {
                    color: var(--muted);
                    line-height: 1.8;
                }
                .about__heading {
                    margin: 0 0 2rem;
                    font-size: 2rem;
                }
                .about__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 6rem;
                }
                .about__card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                }
                .about__card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.125rem;
                }
                .about__card p {
                    margin: 0;
                    color: var(--muted);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .about__cta {
                    text-align: center;
                    padding: 4rem 1.5rem;
                }
                .about__cta p {
                    color: var(--muted);
                    margin-bottom: 2rem;
                }
                @media (max-width: 1024px) {
                    .about__grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
