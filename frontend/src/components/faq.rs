use yew::prelude::*;

use crate::context::modal::use_modal;
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

const QUESTIONS: [(&str, &str); 6] = [
    (
        "What does AXOBITS PRIVATE LIMITED do?",
        "AXOBITS PRIVATE LIMITED builds SaaS products and internal platforms for modern teams. We focus on reliable, secure, and maintainable software, using AI where it adds real leverage without adding risk.",
    ),
    (
        "What kind of projects do you take on?",
        "We build and ship production-grade software: SaaS products, enterprise integrations, automation systems, analytics layers, and AI-assisted workflows. If it needs to be dependable and scalable, it fits.",
    ),
    (
        "How do you handle security and data privacy?",
        "We design for least-privilege access, encryption, auditability, and clear data boundaries. We align implementation choices with your requirements and work within your security posture and compliance constraints.",
    ),
    (
        "Do you support integrations with existing tools?",
        "Yes. We integrate with common stacks like AWS/Azure/GCP, PostgreSQL/MySQL, Slack, Microsoft 365, Google Workspace, and internal APIs. We keep integrations robust with proper monitoring and failure handling.",
    ),
    (
        "How do we start working together?",
        "Start with a short call to understand your goals and constraints. Then we propose a scoped plan (timeline, deliverables, and success criteria). If it's a fit, we execute with weekly progress and clear accountability.",
    ),
    (
        "What does delivery look like?",
        "We work in milestones with clear acceptance criteria. You get predictable communication, reviewable outputs, and software that's ready for production environments.",
    ),
];

/// At most one item open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Default for Accordion {
    /// The first item starts open.
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, or closes it when it is already open.
    pub fn toggle(self, index: usize) -> Self {
        Self {
            open: if self.is_open(index) { None } else { Some(index) },
        }
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let header = use_node_ref();
    let items = use_node_ref();
    let accordion = use_state(Accordion::default);
    let modal = use_modal();

    use_scroll_animation(header.clone(), AnimationOptions::new(Archetype::FadeUp));
    use_scroll_animation(
        items.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.08 }).duration(0.6),
    );

    let open_modal = modal
        .map(|modal| modal.open_callback::<MouseEvent>())
        .unwrap_or_else(Callback::noop);

    html! {
        <section class="faq" id="faq">
            <div class="container faq__inner">
                <div class="faq__header" ref={header}>
                    <h2 class="section-title">{"Frequently asked questions"}</h2>
                    <p>{"Quick answers about AXOBITS and how we build."}</p>
                </div>

                <div class="faq__items" ref={items}>
                    {
                        QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                            let onclick = {
                                let accordion = accordion.clone();
                                Callback::from(move |_: MouseEvent| accordion.set(accordion.toggle(index)))
                            };
                            let open = accordion.is_open(index);
                            html! {
                                <div class={classes!("faq__item", open.then_some("faq__item--open"))}>
                                    <button class="faq__question" {onclick}>
                                        <span>{*question}</span>
                                        <span class="faq__icon">{ if open { "−" } else { "+" } }</span>
                                    </button>
                                    <div class="faq__answer">
                                        <p>{*answer}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="faq__more">
                    <p>{"Still have questions?"}</p>
                    <button class="btn-ghost" onclick={open_modal}>{"Talk to our team"}</button>
                </div>
            </div>

            <style>
                {r#"
                .faq {
                    padding: 7rem 0;
                }
                .faq__inner {
                    max-width: 56rem;
                }
                .faq__header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .faq__header p {
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .faq__item {
                    margin-bottom: 1rem;
                    border-radius: 1rem;
                    background: var(--card);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                    transition: border-color 0.3s;
                }
                .faq__item--open {
                    border-color: rgba(99, 91, 255, 0.3);
                }
                .faq__question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.05rem;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                }
                .faq__icon {
                    color: var(--brand-soft);
                    font-size: 1.5rem;
                }
                .faq__answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                }
                .faq__item--open .faq__answer {
                    max-height: 20rem;
                }
                .faq__answer p {
                    margin: 0;
                    padding: 0 1.5rem 1.5rem;
                    color: var(--muted);
                    line-height: 1.7;
                }
                .faq__more {
                    margin-top: 3rem;
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_item_open_by_default() {
        let accordion = Accordion::default();
        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn test_only_one_item_open() {
        let accordion = Accordion::default().toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(0));
        let closed = accordion.toggle(3);
        assert!((0..QUESTIONS.len()).all(|i| !closed.is_open(i)));
    }
}
