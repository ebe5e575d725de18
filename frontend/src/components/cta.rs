use yew::prelude::*;

use crate::context::modal::use_modal;
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

#[function_component(Cta)]
pub fn cta() -> Html {
    let modal = use_modal();
    let badge = use_node_ref();
    let body = use_node_ref();

    use_scroll_animation(badge.clone(), AnimationOptions::new(Archetype::Rotate));
    use_scroll_animation(
        body.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.1 }).delay(0.1),
    );

    let open_modal = modal
        .map(|modal| modal.open_callback::<MouseEvent>())
        .unwrap_or_else(Callback::noop);

    html! {
        <section class="cta" id="contact">
            <div class="container cta__inner">
                <div class="cta__badge" ref={badge}>{"AX"}</div>
                <div ref={body}>
                    <h2 class="section-title">{"Work with AXOBITS"}</h2>
                    <p class="cta__text">
                        {"Talk to our team about building or scaling dependable SaaS software: engineering-led, security-aware, and designed to last."}
                    </p>
                    <div>
                        <button class="btn-primary cta__button" onclick={open_modal}>
                            {"Request a conversation →"}
                        </button>
                        <p class="cta__hint">{"Response within 1 business day."}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .cta {
                    position: relative;
                    min-height: 55vh;
                    display: flex;
                    align-items: center;
                    padding: 7rem 0;
                    background: radial-gradient(circle at center, rgba(99, 91, 255, 0.10) 0%, rgba(0, 0, 0, 0) 70%);
                }
                .cta__inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .cta__badge {
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                    font-weight: 600;
                }
                .cta__text {
                    max-width: 36rem;
                    margin: 0 auto 3rem;
                    color: var(--muted);
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .cta__button {
                    font-size: 1.125rem;
                }
                .cta__hint {
                    margin-top: 1rem;
                    color: #4b5563;
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </section>
    }
}
