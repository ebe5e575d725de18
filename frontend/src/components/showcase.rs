use yew::prelude::*;
use yew_router::prelude::*;

use crate::content;
use crate::hooks::scroll_animation::{use_motion_binding, use_scroll_animation};
use crate::motion::binding::{horizontal_scroll, AnimationOptions, Archetype, BindingSpec};
use crate::Route;

/// Pinned product strip that slides sideways while the page scrolls.
#[function_component(HorizontalShowcase)]
pub fn horizontal_showcase() -> Html {
    let container = use_node_ref();
    let track = use_node_ref();
    let header = use_node_ref();
    let products = use_memo(|_| content::product_list(), ());

    use_scroll_animation(header.clone(), AnimationOptions::new(Archetype::Fade));

    {
        let container = container.clone();
        let track = track.clone();
        use_motion_binding(move |motion| {
            match (motion.register(&container), motion.register(&track)) {
                (Some(container), Some(track)) => Ok(horizontal_scroll(container, track)),
                (container, track) => {
                    motion.forget(&container.into_iter().chain(track).collect::<Vec<_>>());
                    Ok(BindingSpec::default())
                }
            }
        });
    }

    html! {
        <section class="showcase" id="products" ref={container}>
            <div class="container showcase__header" ref={header}>
                <span class="showcase__eyebrow">{"Portfolio"}</span>
                <h2 class="section-title">{"Products we build and run"}</h2>
            </div>

            <div class="showcase__track" ref={track}>
                {
                    products.iter().map(|product| html! {
                        <article class="showcase__card">
                            <span class="showcase__tagline">{&product.tagline}</span>
                            <h3>{&product.name}</h3>
                            <p>{&product.description}</p>
                            <ul>
                                { for product.features.iter().map(|f| html! { <li>{&f.title}</li> }) }
                            </ul>
                            <Link<Route>
                                to={Route::ProductDetail { product_id: product.id.clone() }}
                                classes="showcase__link"
                            >
                                {"Learn more →"}
                            </Link<Route>>
                        </article>
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .showcase {
                    position: relative;
                    min-height: 100vh;
                    padding: 6rem 0 4rem;
                    overflow: hidden;
                }
                .showcase__header {
                    margin-bottom: 3rem;
                }
                .showcase__eyebrow {
                    color: var(--brand-soft);
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .showcase__track {
                    display: flex;
                    gap: 2rem;
                    width: max-content;
                    padding: 0 1.5rem 0 max(1.5rem, calc((100vw - 1280px) / 2 + 1.5rem));
                    will-change: transform;
                }
                .showcase__card {
                    width: min(80vw, 520px);
                    padding: 2.5rem;
                    border-radius: 2rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                }
                .showcase__tagline {
                    color: var(--brand-soft);
                    font-size: 0.875rem;
                }
                .showcase__card h3 {
                    margin: 0.5rem 0 1rem;
                    font-size: 2rem;
                }
                .showcase__card p {
                    color: var(--muted);
                    line-height: 1.7;
                }
                .showcase__card ul {
                    margin: 1.5rem 0;
                    padding-left: 1.25rem;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    line-height: 2;
                }
                .showcase__link {
                    color: var(--brand-soft);
                    font-weight: 600;
                }
                "#}
            </style>
        </section>
    }
}
