use yew::prelude::*;
use yew_router::prelude::*;

use crate::content;
use crate::context::modal::use_modal;
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};
use crate::Route;

#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let header = use_node_ref();
    let grid = use_node_ref();
    let modal = use_modal();
    let products = use_memo(|_| content::product_list(), ());

    use_scroll_animation(header.clone(), AnimationOptions::new(Archetype::FadeDown));
    use_scroll_animation(
        grid.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.12 }).start("top 90%"),
    );

    let open_modal = modal
        .map(|modal| modal.open_callback::<MouseEvent>())
        .unwrap_or_else(Callback::noop);

    html! {
        <div class="products-page">
            <section class="container products-page__hero" ref={header}>
                <span class="products-page__eyebrow">{"Our Product Suite"}</span>
                <h1 class="section-title">
                    {"Intelligent solutions for "}
                    <span class="brand-gradient">{"modern teams"}</span>
                </h1>
                <p>
                    {"Explore our ecosystem of AI-powered products designed to transform how you work, build, and grow."}
                </p>
            </section>

            <section class="container products-page__grid" ref={grid}>
                {
                    products.iter().map(|product| html! {
                        <Link<Route>
                            to={Route::ProductDetail { product_id: product.id.clone() }}
                            classes="products-page__card"
                        >
                            <span class="products-page__tagline">{&product.tagline}</span>
                            <h2>{&product.name}</h2>
                            <p>{&product.description}</p>
                            <div class="products-page__features">
                                { for product.features.iter().take(3).map(|f| html! { <span>{&f.title}</span> }) }
                            </div>
                            <span class="products-page__more">{"Explore →"}</span>
                        </Link<Route>>
                    }).collect::<Html>()
                }
            </section>

            <section class="container products-page__cta">
                <h2>{"Ready to transform your workflow?"}</h2>
                <p>{"Tell us what you need and we'll walk you through the right product."}</p>
                <button class="btn-primary" onclick={open_modal}>{"Talk to our team"}</button>
            </section>

            <style>
                {r#"
                .products-page {
                    padding-top: 10rem;
                }
                .products-page__hero {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .products-page__hero p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .products-page__eyebrow {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                    color: var(--brand-soft);
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .products-page__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .products-page__card {
                    display: flex;
                    flex-direction: column;
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                    transition: border-color 0.3s, transform 0.3s;
                }
                .products-page__card:hover {
                    border-color: rgba(99, 91, 255, 0.35);
                    transform: translateY(-4px);
                }
                .products-page__tagline {
                    color: var(--brand-soft);
                    font-size: 0.875rem;
                }
                .products-page__card h2 {
                    margin: 0.5rem 0 1rem;
                    font-size: 2rem;
                }
                .products-page__card p {
                    color: var(--muted);
                    line-height: 1.7;
                }
                .products-page__features {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin: 1.5rem 0;
                }
                .products-page__features span {
                    padding: 0.35rem 0.8rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.75rem;
                    color: #d1d5db;
                }
                .products-page__more {
                    margin-top: auto;
                    font-weight: 600;
                }
                .products-page__cta {
                    padding: 8rem 1.5rem;
                    text-align: center;
                }
                .products-page__cta p {
                    color: var(--muted);
                    margin-bottom: 2rem;
                }
                @media (max-width: 1024px) {
                    .products-page__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
