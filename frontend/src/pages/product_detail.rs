use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{self, Product};
use crate::context::modal::use_modal;
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub product_id: String,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let product = use_memo(|id| content::find_product(id), props.product_id.clone());

    match product.as_ref() {
        Some(product) => html! { <ProductView product={product.clone()} /> },
        None => {
            warn!("unknown product id {}", props.product_id);
            html! {
                <NotFound
                    title="Product not found"
                    back={Route::Products}
                    back_label="Back to products"
                />
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProductViewProps {
    product: Product,
}

#[function_component(ProductView)]
fn product_view(props: &ProductViewProps) -> Html {
    let product = &props.product;
    let modal = use_modal();
    let hero = use_node_ref();
    let features = use_node_ref();
    let stats = use_node_ref();
    let quote = use_node_ref();

    use_scroll_animation(hero.clone(), AnimationOptions::new(Archetype::FadeUp));
    use_scroll_animation(
        features.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.1 }),
    );
    use_scroll_animation(stats.clone(), AnimationOptions::new(Archetype::Scale));
    use_scroll_animation(quote.clone(), AnimationOptions::new(Archetype::FadeRight));

    let open_modal = modal
        .map(|modal| modal.open_callback::<MouseEvent>())
        .unwrap_or_else(Callback::noop);

    html! {
        <div class="product">
            <section class="container product__hero" ref={hero}>
                <Link<Route> to={Route::Products} classes="product__back">{"← All products"}</Link<Route>>
                <span class="product__tagline">{&product.tagline}</span>
                <h1 class="section-title">{&product.name}</h1>
                <p class="product__lead">{&product.long_description}</p>
                <button class="btn-primary" onclick={open_modal.clone()}>{"Request a demo"}</button>
            </section>

            <section class="container product__stats" ref={stats}>
                {
                    product.stats.iter().map(|stat| html! {
                        <div class="product__stat">
                            <div class="product__stat-value">{&stat.value}</div>
                            <div class="product__stat-label">{&stat.label}</div>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="container product__features" ref={features}>
                {
                    product.features.iter().map(|feature| html! {
                        <div class="product__feature">
                            <h3>{&feature.title}</h3>
                            <p>{&feature.description}</p>
                        </div>
                    }).collect::<Html>()
                }
            </section>

            <section class="container product__uses">
                <h2>{"Built for"}</h2>
                <div class="product__chips">
                    { for product.use_cases.iter().map(|case| html! { <span>{case}</span> }) }
                </div>
            </section>

            <section class="container product__quote" ref={quote}>
                <blockquote>{format!("\"{}\"", product.testimonial.quote)}</blockquote>
                <p>
                    <strong>{&product.testimonial.author}</strong>
                    {" · "}
                    {&product.testimonial.role}
                </p>
            </section>

            <style>
                {r#"
                .product {
                    padding: 10rem 0 6rem;
                }
                .product__back {
                    display: inline-block;
                    margin-bottom: 2rem;
                    color: var(--muted);
                    font-size: 0.875rem;
                }
                .product__tagline {
                    display: block;
                    color: var(--brand-soft);
                    margin-bottom: 1rem;
                }
                .product__lead {
                    max-width: 48rem;
                    color: var(--muted);
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2.5rem;
                }
                .product__stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin: 6rem auto;
                }
                .product__stat {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                    text-align: center;
                }
                .product__stat-value {
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .product__stat-label {
                    color: var(--muted);
                    font-size: 0.875rem;
                }
                .product__features {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .product__feature {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .product__feature h3 {
                    margin: 0 0 0.75rem;
                }
                .product__feature p {
                    margin: 0;
                    color: var(--muted);
                    line-height: 1.6;
                }
                .product__uses {
                    margin: 6rem auto;
                }
                .product__chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .product__chips span {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    border: 1px solid var(--line);
                    color: #d1d5db;
                }
                .product__quote blockquote {
                    margin: 0 0 1.5rem;
                    font-size: clamp(1.25rem, 3vw, 2rem);
                    font-weight: 300;
                    line-height: 1.5;
                }
                .product__quote p {
                    color: var(--muted);
                }
                @media (max-width: 1024px) {
                    .product__stats,
                    .product__features {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
