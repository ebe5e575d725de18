use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    #[prop_or(AttrValue::Static("Page not found"))]
    pub title: AttrValue,
    #[prop_or(Route::Home)]
    pub back: Route,
    #[prop_or(AttrValue::Static("Back to home"))]
    pub back_label: AttrValue,
}

/// Shown for unknown routes and for unknown product or post ids.
#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <section class="not-found">
            <div class="container">
                <span class="not-found__code">{"404"}</span>
                <h1>{props.title.clone()}</h1>
                <p>{"The page you're looking for doesn't exist or has moved."}</p>
                <Link<Route> to={props.back.clone()} classes="btn-primary">
                    {props.back_label.clone()}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    padding: 10rem 0 6rem;
                    text-align: center;
                }
                .not-found__code {
                    color: var(--brand-soft);
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                }
                .not-found h1 {
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    margin: 1rem 0;
                }
                .not-found p {
                    color: var(--muted);
                    margin-bottom: 2.5rem;
                }
                "#}
            </style>
        </section>
    }
}
