use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::content;
use crate::context::modal::use_modal;
use crate::Route;

const SCROLLED_AFTER_PX: f64 = 50.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);
    let products_open = use_state(|| false);
    let modal = use_modal();
    let path = yew_router::prelude::use_location().map(|location| location.path().to_string());
    let products = use_memo(|_| content::product_list(), ());

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
        });
    }

    {
        // Close the mobile menu whenever the route changes.
        let menu_open = menu_open.clone();
        let products_open = products_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                products_open.set(false);
                || ()
            },
            path,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let show_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: MouseEvent| products_open.set(true))
    };

    let hide_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: MouseEvent| products_open.set(false))
    };

    let open_modal = modal
        .as_ref()
        .map(|modal| modal.open_callback::<MouseEvent>())
        .unwrap_or_else(Callback::noop);

    let open_modal_mobile = {
        let open_modal = open_modal.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            open_modal.emit(e);
        })
    };

    html! {
        <>
            <nav class={classes!("navbar", is_scrolled.then_some("navbar--scrolled"))}>
                <div class="container navbar__inner">
                    <Link<Route> to={Route::Home} classes="navbar__logo">
                        {"AXOBITS"}
                    </Link<Route>>

                    <div class="navbar__links">
                        <div
                            class="navbar__dropdown"
                            onmouseenter={show_products.clone()}
                            onmouseleave={hide_products.clone()}
                        >
                            <button class="navbar__dropdown-toggle">{"Portfolio ▾"}</button>
                            <div class={classes!(
                                "navbar__menu",
                                products_open.then_some("navbar__menu--open")
                            )}>
                                {
                                    products.iter().map(|product| html! {
                                        <Link<Route>
                                            to={Route::ProductDetail { product_id: product.id.clone() }}
                                            classes="navbar__menu-item"
                                        >
                                            <span class="navbar__menu-name">{&product.name}</span>
                                            <span class="navbar__menu-desc">{&product.tagline}</span>
                                        </Link<Route>>
                                    }).collect::<Html>()
                                }
                                <Link<Route> to={Route::Products} classes="navbar__menu-all">
                                    {"View the portfolio"}
                                </Link<Route>>
                            </div>
                        </div>
                        <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                        <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                        <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                        <button class="btn-primary navbar__cta" onclick={open_modal}>
                            {"Talk to our team"}
                        </button>
                    </div>

                    <button class="navbar__burger" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", menu_open.then_some("mobile-menu--open"))}>
                <p class="mobile-menu__label">{"Portfolio"}</p>
                {
                    products.iter().map(|product| html! {
                        <Link<Route>
                            to={Route::ProductDetail { product_id: product.id.clone() }}
                            classes="mobile-menu__product"
                        >
                            {&product.name}
                        </Link<Route>>
                    }).collect::<Html>()
                }
                <div class="mobile-menu__divider"></div>
                <Link<Route> to={Route::Blog} classes="mobile-menu__link">{"Blog"}</Link<Route>>
                <Link<Route> to={Route::About} classes="mobile-menu__link">{"About"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes="mobile-menu__link">{"Contact"}</Link<Route>>
                <button class="btn-primary" onclick={open_modal_mobile}>{"Talk to our team"}</button>
            </div>

            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    transition: all 0.5s;
                }
                .navbar--scrolled {
                    padding: 1rem 0;
                    background: rgba(5, 5, 7, 0.8);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid var(--line);
                }
                .navbar__inner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .navbar__logo {
                    font-weight: 800;
                    letter-spacing: 0.2em;
                    z-index: 51;
                }
                .navbar__links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                    color: var(--muted);
                }
                .navbar__links a:hover {
                    color: #ffffff;
                }
                .navbar__dropdown {
                    position: relative;
                }
                .navbar__dropdown-toggle {
                    background: none;
                    border: none;
                    color: inherit;
                    font: inherit;
                    cursor: pointer;
                    padding: 0.5rem 0;
                }
                .navbar__menu {
                    position: absolute;
                    top: 100%;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 18rem;
                    padding: 0.75rem;
                    border-radius: 1rem;
                    background: rgba(14, 14, 18, 0.95);
                    border: 1px solid var(--line);
                    opacity: 0;
                    visibility: hidden;
                    transition: all 0.3s;
                }
                .navbar__menu--open {
                    opacity: 1;
                    visibility: visible;
                }
                .navbar__menu-item {
                    display: flex;
                    flex-direction: column;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                }
                .navbar__menu-item:hover {
                    background: rgba(255, 255, 255, 0.05);
                }
                .navbar__menu-name {
                    color: #ffffff;
                    font-weight: 500;
                }
                .navbar__menu-desc {
                    color: #6b7280;
                    font-size: 0.75rem;
                }
                .navbar__menu-all {
                    display: block;
                    margin-top: 0.5rem;
                    padding: 0.75rem;
                    border-top: 1px solid var(--line);
                    text-align: center;
                    color: var(--brand-soft);
                }
                .navbar__cta {
                    padding: 0.6rem 1.5rem;
                }
                .navbar__burger {
                    display: none;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.5rem;
                    z-index: 51;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: rgba(5, 5, 7, 0.98);
                    opacity: 0;
                    visibility: hidden;
                    transition: all 0.5s;
                }
                .mobile-menu--open {
                    opacity: 1;
                    visibility: visible;
                }
                .mobile-menu__label {
                    color: #6b7280;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .mobile-menu__product {
                    font-size: 1.25rem;
                    color: #d1d5db;
                }
                .mobile-menu__divider {
                    width: 5rem;
                    height: 1px;
                    background: var(--line);
                    margin: 1rem 0;
                }
                .mobile-menu__link {
                    font-size: 1.5rem;
                    color: #d1d5db;
                }
                @media (max-width: 1024px) {
                    .navbar__links {
                        display: none;
                    }
                    .navbar__burger {
                        display: block;
                    }
                }
                @media (min-width: 1025px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
