use yew::prelude::*;
use yew_router::prelude::*;

use crate::content;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let products = use_memo(|_| content::product_list(), ());

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer__grid">
                    <div class="footer__brand">
                        <Link<Route> to={Route::Home} classes="footer__logo">{"AXOBITS"}</Link<Route>>
                        <p>
                            {"AXOBITS PRIVATE LIMITED builds and supports software products, from discovery to delivery, with reliability-first execution."}
                        </p>
                    </div>

                    <div>
                        <h4>{"Portfolio"}</h4>
                        <ul>
                            {
                                products.iter().map(|product| html! {
                                    <li>
                                        <Link<Route> to={Route::ProductDetail { product_id: product.id.clone() }}>
                                            {&product.name}
                                        </Link<Route>>
                                    </li>
                                }).collect::<Html>()
                            }
                            <li><Link<Route> to={Route::Products}>{"View portfolio"}</Link<Route>></li>
                        </ul>
                    </div>

                    <div>
                        <h4>{"Resources"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                            <li><a href="#">{"Documentation ↗"}</a></li>
                            <li><a href="#">{"Changelog"}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4>{"Company"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                            <li><a href="#">{"Privacy Policy"}</a></li>
                            <li><a href="#">{"Terms of Service"}</a></li>
                        </ul>
                    </div>
                </div>

                <div class="footer__bottom">
                    <p>{"© 2025 AXOBITS PRIVATE LIMITED. All rights reserved."}</p>
                    <p>{"AXOBITS"}</p>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    position: relative;
                    padding: 6rem 0 3rem;
                    border-top: 1px solid var(--line);
                    overflow: hidden;
                }
                .footer__grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .footer__logo {
                    font-weight: 800;
                    letter-spacing: 0.2em;
                }
                .footer__brand p {
                    max-width: 20rem;
                    color: #6b7280;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .footer h4 {
                    margin: 0 0 1.5rem;
                    font-weight: 600;
                }
                .footer ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .footer ul a:hover {
                    color: var(--brand-soft);
                }
                .footer__bottom {
                    display: flex;
                    justify-content: space-between;
                    padding-top: 2.5rem;
                    border-top: 1px solid var(--line);
                    color: #4b5563;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .footer__grid {
                        grid-template-columns: 1fr;
                    }
                    .footer__bottom {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
