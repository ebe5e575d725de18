use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion {
    pub mod binding;
    pub mod dom;
    pub mod easing;
    pub mod follow;
    pub mod inertia;
    pub mod layout;
    pub mod runtime;
    pub mod session;
    pub mod signal;
    pub mod ticker;
    pub mod timing;
    pub mod trigger;
    pub mod tween;
}
mod lead {
    pub mod channel;
    pub mod form;
    pub mod modal_state;
}
mod context {
    pub mod modal;
    pub mod smooth_scroll;
}
mod hooks {
    pub mod scroll_animation;
}
mod components {
    pub mod cta;
    pub mod cursor_glow;
    pub mod demo_modal;
    pub mod faq;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod layout;
    pub mod logo_marquee;
    pub mod navbar;
    pub mod pricing;
    pub mod reveal_text;
    pub mod showcase;
    pub mod stats;
    pub mod terminal;
    pub mod testimonials;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod product_detail;
    pub mod products;
}

use components::layout::Layout;
use context::{modal::ModalProvider, smooth_scroll::SmoothScrollProvider};
use pages::{
    about::AboutPage,
    blog::{BlogPage, BlogPost},
    contact::ContactPage,
    home::Home,
    not_found::NotFound,
    product_detail::ProductDetail,
    products::ProductsPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products")]
    Products,
    #[at("/products/:product_id")]
    ProductDetail { product_id: String },
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/blog/:post_id")]
    BlogPost { post_id: String },
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Products => {
            info!("Rendering Products page");
            html! { <ProductsPage /> }
        }
        Route::ProductDetail { product_id } => {
            info!("Rendering Product page for {}", product_id);
            html! { <ProductDetail key={product_id.clone()} product_id={product_id.clone()} /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <BlogPage /> }
        }
        Route::BlogPost { post_id } => {
            info!("Rendering Blog post {}", post_id);
            html! { <BlogPost key={post_id.clone()} post_id={post_id.clone()} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SmoothScrollProvider>
                <ModalProvider>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </ModalProvider>
            </SmoothScrollProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }
    tracing_wasm::set_as_global_default();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
