use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    cursor_glow::CursorGlow, demo_modal::DemoModal, footer::Footer, navbar::Navbar,
};
use crate::context::smooth_scroll::use_motion;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Page chrome plus the route-change reset.
///
/// The reset runs in the render body so that it precedes every child render
/// and every child effect of the new route. Re-renders of the same route are
/// ignored by the runtime.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let motion = use_motion();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    if let Some(motion) = &motion {
        motion.navigate(&path);
    }

    html! {
        <div class="site">
            <Global css={css!(r#"
                :root {
                    --bg: #050507;
                    --card: #0e0e12;
                    --brand: #635bff;
                    --brand-soft: #8b85ff;
                    --muted: #9ca3af;
                    --line: rgba(255, 255, 255, 0.08);
                }
                html, body {
                    margin: 0;
                    background: var(--bg);
                    color: #ffffff;
                    font-family: "Inter", system-ui, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                a {
                    color: inherit;
                    text-decoration: none;
                }
                ::selection {
                    background: var(--brand);
                    color: #ffffff;
                }
                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .brand-gradient {
                    background: linear-gradient(90deg, #8b85ff, #38bdf8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .section-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 600;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .btn-primary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 999px;
                    background: #ffffff;
                    color: #000000;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.3s;
                }
                .btn-primary:hover {
                    background: #c7c4ff;
                }
                .btn-ghost {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.9rem 2rem;
                    border: 1px solid var(--line);
                    border-radius: 999px;
                    background: transparent;
                    color: #ffffff;
                    cursor: pointer;
                }
            "#)} />
            <CursorGlow />
            <Navbar />
            <main>
                { for props.children.iter() }
            </main>
            <Footer />
            <DemoModal />
        </div>
    }
}
