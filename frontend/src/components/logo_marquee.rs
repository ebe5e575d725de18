use yew::prelude::*;

const LOGOS: [&str; 5] = ["CLOUDFORCE", "SECURETECH", "BOLT.IO", "GLOBALLINK", "DATACORE"];

/// Endless strip of client wordmarks. Pure CSS, no scroll binding.
#[function_component(LogoMarquee)]
pub fn logo_marquee() -> Html {
    let strip = || {
        html! {
            <div class="marquee__strip">
                { for LOGOS.iter().map(|logo| html! { <span class="marquee__logo">{*logo}</span> }) }
            </div>
        }
    };

    html! {
        <div class="marquee">
            <div class="marquee__track">
                { strip() }
                { strip() }
            </div>
            <style>
                {r#"
                .marquee {
                    width: 100%;
                    padding: 3rem 0;
                    border-top: 1px solid var(--line);
                    border-bottom: 1px solid var(--line);
                    background: rgba(255, 255, 255, 0.01);
                    overflow: hidden;
                }
                .marquee__track {
                    display: flex;
                    width: 200%;
                    animation: marquee 30s linear infinite;
                }
                .marquee__strip {
                    display: flex;
                    min-width: 50%;
                    justify-content: space-around;
                    align-items: center;
                    opacity: 0.3;
                }
                .marquee__logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </div>
    }
}
