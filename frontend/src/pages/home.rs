use log::debug;
use yew::prelude::*;

use crate::components::{
    cta::Cta, faq::Faq, features::Features, hero::Hero, logo_marquee::LogoMarquee,
    pricing::Pricing, showcase::HorizontalShowcase, stats::Stats, terminal::TerminalSection,
    testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    debug!("rendering home sections");
    html! {
        <>
            <Hero />
            <LogoMarquee />
            <Features />
            <Stats />
            <HorizontalShowcase />
            <Testimonials />
            <TerminalSection />
            <Pricing />
            <Faq />
            <Cta />
        </>
    }
}
