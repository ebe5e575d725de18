use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

const SLIDE_LOCK_MS: u32 = 500;

struct Quote {
    text: &'static str,
    author: &'static str,
    initials: &'static str,
}

const QUOTES: [Quote; 5] = [
    Quote {
        text: "We build for long-term maintainability: clean interfaces, predictable behavior, and systems that are easy to operate.",
        author: "Engineering",
        initials: "EN",
    },
    Quote {
        text: "Security is treated as a baseline: least-privilege access, audit-friendly design, and careful data handling.",
        author: "Security",
        initials: "SE",
    },
    Quote {
        text: "AI is used where it matters: automation and insights without sacrificing reliability or control.",
        author: "Product",
        initials: "PR",
    },
    Quote {
        text: "We ship with clarity: measurable outcomes, transparent timelines, and communication that stays honest.",
        author: "Delivery",
        initials: "DL",
    },
    Quote {
        text: "Our systems are designed for scale: observability, resilience, and performance-first engineering.",
        author: "Platform",
        initials: "PL",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slide {
    Prev,
    Next,
    /// The slide transition finished.
    Unlock,
}

/// Wrapping carousel index. A slide locks the carousel until `Unlock`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    locked: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            locked: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn apply(&mut self, slide: Slide) -> bool {
        match slide {
            Slide::Unlock if self.locked => self.locked = false,
            Slide::Unlock => return false,
            _ if self.locked || self.len == 0 => return false,
            Slide::Next => {
                self.index = (self.index + 1) % self.len;
                self.locked = true;
            }
            Slide::Prev => {
                self.index = (self.index + self.len - 1) % self.len;
                self.locked = true;
            }
        }
        true
    }
}

impl Reducible for Carousel {
    type Action = Slide;

    fn reduce(self: Rc<Self>, action: Slide) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let header = use_node_ref();
    let card = use_node_ref();
    let carousel = use_reducer(|| Carousel::new(QUOTES.len()));

    use_scroll_animation(
        header.clone(),
        AnimationOptions::new(Archetype::FadeUp).duration(0.8).start("top 80%"),
    );
    use_scroll_animation(
        card.clone(),
        AnimationOptions::new(Archetype::Scale).duration(0.6).start("top 70%"),
    );

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |locked| {
                let timer = locked.then(|| {
                    Timeout::new(SLIDE_LOCK_MS, move || dispatcher.dispatch(Slide::Unlock))
                });
                move || drop(timer)
            },
            carousel.is_locked(),
        );
    }

    let slide = |direction: Slide| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(direction))
    };

    let quote = &QUOTES[carousel.index()];

    html! {
        <section class="testimonials">
            <div class="container">
                <div class="testimonials__header" ref={header}>
                    <span class="testimonials__badge">{"How we work"}</span>
                    <h2 class="section-title">{"Built to feel dependable"}</h2>
                    <p>{"A calm, engineering-led approach to building serious software."}</p>
                </div>

                <div class="testimonials__card" ref={card}>
                    <div class="testimonials__stars">{"★★★★★"}</div>
                    <blockquote class="testimonials__quote">
                        {format!("\"{}\"", quote.text)}
                    </blockquote>
                    <div class="testimonials__author">
                        <span class="testimonials__avatar">{quote.initials}</span>
                        <div>
                            <div class="testimonials__name">{quote.author}</div>
                            <div class="testimonials__role">{"What to expect · AXOBITS"}</div>
                        </div>
                    </div>
                    <div class="testimonials__controls">
                        <button onclick={slide(Slide::Prev)} disabled={carousel.is_locked()}>{"‹"}</button>
                        <span>{format!("{} / {}", carousel.index() + 1, QUOTES.len())}</span>
                        <button onclick={slide(Slide::Next)} disabled={carousel.is_locked()}>{"›"}</button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    position: relative;
                    padding: 7rem 0;
                    background: #000000;
                    overflow: hidden;
                }
                .testimonials__header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .testimonials__header p {
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .testimonials__badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid var(--line);
                    color: var(--muted);
                    font-size: 0.875rem;
                }
                .testimonials__card {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                }
                .testimonials__stars {
                    color: #facc15;
                    margin-bottom: 1.5rem;
                }
                .testimonials__quote {
                    margin: 0 0 2rem;
                    font-size: clamp(1.25rem, 3vw, 1.875rem);
                    font-weight: 300;
                    line-height: 1.6;
                    animation: quote-in 0.5s ease-out;
                }
                @keyframes quote-in {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .testimonials__author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonials__avatar {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #635bff, #38bdf8);
                    font-weight: 700;
                }
                .testimonials__role {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .testimonials__controls {
                    display: flex;
                    justify-content: flex-end;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 2rem;
                    color: #6b7280;
                }
                .testimonials__controls button {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 1px solid var(--line);
                    background: transparent;
                    color: #ffffff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .testimonials__controls button:disabled {
                    opacity: 0.4;
                    cursor: default;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.apply(Slide::Prev));
        assert_eq!(carousel.index(), 4);
        carousel.apply(Slide::Unlock);
        carousel.apply(Slide::Next);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_locked_while_sliding() {
        let mut carousel = Carousel::new(5);
        carousel.apply(Slide::Next);
        assert!(carousel.is_locked());
        assert!(!carousel.apply(Slide::Next));
        assert_eq!(carousel.index(), 1);
        assert!(carousel.apply(Slide::Unlock));
        assert!(!carousel.apply(Slide::Unlock));
        assert!(carousel.apply(Slide::Next));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.apply(Slide::Next));
        assert!(!carousel.is_locked());
    }
}
