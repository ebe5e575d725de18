use yew::prelude::*;

use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

#[derive(Properties, PartialEq)]
pub struct RevealTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds between consecutive words.
    #[prop_or(0.1)]
    pub stagger: f64,
}

/// Heading whose words rise in one after another.
#[function_component(RevealText)]
pub fn reveal_text(props: &RevealTextProps) -> Html {
    let node = use_node_ref();
    use_scroll_animation(
        node.clone(),
        AnimationOptions::new(Archetype::Stagger {
            amount: props.stagger,
        })
        .duration(0.8)
        .start("top 90%"),
    );

    let words = props.text.split_whitespace().map(|word| {
        html! { <span class="reveal-word">{word}</span> }
    });

    html! {
        <>
            // Every child of the heading is animated, so keep it to the words.
            <h1 class={classes!("reveal-text", props.class.clone())} ref={node}>
                { for words }
            </h1>
            <style>
                {r#"
                .reveal-text .reveal-word {
                    display: inline-block;
                    margin-right: 0.25em;
                }
                "#}
            </style>
        </>
    }
}
