use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{self, Post, ALL_CATEGORIES, CATEGORIES};
use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: Post,
    #[prop_or_default]
    featured: bool,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    html! {
        <Link<Route>
            to={Route::BlogPost { post_id: post.id.clone() }}
            classes={classes!("post-card", props.featured.then_some("post-card--featured"))}
        >
            <span class="post-card__category">{&post.category}</span>
            <h3>{&post.title}</h3>
            <p>{&post.excerpt}</p>
            <div class="post-card__meta">
                <span class="post-card__avatar">{post.author_initials()}</span>
                <span>{&post.author}</span>
                <span>{"·"}</span>
                <span>{post.display_date()}</span>
                <span>{"·"}</span>
                <span>{&post.read_time}</span>
            </div>
        </Link<Route>>
    }
}

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let category = use_state(|| ALL_CATEGORIES.to_string());
    let posts = use_memo(|_| content::post_list(), ());
    let header = use_node_ref();
    let grid = use_node_ref();

    use_scroll_animation(header.clone(), AnimationOptions::new(Archetype::FadeDown));
    use_scroll_animation(
        grid.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.1 }).start("top 90%"),
    );

    let (featured, rest) = content::by_category(&posts, &category);

    html! {
        <div class="blog">
            <section class="container blog__header" ref={header}>
                <h1 class="section-title">{"Insights & Updates"}</h1>
                <p>{"Notes from the team on building, shipping, and running software."}</p>
            </section>

            <div class="container blog__filters">
                {
                    CATEGORIES.iter().copied().map(|name| {
                        let active = *category == name;
                        let onclick = {
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| category.set(name.to_string()))
                        };
                        html! {
                            <button class={classes!("blog__filter", active.then_some("blog__filter--active"))} {onclick}>
                                {name}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <section class="container">
                if let Some(post) = featured {
                    <PostCard post={post.clone()} featured=true />
                }
                if rest.is_empty() && featured.is_none() {
                    <p class="blog__empty">{"No posts in this category yet."}</p>
                }
                <div class="blog__grid" ref={grid}>
                    {
                        rest.iter().map(|post| html! {
                            <PostCard key={post.id.clone()} post={(*post).clone()} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <style>
                {r#"
                .blog {
                    padding: 10rem 0 6rem;
                }
                .blog__header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .blog__header p {
                    color: var(--muted);
                    font-size: 1.125rem;
                }
                .blog__filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 3rem;
                }
                .blog__filter {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    border: 1px solid var(--line);
                    background: transparent;
                    color: var(--muted);
                    cursor: pointer;
                }
                .blog__filter--active {
                    background: var(--brand);
                    border-color: var(--brand);
                    color: #ffffff;
                }
                .blog__empty {
                    text-align: center;
                    color: var(--muted);
                    padding: 4rem 0;
                }
                .blog__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .post-card {
                    display: block;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid var(--line);
                    color: inherit;
                    text-decoration: none;
                    transition: border-color 0.3s ease;
                }
                .post-card:hover {
                    border-color: rgba(99, 91, 255, 0.5);
                }
                .post-card--featured {
                    margin-bottom: 2rem;
                    padding: 3rem;
                }
                .post-card--featured h3 {
                    font-size: 2rem;
                }
                .post-card__category {
                    color: var(--brand-soft);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .post-card p {
                    color: var(--muted);
                    line-height: 1.6;
                }
                .post-card__meta {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 0.5rem;
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .post-card__avatar {
                    width: 2rem;
                    height: 2rem;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #635bff, #38bdf8);
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.7rem;
                }
                @media (max-width: 1024px) {
                    .blog__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub post_id: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let post = use_memo(|id| content::find_post(id), props.post_id.clone());
    let article = use_node_ref();
    use_scroll_animation(article.clone(), AnimationOptions::new(Archetype::FadeUp));

    let Some(post) = post.as_ref() else {
        warn!("unknown post id {}", props.post_id);
        return html! {
            <NotFound title="Post not found" back={Route::Blog} back_label="Back to blog" />
        };
    };

    html! {
        <article class="container article" ref={article}>
            <Link<Route> to={Route::Blog} classes="article__back">{"← All posts"}</Link<Route>>
            <span class="article__category">{&post.category}</span>
            <h1>{&post.title}</h1>
            <div class="article__meta">
                {format!("{} · {} · {}", post.author, post.display_date(), post.read_time)}
            </div>
            <p class="article__excerpt">{&post.excerpt}</p>
            { for post.body.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }

            <style>
                {r#"
                .article {
                    max-width: 48rem;
                    padding-top: 10rem;
                    padding-bottom: 6rem;
                }
                .article__back {
                    display: inline-block;
                    margin-bottom: 2rem;
                    color: var(--muted);
                    font-size: 0.875rem;
                }
                .article__category {
                    color: var(--brand-soft);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .article h1 {
                    font-size: clamp(2rem, 5vw, 3rem);
                    margin: 0.75rem 0 1rem;
                }
                .article__meta {
                    color: #6b7280;
                    font-size: 0.875rem;
                    margin-bottom: 2.5rem;
                }
                .article p {
                    color: #d1d5db;
                    line-height: 1.8;
                }
                .article__excerpt {
                    font-size: 1.25rem;
                    color: #ffffff;
                }
                "#}
            </style>
        </article>
    }
}
