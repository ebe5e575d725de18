//! Product catalogue and blog posts, embedded at compile time.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

const PRODUCTS_JSON: &str = include_str!("../content/products.json");
const POSTS_JSON: &str = include_str!("../content/posts.json");

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "Industry Insights",
    "Case Study",
    "Best Practices",
    "Product Update",
    "Research",
    "Finance",
];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    pub features: Vec<Feature>,
    pub use_cases: Vec<String>,
    pub stats: Vec<Stat>,
    pub testimonial: Testimonial,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub body: Vec<String>,
}

impl Post {
    /// "Dec 10, 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    pub fn author_initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub fn products() -> Result<Vec<Product>, ContentError> {
    serde_json::from_str(PRODUCTS_JSON).map_err(|source| ContentError::Decode {
        what: "products",
        source,
    })
}

pub fn posts() -> Result<Vec<Post>, ContentError> {
    let mut posts: Vec<Post> =
        serde_json::from_str(POSTS_JSON).map_err(|source| ContentError::Decode {
            what: "posts",
            source,
        })?;
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

fn or_log<T: Default>(result: Result<T, ContentError>) -> T {
    result.unwrap_or_else(|err| {
        log::error!("{}", err);
        T::default()
    })
}

/// Catalogue for rendering; decoding errors are logged and yield nothing.
pub fn product_list() -> Vec<Product> {
    or_log(products())
}

pub fn post_list() -> Vec<Post> {
    or_log(posts())
}

pub fn find_product(id: &str) -> Option<Product> {
    product_list().into_iter().find(|p| p.id == id)
}

pub fn find_post(id: &str) -> Option<Post> {
    post_list().into_iter().find(|p| p.id == id)
}

/// Splits the posts shown under `category` into the featured post and the rest.
/// Without an explicitly featured post the newest one is featured.
pub fn by_category<'a>(posts: &'a [Post], category: &str) -> (Option<&'a Post>, Vec<&'a Post>) {
    let filtered: Vec<&Post> = posts
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect();
    let featured = filtered
        .iter()
        .copied()
        .find(|p| p.featured)
        .or_else(|| filtered.first().copied());
    let rest = filtered
        .into_iter()
        .filter(|p| Some(p.id.as_str()) != featured.map(|f| f.id.as_str()))
        .collect();
    (featured, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalogue_decodes() {
        let products = products().unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["vera", "charioteer", "ledger", "blueprint"]);
        assert!(products.iter().all(|p| p.features.len() == 4));
    }

    #[test]
    fn test_unknown_ids() {
        assert!(find_product("vera").is_some());
        assert!(find_product("nope").is_none());
        assert!(find_post("42").is_none());
    }

    #[test]
    fn test_posts_newest_first() {
        let posts = posts().unwrap();
        assert_eq!(posts[0].id, "1");
        assert_eq!(posts[0].display_date(), "Dec 10, 2025");
        assert_eq!(posts[0].author_initials(), "AT");
    }

    #[test]
    fn test_category_filter() {
        let posts = posts().unwrap();
        let (featured, rest) = by_category(&posts, ALL_CATEGORIES);
        assert_eq!(featured.map(|p| p.id.as_str()), Some("1"));
        assert_eq!(rest.len(), 5);

        let (featured, rest) = by_category(&posts, "Finance");
        assert_eq!(featured.map(|p| p.id.as_str()), Some("4"));
        assert!(rest.is_empty());

        let (featured, rest) = by_category(&posts, "Case Study");
        assert!(featured.is_none());
        assert!(rest.is_empty());
    }
}
