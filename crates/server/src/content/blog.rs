//! Blog post lookup
//!
//! Posts are defined at build time in [`super::posts`] and never change at
//! runtime. The slug is the only lookup key.

use chrono::NaiveDate;
use serde::Serialize;

use super::posts::POSTS;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Post body as HTML
    pub content: &'static str,
    /// Publication date, `YYYY-MM-DD`
    pub date: &'static str,
    pub author: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }
}

pub fn get_blog_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// All posts, newest first. Posts sharing a date keep their source order.
pub fn all_blog_posts() -> Vec<&'static BlogPost> {
    sorted_by_date(POSTS)
}

fn sorted_by_date(posts: &[BlogPost]) -> Vec<&BlogPost> {
    let mut sorted: Vec<&BlogPost> = posts.iter().collect();
    sorted.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::slug::validate_slug;
    use std::collections::HashSet;

    fn post(slug: &'static str, date: &'static str) -> BlogPost {
        BlogPost {
            slug,
            title: "",
            excerpt: "",
            content: "",
            date,
            author: "",
            image: None,
            tags: &[],
        }
    }

    #[test]
    fn test_slugs_are_unique_and_valid() {
        let mut seen = HashSet::new();
        for post in POSTS {
            assert!(validate_slug(post.slug).is_ok(), "invalid slug {}", post.slug);
            assert!(seen.insert(post.slug), "duplicate slug {}", post.slug);
        }
    }

    #[test]
    fn test_dates_parse() {
        for post in POSTS {
            assert!(post.published_on().is_some(), "bad date on {}", post.slug);
        }
    }

    #[test]
    fn test_get_blog_post() {
        let post = get_blog_post("creating-effective-worksheets").unwrap();
        assert_eq!(
            post.title,
            "5 Tips for Creating Effective Worksheets That Students Love"
        );
        assert_eq!(post.tags, &["Worksheets", "Teaching Tips", "Education"]);
    }

    #[test]
    fn test_get_missing_blog_post() {
        assert!(get_blog_post("nonexistent").is_none());
        assert!(get_blog_post("").is_none());
    }

    #[test]
    fn test_all_blog_posts_newest_first() {
        let posts = all_blog_posts();
        assert_eq!(posts.len(), POSTS.len());
        for pair in posts.windows(2) {
            assert!(pair[0].published_on() >= pair[1].published_on());
        }
        assert_eq!(
            posts.last().map(|post| post.slug),
            Some("creating-effective-worksheets")
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let posts = [
            post("first", "2026-01-30"),
            post("second", "2026-01-31"),
            post("third", "2026-01-30"),
            post("fourth", "2026-01-31"),
        ];

        let slugs: Vec<_> = sorted_by_date(&posts).iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["second", "fourth", "first", "third"]);
    }

    #[test]
    fn test_all_blog_posts_does_not_reorder_source() {
        let first = POSTS[0].slug;
        all_blog_posts();
        assert_eq!(POSTS[0].slug, first);
    }
}
