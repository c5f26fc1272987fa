//! Blog pages and JSON API

use std::fmt::Write as _;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use super::server::AppState;
use crate::content::{BlogPost, all_blog_posts, get_blog_post};
use crate::layout::{PageOptions, SITE, escape_html, render_page};
use crate::validation::slug::validate_slug;

fn lookup(slug: &str) -> Option<&'static BlogPost> {
    if let Err(err) = validate_slug(slug) {
        tracing::debug!("rejecting blog lookup: {}", err);
        return None;
    }
    get_blog_post(slug)
}

pub async fn list_posts_handler() -> Json<Vec<&'static BlogPost>> {
    Json(all_blog_posts())
}

pub async fn get_post_handler(Path(slug): Path<String>) -> Response {
    match lookup(&slug) {
        Some(post) => Json(post).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("blog post '{}' not found", slug) })),
        )
            .into_response(),
    }
}

pub async fn blog_index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut body = String::from("<main class=\"blog\">\n<h1>Blog</h1>\n");
    for post in all_blog_posts() {
        let _ = write!(
            body,
            r#"<article>
    <h2><a href="/blog/{slug}">{title}</a></h2>
    <p class="meta">{date} · {author}</p>
    <p>{excerpt}</p>
</article>
"#,
            slug = post.slug,
            title = escape_html(post.title),
            date = post.date,
            author = escape_html(post.author),
            excerpt = escape_html(post.excerpt),
        );
    }
    body.push_str("</main>");

    let options = PageOptions {
        title: Some("Blog"),
        analytics: Some(&state.config.analytics),
        ..Default::default()
    };
    Html(render_page(&SITE, &state.config.server.site_origin, &options, &body))
}

pub async fn blog_post_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    let Some(post) = lookup(&slug) else {
        let options = PageOptions {
            title: Some("Post not found"),
            analytics: Some(&state.config.analytics),
            ..Default::default()
        };
        let body = "<main class=\"blog\">\n<h1>Post not found</h1>\n<p><a href=\"/blog\">Back to the blog</a></p>\n</main>";
        return (
            StatusCode::NOT_FOUND,
            Html(render_page(&SITE, &state.config.server.site_origin, &options, body)),
        )
            .into_response();
    };

    let image = post
        .image
        .map(|src| {
            format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                escape_html(src),
                escape_html(post.title)
            )
        })
        .unwrap_or_default();
    let tags: String = post
        .tags
        .iter()
        .map(|tag| format!("<li>{}</li>", escape_html(tag)))
        .collect();

    // Post content is trusted HTML authored in the repository.
    let body = format!(
        r#"<main class="blog-post">
<article>
<h1>{title}</h1>
<p class="meta">{date} · {author}</p>
{image}<div class="content">
{content}
</div>
<ul class="tags">{tags}</ul>
</article>
</main>"#,
        title = escape_html(post.title),
        date = post.date,
        author = escape_html(post.author),
        content = post.content,
    );

    let options = PageOptions {
        title: Some(post.title),
        analytics: Some(&state.config.analytics),
        ..Default::default()
    };
    Html(render_page(&SITE, &state.config.server.site_origin, &options, &body)).into_response()
}
