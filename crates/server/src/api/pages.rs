//! Redirect targets of the auth flow

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    response::Html,
};
use axum_extra::extract::cookie::CookieJar;
use url::form_urlencoded;

use super::server::AppState;
use crate::analytics::{PageTagQueue, TagQueue, take_conversion};
use crate::layout::{PageOptions, SITE, escape_html, render_page};

/// Home page. Fires any conversion parked by the auth callback.
pub async fn home_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let body = r#"<main class="home">
<h1>AI Worksheet Generator for Teachers</h1>
<p>Generate engaging and customized worksheets in seconds.</p>
<p><a href="/login">Sign in</a> · <a href="/blog">Blog</a></p>
</main>"#;

    let (jar, pending) = take_conversion(jar);
    let tags = PageTagQueue::new();
    if let Some(conversion) = pending {
        conversion.track(Some(&tags as &dyn TagQueue));
    }

    let options = PageOptions {
        analytics: Some(&state.config.analytics),
        tags: Some(&tags),
        ..Default::default()
    };
    let page = render_page(&SITE, &state.config.server.site_origin, &options, body);
    (jar, Html(page))
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let error = query
        .as_deref()
        .and_then(|query| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "error")
                .map(|(_, value)| value.into_owned())
        })
        .filter(|error| !error.is_empty())
        .map(|error| format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape_html(&error)))
        .unwrap_or_default();

    let body = format!(
        r#"<main class="login">
<h1>Sign in to Makos.ai</h1>
{error}<p>Continue with your account to start generating worksheets.</p>
</main>"#
    );

    let options = PageOptions {
        title: Some("Sign in"),
        analytics: Some(&state.config.analytics),
        ..Default::default()
    };
    Html(render_page(&SITE, &state.config.server.site_origin, &options, &body))
}
