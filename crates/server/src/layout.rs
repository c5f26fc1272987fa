//! Root page layout
//!
//! Every HTML page is wrapped in the same document shell: site metadata,
//! social cards and the Google Analytics bootstrap.

use std::fmt::Write as _;
use std::time::Duration;

use crate::analytics::PageTagQueue;
use crate::config::AnalyticsSettings;

/// Static description of the document head
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub site_name: &'static str,
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub og_image: OgImage,
    pub locale: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
    pub favicon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OgImage {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

pub const SITE: SiteMetadata = SiteMetadata {
    title: "Makos.ai - AI Worksheet Generator for Teachers",
    description: "Generate engaging and customized worksheets in seconds with Makos.ai, powered by AI. Save time and enhance student learning.",
    keywords: &[
        "AI",
        "worksheet",
        "generator",
        "teachers",
        "education",
        "lesson plans",
        "quiz",
        "makos.ai",
    ],
    site_name: "Makos.ai",
    og_title: "Makos.ai - AI Worksheet Generator",
    og_description: "Create professional worksheets in seconds with AI. Multiple question types, 40+ languages, Bloom's Taxonomy support.",
    og_image: OgImage {
        path: "/logo.png",
        width: 512,
        height: 512,
        alt: "Makos.ai - AI Worksheet Generator for Teachers",
    },
    locale: "en_US",
    twitter_title: "Makos.ai - AI Worksheet Generator",
    twitter_description: "Create professional worksheets in seconds with AI. Save hours of prep time!",
    favicon: "/favicon.ico",
};

/// Per-page layout options
#[derive(Default)]
pub struct PageOptions<'a> {
    /// Overrides the site title, rendered as `<title> | Makos.ai`
    pub title: Option<&'a str>,
    /// Meta refresh to another URI after a delay
    pub refresh: Option<(Duration, &'a str)>,
    pub analytics: Option<&'a AnalyticsSettings>,
    /// Conversion events to fire on load
    pub tags: Option<&'a PageTagQueue>,
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn render_page(site: &SiteMetadata, origin: &str, options: &PageOptions<'_>, body: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let title = match options.title {
        Some(title) => format!("{} | {}", title, site.site_name),
        None => site.title.to_string(),
    };

    let mut head = String::new();
    let _ = writeln!(head, "<meta charset=\"utf-8\">");
    let _ = writeln!(
        head,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    );
    let _ = writeln!(head, "<title>{}</title>", escape_html(&title));
    meta_name(&mut head, "description", site.description);
    meta_name(&mut head, "keywords", &site.keywords.join(","));
    meta_name(&mut head, "robots", "index, follow");
    let _ = writeln!(
        head,
        "<link rel=\"icon\" href=\"{}\">",
        escape_html(site.favicon)
    );
    let _ = writeln!(head, "<link rel=\"canonical\" href=\"{}\">", escape_html(origin));

    let image = format!("{}{}", origin, site.og_image.path);
    meta_property(&mut head, "og:title", site.og_title);
    meta_property(&mut head, "og:description", site.og_description);
    meta_property(&mut head, "og:url", origin);
    meta_property(&mut head, "og:site_name", site.site_name);
    meta_property(&mut head, "og:image", &image);
    meta_property(&mut head, "og:image:width", &site.og_image.width.to_string());
    meta_property(&mut head, "og:image:height", &site.og_image.height.to_string());
    meta_property(&mut head, "og:image:alt", site.og_image.alt);
    meta_property(&mut head, "og:locale", site.locale);
    meta_property(&mut head, "og:type", "website");
    meta_name(&mut head, "twitter:card", "summary_large_image");
    meta_name(&mut head, "twitter:title", site.twitter_title);
    meta_name(&mut head, "twitter:description", site.twitter_description);
    meta_name(&mut head, "twitter:image", &image);

    if let Some((delay, target)) = options.refresh {
        let _ = writeln!(
            head,
            "<meta http-equiv=\"refresh\" content=\"{};url={}\">",
            delay.as_secs_f64().ceil() as u64,
            escape_html(target)
        );
    }

    if let Some(script) = analytics_script(options) {
        head.push_str(&script);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="light" style="color-scheme: light">
<head>
{head}</head>
<body class="antialiased bg-pattern" style="font-family: 'DM Sans', system-ui, sans-serif">
{body}
</body>
</html>"#
    )
}

fn meta_name(head: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        head,
        "<meta name=\"{}\" content=\"{}\">",
        name,
        escape_html(content)
    );
}

fn meta_property(head: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        head,
        "<meta property=\"{}\" content=\"{}\">",
        property,
        escape_html(content)
    );
}

/// gtag.js loader, config calls and queued conversion events. Nothing is
/// emitted unless a measurement id is configured.
fn analytics_script(options: &PageOptions<'_>) -> Option<String> {
    let settings = options.analytics?;
    let measurement_id = settings.measurement_id.as_deref()?;

    let mut script = format!(
        r#"<script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
<script>
window.dataLayer = window.dataLayer || [];
function gtag(){{dataLayer.push(arguments);}}
gtag('js', new Date());
gtag('config', '{id}', {{ page_path: window.location.pathname }});
gtag('config', '{ads}');
"#,
        id = measurement_id,
        ads = settings.ads_id,
    );

    if let Some(tags) = options.tags {
        script.push_str(&tags.render_script());
    }
    script.push_str("</script>\n");
    Some(script)
}
