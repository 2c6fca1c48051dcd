//! Built-in post page template
//!
//! The page skeleton is embedded directly in the binary and filled in by
//! placeholder substitution. There is no template language: `{{ name }}`
//! is replaced by a value and nothing else is interpreted.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::config::SiteConfig;
use crate::helpers::escape_html;

const POST_TEMPLATE: &str = include_str!("post.html");

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\s*([a-z_]+)\s*\}\}").unwrap();
}

/// Per-post values for the page skeleton
#[derive(Debug, Clone, Copy, Default)]
pub struct PostPage<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub date: &'a str,
    /// Rendered body HTML, inserted as is
    pub content: &'a str,
}

/// Composes complete post pages
pub struct TemplateRenderer {
    site_title: String,
    language: String,
    back_link: String,
    back_label: String,
}

impl TemplateRenderer {
    /// Create a renderer carrying the site-wide values
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            site_title: config.title.clone(),
            language: config.language.clone(),
            back_link: config.back_link.clone(),
            back_label: config.back_label.clone(),
        }
    }

    /// Render a post page
    ///
    /// Substitution is a single pass over the skeleton, so a value that
    /// itself contains `{{ ... }}` is never expanded.
    pub fn render_post(&self, page: &PostPage) -> String {
        PLACEHOLDER
            .replace_all(POST_TEMPLATE, |caps: &Captures| match &caps[1] {
                "title" => escape_html(page.title),
                "author" => escape_html(page.author),
                "date" => escape_html(page.date),
                "content" => page.content.to_string(),
                "site_title" => escape_html(&self.site_title),
                "lang" => escape_html(&self.language),
                "back_link" => escape_html(&self.back_link),
                "back_label" => escape_html(&self.back_label),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TemplateRenderer {
        TemplateRenderer::new(&SiteConfig::default())
    }

    #[test]
    fn test_render_post_fields() {
        let html = renderer().render_post(&PostPage {
            title: "Test",
            author: "A",
            date: "2024-05-01",
            content: "<p>Hello</p>\n",
        });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"ko\">"));
        assert!(html.contains("<title>Test - My Blog</title>"));
        assert!(html.contains("<h1 class=\"text-2xl font-bold text-gray-800\">Test</h1>"));
        assert!(html.contains("<i class=\"fas fa-user mr-2\"></i>A</span>"));
        assert!(html.contains("<i class=\"fas fa-calendar-alt mr-2\"></i>2024-05-01</span>"));
        assert!(html.contains("<a href=\"../index.html\""));
        assert!(html.contains("<p>Hello</p>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let html = renderer().render_post(&PostPage {
            content: "<p>x</p>",
            ..Default::default()
        });
        assert!(html.contains("<title> - My Blog</title>"));
        assert!(html.contains("<i class=\"fas fa-user mr-2\"></i></span>"));
        assert!(html.contains("<i class=\"fas fa-calendar-alt mr-2\"></i></span>"));
    }

    #[test]
    fn test_title_escaped_body_not() {
        let html = renderer().render_post(&PostPage {
            title: "<script>alert(1)</script>",
            author: "Tom & Jerry",
            date: "",
            content: "<em>kept</em>",
        });
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("<em>kept</em>"));
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let html = renderer().render_post(&PostPage {
            title: "{{ content }}",
            author: "",
            date: "",
            content: "BODY",
        });
        assert!(html.contains("<title>{{ content }} - My Blog</title>"));
        assert_eq!(html.matches("BODY").count(), 1);
    }

    #[test]
    fn test_site_values_from_config() {
        let config = SiteConfig {
            title: "Notes".to_string(),
            language: "en".to_string(),
            back_link: "/".to_string(),
            back_label: "Back".to_string(),
            ..Default::default()
        };
        let html = TemplateRenderer::new(&config).render_post(&PostPage::default());
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("<title> - Notes</title>"));
        assert!(html.contains("<a href=\"/\""));
        assert!(html.contains("</i>Back"));
    }
}
