//! Markdown rendering

use pulldown_cmark::{html, Event, Options, Parser};

/// Markdown renderer configured for GFM-style blog posts
///
/// Tables, strikethrough and task lists are enabled; smart punctuation is
/// not. Every soft line break is emitted as a hard break, so a single newline
/// in the source becomes `<br />`. Raw HTML passes through untouched.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // No YAML metadata blocks: front-matter is split off beforehand
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            _ => event,
        });

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
