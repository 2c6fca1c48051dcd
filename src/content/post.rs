//! Post model

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

use super::{FrontMatter, PostDate};

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// A blog post read from a Markdown source file
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title, empty when the front-matter has none
    pub title: String,

    /// Post author, empty when the front-matter has none
    pub author: String,

    /// Publication date as written in the front-matter
    pub date: Option<PostDate>,

    /// Raw markdown body (front-matter removed)
    pub raw: String,

    /// Full source file path
    pub source: PathBuf,

    /// Custom front-matter fields
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Post {
    /// Build a post from the contents of its source file
    pub fn from_source(source: &Path, content: &str) -> Self {
        let (fm, body) = FrontMatter::parse(content);
        Self {
            title: fm.title.unwrap_or_default(),
            author: fm.author.unwrap_or_default(),
            date: fm.date,
            raw: body.to_string(),
            source: source.to_path_buf(),
            extra: fm.extra,
        }
    }

    /// Date as shown on the page and in the manifest
    pub fn display_date(&self) -> String {
        self.date.as_ref().map(|d| d.to_string()).unwrap_or_default()
    }

    /// Source file name, e.g. `hello.md`
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name of the rendered page, e.g. `hello.html`
    pub fn output_name(&self) -> String {
        let stem = self
            .source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}.html", stem)
    }

    /// Rendered page path, next to the source
    pub fn output_path(&self) -> PathBuf {
        self.source.with_extension("html")
    }

    /// Plain-text teaser built from the raw body
    pub fn summary(&self, length: usize, suffix: &str) -> String {
        summarize(&self.raw, length, suffix)
    }
}

/// Take the first `length` characters of `raw`, turn line breaks into
/// spaces, trim, and append `suffix`.
///
/// The suffix is always appended, even when nothing was cut.
pub fn summarize(raw: &str, length: usize, suffix: &str) -> String {
    let head: String = raw.chars().take(length).collect();
    let flat = LINE_BREAK.replace_all(&head, " ");
    format!("{}{}", flat.trim(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source() {
        let post = Post::from_source(
            Path::new("posts/hello.md"),
            "---\ntitle: Hello\nauthor: Kim\ndate: 2024-03-01\n---\nBody text\n",
        );
        assert_eq!(post.title, "Hello");
        assert_eq!(post.author, "Kim");
        assert_eq!(post.display_date(), "2024-03-01");
        assert_eq!(post.raw, "Body text\n");
        assert_eq!(post.file_name(), "hello.md");
        assert_eq!(post.output_name(), "hello.html");
        assert_eq!(post.output_path(), PathBuf::from("posts/hello.html"));
    }

    #[test]
    fn test_missing_metadata_is_empty() {
        let post = Post::from_source(Path::new("posts/plain.md"), "Just text");
        assert_eq!(post.title, "");
        assert_eq!(post.author, "");
        assert_eq!(post.display_date(), "");
        assert_eq!(post.raw, "Just text");
    }

    #[test]
    fn test_summary_short_body_still_gets_suffix() {
        assert_eq!(summarize("Short.", 100, "..."), "Short....");
    }

    #[test]
    fn test_summary_collapses_newlines_and_trims() {
        assert_eq!(
            summarize("\nLine one\nLine two\r\nLine three\n", 100, "..."),
            "Line one Line two Line three..."
        );
    }

    #[test]
    fn test_summary_truncates_by_characters() {
        let body = "가".repeat(150);
        let summary = summarize(&body, 100, "...");
        assert_eq!(summary.chars().count(), 103);
        assert!(summary.ends_with("가..."));

        let body = "a".repeat(99) + "\nbcdef";
        assert_eq!(summarize(&body, 100, "..."), format!("{}...", "a".repeat(99)));
    }
}
