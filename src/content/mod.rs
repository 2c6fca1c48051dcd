//! Content module - handles posts and content processing

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, PostDate};
pub use markdown::MarkdownRenderer;
pub use post::{summarize, Post};
