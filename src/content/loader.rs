//! Content loader - loads posts from the posts directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::Post;
use crate::error::{GenerateError, Result};
use crate::Blog;

/// Loads content from the posts directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// List the Markdown sources in the posts directory, sorted by file name
    ///
    /// Only the top level is scanned. A missing or unreadable directory is
    /// an error.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let posts_dir = &self.blog.posts_dir;
        let mut sources = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| GenerateError::ReadDir {
                path: posts_dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && self.is_markdown_file(path) {
                sources.push(path.to_path_buf());
            }
        }

        tracing::debug!("Found {} sources in {:?}", sources.len(), posts_dir);
        Ok(sources)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path).map_err(|e| GenerateError::ReadPost {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Post::from_source(path, &content))
    }

    /// Load every post, skipping unreadable files with a warning
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();
        for path in self.discover()? {
            match self.load_post(&path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }
        Ok(posts)
    }

    /// Check if a file is a markdown file
    fn is_markdown_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.blog.config.is_markdown_extension(e))
            .unwrap_or(false)
    }
}
