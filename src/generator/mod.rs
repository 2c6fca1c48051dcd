//! Generator module - renders post pages and the post manifest

mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

pub use manifest::{to_json, write_manifest, ManifestBuilder, PostSummary};

use manifest::sort_newest_first;

use crate::config::ErrorPolicy;
use crate::content::loader::ContentLoader;
use crate::content::{MarkdownRenderer, Post, PostDate};
use crate::error::{GenerateError, Result};
use crate::templates::{PostPage, TemplateRenderer};
use crate::Blog;

/// Outcome of a generation run
#[derive(Debug)]
pub struct GenerateReport {
    /// Manifest records, in the order they were written
    pub posts: Vec<PostSummary>,
    /// Sources left out because they failed under the `skip` policy
    pub skipped: Vec<PathBuf>,
    /// Where the manifest was written
    pub manifest_path: PathBuf,
}

/// Static site generator for a posts directory
pub struct Generator<'a> {
    blog: &'a Blog,
    loader: ContentLoader<'a>,
    markdown: MarkdownRenderer,
    templates: TemplateRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            loader: ContentLoader::new(blog),
            markdown: MarkdownRenderer::new(),
            templates: TemplateRenderer::new(&blog.config),
        }
    }

    /// Render every post and write the manifest
    pub fn generate(&self) -> Result<GenerateReport> {
        let sources = self.loader.discover()?;
        let mut manifest = ManifestBuilder::new();
        let mut skipped = Vec::new();

        for source in &sources {
            match self.generate_post(source) {
                Ok(post) => manifest.push(sort_key(&post), self.summarize(&post)),
                Err(e) => match self.blog.config.on_error {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::Skip => {
                        tracing::warn!("Skipping {:?}: {}", source, e);
                        skipped.push(source.clone());
                    }
                },
            }
        }

        let posts = manifest.finish();
        write_manifest(&self.blog.manifest_path, &posts)?;
        tracing::info!(
            "Generated {} posts and {:?}",
            posts.len(),
            self.blog.manifest_path
        );

        Ok(GenerateReport {
            posts,
            skipped,
            manifest_path: self.blog.manifest_path.clone(),
        })
    }

    /// Load posts in manifest order without writing anything
    pub fn collect_posts(&self) -> Result<Vec<Post>> {
        let mut posts = self.loader.load_posts()?;
        posts.sort_by(|a, b| sort_newest_first(&sort_key(a), &sort_key(b)));
        Ok(posts)
    }

    /// Render one source to its HTML page
    fn generate_post(&self, source: &Path) -> Result<Post> {
        let post = self.loader.load_post(source)?;
        let html = self.render_page(&post);

        let output_path = post.output_path();
        fs::write(&output_path, html).map_err(|e| GenerateError::WritePage {
            path: output_path.clone(),
            source: e,
        })?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(post)
    }

    /// Compose the complete page for a post
    pub fn render_page(&self, post: &Post) -> String {
        let content = self.markdown.render(&post.raw);
        let date = post.display_date();
        self.templates.render_post(&PostPage {
            title: &post.title,
            author: &post.author,
            date: &date,
            content: &content,
        })
    }

    /// Build the manifest record for a post
    pub fn summarize(&self, post: &Post) -> PostSummary {
        let config = &self.blog.config;
        PostSummary {
            title: post.title.clone(),
            author: post.author.clone(),
            date: post.display_date(),
            summary: post.summary(config.summary_length, &config.summary_suffix),
            url: self.blog.post_url(&post.output_name()),
        }
    }
}

fn sort_key(post: &Post) -> Option<chrono::NaiveDateTime> {
    post.date.as_ref().and_then(PostDate::sort_key)
}
