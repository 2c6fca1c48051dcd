//! blogmark: a small static blog generator
//!
//! Markdown posts with YAML front-matter are rendered to standalone HTML
//! pages next to their sources, and a JSON manifest of post summaries is
//! written for a landing page to consume.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Component, Path, PathBuf};

pub use error::GenerateError;
pub use generator::{GenerateReport, PostSummary};

/// The main blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding Markdown sources and their rendered pages
    pub posts_dir: PathBuf,
    /// Manifest file path
    pub manifest_path: PathBuf,
}

impl Blog {
    /// Create a new blog from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let manifest_path = base_dir.join(&config.manifest);

        Self {
            config,
            base_dir,
            posts_dir,
            manifest_path,
        }
    }

    /// Regenerate every post page and the manifest
    pub fn generate(&self) -> Result<GenerateReport> {
        commands::generate::run(self)
    }

    /// Remove generated pages and the manifest
    pub fn clean(&self) -> Result<usize> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, author: Option<&str>) -> Result<PathBuf> {
        commands::new::create_post(self, title, author)
    }

    /// Manifest URL of a rendered page, relative to the base directory
    ///
    /// A posts directory outside the base keeps its absolute path.
    pub fn post_url(&self, output_name: &str) -> String {
        let dir = self
            .posts_dir
            .strip_prefix(&self.base_dir)
            .unwrap_or(&self.posts_dir);

        let mut url = if dir.has_root() {
            String::new()
        } else {
            String::from(".")
        };
        for component in dir.components() {
            match component {
                Component::Normal(part) => {
                    url.push('/');
                    url.push_str(&part.to_string_lossy());
                }
                Component::ParentDir => url.push_str("/.."),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
        url.push('/');
        url.push_str(output_name);
        url
    }
}
