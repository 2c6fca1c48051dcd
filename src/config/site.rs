//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// What to do when a single post cannot be read or written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing post; the manifest is not written
    #[default]
    Abort,
    /// Log the failure, leave the post out of the manifest and keep going
    Skip,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,
    pub author: String,

    // Directory
    pub posts_dir: String,
    pub manifest: String,
    pub markdown_extensions: Vec<String>,

    // Summary
    pub summary_length: usize,
    pub summary_suffix: String,

    // Page
    pub back_link: String,
    pub back_label: String,

    // Generation
    pub on_error: ErrorPolicy,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            language: "ko".to_string(),
            author: String::new(),

            posts_dir: "posts".to_string(),
            manifest: "posts.json".to_string(),
            markdown_extensions: vec!["md".to_string()],

            summary_length: 100,
            summary_suffix: "...".to_string(),

            back_link: "../index.html".to_string(),
            back_label: "뒤로가기".to_string(),

            on_error: ErrorPolicy::Abort,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Check whether a file extension marks a Markdown source
    pub fn is_markdown_extension(&self, ext: &str) -> bool {
        self.markdown_extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.manifest, "posts.json");
        assert_eq!(config.summary_length, 100);
        assert_eq!(config.summary_suffix, "...");
        assert_eq!(config.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Field Notes
language: en
summary_length: 40
on_error: skip
markdown_extensions: [md, markdown]
analytics: UA-1234
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Field Notes");
        assert_eq!(config.language, "en");
        assert_eq!(config.summary_length, 40);
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.posts_dir, "posts");
        assert!(config.extra.contains_key("analytics"));
    }

    #[test]
    fn test_markdown_extension_match() {
        let config = SiteConfig {
            markdown_extensions: vec!["md".to_string(), ".markdown".to_string()],
            ..Default::default()
        };
        assert!(config.is_markdown_extension("md"));
        assert!(config.is_markdown_extension("MD"));
        assert!(config.is_markdown_extension("markdown"));
        assert!(!config.is_markdown_extension("html"));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "My Blog");
    }
}
