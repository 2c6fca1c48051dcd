//! Post manifest - the summary list consumed by the landing page

use chrono::NaiveDateTime;
use serde::Serialize;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::error::{GenerateError, Result};

/// One manifest record per generated post
///
/// Field order here is the key order in the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub title: String,
    pub author: String,
    pub date: String,
    pub summary: String,
    pub url: String,
}

/// Accumulates summaries in discovery order and sorts them once at the end
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    entries: Vec<(Option<NaiveDateTime>, PostSummary)>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; `date_key` is the instant it is ordered by
    pub fn push(&mut self, date_key: Option<NaiveDateTime>, summary: PostSummary) {
        self.entries.push((date_key, summary));
    }

    /// Newest first; undated posts last; ties keep discovery order
    pub fn finish(mut self) -> Vec<PostSummary> {
        self.entries.sort_by(|a, b| sort_newest_first(&a.0, &b.0));
        self.entries.into_iter().map(|(_, s)| s).collect()
    }
}

pub(crate) fn sort_newest_first(
    a: &Option<NaiveDateTime>,
    b: &Option<NaiveDateTime>,
) -> Ordering {
    match (a, b) {
        (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Serialize the manifest with two-space indentation
pub fn to_json(posts: &[PostSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(posts)?)
}

/// Write the manifest, replacing any previous one
pub fn write_manifest(path: &Path, posts: &[PostSummary]) -> Result<()> {
    let json = to_json(posts)?;
    fs::write(path, json).map_err(|e| GenerateError::WriteManifest {
        path: path.to_path_buf(),
        source: e,
    })
}
