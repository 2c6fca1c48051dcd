//! Remove generated files

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::loader::ContentLoader;
use crate::error::GenerateError;
use crate::Blog;

/// Delete every rendered page that has a Markdown source, and the manifest.
/// Returns the number of files removed.
pub fn run(blog: &Blog) -> Result<usize> {
    let mut removed = 0;

    if blog.posts_dir.exists() {
        for source in ContentLoader::new(blog).discover()? {
            if remove_if_exists(&source.with_extension("html"))? {
                removed += 1;
            }
        }
    }

    if remove_if_exists(&blog.manifest_path)? {
        removed += 1;
    }

    Ok(removed)
}

fn remove_if_exists(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| GenerateError::Remove {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!("Deleted: {:?}", path);
    Ok(true)
}
