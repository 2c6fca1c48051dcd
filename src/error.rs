//! Error types for site generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating, cleaning or scaffolding posts.
///
/// Every variant that touches the filesystem carries the offending path so a
/// failed run can be traced back to a single file.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to read posts directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read post {path:?}: {source}")]
    ReadPost {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write page {path:?}: {source}")]
    WritePage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    SerializeManifest(#[from] serde_json::Error),

    #[error("Failed to write manifest {path:?}: {source}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {path:?}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Post already exists: {0:?}")]
    AlreadyExists(PathBuf),

    #[error("Failed to create post {path:?}: {source}")]
    CreatePost {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Path of the file this error is about, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GenerateError::ReadDir { path, .. }
            | GenerateError::ReadPost { path, .. }
            | GenerateError::WritePage { path, .. }
            | GenerateError::WriteManifest { path, .. }
            | GenerateError::Remove { path, .. }
            | GenerateError::CreatePost { path, .. }
            | GenerateError::AlreadyExists(path) => Some(path),
            GenerateError::SerializeManifest(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_offending_file() {
        let err = GenerateError::ReadPost {
            path: PathBuf::from("posts/broken.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
        };
        let message = err.to_string();
        assert!(message.contains("posts/broken.md"));
        assert!(message.contains("not utf-8"));
        assert_eq!(err.path(), Some(std::path::Path::new("posts/broken.md")));
    }
}
