//! Create a new post

use anyhow::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;

use crate::error::GenerateError;
use crate::Blog;

/// Write a front-matter scaffold to `<posts_dir>/<slug>.md`
pub fn create_post(blog: &Blog, title: &str, author: Option<&str>) -> Result<PathBuf> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let author = author.unwrap_or(&blog.config.author);

    let slug = slug::slugify(title);
    let slug = if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    };

    fs::create_dir_all(&blog.posts_dir).map_err(|e| GenerateError::CreatePost {
        path: blog.posts_dir.clone(),
        source: e,
    })?;

    let file_path = blog.posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        return Err(GenerateError::AlreadyExists(file_path).into());
    }

    let mut front_matter: IndexMap<&str, &str> = IndexMap::new();
    front_matter.insert("title", title);
    front_matter.insert("author", author);
    front_matter.insert("date", &today);
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&front_matter)?);

    fs::write(&file_path, content).map_err(|e| GenerateError::CreatePost {
        path: file_path.clone(),
        source: e,
    })?;

    println!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Post;
    use crate::helpers::parse_date_string;
    use tempfile::TempDir;

    #[test]
    fn test_create_post_scaffold() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let path = create_post(&blog, "Hello: World!", Some("Kim")).unwrap();
        assert_eq!(path, dir.path().join("posts/hello-world.md"));

        let content = fs::read_to_string(&path).unwrap();
        let post = Post::from_source(&path, &content);
        assert_eq!(post.title, "Hello: World!");
        assert_eq!(post.author, "Kim");
        let date = post.display_date();
        assert_eq!(date.len(), 10);
        assert!(parse_date_string(&date).is_some());
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        create_post(&blog, "Twice", None).unwrap();
        let err = create_post(&blog, "Twice", None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_untitled_slug() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let path = create_post(&blog, "!!!", None).unwrap();
        assert_eq!(path.file_name().unwrap(), "untitled.md");
    }
}
