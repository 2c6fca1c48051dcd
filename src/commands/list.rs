//! List posts

use anyhow::Result;

use crate::content::Post;
use crate::generator::Generator;
use crate::Blog;

/// Print posts in manifest order
pub fn run(blog: &Blog) -> Result<()> {
    let posts = Generator::new(blog).collect_posts()?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {}", list_line(post));
    }

    Ok(())
}

/// `date - title [file]`, with dashes standing in for a missing date
fn list_line(post: &Post) -> String {
    let date = post.display_date();
    let date = if date.is_empty() {
        "----------"
    } else {
        date.as_str()
    };
    format!("{} - {} [{}]", date, post.title, post.file_name())
}
