//! CLI entry point for blogmark

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogmark")]
#[command(version)]
#[command(about = "Render Markdown posts to HTML pages and a JSON manifest", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every post and rewrite the manifest
    #[command(alias = "g")]
    Generate,

    /// Remove rendered pages and the manifest
    Clean,

    /// List posts in manifest order
    List,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Author recorded in the front-matter
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogmark=debug,info"
    } else {
        "blogmark=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let blog = blogmark::Blog::new(&base_dir)?;
            tracing::info!("Generating posts in {:?}...", blog.posts_dir);
            let report = blog.generate()?;
            if report.skipped.is_empty() {
                println!("Posts generated and updated successfully!");
            } else {
                println!(
                    "Generated {} posts; skipped {}:",
                    report.posts.len(),
                    report.skipped.len()
                );
                for path in &report.skipped {
                    println!("  {:?}", path);
                }
            }
        }

        Commands::Clean => {
            let blog = blogmark::Blog::new(&base_dir)?;
            tracing::info!("Cleaning generated files...");
            let removed = blog.clean()?;
            println!("Cleaned {} files.", removed);
        }

        Commands::List => {
            let blog = blogmark::Blog::new(&base_dir)?;
            blogmark::commands::list::run(&blog)?;
        }

        Commands::New { title, author } => {
            let blog = blogmark::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            blog.new_post(&title, author.as_deref())?;
        }

        Commands::Version => {
            println!("blogmark version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
