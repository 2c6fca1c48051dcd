//! Generate post pages and the manifest

use anyhow::Result;

use crate::generator::{GenerateReport, Generator};
use crate::Blog;

/// Generate the site
pub fn run(blog: &Blog) -> Result<GenerateReport> {
    let start = std::time::Instant::now();

    let report = Generator::new(blog).generate()?;

    if !report.skipped.is_empty() {
        tracing::warn!("{} posts were skipped", report.skipped.len());
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}
