//! `zenseo sitemap` – write the static sitemap, index and robots.txt.

use anyhow::{Context, Result};
use std::path::Path;
use zenseo_core::resolver::LocalePathResolver;
use zenseo_core::sitemap;

pub fn run_sitemap(
    resolver: &LocalePathResolver,
    routes_file: Option<&Path>,
    out_dir: &Path,
    dry_run: bool,
) -> Result<()> {
    let table = super::load_routes(routes_file)?;
    let output = sitemap::generate(&table, resolver, chrono::Utc::now());
    tracing::info!(urls = output.url_count, "sitemap generated");

    if dry_run {
        print!("{}", output.pages);
        return Ok(());
    }

    let written = sitemap::write_to_dir(&output, out_dir)
        .with_context(|| format!("write sitemap to {}", out_dir.display()))?;
    for path in &written {
        println!("wrote {}", path.display());
    }
    println!("{} URLs in {}", output.url_count, sitemap::PAGES_FILE);
    Ok(())
}
