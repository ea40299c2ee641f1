//! CLI command handlers, one per file.

mod completions;
mod price;
mod routes;
mod sitemap;
mod urls;

pub use completions::{run_completions, run_man};
pub use price::run_price;
pub use routes::run_routes;
pub use sitemap::run_sitemap;
pub use urls::{run_alternate, run_canonical, run_hreflang, run_slash};

#[cfg(test)]
pub(crate) use routes::render_routes;
#[cfg(test)]
pub(crate) use urls::render_links;

use anyhow::{Context, Result};
use std::path::Path;
use zenseo_core::routes::RouteTable;

/// Route table from `path`, or the built-in one.
fn load_routes(path: Option<&Path>) -> Result<RouteTable> {
    match path {
        Some(p) => RouteTable::from_json_file(p)
            .with_context(|| format!("load route table {}", p.display())),
        None => Ok(RouteTable::default()),
    }
}
