//! `zenseo routes` – list the route table.

use anyhow::Result;
use std::path::Path;
use zenseo_core::routes::RouteTable;

pub fn run_routes(routes_file: Option<&Path>, prerender_only: bool) -> Result<()> {
    let table = super::load_routes(routes_file)?;
    print!("{}", render_routes(&table, prerender_only));
    Ok(())
}

pub(crate) fn render_routes(table: &RouteTable, prerender_only: bool) -> String {
    let entries = table.entries(prerender_only);
    let key_width = entries
        .iter()
        .map(|e| e.route.key.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for entry in &entries {
        let marker = if entry.route.is_dynamic() { " (dynamic)" } else { "" };
        out.push_str(&format!(
            "{:<key_width$}  {}  {}{}\n",
            entry.route.key, entry.full_paths.en, entry.full_paths.pt, marker
        ));
    }
    out
}
