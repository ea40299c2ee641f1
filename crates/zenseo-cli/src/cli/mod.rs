//! CLI for zenseo.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zenseo_core::config::{self, SiteConfig};
use zenseo_core::locale::Locale;
use zenseo_core::resolver::LocalePathResolver;

use commands::{
    run_alternate, run_canonical, run_completions, run_hreflang, run_man, run_price, run_routes,
    run_sitemap, run_slash,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "zenseo")]
#[command(about = "zenseo: canonical/hreflang URLs and static sitemaps for a bilingual site", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/zenseo/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log detail (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print a path with the site's trailing-slash rule applied.
    Slash {
        /// Site-relative path or absolute URL.
        path: String,
    },

    /// Print the other-language path (adds or removes the /pt prefix).
    Alternate {
        /// Current site-relative path.
        path: String,
        /// Translate localized slugs through the route table (/about -> /pt/sobre).
        #[arg(long)]
        routes: bool,
    },

    /// Print the absolute canonical URL of a path in a locale.
    Canonical {
        path: String,
        /// en or pt-BR.
        #[arg(long, default_value = "en")]
        locale: Locale,
    },

    /// Print the en / pt-BR / x-default URLs for a path.
    Hreflang {
        path: String,
        /// Only toggle the /pt prefix; ignore localized slugs.
        #[arg(long)]
        prefix_only: bool,
        /// Print <link> tags instead of "lang url" lines.
        #[arg(long)]
        html: bool,
    },

    /// List the route table.
    Routes {
        /// Skip dynamic routes that are not prerendered.
        #[arg(long)]
        prerender_only: bool,
        /// Route table JSON file (default: built-in table).
        #[arg(long, value_name = "FILE")]
        routes: Option<PathBuf>,
    },

    /// Generate sitemap-pages.xml, sitemap.xml and robots.txt.
    Sitemap {
        /// Output directory.
        #[arg(long, default_value = "public", value_name = "DIR")]
        out: PathBuf,
        /// Route table JSON file (default: built-in table).
        #[arg(long, value_name = "FILE")]
        routes: Option<PathBuf>,
        /// Print the urlset to stdout instead of writing files.
        #[arg(long)]
        dry_run: bool,
    },

    /// Format a price as Brazilian reais.
    Price {
        /// Amount or preformatted price text.
        value: String,
        #[arg(long, default_value = "pt-BR")]
        locale: Locale,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page.
    Man,
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p).with_context(|| format!("load config {}", p.display()))?,
        None => config::load_or_init().context("load config")?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cli = self;

        // These need neither config nor resolver.
        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            CliCommand::Slash { path } => return run_slash(path),
            CliCommand::Price { value, locale } => return run_price(value, *locale),
            _ => {}
        }

        let cfg = load_config(cli.config.as_ref())?;
        let resolver = LocalePathResolver::new(cfg);

        match cli.command {
            CliCommand::Alternate { path, routes } => run_alternate(&resolver, &path, routes)?,
            CliCommand::Canonical { path, locale } => run_canonical(&resolver, &path, locale)?,
            CliCommand::Hreflang {
                path,
                prefix_only,
                html,
            } => run_hreflang(&resolver, &path, prefix_only, html)?,
            CliCommand::Routes {
                prerender_only,
                routes,
            } => run_routes(routes.as_deref(), prerender_only)?,
            CliCommand::Sitemap {
                out,
                routes,
                dry_run,
            } => run_sitemap(&resolver, routes.as_deref(), &out, dry_run)?,
            CliCommand::Completions { .. }
            | CliCommand::Man
            | CliCommand::Slash { .. }
            | CliCommand::Price { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
