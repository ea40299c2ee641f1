//! Static sitemap generation.
//!
//! Produces a `<urlset>` with `xhtml:link` hreflang alternates for every
//! prerendered route, a `<sitemapindex>` pointing at it, and `robots.txt`.
//! Dynamic pages (events, products, posts) are left to the CMS sitemap.

use crate::error::{Error, Result};
use crate::locale::{HrefLangTag, Locale};
use crate::resolver::{HrefLang, LocalePathResolver};
use crate::routes::RouteTable;
use crate::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Search engines ignore URLs past this count in one file.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

pub const PAGES_FILE: &str = "sitemap-pages.xml";
pub const INDEX_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

const HOME_PRIORITY: f32 = 1.0;
const PAGE_PRIORITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFreq,
    pub priority: f32,
    pub alternates: Vec<HrefLang>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapRef {
    pub loc: String,
    pub lastmod: String,
}

/// Rendered file contents, ready to be written.
#[derive(Debug, Clone)]
pub struct SitemapOutput {
    pub pages: String,
    pub index: String,
    pub robots: String,
    pub url_count: usize,
}

/// `lastmod` format: RFC 3339 in UTC with milliseconds (`2025-01-31T12:00:00.000Z`).
pub fn format_lastmod(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One `<url>` per locale for every prerendered route, using its preferred
/// (first) alias pair. Each carries the en, pt-BR and x-default alternates,
/// and every alternate is itself a listed `<url>` pointing back. Other aliases
/// stay out of the sitemap. Duplicate locations are emitted once.
pub fn collect_urls(
    table: &RouteTable,
    resolver: &LocalePathResolver,
    lastmod: &str,
) -> Vec<SitemapUrl> {
    let mut routes_done = HashSet::new();
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for entry in table.entries(true) {
        if entry.route.is_dynamic() || !routes_done.insert(entry.route.key.as_str()) {
            continue;
        }
        let en = resolver.canonical_url(&entry.full_paths.en, Locale::En);
        let pt = resolver.canonical_url(&entry.full_paths.pt, Locale::PtBr);
        let alternates = vec![
            HrefLang::new(HrefLangTag::En, en.clone()),
            HrefLang::new(HrefLangTag::PtBr, pt.clone()),
            HrefLang::new(HrefLangTag::XDefault, en.clone()),
        ];
        let priority = if entry.route.is_index {
            HOME_PRIORITY
        } else {
            PAGE_PRIORITY
        };

        for loc in [en, pt] {
            if !seen.insert(loc.clone()) {
                continue;
            }
            urls.push(SitemapUrl {
                loc,
                lastmod: lastmod.to_string(),
                changefreq: ChangeFreq::Weekly,
                priority,
                alternates: alternates.clone(),
            });
        }
    }

    if urls.len() > MAX_URLS_PER_SITEMAP {
        tracing::warn!(
            count = urls.len(),
            limit = MAX_URLS_PER_SITEMAP,
            "sitemap exceeds the per-file URL limit; split it"
        );
    }
    urls
}

pub fn render_urlset(urls: &[SitemapUrl]) -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{SITEMAP_NS}\" xmlns:xhtml=\"{XHTML_NS}\">\n"
    );
    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(&url.lastmod)));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", url.changefreq.as_str()));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));
        for alt in &url.alternates {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
                alt.lang,
                escape_xml(&alt.url)
            ));
        }
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_index(sitemaps: &[SitemapRef]) -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sitemapindex xmlns=\"{SITEMAP_NS}\">\n"
    );
    for sitemap in sitemaps {
        xml.push_str("  <sitemap>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&sitemap.loc)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(&sitemap.lastmod)));
        xml.push_str("  </sitemap>\n");
    }
    xml.push_str("</sitemapindex>\n");
    xml
}

/// `robots.txt` allowing everything except the CMS internals, with the
/// sitemap index advertised.
pub fn render_robots(base_url: &str, generated_at: &str) -> String {
    format!(
        "# Generated by zenseo at {generated_at}\n\
         \n\
         User-agent: *\n\
         Allow: /\n\
         Disallow: /wp-admin/\n\
         Disallow: /wp-login.php\n\
         Disallow: /wp-includes/\n\
         Disallow: /wp-content/plugins/\n\
         Disallow: /?s=\n\
         Disallow: /search/\n\
         Allow: /wp-content/uploads/\n\
         Allow: /wp-admin/admin-ajax.php\n\
         \n\
         Sitemap: {base_url}/{INDEX_FILE}\n"
    )
}

/// Renders all three files for `table` at time `now`.
pub fn generate(
    table: &RouteTable,
    resolver: &LocalePathResolver,
    now: DateTime<Utc>,
) -> SitemapOutput {
    let lastmod = format_lastmod(now);
    let urls = collect_urls(table, resolver, &lastmod);
    let base = resolver.base_url();
    let index = render_index(&[SitemapRef {
        loc: format!("{base}/{PAGES_FILE}"),
        lastmod: lastmod.clone(),
    }]);

    SitemapOutput {
        pages: render_urlset(&urls),
        index,
        robots: render_robots(base, &lastmod),
        url_count: urls.len(),
    }
}

/// Writes the generated files into `dir` (created if missing). Each file is
/// written to a temp file in `dir` first and renamed into place.
pub fn write_to_dir(output: &SitemapOutput, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut written = Vec::with_capacity(3);
    for (name, contents) in [
        (PAGES_FILE, &output.pages),
        (INDEX_FILE, &output.index),
        (ROBOTS_FILE, &output.robots),
    ] {
        let path = dir.join(name);
        write_atomic(&path, contents.as_bytes())?;
        tracing::info!("wrote {} ({} bytes)", path.display(), contents.len());
        written.push(path);
    }
    Ok(written)
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(contents).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.flush().map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
