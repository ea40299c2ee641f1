//! `zenseo slash|alternate|canonical|hreflang` – URL derivation for one path.

use anyhow::Result;
use zenseo_core::locale::Locale;
use zenseo_core::resolver::{HrefLang, LocalePathResolver};
use zenseo_core::routes::RouteTable;
use zenseo_core::url_model::ensure_trailing_slash;

pub fn run_slash(path: &str) -> Result<()> {
    println!("{}", ensure_trailing_slash(path));
    Ok(())
}

pub fn run_alternate(resolver: &LocalePathResolver, path: &str, use_routes: bool) -> Result<()> {
    let alternate = if use_routes {
        let target = resolver.locale_of(path).toggle();
        RouteTable::default()
            .counterpart(path, target)
            .unwrap_or_else(|| resolver.alternate_path(path))
    } else {
        resolver.alternate_path(path)
    };
    println!("{alternate}");
    Ok(())
}

pub fn run_canonical(resolver: &LocalePathResolver, path: &str, locale: Locale) -> Result<()> {
    println!("{}", resolver.canonical_url(path, locale));
    Ok(())
}

pub fn run_hreflang(
    resolver: &LocalePathResolver,
    path: &str,
    prefix_only: bool,
    html: bool,
) -> Result<()> {
    let links = if prefix_only {
        resolver.hreflang_links(path)
    } else {
        RouteTable::default().hreflang_links(resolver, path)
    };
    print!("{}", render_links(&links, html));
    Ok(())
}

pub(crate) fn render_links(links: &[HrefLang], html: bool) -> String {
    links
        .iter()
        .map(|l| {
            if html {
                format!("{}\n", l.to_link_tag())
            } else {
                format!("{:<10} {}\n", l.lang.as_str(), l.url)
            }
        })
        .collect()
}
