//! Localized route table.
//!
//! Each page has an English and a Portuguese slug (possibly several aliases).
//! The table drives the language switcher for localized slugs and the static
//! sitemap.

use crate::error::{Error, Result};
use crate::locale::{HrefLangTag, Locale};
use crate::resolver::{alternate_path, locale_of, HrefLang, LocalePathResolver};
use crate::url_model::{normalize_path, strip_locale_prefix};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One slug or a list of aliases; the first alias is the preferred one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    One(String),
    Many(Vec<String>),
}

impl PathSpec {
    pub fn as_slice(&self) -> &[String] {
        match self {
            PathSpec::One(p) => std::slice::from_ref(p),
            PathSpec::Many(ps) => ps,
        }
    }
}

impl From<&str> for PathSpec {
    fn from(p: &str) -> Self {
        PathSpec::One(p.to_string())
    }
}

impl From<&[&str]> for PathSpec {
    fn from(ps: &[&str]) -> Self {
        PathSpec::Many(ps.iter().map(|p| p.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedPaths {
    pub en: PathSpec,
    pub pt: PathSpec,
}

fn default_true() -> bool {
    true
}

/// A page of the site with its localized slugs (relative, no leading slash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDef {
    pub key: String,
    pub paths: LocalizedPaths,
    /// False for dynamic detail pages that are not prerendered or listed.
    #[serde(default = "default_true")]
    pub prerender: bool,
    #[serde(default)]
    pub is_index: bool,
    /// Route also owns everything below it (`shop/*`).
    #[serde(default)]
    pub has_wildcard: bool,
}

/// English/Portuguese slugs (or full paths) of one page variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePair {
    pub en: String,
    pub pt: String,
}

impl RoutePair {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::PtBr => &self.pt,
        }
    }
}

/// A route alias expanded to slugs and full site-relative paths.
#[derive(Debug, Clone)]
pub struct RouteEntry<'a> {
    pub route: &'a RouteDef,
    pub paths: RoutePair,
    pub full_paths: RoutePair,
}

impl RouteDef {
    fn new(key: &str, en: impl Into<PathSpec>, pt: impl Into<PathSpec>) -> Self {
        Self {
            key: key.to_string(),
            paths: LocalizedPaths {
                en: en.into(),
                pt: pt.into(),
            },
            prerender: true,
            is_index: false,
            has_wildcard: false,
        }
    }

    fn dynamic(mut self) -> Self {
        self.prerender = false;
        self
    }

    pub fn localized_paths(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::En => self.paths.en.as_slice(),
            Locale::PtBr => self.paths.pt.as_slice(),
        }
    }

    /// True if any slug has a `:param` segment.
    pub fn is_dynamic(&self) -> bool {
        Locale::ALL
            .iter()
            .flat_map(|l| self.localized_paths(*l))
            .any(|p| p.contains(':'))
    }

    /// English aliases paired with Portuguese ones by position. When there are
    /// fewer Portuguese aliases, the last one is reused.
    pub fn localized_pairs(&self) -> Vec<RoutePair> {
        let pt_paths = self.localized_paths(Locale::PtBr);
        let max_pt = pt_paths.len().saturating_sub(1);
        self.localized_paths(Locale::En)
            .iter()
            .enumerate()
            .map(|(i, en)| RoutePair {
                en: en.clone(),
                pt: pt_paths.get(i.min(max_pt)).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

/// Site-relative path for a slug: `""` → `/` or `/pt/`, `about` → `/about` or `/pt/about`.
pub fn build_full_path(slug: &str, locale: Locale) -> String {
    match (slug.is_empty(), locale) {
        (true, Locale::En) => "/".to_string(),
        (true, Locale::PtBr) => "/pt/".to_string(),
        (false, locale) => format!("{}/{slug}", locale.path_prefix()),
    }
}

/// Rewrites detail-page paths that are not in the table by slug: events,
/// music and shop products. `path` has no locale prefix. Returns `None` for
/// anything else.
pub fn dynamic_mapping(path: &str, target: Locale) -> Option<String> {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let (en_base, pt_base, rest) = match parts.as_slice() {
        [] => return None,
        ["events" | "eventos", rest @ ..] => ("/events", "/pt/eventos", rest),
        ["music" | "musica", rest @ ..] => ("/music", "/pt/musica", rest),
        ["shop", "product", rest @ ..] | ["loja", "produto", rest @ ..] => {
            ("/shop/product", "/pt/loja/produto", rest)
        }
        _ => return None,
    };
    let base = match target {
        Locale::En => en_base,
        Locale::PtBr => pt_base,
    };
    if rest.is_empty() {
        Some(base.to_string())
    } else {
        Some(format!("{base}/{}", rest.join("/")))
    }
}

#[derive(Deserialize)]
struct RouteFile {
    routes: Vec<RouteDef>,
}

/// The site's pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl Default for RouteTable {
    fn default() -> Self {
        let mut home = RouteDef::new("home", "", "");
        home.is_index = true;
        let mut shop = RouteDef::new("shop", "shop", "loja");
        shop.has_wildcard = true;

        Self::new(vec![
            home,
            RouteDef::new("about", "about", "sobre"),
            RouteDef::new("events", "events", "eventos"),
            RouteDef::new("events-detail", "events/:id", "eventos/:id").dynamic(),
            RouteDef::new("music", "music", "musica"),
            RouteDef::new("music-detail", "music/:slug", "musica/:slug").dynamic(),
            RouteDef::new("news", "news", "noticias"),
            RouteDef::new("news-detail", "news/:slug", "noticias/:slug").dynamic(),
            RouteDef::new(
                "zen-tribe",
                &["zentribe", "tribe", "zen-tribe"][..],
                &["tribo-zen", "tribo"][..],
            ),
            RouteDef::new("press-kit", "work-with-me", "trabalhe-comigo"),
            RouteDef::new("shop-product", "shop/product/:slug", "loja/produto/:slug").dynamic(),
            shop,
            RouteDef::new("cart", "cart", "carrinho"),
            RouteDef::new("checkout", "checkout", "finalizar-compra"),
            RouteDef::new("tickets", "tickets", "ingressos"),
            RouteDef::new("tickets-checkout", "tickets-checkout", "finalizar-ingressos"),
            RouteDef::new("dashboard", "dashboard", "painel"),
            RouteDef::new("my-account", "my-account", "minha-conta"),
            RouteDef::new("faq", "faq", "perguntas-frequentes"),
            RouteDef::new("philosophy", "my-philosophy", "minha-filosofia"),
            RouteDef::new("media", "media", "na-midia"),
            RouteDef::new("support-artist", "support-the-artist", "apoie-o-artista"),
            RouteDef::new("privacy-policy", "privacy-policy", "politica-de-privacidade"),
            RouteDef::new("return-policy", "return-policy", "reembolso"),
            RouteDef::new("terms", "terms", "termos"),
            RouteDef::new("code-of-conduct", "conduct", "regras-de-conduta"),
        ])
    }
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    /// Parses `{"routes": [...]}` with the same shape as [`RouteDef`].
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let file: RouteFile = serde_json::from_str(json)?;
        Ok(Self::new(file.routes))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let table = Self::from_json_str(&data).map_err(|source| Error::RouteFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(routes = table.routes.len(), "loaded route table from {}", path.display());
        Ok(table)
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn get(&self, key: &str) -> Option<&RouteDef> {
        self.routes.iter().find(|r| r.key == key)
    }

    /// Every alias pair of every route, optionally only prerendered ones.
    pub fn entries(&self, prerender_only: bool) -> Vec<RouteEntry<'_>> {
        self.routes
            .iter()
            .filter(|r| !prerender_only || r.prerender)
            .flat_map(|route| {
                route.localized_pairs().into_iter().map(move |paths| {
                    let full_paths = RoutePair {
                        en: build_full_path(&paths.en, Locale::En),
                        pt: build_full_path(&paths.pt, Locale::PtBr),
                    };
                    RouteEntry {
                        route,
                        paths,
                        full_paths,
                    }
                })
            })
            .collect()
    }

    /// Translates a concrete site path into `target`, following localized
    /// slugs (`/about` ↔ `/pt/sobre`). Falls back to [`dynamic_mapping`] for
    /// detail pages, then to wildcard routes (`/shop/x` ↔ `/pt/loja/x`).
    /// Query and fragment are dropped.
    pub fn counterpart(&self, path: &str, target: Locale) -> Option<String> {
        let normalized = normalize_path(path);
        let source = locale_of(&normalized);
        let slug = strip_locale_prefix(&normalized).trim_matches('/');

        let found = self
            .routes
            .iter()
            .filter(|r| !r.is_dynamic())
            .flat_map(|r| r.localized_pairs())
            .find(|pair| pair.get(source) == slug);

        match found {
            Some(pair) => Some(build_full_path(pair.get(target), target)),
            None => dynamic_mapping(slug, target)
                .or_else(|| self.wildcard_counterpart(slug, source, target)),
        }
    }

    fn wildcard_counterpart(&self, slug: &str, source: Locale, target: Locale) -> Option<String> {
        self.routes
            .iter()
            .filter(|r| r.has_wildcard)
            .flat_map(|r| r.localized_pairs())
            .find_map(|pair| {
                let owner = pair.get(source);
                let rest = slug.strip_prefix(owner)?.strip_prefix('/')?;
                if owner.is_empty() || rest.is_empty() {
                    return None;
                }
                let base = build_full_path(pair.get(target), target);
                Some(format!("{}/{rest}", base.trim_end_matches('/')))
            })
    }

    /// Like [`LocalePathResolver::hreflang_links`], but the other locale's URL
    /// follows the localized slug when the table knows the page. Unknown
    /// paths fall back to toggling the `/pt` prefix.
    ///
    /// The links name the page, so query and fragment are dropped from every
    /// entry.
    pub fn hreflang_links(&self, resolver: &LocalePathResolver, path: &str) -> Vec<HrefLang> {
        let page = normalize_path(path);
        let source = locale_of(&page);
        let url_in = |target: Locale| {
            let localized = if target == source {
                page.clone()
            } else {
                self.counterpart(&page, target)
                    .unwrap_or_else(|| alternate_path(&page))
            };
            resolver.canonical_url(&localized, target)
        };
        let en = url_in(Locale::En);
        vec![
            HrefLang::new(HrefLangTag::En, en.clone()),
            HrefLang::new(HrefLangTag::PtBr, url_in(Locale::PtBr)),
            HrefLang::new(HrefLangTag::XDefault, en),
        ]
    }
}
