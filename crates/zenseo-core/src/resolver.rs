//! Canonical, alternate-language and x-default URL derivation.
//!
//! All functions are pure: output depends only on the path, the locale and
//! the site base URL.

use crate::config::SiteConfig;
use crate::locale::{HrefLangTag, Locale};
use crate::url_model::{
    ensure_trailing_slash, has_locale_prefix, strip_legacy_locale_prefix, strip_locale_prefix,
    LOCALE_PREFIX,
};
use crate::xml::escape_xml;

/// One `<link rel="alternate" hreflang=...>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefLang {
    pub lang: HrefLangTag,
    pub url: String,
}

impl HrefLang {
    pub fn new(lang: HrefLangTag, url: impl Into<String>) -> Self {
        Self {
            lang,
            url: url.into(),
        }
    }

    pub fn to_link_tag(&self) -> String {
        format!(
            r#"<link rel="alternate" hreflang="{}" href="{}" />"#,
            self.lang,
            escape_xml(&self.url)
        )
    }
}

/// English, Portuguese and x-default URLs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrlSet {
    /// English URL (`hreflang="en"`).
    pub canonical: String,
    /// Portuguese URL (`hreflang="pt-BR"`).
    pub alternate: String,
    /// Fallback URL (`hreflang="x-default"`); always the English one.
    pub x_default: String,
}

impl ResolvedUrlSet {
    /// Entries in the order they are emitted: en, pt-BR, x-default.
    pub fn hreflang(&self) -> Vec<HrefLang> {
        vec![
            HrefLang::new(HrefLangTag::En, self.canonical.clone()),
            HrefLang::new(HrefLangTag::PtBr, self.alternate.clone()),
            HrefLang::new(HrefLangTag::XDefault, self.x_default.clone()),
        ]
    }
}

/// Locale a path is served in: Portuguese iff it carries the `/pt` segment.
pub fn locale_of(path: &str) -> Locale {
    if has_locale_prefix(path) {
        Locale::PtBr
    } else {
        Locale::En
    }
}

/// Language-switcher target for `current`: drops the `/pt` segment when
/// present, adds it otherwise.
///
/// Toggling twice gives back any path that starts with `/`, except that the
/// Portuguese root `/pt` comes back as `/pt/`.
pub fn alternate_path(current: &str) -> String {
    if has_locale_prefix(current) {
        let rest = strip_locale_prefix(current);
        if rest.is_empty() || rest.starts_with('?') || rest.starts_with('#') {
            format!("/{rest}")
        } else {
            rest.to_string()
        }
    } else if current.is_empty() || current == "/" {
        format!("{LOCALE_PREFIX}/")
    } else if current.starts_with('/') {
        format!("{LOCALE_PREFIX}{current}")
    } else {
        format!("{LOCALE_PREFIX}/{current}")
    }
}

/// hreflang URL set for `path` under `base_url` (no trailing slash).
///
/// The path may carry the `/pt` prefix; the result is the same either way.
#[deprecated(note = "use LocalePathResolver::hreflang_links, which derives the set from the current path")]
pub fn resolve_url_set(path: &str, base_url: &str) -> ResolvedUrlSet {
    let stripped = strip_legacy_locale_prefix(path);
    let stripped = stripped.strip_prefix('/').unwrap_or(stripped);
    let clean = stripped.strip_suffix('/').unwrap_or(stripped);
    let suffix = if clean.is_empty() || clean == "/" {
        String::new()
    } else {
        format!("/{clean}/")
    };

    let en = ensure_trailing_slash(&format!("{base_url}{suffix}"));
    let pt = ensure_trailing_slash(&format!("{base_url}{LOCALE_PREFIX}{suffix}"));

    ResolvedUrlSet {
        canonical: en.clone(),
        alternate: pt,
        x_default: en,
    }
}

/// Derives SEO URLs for the site described by a [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct LocalePathResolver {
    config: SiteConfig,
}

impl LocalePathResolver {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn locale_of(&self, path: &str) -> Locale {
        locale_of(path)
    }

    pub fn alternate_path(&self, current: &str) -> String {
        alternate_path(current)
    }

    /// Site-relative path of `path` in `locale`, slash-normalized.
    ///
    /// `path` may already carry a locale prefix; it is replaced. Only the
    /// part before `?`/`#` is normalized, so `/events/?page=2` keeps its
    /// single slash.
    pub fn localized_path(&self, path: &str, locale: Locale) -> String {
        let bare = strip_locale_prefix(path);
        let split = bare.find(|c: char| c == '?' || c == '#').unwrap_or(bare.len());
        let (base, suffix) = bare.split_at(split);
        let mut localized = format!(
            "{}/{}",
            locale.path_prefix(),
            base.trim_start_matches('/')
        );
        if !localized.ends_with('/') {
            localized = ensure_trailing_slash(&localized);
        }
        localized.push_str(suffix);
        localized
    }

    /// Absolute URL of `path` in `locale`.
    pub fn canonical_url(&self, path: &str, locale: Locale) -> String {
        format!("{}{}", self.base_url(), self.localized_path(path, locale))
    }

    /// en, pt-BR and x-default links for the page at `path`.
    pub fn hreflang_links(&self, path: &str) -> Vec<HrefLang> {
        self.url_set(path).hreflang()
    }

    /// Same data as [`Self::hreflang_links`] as a struct.
    pub fn url_set(&self, path: &str) -> ResolvedUrlSet {
        let en = self.canonical_url(path, Locale::En);
        let pt = self.canonical_url(path, Locale::PtBr);
        tracing::trace!(path, en = %en, pt = %pt, "resolved url set");
        ResolvedUrlSet {
            canonical: en.clone(),
            alternate: pt,
            x_default: en,
        }
    }

    /// Legacy helper bound to this site's base URL.
    #[deprecated(note = "use LocalePathResolver::hreflang_links")]
    #[allow(deprecated)]
    pub fn resolve_url_set(&self, path: &str) -> ResolvedUrlSet {
        resolve_url_set(path, self.base_url())
    }
}
