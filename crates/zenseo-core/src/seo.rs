//! Page metadata resolution.
//!
//! A page's head tags come from three sources, in priority order: the CMS
//! SEO plugin payload, values the page passes explicitly, and site defaults.

use crate::config::SiteConfig;
use crate::locale::Locale;
use crate::resolver::HrefLang;
use crate::xml::escape_xml;
use serde::Deserialize;
use serde_json::{json, Value};

/// Longest description search engines display without cutting.
pub const MAX_DESCRIPTION_CHARS: usize = 160;

pub const ROBOTS_INDEX: &str = "index, follow, max-image-preview:large";
pub const ROBOTS_NOINDEX: &str = "noindex, nofollow";

/// `<meta>` entry as sent by the CMS SEO plugin.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetaTag {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
    pub content: String,
}

/// SEO payload attached to CMS REST responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PluginSeoData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta: Vec<MetaTag>,
    #[serde(default)]
    pub jsonld: Option<Value>,
}

impl PluginSeoData {
    fn by_name(&self, name: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.name.as_deref() == Some(name))
            .map(|m| m.content.as_str())
    }

    fn by_property(&self, property: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.property.as_deref() == Some(property))
            .map(|m| m.content.as_str())
    }
}

/// Values a page sets itself.
#[derive(Debug, Clone, Default)]
pub struct ManualSeo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    /// `og:type`; `website` when unset.
    pub page_type: Option<String>,
    pub href_lang: Vec<HrefLang>,
    pub schema: Option<Value>,
    pub noindex: bool,
    pub keywords: Option<String>,
    pub locale: Locale,
}

/// Fully resolved head metadata for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub image: String,
    pub page_type: String,
    pub robots: &'static str,
    pub keywords: Option<String>,
    pub og_locale: &'static str,
    pub twitter_handle: String,
    pub href_lang: Vec<HrefLang>,
    pub schema: Value,
}

impl PageMeta {
    /// Canonical and alternate `<link>` tags.
    pub fn link_tags(&self) -> Vec<String> {
        let mut tags = Vec::with_capacity(self.href_lang.len() + 1);
        tags.push(format!(
            r#"<link rel="canonical" href="{}" />"#,
            escape_xml(&self.canonical)
        ));
        tags.extend(self.href_lang.iter().map(HrefLang::to_link_tag));
        tags
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Cuts descriptions longer than [`MAX_DESCRIPTION_CHARS`] to 157 chars plus `...`.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        let mut cut: String = description.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
        cut.push_str("...");
        cut
    } else {
        description.to_string()
    }
}

/// Merges plugin data, manual values and site defaults into [`PageMeta`].
pub fn resolve_page_meta(
    plugin: Option<&PluginSeoData>,
    manual: &ManualSeo,
    config: &SiteConfig,
) -> PageMeta {
    let title = non_empty(plugin.map(|p| p.title.as_str()))
        .or(non_empty(manual.title.as_deref()))
        .unwrap_or(config.default_title.as_str())
        .to_string();

    let description = non_empty(plugin.and_then(|p| p.by_name("description")))
        .or(non_empty(manual.description.as_deref()))
        .unwrap_or(config.default_description.as_str());

    let canonical = non_empty(plugin.and_then(|p| p.by_property("og:url")))
        .or(non_empty(manual.url.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}/", config.base_url()));

    let image = non_empty(plugin.and_then(|p| p.by_property("og:image")))
        .or(non_empty(manual.image.as_deref()))
        .unwrap_or(config.og_image.as_str())
        .to_string();

    let schema = plugin
        .and_then(|p| p.jsonld.clone())
        .or_else(|| manual.schema.clone())
        .unwrap_or_else(|| {
            json!({
                "@context": "https://schema.org",
                "@type": "Person",
                "name": config.default_title,
                "url": canonical,
                "image": config.logo,
                "sameAs": config.social_profiles,
            })
        });

    PageMeta {
        title,
        description: truncate_description(description),
        canonical,
        image,
        page_type: manual.page_type.clone().unwrap_or_else(|| "website".to_string()),
        robots: if manual.noindex {
            ROBOTS_NOINDEX
        } else {
            ROBOTS_INDEX
        },
        keywords: manual.keywords.clone(),
        og_locale: manual.locale.og_locale(),
        twitter_handle: config.twitter_handle.clone(),
        href_lang: manual.href_lang.clone(),
        schema,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::HrefLangTag;

    fn plugin() -> PluginSeoData {
        serde_json::from_str(
            r#"{
                "title": "Events | Plugin",
                "meta": [
                    { "name": "description", "content": "From the plugin" },
                    { "property": "og:url", "content": "https://example.com/events/" },
                    { "property": "og:image", "content": "https://example.com/e.jpg" }
                ],
                "jsonld": { "@type": "Event" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn plugin_wins_over_manual() {
        let manual = ManualSeo {
            title: Some("Manual".into()),
            description: Some("Manual description".into()),
            url: Some("https://example.com/manual/".into()),
            ..ManualSeo::default()
        };
        let meta = resolve_page_meta(Some(&plugin()), &manual, &SiteConfig::default());
        assert_eq!(meta.title, "Events | Plugin");
        assert_eq!(meta.description, "From the plugin");
        assert_eq!(meta.canonical, "https://example.com/events/");
        assert_eq!(meta.image, "https://example.com/e.jpg");
        assert_eq!(meta.schema["@type"], "Event");
    }

    #[test]
    fn empty_plugin_title_falls_through() {
        let data = PluginSeoData::default();
        let manual = ManualSeo {
            title: Some("Manual".into()),
            ..ManualSeo::default()
        };
        let meta = resolve_page_meta(Some(&data), &manual, &SiteConfig::default());
        assert_eq!(meta.title, "Manual");
    }

    #[test]
    fn defaults_from_config() {
        let cfg = SiteConfig::default();
        let meta = resolve_page_meta(None, &ManualSeo::default(), &cfg);
        assert_eq!(meta.title, cfg.default_title);
        assert_eq!(meta.canonical, "https://djzeneyer.com/");
        assert_eq!(meta.image, cfg.og_image);
        assert_eq!(meta.page_type, "website");
        assert_eq!(meta.robots, ROBOTS_INDEX);
        assert_eq!(meta.og_locale, "en_US");
        assert_eq!(meta.schema["@type"], "Person");
        assert_eq!(meta.schema["url"], "https://djzeneyer.com/");
        assert_eq!(meta.schema["sameAs"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn noindex_and_locale() {
        let manual = ManualSeo {
            noindex: true,
            locale: Locale::PtBr,
            ..ManualSeo::default()
        };
        let meta = resolve_page_meta(None, &manual, &SiteConfig::default());
        assert_eq!(meta.robots, ROBOTS_NOINDEX);
        assert_eq!(meta.og_locale, "pt_BR");
    }

    #[test]
    fn truncation() {
        let short = "a".repeat(160);
        assert_eq!(truncate_description(&short), short);
        let long = "é".repeat(200);
        let cut = truncate_description(&long);
        assert_eq!(cut.chars().count(), 160);
        assert!(cut.ends_with("é..."));
    }

    #[test]
    fn link_tags_start_with_canonical() {
        let manual = ManualSeo {
            url: Some("https://example.com/about/".into()),
            href_lang: vec![
                HrefLang::new(HrefLangTag::En, "https://example.com/about/"),
                HrefLang::new(HrefLangTag::PtBr, "https://example.com/pt/sobre/"),
            ],
            ..ManualSeo::default()
        };
        let tags = resolve_page_meta(None, &manual, &SiteConfig::default()).link_tags();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0], r#"<link rel="canonical" href="https://example.com/about/" />"#);
        assert!(tags[2].contains(r#"hreflang="pt-BR""#));
    }
}
