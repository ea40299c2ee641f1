//! Site locales and hreflang tags.
//!
//! The site is served in English at the root and in Brazilian Portuguese under
//! the `/pt` path segment. English is the fallback locale and the `x-default`
//! target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A locale the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt")]
    PtBr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::PtBr];

    /// Lenient parse: `en`, `en-US`, `pt`, `pt-BR`, `pt_br`, ... (case-insensitive).
    pub fn parse(raw: &str) -> Option<Locale> {
        let lang = raw
            .trim()
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "pt" => Some(Locale::PtBr),
            _ => None,
        }
    }

    /// Short code used in route tables and the URL prefix.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt",
        }
    }

    /// BCP 47 tag, as used in `hreflang` and number formatting.
    pub fn bcp47(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
        }
    }

    /// Path prefix for pages in this locale (`""` for the root locale).
    pub fn path_prefix(self) -> &'static str {
        match self {
            Locale::En => "",
            Locale::PtBr => "/pt",
        }
    }

    /// Open Graph `og:locale` value.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::PtBr => "pt_BR",
        }
    }

    pub fn hreflang(self) -> HrefLangTag {
        match self {
            Locale::En => HrefLangTag::En,
            Locale::PtBr => HrefLangTag::PtBr,
        }
    }

    /// The other site locale (language switcher target).
    pub fn toggle(self) -> Locale {
        match self {
            Locale::En => Locale::PtBr,
            Locale::PtBr => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bcp47())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale {0:?} (expected en or pt-BR)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Value of an `hreflang` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HrefLangTag {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "x-default")]
    XDefault,
}

impl HrefLangTag {
    pub fn as_str(self) -> &'static str {
        match self {
            HrefLangTag::En => "en",
            HrefLangTag::PtBr => "pt-BR",
            HrefLangTag::XDefault => "x-default",
        }
    }
}

impl fmt::Display for HrefLangTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
