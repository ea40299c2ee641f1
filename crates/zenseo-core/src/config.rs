//! Site configuration: one record, loaded once, passed to whoever needs it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global site configuration loaded from `~/.config/zenseo/config.toml`.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute site URL, e.g. `https://djzeneyer.com`. Trailing slashes are dropped on load.
    pub site_url: String,
    pub default_title: String,
    pub default_description: String,
    /// Open Graph image (1200x630).
    pub og_image: String,
    pub twitter_handle: String,
    /// Twitter card image (1200x600).
    pub twitter_image: String,
    pub logo: String,
    /// Profile URLs published as `sameAs` in the default JSON-LD.
    pub social_profiles: Vec<String>,
    /// Font files the page shell preloads.
    pub font_preloads: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://djzeneyer.com".to_string(),
            default_title: "DJ Zen Eyer | Brazilian Zouk Music Producer & Live Events".to_string(),
            default_description: "Experience exclusive Brazilian Zouk remixes by DJ Zen Eyer. \
                Join the Zen Tribe for live events, private mixes, and connect with fellow \
                Zouk enthusiasts worldwide."
                .to_string(),
            og_image: "https://djzeneyer.com/images/og-image.jpg".to_string(),
            twitter_handle: "@djzeneyer".to_string(),
            twitter_image: "https://djzeneyer.com/images/twitter-image.jpg".to_string(),
            logo: "https://djzeneyer.com/images/logo.png".to_string(),
            social_profiles: vec![
                "https://www.instagram.com/djzeneyer".to_string(),
                "https://soundcloud.com/djzeneyer".to_string(),
                "https://www.facebook.com/djzeneyer".to_string(),
                "https://www.youtube.com/c/djzeneyer".to_string(),
            ],
            font_preloads: vec![
                "https://fonts.gstatic.com/s/orbitron/v31/yMJRMIlzdpvBhQQL_SCqsYlRFyV1p9YO.woff2"
                    .to_string(),
                "https://fonts.gstatic.com/s/inter/v13/UcC73FwrK3iLTeHuU_AA6hc.woff2".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Checks `site_url` is an absolute http(s) URL and strips trailing slashes.
    pub fn validated(mut self) -> Result<Self> {
        let parsed = url::Url::parse(&self.site_url).map_err(|source| Error::InvalidSiteUrl {
            url: self.site_url.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::UnsupportedScheme(self.site_url));
        }
        let trimmed_len = self.site_url.trim_end_matches('/').len();
        self.site_url.truncate(trimmed_len);
        Ok(self)
    }

    /// Site URL without trailing slash; the base every absolute URL is built on.
    pub fn base_url(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("zenseo")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|e| Error::io("config.toml", e))
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SiteConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let cfg: SiteConfig = toml::from_str(&data).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    cfg.validated()
}

/// Load configuration from the XDG location, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        write_default(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

fn write_default(path: &Path, cfg: &SiteConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, toml).map_err(|e| Error::io(path, e))
}
