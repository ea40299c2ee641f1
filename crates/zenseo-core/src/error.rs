//! Error type for the fallible edges of the crate (config, route files, sitemap output).
//!
//! URL and path helpers never fail; they normalize whatever they are given.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `config.toml` exists but is not valid TOML for [`crate::config::SiteConfig`].
    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Default config could not be serialized.
    #[error("could not serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// `site_url` is not an absolute URL.
    #[error("invalid site url {url:?}: {source}")]
    InvalidSiteUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// `site_url` parsed but is not served over http(s).
    #[error("site url {0:?} must use http or https")]
    UnsupportedScheme(String),

    /// A route table file is not valid JSON for the route schema.
    #[error("invalid route file {}: {source}", .path.display())]
    RouteFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The global tracing subscriber could not be installed.
    #[error("could not initialize logging: {0}")]
    LoggingInit(String),

    /// No usable home directory for XDG paths.
    #[error("xdg base directories unavailable: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
