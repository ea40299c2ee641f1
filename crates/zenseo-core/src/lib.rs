pub mod config;
pub mod error;
pub mod logging;

pub mod locale;
pub mod price;
pub mod resolver;
pub mod routes;
pub mod seo;
pub mod sitemap;
pub mod url_model;
pub mod xml;

pub use error::{Error, Result};
