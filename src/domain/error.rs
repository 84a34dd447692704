//! Typed errors for catalog lookups.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {code} from {url}")]
    Status { code: u16, url: String },
    #[error("JSON parse error in {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}
