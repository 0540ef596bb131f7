use crate::utils::errors::{EnrollerError, Result};
use reqwest::Url;
use std::fmt;

/// Resource path used when the configured target names none.
const DEFAULT_RESOURCE_PATH: &str = "/v1/csrs";

/// Resolved absolute endpoint for upstream certificate retrieval.
///
/// Computed once from the configured target string and immutable afterwards;
/// every outbound fetch hits this URL.
#[derive(Debug, Clone)]
pub struct ProxyTarget {
    url: Url,
}

impl ProxyTarget {
    /// Resolve a configured target string into an absolute endpoint.
    ///
    /// A target without an `http` prefix gets `http://` assumed. The
    /// permissive plaintext default is kept for compatibility with existing
    /// deployments; configure an `https://` URL to get a verified channel.
    /// An unparseable target is a fatal configuration error.
    pub fn resolve(raw: &str) -> Result<Self> {
        let absolute = if raw.starts_with("http") {
            raw.to_string()
        } else {
            format!("http://{raw}")
        };

        let mut url = Url::parse(&absolute).map_err(|e| {
            EnrollerError::Config(format!("Invalid proxy target {absolute:?}: {e}"))
        })?;

        if url.path() == "/" {
            url.set_path(DEFAULT_RESOURCE_PATH);
        }

        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for ProxyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
