use std::time::Duration;

use anyhow::Context;
use url::Url;

const DEFAULT_CATALOG_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where product and stock data are fetched from.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_API_URL: Base URL of the catalog API (default: "http://localhost:3333")
    /// - CATALOG_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var("CATALOG_API_URL").ok(),
            std::env::var("CATALOG_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(url: Option<String>, timeout_secs: Option<String>) -> anyhow::Result<Self> {
        let raw_url = url.unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let base_url = Url::parse(&raw_url)
            .with_context(|| format!("CATALOG_API_URL is not a valid URL: {}", raw_url))?;

        let timeout_secs = match timeout_secs {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("CATALOG_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
