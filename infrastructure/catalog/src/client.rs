use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::catalog::errors::CatalogError;
use business::domain::shared::value_objects::ProductId;

/// Shared catalog HTTP client configuration.
pub struct CatalogClient {
    pub client: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: with_trailing_slash(base_url),
        }
    }

    /// Returns the stock endpoint URL for a product.
    pub fn stock_url(&self, product_id: ProductId) -> Result<Url, CatalogError> {
        self.endpoint(&format!("stock/{}", product_id))
    }

    /// Returns the product endpoint URL.
    pub fn product_url(&self, product_id: ProductId) -> Result<Url, CatalogError> {
        self.endpoint(&format!("products/{}", product_id))
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|_| CatalogError::InvalidUrl)
    }
}

// Url::join replaces the last segment unless the base ends with a slash.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogClient {
        CatalogClient::new(Url::parse(base).unwrap(), Duration::from_secs(5))
    }

    #[test]
    fn should_build_stock_url() {
        let url = client("http://localhost:3333").stock_url(ProductId::new(4)).unwrap();

        assert_eq!(url.as_str(), "http://localhost:3333/stock/4");
    }

    #[test]
    fn should_build_product_url() {
        let url = client("http://localhost:3333/").product_url(ProductId::new(12)).unwrap();

        assert_eq!(url.as_str(), "http://localhost:3333/products/12");
    }

    #[test]
    fn should_keep_base_path_prefix() {
        let catalog = client("https://shop.example/api/v1");

        assert_eq!(
            catalog.stock_url(ProductId::new(1)).unwrap().as_str(),
            "https://shop.example/api/v1/stock/1"
        );
    }
}
