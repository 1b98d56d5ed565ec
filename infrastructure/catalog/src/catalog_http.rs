use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{CatalogProduct, Stock};
use business::domain::catalog::services::CatalogService;
use business::domain::shared::value_objects::ProductId;

use crate::client::CatalogClient;

#[derive(Debug, Deserialize)]
struct StockResponse {
    id: u64,
    amount: i64,
}

// Any `amount` the endpoint sends is ignored; the cart sets its own.
#[derive(Debug, Deserialize)]
struct ProductResponse {
    id: u64,
    title: String,
    price: f64,
    image: String,
}

impl From<StockResponse> for Stock {
    fn from(response: StockResponse) -> Self {
        Stock {
            id: ProductId::new(response.id),
            amount: response.amount,
        }
    }
}

impl From<ProductResponse> for CatalogProduct {
    fn from(response: ProductResponse) -> Self {
        CatalogProduct {
            id: ProductId::new(response.id),
            title: response.title,
            price: response.price,
            image: response.image,
        }
    }
}

pub struct CatalogHttp {
    client: CatalogClient,
}

impl CatalogHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    fn map_transport_error(error: reqwest::Error) -> CatalogError {
        if error.is_timeout() {
            CatalogError::Timeout
        } else if error.is_decode() {
            CatalogError::InvalidResponse
        } else {
            CatalogError::Transport
        }
    }

    fn check_status(status: StatusCode) -> Result<(), CatalogError> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound),
            s => Err(CatalogError::UnexpectedStatus(s.as_u16())),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: url::Url,
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        Self::check_status(response.status())?;

        response
            .json::<T>()
            .await
            .map_err(Self::map_transport_error)
    }
}

#[async_trait]
impl CatalogService for CatalogHttp {
    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        let url = self.client.stock_url(product_id)?;
        let stock: StockResponse = self.get_json(url).await?;
        Ok(stock.into())
    }

    async fn fetch_product(&self, product_id: ProductId) -> Result<CatalogProduct, CatalogError> {
        let url = self.client.product_url(product_id)?;
        let product: ProductResponse = self.get_json(url).await?;
        Ok(product.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_success_statuses() {
        assert!(CatalogHttp::check_status(StatusCode::OK).is_ok());
        assert!(CatalogHttp::check_status(StatusCode::NON_AUTHORITATIVE_INFORMATION).is_ok());
    }

    #[test]
    fn should_map_missing_resource_to_not_found() {
        let result = CatalogHttp::check_status(StatusCode::NOT_FOUND);

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }

    #[test]
    fn should_keep_unexpected_status_code() {
        let result = CatalogHttp::check_status(StatusCode::SERVICE_UNAVAILABLE);

        assert!(matches!(result.unwrap_err(), CatalogError::UnexpectedStatus(503)));
    }

    #[test]
    fn should_decode_stock_payload() {
        let raw = r#"{"id":1,"amount":3}"#;

        let stock: Stock = serde_json::from_str::<StockResponse>(raw).unwrap().into();

        assert_eq!(stock.id, ProductId::new(1));
        assert_eq!(stock.amount, 3);
    }

    #[test]
    fn should_ignore_amount_in_product_payload() {
        let raw = r#"{"id":2,"title":"Tênis VR Caminhada","price":139.9,"image":"https://img.example/2.jpg","amount":7}"#;

        let product: CatalogProduct = serde_json::from_str::<ProductResponse>(raw).unwrap().into();

        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.title, "Tênis VR Caminhada");
        assert_eq!(product.price, 139.9);
    }
}
