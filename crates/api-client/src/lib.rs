//! # Nomen API Client
//!
//! The client for the marketplace REST API: fetching recorded orders,
//! submitting signed orders, and submitting off-chain cancellation
//! signatures.
//!
//! The generic [`OrderbookApi`] trait is the contract the operation handlers
//! use, allowing the underlying implementation (live or mock) to be swapped
//! out.

use crate::error::ApiError;
use crate::responses::ApiErrorResponse;
use alloy_primitives::Address;
use async_trait::async_trait;
use configuration::ApiSettings;
use core_types::OrderRecord;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub mod error;
pub mod responses;

// --- Public API ---
pub use responses::{CancelOrderRequest, CreateOrderRequest, CreateOrderResponse};

/// Identifies the order to fetch and on whose behalf it would be fulfilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    pub order_id: String,
    pub fulfiller: Address,
}

/// The generic, abstract interface for the marketplace orderbook API.
#[async_trait]
pub trait OrderbookApi: Send + Sync {
    /// Fetches a recorded listing; `None` when the marketplace does not
    /// know the order id.
    async fn get_listing(&self, query: &OrderQuery) -> Result<Option<OrderRecord>, ApiError>;

    /// Fetches a recorded offer; `None` when the marketplace does not know
    /// the order id.
    async fn get_offer(&self, query: &OrderQuery) -> Result<Option<OrderRecord>, ApiError>;

    /// Records a signed offer.
    async fn create_offer(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError>;

    /// Records a signed listing.
    async fn create_listing(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError>;

    /// Submits an off-chain listing cancellation signature.
    async fn cancel_listing(&self, request: &CancelOrderRequest) -> Result<(), ApiError>;

    /// Submits an off-chain offer cancellation signature.
    async fn cancel_offer(&self, request: &CancelOrderRequest) -> Result<(), ApiError>;
}

/// A concrete implementation of [`OrderbookApi`] over HTTP.
#[derive(Clone)]
pub struct OrderbookHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrderbookHttpClient {
    pub fn new(settings: &ApiSettings) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(key) = &settings.api_key {
            headers.insert("Api-Key", HeaderValue::from_str(key).expect("Invalid API key"));
        }

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .expect("Failed to build reqwest client"),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn _get_order(
        &self,
        path: &str,
        query: &OrderQuery,
    ) -> Result<Option<OrderRecord>, ApiError> {
        let url = format!("{}{}/{}", self.base_url, path, query.order_id);
        tracing::debug!(%url, "fetching order");

        let response = self
            .client
            .get(&url)
            .query(&[("fulfiller", format!("{:#x}", query.fulfiller))])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            serde_json::from_str::<OrderRecord>(&text)
                .map(Some)
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            Err(decode_error(status, &text))
        }
    }

    async fn _post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "posting to orderbook");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<T>(&text).map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            Err(decode_error(status, &text))
        }
    }

    async fn _post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "posting to orderbook");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await?;
        Err(decode_error(status, &text))
    }
}

fn decode_error(status: StatusCode, text: &str) -> ApiError {
    match serde_json::from_str::<ApiErrorResponse>(text) {
        Ok(body) => ApiError::Api(status.as_u16(), body.message),
        Err(_) => ApiError::Api(status.as_u16(), text.to_string()),
    }
}

#[async_trait]
impl OrderbookApi for OrderbookHttpClient {
    async fn get_listing(&self, query: &OrderQuery) -> Result<Option<OrderRecord>, ApiError> {
        self._get_order("/v1/orderbook/listing", query).await
    }

    async fn get_offer(&self, query: &OrderQuery) -> Result<Option<OrderRecord>, ApiError> {
        self._get_order("/v1/orderbook/offer", query).await
    }

    async fn create_offer(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError> {
        self._post("/v1/orderbook/offer", request).await
    }

    async fn create_listing(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError> {
        self._post("/v1/orderbook/listing", request).await
    }

    async fn cancel_listing(&self, request: &CancelOrderRequest) -> Result<(), ApiError> {
        self._post_no_content("/v1/orderbook/listing/cancel", request).await
    }

    async fn cancel_offer(&self, request: &CancelOrderRequest) -> Result<(), ApiError> {
        self._post_no_content("/v1/orderbook/offer/cancel", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client_for(server: &mockito::ServerGuard) -> OrderbookHttpClient {
        OrderbookHttpClient::new(&ApiSettings { base_url: server.url(), api_key: None })
    }

    fn query() -> OrderQuery {
        OrderQuery { order_id: "L1".to_string(), fulfiller: Address::repeat_byte(0x42) }
    }

    #[tokio::test]
    async fn get_listing_decodes_an_order_record() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "orderId": "L1",
            "chainId": 1,
            "protocolAddress": format!("{:#x}", Address::repeat_byte(0x99)),
            "components": {"counter": "0"},
            "signature": "0xdeadbeef",
        });
        let mock = server
            .mock("GET", "/v1/orderbook/listing/L1")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let order = client_for(&server).get_listing(&query()).await.unwrap().unwrap();
        mock.assert_async().await;
        assert_eq!(order.order_id, "L1");
        assert_eq!(order.chain_id, 1);
        assert_eq!(order.protocol_address, Address::repeat_byte(0x99));
        assert_eq!(order.extra_data, None);
        assert_eq!(order.partial_fill_units, None);
    }

    #[tokio::test]
    async fn absent_order_maps_to_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/orderbook/offer/X")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let mut q = query();
        q.order_id = "X".to_string();
        assert_eq!(client_for(&server).get_offer(&q).await.unwrap(), None);
    }

    #[tokio::test]
    async fn error_bodies_are_decoded() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/orderbook/listing/cancel")
            .with_status(400)
            .with_body(r#"{"message":"signature does not match the order"}"#)
            .create_async()
            .await;

        let request = CancelOrderRequest {
            order_id: "L1".to_string(),
            signature: alloy_primitives::Bytes::from_static(&[0xab]),
        };
        let err = client_for(&server).cancel_listing(&request).await.unwrap_err();
        match err {
            ApiError::Api(status, message) => {
                assert_eq!(status, 400);
                assert_eq!(message, "signature does not match the order");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
