use alloy_primitives::Bytes;
use core_types::OrderComponents;
use serde::{Deserialize, Serialize};

// Using `#[serde(rename_all = "camelCase")]` to automatically map between
// the API's camelCase JSON and Rust snake_case.

/// Body of `POST /v1/orderbook/offer` and `POST /v1/orderbook/listing`:
/// a signed order the marketplace should record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub signature: Bytes,
    pub orderbook: String,
    pub chain_id: u64,
    /// The signed protocol order parameters, passed through untouched.
    pub parameters: OrderComponents,
}

/// The response from a successful order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
}

/// Body of the off-chain cancel endpoints: the order id and the
/// cancellation signature the marketplace verifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    pub order_id: String,
    pub signature: Bytes,
}

/// Represents an error response from the marketplace API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
}
