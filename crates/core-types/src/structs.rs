use crate::enums::{ActionKind, CancellationType, StepState, TokenStandard, TxStatus};
use alloy_primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Observer invoked with the full, ordered step array after every progress
/// transition. This is the only channel through which callers see partial
/// progress; it fires synchronously with each state change.
pub type ProgressCallback = Arc<dyn Fn(&[ProgressStep]) + Send + Sync>;

/// The externally visible state of one executable step.
///
/// One step exists per action, created up front, and exactly one step is in
/// flight at any time. Identity is append-only: steps are never reordered or
/// removed, only their state advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStep {
    pub index: usize,
    pub description: String,
    pub kind: ActionKind,
    pub state: StepState,
    /// Recorded as soon as the transaction is broadcast, before its
    /// confirmation wait begins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Captured error message once the step has failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A marketplace fee, passed through unmodified into order consideration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub recipient: Address,
    pub basis_points: u16,
}

/// One tokenized domain being offered on. The buyer pays `price` units of
/// the ERC-20 at `currency_contract_address` for the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferItem {
    pub contract: Address,
    pub token_id: String,
    /// Integer string in the currency's smallest unit.
    pub price: String,
    /// Offers are always ERC-20 funded; the protocol has no native-coin
    /// offer side.
    pub currency_contract_address: Address,
    /// Offer validity window in milliseconds.
    pub duration: u64,
    pub standard: TokenStandard,
}

/// One tokenized domain being listed for sale. The seller receives `price`
/// units of the currency; a missing currency contract means the chain's
/// native coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub contract: Address,
    pub token_id: String,
    /// Integer string in the currency's smallest unit.
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_contract_address: Option<Address>,
    /// Listing validity window in milliseconds.
    pub duration: u64,
    pub standard: TokenStandard,
}

/// Opaque protocol order parameters, carried between the marketplace API and
/// the settlement client without interpretation. Keeping this as raw JSON
/// isolates the engine from settlement-SDK shape churn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderComponents(pub serde_json::Value);

/// A signed order fetched from the marketplace API.
///
/// Read-only once fetched: the engine never mutates an order, it only passes
/// the components and signature back to the protocol or the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: String,
    pub chain_id: u64,
    /// The settlement protocol contract this order is scoped to.
    pub protocol_address: Address,
    pub components: OrderComponents,
    pub signature: Bytes,
    /// Protocol-required fulfillment extra data, when the order demands it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Bytes>,
    /// Unit count for partially fillable orders; `None` means full fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_fill_units: Option<u64>,
}

/// The outcome of one business operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    /// `None` exactly when the operation resolved off-chain.
    pub transaction_hash: Option<B256>,
    pub gas_used: U256,
    pub gas_price: U256,
    pub status: TxStatus,
}

impl OperationResult {
    /// The fixed result shape for operations that resolve off-chain.
    pub fn off_chain() -> Self {
        Self {
            transaction_hash: None,
            gas_used: U256::ZERO,
            gas_price: U256::ZERO,
            status: TxStatus::Success,
        }
    }
}

// --- Operation parameters ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferParams {
    /// Exactly one item is supported per offer.
    pub items: Vec<OfferItem>,
    /// Which orderbook the marketplace should record the order under.
    pub orderbook: String,
    /// Identifies the application originating the order.
    pub source: String,
    pub marketplace_fees: Vec<Fee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingParams {
    /// Exactly one item is supported per listing.
    pub items: Vec<ListingItem>,
    pub orderbook: String,
    pub source: String,
    pub marketplace_fees: Vec<Fee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyListingParams {
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptOfferParams {
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelListingParams {
    pub order_id: String,
    pub cancellation_type: CancellationType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOfferParams {
    pub order_id: String,
    pub cancellation_type: CancellationType,
}

// --- Operation results ---

/// One order accepted by the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub order_id: String,
    /// The signed protocol parameters the marketplace recorded.
    pub order_data: OrderComponents,
}

/// Result of a successful offer or listing creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrders {
    pub orders: Vec<CreatedOrder>,
}
