use crate::error::SettlementError;
use alloy_primitives::{Address, B256, Bytes, U256};
use core_types::{Fee, OperationResult, OrderComponents, OrderRecord, TxStatus};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// One entry on the offer or consideration side of an order input.
///
/// A `Currency` entry with no token address denotes the chain's native coin.
/// Token entries follow the item's standard: ERC-721 entries carry no
/// amount, ERC-1155 entries carry an explicit quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "itemType", rename_all = "camelCase")]
pub enum InputEntry {
    #[serde(rename_all = "camelCase")]
    Currency {
        #[serde(skip_serializing_if = "Option::is_none")]
        token: Option<Address>,
        amount: U256,
    },
    #[serde(rename_all = "camelCase")]
    Erc721 { token: Address, identifier: U256 },
    #[serde(rename_all = "camelCase")]
    Erc1155 { token: Address, identifier: U256, amount: U256 },
}

/// Protocol order input, produced by the pure builders and handed to the
/// settlement client for signing. Fees and zone are attached unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub offerer: Address,
    pub offer: Vec<InputEntry>,
    pub consideration: Vec<InputEntry>,
    /// Seconds since epoch at which the order expires.
    pub end_time: u64,
    /// The restricted-zone contract for this chain.
    pub zone: Address,
    pub fees: Vec<Fee>,
}

/// A signed order as produced by the settlement client. Nothing has been
/// broadcast; the signature and parameters are what the marketplace records.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedOrder {
    pub parameters: OrderComponents,
    pub signature: Bytes,
}

/// A token allowance the offerer still has to grant before an order input
/// can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalTarget {
    pub token: Address,
    pub spender: Address,
}

/// Identifies the order an off-chain cancellation signature is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationScope {
    pub order_id: String,
    pub protocol_address: Address,
    pub chain_id: u64,
}

/// Everything the protocol needs to fulfill an existing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Fulfillment {
    pub order: OrderRecord,
    /// Receives the order's offer side; defaults to the fulfiller when
    /// absent.
    pub recipient: Option<Address>,
    /// Unit count for a partial fill; `None` fills the order entirely.
    pub units_to_fill: Option<u64>,
}

/// A raw transaction to be signed and broadcast by a [`crate::Signer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

/// The confirmed outcome of a broadcast transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    pub gas_used: U256,
    pub effective_gas_price: U256,
    pub status: TxStatus,
}

impl From<TransactionReceipt> for OperationResult {
    fn from(receipt: TransactionReceipt) -> Self {
        OperationResult {
            transaction_hash: Some(receipt.transaction_hash),
            gas_used: receipt.gas_used,
            gas_price: receipt.effective_gas_price,
            status: receipt.status,
        }
    }
}

/// A broadcast-but-unconfirmed transaction.
///
/// The hash and chain id are available immediately so progress observers can
/// show "submitted" before the confirmation wait resolves; `confirmed()`
/// consumes the handle and awaits the receipt.
pub struct PendingTransaction {
    pub hash: B256,
    pub chain_id: u64,
    confirmation: BoxFuture<'static, Result<TransactionReceipt, SettlementError>>,
}

impl PendingTransaction {
    pub fn new(
        hash: B256,
        chain_id: u64,
        confirmation: BoxFuture<'static, Result<TransactionReceipt, SettlementError>>,
    ) -> Self {
        Self { hash, chain_id, confirmation }
    }

    /// Awaits the transaction's natural resolution. There is no abort
    /// primitive: once broadcast, the engine waits for success or revert.
    pub async fn confirmed(self) -> Result<TransactionReceipt, SettlementError> {
        self.confirmation.await
    }
}

impl std::fmt::Debug for PendingTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTransaction")
            .field("hash", &self.hash)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}
