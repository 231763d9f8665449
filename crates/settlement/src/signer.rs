use crate::error::SettlementError;
use crate::types::{PendingTransaction, TransactionRequest};
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;

/// A chain-scoped signing account.
///
/// The signer is externally owned: the engine never serializes access to it,
/// so concurrent use from elsewhere in the hosting application can race at
/// the provider/nonce level. That is a caller responsibility.
#[async_trait]
pub trait Signer: Send + Sync {
    /// The account address used as offerer or fulfiller.
    async fn address(&self) -> Result<Address, SettlementError>;

    /// Signs an EIP-712 typed-data payload.
    async fn sign_typed_data(&self, payload: &serde_json::Value) -> Result<Bytes, SettlementError>;

    /// Signs and broadcasts a transaction, returning the pending handle.
    async fn send_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<PendingTransaction, SettlementError>;
}
