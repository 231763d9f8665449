use crate::error::SettlementError;
use crate::types::{
    ApprovalTarget, CancellationScope, Fulfillment, OrderInput, PendingTransaction, SignedOrder,
};
use alloy_primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use core_types::OrderComponents;

/// The minimal interface the engine consumes from the order-settlement
/// protocol.
///
/// The protocol's cryptography and contract logic are an opaque dependency;
/// this trait exposes only the operations the engine sequences, so an
/// adapter over the real protocol SDK can evolve independently of the
/// engine. Implementations are expected to be chain-scoped.
#[async_trait]
pub trait SettlementClient: Send + Sync {
    /// ERC-20 balance of `owner` for `token`.
    async fn balance_of(&self, owner: Address, token: Address) -> Result<U256, SettlementError>;

    /// Native-coin balance of `owner`.
    async fn native_balance(&self, owner: Address) -> Result<U256, SettlementError>;

    /// Derives the approvals `offerer` still has to grant before `input`
    /// can settle, by comparing current allowances and balances against the
    /// amounts the order requires. Already-sufficient allowances produce no
    /// entry.
    async fn required_approvals(
        &self,
        input: &OrderInput,
        offerer: Address,
    ) -> Result<Vec<ApprovalTarget>, SettlementError>;

    /// Broadcasts an approval granting `spender` allowance over `token`.
    async fn approve(
        &self,
        token: Address,
        spender: Address,
    ) -> Result<PendingTransaction, SettlementError>;

    /// Broadcasts a deposit wrapping `amount` of native coin into the
    /// chain's wrapped-native ERC-20.
    async fn wrap_native(&self, amount: U256) -> Result<PendingTransaction, SettlementError>;

    /// Produces a signed order from `input`. Pure signature production;
    /// nothing is broadcast.
    async fn create_order(
        &self,
        input: &OrderInput,
        offerer: Address,
    ) -> Result<SignedOrder, SettlementError>;

    /// Produces several signed orders under a single bulk signature.
    async fn create_orders(
        &self,
        inputs: &[OrderInput],
        offerer: Address,
    ) -> Result<Vec<SignedOrder>, SettlementError>;

    /// Produces the off-chain cancellation signature for the scoped order.
    async fn sign_cancellation(&self, scope: &CancellationScope)
    -> Result<Bytes, SettlementError>;

    /// Broadcasts the fulfillment of an existing order.
    async fn fulfill_order(
        &self,
        fulfillment: &Fulfillment,
    ) -> Result<PendingTransaction, SettlementError>;

    /// Broadcasts an on-chain cancellation of the given orders.
    async fn cancel_orders(
        &self,
        orders: &[OrderComponents],
    ) -> Result<PendingTransaction, SettlementError>;
}
