use serde::{Deserialize, Serialize};

/// The discriminant of an executable step inside an operation.
///
/// This is the data-only view of an action: it is what progress steps and
/// error contexts carry, while the executable payloads live in the
/// `executor` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// Grant an ERC-20/NFT spending allowance to the settlement protocol.
    Approval,
    /// Produce a signed order (pure signature, nothing broadcast).
    Create,
    /// Produce several signed orders with a single signature.
    CreateBulk,
    /// Produce a cancellation signature accepted by the marketplace API.
    OffChainCancel,
    /// Fulfill an existing order on-chain.
    Exchange,
    /// Cancel an existing order on-chain.
    CancelOrder,
    /// Wrap native coin into its ERC-20 representation.
    Conversion,
}

impl ActionKind {
    /// Whether this kind of action broadcasts a transaction (as opposed to
    /// producing a signature locally).
    pub fn is_transaction(&self) -> bool {
        matches!(
            self,
            ActionKind::Approval
                | ActionKind::Exchange
                | ActionKind::CancelOrder
                | ActionKind::Conversion
        )
    }
}

/// The lifecycle state of a single progress step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepState {
    Pending,
    Submitted,
    Completed,
    Failed,
}

/// The terminal status of a confirmed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TxStatus {
    Success,
    Reverted,
}

/// The token standard of a traded item. Determines whether order entries
/// carry an explicit quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenStandard {
    /// Single-token standard; entries carry no amount field.
    Erc721,
    /// Multi-token standard; entries carry an explicit quantity.
    Erc1155,
}

/// How an existing order should be cancelled.
///
/// A cancellation is exclusively one or the other, never mixed: off-chain
/// submits a signature to the marketplace API, on-chain broadcasts a
/// protocol cancellation transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancellationType {
    OnChain,
    OffChain,
}
