use alloy_primitives::{Address, Bytes, U256};
use core_types::ActionKind;
use futures::future::BoxFuture;
use settlement::{PendingTransaction, SettlementError, SignedOrder, TransactionReceipt};

/// One-shot closure producing a broadcast-but-unconfirmed transaction.
pub type TransactFn =
    Box<dyn FnOnce() -> BoxFuture<'static, Result<PendingTransaction, SettlementError>> + Send>;

/// One-shot closure producing a signed order (no broadcast).
pub type SignOrderFn =
    Box<dyn FnOnce() -> BoxFuture<'static, Result<SignedOrder, SettlementError>> + Send>;

/// One-shot closure producing several signed orders under one signature.
pub type SignOrdersFn =
    Box<dyn FnOnce() -> BoxFuture<'static, Result<Vec<SignedOrder>, SettlementError>> + Send>;

/// One-shot closure producing an off-chain cancellation signature.
pub type SignBytesFn =
    Box<dyn FnOnce() -> BoxFuture<'static, Result<Bytes, SettlementError>> + Send>;

/// A single executable step of an operation.
///
/// The variant determines the execution semantics: `Create`, `CreateBulk`
/// and `OffChainCancel` resolve locally by producing a signature, while the
/// remaining variants broadcast a transaction and wait for its confirmation.
/// Payloads are one-shot closures so an action list can be assembled before
/// anything runs; a list and its progress are constructed fresh per
/// `execute()` call and discarded afterwards.
pub enum Action {
    Approval { token: Address, spender: Address, send: TransactFn },
    Create { sign: SignOrderFn },
    CreateBulk { sign: SignOrdersFn },
    OffChainCancel { sign: SignBytesFn },
    Exchange { send: TransactFn },
    CancelOrder { send: TransactFn },
    Conversion { amount: U256, send: TransactFn },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Approval { .. } => ActionKind::Approval,
            Action::Create { .. } => ActionKind::Create,
            Action::CreateBulk { .. } => ActionKind::CreateBulk,
            Action::OffChainCancel { .. } => ActionKind::OffChainCancel,
            Action::Exchange { .. } => ActionKind::Exchange,
            Action::CancelOrder { .. } => ActionKind::CancelOrder,
            Action::Conversion { .. } => ActionKind::Conversion,
        }
    }

    /// Human-readable description shown alongside the step's progress.
    pub fn description(&self) -> String {
        match self {
            Action::Approval { token, .. } => {
                format!("Approve {token:#x} for trading")
            }
            Action::Create { .. } => "Sign the order".to_string(),
            Action::CreateBulk { .. } => "Sign the orders".to_string(),
            Action::OffChainCancel { .. } => "Sign the cancellation".to_string(),
            Action::Exchange { .. } => "Submit the exchange transaction".to_string(),
            Action::CancelOrder { .. } => "Cancel the order on-chain".to_string(),
            Action::Conversion { amount, .. } => {
                format!("Wrap {amount} native currency")
            }
        }
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action").field("kind", &self.kind()).finish_non_exhaustive()
    }
}

/// The success output of a single action. The executor returns the last
/// action's output as the operation's result.
#[derive(Debug)]
pub enum ActionOutput {
    Order(SignedOrder),
    Orders(Vec<SignedOrder>),
    Signature(Bytes),
    Receipt(TransactionReceipt),
}
