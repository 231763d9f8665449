use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("Signer error: {0}")]
    Signer(String),

    #[error("Protocol RPC error: {0}")]
    Rpc(String),

    #[error("Failed to produce a signature: {0}")]
    Signing(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("Invalid order input: {0}")]
    InvalidInput(String),
}
