use api_client::error::ApiError;
use core_types::MarketError;
use settlement::SettlementError;
use thiserror::Error;

/// Internal union of everything a handler flow can fail with before the
/// handler stamps its own business-operation code on it. Each variant keeps
/// the inner error as `source`, so the wrapped trail stays inspectable.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Operation error: {0}")]
    Market(#[from] MarketError),

    #[error("API client error: {0}")]
    Api(#[from] ApiError),

    #[error("Settlement error: {0}")]
    Settlement(#[from] SettlementError),
}
