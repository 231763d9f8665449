use alloy_primitives::Address;
use api_client::OrderbookApi;
use configuration::ChainSettings;
use core_types::ProgressCallback;
use executor::ActionExecutor;
use settlement::{SettlementClient, Signer};
use std::sync::Arc;

/// The per-chain protocol addresses a handler needs, injected at
/// construction instead of looked up from a hardcoded table.
#[derive(Debug, Clone, Copy)]
pub struct ChainConfig {
    pub chain_id: u64,
    /// The restricted-zone contract for protocol orders on this chain.
    pub zone: Address,
    /// The ERC-20 wrapped form of the chain's native coin.
    pub wrapped_native: Address,
}

impl From<&ChainSettings> for ChainConfig {
    fn from(settings: &ChainSettings) -> Self {
        Self {
            chain_id: settings.chain_id,
            zone: settings.zone,
            wrapped_native: settings.wrapped_native,
        }
    }
}

/// Everything an operation handler is constructed with.
///
/// The handlers share one context: the externally owned signer, the
/// settlement protocol client, the marketplace API client, the chain
/// configuration, and the optional progress observer. The context holds no
/// operation state; each `execute` call builds and discards its own action
/// list.
pub struct OperationContext {
    pub signer: Arc<dyn Signer>,
    pub settlement: Arc<dyn SettlementClient>,
    pub api: Arc<dyn OrderbookApi>,
    pub chain: ChainConfig,
    pub on_progress: Option<ProgressCallback>,
}

impl OperationContext {
    /// A fresh executor for one operation invocation.
    pub(crate) fn executor(&self) -> ActionExecutor {
        ActionExecutor::new(self.chain.chain_id, self.on_progress.clone())
    }
}
