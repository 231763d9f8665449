use core_types::Address;
use serde::Deserialize;

/// The root configuration structure for the SDK.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    /// One entry per chain the marketplace operates on.
    pub chains: Vec<ChainSettings>,
}

/// Connection parameters for the marketplace REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the marketplace API, e.g. `https://api.example.xyz`.
    pub base_url: String,
    /// Optional API key, sent as the `Api-Key` request header when present.
    pub api_key: Option<String>,
}

/// Per-chain protocol addresses.
///
/// The zone is the protocol's access-control contract for restricted
/// orders; the wrapped-native address identifies the ERC-20 the engine may
/// wrap into when an offer is funded in native coin.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainSettings {
    pub chain_id: u64,
    pub zone: Address,
    pub wrapped_native: Address,
}

impl Settings {
    /// Looks up the settings for a chain id.
    pub fn chain(&self, chain_id: u64) -> Option<&ChainSettings> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }
}
