use thiserror::Error;

/// Failures while assembling the SDK configuration from `nomen.toml` and
/// `NOMEN__`-prefixed environment overrides.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load the nomen configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// The configuration deserialized but fails a structural rule: an empty
    /// API base URL, no chains, or a duplicated chain id.
    #[error("Invalid nomen configuration: {0}")]
    ValidationError(String),
}
