// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{ApiSettings, ChainSettings, Settings};

/// Loads the SDK configuration from the `nomen.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, layers `NOMEN__`-prefixed environment variables on
/// top, deserializes the result into our strongly-typed `Settings` struct,
/// validates it, and returns it.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `nomen.toml`
        .add_source(config::File::with_name("nomen"))
        // Environment overrides, e.g. NOMEN__API__BASE_URL.
        .add_source(config::Environment::with_prefix("NOMEN").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;
    tracing::debug!(chains = settings.chains.len(), "configuration loaded and validated");

    Ok(settings)
}

/// Rejects configurations the engine cannot run with.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.api.base_url.is_empty() {
        return Err(ConfigError::ValidationError("api.base_url must not be empty".to_string()));
    }
    if settings.chains.is_empty() {
        return Err(ConfigError::ValidationError(
            "at least one chain must be configured".to_string(),
        ));
    }
    for chain in &settings.chains {
        let dupes = settings.chains.iter().filter(|c| c.chain_id == chain.chain_id).count();
        if dupes > 1 {
            return Err(ConfigError::ValidationError(format!(
                "chain id {} is configured more than once",
                chain.chain_id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Address;
    use pretty_assertions::assert_eq;
    use settings::{ApiSettings, ChainSettings, Settings};

    fn sample_settings() -> Settings {
        Settings {
            api: ApiSettings {
                base_url: "https://api.example.xyz".to_string(),
                api_key: None,
            },
            chains: vec![
                ChainSettings {
                    chain_id: 1,
                    zone: Address::repeat_byte(0x11),
                    wrapped_native: Address::repeat_byte(0x22),
                },
                ChainSettings {
                    chain_id: 137,
                    zone: Address::repeat_byte(0x33),
                    wrapped_native: Address::repeat_byte(0x44),
                },
            ],
        }
    }

    #[test]
    fn valid_settings_pass_validation() {
        assert!(validate(&sample_settings()).is_ok());
    }

    #[test]
    fn chain_lookup_by_id() {
        let settings = sample_settings();
        assert_eq!(settings.chain(137).unwrap().zone, Address::repeat_byte(0x33));
        assert!(settings.chain(42).is_none());
    }

    #[test]
    fn duplicate_chain_ids_are_rejected() {
        let mut settings = sample_settings();
        settings.chains[1].chain_id = 1;
        assert!(matches!(validate(&settings), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let mut settings = sample_settings();
        settings.api.base_url.clear();
        let err = validate(&settings).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert_eq!(
            err.to_string(),
            "Invalid nomen configuration: api.base_url must not be empty"
        );
    }
}
