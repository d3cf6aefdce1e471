//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `ITINERO_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use itinero_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("FX base currency: {}", config.fx.base());
//! ```

mod error;
mod fx;

pub use error::{ConfigError, ValidationError};
pub use fx::FxConfig;

use serde::Deserialize;

/// Root engine configuration
///
/// Every section has usable defaults, so a bare environment still loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Exchange-rate configuration (base and display currencies)
    #[serde(default)]
    pub fx: FxConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ITINERO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ITINERO__FX__BASE_CURRENCY=EUR` -> `fx.base_currency = EUR`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into their
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ITINERO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fx.validate()?;
        Ok(())
    }
}
