//! Exchange-rate configuration

use serde::Deserialize;

use super::ValidationError;
use crate::domain::foundation::CurrencyCode;

/// Currency settings for rate snapshots and display
#[derive(Debug, Clone, Deserialize)]
pub struct FxConfig {
    /// Base currency the snapshot rates are quoted against
    #[serde(default = "default_currency")]
    pub base_currency: String,

    /// Currency amounts are shown in when a trip names none
    #[serde(default = "default_currency")]
    pub default_display_currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            base_currency: default_currency(),
            default_display_currency: default_currency(),
        }
    }
}

impl FxConfig {
    /// Validate the FX configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if CurrencyCode::parse(&self.base_currency).is_none() {
            return Err(ValidationError::InvalidBaseCurrency);
        }
        if CurrencyCode::parse(&self.default_display_currency).is_none() {
            return Err(ValidationError::InvalidDisplayCurrency);
        }
        Ok(())
    }

    /// The base currency as a domain value, uppercase-normalized
    pub fn base(&self) -> CurrencyCode {
        CurrencyCode::parse(&self.base_currency).unwrap_or_default()
    }

    /// The display currency as a domain value, uppercase-normalized
    pub fn display(&self) -> CurrencyCode {
        CurrencyCode::parse(&self.default_display_currency).unwrap_or_default()
    }
}
