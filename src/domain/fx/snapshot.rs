//! An immutable point-in-time exchange-rate table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::CurrencyCode;

/// A dated table of `quote currency -> rate` pairs, relative to the
/// snapshot's own base currency.
///
/// Fetched once per render session and treated as immutable for that
/// session's lifetime. Rates are relative to `base`, not necessarily the
/// trip's currency, so conversion between two non-base currencies pivots
/// through the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxSnapshot {
    pub base: CurrencyCode,
    pub rates: HashMap<CurrencyCode, f64>,
    pub as_of: DateTime<Utc>,
}

impl FxSnapshot {
    /// Creates an empty snapshot for the given base currency.
    pub fn new(base: CurrencyCode, as_of: DateTime<Utc>) -> Self {
        Self {
            base,
            rates: HashMap::new(),
            as_of,
        }
    }

    /// Adds a quote rate; fixture-friendly builder form.
    pub fn with_rate(mut self, code: CurrencyCode, rate: f64) -> Self {
        self.rates.insert(code, rate);
        self
    }

    /// The rate for a currency relative to the base.
    ///
    /// The base currency itself always rates `1.0`; any other code is a
    /// plain table lookup, `None` when absent.
    pub fn rate_for(&self, code: &CurrencyCode) -> Option<f64> {
        if *code == self.base {
            return Some(1.0);
        }
        self.rates.get(code).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_snapshot() -> FxSnapshot {
        FxSnapshot::new(CurrencyCode::usd(), Utc::now())
            .with_rate(CurrencyCode::parse("EUR").unwrap(), 0.9)
    }

    #[test]
    fn base_rate_is_always_one() {
        let snapshot = usd_snapshot();
        assert_eq!(snapshot.rate_for(&CurrencyCode::usd()), Some(1.0));
    }

    #[test]
    fn quote_rate_comes_from_the_table() {
        let snapshot = usd_snapshot();
        assert_eq!(
            snapshot.rate_for(&CurrencyCode::parse("EUR").unwrap()),
            Some(0.9)
        );
    }

    #[test]
    fn missing_rate_is_none() {
        let snapshot = usd_snapshot();
        assert_eq!(snapshot.rate_for(&CurrencyCode::parse("GBP").unwrap()), None);
    }
}
