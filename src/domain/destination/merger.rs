//! Merging destination-history data with trip-level overrides.

use super::{DestinationMeta, HistoryPayload};

/// Overwrites each listed field when the override defines it.
macro_rules! apply_override {
    ($merged:ident, $ovr:ident, $($field:ident),+ $(,)?) => {
        $(
            if $ovr.$field.is_some() {
                $merged.$field = $ovr.$field.clone();
            }
        )+
    };
}

/// Combines the two metadata sources into one canonical bag.
pub struct MetaMerger;

impl MetaMerger {
    /// Merges a coerced history payload with trip-level overrides.
    ///
    /// Precedence is field-by-field: start from the empty bag, apply the
    /// history-derived fields, then overwrite with every defined override
    /// field. A `Some("")` override is defined and wins over a history
    /// value; array fields are replaced wholesale, never concatenated.
    ///
    /// # Edge Cases
    /// - Both sources absent: returns the empty-but-defined bag, never a
    ///   missing value.
    pub fn merge(
        history: Option<&HistoryPayload>,
        overrides: Option<&DestinationMeta>,
    ) -> DestinationMeta {
        let mut merged = history.map(Self::from_history).unwrap_or_default();

        if let Some(ovr) = overrides {
            apply_override!(
                merged, ovr, currency_code, city, country_code, timezone, plugs, languages,
                weather_desc, weather_temp_c, transport, esim_provider, description, history,
                tipping, payment, photography, gestures, dress_code, cost_coffee, cost_meal,
                cost_beer, etiquette_dos, etiquette_donts, packing_tips, emergency_police,
                emergency_medical, hidden_gem_title, hidden_gem_desc, image,
            );
        }

        merged
    }

    /// Projects a coerced history payload into the canonical field names.
    fn from_history(payload: &HistoryPayload) -> DestinationMeta {
        let kbyg = payload.kbyg.clone().unwrap_or_default();

        DestinationMeta {
            description: payload.about.clone(),
            history: payload.history.clone(),
            currency_code: kbyg.currency,
            city: kbyg.primary_city,
            plugs: kbyg.plugs,
            languages: kbyg.languages,
            weather_desc: kbyg.weather_desc,
            weather_temp_c: kbyg.weather_temp_c,
            transport: kbyg.getting_around,
            esim_provider: kbyg.esim,
            tipping: kbyg.tipping,
            payment: kbyg.payment,
            photography: kbyg.photography,
            gestures: kbyg.gestures,
            dress_code: kbyg.dress_code,
            cost_coffee: kbyg.cost_coffee,
            cost_meal: kbyg.cost_meal,
            cost_beer: kbyg.cost_beer,
            etiquette_dos: kbyg.etiquette_dos,
            etiquette_donts: kbyg.etiquette_donts,
            packing_tips: kbyg.packing_tips,
            emergency_police: kbyg.emergency_police,
            emergency_medical: kbyg.emergency_medical,
            hidden_gem_title: kbyg.hidden_gem_title,
            hidden_gem_desc: kbyg.hidden_gem_desc,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn history(v: serde_json::Value) -> HistoryPayload {
        HistoryPayload::coerce(Some(&v))
    }

    #[test]
    fn merge_of_nothing_is_empty_but_defined() {
        let merged = MetaMerger::merge(None, None);
        assert_eq!(merged, DestinationMeta::default());
        assert!(!merged.has_content());
    }

    #[test]
    fn merge_maps_kbyg_fields_into_canonical_names() {
        let payload = history(json!({
            "about": "Harbor city.",
            "history": "Old trading port.",
            "kbyg": {
                "currency": "JPY",
                "primary_city": "Osaka",
                "getting_around": "metro, ferry",
                "esim": "Ubigi",
                "emergency_police": "110"
            }
        }));
        let merged = MetaMerger::merge(Some(&payload), None);
        assert_eq!(merged.description.as_deref(), Some("Harbor city."));
        assert_eq!(merged.history.as_deref(), Some("Old trading port."));
        assert_eq!(merged.currency_code.as_deref(), Some("JPY"));
        assert_eq!(merged.city.as_deref(), Some("Osaka"));
        assert_eq!(
            merged.transport,
            Some(vec!["metro".to_string(), "ferry".to_string()])
        );
        assert_eq!(merged.esim_provider.as_deref(), Some("Ubigi"));
        assert_eq!(merged.emergency_police.as_deref(), Some("110"));
    }

    #[test]
    fn defined_override_always_wins() {
        let payload = history(json!({"kbyg": {"currency": "JPY"}}));
        let overrides = DestinationMeta {
            currency_code: Some("USD".to_string()),
            ..Default::default()
        };
        let merged = MetaMerger::merge(Some(&payload), Some(&overrides));
        assert_eq!(merged.currency_code.as_deref(), Some("USD"));
    }

    #[test]
    fn explicit_blank_override_wins() {
        let payload = history(json!({"kbyg": {"tipping": "10% expected"}}));
        let overrides = DestinationMeta {
            tipping: Some(String::new()),
            ..Default::default()
        };
        let merged = MetaMerger::merge(Some(&payload), Some(&overrides));
        assert_eq!(merged.tipping.as_deref(), Some(""));
    }

    #[test]
    fn undefined_override_fields_fall_back_to_history() {
        let payload = history(json!({
            "kbyg": {"currency": "EUR", "primary_city": "Porto"}
        }));
        let overrides = DestinationMeta {
            city: Some("Lisbon".to_string()),
            ..Default::default()
        };
        let merged = MetaMerger::merge(Some(&payload), Some(&overrides));
        assert_eq!(merged.city.as_deref(), Some("Lisbon"));
        assert_eq!(merged.currency_code.as_deref(), Some("EUR"));
    }

    #[test]
    fn array_overrides_replace_wholesale() {
        let payload = history(json!({"kbyg": {"languages": ["pt", "es"]}}));
        let overrides = DestinationMeta {
            languages: Some(vec!["en".to_string()]),
            ..Default::default()
        };
        let merged = MetaMerger::merge(Some(&payload), Some(&overrides));
        assert_eq!(merged.languages, Some(vec!["en".to_string()]));
    }

    #[test]
    fn override_only_merge_works_without_history() {
        let overrides = DestinationMeta {
            description: Some("Picked by the traveller.".to_string()),
            ..Default::default()
        };
        let merged = MetaMerger::merge(None, Some(&overrides));
        assert_eq!(merged.description.as_deref(), Some("Picked by the traveller."));
    }
}
