//! The canonical merged destination meta bag and its projections.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{f64_field, parse_json_blob, str_field, string_list_field};

/// Merged destination metadata, directly usable by fact-card renderers.
///
/// Every field is optional: both upstream sources may be entirely absent,
/// in which case the bag is empty but defined. List-valued fields are
/// always normalized arrays here; the comma-joined form lives on
/// [`PreviewMeta`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationMeta {
    pub currency_code: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub plugs: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub weather_desc: Option<String>,
    pub weather_temp_c: Option<f64>,
    pub transport: Option<Vec<String>>,
    pub esim_provider: Option<String>,
    pub description: Option<String>,
    pub history: Option<String>,
    pub tipping: Option<String>,
    pub payment: Option<String>,
    pub photography: Option<String>,
    pub gestures: Option<String>,
    pub dress_code: Option<String>,
    pub cost_coffee: Option<String>,
    pub cost_meal: Option<String>,
    pub cost_beer: Option<String>,
    pub etiquette_dos: Option<String>,
    pub etiquette_donts: Option<String>,
    pub packing_tips: Option<String>,
    pub emergency_police: Option<String>,
    pub emergency_medical: Option<String>,
    pub hidden_gem_title: Option<String>,
    pub hidden_gem_desc: Option<String>,
    pub image: Option<String>,
}

impl DestinationMeta {
    /// Coerces a trip-level `inputs.destination_meta` override.
    ///
    /// Field narrowing follows the blob rules: wrong-shaped fields are
    /// dropped, list-ish fields accept array or comma-joined string form.
    /// An empty string survives — an explicit blank is still a defined
    /// override and must win over any fallback during merging.
    pub fn coerce_override(raw: &Value) -> Option<Self> {
        let map = parse_json_blob(Some(raw))?;
        Some(Self {
            currency_code: str_field(&map, "currency_code"),
            city: str_field(&map, "city"),
            country_code: str_field(&map, "country_code"),
            timezone: str_field(&map, "timezone"),
            plugs: string_list_field(&map, "plugs"),
            languages: string_list_field(&map, "languages"),
            weather_desc: str_field(&map, "weather_desc"),
            weather_temp_c: f64_field(&map, "weather_temp_c"),
            transport: string_list_field(&map, "transport"),
            esim_provider: str_field(&map, "esim_provider"),
            description: str_field(&map, "description"),
            history: str_field(&map, "history"),
            tipping: str_field(&map, "tipping"),
            payment: str_field(&map, "payment"),
            photography: str_field(&map, "photography"),
            gestures: str_field(&map, "gestures"),
            dress_code: str_field(&map, "dress_code"),
            cost_coffee: str_field(&map, "cost_coffee"),
            cost_meal: str_field(&map, "cost_meal"),
            cost_beer: str_field(&map, "cost_beer"),
            etiquette_dos: str_field(&map, "etiquette_dos"),
            etiquette_donts: str_field(&map, "etiquette_donts"),
            packing_tips: str_field(&map, "packing_tips"),
            emergency_police: str_field(&map, "emergency_police"),
            emergency_medical: str_field(&map, "emergency_medical"),
            hidden_gem_title: str_field(&map, "hidden_gem_title"),
            hidden_gem_desc: str_field(&map, "hidden_gem_desc"),
            image: str_field(&map, "image"),
        })
    }

    /// True when at least one renderable fact is present.
    pub fn has_content(&self) -> bool {
        self.description.is_some()
            || self.history.is_some()
            || self.currency_code.is_some()
            || self.plugs.as_ref().is_some_and(|v| !v.is_empty())
            || self.languages.as_ref().is_some_and(|v| !v.is_empty())
            || self.transport.as_ref().is_some_and(|v| !v.is_empty())
            || self.esim_provider.is_some()
            || self.city.is_some()
            || self.weather_desc.is_some()
    }

    /// Projects the lightweight preview-meta contract.
    pub fn preview(&self) -> PreviewMeta {
        PreviewMeta {
            description: self.description.clone(),
            history: self.history.clone(),
            city: self.city.clone(),
            currency_code: self.currency_code.clone(),
            plugs: self.plugs.clone(),
            languages: self.languages.clone(),
            transport: self.transport.clone(),
            esim_provider: self.esim_provider.clone(),
            weather_desc: self.weather_desc.clone(),
        }
    }
}

/// The lighter-weight meta contract used by preview surfaces.
///
/// List fields are carried as arrays; consumers that want the joined-string
/// form use the `*_joined` accessors instead of re-splitting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewMeta {
    pub description: Option<String>,
    pub history: Option<String>,
    pub city: Option<String>,
    pub currency_code: Option<String>,
    pub plugs: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub transport: Option<Vec<String>>,
    pub esim_provider: Option<String>,
    pub weather_desc: Option<String>,
}

impl PreviewMeta {
    /// Comma-joined plugs, or `None` when absent/empty.
    pub fn plugs_joined(&self) -> Option<String> {
        join(self.plugs.as_deref())
    }

    /// Comma-joined languages, or `None` when absent/empty.
    pub fn languages_joined(&self) -> Option<String> {
        join(self.languages.as_deref())
    }

    /// Comma-joined transport modes, or `None` when absent/empty.
    pub fn transport_joined(&self) -> Option<String> {
        join(self.transport.as_deref())
    }
}

fn join(list: Option<&[String]>) -> Option<String> {
    let list = list?;
    if list.is_empty() {
        return None;
    }
    Some(list.join(", "))
}
