//! Sensory capabilities - the structured sense record and the recognized
//! sense-type registry

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Default unit label for sense ranges
pub const DEFAULT_SENSE_UNITS: &str = "ft";

/// Round a range value to the nearest half unit, the canonical granularity
/// for sense ranges
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

fn default_units() -> String {
    DEFAULT_SENSE_UNITS.to_string()
}

/// The closed set of recognized sense-type keywords
///
/// Matching is case-insensitive; keys are stored lowercase. The standard
/// vocabulary can be extended from configuration without touching the
/// migration logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenseTypes(BTreeSet<String>);

impl SenseTypes {
    /// The standard sense vocabulary
    pub const STANDARD: [&'static str; 4] =
        ["blindsight", "darkvision", "tremorsense", "truesight"];

    pub fn standard() -> Self {
        Self(Self::STANDARD.iter().map(|key| (*key).to_string()).collect())
    }

    /// Build a registry from an arbitrary keyword list
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keys.into_iter()
                .map(|key| key.as_ref().trim().to_lowercase())
                .filter(|key| !key.is_empty())
                .collect(),
        )
    }

    /// Extend the vocabulary with extra keywords
    pub fn with_extensions<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            let key = key.as_ref().trim().to_lowercase();
            if !key.is_empty() {
                self.0.insert(key);
            }
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(&key.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SenseTypes {
    fn default() -> Self {
        Self::standard()
    }
}

/// Structured sense record for a creature
///
/// Ranges are expressed in `units`; `special` preserves legacy free text
/// that could not be classified. Registry extensions beyond the four
/// standard senses land in the flattened `other` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Senses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub darkvision: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blindsight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tremorsense: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truesight: Option<f64>,
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, f64>,
}

impl Default for Senses {
    fn default() -> Self {
        Self {
            darkvision: None,
            blindsight: None,
            tremorsense: None,
            truesight: None,
            units: default_units(),
            special: None,
            other: BTreeMap::new(),
        }
    }
}

impl Senses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a sense range by its registry key
    pub fn range(&self, key: &str) -> Option<f64> {
        match key {
            "darkvision" => self.darkvision,
            "blindsight" => self.blindsight,
            "tremorsense" => self.tremorsense,
            "truesight" => self.truesight,
            other => self.other.get(other).copied(),
        }
    }

    /// Set a sense range, quantized to the nearest half unit
    pub fn set_range(&mut self, key: &str, value: f64) {
        let value = round_to_half(value);
        match key {
            "darkvision" => self.darkvision = Some(value),
            "blindsight" => self.blindsight = Some(value),
            "tremorsense" => self.tremorsense = Some(value),
            "truesight" => self.truesight = Some(value),
            other => {
                self.other.insert(other.to_string(), value);
            }
        }
    }

    /// Every populated sense range, standard fields first
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        [
            ("darkvision", self.darkvision),
            ("blindsight", self.blindsight),
            ("tremorsense", self.tremorsense),
            ("truesight", self.truesight),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .chain(self.other.iter().map(|(key, value)| (key.as_str(), *value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_half_unit() {
        assert_eq!(round_to_half(62.0), 62.0);
        assert_eq!(round_to_half(61.3), 61.5);
        assert_eq!(round_to_half(61.2), 61.0);
        assert_eq!(round_to_half(0.0), 0.0);
    }

    #[test]
    fn registry_matches_case_insensitively() {
        let types = SenseTypes::standard();
        assert!(types.contains("darkvision"));
        assert!(types.contains("Darkvision"));
        assert!(types.contains("TREMORSENSE"));
        assert!(!types.contains("smell"));
    }

    #[test]
    fn extensions_are_normalized() {
        let types = SenseTypes::standard().with_extensions(["  Scent ", ""]);
        assert!(types.contains("scent"));
        assert_eq!(types.len(), SenseTypes::STANDARD.len() + 1);
    }

    #[test]
    fn ranges_route_to_named_fields_or_extension_map() {
        let mut senses = Senses::new();
        senses.set_range("darkvision", 61.3);
        senses.set_range("scent", 30.0);

        assert_eq!(senses.darkvision, Some(61.5));
        assert_eq!(senses.range("darkvision"), Some(61.5));
        assert_eq!(senses.range("scent"), Some(30.0));
        assert_eq!(senses.range("truesight"), None);
    }

    #[test]
    fn entries_cover_standard_and_extension_keys() {
        let mut senses = Senses::new();
        senses.set_range("blindsight", 10.0);
        senses.set_range("scent", 30.0);

        let entries: Vec<(&str, f64)> = senses.entries().collect();
        assert_eq!(entries, vec![("blindsight", 10.0), ("scent", 30.0)]);
    }

    #[test]
    fn default_units_are_feet() {
        assert_eq!(Senses::default().units, "ft");
    }
}
