//! Registry configuration profile.
//!
//! The profile is the externally-supplied, read-only configuration surface:
//! the numeric [`RangeTable`] driving range validation, the valve-model
//! catalogs, and the cardiovascular risk-factor list. A built-in standard
//! profile reproduces the registry application's shipped constants; hosts
//! may load an overriding profile from YAML or TOML through the parser
//! crate, and any omitted section falls back to the standard one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::ValveType;

/// Inclusive numeric bounds for one field, with unit and display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
    /// Unit of measure, shown in error messages
    pub unit: String,
    /// Human-readable field label
    #[serde(default)]
    pub label: String,
}

impl NumericRange {
    /// Creates a range with the given bounds.
    pub fn new(min: f64, max: f64, unit: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            unit: unit.into(),
            label: label.into(),
        }
    }

    /// Whether a value lies within the bounds, inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Lookup table from record field name to its declared numeric range.
///
/// Field names without an entry are unconstrained: range validation treats
/// them as always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeTable {
    ranges: BTreeMap<String, NumericRange>,
}

impl RangeTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self {
            ranges: BTreeMap::new(),
        }
    }

    /// The registry's standard medical ranges.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.insert("altezza", NumericRange::new(100.0, 250.0, "cm", "Altezza"));
        table.insert("peso", NumericRange::new(30.0, 200.0, "kg", "Peso"));
        table.insert("fe", NumericRange::new(0.0, 100.0, "%", "FE"));
        table.insert("vmax", NumericRange::new(0.0, 10.0, "m/s", "Vmax"));
        table.insert("gmax", NumericRange::new(0.0, 200.0, "mmHg", "Gmax"));
        table.insert("gmed", NumericRange::new(0.0, 150.0, "mmHg", "Gmed"));
        table.insert("ava", NumericRange::new(0.0, 5.0, "cm²", "AVA"));
        table.insert(
            "anulus_aortico",
            NumericRange::new(15.0, 35.0, "mm", "Anulus Aortico"),
        );
        table.insert(
            "dimensione_valvola",
            NumericRange::new(15.0, 35.0, "mm", "Dimensione Valvola"),
        );
        table
    }

    /// Looks up the range declared for a field, if any.
    pub fn get(&self, field: &str) -> Option<&NumericRange> {
        self.ranges.get(field)
    }

    /// Declares or replaces the range for a field.
    pub fn insert(&mut self, field: impl Into<String>, range: NumericRange) {
        self.ranges.insert(field.into(), range);
    }

    /// Number of declared ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if no ranges are declared.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterates over declared field names and ranges, in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NumericRange)> {
        self.ranges.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for RangeTable {
    /// Defaults to [`RangeTable::standard`], so a profile file may simply
    /// omit the section.
    fn default() -> Self {
        Self::standard()
    }
}

/// The complete configuration surface consumed by validation and hosts.
///
/// # Example
///
/// ```rust
/// use registry_core::{RegistryProfile, ValveType};
///
/// let profile = RegistryProfile::standard();
/// assert!(profile.ranges.get("fe").is_some());
/// assert!(profile.is_known_model("Edwards SAPIEN 3"));
/// assert_eq!(profile.models_for(ValveType::SelfExpandable).len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryProfile {
    /// Numeric validation ranges
    pub ranges: RangeTable,
    /// Known balloon-expandable valve models
    pub balloon_expandable_models: Vec<String>,
    /// Known self-expandable valve models
    pub self_expandable_models: Vec<String>,
    /// Cardiovascular risk factors offered by the data-entry UI
    pub risk_factors: Vec<String>,
}

impl RegistryProfile {
    /// The profile shipped with the registry application.
    pub fn standard() -> Self {
        Self {
            ranges: RangeTable::standard(),
            balloon_expandable_models: vec![
                "Edwards SAPIEN 3".to_string(),
                "Edwards SAPIEN 3 Ultra".to_string(),
                "Myval".to_string(),
                "Allegra".to_string(),
            ],
            self_expandable_models: vec![
                "Medtronic CoreValve Evolut R".to_string(),
                "Medtronic CoreValve Evolut PRO".to_string(),
                "Medtronic CoreValve Evolut PRO+".to_string(),
                "Boston Scientific ACURATE neo".to_string(),
                "Portico".to_string(),
            ],
            risk_factors: vec![
                "Ipertensione arteriosa".to_string(),
                "Diabete mellito".to_string(),
                "Dislipidemia".to_string(),
                "Fumo di sigaretta".to_string(),
                "Obesità".to_string(),
                "Familiarità per cardiopatia".to_string(),
            ],
        }
    }

    /// Model catalog for one valve type.
    pub fn models_for(&self, tipo: ValveType) -> &[String] {
        match tipo {
            ValveType::BalloonExpandable => &self.balloon_expandable_models,
            ValveType::SelfExpandable => &self.self_expandable_models,
        }
    }

    /// Whether a model name appears in either catalog.
    ///
    /// Advisory only: record validation does not enforce catalog membership.
    pub fn is_known_model(&self, model: &str) -> bool {
        self.balloon_expandable_models
            .iter()
            .chain(self.self_expandable_models.iter())
            .any(|m| m == model)
    }
}

impl Default for RegistryProfile {
    fn default() -> Self {
        Self::standard()
    }
}
