//! Filter configuration driving the read-path pipeline.
//!
//! A [`FilterState`] is host-owned, mutable configuration: the engine never
//! stores one, it only receives the current state alongside a record
//! collection and computes from the pair. The serialized spellings (`all`,
//! `1m`, ...) match the persisted UI state of the registry application.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::record::ValveType;

/// Time window for the period filter stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    /// No time restriction
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Period {
    /// Number of calendar months to subtract from today, `None` for `All`.
    pub fn months_back(&self) -> Option<u32> {
        match self {
            Period::All => None,
            Period::OneMonth => Some(1),
            Period::ThreeMonths => Some(3),
            Period::SixMonths => Some(6),
            Period::OneYear => Some(12),
        }
    }

    /// Sentinel spelling used in serialized filter state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
        }
    }

    /// User-facing label for this window.
    pub fn label(&self) -> &'static str {
        match self {
            Period::All => "Tutto il periodo",
            Period::OneMonth => "Ultimo mese",
            Period::ThreeMonths => "Ultimi 3 mesi",
            Period::SixMonths => "Ultimi 6 mesi",
            Period::OneYear => "Ultimo anno",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Period::All),
            "1m" => Ok(Period::OneMonth),
            "3m" => Ok(Period::ThreeMonths),
            "6m" => Ok(Period::SixMonths),
            "1y" => Ok(Period::OneYear),
            _ => Err(RegistryError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Valve-type filter stage: either the `all` sentinel or one concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValveFilter {
    /// No valve-type restriction
    #[default]
    #[serde(rename = "all")]
    All,
    /// Keep only records of one valve type
    #[serde(untagged)]
    Only(ValveType),
}

impl ValveFilter {
    /// Whether a record with the given valve type passes this stage.
    pub fn matches(&self, tipo: Option<ValveType>) -> bool {
        match self {
            ValveFilter::All => true,
            ValveFilter::Only(wanted) => tipo == Some(*wanted),
        }
    }
}

impl std::fmt::Display for ValveFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValveFilter::All => f.write_str("all"),
            ValveFilter::Only(v) => f.write_str(v.as_str()),
        }
    }
}

impl std::str::FromStr for ValveFilter {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ValveFilter::All);
        }
        s.parse::<ValveType>().map(ValveFilter::Only)
    }
}

/// The three-stage filter configuration.
///
/// The default value is the identity filter: blank search, all valve types,
/// all periods. This is the state a fresh or reset view starts from.
///
/// # Example
///
/// ```rust
/// use registry_core::{FilterState, Period, ValveFilter, ValveType};
///
/// let state = FilterState::new()
///     .with_search("rossi")
///     .with_valve_type(ValveFilter::Only(ValveType::BalloonExpandable))
///     .with_period(Period::SixMonths);
/// assert!(!state.is_identity());
/// assert!(FilterState::default().is_identity());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Case-insensitive substring matched against names and valve model
    pub search_query: String,
    /// Valve-type stage
    pub tipo_valvola: ValveFilter,
    /// Period stage
    pub period: Period,
}

impl FilterState {
    /// Creates the identity filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Sets the valve-type stage.
    pub fn with_valve_type(mut self, filter: ValveFilter) -> Self {
        self.tipo_valvola = filter;
        self
    }

    /// Sets the period stage.
    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// True when every stage is a no-op.
    pub fn is_identity(&self) -> bool {
        self.search_query.trim().is_empty()
            && self.tipo_valvola == ValveFilter::All
            && self.period == Period::All
    }
}
