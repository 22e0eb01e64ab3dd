//! Error types for the procedure registry.
//!
//! This module defines two layers of errors: `FieldError`, the per-field
//! validation outcomes returned as data inside an [`ErrorMap`], and
//! `RegistryError`, the infrastructure-level failures (parsing sentinels,
//! serialization) that can abort an operation.

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Mapping from record field name to its validation error.
///
/// Produced by record validation; an absent map means the record is valid.
/// Keys are the record's own field names (`nome`, `fe`, `ora_fine`, ...),
/// ordered deterministically for stable output.
pub type ErrorMap = BTreeMap<&'static str, FieldError>;

/// A single field-level validation failure.
///
/// These are recoverable outcomes returned as data, never panics: a record
/// carrying one or more of them must simply not be handed to the persistence
/// collaborator. Display messages are the Italian strings surfaced verbatim
/// to the end user by the host application.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Required field is null, missing, or blank after trimming
    #[error("Questo campo è obbligatorio")]
    MissingField,

    /// Value is present but does not parse as a number
    #[error("Inserire un numero valido")]
    NotANumber,

    /// Numeric value outside its declared medical range
    #[error("Valore deve essere tra {min} e {max} {unit}")]
    OutOfRange {
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
        /// Unit of measure shown to the user
        unit: String,
    },

    /// Value does not parse as a `YYYY-MM-DD` calendar date
    #[error("Data non valida")]
    InvalidDate,

    /// Date lies strictly after today
    #[error("La data non può essere nel futuro")]
    FutureDate,

    /// Value does not match the 24-hour `HH:MM` format
    #[error("Orario non valido")]
    InvalidTime,

    /// Procedure end time is not strictly after its start time
    #[error("L'orario di fine deve essere successivo all'inizio")]
    EndBeforeStart,
}

impl FieldError {
    /// Creates an `OutOfRange` error from a declared numeric range.
    pub fn out_of_range(min: f64, max: f64, unit: impl Into<String>) -> Self {
        FieldError::OutOfRange {
            min,
            max,
            unit: unit.into(),
        }
    }
}

/// Infrastructure error type for registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Valve type string outside the known enumeration
    #[error("Unknown valve type '{0}' (expected 'Balloon Expandable' or 'Self Expandable')")]
    UnknownValveType(String),

    /// Filter period string outside the known sentinels
    #[error("Unknown filter period '{0}' (expected one of: all, 1m, 3m, 6m, 1y)")]
    UnknownPeriod(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
