//! Full-record validation pass.
//!
//! Composes the field rules into one pass over a [`Procedure`], producing
//! the field→error map consumed by form hosts and the collection engine.

use chrono::{Local, NaiveDate};
use registry_core::{ErrorMap, FieldError, Procedure, RegistryProfile};

use crate::rules;

/// Record fields whose values are judged against the profile's range table.
const RANGE_CHECKED_FIELDS: [&str; 9] = [
    "altezza",
    "peso",
    "fe",
    "vmax",
    "gmax",
    "gmed",
    "ava",
    "anulus_aortico",
    "dimensione_valvola",
];

/// Validates procedure records against a registry profile.
///
/// Every field rule runs on every call: fields are independent, and a
/// failure on one never hides problems on another. Within a single field,
/// the first failing rule wins, so at most one error per field is reported.
///
/// # Example
///
/// ```rust
/// use registry_core::{FieldError, Procedure};
/// use registry_validator::RecordValidator;
///
/// let validator = RecordValidator::new();
/// let errors = validator.validate(&Procedure::default()).unwrap();
///
/// assert_eq!(errors.get("nome"), Some(&FieldError::MissingField));
/// assert_eq!(errors.get("tipo_valvola"), Some(&FieldError::MissingField));
/// ```
pub struct RecordValidator {
    profile: RegistryProfile,
    today: Option<NaiveDate>,
}

impl RecordValidator {
    /// Creates a validator with the standard registry profile.
    pub fn new() -> Self {
        Self::with_profile(RegistryProfile::standard())
    }

    /// Creates a validator for a custom profile.
    pub fn with_profile(profile: RegistryProfile) -> Self {
        Self {
            profile,
            today: None,
        }
    }

    /// Pins the date used for future-date checks.
    ///
    /// Without a pin the validator reads the local calendar date on each
    /// call; tests pin it for determinism.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The active profile.
    pub fn profile(&self) -> &RegistryProfile {
        &self.profile
    }

    /// Validates one record, returning its error map or `None` when clean.
    pub fn validate(&self, record: &Procedure) -> Option<ErrorMap> {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let mut errors = ErrorMap::new();

        // Patient
        insert_first(&mut errors, "nome", rules::require_text(&record.nome));
        insert_first(&mut errors, "cognome", rules::require_text(&record.cognome));
        insert_first(
            &mut errors,
            "data_nascita",
            rules::date_valid(&record.data_nascita, false, today),
        );

        // Ranged measurements; fields without a configured range are unconstrained
        for field in RANGE_CHECKED_FIELDS {
            let Some(range) = self.profile.ranges.get(field) else {
                continue;
            };
            let Some(value) = record.numeric_field(field) else {
                continue;
            };
            insert_first(&mut errors, field, rules::number_in_range(value, range));
        }

        // Pre-existing prosthesis: model and size become required with the flag
        if record.valvola_protesica {
            insert_first(
                &mut errors,
                "protesica_modello",
                rules::require_text(record.protesica_modello.as_deref().unwrap_or("")),
            );
            insert_first(
                &mut errors,
                "protesica_dimensione",
                rules::require_text(record.protesica_dimensione.as_deref().unwrap_or("")),
            );
        }

        // Procedure
        insert_first(
            &mut errors,
            "data_procedura",
            rules::date_valid(&record.data_procedura, false, today),
        );
        insert_first(&mut errors, "ora_inizio", rules::time_valid(&record.ora_inizio));
        insert_first(&mut errors, "ora_fine", rules::time_valid(&record.ora_fine));
        insert_first(
            &mut errors,
            "ora_fine",
            rules::time_range_valid(&record.ora_inizio, &record.ora_fine),
        );
        if record.tipo_valvola.is_none() {
            insert_first(&mut errors, "tipo_valvola", Some(FieldError::MissingField));
        }
        insert_first(
            &mut errors,
            "modello_valvola",
            rules::require_text(&record.modello_valvola),
        );

        (!errors.is_empty()).then_some(errors)
    }

    /// Number of field checks one validation pass performs on this record.
    pub(crate) fn checks_performed(&self, record: &Procedure) -> usize {
        let ranged = RANGE_CHECKED_FIELDS
            .iter()
            .filter(|field| self.profile.ranges.get(field).is_some())
            .count();
        let conditional = if record.valvola_protesica { 2 } else { 0 };

        // nome, cognome, data_nascita, data_procedura, ora_inizio, ora_fine,
        // time range, tipo_valvola, modello_valvola
        9 + ranged + conditional
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Inserts the error only when the field has none yet.
fn insert_first(errors: &mut ErrorMap, field: &'static str, error: Option<FieldError>) {
    if let Some(error) = error {
        errors.entry(field).or_insert(error);
    }
}
