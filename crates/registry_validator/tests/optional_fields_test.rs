//! Tests to verify correct handling of absent values across validation.
//!
//! These tests pin the optionality contract:
//! - Absent measurements pass range checks (absence is valid and distinct
//!   from zero)
//! - Present-but-malformed values fail as not-a-number, never as absent
//! - The prosthesis model/size pair is required exactly when the
//!   prosthesis flag is set
//!
//! This prevents regressions where empty form inputs would be coerced to
//! zero and then rejected as out of range.

use chrono::NaiveDate;
use registry_core::{FieldError, Numeric, Procedure, ProcedureBuilder, ValveType};
use registry_validator::RecordValidator;

fn validator() -> RecordValidator {
    RecordValidator::new().with_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

fn minimal_valid_record() -> Procedure {
    ProcedureBuilder::new("Anna", "Bianchi")
        .data_nascita("1952-11-02")
        .data_procedura("2024-05-20")
        .ora_inizio("11:00")
        .ora_fine("12:10")
        .tipo_valvola(ValveType::SelfExpandable)
        .modello_valvola("Medtronic CoreValve Evolut R")
        .build()
}

#[test]
fn test_record_without_measurements_is_valid() {
    // No altezza, peso, fe, vmax, gmax, gmed, ava, anulus, valve size
    assert_eq!(validator().validate(&minimal_valid_record()), None);
}

#[test]
fn test_empty_string_measurement_treated_as_absent() {
    let mut record = minimal_valid_record();
    record.fe = Numeric::Text(String::new());
    record.peso = Numeric::Text("   ".to_string());

    assert_eq!(validator().validate(&record), None);
}

#[test]
fn test_absent_is_distinct_from_zero() {
    // Zero is a present value and must be judged against the range
    let mut record = minimal_valid_record();
    record.altezza = Numeric::from(0.0);

    let errors = validator().validate(&record).unwrap();
    assert_eq!(
        errors.get("altezza"),
        Some(&FieldError::out_of_range(100.0, 250.0, "cm"))
    );

    // While fe's range starts at zero, so zero passes
    let mut record = minimal_valid_record();
    record.fe = Numeric::from(0.0);
    assert_eq!(validator().validate(&record), None);
}

#[test]
fn test_malformed_text_fails_as_not_a_number() {
    let mut record = minimal_valid_record();
    record.gmax = Numeric::Text("~80".to_string());

    let errors = validator().validate(&record).unwrap();
    assert_eq!(errors.get("gmax"), Some(&FieldError::NotANumber));
}

#[test]
fn test_string_typed_numbers_pass() {
    // Persisted rows may carry measurements as strings
    let mut record = minimal_valid_record();
    record.fe = Numeric::Text("55".to_string());
    record.ava = Numeric::Text("0.8".to_string());

    assert_eq!(validator().validate(&record), None);
}

#[test]
fn test_prosthesis_fields_unconstrained_without_flag() {
    let mut record = minimal_valid_record();
    record.valvola_protesica = false;
    record.protesica_modello = None;
    record.protesica_dimensione = None;

    assert_eq!(validator().validate(&record), None);
}

#[test]
fn test_prosthesis_flag_requires_both_fields() {
    let mut record = minimal_valid_record();
    record.valvola_protesica = true;

    let errors = validator().validate(&record).unwrap();
    assert_eq!(
        errors.get("protesica_modello"),
        Some(&FieldError::MissingField)
    );
    assert_eq!(
        errors.get("protesica_dimensione"),
        Some(&FieldError::MissingField)
    );
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_blank_prosthesis_model_still_missing() {
    let mut record = minimal_valid_record();
    record.valvola_protesica = true;
    record.protesica_modello = Some("  ".to_string());
    record.protesica_dimensione = Some("23".to_string());

    let errors = validator().validate(&record).unwrap();
    assert_eq!(
        errors.get("protesica_modello"),
        Some(&FieldError::MissingField)
    );
    assert!(!errors.contains_key("protesica_dimensione"));
}

#[test]
fn test_filling_prosthesis_model_clears_its_error_only() {
    let mut record = minimal_valid_record();
    record.valvola_protesica = true;
    record.protesica_dimensione = Some("23".to_string());

    let errors = validator().validate(&record).unwrap();
    assert!(errors.contains_key("protesica_modello"));

    record.protesica_modello = Some("Edwards SAPIEN XT".to_string());
    assert_eq!(validator().validate(&record), None);
}

#[test]
fn test_unknown_implanted_model_is_advisory_only() {
    // Catalog membership is not enforced by validation
    let mut record = minimal_valid_record();
    record.modello_valvola = "Prototype Valve X".to_string();

    assert_eq!(validator().validate(&record), None);
    assert!(!validator().profile().is_known_model("Prototype Valve X"));
}
