//! Collection-level validation engine.
//!
//! Wraps the record validator with the [`ProcedureValidator`] trait so that
//! hosts run whole-collection passes and receive a summarized report.

use chrono::NaiveDate;
use registry_core::{
    ErrorMap, Procedure, ProcedureValidator, RecordFailure, RegistryProfile, ValidationReport,
};
use std::time::Instant;

use crate::RecordValidator;

/// Validation engine for procedure record collections.
///
/// # Example
///
/// ```rust
/// use registry_core::{Procedure, ProcedureValidator};
/// use registry_validator::RegistryValidator;
///
/// let validator = RegistryValidator::new();
/// let report = validator.validate_collection(&[Procedure::default()]);
///
/// if report.passed {
///     println!("All records valid");
/// } else {
///     for failure in &report.failures {
///         println!("Record {}: {} errors", failure.index, failure.errors.len());
///     }
/// }
/// ```
pub struct RegistryValidator {
    record_validator: RecordValidator,
}

impl RegistryValidator {
    /// Creates an engine with the standard registry profile.
    pub fn new() -> Self {
        Self {
            record_validator: RecordValidator::new(),
        }
    }

    /// Creates an engine for a custom profile.
    pub fn with_profile(profile: RegistryProfile) -> Self {
        Self {
            record_validator: RecordValidator::with_profile(profile),
        }
    }

    /// Pins the date used for future-date checks, for deterministic runs.
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self {
            record_validator: self.record_validator.with_today(today),
        }
    }

    /// The active profile.
    pub fn profile(&self) -> &RegistryProfile {
        self.record_validator.profile()
    }
}

impl Default for RegistryValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcedureValidator for RegistryValidator {
    fn validate_record(&self, record: &Procedure) -> Option<ErrorMap> {
        self.record_validator.validate(record)
    }

    /// Overrides the default run to also count performed field checks.
    fn validate_collection(&self, records: &[Procedure]) -> ValidationReport {
        let start = Instant::now();

        let mut report = ValidationReport::success();
        let mut fields_checked = 0;

        for (index, record) in records.iter().enumerate() {
            fields_checked += self.record_validator.checks_performed(record);
            if let Some(errors) = self.validate_record(record) {
                report.add_failure(RecordFailure {
                    index,
                    full_name: record.full_name(),
                    errors,
                });
            }
        }

        report.stats.records_validated = records.len();
        report.stats.fields_checked = fields_checked;
        report.stats.duration_ms = start.elapsed().as_millis() as u64;
        report
    }
}
