//! Validation traits and report types for procedure records.
//!
//! This module defines the seam between the record model and the validation
//! engine: implementations judge records and hand back [`ErrorMap`]s, and
//! whole-collection runs are summarized in a [`ValidationReport`] for hosts
//! such as the command-line tool.

use crate::error::ErrorMap;
use crate::record::Procedure;

/// Core trait for validating procedure records.
///
/// The registry's engine implements this against the configured profile;
/// hosts may supply their own implementation to stub out validation in
/// tests or to layer additional checks.
///
/// # Example
///
/// ```rust
/// use registry_core::{ErrorMap, FieldError, Procedure, ProcedureValidator};
///
/// struct RejectBlankNames;
///
/// impl ProcedureValidator for RejectBlankNames {
///     fn validate_record(&self, record: &Procedure) -> Option<ErrorMap> {
///         let mut errors = ErrorMap::new();
///         if record.nome.trim().is_empty() {
///             errors.insert("nome", FieldError::MissingField);
///         }
///         (!errors.is_empty()).then_some(errors)
///     }
/// }
///
/// let report = RejectBlankNames.validate_collection(&[Procedure::default()]);
/// assert!(!report.passed);
/// ```
pub trait ProcedureValidator {
    /// Validates a single record.
    ///
    /// Returns `None` when the record is clean, otherwise the field→error
    /// mapping. Must be pure: no panics for any well-formed record.
    fn validate_record(&self, record: &Procedure) -> Option<ErrorMap>;

    /// Validates a collection in input order, producing a report.
    ///
    /// The default implementation runs [`validate_record`](Self::validate_record)
    /// over every record and collects failures and timing.
    fn validate_collection(&self, records: &[Procedure]) -> ValidationReport {
        let started = std::time::Instant::now();

        let mut report = ValidationReport::success();
        for (index, record) in records.iter().enumerate() {
            if let Some(errors) = self.validate_record(record) {
                report.add_failure(RecordFailure {
                    index,
                    full_name: record.full_name(),
                    errors,
                });
            }
        }

        report.stats.records_validated = records.len();
        report.stats.duration_ms = started.elapsed().as_millis() as u64;
        report
    }
}

/// One invalid record inside a collection run.
#[derive(Debug, Clone)]
pub struct RecordFailure {
    /// Position of the record in the input collection
    pub index: usize,
    /// Patient name, for display
    pub full_name: String,
    /// Field-level errors
    pub errors: ErrorMap,
}

/// Report of a whole-collection validation run.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether every record passed
    pub passed: bool,

    /// Failures in input order
    pub failures: Vec<RecordFailure>,

    /// Execution statistics
    pub stats: ValidationStats,
}

/// Statistics about a validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidationStats {
    /// Number of records examined
    pub records_validated: usize,

    /// Number of records with at least one error
    pub records_failed: usize,

    /// Number of field checks performed
    pub fields_checked: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Creates an empty passing report.
    pub fn success() -> Self {
        Self {
            passed: true,
            failures: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Records a failed record and marks the report as failed.
    pub fn add_failure(&mut self, failure: RecordFailure) {
        self.failures.push(failure);
        self.passed = false;
        self.stats.records_failed = self.failures.len();
    }

    /// Total number of field-level errors across all failures.
    pub fn error_count(&self) -> usize {
        self.failures.iter().map(|f| f.errors.len()).sum()
    }
}
