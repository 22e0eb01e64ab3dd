//! Field-level validation rules.
//!
//! This module implements the individual rules composed by the record
//! validator:
//! - Required: non-empty text after trimming
//! - Range: numeric value within configured bounds, optional when empty
//! - Date: parseable calendar date, optionally barred from the future
//! - Time: 24-hour `HH:MM` wall-clock time
//! - Time range: end of procedure strictly after its start
//!
//! Each rule returns `Some(FieldError)` on failure and `None` on success,
//! so callers collect errors as data instead of branching on exceptions.

use chrono::NaiveDate;
use registry_core::{parse_date, time_to_minutes, FieldError, Numeric, NumericRange};

/// Requires a non-empty value after trimming whitespace.
pub fn require_text(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::MissingField);
    }
    None
}

/// Validates an optional numeric measurement against its configured range.
///
/// Absent values pass: optionality is the default for measurements, and
/// requiredness is a separate rule. Malformed text fails as not-a-number
/// before any range comparison.
pub fn number_in_range(value: &Numeric, range: &NumericRange) -> Option<FieldError> {
    if value.is_absent() {
        return None;
    }

    let number = match value.as_number() {
        Some(n) => n,
        None => return Some(FieldError::NotANumber),
    };

    if !range.contains(number) {
        return Some(FieldError::out_of_range(
            range.min,
            range.max,
            range.unit.as_str(),
        ));
    }

    None
}

/// Validates a required `YYYY-MM-DD` date.
///
/// Comparison against `today` is at day granularity; a date equal to
/// `today` is never considered future.
pub fn date_valid(value: &str, allow_future: bool, today: NaiveDate) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::MissingField);
    }

    let date = match parse_date(value) {
        Some(d) => d,
        None => return Some(FieldError::InvalidDate),
    };

    if !allow_future && date > today {
        return Some(FieldError::FutureDate);
    }

    None
}

/// Validates a required `HH:MM` 24-hour time.
pub fn time_valid(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::MissingField);
    }

    if time_to_minutes(value).is_none() {
        return Some(FieldError::InvalidTime);
    }

    None
}

/// Requires the end time to fall strictly after the start time.
///
/// A no-op when either side is absent or malformed: requiredness and
/// format are judged by [`time_valid`] on each side, and this rule never
/// stacks a second error on top of those.
pub fn time_range_valid(start: &str, end: &str) -> Option<FieldError> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return None;
    }

    let (Some(start_minutes), Some(end_minutes)) = (time_to_minutes(start), time_to_minutes(end))
    else {
        return None;
    };

    if end_minutes <= start_minutes {
        return Some(FieldError::EndBeforeStart);
    }

    None
}
