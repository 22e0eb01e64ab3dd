//! Scalar representation for numeric record fields.
//!
//! Numeric fields of a procedure record can arrive as JSON numbers, as raw
//! strings (form input, legacy persisted rows), or not at all. [`Numeric`]
//! models all three without losing the distinction between "absent" and
//! "present but malformed", which validation and aggregation treat
//! differently: absence is valid and excluded from means, malformed input is
//! a validation error but still excluded from means.

use serde::{Deserialize, Serialize};

/// A numeric field value as supplied by the outside world.
///
/// Deserializes untagged, so `12.5`, `"12.5"` and `null` are all accepted.
/// A missing field deserializes to [`Numeric::Null`] through `Default`.
///
/// # Example
///
/// ```rust
/// use registry_core::Numeric;
///
/// assert_eq!(Numeric::from(55.0).as_number(), Some(55.0));
/// assert_eq!(Numeric::from("55").as_number(), Some(55.0));
/// assert!(Numeric::from("abc").as_number().is_none());
/// assert!(Numeric::from("  ").is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Numeric {
    /// Null/missing value
    #[default]
    Null,
    /// Value already numeric at the source
    Number(f64),
    /// Raw textual value, parsed on demand
    Text(String),
}

impl Numeric {
    /// Returns true if the value counts as absent: null, or text that trims
    /// to the empty string. Absent values skip range validation and are
    /// excluded from aggregates.
    pub fn is_absent(&self) -> bool {
        match self {
            Numeric::Null => true,
            Numeric::Number(_) => false,
            Numeric::Text(s) => s.trim().is_empty(),
        }
    }

    /// Attempts to read this value as a number.
    ///
    /// Text is trimmed and parsed strictly as `f64`. NaN is never returned;
    /// a present value for which this yields `None` is malformed input
    /// (check [`is_absent`](Self::is_absent) first to tell the two apart).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Numeric::Null => None,
            Numeric::Number(n) if n.is_nan() => None,
            Numeric::Number(n) => Some(*n),
            Numeric::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        }
    }

    /// Reads this value for aggregation: a finite number or nothing.
    ///
    /// Anything absent, malformed, or non-finite is excluded from both the
    /// numerator and the denominator of a mean.
    pub fn as_finite(&self) -> Option<f64> {
        self.as_number().filter(|n| n.is_finite())
    }
}

impl From<f64> for Numeric {
    fn from(n: f64) -> Self {
        Numeric::Number(n)
    }
}

impl From<i64> for Numeric {
    fn from(n: i64) -> Self {
        Numeric::Number(n as f64)
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Numeric::Text(s.to_string())
    }
}

impl From<String> for Numeric {
    fn from(s: String) -> Self {
        Numeric::Text(s)
    }
}

impl From<Option<f64>> for Numeric {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(n) => Numeric::Number(n),
            None => Numeric::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absence() {
        assert!(Numeric::Null.is_absent());
        assert!(Numeric::from("").is_absent());
        assert!(Numeric::from("   ").is_absent());
        assert!(!Numeric::from(0.0).is_absent());
        assert!(!Numeric::from("abc").is_absent());
    }

    #[test]
    fn test_as_number_parses_text() {
        assert_eq!(Numeric::from("55").as_number(), Some(55.0));
        assert_eq!(Numeric::from(" 2.5 ").as_number(), Some(2.5));
        assert_eq!(Numeric::from("abc").as_number(), None);
        assert_eq!(Numeric::from("12,5").as_number(), None);
        assert_eq!(Numeric::Null.as_number(), None);
    }

    #[test]
    fn test_nan_is_never_a_number() {
        assert_eq!(Numeric::Number(f64::NAN).as_number(), None);
        assert_eq!(Numeric::from("NaN").as_number(), None);
    }

    #[test]
    fn test_as_finite_excludes_infinities() {
        assert_eq!(Numeric::Number(f64::INFINITY).as_number(), Some(f64::INFINITY));
        assert_eq!(Numeric::Number(f64::INFINITY).as_finite(), None);
        assert_eq!(Numeric::from(60.0).as_finite(), Some(60.0));
    }

    #[test]
    fn test_untagged_deserialization() {
        let n: Numeric = serde_json::from_str("70.5").unwrap();
        assert_eq!(n, Numeric::Number(70.5));

        let n: Numeric = serde_json::from_str("70").unwrap();
        assert_eq!(n.as_number(), Some(70.0));

        let n: Numeric = serde_json::from_str("\"70.5\"").unwrap();
        assert_eq!(n, Numeric::Text("70.5".to_string()));

        let n: Numeric = serde_json::from_str("null").unwrap();
        assert_eq!(n, Numeric::Null);
    }

    #[test]
    fn test_null_serializes_as_json_null() {
        assert_eq!(serde_json::to_string(&Numeric::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Numeric::Number(26.0)).unwrap(), "26.0");
    }
}
