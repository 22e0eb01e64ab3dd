//! Aggregate statistics over procedure record collections.
//!
//! The engine computes one immutable [`Statistics`] snapshot per call;
//! consumers replace snapshots wholesale and never mutate them in place.
//! Absent and malformed measurements are excluded from both numerator and
//! denominator of every mean; they are never coerced to zero.

use std::collections::BTreeMap;

use registry_core::{Procedure, ValveType};
use serde::{Deserialize, Serialize};

/// Aggregate snapshot over a record collection.
///
/// `average_duration_minutes` is `None` when no record carries both a start
/// and an end time, keeping "no data" distinct from a zero-minute average.
/// The default value is the snapshot of an empty collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of records in the collection
    pub total_procedures: usize,

    /// Mean procedure duration over records with both times present
    pub average_duration_minutes: Option<f64>,

    /// Share of records with balloon pre-dilatation, 0–100
    pub pre_dilatazione_percentage: f64,
    /// Share of records with balloon post-dilatation, 0–100
    pub post_dilatazione_percentage: f64,

    /// Mean ejection fraction over present values
    pub average_fe: Option<f64>,
    /// Mean peak velocity over present values
    pub average_vmax: Option<f64>,
    /// Mean peak gradient over present values
    pub average_gmax: Option<f64>,
    /// Mean gradient over present values
    pub average_gmed: Option<f64>,
    /// Mean valve area over present values
    pub average_ava: Option<f64>,

    /// Records implanting a balloon-expandable valve
    pub balloon_expandable_count: usize,
    /// Records implanting a self-expandable valve
    pub self_expandable_count: usize,

    /// Most implanted models as (model, count), most frequent first
    pub top_valve_models: Vec<(String, usize)>,
}

/// Computes [`Statistics`] snapshots from record collections.
///
/// # Example
///
/// ```rust
/// use registry_core::ProcedureBuilder;
/// use registry_stats::StatisticsEngine;
///
/// let records = vec![
///     ProcedureBuilder::new("Mario", "Rossi")
///         .ora_inizio("08:30")
///         .ora_fine("10:00")
///         .fe(55.0)
///         .build(),
///     ProcedureBuilder::new("Anna", "Bianchi").fe(45.0).build(),
/// ];
///
/// let stats = StatisticsEngine::new().compute(&records);
/// assert_eq!(stats.total_procedures, 2);
/// assert_eq!(stats.average_duration_minutes, Some(90.0));
/// assert_eq!(stats.average_fe, Some(50.0));
/// ```
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    top_models: usize,
}

impl StatisticsEngine {
    /// Creates an engine reporting the top 5 valve models.
    pub fn new() -> Self {
        Self { top_models: 5 }
    }

    /// Sets how many entries `top_valve_models` reports.
    pub fn with_top_models(mut self, n: usize) -> Self {
        self.top_models = n;
        self
    }

    /// Computes one snapshot over the collection.
    pub fn compute(&self, records: &[Procedure]) -> Statistics {
        let average_duration_minutes = mean(
            records
                .iter()
                .filter_map(|r| r.duration_minutes().map(|m| m as f64)),
        );

        Statistics {
            total_procedures: records.len(),
            average_duration_minutes,
            pre_dilatazione_percentage: boolean_percentage(records, |r| r.pre_dilatazione),
            post_dilatazione_percentage: boolean_percentage(records, |r| r.post_dilatazione),
            average_fe: mean(records.iter().filter_map(|r| r.fe.as_finite())),
            average_vmax: mean(records.iter().filter_map(|r| r.vmax.as_finite())),
            average_gmax: mean(records.iter().filter_map(|r| r.gmax.as_finite())),
            average_gmed: mean(records.iter().filter_map(|r| r.gmed.as_finite())),
            average_ava: mean(records.iter().filter_map(|r| r.ava.as_finite())),
            balloon_expandable_count: count_valve_type(records, ValveType::BalloonExpandable),
            self_expandable_count: count_valve_type(records, ValveType::SelfExpandable),
            top_valve_models: top_n(
                count_occurrences(records, |r| r.modello_valvola.as_str()),
                self.top_models,
            ),
        }
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn count_valve_type(records: &[Procedure], tipo: ValveType) -> usize {
    records
        .iter()
        .filter(|r| r.tipo_valvola == Some(tipo))
        .count()
}

/// Mean over finite values, `None` when nothing qualifies.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        if value.is_finite() {
            sum += value;
            count += 1;
        }
    }

    (count > 0).then(|| sum / count as f64)
}

/// Share of items satisfying the predicate, as a 0–100 percentage.
///
/// Defined as `0` for an empty collection.
pub fn boolean_percentage<T, F>(items: &[T], is_true: F) -> f64
where
    F: Fn(&T) -> bool,
{
    if items.is_empty() {
        return 0.0;
    }

    let count = items.iter().filter(|item| is_true(item)).count();
    (count as f64 / items.len() as f64) * 100.0
}

/// Counts key occurrences, preserving first-encounter order.
///
/// Blank keys are absent data and are not counted.
pub fn count_occurrences<T, F>(items: &[T], key: F) -> Vec<(String, usize)>
where
    F: Fn(&T) -> &str,
{
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        let name = key(item).trim();
        if name.is_empty() {
            continue;
        }

        match counts.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.to_string(), 1)),
        }
    }

    counts
}

/// Top `n` entries by descending count.
///
/// The sort is stable, so entries with equal counts keep their
/// first-encounter order.
pub fn top_n(mut counts: Vec<(String, usize)>, n: usize) -> Vec<(String, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Groups items by a derived key.
pub fn group_by<T, K, F>(items: &[T], key: F) -> BTreeMap<K, Vec<T>>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}
