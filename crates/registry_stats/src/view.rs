//! Host-owned derived view over the record collection.
//!
//! The view owns the current collection and filter state; every derived
//! output (filtered list, counts, statistics) is recomputed from those
//! two inputs on each [`snapshot`](RegistryView::snapshot) call. A snapshot
//! is taken from one consistent pair of inputs and returned as
//! independently-owned data, so consumers never observe a half-updated mix
//! of old records and new filters.

use chrono::{Local, NaiveDate};
use registry_core::{FilterState, Procedure};

use crate::aggregate::{Statistics, StatisticsEngine};
use crate::filter;

/// One consistent derived snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// Records passing the active filters, in source order
    pub records: Vec<Procedure>,
    /// Size of the source collection
    pub total_count: usize,
    /// Size of the filtered collection
    pub filtered_count: usize,
    /// Statistics over the filtered collection
    pub statistics: Statistics,
}

/// Source collection plus filter state, with derived outputs on demand.
///
/// # Example
///
/// ```rust
/// use registry_core::{FilterState, ProcedureBuilder};
/// use registry_stats::RegistryView;
///
/// let mut view = RegistryView::new();
/// view.set_records(vec![
///     ProcedureBuilder::new("Mario", "Rossi").build(),
///     ProcedureBuilder::new("Anna", "Bianchi").build(),
/// ]);
/// view.set_filters(FilterState::new().with_search("rossi"));
///
/// let snapshot = view.snapshot();
/// assert_eq!(snapshot.total_count, 2);
/// assert_eq!(snapshot.filtered_count, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryView {
    records: Vec<Procedure>,
    filters: FilterState,
    engine: StatisticsEngine,
}

impl RegistryView {
    /// Creates an empty view with identity filters.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            filters: FilterState::default(),
            engine: StatisticsEngine::new(),
        }
    }

    /// Creates an empty view computing statistics with a custom engine.
    pub fn with_engine(engine: StatisticsEngine) -> Self {
        Self {
            engine,
            ..Self::new()
        }
    }

    /// Replaces the source collection.
    pub fn set_records(&mut self, records: Vec<Procedure>) {
        self.records = records;
    }

    /// The current source collection.
    pub fn records(&self) -> &[Procedure] {
        &self.records
    }

    /// Inserts a record, replacing any existing record with the same id.
    ///
    /// Drafts (no id) are always appended; they cannot match an existing
    /// record.
    pub fn upsert_record(&mut self, record: Procedure) {
        match record.id.and_then(|id| self.position_of(id)) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    /// Removes the record with the given id, returning whether one existed.
    pub fn remove_record(&mut self, id: i64) -> bool {
        match self.position_of(id) {
            Some(pos) => {
                self.records.remove(pos);
                true
            }
            None => false,
        }
    }

    fn position_of(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.id == Some(id))
    }

    /// Replaces the filter state.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Restores the identity filter state.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// The current filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Recomputes all derived outputs, anchored to the local calendar date.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.snapshot_on(Local::now().date_naive())
    }

    /// Recomputes all derived outputs against a caller-supplied date.
    pub fn snapshot_on(&self, today: NaiveDate) -> ViewSnapshot {
        let records = filter::apply_on(&self.records, &self.filters, today);
        let statistics = self.engine.compute(&records);

        ViewSnapshot {
            total_count: self.records.len(),
            filtered_count: records.len(),
            statistics,
            records,
        }
    }
}
