//! # TAVI Registry Statistics
//!
//! Read-path derivations over procedure record collections:
//!
//! - Filter pipeline (text search, valve type, time period)
//! - Aggregate statistics (means, percentages, model rankings)
//! - A host-owned derived view tying collection + filters to consistent
//!   snapshots
//!
//! Everything here is pure computation over caller-supplied snapshots:
//! no I/O, no locking, no shared mutable state between calls. Malformed
//! values inside already-persisted records never fail a computation;
//! they are excluded from aggregates instead.
//!
//! ## Example
//!
//! ```rust
//! use registry_core::{FilterState, ProcedureBuilder};
//! use registry_stats::{apply, StatisticsEngine};
//!
//! let records = vec![
//!     ProcedureBuilder::new("Mario", "Rossi")
//!         .modello_valvola("Edwards SAPIEN 3")
//!         .build(),
//!     ProcedureBuilder::new("Anna", "Bianchi")
//!         .modello_valvola("Portico")
//!         .build(),
//! ];
//!
//! let filtered = apply(&records, &FilterState::new().with_search("bianchi"));
//! let stats = StatisticsEngine::new().compute(&filtered);
//!
//! assert_eq!(stats.total_procedures, 1);
//! assert_eq!(stats.top_valve_models[0].0, "Portico");
//! ```

mod aggregate;
mod filter;
mod view;

pub use aggregate::*;
pub use filter::*;
pub use view::*;
