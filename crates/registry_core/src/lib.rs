//! # TAVI Registry Core
//!
//! Core data model and types for the TAVI procedure registry engine.
//!
//! This crate provides the building blocks shared by the validation,
//! statistics, and host-facing crates: the [`Procedure`] record and its pure
//! derived values, the [`Numeric`] scalar for loosely-typed measurements,
//! the [`RegistryProfile`] configuration surface, filter state, the
//! validation error taxonomy, and the report shapes produced by
//! whole-collection runs.
//!
//! ## Key Concepts
//!
//! - **Procedure**: one patient/procedure record, permissive at the type
//!   level; correctness is judged by validation, not by construction
//! - **RegistryProfile**: read-only configuration (numeric ranges, valve
//!   model catalogs, risk factors)
//! - **ErrorMap**: per-field validation outcomes returned as data
//! - **FilterState**: the three-stage read-path configuration
//!
//! ## Example
//!
//! ```rust
//! use registry_core::{ProcedureBuilder, ValveType};
//!
//! let record = ProcedureBuilder::new("Mario", "Rossi")
//!     .data_nascita("1948-03-15")
//!     .altezza(175.0)
//!     .peso(80.0)
//!     .data_procedura("2024-06-10")
//!     .ora_inizio("08:30")
//!     .ora_fine("10:00")
//!     .tipo_valvola(ValveType::BalloonExpandable)
//!     .modello_valvola("Edwards SAPIEN 3")
//!     .build();
//!
//! assert_eq!(record.full_name(), "Mario Rossi");
//! assert_eq!(record.duration_minutes(), Some(90));
//! assert_eq!(record.bmi(), Some(26.1));
//! ```

pub mod builder;
pub mod error;
pub mod filters;
pub mod profile;
pub mod record;
pub mod validate;
pub mod value;

pub use builder::*;
pub use error::*;
pub use filters::*;
pub use profile::*;
pub use record::*;
pub use validate::*;
pub use value::*;
