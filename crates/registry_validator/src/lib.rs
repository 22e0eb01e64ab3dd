//! # TAVI Registry Validator
//!
//! Validation engine for procedure records. This crate provides the rules
//! enforced on the registry's write path:
//!
//! - Required fields (patient identity, procedure date and times, valve)
//! - Numeric measurements within configured medical ranges
//! - Calendar dates that parse and do not lie in the future
//! - 24-hour times with the procedure end strictly after its start
//! - Conditional requiredness for the pre-existing prosthesis group
//!
//! Failures are returned as data (a field→error map), never raised: a
//! record with errors is simply not handed to the persistence collaborator.
//!
//! ## Example
//!
//! ```rust
//! use registry_core::{ProcedureBuilder, ProcedureValidator, ValveType};
//! use registry_validator::RegistryValidator;
//!
//! let record = ProcedureBuilder::new("Mario", "Rossi")
//!     .data_nascita("1948-03-15")
//!     .data_procedura("2024-06-10")
//!     .ora_inizio("08:30")
//!     .ora_fine("10:00")
//!     .tipo_valvola(ValveType::BalloonExpandable)
//!     .modello_valvola("Edwards SAPIEN 3")
//!     .build();
//!
//! let validator = RegistryValidator::new();
//! match validator.validate_record(&record) {
//!     None => println!("Record valid"),
//!     Some(errors) => {
//!         for (field, error) in &errors {
//!             println!("{field}: {error}");
//!         }
//!     }
//! }
//! ```

mod engine;
mod record;
mod rules;

pub use engine::*;
pub use record::*;
pub use rules::*;
