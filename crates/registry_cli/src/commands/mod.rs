pub mod check;
pub mod list;
pub mod stats;
pub mod validate;
