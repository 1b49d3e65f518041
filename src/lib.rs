//! Tamil Nadu government staff payroll simulation engine.
//!
//! This library provides:
//! - Month-by-month salary simulation across the 3rd-7th pay commissions
//! - Commission-transition fixation arithmetic
//! - Scale, pay-band, and pay-matrix increment operators
//! - Probation- and departmental-test-linked increment eligibility
//! - Yearly result grouping with fixation snapshots and increment analysis

pub mod employee;
pub mod error;
pub mod payops;
pub mod probation;
pub mod reference;
pub mod result;
pub mod scale;
mod simulation;
pub mod types;

pub use employee::EmployeeInput;
pub use error::EngineError;
pub use reference::ReferenceTables;
pub use result::{run_payroll, simulate_many, PayrollResult};
pub use types::Commission;
