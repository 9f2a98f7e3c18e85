//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core logic for each renombra operation,
//! separated from CLI concerns like argument parsing and printing.

pub mod check;
pub mod organize;

pub use check::check_operation;
pub use organize::{organize_operation, FileOutcome, OrganizeOptions, REVIEW_FOLDER};
