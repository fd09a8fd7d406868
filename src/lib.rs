//! staffbook - Staff roster for a single organization
//!
//! Keeps staff records in a slot-based key-value store, answers filtered
//! queries over them, and supports create/update/delete with generated ids.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::StaffbookError;
