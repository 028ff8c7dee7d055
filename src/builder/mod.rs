//! Builder API for constructing transition tables.
//!
//! This module provides a fluent builder and a label macro for declaring
//! tables with minimal boilerplate. Tables are validated for totality when
//! they are built.

pub mod error;
pub mod macros;
pub mod table;

pub use error::{BuildError, TableViolation};
pub use table::{Rule, TableBuilder};
