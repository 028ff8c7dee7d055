//! Build errors for transition tables.

use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one rule before .build()")]
    NoTransitions,

    #[error("Transition table failed validation with {} violation(s)", .violations.len())]
    InvalidTable { violations: Vec<TableViolation> },
}

/// A single problem found while validating a table.
///
/// Validation collects every violation rather than stopping at the first,
/// so one build attempt reports the whole picture.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("No transition for action '{action}' in state '{state}'")]
    Missing { state: String, action: String },

    #[error("Action '{action}' in state '{state}' is defined {count} times")]
    Duplicate {
        state: String,
        action: String,
        count: usize,
    },

    #[error("Label '{label}' is not declared in its label set")]
    OutOfDomain { label: String },
}
