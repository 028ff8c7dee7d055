//! Core transition engine types and logic.
//!
//! This module contains the pure functional core:
//! - Closed label sets via the `Label` trait
//! - Transition records and the static `TransitionTable`
//! - Immutable step history
//!
//! Nothing in this module performs I/O or holds mutable state.

mod history;
mod label;
mod table;
mod transition;

pub use history::{StepHistory, StepRecord};
pub use label::{Label, ParseLabelError};
pub use table::TransitionTable;
pub use transition::{Reward, Transition, TransitionError};
