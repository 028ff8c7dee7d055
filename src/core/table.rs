//! Static transition tables.
//!
//! A `TransitionTable` maps every (state, action) pair to exactly one
//! [`Transition`]. Tables are only produced by
//! [`TableBuilder`](crate::builder::TableBuilder), which rejects anything
//! that is not total over the declared labels. Lookups are pure.

use super::label::Label;
use super::transition::{Transition, TransitionError};
use std::collections::HashMap;

/// Immutable mapping from (state, action) to transition.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: Label, A: Label> {
    entries: HashMap<(S, A), Transition<S>>,
}

impl<S: Label, A: Label> TransitionTable<S, A> {
    pub(crate) fn from_entries(entries: HashMap<(S, A), Transition<S>>) -> Self {
        Self { entries }
    }

    /// Look up the transition for `action` taken in `state`.
    ///
    /// This is a pure function. A pair with no entry is reported as
    /// [`TransitionError::Undefined`], never skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clapwave::gestures::{self, Color, Gesture};
    ///
    /// let table = gestures::table();
    /// let step = table.apply(Color::Green, Gesture::Stand).unwrap();
    /// assert_eq!(step.to, Color::Black);
    /// assert_eq!(step.reward, 10);
    /// ```
    pub fn apply(&self, state: S, action: A) -> Result<Transition<S>, TransitionError> {
        self.entries
            .get(&(state, action))
            .copied()
            .ok_or_else(|| TransitionError::undefined(state, action))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order (states first, then actions).
    pub fn iter(&self) -> impl Iterator<Item = (S, A, Transition<S>)> + '_ {
        S::ALL.iter().flat_map(move |&state| {
            A::ALL.iter().filter_map(move |&action| {
                self.entries
                    .get(&(state, action))
                    .map(|transition| (state, action, *transition))
            })
        })
    }

    /// Every entry that leads into `target`, in declaration order.
    pub fn incoming(&self, target: S) -> Vec<(S, A, Transition<S>)> {
        self.iter()
            .filter(|(_, _, transition)| transition.to == target)
            .collect()
    }
}
