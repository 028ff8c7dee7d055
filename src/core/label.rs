//! Closed label sets for states and actions.
//!
//! Both sides of a transition table are drawn from fixed, closed sets of
//! named values. The `Label` trait exposes that set so tables can be
//! checked for totality when they are built.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Trait for values drawn from a fixed, closed set of labels.
///
/// Implemented by state and action enums. All methods are pure.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: labels key the transition table
/// - `Debug`: labels must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: labels appear in JSON output and history
///
/// # Example
///
/// ```rust
/// use clapwave::core::Label;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl Label for Door {
///     const ALL: &'static [Self] = &[Self::Open, Self::Closed];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::ALL.len(), 2);
/// assert_eq!(Door::Closed.name(), "Closed");
/// ```
pub trait Label:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every member of the set, in declaration order.
    const ALL: &'static [Self];

    /// Display name of the label.
    fn name(&self) -> &'static str;

    /// Check whether this value is listed in `ALL`.
    ///
    /// A hand-written implementation can forget a variant in `ALL`; table
    /// validation uses this to report such labels as out of domain.
    fn is_declared(&self) -> bool {
        Self::ALL.contains(self)
    }

    /// Look a label up by name, ignoring ASCII case and surrounding
    /// whitespace.
    fn parse_name(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.name().eq_ignore_ascii_case(needle))
    }
}

/// Error returned when text does not name any label of a set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{input}' is not a valid {kind}")]
pub struct ParseLabelError {
    /// Name of the label type that was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub input: String,
}
