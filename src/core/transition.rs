//! Transition records and lookup errors.

use super::label::Label;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signed score delta attached to a transition.
pub type Reward = i64;

/// Outcome of taking an action in a state: where the machine goes and
/// what the step is worth.
///
/// # Example
///
/// ```rust
/// use clapwave::core::Transition;
/// use clapwave::gestures::Color;
///
/// let transition = Transition {
///     to: Color::LightPink,
///     reward: 2,
/// };
/// assert_eq!(transition.to, Color::LightPink);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: Label> {
    /// The state being transitioned to
    pub to: S,
    /// Reward earned by this step
    pub reward: Reward,
}

/// Errors that can occur when applying an action
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("No transition defined for action '{action}' in state '{state}'")]
    Undefined { state: String, action: String },
}

impl TransitionError {
    pub(crate) fn undefined<S: Label, A: Label>(state: S, action: A) -> Self {
        Self::Undefined {
            state: state.name().to_string(),
            action: action.name().to_string(),
        }
    }
}
