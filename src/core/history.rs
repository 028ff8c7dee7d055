//! Step history tracking.
//!
//! Provides immutable tracking of the steps a session has taken,
//! following functional programming principles.

use super::label::Label;
use super::transition::Reward;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied action.
///
/// # Example
///
/// ```rust
/// use clapwave::core::StepRecord;
/// use clapwave::gestures::{Color, Gesture};
/// use chrono::Utc;
///
/// let record = StepRecord {
///     from: Color::Brown,
///     action: Gesture::Clap,
///     to: Color::LightBlue,
///     reward: 1,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.reward, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepRecord<S: Label, A: Label> {
    /// The state the action was taken in
    pub from: S,
    /// The action that was applied
    pub action: A,
    /// The state the machine moved to
    pub to: S,
    /// Reward earned by the step
    pub reward: Reward,
    /// When the step was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied steps.
///
/// History is immutable - the `record` method returns a new history
/// with the step added.
///
/// # Example
///
/// ```rust
/// use clapwave::core::{StepHistory, StepRecord};
/// use clapwave::gestures::{Color, Gesture};
/// use chrono::Utc;
///
/// let history = StepHistory::new()
///     .record(StepRecord {
///         from: Color::Black,
///         action: Gesture::Stand,
///         to: Color::Red,
///         reward: 0,
///         timestamp: Utc::now(),
///     })
///     .record(StepRecord {
///         from: Color::Red,
///         action: Gesture::Wave,
///         to: Color::Black,
///         reward: -1,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![&Color::Black, &Color::Red, &Color::Black]);
/// assert_eq!(history.total_reward(), -1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepHistory<S: Label, A: Label> {
    steps: Vec<StepRecord<S, A>>,
}

impl<S: Label, A: Label> Default for StepHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Label, A: Label> StepHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the step added.
    ///
    /// The steps are copied on every call, so recording `n` steps one at a
    /// time costs O(n²) overall and the history is never truncated.
    pub fn record(&self, step: StepRecord<S, A>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the state of the first step,
    /// then the `to` state of each step.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Sum of the rewards of every recorded step.
    pub fn total_reward(&self) -> Reward {
        self.steps.iter().map(|step| step.reward).sum()
    }

    /// Calculate total duration from first to last step.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all steps in order.
    pub fn steps(&self) -> &[StepRecord<S, A>] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::{Color, Gesture};

    fn step(
        from: Color,
        action: Gesture,
        to: Color,
        reward: Reward,
    ) -> StepRecord<Color, Gesture> {
        StepRecord {
            from,
            action,
            to,
            reward,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StepHistory<Color, Gesture> = StepHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.total_reward(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = StepHistory::new();

        let new_history = history.record(step(Color::Black, Gesture::Clap, Color::Blue, 0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StepHistory::new()
            .record(step(Color::Brown, Gesture::Stand, Color::BrownDown, 0))
            .record(step(Color::BrownDown, Gesture::Clap, Color::LightPink, 2));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &Color::Brown);
        assert_eq!(path[1], &Color::BrownDown);
        assert_eq!(path[2], &Color::LightPink);
    }

    #[test]
    fn total_reward_sums_steps() {
        let history = StepHistory::new()
            .record(step(Color::White, Gesture::Clap, Color::Yellow, -3))
            .record(step(Color::Yellow, Gesture::Clap, Color::Green, 10))
            .record(step(Color::Green, Gesture::Stand, Color::Black, 10));

        assert_eq!(history.total_reward(), 17);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StepHistory::new().record(StepRecord {
            from: Color::Black,
            action: Gesture::Wave,
            to: Color::Green,
            reward: 0,
            timestamp: start,
        });

        let history = history.record(StepRecord {
            from: Color::Green,
            action: Gesture::Stand,
            to: Color::Black,
            reward: 10,
            timestamp: start + chrono::Duration::milliseconds(250),
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_step_has_duration_zero() {
        let history =
            StepHistory::new().record(step(Color::Red, Gesture::Stand, Color::Red, -1));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_with_display_names() {
        let history =
            StepHistory::new().record(step(Color::Magenta, Gesture::Wave, Color::BlueDown, 0));

        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"Blue-Down\""));
        assert!(json.contains("\"wave\""));

        let deserialized: StepHistory<Color, Gesture> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.steps(), history.steps());
    }
}
