//! Caller-owned session state.
//!
//! A `Session` is the running record of one interaction: the current
//! state, the accumulated reward, the last action taken, and the step
//! history. Stepping is pure - `step` takes the session by reference and
//! returns the next one, so a failed step leaves the caller's value intact.

use crate::core::{Label, Reward, StepHistory, StepRecord, TransitionError, TransitionTable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The most recent action and what it earned.
///
/// Displays as `clap → +2 points`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LastAction<A: Label> {
    pub action: A,
    pub reward: Reward,
}

impl<A: Label> fmt::Display for LastAction<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {:+} points", self.action.name(), self.reward)
    }
}

/// Running record of one interaction with a transition table.
///
/// # Example
///
/// ```rust
/// use clapwave::gestures::{self, Color, Gesture};
/// use clapwave::session::Session;
///
/// let table = gestures::table();
/// let session = Session::new(Color::Black);
///
/// let session = session.step(table, Gesture::Stand).unwrap();
/// let session = session.step(table, Gesture::Wave).unwrap();
///
/// assert_eq!(session.current_state(), Color::Black);
/// assert_eq!(session.total_reward(), -1);
/// assert_eq!(session.last_action().unwrap().to_string(), "wave → -1 points");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Session<S: Label, A: Label> {
    id: Uuid,
    started_at: DateTime<Utc>,
    initial: S,
    current: S,
    total_reward: Reward,
    last_action: Option<LastAction<A>>,
    history: StepHistory<S, A>,
}

impl<S: Label, A: Label> Session<S, A> {
    /// Start a session in `initial` with no reward and no last action.
    pub fn new(initial: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            initial,
            current: initial,
            total_reward: 0,
            last_action: None,
            history: StepHistory::new(),
        }
    }

    /// Apply one action, returning the next session.
    ///
    /// Current state, total reward, last action and history all change
    /// together. On error `self` is untouched.
    pub fn step(
        &self,
        table: &TransitionTable<S, A>,
        action: A,
    ) -> Result<Self, TransitionError> {
        let transition = table.apply(self.current, action).inspect_err(|err| {
            tracing::warn!(session = %self.id, error = %err, "action rejected");
        })?;

        tracing::debug!(
            session = %self.id,
            from = self.current.name(),
            action = action.name(),
            to = transition.to.name(),
            reward = transition.reward,
            "applied transition"
        );

        let record = StepRecord {
            from: self.current,
            action,
            to: transition.to,
            reward: transition.reward,
            timestamp: Utc::now(),
        };

        Ok(Self {
            id: self.id,
            started_at: self.started_at,
            initial: self.initial,
            current: transition.to,
            total_reward: self.total_reward + transition.reward,
            last_action: Some(LastAction {
                action,
                reward: transition.reward,
            }),
            history: self.history.record(record),
        })
    }

    /// Apply actions in order, stopping at the first failure.
    pub fn run<I>(
        &self,
        table: &TransitionTable<S, A>,
        actions: I,
    ) -> Result<Self, TransitionError>
    where
        I: IntoIterator<Item = A>,
    {
        actions
            .into_iter()
            .try_fold(self.clone(), |session, action| session.step(table, action))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn initial_state(&self) -> S {
        self.initial
    }

    pub fn current_state(&self) -> S {
        self.current
    }

    pub fn total_reward(&self) -> Reward {
        self.total_reward
    }

    pub fn last_action(&self) -> Option<&LastAction<A>> {
        self.last_action.as_ref()
    }

    pub fn history(&self) -> &StepHistory<S, A> {
        &self.history
    }

    /// Number of actions applied so far.
    pub fn steps_taken(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::{self, Color, Gesture};

    #[test]
    fn new_session_is_fresh() {
        let session: Session<Color, Gesture> = Session::new(Color::Black);

        assert_eq!(session.initial_state(), Color::Black);
        assert_eq!(session.current_state(), Color::Black);
        assert_eq!(session.total_reward(), 0);
        assert!(session.last_action().is_none());
        assert_eq!(session.steps_taken(), 0);
    }

    #[test]
    fn step_updates_state_reward_and_last_action() {
        let session = Session::new(Color::Brown)
            .step(gestures::table(), Gesture::Clap)
            .unwrap();

        assert_eq!(session.current_state(), Color::LightBlue);
        assert_eq!(session.total_reward(), 1);
        assert_eq!(
            session.last_action(),
            Some(&LastAction {
                action: Gesture::Clap,
                reward: 1,
            })
        );
        assert_eq!(session.steps_taken(), 1);
    }

    #[test]
    fn step_leaves_input_unchanged() {
        let before = Session::new(Color::Green);
        let after = before.step(gestures::table(), Gesture::Stand).unwrap();

        assert_eq!(before.current_state(), Color::Green);
        assert_eq!(before.total_reward(), 0);
        assert_eq!(after.current_state(), Color::Black);
        assert_eq!(after.total_reward(), 10);
        assert_eq!(before.id(), after.id());
    }

    #[test]
    fn clap_stand_wave_from_black_earns_nothing() {
        let session = gestures::new_session()
            .run(gestures::table(), [Gesture::Clap, Gesture::Stand, Gesture::Wave])
            .unwrap();

        assert_eq!(
            session.history().get_path(),
            vec![&Color::Black, &Color::Blue, &Color::Blue, &Color::Magenta]
        );
        assert_eq!(session.total_reward(), 0);
    }

    #[test]
    fn red_detour_nets_nine() {
        let session = gestures::new_session()
            .run(
                gestures::table(),
                [Gesture::Stand, Gesture::Wave, Gesture::Wave, Gesture::Stand],
            )
            .unwrap();

        let rewards: Vec<_> = session.history().steps().iter().map(|s| s.reward).collect();
        assert_eq!(rewards, vec![0, -1, 0, 10]);
        assert_eq!(session.total_reward(), 9);
        assert_eq!(session.current_state(), Color::Black);
    }

    #[test]
    fn total_reward_matches_history() {
        let session = gestures::new_session()
            .run(
                gestures::table(),
                [Gesture::Clap, Gesture::Clap, Gesture::Clap, Gesture::Wave],
            )
            .unwrap();

        assert_eq!(session.total_reward(), session.history().total_reward());
    }

    #[test]
    fn last_action_formats_signed_reward() {
        let positive = LastAction {
            action: Gesture::Clap,
            reward: 2,
        };
        let zero = LastAction {
            action: Gesture::Stand,
            reward: 0,
        };
        let negative = LastAction {
            action: Gesture::Wave,
            reward: -1,
        };

        assert_eq!(positive.to_string(), "clap → +2 points");
        assert_eq!(zero.to_string(), "stand → +0 points");
        assert_eq!(negative.to_string(), "wave → -1 points");
    }

    #[test]
    fn session_serializes_correctly() {
        let session = gestures::new_session()
            .step(gestures::table(), Gesture::Wave)
            .unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let back: Session<Color, Gesture> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id(), session.id());
        assert_eq!(back.current_state(), Color::Green);
        assert_eq!(back.history().steps(), session.history().steps());
    }
}
