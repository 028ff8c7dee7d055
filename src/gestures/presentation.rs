//! How a gesture session looks on screen.
//!
//! Maps colors to style classes and short labels, and bundles everything a
//! front end shows after each action into a [`StatusView`].

use super::{Color, Gesture};
use crate::core::{Label, Reward};
use crate::session::Session;
use serde::Serialize;
use std::fmt;

/// Heading shown above the status block.
pub const TITLE: &str = "State Machine App";

/// Style class for a color's background.
///
/// Blue-Down shares the Blue class. Brown-Down has no class of its own and
/// falls back to the Black one.
pub fn color_class(color: Color) -> &'static str {
    match color {
        Color::Black => "state-black",
        Color::Blue | Color::BlueDown => "state-blue",
        Color::Brown => "state-brown",
        Color::Green => "state-green",
        Color::Magenta => "state-magenta",
        Color::White => "state-white",
        Color::Red => "state-red",
        Color::LightBlue => "state-lightblue",
        Color::Yellow => "state-yellow",
        Color::LightPink => "state-lightpink",
        Color::BrownDown => "state-black",
    }
}

/// Short label shown to the user: the name up to the first `-`.
///
/// ```rust
/// use clapwave::gestures::presentation::display_label;
/// use clapwave::gestures::Color;
///
/// assert_eq!(display_label(Color::BlueDown), "Blue");
/// assert_eq!(display_label(Color::LightPink), "LightPink");
/// ```
pub fn display_label(color: Color) -> &'static str {
    let name = color.name();
    name.split('-').next().unwrap_or(name)
}

/// Button caption for a gesture.
pub fn button_caption(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::Clap => "👏 Clap",
        Gesture::Stand => "🧍 Stand",
        Gesture::Wave => "👋 Wave",
    }
}

/// Everything a front end displays after an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub title: &'static str,
    pub state: Color,
    pub label: &'static str,
    pub color_class: &'static str,
    pub total_reward: Reward,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_action: Option<String>,
}

impl StatusView {
    pub fn of(session: &Session<Color, Gesture>) -> Self {
        let state = session.current_state();
        Self {
            title: TITLE,
            state,
            label: display_label(state),
            color_class: color_class(state),
            total_reward: session.total_reward(),
            last_action: session.last_action().map(ToString::to_string),
        }
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title, self.color_class)?;
        writeln!(f, "Current State: {}", self.label)?;
        write!(f, "Total Reward: {}", self.total_reward)?;
        if let Some(last_action) = &self.last_action {
            write!(f, "\nLast Action: {}", last_action)?;
        }
        Ok(())
    }
}
