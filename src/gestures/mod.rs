//! The clap / stand / wave color machine.
//!
//! Twelve color states, three gestures, and one static table. The table is
//! built and validated once, on first use, and shared read-only after that.

pub mod presentation;

use crate::builder::{Rule, TableBuilder};
use crate::core::{Label, Reward, TransitionError, TransitionTable};
use crate::label_enum;
use crate::session::Session;
use std::sync::OnceLock;

label_enum! {
    /// Color states of the machine.
    pub enum Color {
        Black => "Black",
        Blue => "Blue",
        BlueDown => "Blue-Down",
        Brown => "Brown",
        BrownDown => "Brown-Down",
        Green => "Green",
        Magenta => "Magenta",
        White => "White",
        Red => "Red",
        LightBlue => "LightBlue",
        Yellow => "Yellow",
        LightPink => "LightPink",
    }
}

label_enum! {
    /// User gestures that drive the machine.
    pub enum Gesture {
        Clap => "clap",
        Stand => "stand",
        Wave => "wave",
    }
}

/// State every new session starts in.
pub const INITIAL: Color = Color::Black;

const fn rule(from: Color, action: Gesture, to: Color, reward: Reward) -> Rule<Color, Gesture> {
    Rule {
        from,
        action,
        to,
        reward,
    }
}

use Color::*;
use Gesture::*;

/// Every transition of the machine, grouped by source state.
pub const RULES: [Rule<Color, Gesture>; 36] = [
    rule(Black, Clap, Blue, 0),
    rule(Black, Stand, Red, 0),
    rule(Black, Wave, Green, 0),
    rule(Blue, Clap, Brown, 0),
    rule(Blue, Stand, Blue, 0),
    rule(Blue, Wave, Magenta, 0),
    rule(BlueDown, Clap, Brown, 0),
    rule(BlueDown, Stand, Magenta, 0),
    rule(BlueDown, Wave, Blue, 0),
    rule(Brown, Clap, LightBlue, 1),
    rule(Brown, Stand, BrownDown, 0),
    rule(Brown, Wave, White, 0),
    rule(BrownDown, Clap, LightPink, 2),
    rule(BrownDown, Stand, White, 0),
    rule(BrownDown, Wave, Brown, 0),
    rule(Green, Clap, Magenta, 0),
    rule(Green, Stand, Black, 10),
    rule(Green, Wave, Red, 0),
    rule(Magenta, Clap, Magenta, 0),
    rule(Magenta, Stand, Blue, 0),
    rule(Magenta, Wave, BlueDown, 0),
    rule(White, Clap, Yellow, -3),
    rule(White, Stand, Brown, 0),
    rule(White, Wave, Brown, 0),
    rule(Red, Clap, BlueDown, 0),
    rule(Red, Stand, Red, -1),
    rule(Red, Wave, Black, -1),
    rule(LightBlue, Clap, Black, 0),
    rule(LightBlue, Stand, LightPink, 0),
    rule(LightBlue, Wave, Yellow, -1),
    rule(Yellow, Clap, Green, 10),
    rule(Yellow, Stand, LightBlue, -1),
    rule(Yellow, Wave, LightPink, -1),
    rule(LightPink, Clap, Red, 0),
    rule(LightPink, Stand, Yellow, 0),
    rule(LightPink, Wave, LightBlue, 0),
];

const _: () = assert!(RULES.len() == Color::ALL.len() * Gesture::ALL.len());

/// The shared, validated gesture table.
pub fn table() -> &'static TransitionTable<Color, Gesture> {
    static TABLE: OnceLock<TransitionTable<Color, Gesture>> = OnceLock::new();
    TABLE.get_or_init(|| {
        // RULES is checked for totality by the `table_is_total` test
        TableBuilder::new()
            .rules(RULES)
            .build()
            .expect("gesture rules cover every color and gesture exactly once")
    })
}

/// Apply one gesture to a color.
///
/// Pure: returns the next color and the reward for the step. The caller
/// owns any session bookkeeping.
///
/// # Example
///
/// ```rust
/// use clapwave::gestures::{apply_action, Color, Gesture};
///
/// assert_eq!(apply_action(Color::Yellow, Gesture::Clap), Ok((Color::Green, 10)));
/// ```
pub fn apply_action(
    current: Color,
    action: Gesture,
) -> Result<(Color, Reward), TransitionError> {
    let transition = table().apply(current, action)?;
    Ok((transition.to, transition.reward))
}

/// A fresh session in the initial color.
pub fn new_session() -> Session<Color, Gesture> {
    Session::new(INITIAL)
}
