//! Clapwave: a gesture-driven reward state machine
//!
//! Clapwave follows a "pure core, imperative shell" layout. The core is a
//! static transition table, a total function from (state, action) to
//! (next state, reward), and a session value that callers pass in and get
//! back from every step. The shell reads gestures from a terminal and shows
//! the result.
//!
//! # Core Concepts
//!
//! - **Label**: closed sets of states and actions via the `Label` trait
//! - **TransitionTable**: validated, total lookup from (state, action)
//! - **Session**: caller-owned current state, reward total and history
//!
//! # Example
//!
//! ```rust
//! use clapwave::gestures::{self, Color, Gesture};
//!
//! let table = gestures::table();
//! let session = gestures::new_session()
//!     .run(table, [Gesture::Stand, Gesture::Wave, Gesture::Wave, Gesture::Stand])
//!     .unwrap();
//!
//! assert_eq!(session.current_state(), Color::Black);
//! assert_eq!(session.total_reward(), 9);
//! ```

pub mod builder;
pub mod core;
pub mod gestures;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use crate::builder::{BuildError, TableBuilder};
pub use crate::core::{Label, Reward, Transition, TransitionError, TransitionTable};
pub use crate::session::{LastAction, Session};
