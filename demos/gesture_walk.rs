//! Gesture Walk
//!
//! This example walks the color machine through a few gesture sequences.
//!
//! Key concepts:
//! - The session is a value: every step returns a new one
//! - Rewards accumulate per step and show up in the history
//! - The status view is what a front end would render
//!
//! Run with: cargo run --example gesture_walk

use clapwave::gestures::presentation::StatusView;
use clapwave::gestures::{self, Gesture};

fn main() {
    println!("=== Gesture Walk ===\n");

    let table = gestures::table();
    let walks: [(&str, &[Gesture]); 3] = [
        ("Warm-up", &[Gesture::Clap, Gesture::Stand, Gesture::Wave]),
        (
            "Red detour",
            &[Gesture::Stand, Gesture::Wave, Gesture::Wave, Gesture::Stand],
        ),
        (
            "Brown-Down bonus",
            &[Gesture::Clap, Gesture::Clap, Gesture::Stand, Gesture::Clap],
        ),
    ];

    for (title, moves) in walks {
        println!("{}:", title);
        let mut session = gestures::new_session();
        for &gesture in moves {
            session = match session.step(table, gesture) {
                Ok(next) => next,
                Err(err) => {
                    println!("  rejected: {}", err);
                    break;
                }
            };
            let view = StatusView::of(&session);
            println!(
                "  {:<6} -> {:<10} total {:>3}",
                gesture,
                session.current_state(),
                view.total_reward
            );
        }
        let summary = StatusView::of(&session).to_string().replace('\n', " | ");
        println!("  final: {}\n", summary);
    }

    println!("=== Example Complete ===");
}
