//! Custom Table
//!
//! This example builds a small table of its own and shows how validation
//! reports every gap at once.
//!
//! Key concepts:
//! - `label_enum!` declares closed label sets
//! - `TableBuilder` checks the table is total before handing it out
//! - Violations are accumulated, not reported one at a time
//!
//! Run with: cargo run --example custom_table

use clapwave::builder::{BuildError, TableBuilder};
use clapwave::label_enum;
use clapwave::session::Session;

label_enum! {
    enum Mood {
        Calm => "Calm",
        Excited => "Excited",
        Tired => "Tired",
    }
}

label_enum! {
    enum Nudge {
        Cheer => "cheer",
        Rest => "rest",
    }
}

fn main() {
    println!("=== Custom Table Example ===\n");

    println!("Example 1: An incomplete table");
    let incomplete = TableBuilder::new()
        .rule(Mood::Calm, Nudge::Cheer, Mood::Excited, 1)
        .rule(Mood::Excited, Nudge::Rest, Mood::Calm, 0)
        .build();
    match incomplete {
        Err(BuildError::InvalidTable { violations }) => {
            println!("  rejected with {} violations:", violations.len());
            for violation in violations {
                println!("    - {}", violation);
            }
        }
        Err(err) => println!("  rejected: {}", err),
        Ok(_) => println!("  unexpectedly accepted"),
    }

    println!("\nExample 2: A complete table");
    let table = TableBuilder::new()
        .rule(Mood::Calm, Nudge::Cheer, Mood::Excited, 1)
        .rule(Mood::Calm, Nudge::Rest, Mood::Calm, 0)
        .rule(Mood::Excited, Nudge::Cheer, Mood::Tired, -1)
        .rule(Mood::Excited, Nudge::Rest, Mood::Calm, 0)
        .rule(Mood::Tired, Nudge::Cheer, Mood::Tired, -2)
        .rule(Mood::Tired, Nudge::Rest, Mood::Calm, 3)
        .build()
        .unwrap();
    println!("  built {} transitions", table.len());

    let session = Session::new(Mood::Calm)
        .run(&table, [Nudge::Cheer, Nudge::Cheer, Nudge::Rest])
        .unwrap();
    println!("  final mood: {}", session.current_state());
    println!("  total reward: {}", session.total_reward());

    println!("\n=== Example Complete ===");
}
