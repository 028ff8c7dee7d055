//! Command line front end for the clap / stand / wave machine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clapwave::gestures::{self, Gesture};
use clapwave::shell::{self, OutputFormat, Shell};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "clapwave",
    version,
    about = "Drive the clap / stand / wave color machine"
)]
struct Cli {
    /// Write one JSON document per line instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter, overriding RUST_LOG (for example `debug`).
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read gestures from stdin, one per line (the default).
    Play,
    /// Apply gestures in order, then print a summary.
    Run {
        /// Gestures to apply: clap, stand or wave.
        #[arg(required = true, value_name = "GESTURE")]
        gestures: Vec<Gesture>,
    },
    /// Print every transition of the machine.
    Table,
}

fn init_tracing(directives: Option<&str>) -> Result<()> {
    let filter = match directives {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter '{}'", directives))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref())?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let table = gestures::table();
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal() && format == OutputFormat::Text;
            Shell::new(table, format)
                .with_prompt(interactive)
                .run(stdin.lock(), &mut out)
                .context("shell session failed")?;
        }
        Command::Run { gestures } => Shell::new(table, format)
            .play(&gestures, &mut out)
            .context("failed to apply gestures")?,
        Command::Table => shell::write_table(table, format, &mut out)
            .context("failed to print the transition table")?,
    }

    Ok(())
}
