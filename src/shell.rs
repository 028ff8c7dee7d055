//! Line-oriented front end for the gesture machine.
//!
//! The shell owns one session and replaces it after every accepted action.
//! It reads commands from any `BufRead` and writes to any `Write`, so the
//! binary drives it with stdin/stdout and tests drive it with buffers.

use crate::core::{Label, Reward, TransitionError, TransitionTable};
use crate::gestures::presentation::{button_caption, StatusView};
use crate::gestures::{Color, Gesture, INITIAL};
use crate::session::Session;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// How the shell writes its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// One JSON document per line
    Json,
}

/// A single line of shell input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Gesture),
    Status,
    History,
    Table,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown command '{0}'. Type 'help' for the list of commands")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Some(gesture) = Gesture::parse_name(input) {
            return Ok(Self::Act(gesture));
        }
        match input.to_ascii_lowercase().as_str() {
            "c" => Ok(Self::Act(Gesture::Clap)),
            "s" => Ok(Self::Act(Gesture::Stand)),
            "w" => Ok(Self::Act(Gesture::Wave)),
            "status" => Ok(Self::Status),
            "history" => Ok(Self::History),
            "table" => Ok(Self::Table),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(ParseCommandError(input.to_string())),
        }
    }
}

/// Errors that end a shell run
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// One row of the table listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub from: Color,
    pub action: Gesture,
    pub to: Color,
    pub reward: Reward,
}

#[derive(Serialize)]
struct Summary {
    steps: usize,
    path: Vec<Color>,
    total_reward: Reward,
}

/// One line of the `help` listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HelpEntry {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<&'static str>,
    pub description: &'static str,
}

const fn help(
    command: &'static str,
    shortcut: Option<&'static str>,
    description: &'static str,
) -> HelpEntry {
    HelpEntry {
        command,
        shortcut,
        description,
    }
}

/// Every command the shell understands, in listing order.
pub const HELP: [HelpEntry; 8] = [
    help("clap", Some("c"), "apply the clap gesture"),
    help("stand", Some("s"), "apply the stand gesture"),
    help("wave", Some("w"), "apply the wave gesture"),
    help("status", None, "show the current state"),
    help("history", None, "list the steps taken so far"),
    help("table", None, "list every transition"),
    help("help", None, "show this message"),
    help("quit", None, "leave the shell"),
];

/// Interactive driver around one gesture session.
pub struct Shell<'t> {
    table: &'t TransitionTable<Color, Gesture>,
    session: Session<Color, Gesture>,
    format: OutputFormat,
    prompt: bool,
}

impl<'t> Shell<'t> {
    /// Create a shell with a fresh session in the initial color.
    pub fn new(table: &'t TransitionTable<Color, Gesture>, format: OutputFormat) -> Self {
        Self {
            table,
            session: Session::new(INITIAL),
            format,
            prompt: false,
        }
    }

    /// Print a `> ` prompt before reading each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn session(&self) -> &Session<Color, Gesture> {
        &self.session
    }

    /// Apply one gesture to the owned session.
    ///
    /// On success the session is replaced by the stepped one; on failure it
    /// is kept as it was.
    pub fn dispatch(
        &mut self,
        gesture: Gesture,
    ) -> Result<&Session<Color, Gesture>, TransitionError> {
        self.session = self.session.step(self.table, gesture)?;
        Ok(&self.session)
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> Result<(), ShellError> {
        tracing::info!(session = %self.session.id(), "shell started");
        if self.format == OutputFormat::Text {
            self.write_buttons(out)?;
        }
        self.write_status(out)?;
        self.write_prompt(out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                self.write_prompt(out)?;
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(err) => self.write_notice(out, &err.to_string())?,
            }
            self.write_prompt(out)?;
        }

        tracing::info!(
            session = %self.session.id(),
            steps = self.session.steps_taken(),
            total_reward = self.session.total_reward(),
            "shell finished"
        );
        Ok(())
    }

    /// Apply `gestures` in order, writing the status after each one and a
    /// summary at the end. Stops at the first rejected gesture.
    pub fn play<W: Write>(
        &mut self,
        gestures: &[Gesture],
        out: &mut W,
    ) -> Result<(), ShellError> {
        for &gesture in gestures {
            self.dispatch(gesture)?;
            self.write_status(out)?;
        }
        self.write_summary(out)
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), ShellError> {
        match command {
            Command::Act(gesture) => match self.dispatch(gesture).map(|_| ()) {
                Ok(()) => self.write_status(out),
                // The session is unchanged; tell the user and keep going
                Err(err) => self.write_notice(out, &err.to_string()),
            },
            Command::Status => self.write_status(out),
            Command::History => self.write_history(out),
            Command::Table => write_table(self.table, self.format, out),
            Command::Help => self.write_help(out),
            Command::Quit => Ok(()),
        }
    }

    fn write_status<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        let view = StatusView::of(&self.session);
        match self.format {
            OutputFormat::Text => writeln!(out, "{}\n", view)?,
            OutputFormat::Json => write_json_line(out, &view)?,
        }
        Ok(())
    }

    fn write_history<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        let steps = self.session.history().steps();
        match self.format {
            OutputFormat::Text if steps.is_empty() => writeln!(out, "No actions yet")?,
            OutputFormat::Text => {
                for (n, step) in steps.iter().enumerate() {
                    writeln!(
                        out,
                        "{:>3}. {} --{}--> {} ({:+})",
                        n + 1,
                        step.from,
                        step.action,
                        step.to,
                        step.reward
                    )?;
                }
            }
            OutputFormat::Json => write_json_line(out, &steps)?,
        }
        Ok(())
    }

    fn write_summary<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        let history = self.session.history();
        let summary = Summary {
            steps: history.len(),
            path: history.get_path().into_iter().copied().collect(),
            total_reward: self.session.total_reward(),
        };
        match self.format {
            OutputFormat::Text => {
                let path: Vec<&str> = summary.path.iter().map(|c| c.name()).collect();
                writeln!(out, "Steps: {}", summary.steps)?;
                writeln!(out, "Path: {}", path.join(" -> "))?;
                writeln!(out, "Total Reward: {}", summary.total_reward)?;
            }
            OutputFormat::Json => write_json_line(out, &summary)?,
        }
        Ok(())
    }

    fn write_help<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "Commands:")?;
                for entry in &HELP {
                    let name = match entry.shortcut {
                        Some(shortcut) => format!("{:<5} ({})", entry.command, shortcut),
                        None => entry.command.to_string(),
                    };
                    writeln!(out, "  {:<13}{}", name, entry.description)?;
                }
            }
            OutputFormat::Json => write_json_line(out, &serde_json::json!({ "help": HELP }))?,
        }
        Ok(())
    }

    fn write_notice<W: Write>(&self, out: &mut W, message: &str) -> Result<(), ShellError> {
        match self.format {
            OutputFormat::Text => writeln!(out, "! {}", message)?,
            OutputFormat::Json => {
                write_json_line(out, &serde_json::json!({ "error": message }))?
            }
        }
        Ok(())
    }

    fn write_buttons<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        let buttons: Vec<String> = Gesture::ALL
            .iter()
            .map(|&g| format!("[{}] ({})", button_caption(g), g.name()))
            .collect();
        writeln!(out, "{}", buttons.join("  "))?;
        Ok(())
    }

    fn write_prompt<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        if self.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Write every transition of `table` in declaration order.
pub fn write_table<W: Write>(
    table: &TransitionTable<Color, Gesture>,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), ShellError> {
    let rows: Vec<TableRow> = table
        .iter()
        .map(|(from, action, transition)| TableRow {
            from,
            action,
            to: transition.to,
            reward: transition.reward,
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for row in &rows {
                writeln!(
                    out,
                    "{:<10} {:<5} -> {:<10} {:+}",
                    row.from.name(),
                    row.action.name(),
                    row.to.name(),
                    row.reward
                )?;
            }
        }
        OutputFormat::Json => write_json_line(out, &rows)?,
    }
    Ok(())
}

fn write_json_line<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), ShellError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures;
    use std::io::Cursor;

    fn run_text(input: &str) -> (Shell<'static>, String) {
        let mut shell = Shell::new(gestures::table(), OutputFormat::Text);
        let mut out = Vec::new();
        shell.run(Cursor::new(input), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn commands_parse_names_and_shortcuts() {
        assert_eq!("clap".parse::<Command>(), Ok(Command::Act(Gesture::Clap)));
        assert_eq!("S".parse::<Command>(), Ok(Command::Act(Gesture::Stand)));
        assert_eq!(" w ".parse::<Command>(), Ok(Command::Act(Gesture::Wave)));
        assert_eq!("history".parse::<Command>(), Ok(Command::History));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseCommandError("jump".to_string()))
        );
    }

    #[test]
    fn shell_applies_gestures_in_order() {
        let (shell, output) = run_text("stand\nwave\nwave\nstand\n");

        assert_eq!(shell.session().current_state(), Color::Black);
        assert_eq!(shell.session().total_reward(), 9);
        assert!(output.contains("Last Action: stand → +10 points"));
        assert!(output.contains("Total Reward: 9"));
    }

    #[test]
    fn shell_stops_at_quit() {
        let (shell, _) = run_text("c\nquit\nc\n");

        assert_eq!(shell.session().current_state(), Color::Blue);
        assert_eq!(shell.session().steps_taken(), 1);
    }

    #[test]
    fn unknown_command_keeps_session() {
        let (shell, output) = run_text("jump\n\n");

        assert_eq!(shell.session().steps_taken(), 0);
        assert!(output.contains("! Unknown command 'jump'"));
    }

    #[test]
    fn history_lists_steps() {
        let (_, output) = run_text("history\nw\ns\nhistory\n");

        assert!(output.contains("No actions yet"));
        assert!(output.contains("  1. Black --wave--> Green (+0)"));
        assert!(output.contains("  2. Green --stand--> Black (+10)"));
    }

    #[test]
    fn json_status_is_one_line_per_action() {
        let mut shell = Shell::new(gestures::table(), OutputFormat::Json);
        let mut out = Vec::new();
        shell.run(Cursor::new("clap\nclap\n"), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["state"], "Black");
        assert_eq!(lines[2]["state"], "Brown");
        assert_eq!(lines[2]["last_action"], "clap → +0 points");
    }

    #[test]
    fn help_lists_every_command() {
        let (_, output) = run_text("help\n");

        assert!(output.contains("Commands:\n  clap  (c)    apply the clap gesture\n"));
        assert!(output.contains("  history      list the steps taken so far\n"));
        assert!(output.contains("  quit         leave the shell\n"));
    }

    #[test]
    fn json_help_keeps_every_line_parseable() {
        let mut shell = Shell::new(gestures::table(), OutputFormat::Json);
        let mut out = Vec::new();
        shell.run(Cursor::new("help\nclap\n"), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        let entries = lines[1]["help"].as_array().unwrap();
        assert_eq!(entries.len(), HELP.len());
        assert_eq!(entries[0]["command"], "clap");
        assert_eq!(entries[0]["shortcut"], "c");
        assert!(entries[3].get("shortcut").is_none());
        assert_eq!(lines[2]["state"], "Blue");
    }

    #[test]
    fn play_writes_summary() {
        let mut shell = Shell::new(gestures::table(), OutputFormat::Text);
        let mut out = Vec::new();
        shell
            .play(&[Gesture::Wave, Gesture::Clap, Gesture::Wave], &mut out)
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Steps: 3"));
        assert!(output.contains("Path: Black -> Green -> Magenta -> Blue-Down"));
        assert!(output.ends_with("Total Reward: 0\n"));
    }

    #[test]
    fn table_listing_has_every_entry() {
        let mut out = Vec::new();
        write_table(gestures::table(), OutputFormat::Text, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 36);
        assert!(output.contains("Brown-Down clap  -> LightPink  +2"));
    }

    #[test]
    fn table_json_round_trips_rows() {
        let mut out = Vec::new();
        write_table(gestures::table(), OutputFormat::Json, &mut out).unwrap();

        let rows: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows.len(), 36);
        assert_eq!(rows[0]["from"], "Black");
        assert_eq!(rows[0]["action"], "clap");
        assert_eq!(rows[0]["to"], "Blue");
    }

    #[test]
    fn prompt_is_written_when_enabled() {
        let mut shell = Shell::new(gestures::table(), OutputFormat::Text).with_prompt(true);
        let mut out = Vec::new();
        shell.run(Cursor::new("quit\n"), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.ends_with("> "));
    }
}
