//! Line-oriented shell for editing conditions.
//!
//! Each line is one [`ShellCommand`]. Results go to `out`; errors and status
//! lines go to `err` and the shell keeps going. Only end of input or `quit`
//! ends it. The prompt is shown in text mode only, so structured output stays
//! parseable.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use lensdb_seeker::{CatalogSource, LoadState, Session};
use thiserror::Error;

use crate::output::{render_conditions, render_kinds, render_records, OutputMode};

const HELP: &str = "\
commands:
  add KIND [VALUE]   set the condition for KIND (no value for yes/no kinds)
  rm KIND            remove the condition for KIND
  conditions         list active conditions
  show               print the matching lenses
  kinds              list condition kinds
  retry              retry loading the catalog after a failure
  help               show this help
  quit               leave the shell
";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add { kind: String, raw: String },
    Remove { kind: String },
    Conditions,
    Show,
    Kinds,
    Retry,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let kind = words.next().map(str::to_string);
        let rest = words.collect::<Vec<_>>().join(" ");

        match verb {
            "add" => Ok(ShellCommand::Add {
                kind: kind.ok_or(ShellError::MissingArgument {
                    command: "add",
                    argument: "condition kind",
                })?,
                raw: rest,
            }),
            "rm" | "remove" => Ok(ShellCommand::Remove {
                kind: kind.ok_or(ShellError::MissingArgument {
                    command: "rm",
                    argument: "condition kind",
                })?,
            }),
            "conditions" | "ls" => Ok(ShellCommand::Conditions),
            "show" => Ok(ShellCommand::Show),
            "kinds" => Ok(ShellCommand::Kinds),
            "retry" => Ok(ShellCommand::Retry),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run(
    session: &mut Session,
    source: &dyn CatalogSource,
    mode: OutputMode,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    let prompt = !mode.is_structured();
    let mut line = String::new();
    loop {
        if prompt {
            write!(out, "lensdb> ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            if prompt {
                writeln!(out)?;
            }
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => return Ok(()),
            Ok(command) => execute(session, source, mode, command, out, err)?,
            Err(e) => writeln!(err, "error: {e}")?,
        }
    }
}

fn execute(
    session: &mut Session,
    source: &dyn CatalogSource,
    mode: OutputMode,
    command: ShellCommand,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    let rendered = match command {
        ShellCommand::Add { kind, raw } => match session.add_condition(&kind, &raw) {
            Ok(queries) => render_conditions(queries, mode),
            Err(e) => return writeln!(err, "error: cannot add condition: {e}"),
        },
        ShellCommand::Remove { kind } => render_conditions(session.remove_query(&kind), mode),
        ShellCommand::Conditions => render_conditions(session.queries(), mode),
        ShellCommand::Show => {
            if let LoadState::Failed { reason } = session.load_state() {
                writeln!(err, "warning: catalog not loaded ({reason})")?;
            }
            render_records(&session.filtered(), session.records().len(), mode)
        }
        ShellCommand::Kinds => render_kinds(session.list_query_types(), mode),
        ShellCommand::Retry => {
            return match session.retry(source) {
                Ok(count) => writeln!(err, "loaded {count} lenses"),
                Err(e) => writeln!(err, "error: {e}"),
            }
        }
        ShellCommand::Help => Ok(HELP.to_string()),
        ShellCommand::Quit => return Ok(()),
    };

    match rendered {
        Ok(text) => out.write_all(text.as_bytes()),
        Err(e) => writeln!(err, "error: {e}"),
    }
}
