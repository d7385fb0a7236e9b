//! Command-line definition and command execution.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lensdb_seeker::{list_query_types, FileSource, Session};

use crate::output::{render_kinds, render_records, OutputMode};
use crate::shell;

/// Narrow a camera lens catalog to the lenses matching every condition.
#[derive(Debug, Parser)]
#[command(name = "lensdb", version)]
pub struct Cli {
    /// Catalog file (a JSON array of lens records)
    #[arg(
        long,
        short = 'd',
        env = "LENSDB_DATA",
        default_value = "lens_data.json",
        global = true
    )]
    pub data: PathBuf,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputMode::Text, global = true)]
    pub output: OutputMode,

    /// Log at debug level
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log errors only
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available condition kinds
    Kinds,

    /// Print the lenses matching every condition
    Find {
        /// Condition as KIND=VALUE, or KIND alone for yes/no kinds
        #[arg(long = "where", short = 'w', value_name = "KIND[=VALUE]")]
        conditions: Vec<Condition>,
    },

    /// Edit conditions interactively
    Shell,
}

/// A condition as typed on the command line, before parsing its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub kind: String,
    pub raw: String,
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (kind, raw) = s.split_once('=').unwrap_or((s, ""));
        let kind = kind.trim();
        if kind.is_empty() {
            return Err(format!("missing condition kind in '{s}'"));
        }
        Ok(Condition {
            kind: kind.to_string(),
            raw: raw.trim().to_string(),
        })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}={}", self.kind, self.raw)
        }
    }
}

/// Runs one command. Results go to `out`; shell diagnostics go to `err`.
pub fn run(
    cli: &Cli,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let source = FileSource::new(&cli.data);

    match &cli.command {
        Command::Kinds => {
            out.write_all(render_kinds(list_query_types(), cli.output)?.as_bytes())?;
        }
        Command::Find { conditions } => {
            let mut session = Session::new();
            session
                .load(&source)
                .context("cannot load the lens catalog")?;
            for condition in conditions {
                session
                    .add_condition(&condition.kind, &condition.raw)
                    .with_context(|| format!("cannot add condition {condition}"))?;
            }
            let visible = session.filtered();
            let rendered = render_records(&visible, session.records().len(), cli.output)?;
            out.write_all(rendered.as_bytes())?;
        }
        Command::Shell => {
            let mut session = Session::new();
            if let Err(e) = session.load(&source) {
                writeln!(err, "error: cannot load the lens catalog: {e}")?;
                writeln!(err, "type 'retry' to try again")?;
            }
            shell::run(&mut session, &source, cli.output, input, out, err)?;
        }
    }

    Ok(())
}

/// [`run`], then flushes `out` so a failed final write is reported.
pub fn execute(
    cli: &Cli,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    run(cli, input, out, err)?;
    out.flush().context("cannot write output")
}
