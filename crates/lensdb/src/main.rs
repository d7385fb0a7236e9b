use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use lensdb::logging::{init_subscriber, Verbosity};
use lensdb::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    match lensdb::execute(&cli, &mut input, &mut out, &mut err) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
