//! LensDB command-line front end.
//!
//! A thin layer over [`lensdb_seeker`]: it loads the catalog from a file,
//! turns arguments or shell lines into conditions, and prints the visible
//! lenses. No filtering happens here.

pub mod cli;
pub mod logging;
pub mod output;
pub mod shell;

pub use cli::{execute, run, Cli, Command, Condition};
pub use output::OutputMode;
