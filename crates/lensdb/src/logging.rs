//! Tracing subscriber initialization for the lensdb binary.
//!
//! # Priority (highest to lowest)
//!
//! 1. `LENSDB_LOG` env var (per-target directives, e.g. `lensdb_seeker=debug`)
//! 2. `RUST_LOG` env var
//! 3. CLI flags (`-v` → debug, `-q` → error)
//! 4. Default level: `warn`

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Verbose wins if both flags are set.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Installs the global subscriber, writing compact logs to stderr.
///
/// Call once, before the catalog is loaded.
pub fn init_subscriber(verbosity: Verbosity) {
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(true)
                .without_time()
                .compact(),
        )
        .init();
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = std::env::var("LENSDB_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(verbosity.default_level().as_str().to_lowercase())
}
