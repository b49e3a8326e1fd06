//! Structured logging to standard error

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// How much the run reports about itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Stage summaries
    Normal,
    /// Per-image detail
    Verbose,
}

impl Verbosity {
    /// Resolve the `--quiet` / `--verbose` pair, quiet winning
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Most detailed level emitted by this crate
    pub const fn level(self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }

    /// Filter directive: this crate at [`Self::level`], dependencies at warn
    pub fn directive(self) -> String {
        format!(
            "warn,{}={}",
            env!("CARGO_CRATE_NAME"),
            self.level().as_str().to_lowercase()
        )
    }
}

/// Install the global subscriber writing to standard error
///
/// The filter comes from the command line only; `RUST_LOG` is ignored.
/// Calling this more than once leaves the first subscriber in place.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::new(verbosity.directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
