mod shell;

pub use shell::*;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, stdin, stdout};
use std::path::PathBuf;
use std::sync::Once;

use crate::domain::Ledger;

/// Budget Tracker - record income and expenses, then export them to CSV
#[derive(Parser, Debug)]
#[command(name = "budget-tracker")]
#[command(about = "An interactive personal budget tracker")]
#[command(version)]
pub struct Cli {
    /// Read menu answers from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let ledger = Ledger::new();
        let output = stdout().lock();

        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                Shell::new(ledger, BufReader::new(file), output).run()
            }
            None => Shell::new(ledger, stdin().lock(), output).run(),
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber on stderr. `RUST_LOG` takes
/// precedence over the `--verbose` default.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let default_directive = if verbose {
            "budget_tracker=debug"
        } else {
            "budget_tracker=warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["budget-tracker", "--verbose", "--input", "script.txt"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.input, Some(PathBuf::from("script.txt")));

        let cli = Cli::try_parse_from(["budget-tracker"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing(false);
        init_tracing(true);
    }
}
