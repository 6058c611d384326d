//! Command-line arguments

use clap::Parser;

/// Apply `regex(PATTERN, STRING)` and print the result
#[derive(Debug, Parser)]
#[command(name = "vcall", version, about)]
pub struct Cli {
    /// Regular expression to apply
    pub pattern: String,

    /// Subject string; optional with --type-only
    pub string: Option<String>,

    /// Print only the result type, without matching
    #[arg(short = 't', long)]
    pub type_only: bool,

    /// Treat the pattern as not yet known
    #[arg(short = 'u', long)]
    pub unknown_pattern: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
