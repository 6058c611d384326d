//! Command-line front end for the built-in functions
//!
//! Provides argument parsing, log setup and the runner behind `vcall`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod runner;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use logging::init_tracing;
pub use runner::{run, Outcome};
