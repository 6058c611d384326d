//! `vcall` command-line entry point
//!
//! Parses arguments, sets up logging and delegates to the runner.

use clap::Parser as ClapParser;
use value_cli::{init_tracing, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    match run(&cli) {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
