//! fatjar - Spring Boot fat JAR stager
//!
//! Finds Spring Boot fat JARs under a directory tree, unpacks the JARs nested
//! in each one into a per-application directory and records its start class,
//! ready for building a class data sharing archive.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod config;
mod convert;
mod error;
mod extract;
mod logging;
mod path_utils;
mod pipeline;
mod scan;
mod stage;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use logging::Verbosity;

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let result = match cli.command {
        Commands::ProcessFatJars(args) => commands::process::run(args, cli.quiet),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
