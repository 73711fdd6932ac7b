//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// fatjar - Spring Boot fat JAR stager
///
/// Finds fat JARs under a root directory, extracts their nested JARs and
/// records their start class, one directory per application.
#[derive(Parser, Debug)]
#[command(
    name = "fatjar",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extracts nested JARs and Start-Class from Spring Boot fat JARs",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  fatjar process-fat-jars --fat-jars '**/*.jar'\n    \
                  fatjar process-fat-jars -r /srv/apps -j '**/target/*.jar' -e '**/*-sources.jar'\n    \
                  fatjar process-fat-jars -c fatjar.yaml --json"
)]
pub struct Cli {
    /// Show debug output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract nested JARs and Start-Class from fat JARs
    #[command(name = "process-fat-jars", visible_alias = "process")]
    ProcessFatJars(ProcessArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the process-fat-jars command
#[derive(Args, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  All JARs below the current directory:\n    fatjar process-fat-jars -j '**/*.jar'\n\n\
                  Skip test fixtures, write to /tmp/cds:\n    fatjar process-fat-jars -j '**/*.jar' -e '**/test/**' -o /tmp/cds\n\n\
                  Four workers, no slim JAR:\n    fatjar process-fat-jars -j '**/*.jar' --jobs 4 --no-convert")]
pub struct ProcessArgs {
    /// Absolute directory to search (defaults to current directory)
    #[arg(long, short = 'r', env = "FATJAR_ROOT")]
    pub root: Option<PathBuf>,

    /// Glob selecting candidate JARs, relative to the root
    #[arg(long = "fat-jars", short = 'j', value_name = "GLOB")]
    pub fat_jars: Option<String>,

    /// Glob of paths to skip (repeatable)
    #[arg(long = "exclusion", short = 'e', value_name = "GLOB")]
    pub exclusions: Vec<String>,

    /// Output directory [default: appcds]
    #[arg(long = "out-dir", short = 'o', env = "FATJAR_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Number of bundles processed in parallel [default: 1]
    #[arg(long, env = "FATJAR_JOBS", value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: Option<u16>,

    /// Do not write a slim JAR next to the extracted JARs
    #[arg(long)]
    pub no_convert: bool,

    /// YAML file with defaults for these options
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the resulting lib directories as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
