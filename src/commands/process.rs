//! process-fat-jars command
//!
//! Scans the root, runs every candidate through the pipeline and prints the
//! `lib` directory of each recorded bundle on stdout.

use std::io::Write;

use console::Style;
use tracing::debug;

use crate::cli::ProcessArgs;
use crate::config::Settings;
use crate::convert::{Converter, NoConversion, SlimJarConverter};
use crate::error::Result;
use crate::pipeline::{BatchReport, Orchestrator};
use crate::scan::{Candidate, CandidateScanner, ExclusionMatcher};
use crate::stage::OutputStager;

/// Run process-fat-jars command
pub fn run(args: ProcessArgs, quiet: bool) -> Result<()> {
    let json = args.json;
    let settings = Settings::from_args(&args)?;
    let report = execute(&settings)?;

    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &report.lib_dirs())?;
        writeln!(stdout)?;
    } else {
        for dir in report.lib_dirs() {
            writeln!(stdout, "{}", dir.display())?;
        }
    }

    if !quiet {
        print_summary(&report);
    }
    Ok(())
}

/// Scan and process a whole batch.
///
/// Candidates are collected before processing starts, so JARs extracted
/// below the root during the run are never picked up as new candidates.
pub fn execute(settings: &Settings) -> Result<BatchReport> {
    let exclusions = ExclusionMatcher::build(&settings.exclusions)?;
    if !exclusions.is_empty() {
        debug!(
            "Excluding {}",
            exclusions.patterns().collect::<Vec<_>>().join(", ")
        );
    }
    let scanner = CandidateScanner::new(&settings.root, &settings.fat_jars, exclusions)?;

    let candidates: Vec<Candidate> = scanner.scan()?.collect();
    debug!(
        "Found {} candidate(s) under '{}'",
        candidates.len(),
        scanner.root().display()
    );

    let converter: Box<dyn Converter> = if settings.convert {
        Box::new(SlimJarConverter::default())
    } else {
        Box::new(NoConversion)
    };
    let stager = OutputStager::new(&settings.out_dir);
    debug!("Staging into '{}'", stager.out_root().display());
    let orchestrator = Orchestrator::new(stager, converter);

    Ok(orchestrator.run(candidates, settings.jobs))
}

fn print_summary(report: &BatchReport) {
    let failed = report.failed();
    let failed_style = if failed > 0 {
        Style::new().for_stderr().red().bold()
    } else {
        Style::new().for_stderr()
    };
    eprintln!(
        "{} {} recorded, {} not fat JARs, {}",
        Style::new().for_stderr().bold().apply_to("Done:"),
        Style::new().for_stderr().green().apply_to(report.recorded()),
        report.not_qualified(),
        failed_style.apply_to(format!("{failed} failed")),
    );
}
