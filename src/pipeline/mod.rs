//! Per-candidate processing
//!
//! Each candidate goes through
//!
//! ```text
//! Discovered -> Classified -> Staged -> Extracted -> Converted -> Recorded
//!                    \            \          \            \
//!                     `------------`----------`------------`--> Skipped
//! ```
//!
//! A candidate without a start class, or one failing at any step, ends as
//! [`CandidateOutcome::Skipped`]; the failure is logged and never reaches the
//! batch. Nothing is retried.

mod parallel;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::bundle::{BundleClassifier, BundleMarker, Classification};
use crate::convert::Converter;
use crate::error::{FatJarError, Result};
use crate::extract::NestedArchiveExtractor;
use crate::path_utils;
use crate::scan::Candidate;
use crate::stage::OutputStager;

/// Step at which a candidate failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Classify,
    Stage,
    Extract,
    Convert,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Classify => "classify",
            Step::Stage => "stage",
            Step::Extract => "extract",
            Step::Convert => "convert",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum SkipReason {
    NotQualified,
    Failed { step: Step, error: FatJarError },
}

#[derive(Debug)]
pub enum CandidateOutcome {
    /// Absolute path of the bundle's `lib` directory
    Recorded(PathBuf),
    Skipped(SkipReason),
}

/// Outcomes of a batch, in discovery order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(Candidate, CandidateOutcome)>,
}

impl BatchReport {
    /// `lib` directories of every recorded bundle, in discovery order
    pub fn lib_dirs(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                CandidateOutcome::Recorded(dir) => Some(dir.as_path()),
                CandidateOutcome::Skipped(_) => None,
            })
            .collect()
    }

    pub fn recorded(&self) -> usize {
        self.lib_dirs().len()
    }

    pub fn not_qualified(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, CandidateOutcome::Skipped(SkipReason::NotQualified)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, CandidateOutcome::Skipped(SkipReason::Failed { .. })))
            .count()
    }
}

pub struct Orchestrator {
    classifier: BundleClassifier,
    stager: OutputStager,
    extractor: NestedArchiveExtractor,
    converter: Box<dyn Converter>,
}

impl Orchestrator {
    pub fn new(stager: OutputStager, converter: Box<dyn Converter>) -> Self {
        Self {
            classifier: BundleClassifier::default(),
            stager,
            extractor: NestedArchiveExtractor::default(),
            converter,
        }
    }

    /// Process every candidate.
    ///
    /// With `jobs > 1` candidates run on a worker pool; the report is in
    /// discovery order either way.
    pub fn run<I>(&self, candidates: I, jobs: usize) -> BatchReport
    where
        I: IntoIterator<Item = Candidate>,
    {
        let outcomes = if jobs > 1 {
            parallel::run(self, candidates.into_iter().collect(), jobs)
        } else {
            candidates
                .into_iter()
                .map(|candidate| {
                    let outcome = self.process(&candidate);
                    (candidate, outcome)
                })
                .collect()
        };
        BatchReport { outcomes }
    }

    /// Drive one candidate to a terminal state
    pub fn process(&self, candidate: &Candidate) -> CandidateOutcome {
        let classification = self.classifier.classify(&candidate.path);
        self.after_classification(candidate, classification)
    }

    fn after_classification(
        &self,
        candidate: &Candidate,
        classification: Result<Classification>,
    ) -> CandidateOutcome {
        match classification {
            Ok(Classification::Qualified(marker)) => {
                info!(
                    "Found Start-Class '{}' in file '{}'",
                    marker,
                    candidate.path.display()
                );
                self.process_bundle(candidate, &marker)
            }
            Ok(Classification::NotQualified) => {
                info!(
                    "File '{}' is not a Spring Boot fat JAR. Skipped.",
                    candidate.path.display()
                );
                CandidateOutcome::Skipped(SkipReason::NotQualified)
            }
            Err(error) => skip_failed(candidate, Step::Classify, error),
        }
    }

    /// Stage, extract and convert a qualified bundle
    fn process_bundle(&self, candidate: &Candidate, marker: &BundleMarker) -> CandidateOutcome {
        match self.try_process_bundle(&candidate.path, marker) {
            Ok(lib_dir) => {
                info!("Recorded '{}'", lib_dir.display());
                CandidateOutcome::Recorded(lib_dir)
            }
            Err((step, error)) => skip_failed(candidate, step, error),
        }
    }

    fn try_process_bundle(
        &self,
        bundle: &Path,
        marker: &BundleMarker,
    ) -> std::result::Result<PathBuf, (Step, FatJarError)> {
        let layout = self
            .stager
            .stage(marker)
            .map_err(|e| (Step::Stage, e))?;
        let extracted = self
            .extractor
            .extract(bundle, &layout.lib_dir)
            .map_err(|e| (Step::Extract, e))?;
        if extracted.count == 0 {
            debug!(
                "No nested JARs in '{}', '{}' holds only the start class",
                bundle.display(),
                layout.app_dir.display()
            );
        }
        self.converter
            .convert(bundle, &layout.lib_dir)
            .map_err(|e| (Step::Convert, e))?;
        Ok(path_utils::absolute(&layout.lib_dir))
    }
}

fn skip_failed(candidate: &Candidate, step: Step, error: FatJarError) -> CandidateOutcome {
    warn!(
        step = %step,
        error = %error,
        "Failed to process JAR '{}'. Skipped.",
        candidate.path.display()
    );
    CandidateOutcome::Skipped(SkipReason::Failed { step, error })
}
