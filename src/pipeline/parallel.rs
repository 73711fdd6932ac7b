//! Worker-pool execution of a batch
//!
//! Classification only reads, so every candidate is classified in parallel.
//! Qualified bundles are then grouped by application name: groups run in
//! parallel, the bundles inside one group run one after another in discovery
//! order. Two bundles sharing an application name therefore never touch the
//! same staging directory at once, and the later one still wins.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{info, warn};

use super::{CandidateOutcome, Orchestrator, Step, skip_failed};
use crate::bundle::{AppName, BundleMarker, Classification};
use crate::error::Result;
use crate::scan::Candidate;

type Outcomes = Vec<(Candidate, CandidateOutcome)>;

pub(super) fn run(
    orchestrator: &Orchestrator,
    candidates: Vec<Candidate>,
    jobs: usize,
) -> Outcomes {
    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| run_in_pool(orchestrator, candidates)),
        Err(err) => {
            warn!(error = %err, "Cannot start worker pool, processing sequentially");
            candidates
                .into_iter()
                .map(|candidate| {
                    let outcome = orchestrator.process(&candidate);
                    (candidate, outcome)
                })
                .collect()
        }
    }
}

fn run_in_pool(orchestrator: &Orchestrator, candidates: Vec<Candidate>) -> Outcomes {
    let classified: Vec<(Candidate, Result<Classification>)> = candidates
        .into_par_iter()
        .map(|candidate| {
            let classification = orchestrator.classifier.classify(&candidate.path);
            (candidate, classification)
        })
        .collect();

    let mut outcomes: Outcomes = Vec::with_capacity(classified.len());
    let mut groups: BTreeMap<AppName, Vec<(Candidate, BundleMarker)>> = BTreeMap::new();

    for (candidate, classification) in classified {
        let marker = match classification {
            Ok(Classification::Qualified(marker)) => marker,
            other => {
                let outcome = orchestrator.after_classification(&candidate, other);
                outcomes.push((candidate, outcome));
                continue;
            }
        };
        info!(
            "Found Start-Class '{}' in file '{}'",
            marker,
            candidate.path.display()
        );
        match marker.app_name() {
            Ok(app_name) => groups.entry(app_name).or_default().push((candidate, marker)),
            Err(error) => {
                let outcome = skip_failed(&candidate, Step::Stage, error);
                outcomes.push((candidate, outcome));
            }
        }
    }

    let processed: Vec<Outcomes> = groups
        .into_par_iter()
        .map(|(_, group)| {
            group
                .into_iter()
                .map(|(candidate, marker)| {
                    let outcome = orchestrator.process_bundle(&candidate, &marker);
                    (candidate, outcome)
                })
                .collect()
        })
        .collect();

    outcomes.extend(processed.into_iter().flatten());
    outcomes.sort_by_key(|(candidate, _)| candidate.index);
    outcomes
}
