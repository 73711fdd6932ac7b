//! Candidate discovery
//!
//! - [`glob`]: compiled wax globs matched against root-relative paths
//! - [`exclusion`]: the exclusion pattern set
//! - [`scanner`]: the lazy directory walk producing [`Candidate`]s

pub mod exclusion;
pub mod glob;
pub mod scanner;

pub use exclusion::ExclusionMatcher;
pub use scanner::{Candidate, CandidateScanner};
