//! Bundle inspection
//!
//! - [`manifest`]: JAR manifest parsing
//! - [`marker`]: start class markers and application names
//! - [`classifier`]: deciding whether a candidate is a fat jar

pub mod classifier;
pub mod manifest;
pub mod marker;

pub use classifier::{BundleClassifier, Classification};
pub use marker::{AppName, BundleMarker};
