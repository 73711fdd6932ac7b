//! Compiled glob patterns
//!
//! Uses wax for platform-independent glob matching. Candidates are matched in
//! forward-slash form, so the same pattern works on every platform.

use std::fmt;
use std::path::Path;

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, invalid_glob};
use crate::path_utils;

/// A glob compiled once and matched many times
#[derive(Clone)]
pub struct CompiledGlob {
    source: String,
    glob: Glob<'static>,
}

impl CompiledGlob {
    pub fn compile(pattern: &str) -> Result<Self> {
        let glob = Glob::new(pattern)
            .map(Glob::into_owned)
            .map_err(|e| invalid_glob(pattern, e))?;
        Ok(Self {
            source: pattern.to_string(),
            glob,
        })
    }

    /// The pattern text this glob was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, path: &Path) -> bool {
        let normalized = path_utils::to_forward_slashes(path);
        self.glob
            .matched(&CandidatePath::from(normalized.as_str()))
            .is_some()
    }
}

impl fmt::Debug for CompiledGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompiledGlob").field(&self.source).finish()
    }
}
