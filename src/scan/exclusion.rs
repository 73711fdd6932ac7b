//! Path exclusion patterns

use std::path::Path;

use super::glob::CompiledGlob;
use crate::error::Result;

/// A set of compiled exclusion globs.
///
/// Built once, then only read, so one matcher can be shared by every worker
/// of a batch. A path is excluded iff any pattern matches it; an empty
/// matcher excludes nothing.
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher {
    globs: Vec<CompiledGlob>,
}

impl ExclusionMatcher {
    pub fn build<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut globs: Vec<CompiledGlob> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if globs.iter().any(|g| g.as_str() == pattern) {
                continue;
            }
            globs.push(CompiledGlob::compile(pattern)?);
        }
        Ok(Self { globs })
    }

    pub fn excludes(&self, path: &Path) -> bool {
        self.globs.iter().any(|glob| glob.is_match(path))
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.globs.iter().map(CompiledGlob::as_str)
    }
}
