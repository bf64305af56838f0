//! Name-based skip filtering for tree walking

use std::collections::BTreeSet;
use std::ffi::OsStr;

use glob::Pattern;

use crate::error::ConfigError;

use super::config::WalkerConfig;

/// Decides which directory entries are invisible to the walk.
///
/// Matching is done on the entry's own name at every level, never on its path,
/// so skipping `target` hides `a/target` and `b/c/target` alike.
#[derive(Debug, Clone, Default)]
pub struct SkipFilter {
    names: BTreeSet<String>,
    patterns: Vec<Pattern>,
}

impl SkipFilter {
    /// Build a filter from the walker config, compiling its glob patterns.
    pub fn new(config: &WalkerConfig) -> Result<Self, ConfigError> {
        let patterns = config
            .skip_patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|source| ConfigError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            names: config.skip_names.clone(),
            patterns,
        })
    }

    /// Check if an entry with this name should be skipped.
    ///
    /// A name that is not valid UTF-8 never equals a skip name; glob patterns see
    /// its lossy form.
    pub fn is_skipped(&self, name: &OsStr) -> bool {
        if name.to_str().is_some_and(|n| self.names.contains(n)) {
            return true;
        }
        let name = name.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&name))
    }
}
