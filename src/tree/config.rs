//! Configuration types for the tree walker

use std::collections::BTreeSet;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Entry names that are neither rendered nor descended into.
    /// Compared by exact string match against each entry's name.
    pub skip_names: BTreeSet<String>,
    /// Glob patterns matched against entry names, treated the same as `skip_names`.
    pub skip_patterns: Vec<String>,
    /// Directories at this depth are listed but not descended into.
    /// `None` walks the whole hierarchy.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
}

impl WalkerConfig {
    /// Config that skips the given names and otherwise walks everything.
    pub fn with_skip_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skip_names: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}
