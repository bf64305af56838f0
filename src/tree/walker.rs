//! TreeWalker - depth-first rendering of a directory hierarchy

use std::path::Path;

use crate::error::TreeError;
use crate::output::TextOutput;

use super::config::WalkerConfig;
use super::filter::SkipFilter;
use super::streaming::StreamingOutput;
use super::traversal::{child_prefix, display_name, read_sorted_entries};

/// Walks a directory tree in sorted depth-first order and streams one node per
/// visible entry to a `StreamingOutput`.
///
/// Nothing is buffered: memory use is O(depth). A listing failure anywhere in the
/// hierarchy aborts the walk; lines already emitted stay emitted.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: SkipFilter,
}

impl TreeWalker {
    /// Create a walker, compiling the configured skip patterns.
    pub fn new(config: WalkerConfig) -> Result<Self, TreeError> {
        let filter = SkipFilter::new(&config)?;
        Ok(Self { config, filter })
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Render the tree rooted at `root` into `output`.
    ///
    /// The header line is written before the root is listed, so a root that cannot
    /// be read still produces it ahead of the `TreeError::Listing`.
    pub fn render<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> Result<(), TreeError> {
        output.output_node(&display_name(root), true, true, "", true)?;
        self.visit(root, 0, "", output)?;
        output.finish()?;
        Ok(())
    }

    /// Render into a `String`, mostly useful for tests and embedding.
    pub fn render_to_string(&self, root: &Path) -> Result<String, TreeError> {
        let mut output = TextOutput::new(Vec::new());
        self.render(root, &mut output)?;
        Ok(String::from_utf8_lossy(&output.into_inner()).into_owned())
    }

    /// Check if we're at maximum depth
    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    fn visit<O: StreamingOutput>(
        &self,
        dir: &Path,
        depth: usize,
        prefix: &str,
        output: &mut O,
    ) -> Result<(), TreeError> {
        if self.at_max_depth(depth) {
            return Ok(());
        }

        let mut entries = read_sorted_entries(dir, &self.filter)?;
        if self.config.dirs_only {
            entries.retain(|e| e.is_dir);
        }

        let total = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i == total - 1;
            let name = entry.name.to_string_lossy();

            output.output_node(&name, entry.is_dir, is_last, prefix, false)?;

            if entry.is_dir {
                let new_prefix = child_prefix(prefix, is_last);
                self.visit(&entry.path, depth + 1, &new_prefix, output)?;
            }
        }

        Ok(())
    }
}
