//! Output callback used by the walker

use std::io;

/// Callback for streaming output - receives node information for display.
///
/// The walker calls `output_node` once per visible entry, in traversal order,
/// then `finish` once after the walk completes successfully.
pub trait StreamingOutput {
    /// Emit one node. `prefix` holds the continuation guides of the node's
    /// ancestors; the root is emitted with `is_root` set and an empty prefix.
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
