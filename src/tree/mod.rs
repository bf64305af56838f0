//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory, drops skipped names, sorts what is left and
//! streams one node per entry to a `StreamingOutput`, recursing into
//! sub-directories depth-first.

mod config;
mod filter;
mod streaming;
pub(crate) mod traversal;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::SkipFilter;
pub use streaming::StreamingOutput;
pub use traversal::{BRANCH, LAST_BRANCH, PIPE_PREFIX, SPACE_PREFIX, display_name};
pub use walker::TreeWalker;
