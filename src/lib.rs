//! skiptree - write a directory tree to a text file, skipping named folders

pub mod config;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{ConfigError, Result, TreeError};
pub use output::{ColorOutput, TextOutput, write_structure};
pub use tree::{SkipFilter, StreamingOutput, TreeWalker, WalkerConfig};
