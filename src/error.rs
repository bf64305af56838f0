//! Error types for tree rendering and configuration

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering a tree.
///
/// None of these are recovered internally: the first one aborts the whole render.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A directory could not be listed (missing, unreadable, not a directory,
    /// or removed while the walk was in progress).
    #[error("cannot access '{}': {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a line to the output sink failed.
    #[error("error writing output: {0}")]
    Sink(#[from] io::Error),

    /// The output file could not be created, flushed or moved into place.
    #[error("cannot write output file '{}': {source}", .path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TreeError {
    /// True for failures of the output destination rather than the walked tree.
    pub fn is_sink_failure(&self) -> bool {
        matches!(self, TreeError::Sink(_) | TreeError::OutputFile { .. })
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid skip pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_error_names_the_path() {
        let err = TreeError::Listing {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir"), "message was: {}", msg);
        assert!(!err.is_sink_failure());
    }

    #[test]
    fn io_errors_convert_to_sink_failures() {
        let err: TreeError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, TreeError::Sink(_)));
        assert!(err.is_sink_failure());
    }

    #[test]
    fn config_errors_convert() {
        let source = glob::Pattern::new("[").unwrap_err();
        let config_err = ConfigError::InvalidPattern {
            pattern: "[".into(),
            source,
        };
        let err: TreeError = config_err.into();
        assert!(matches!(err, TreeError::Config(_)));
        assert!(err.to_string().contains("Invalid skip pattern"));
    }
}
