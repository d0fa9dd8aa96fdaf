//! Error types for segmentation, dictionary loading and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Negative outcomes of a segmentation call.
///
/// An empty input is not an error: it segments into zero words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// The input cannot be fully decomposed into dictionary words
    /// under the configured word-length bounds.
    #[error("input cannot be segmented into dictionary words")]
    NoSegmentation,

    /// The search budget ran out before the search completed.
    #[error("search aborted after {probes} dictionary probes")]
    SearchAborted { probes: usize },
}

/// Errors from reading word lists.
#[derive(Debug, Error)]
pub enum DictError {
    #[error("failed to open dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read dictionary: {0}")]
    Read(#[from] io::Error),
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid word length bounds: min {min}, max {max}")]
    InvalidBounds { min: usize, max: usize },
}
