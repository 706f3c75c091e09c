//! Error types for treeloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan.
///
/// Permission-denied failures while reading an accepted file never surface
/// here; the scanner drops that file and keeps going.
#[derive(Error, Debug)]
pub enum TreelocError {
    /// Failed to read a file that passed the inclusion rules
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to enumerate an entry of the tree
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),
}
