//! Store error types

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, XrefError>;

/// Errors raised by store operations
///
/// Each variant names one failed precondition. Operations check their
/// preconditions in a fixed order and report the first one violated; the
/// store is left untouched whenever an error is returned.
#[derive(Debug, Error)]
pub enum XrefError {
    #[error("Invalid text name: '{name}'")]
    InvalidName { name: String },

    #[error("Empty content for text '{name}'")]
    EmptyContent { name: String },

    #[error("Text already exists: {name}")]
    AlreadyExists { name: String },

    #[error("Text not found: {name}")]
    NotFound { name: String },

    #[error("Empty word")]
    EmptyWord,

    #[error("Invalid word: '{word}' (expected letters only)")]
    InvalidWord { word: String },

    #[error("Word '{word}' not found in text {name}")]
    WordNotFound { word: String, name: String },

    #[error("Word '{word}' not found in first text {name}")]
    WordNotFoundInText1 { word: String, name: String },

    #[error("Word '{word}' not found in second text {name}")]
    WordNotFoundInText2 { word: String, name: String },

    #[error("Invalid position {position} (text has {token_count} tokens)")]
    InvalidPosition { position: usize, token_count: usize },

    #[error("Invalid range {start}..={end} (text has {token_count} tokens)")]
    InvalidRange { start: usize, end: usize, token_count: usize },

    #[error("Corrupted index for text {name}: position {position} out of {token_count} tokens")]
    CorruptedIndex {
        name: String,
        position: usize,
        token_count: usize,
    },

    #[error("File not found: {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid format: {path}")]
    InvalidFormat { path: PathBuf },

    #[error("IO error writing {path}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output already exists: {path}")]
    IoExists { path: PathBuf },

    #[error("Both texts are the same: {name}")]
    SameText { name: String },
}
