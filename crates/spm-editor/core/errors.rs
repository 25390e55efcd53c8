//! Error types for the spm-editor crate
//!
//! `EditorError` wraps [`CoreError`] from spm-core and adds the cases that
//! only arise once files are involved: I/O failures and rejected paths.

use std::fmt;
use spm_core::CoreError;
use thiserror::Error;

/// Main error type for spm-editor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Errors from spm-core
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    IoError(String),

    /// Only `.txt` script files can be opened
    #[error("Unsupported file: {path} (only .txt files are supported)")]
    UnsupportedFile { path: String },

    /// Save requested on a document that was never given a path
    #[error("No file path set for document")]
    NoPath,
}

impl EditorError {
    /// Create a new IO error
    pub fn io<T: fmt::Display>(message: T) -> Self {
        Self::IoError(message.to_string())
    }

    /// Create an unsupported file error for `path`
    pub fn unsupported_file<T: fmt::Display>(path: T) -> Self {
        Self::UnsupportedFile {
            path: path.to_string(),
        }
    }

    /// Check if error is recoverable
    ///
    /// Every editor error leaves the document untouched, so the user can
    /// fix the text or pick another path and retry.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Core(_) | Self::IoError(_) | Self::UnsupportedFile { .. } | Self::NoPath => true,
        }
    }

    /// Get the underlying core error if this wraps one
    #[must_use]
    pub const fn as_core_error(&self) -> Option<&CoreError> {
        match self {
            Self::Core(core_err) => Some(core_err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
