//! Core types for the spm-editor
//!
//! - `SpmDocument`: visible script text, its parse and its file
//! - Error types for editor operations

pub mod document;
pub mod errors;

pub use document::{SpmDocument, SCRIPT_EXTENSION, UNTITLED};
pub use errors::{EditorError, Result};
