//! Utility modules for the spm-editor

pub mod search;

pub use search::{contains_ignore_case, MatchRange, TextSearch};
