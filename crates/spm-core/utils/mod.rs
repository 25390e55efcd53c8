//! Utility functions and shared types for SPM core
//!
//! Contains the crate error type and hashing helpers shared by the parser
//! and renderer modules.

pub mod errors;
pub mod hashers;

pub use errors::{CoreError, ErrorCategory, Result};
pub use hashers::create_hash_map;
