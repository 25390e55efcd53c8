//! Hash function utilities
//!
//! Provides ahash-backed map constructors so lookup tables share one hasher
//! choice across the crate.

use ahash::RandomState;
use std::collections::HashMap;

/// Create a new `HashMap` with the crate's default hasher
///
/// # Example
///
/// ```rust
/// use spm_core::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("PAD_A".to_string(), 1);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}
