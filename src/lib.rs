//! # Radix Index
//!
//! A string-keyed radix tree (compressed trie) for exact lookup, existence
//! checks and prefix enumeration.
//!
//! Keys that share long prefixes store those prefixes once: each edge of the
//! tree is labelled with a run of symbols, and a label is split in place when a
//! new key diverges partway through it.
//!
//! ## Features
//!
//! - **Generic keys**: `String`, `Vec<T>` or any type implementing [`RadixKey`]
//! - **Borrowed lookups**: query a `RadixTree<String, _>` with `&str`
//! - **Prefix enumeration**: collect or lazily iterate every key below a prefix
//! - **First write wins**: re-inserting a key never overwrites its value
//!
//! ## Example
//!
//! ```rust
//! use radix_index::RadixTree;
//!
//! let mut tree = RadixTree::<String, u32>::new();
//! tree.insert("banana".to_string(), 1);
//! tree.insert("bandana".to_string(), 2);
//! tree.insert("foo".to_string(), 3);
//!
//! assert!(tree.exists("banana"));
//! assert_eq!(tree.get("bandana"), Some(&2));
//! assert_eq!(tree.get("ban"), None);
//!
//! let mut candidates = tree.find_candidates("ban");
//! candidates.sort();
//! assert_eq!(candidates, vec!["banana".to_string(), "bandana".to_string()]);
//! ```

mod candidates;
pub mod key;
mod node;
mod stats;
mod tree;
pub mod util;

// Re-export public types
pub use crate::candidates::Candidates;
pub use crate::key::{KeySymbols, RadixKey};
pub use crate::stats::TreeStats;
pub use crate::tree::RadixTree;

/// Errors that can occur in tree operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The empty key cannot be stored
    EmptyKey,
    /// The key is already stored; the existing value was kept
    DuplicateKey,
    /// A key could not be rebuilt from its symbols
    InvalidKey,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyKey => write!(f, "Empty keys cannot be stored"),
            Error::DuplicateKey => write!(f, "Key is already present"),
            Error::InvalidKey => write!(f, "Invalid key for this operation"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyKey.to_string(), "Empty keys cannot be stored");
        assert_eq!(Error::DuplicateKey.to_string(), "Key is already present");
        assert_eq!(Error::InvalidKey.to_string(), "Invalid key for this operation");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::DuplicateKey);
        assert!(err.source().is_none());
    }
}
