//! N-gram counting library.
//!
//! This crate counts every contiguous subsequence of symbol sequences up to a
//! fixed order and answers statistical queries on the counts:
//! - Occurrence counts of a sequence and of its prefix
//! - Conditional and unconditional probabilities (raw ratios, no smoothing)
//! - Ranked continuations and weighted sampling of the next symbol
//! - Number of distinct n-grams and full enumeration of the tree
//!
//! Symbols are generic: characters, word tokens or vocabulary indices.
//!
//! ```
//! use ngram_counter_core::NGramTrie;
//!
//! let mut trie = NGramTrie::new(2);
//! trie.insert(&['a', 'a', 'b']);
//!
//! assert_eq!(trie.counts(&['a']).full, 2);
//! assert_eq!(trie.probability(&['a', 'b']), 0.5);
//! assert_eq!(trie.unique_all(), vec![2, 2]);
//! ```

/// Diagnostics and error type.
pub mod error;

/// Core n-gram trie and its algorithms.
pub mod model;

pub use error::{Result, TrieError};
pub use model::config::TrieConfig;
pub use model::ngram_trie::{Counts, NGramTrie};
pub use model::node::TrieNode;
pub use model::observer::Observer;
pub use model::traversal::Branch;
