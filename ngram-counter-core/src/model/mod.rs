//! Top-level module for the n-gram counting model.
//!
//! This module provides a prefix-tree frequency model, including:
//! - The trie itself and its insertion / query algorithms (`NGramTrie`)
//! - The node representation (`TrieNode`)
//! - Construction parameters (`TrieConfig`)
//! - Side-channel notifications (`Observer`)

/// The n-gram trie: insertion, count resolution and probabilities.
pub mod ngram_trie;

/// Node of the trie: occurrence count and owned children.
pub mod node;

/// Validated construction parameters.
pub mod config;

/// Progress and diagnostic callbacks.
pub mod observer;

/// Branch listing, distinct n-gram counts, enumeration and sampling.
///
/// Only adds methods to `NGramTrie`; nothing else is exposed but `Branch`.
pub mod traversal;
