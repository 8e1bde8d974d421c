//! Diagnostics reported by the n-gram trie.
//!
//! None of these are fatal during normal use: the lenient entry points
//! degrade to a well-defined default result and report the diagnostic
//! through the `log` facade and the attached observer. Strict entry points
//! (`try_new`, `merge`, config setters) return them as `Err`.

use thiserror::Error;

/// Everything that can go wrong while building or querying a trie.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
	/// The requested order is below the minimum of 1.
	#[error("order must be >= 1, got {got}")]
	InvalidOrder { got: usize },

	/// A query that needs at least one symbol received none.
	#[error("{operation}: sequence must not be empty")]
	EmptySequence { operation: &'static str },

	/// Progress cannot be reported every zero windows.
	#[error("progress interval must be >= 1")]
	InvalidProgressInterval,

	/// Two tries of different order cannot be merged.
	#[error("order mismatch: expected {expected}, got {got}")]
	OrderMismatch { expected: usize, got: usize },
}

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_offending_value() {
		assert_eq!(TrieError::InvalidOrder { got: 0 }.to_string(), "order must be >= 1, got 0");
		assert_eq!(
			TrieError::EmptySequence { operation: "counts" }.to_string(),
			"counts: sequence must not be empty"
		);
		assert_eq!(
			TrieError::OrderMismatch { expected: 3, got: 2 }.to_string(),
			"order mismatch: expected 3, got 2"
		);
	}
}
