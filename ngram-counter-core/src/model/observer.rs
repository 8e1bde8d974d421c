use crate::error::TrieError;

/// Receives side-channel notifications from an `NGramTrie`.
///
/// Both methods default to doing nothing, so implementors only override what
/// they care about. The trie never depends on what an observer does: results
/// are identical with or without one attached.
pub trait Observer {
	/// Called during insertion every `progress_interval` windows, and once
	/// more when the sequence is fully inserted (`done == total`).
	fn progress(&self, _done: usize, _total: usize) {}

	/// Called whenever an operation degrades to a default result.
	fn diagnostic(&self, _diagnostic: &TrieError) {}
}
