use std::fmt;
use std::hash::Hash;

use log::{debug, trace, warn};

use super::config::TrieConfig;
use super::node::TrieNode;
use super::observer::Observer;
use crate::error::{Result, TrieError};

/// Counts an n-gram trie reports for a queried sequence.
///
/// `parent` is the denominator of the conditional probability of the last
/// symbol. `node` is where resolution stopped and can be used for further
/// branch queries.
#[derive(Debug)]
pub struct Counts<'a, S> {
	/// Occurrences of the whole (possibly truncated) sequence, 0 if unseen.
	pub full: u64,
	/// Occurrences of the sequence without its last symbol.
	pub parent: u64,
	/// Node reached while resolving the sequence.
	pub node: &'a TrieNode<S>,
}

/// Frequency model counting every contiguous subsequence up to `order` symbols.
///
/// The `NGramTrie` folds symbol sequences into a prefix tree through a sliding
/// window and answers statistical queries on it: raw counts, conditional and
/// unconditional probabilities, ranked continuations, number of distinct
/// n-grams and exhaustive enumeration.
///
/// Symbols can be anything hashable: `char`, word tokens, vocabulary indices.
///
/// # Responsibilities
/// - Insert sequences, accumulating counts across calls
/// - Keep a running total of attempted windows for every length
/// - Resolve a sequence into its count, its parent count and its node
/// - Merge with another trie of the same order
///
/// # Invariants
/// - `order` is always >= 1 and no root path is longer than `order`
/// - `totals.len() == order + 1` and `totals[0] == 0`
/// - `totals[n]` only depends on the lengths of the inserted sequences
pub struct NGramTrie<S> {
	config: TrieConfig,

	/// The empty prefix; every inserted window descends from it.
	root: TrieNode<S>,

	/// `totals[n]`: number of length-`n` windows attempted so far.
	totals: Vec<u64>,

	observer: Option<Box<dyn Observer>>,
}

impl<S> NGramTrie<S> {
	/// Creates an empty trie of order `order`.
	///
	/// An `order` below 1 is corrected to 1; the correction is logged as a
	/// `TrieError::InvalidOrder` warning. Use `try_new` to get an error instead.
	pub fn new(order: usize) -> Self {
		match TrieConfig::new(order) {
			Ok(config) => Self::from_config(config),
			Err(diagnostic) => {
				warn!("{diagnostic}, using 1");
				Self::from_config(TrieConfig::default())
			}
		}
	}

	/// Creates an empty trie of order `order`.
	///
	/// # Errors
	/// Returns `TrieError::InvalidOrder` if `order < 1`.
	pub fn try_new(order: usize) -> Result<Self> {
		Ok(Self::from_config(TrieConfig::new(order)?))
	}

	/// Creates an empty trie from an already validated configuration.
	pub fn from_config(config: TrieConfig) -> Self {
		Self {
			config,
			root: TrieNode::new(),
			totals: vec![0; config.order() + 1],
			observer: None,
		}
	}

	/// Attaches an observer receiving progress and diagnostic notifications.
	pub fn with_observer<O: Observer + 'static>(mut self, observer: O) -> Self {
		self.observer = Some(Box::new(observer));
		self
	}

	/// Returns the maximum n-gram length.
	pub fn order(&self) -> usize {
		self.config.order()
	}

	/// Returns the configuration the trie was built with.
	pub fn config(&self) -> &TrieConfig {
		&self.config
	}

	/// Returns the root node (the empty prefix).
	pub fn root(&self) -> &TrieNode<S> {
		&self.root
	}

	/// Number of length-`n` windows inserted so far.
	///
	/// Returns 0 for `n == 0` and for `n > order`.
	pub fn total(&self, n: usize) -> u64 {
		self.totals.get(n).copied().unwrap_or(0)
	}

	/// Window totals indexed by length, `0..=order`.
	pub fn totals(&self) -> &[u64] {
		&self.totals
	}

	/// Returns `true` if nothing has been observed yet.
	pub fn is_empty(&self) -> bool {
		self.root.is_leaf()
	}

	/// Number of distinct n-grams of every length (nodes below the root).
	pub fn len(&self) -> usize {
		self.root.descendants()
	}

	/// Logs a diagnostic and forwards it to the observer.
	pub(crate) fn report(&self, diagnostic: TrieError) {
		warn!("{diagnostic}");
		if let Some(observer) = &self.observer {
			observer.diagnostic(&diagnostic);
		}
	}

	fn notify_progress(&self, done: usize, total: usize) {
		trace!("insert progress: {done}/{total}");
		if let Some(observer) = &self.observer {
			observer.progress(done, total);
		}
	}
}

impl<S: Eq + Hash + Clone> NGramTrie<S> {
	/// Adds every window of `sequence` to the model.
	///
	/// For each start position, the window of at most `order` symbols is
	/// walked from the root and every node along the path is counted once.
	/// Windows near the end are clipped, so the last symbols also contribute
	/// their shorter n-grams.
	///
	/// # Notes
	/// - Calls accumulate: nothing is ever reset.
	/// - An empty sequence leaves the model untouched.
	/// - The observer is notified every `progress_interval` windows.
	pub fn insert(&mut self, sequence: &[S]) {
		let order = self.order();
		let len = sequence.len();

		// Totals only depend on the length, repeated windows included
		for n in 1..=order {
			self.totals[n] += len.saturating_sub(n - 1) as u64;
		}

		let interval = self.config.progress_interval();
		for start in 0..len {
			let end = (start + order).min(len);
			let mut node = &mut self.root;
			for symbol in &sequence[start..end] {
				node = node.observe(symbol);
			}

			if start % interval == 0 {
				self.notify_progress(start, len);
			}
		}

		if len > 0 {
			self.notify_progress(len, len);
		}
		debug!("inserted {len} windows (order {order}, {} n-grams known)", self.len());
	}

	/// Inserts each sequence as a separate call to `insert`.
	pub fn insert_all<I, T>(&mut self, sequences: I)
	where
		I: IntoIterator<Item = T>,
		T: AsRef<[S]>,
	{
		for sequence in sequences {
			self.insert(sequence.as_ref());
		}
	}

	/// Merges another trie into this one.
	///
	/// The result is the model that inserting both inputs into a single trie
	/// would have produced: counts of shared paths and window totals are summed.
	///
	/// # Errors
	/// Returns `TrieError::OrderMismatch` if the orders differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.order() != other.order() {
			return Err(TrieError::OrderMismatch { expected: self.order(), got: other.order() });
		}

		self.root.merge(&other.root);
		for (ours, theirs) in self.totals.iter_mut().zip(&other.totals) {
			*ours += theirs;
		}
		Ok(())
	}
}

impl<S: Eq + Hash> NGramTrie<S> {
	/// Resolves `sequence` against the trie.
	///
	/// Only the trailing `order` symbols are used. The sequence is followed
	/// symbol by symbol from the root:
	/// - fully matched: `(count(seq), count(seq minus last), node of seq)`
	/// - only the last symbol is missing: `(0, count(seq minus last), node
	///   of seq minus last)`
	/// - an earlier symbol is missing: `(0, 0, node where it failed)`
	///
	/// A one-symbol sequence hence reports `total(1)` as its parent count.
	///
	/// An empty sequence reports `(0, 0, root)` and a
	/// `TrieError::EmptySequence` diagnostic.
	pub fn counts(&self, sequence: &[S]) -> Counts<'_, S> {
		self.resolve(sequence, "counts")
	}

	/// Conditional probability of the last symbol given the preceding ones.
	///
	/// `count(seq) / count(seq minus last)`, or `count(seq) / total(1)` for a
	/// single symbol. Unseen sequences have probability 0; no smoothing.
	pub fn probability(&self, sequence: &[S]) -> f64 {
		let counts = self.resolve(sequence, "probability");
		ratio(counts.full, counts.parent)
	}

	/// Probability of the whole sequence among all windows of its length.
	///
	/// `count(seq) / total(len)`, where `len` is the length after truncation
	/// to the trailing `order` symbols.
	pub fn unconditional_probability(&self, sequence: &[S]) -> f64 {
		let counts = self.resolve(sequence, "unconditional_probability");
		let len = sequence.len().min(self.order());
		ratio(counts.full, self.total(len))
	}

	pub(crate) fn resolve(&self, sequence: &[S], operation: &'static str) -> Counts<'_, S> {
		if sequence.is_empty() {
			self.report(TrieError::EmptySequence { operation });
			return Counts { full: 0, parent: 0, node: &self.root };
		}

		let sequence = trailing(sequence, self.order());
		let last = sequence.len() - 1;

		let mut node = &self.root;
		let mut previous = self.total(1);
		let mut current = self.total(1);
		for (i, symbol) in sequence.iter().enumerate() {
			match node.child(symbol) {
				Some(child) => {
					previous = current;
					current = child.occurrences();
					node = child;
				}
				// Known context, novel continuation
				None if i == last => return Counts { full: 0, parent: current, node },
				// Unknown context
				None => return Counts { full: 0, parent: 0, node },
			}
		}

		Counts { full: current, parent: previous, node }
	}
}

impl NGramTrie<char> {
	/// Inserts the characters of `text` as one sequence.
	///
	/// No normalization is applied: case and whitespace are symbols like any other.
	pub fn insert_text(&mut self, text: &str) {
		let symbols: Vec<char> = text.chars().collect();
		self.insert(&symbols);
	}
}

impl<S: fmt::Debug> fmt::Debug for NGramTrie<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NGramTrie")
			.field("config", &self.config)
			.field("totals", &self.totals)
			.field("root", &self.root)
			.field("observer", &self.observer.is_some())
			.finish()
	}
}

/// Returns the last `n` symbols of `sequence` (all of them if shorter).
pub(crate) fn trailing<S>(sequence: &[S], n: usize) -> &[S] {
	&sequence[sequence.len().saturating_sub(n)..]
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
	if numerator == 0 || denominator == 0 {
		return 0.0;
	}
	numerator as f64 / denominator as f64
}
