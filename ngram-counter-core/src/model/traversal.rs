//! Read-only walks over an `NGramTrie`: ranked continuations, distinct
//! n-gram counts and exhaustive enumeration.
//!
//! Every walk uses an explicit worklist. Depth is bounded by the order of the
//! trie anyway, but this keeps stack usage flat whatever the order.

use std::hash::Hash;

use rand::Rng;

use super::ngram_trie::{NGramTrie, trailing};
use super::node::TrieNode;

/// A root path and the number of times it was observed.
pub type Branch<S> = (Vec<S>, u64);

impl<S: Eq + Hash + Clone> NGramTrie<S> {
	/// Lists the symbols observed right after `prefix`, most frequent first.
	///
	/// An empty prefix lists the unigrams (children of the root). A prefix that
	/// was never observed yields an empty list.
	///
	/// # Notes
	/// - The sort is stable; ties keep the node's storage order, which is
	///   unspecified.
	/// - Like `counts`, only the trailing `order` symbols of `prefix` are used.
	pub fn branches(&self, prefix: &[S]) -> Vec<(S, u64)> {
		let node = if prefix.is_empty() {
			self.root()
		} else {
			let counts = self.counts(prefix);
			if counts.full == 0 {
				return Vec::new();
			}
			counts.node
		};

		let mut branches: Vec<(S, u64)> = node
			.children()
			.map(|(symbol, child)| (symbol.clone(), child.occurrences()))
			.collect();
		branches.sort_by(|a, b| b.1.cmp(&a.1));
		branches
	}

	/// Every maximal path (root to leaf) with the count of its leaf.
	///
	/// Paths come out depth-first, siblings in storage order. An empty trie
	/// yields a single empty path with a count of 0, the root being a leaf.
	pub fn all_branches(&self) -> Vec<Branch<S>> {
		let mut branches = Vec::new();
		let mut stack: Vec<(&TrieNode<S>, Vec<S>)> = vec![(self.root(), Vec::new())];

		while let Some((node, path)) = stack.pop() {
			if node.is_leaf() {
				branches.push((path, node.occurrences()));
				continue;
			}
			// Reversed so that the first stored child is popped first
			let children: Vec<_> = node.children().collect();
			for (symbol, child) in children.into_iter().rev() {
				let mut next = path.clone();
				next.push(symbol.clone());
				stack.push((child, next));
			}
		}

		branches
	}

	/// Every observed n-gram of exactly `n` symbols with its count.
	///
	/// Unlike `all_branches`, inner paths are included. `ngrams(n).len()`
	/// always equals `unique(n)`.
	pub fn ngrams(&self, n: usize) -> Vec<Branch<S>> {
		let mut ngrams = Vec::new();
		if n > self.order() {
			return ngrams;
		}

		let mut stack: Vec<(&TrieNode<S>, Vec<S>)> = vec![(self.root(), Vec::new())];
		while let Some((node, path)) = stack.pop() {
			if path.len() == n {
				ngrams.push((path, node.occurrences()));
				continue;
			}
			for (symbol, child) in node.children() {
				let mut next = path.clone();
				next.push(symbol.clone());
				stack.push((child, next));
			}
		}

		ngrams
	}

	/// Most frequent symbol observed after `context`.
	///
	/// Only the trailing `order - 1` symbols of the context matter, the
	/// longest prefix a continuation can still follow.
	pub fn most_likely_next(&self, context: &[S]) -> Option<(S, u64)> {
		let context = trailing(context, self.order() - 1);
		self.branches(context).into_iter().next()
	}

	/// Picks a symbol observed after `context`, at random.
	///
	/// The probability of selecting a symbol is proportional to its count.
	/// Returns `None` if nothing was ever observed after the context.
	pub fn sample_next<R: Rng + ?Sized>(&self, context: &[S], rng: &mut R) -> Option<S> {
		let context = trailing(context, self.order() - 1);
		let branches = self.branches(context);

		let total: u64 = branches.iter().map(|(_, occurrences)| occurrences).sum();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		for (symbol, occurrences) in branches {
			if r < occurrences {
				return Some(symbol);
			}
			r -= occurrences;
		}
		None
	}
}

impl<S> NGramTrie<S> {
	/// Number of distinct n-grams of exactly `n` symbols.
	///
	/// `unique(0)` is 1: the empty path. Anything above `order` is 0.
	pub fn unique(&self, n: usize) -> u64 {
		if n > self.order() {
			return 0;
		}

		let mut frontier = vec![self.root()];
		for _ in 0..n {
			frontier = next_level(&frontier);
		}
		frontier.len() as u64
	}

	/// Number of distinct n-grams for every length, `[unique(1), .., unique(order)]`.
	pub fn unique_all(&self) -> Vec<u64> {
		let mut counts = Vec::with_capacity(self.order());
		let mut frontier = vec![self.root()];
		for _ in 0..self.order() {
			frontier = next_level(&frontier);
			counts.push(frontier.len() as u64);
		}
		counts
	}
}

fn next_level<'a, S>(frontier: &[&'a TrieNode<S>]) -> Vec<&'a TrieNode<S>> {
	frontier
		.iter()
		.flat_map(|&node| node.children().map(|(_, child)| child))
		.collect()
}
