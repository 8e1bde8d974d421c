use std::collections::HashMap;
use std::hash::Hash;

/// A node of the n-gram trie.
///
/// Every node stands for the path of symbols leading to it from the root.
/// It stores how many inserted windows went through that path and owns its
/// children, keyed by the next symbol.
///
/// Conceptually, the children of a node are the observed continuations of
/// its path, weighted by their number of observations.
///
/// # Invariants
/// - Children are owned exclusively by their parent (no shared or back links)
/// - Every child has an occurrence count >= 1
/// - The root is the only node with an occurrence count of 0
#[derive(Clone, Debug)]
pub struct TrieNode<S> {
	/// Number of inserted windows whose path passes through this node.
	occurrences: u64,

	/// Continuations indexed by the next symbol.
	/// Example: { 'e' => node(42), 'a' => node(3) }
	children: HashMap<S, TrieNode<S>>,
}

impl<S> Default for TrieNode<S> {
	fn default() -> Self {
		Self { occurrences: 0, children: HashMap::new() }
	}
}

impl<S: Eq + Hash> PartialEq for TrieNode<S> {
	fn eq(&self, other: &Self) -> bool {
		self.occurrences == other.occurrences && self.children == other.children
	}
}

impl<S: Eq + Hash> Eq for TrieNode<S> {}

impl<S> TrieNode<S> {
	/// Creates an empty node with no observations.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of inserted windows that went through this node.
	pub fn occurrences(&self) -> u64 {
		self.occurrences
	}

	/// Iterates over `(symbol, child)` pairs in storage order.
	///
	/// Storage order is the hash-map order: stable for a given node as long
	/// as it is not mutated, but otherwise unspecified.
	pub fn children(&self) -> impl Iterator<Item = (&S, &TrieNode<S>)> {
		self.children.iter()
	}

	/// Number of direct children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Returns `true` if no window ever continued past this node.
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// Counts every node below this one (this node excluded).
	pub fn descendants(&self) -> usize {
		let mut total = 0;
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			total += node.children.len();
			stack.extend(node.children.values());
		}
		total
	}
}

impl<S: Eq + Hash> TrieNode<S> {
	/// Returns the child reached by `symbol`, if it was ever observed.
	pub fn child(&self, symbol: &S) -> Option<&TrieNode<S>> {
		self.children.get(symbol)
	}

	/// Follows `path` from this node, stopping at the first missing symbol.
	pub fn descend(&self, path: &[S]) -> Option<&TrieNode<S>> {
		path.iter().try_fold(self, |node, symbol| node.child(symbol))
	}
}

impl<S: Eq + Hash + Clone> TrieNode<S> {
	/// Records one more observation of `symbol` after this node.
	///
	/// - If the child already exists, its occurrence count is increased.
	/// - Otherwise, a new child is created with an initial count of 1.
	///
	/// Returns the child so that the caller can keep walking the window.
	pub(crate) fn observe(&mut self, symbol: &S) -> &mut TrieNode<S> {
		let child = self.children.entry(symbol.clone()).or_default();
		child.occurrences += 1;
		child
	}

	/// Merges another node into this one.
	///
	/// Occurrence counts of matching paths are summed; paths only present in
	/// `other` are cloned. Both nodes must stand for the same path, which the
	/// caller guarantees by merging from the roots down.
	pub(crate) fn merge(&mut self, other: &Self) {
		self.occurrences += other.occurrences;
		for (symbol, theirs) in &other.children {
			if let Some(ours) = self.children.get_mut(symbol) {
				ours.merge(theirs);
			} else {
				self.children.insert(symbol.clone(), theirs.clone());
			}
		}
	}
}
