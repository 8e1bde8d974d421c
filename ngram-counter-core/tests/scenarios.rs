use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use ngram_counter_core::{NGramTrie, Observer, TrieError};

fn aab() -> NGramTrie<char> {
	let mut trie = NGramTrie::new(2);
	trie.insert(&['a', 'a', 'b']);
	trie
}

fn words(text: &str) -> Vec<&str> {
	text.split_whitespace().collect()
}

#[test]
fn scenario_a_counts_and_unique() {
	let trie = aab();

	assert_eq!(trie.counts(&['a']).full, 2);
	assert_eq!(trie.counts(&['b']).full, 1);
	assert_eq!(trie.counts(&['a', 'a']).full, 1);
	assert_eq!(trie.counts(&['a', 'b']).full, 1);
	assert_eq!(trie.unique(1), 2);
	assert_eq!(trie.unique(2), 2);
}

#[test]
fn scenario_b_branches_after_a() {
	let trie = aab();
	let mut branches = trie.branches(&['a']);
	branches.sort();
	assert_eq!(branches, vec![('a', 1), ('b', 1)]);
}

#[test]
fn scenario_c_unconditional_probability() {
	let trie = aab();
	let expected = trie.counts(&['a']).full as f64 / trie.total(1) as f64;
	assert_eq!(trie.unconditional_probability(&['a']), expected);
	assert_eq!(expected, 2.0 / 3.0);
}

#[test]
fn scenario_d_empty_counts_are_degenerate_not_fatal() {
	#[derive(Default, Clone)]
	struct Diagnostics(Rc<RefCell<Vec<TrieError>>>);

	impl Observer for Diagnostics {
		fn diagnostic(&self, diagnostic: &TrieError) {
			self.0.borrow_mut().push(diagnostic.clone());
		}
	}

	let diagnostics = Diagnostics::default();
	let trie = aab().with_observer(diagnostics.clone());

	let counts = trie.counts(&[]);
	assert_eq!(counts.full, 0);
	assert_eq!(counts.parent, 0);
	assert!(std::ptr::eq(counts.node, trie.root()));
	assert_eq!(*diagnostics.0.borrow(), vec![TrieError::EmptySequence { operation: "counts" }]);
}

#[test]
fn unique_matches_an_independent_path_tally() {
	let mut trie = NGramTrie::new(4);
	trie.insert(&words("the cat sat on the mat and the cat ran off the mat"));
	trie.insert(&words("a cat sat"));

	// Every prefix of a maximal path is a path of the tree
	let mut paths: HashMap<usize, HashSet<Vec<&str>>> = HashMap::new();
	for (path, _) in trie.all_branches() {
		for n in 1..=path.len() {
			paths.entry(n).or_default().insert(path[..n].to_vec());
		}
	}

	for n in 1..=trie.order() {
		let tally = paths.get(&n).map_or(0, HashSet::len) as u64;
		assert_eq!(trie.unique(n), tally, "n = {n}");
		assert_eq!(trie.ngrams(n).len() as u64, tally, "n = {n}");
	}
	assert_eq!(
		trie.unique_all(),
		(1..=trie.order()).map(|n| trie.unique(n)).collect::<Vec<_>>()
	);
}

#[test]
fn inserted_tail_is_always_found() {
	let mut trie = NGramTrie::new(3);
	for sequence in [vec![1u32], vec![4, 5], vec![9, 8, 7, 6, 5]] {
		trie.insert(&sequence);
		let tail = &sequence[sequence.len().saturating_sub(3)..];
		assert!(trie.counts(tail).full >= 1);
		assert!(trie.counts(&sequence).full >= 1);
	}
}

#[test]
fn probabilities_stay_in_unit_interval() {
	let mut trie = NGramTrie::new(3);
	trie.insert_text("she sells sea shells by the sea shore");

	let symbols: Vec<char> = "she lo".chars().collect();
	for &a in &symbols {
		for &b in &symbols {
			for sequence in [vec![a], vec![a, b], vec![b, a, b]] {
				for p in [trie.probability(&sequence), trie.unconditional_probability(&sequence)] {
					assert!((0.0..=1.0).contains(&p), "{sequence:?} -> {p}");
				}
			}
		}
	}

	assert_eq!(trie.probability(&['x', 'y']), 0.0);
	assert_eq!(trie.unconditional_probability(&['q']), 0.0);
}

#[test]
fn unseen_final_symbol_and_unseen_context_differ_in_parent() {
	let mut trie = NGramTrie::new(3);
	trie.insert_text("abc");

	let novel_continuation = trie.counts(&['a', 'b', 'x']);
	assert_eq!((novel_continuation.full, novel_continuation.parent), (0, 1));

	let unknown_context = trie.counts(&['a', 'x', 'c']);
	assert_eq!((unknown_context.full, unknown_context.parent), (0, 0));
}

#[test]
fn branches_are_sorted_and_root_branches_sum_to_unigram_total() {
	let mut trie = NGramTrie::new(2);
	trie.insert(&words("to be or not to be that is the question"));

	let root = trie.branches(&[]);
	assert!(root.windows(2).all(|pair| pair[0].1 >= pair[1].1));
	assert_eq!(root.iter().map(|(_, c)| c).sum::<u64>(), trie.total(1));

	let after_to = trie.branches(&["to"]);
	assert_eq!(after_to, vec![("be", 2)]);
}

#[test]
fn repeated_inserts_accumulate() {
	let mut trie = NGramTrie::new(2);
	trie.insert_text("ab");
	trie.insert_text("ab");

	assert_eq!(trie.counts(&['a', 'b']).full, 2);
	assert_eq!(trie.totals(), &[0, 4, 2]);
	assert_eq!(trie.probability(&['a', 'b']), 1.0);
}

#[test]
fn merge_equals_inserting_everything_in_one_trie() {
	let first = words("the cat sat on the mat");
	let second = words("the dog sat on the log");

	let mut left = NGramTrie::new(3);
	left.insert(&first);
	let mut right = NGramTrie::new(3);
	right.insert(&second);
	left.merge(&right).unwrap();

	let mut single = NGramTrie::new(3);
	single.insert_all([&first, &second]);

	assert_eq!(left.totals(), single.totals());
	assert_eq!(left.root(), single.root());
	assert_eq!(left.unique_all(), single.unique_all());
	assert_eq!(left.probability(&["on", "the", "mat"]), 0.5);
}
