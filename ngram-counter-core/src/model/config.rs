use crate::error::{Result, TrieError};

/// Default number of windows between two progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 64_000;

/// Construction parameters of an `NGramTrie`.
///
/// # Responsibilities
/// - Hold the order (maximum n-gram length) of the model
/// - Hold how often insertion reports progress to the observer
///
/// # Invariants
/// - `order` is always >= 1
/// - `progress_interval` is always >= 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrieConfig {
	/// Maximum n-gram length tracked by the model.
	order: usize,

	/// Number of inserted windows between two `Observer::progress` calls.
	progress_interval: usize,
}

impl Default for TrieConfig {
	fn default() -> Self {
		Self { order: 1, progress_interval: DEFAULT_PROGRESS_INTERVAL }
	}
}

impl TrieConfig {
	/// Creates a configuration of the given order.
	///
	/// # Errors
	/// Returns `TrieError::InvalidOrder` if `order < 1`.
	pub fn new(order: usize) -> Result<Self> {
		let mut config = Self::default();
		config.set_order(order)?;
		Ok(config)
	}

	/// Returns the maximum n-gram length.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns the number of windows between two progress notifications.
	pub fn progress_interval(&self) -> usize {
		self.progress_interval
	}

	/// Sets the maximum n-gram length.
	///
	/// # Errors
	/// Returns `TrieError::InvalidOrder` if `order < 1`.
	pub fn set_order(&mut self, order: usize) -> Result<()> {
		if order < 1 {
			return Err(TrieError::InvalidOrder { got: order });
		}
		self.order = order;
		Ok(())
	}

	/// Sets how many windows are inserted between two progress notifications.
	///
	/// # Errors
	/// Returns `TrieError::InvalidProgressInterval` if `interval` is 0.
	pub fn set_progress_interval(&mut self, interval: usize) -> Result<()> {
		if interval == 0 {
			return Err(TrieError::InvalidProgressInterval);
		}
		self.progress_interval = interval;
		Ok(())
	}
}
