use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::counts::NgramCounts;

/// Laplace-smoothed conditional probabilities for observed bigrams.
///
/// For each bigram `(first, second)` with count `c`, the stored value is
/// `(c + 1) / (unigram_count(first) + V)` where `V` is the vocabulary
/// size. The unigram count of the first word is used as the denominator
/// base rather than the sum of all bigrams starting with it; this
/// approximation is kept deliberately, since reproducing the historical
/// estimates is the requirement.
///
/// # Invariants
/// - One entry per bigram observed in the bigram table, nothing else;
///   unobserved bigrams have no entry rather than a zero
/// - Every stored value lies in `(0, 1]`
/// - Entry order follows the bigram table's insertion order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BigramProbabilities {
	table: IndexMap<(String, String), f64>,
}

impl BigramProbabilities {
	/// Computes the smoothed probability of every observed bigram.
	///
	/// Never fails: the denominator `unigram_count + V` is always
	/// >= `V` > 0 whenever any bigram exists, so no division by zero is
	/// possible. A first word absent from the unigram table counts as 0.
	pub fn from_counts(counts: &NgramCounts) -> Self {
		let vocabulary = counts.vocabulary_size();
		let mut table = IndexMap::with_capacity(counts.bigrams.len());

		for ((first, second), count) in &counts.bigrams {
			let denominator = (counts.unigram_count(first) + vocabulary) as f64;
			let probability = (count + 1) as f64 / denominator;
			table.insert((first.clone(), second.clone()), probability);
		}

		Self { table }
	}

	/// Returns the probability of a bigram, `None` if it was never observed.
	pub fn get(&self, first: &str, second: &str) -> Option<f64> {
		self.table.get(&(first.to_owned(), second.to_owned())).copied()
	}

	/// Returns true if the bigram was observed during analysis.
	pub fn contains(&self, first: &str, second: &str) -> bool {
		self.table.contains_key(&(first.to_owned(), second.to_owned()))
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&(String, String), f64)> {
		self.table.iter().map(|(bigram, probability)| (bigram, *probability))
	}

	/// Returns the number of observed bigrams.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	/// Returns true if no bigram was observed.
	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}
}
