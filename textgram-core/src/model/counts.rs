use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Frequency tables for the three n-gram orders of a token sequence.
///
/// All tables are keyed in insertion order, so iterating a table visits
/// n-grams in the order they were first encountered in the sequence.
/// This ordering is part of the contract: downstream tie-breaking relies
/// on it.
///
/// # Responsibilities
/// - Count unigrams, bigrams and trigrams in sliding windows of stride 1
/// - Expose the vocabulary size and per-word counts to the estimator
///
/// # Invariants
/// - Sum of unigram counts equals the token sequence length
/// - Sum of bigram counts equals `length - 1` (0 if `length < 2`)
/// - Sum of trigram counts equals `length - 2` (0 if `length < 3`)
/// - Every stored count is >= 1
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NgramCounts {
	/// Occurrence count per distinct token.
	pub unigrams: IndexMap<String, usize>,
	/// Occurrence count per ordered pair of adjacent tokens.
	pub bigrams: IndexMap<(String, String), usize>,
	/// Occurrence count per ordered triple of adjacent tokens.
	pub trigrams: IndexMap<(String, String, String), usize>,
}

impl NgramCounts {
	/// Builds all three frequency tables from one token sequence.
	///
	/// Sequences shorter than 2 tokens yield an empty bigram table and
	/// sequences shorter than 3 an empty trigram table. No errors.
	pub fn from_tokens(tokens: &[String]) -> Self {
		let mut counts = Self {
			unigrams: IndexMap::new(),
			bigrams: IndexMap::new(),
			trigrams: IndexMap::new(),
		};

		for token in tokens {
			*counts.unigrams.entry(token.clone()).or_insert(0) += 1;
		}

		for pair in tokens.windows(2) {
			let bigram = (pair[0].clone(), pair[1].clone());
			*counts.bigrams.entry(bigram).or_insert(0) += 1;
		}

		for triple in tokens.windows(3) {
			let trigram = (triple[0].clone(), triple[1].clone(), triple[2].clone());
			*counts.trigrams.entry(trigram).or_insert(0) += 1;
		}

		counts
	}

	/// Returns the number of distinct tokens in the unigram table.
	pub fn vocabulary_size(&self) -> usize {
		self.unigrams.len()
	}

	/// Returns the occurrence count of a word, 0 if it was never seen.
	pub fn unigram_count(&self, word: &str) -> usize {
		self.unigrams.get(word).copied().unwrap_or(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::tokenizer::tokenize;

	fn counts_for(corpus: &str) -> NgramCounts {
		NgramCounts::from_tokens(&tokenize(corpus))
	}

	#[test]
	fn table_sums_match_sequence_length() {
		let counts = counts_for("the cat sat on the mat the cat ran");
		assert_eq!(counts.unigrams.values().sum::<usize>(), 9);
		assert_eq!(counts.bigrams.values().sum::<usize>(), 8);
		assert_eq!(counts.trigrams.values().sum::<usize>(), 7);
	}

	#[test]
	fn counts_accumulate_per_ngram() {
		let counts = counts_for("the cat sat on the mat the cat ran");
		assert_eq!(counts.unigram_count("the"), 3);
		assert_eq!(counts.unigram_count("cat"), 2);
		assert_eq!(counts.unigram_count("missing"), 0);
		assert_eq!(counts.bigrams[&("the".to_owned(), "cat".to_owned())], 2);
		assert_eq!(
			counts.trigrams[&("the".to_owned(), "cat".to_owned(), "sat".to_owned())],
			1
		);
	}

	#[test]
	fn short_sequences_yield_empty_higher_order_tables() {
		let empty = counts_for("");
		assert!(empty.unigrams.is_empty());
		assert!(empty.bigrams.is_empty());
		assert!(empty.trigrams.is_empty());

		let one = counts_for("hello");
		assert_eq!(one.unigrams.len(), 1);
		assert!(one.bigrams.is_empty());
		assert!(one.trigrams.is_empty());

		let two = counts_for("hello world");
		assert_eq!(two.bigrams.len(), 1);
		assert!(two.trigrams.is_empty());
	}

	#[test]
	fn keys_are_stored_in_first_encounter_order() {
		let counts = counts_for("the cat sat on the mat");
		let order: Vec<&str> = counts.unigrams.keys().map(String::as_str).collect();
		assert_eq!(order, vec!["the", "cat", "sat", "on", "mat"]);
	}

	#[test]
	fn vocabulary_size_counts_distinct_tokens() {
		let counts = counts_for("the cat sat on the mat the cat ran");
		assert_eq!(counts.vocabulary_size(), 6);
	}
}
