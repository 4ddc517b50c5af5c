use rand::prelude::IteratorRandom;
use serde::{Deserialize, Serialize};

use super::probability::BigramProbabilities;

/// Greedy next-word predictor over a fixed bigram probability table.
///
/// The predictor owns the smoothed table computed at analysis time and
/// exposes a pure lookup: no state is mutated by prediction, and two
/// predictors built from the same corpus behave identically.
///
/// # Responsibilities
/// - Resolve the most probable successor of a query bigram
/// - Distinguish the recoverable "bigram never observed" case from the
///   inconsistent "no successor exists" case
/// - Provide a random observed bigram as a starting seed
///
/// # Invariants
/// - Candidate scanning follows table insertion order, so probability
///   ties are won by the first-inserted candidate
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NextWordPredictor {
	probabilities: BigramProbabilities,
}

impl NextWordPredictor {
	/// Creates a predictor owning the given probability table.
	pub fn new(probabilities: BigramProbabilities) -> Self {
		Self { probabilities }
	}

	/// Returns a read-only reference to the owned probability table.
	pub fn probabilities(&self) -> &BigramProbabilities {
		&self.probabilities
	}

	/// Predicts the most probable word following the query bigram.
	///
	/// The query `(first, second)` stands for the two most recent words.
	/// Candidates are all observed bigrams starting with `second`; the
	/// one with the highest probability wins, ties going to the first
	/// candidate in insertion order. There is no backoff to unigram
	/// statistics.
	///
	/// # Returns
	/// - `Ok(Some(word))`: the predicted next word.
	/// - `Ok(None)`: the query bigram was never observed.
	///
	/// # Errors
	/// Returns an error if the query bigram was observed but `second`
	/// never begins any bigram, which the counting pass cannot produce
	/// on its own.
	pub fn predict(&self, first: &str, second: &str) -> Result<Option<&str>, String> {
		if !self.probabilities.contains(first, second) {
			return Ok(None);
		}

		let mut best: Option<(&str, f64)> = None;
		for ((candidate_first, candidate_second), probability) in self.probabilities.iter() {
			if candidate_first != second {
				continue;
			}
			// Strict comparison keeps the first-encountered maximum on ties
			match best {
				Some((_, best_probability)) if probability <= best_probability => (),
				_ => best = Some((candidate_second.as_str(), probability)),
			}
		}

		match best {
			Some((next_word, _)) => Ok(Some(next_word)),
			None => Err(format!("No successor found for '{}'", second)),
		}
	}

	/// Returns a random observed bigram to seed a prediction.
	///
	/// Useful for starting a prediction without a known context.
	/// Returns `None` if the table is empty.
	pub fn random_seed(&self) -> Option<(&str, &str)> {
		self.probabilities
			.iter()
			.map(|((first, second), _)| (first.as_str(), second.as_str()))
			.choose(&mut rand::rng())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::counts::NgramCounts;
	use crate::model::tokenizer::tokenize;

	fn predictor_for(corpus: &str) -> NextWordPredictor {
		let counts = NgramCounts::from_tokens(&tokenize(corpus));
		NextWordPredictor::new(BigramProbabilities::from_counts(&counts))
	}

	#[test]
	fn unseen_bigram_returns_the_absence_sentinel() {
		let predictor = predictor_for("the cat sat on the mat the cat ran");
		assert_eq!(predictor.predict("zzz", "qqq"), Ok(None));
		// Both words are known, the pair is not
		assert_eq!(predictor.predict("cat", "on"), Ok(None));
	}

	#[test]
	fn picks_the_most_probable_successor() {
		// count(a, b) = 2 beats count(a, c) = 1 among successors of "a".
		let predictor = predictor_for("a b a b a c");
		assert_eq!(predictor.predict("b", "a"), Ok(Some("b")));
	}

	#[test]
	fn ties_go_to_the_first_inserted_candidate() {
		// (cat, sat) and (cat, ran) both have count 1 and equal
		// probabilities; (cat, sat) was observed first.
		let predictor = predictor_for("the cat sat on the mat the cat ran");
		assert_eq!(predictor.predict("the", "cat"), Ok(Some("sat")));
	}

	#[test]
	fn missing_successor_is_a_distinct_error() {
		// "two" ends the corpus and never begins a bigram.
		let predictor = predictor_for("one two");
		let result = predictor.predict("one", "two");
		assert!(result.is_err());
	}

	#[test]
	fn random_seed_reflects_the_observed_bigrams() {
		let empty = predictor_for("");
		assert_eq!(empty.random_seed(), None);

		let predictor = predictor_for("the cat sat");
		let (first, second) = predictor.random_seed().unwrap();
		assert!(predictor.probabilities().contains(first, second));
	}
}
