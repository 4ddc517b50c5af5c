use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::counts::NgramCounts;
use super::predictor::NextWordPredictor;
use super::probability::BigramProbabilities;
use super::tokenizer::tokenize;

/// Complete analysis of one text corpus.
///
/// A typed bundle holding the three frequency tables plus the predictor,
/// which itself owns the smoothed bigram probability table. Every field
/// is an immutable snapshot produced by a single `analyze` call; nothing
/// is shared or mutated across calls.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CorpusAnalysis {
	/// Occurrence count per distinct token.
	pub unigrams: IndexMap<String, usize>,
	/// Occurrence count per ordered pair of adjacent tokens.
	pub bigrams: IndexMap<(String, String), usize>,
	/// Occurrence count per ordered triple of adjacent tokens.
	pub trigrams: IndexMap<(String, String, String), usize>,
	predictor: NextWordPredictor,
}

impl CorpusAnalysis {
	/// Returns the smoothed bigram probability table owned by the predictor.
	pub fn bigram_probabilities(&self) -> &BigramProbabilities {
		self.predictor.probabilities()
	}

	/// Returns the next-word predictor for this corpus.
	pub fn predictor(&self) -> &NextWordPredictor {
		&self.predictor
	}
}

/// Analyzes a text corpus and produces the full result bundle.
///
/// Runs the pipeline end to end: tokenization, n-gram counting at three
/// orders, probability smoothing, predictor construction. The corpus is
/// the only input; each call returns a fresh, independently owned
/// `CorpusAnalysis`.
///
/// # Notes
/// - Never fails: an empty or fully non-alphabetic corpus yields empty
///   tables and a predictor that knows no bigram.
pub fn analyze(corpus: &str) -> CorpusAnalysis {
	let tokens = tokenize(corpus);
	let counts = NgramCounts::from_tokens(&tokens);
	let probabilities = BigramProbabilities::from_counts(&counts);

	let NgramCounts { unigrams, bigrams, trigrams } = counts;
	CorpusAnalysis {
		unigrams,
		bigrams,
		trigrams,
		predictor: NextWordPredictor::new(probabilities),
	}
}
