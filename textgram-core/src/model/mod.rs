//! Top-level module for the corpus analysis system.
//!
//! This crate provides a word-level n-gram analysis pipeline, including:
//! - Token normalization (`tokenizer`)
//! - Frequency tables at three n-gram orders (`counts`)
//! - Smoothed conditional bigram probabilities (`probability`)
//! - Next-word prediction (`predictor`)
//! - A high-level analysis entry point (`analysis`)

/// High-level entry point running the whole pipeline on a corpus.
///
/// Exposes `analyze` and the `CorpusAnalysis` result bundle holding
/// every frequency table plus the predictor.
pub mod analysis;

/// Unigram, bigram and trigram frequency tables.
///
/// Handles sliding-window counting over a token sequence and exposes
/// vocabulary accessors used by the probability estimator.
pub mod counts;

/// Laplace-smoothed conditional bigram probabilities.
///
/// Converts bigram counts into `P(second | first)` estimates over the
/// observed bigrams only.
pub mod probability;

/// Greedy next-word prediction over a fixed probability table.
///
/// Owns the smoothed table and resolves the most probable successor
/// of a query bigram, with deterministic tie-breaking.
pub mod predictor;

/// Whitespace tokenizer with alphabetic-only filtering.
pub mod tokenizer;
