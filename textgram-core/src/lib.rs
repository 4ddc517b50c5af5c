//! Word-frequency statistics and next-word prediction library.
//!
//! This crate provides a single-pass corpus analysis pipeline including:
//! - Whitespace tokenization with alphabetic-only filtering
//! - Unigram, bigram and trigram frequency tables
//! - Laplace-smoothed conditional bigram probabilities
//! - Greedy next-word prediction over the smoothed table
//!
//! Only the high-level API is exposed publicly. The pipeline is fully
//! sequential and allocates a fresh, independently owned result bundle
//! per analysis call.

/// Core analysis models and prediction logic.
///
/// This module exposes the tokenizer, the frequency tables, the
/// probability estimator and the predictor interface.
pub mod model;
