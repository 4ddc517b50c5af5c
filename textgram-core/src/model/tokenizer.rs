/// Normalizes raw text into a sequence of lowercase alphabetic tokens.
///
/// Splits on whitespace and keeps a word only if every character is an
/// alphabetic letter. Words containing digits or punctuation are dropped
/// wholesale, not stripped (`"n-grams"` and `"prediction."` produce
/// nothing).
///
/// # Notes
/// - Never fails: any input, including the empty string, yields a
///   (possibly empty) sequence.
/// - Output order is the order of appearance in the source text.
pub fn tokenize(corpus: &str) -> Vec<String> {
	corpus
		.split_whitespace()
		.filter(|word| word.chars().all(char::is_alphabetic))
		.map(str::to_lowercase)
		.collect()
}
