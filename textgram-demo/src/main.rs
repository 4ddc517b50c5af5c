use textgram_core::model::analysis::analyze;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fixed sample corpus; the tokenizer drops "n-grams" and "prediction."
    // wholesale since they contain non-alphabetic characters
    let corpus = "This is a sample text corpus to analyze for n-grams and next word prediction.";

    // Run the whole pipeline; the bundle owns every table plus the predictor
    let results = analyze(corpus);

    // Tables iterate in insertion order (first-encounter order)
    println!("1. Unigrams:");
    for (word, count) in &results.unigrams {
        println!("{}: {}", word, count);
    }

    println!("\n2. Bigrams:");
    for ((first, second), count) in &results.bigrams {
        println!("('{}', '{}'): {}", first, second, count);
    }

    println!("\n3. Trigrams:");
    for ((first, second, third), count) in &results.trigrams {
        println!("('{}', '{}', '{}'): {}", first, second, third, count);
    }

    println!("\n4. Bigram Probabilities:");
    for ((first, second), probability) in results.bigram_probabilities().iter() {
        println!("('{}', '{}'): {:.4}", first, second, probability);
    }

    // Predict the word most likely to follow the example bigram;
    // an unseen bigram would yield Ok(None) rather than an error
    match results.predictor().predict("this", "is")? {
        Some(word) => println!("\n5. Next word prediction for ('this', 'is'): {}", word),
        None => println!("\n5. Next word prediction for ('this', 'is'): no prediction available"),
    }

    Ok(())
}
