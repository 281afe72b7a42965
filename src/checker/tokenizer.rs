use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    // Anything that is neither alphanumeric nor whitespace
    static ref NON_WORD: Regex = Regex::new(r"[^\p{Alphabetic}\p{N}\s]").unwrap();
}

/// A lowercased word and its index in the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub position: usize,
    pub text: String,
}

/// Split text into lowercased word tokens.
///
/// Every punctuation character becomes a space, so `"blood-sugar"` yields two
/// tokens rather than `"bloodsugar"`. Positions count tokens, not characters.
pub fn tokenize(text: &str) -> Vec<Token> {
    let cleaned = NON_WORD.replace_all(text, " ").to_lowercase();

    cleaned
        .split_whitespace()
        .enumerate()
        .map(|(position, word)| Token {
            position,
            text: word.to_string(),
        })
        .collect()
}
