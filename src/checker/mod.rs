pub mod dictionary;
pub mod distance;
pub mod suggestions;
pub mod tokenizer;

use crate::{Misspelling, MisspellingReport};
use dictionary::{Dictionary, DictionaryEntry};
use rayon::prelude::*;
use std::sync::Arc;
use suggestions::{DEFAULT_MAX_DISTANCE, DEFAULT_MAX_SUGGESTIONS};
use tokenizer::Token;
use tracing::debug;

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Largest edit distance a suggestion may have.
    pub max_distance: usize,
    /// Suggestions kept per misspelling.
    pub max_suggestions: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Find the words in `text` that are not in `dictionary` and suggest
/// corrections for them.
///
/// An unknown word with no dictionary word within `max_distance` is left out
/// of the report. Any input text, including an empty one, gives a report.
/// Unknown words are ranked in parallel; the report keeps text order.
pub fn check(text: &str, dictionary: &Dictionary, options: &CheckOptions) -> MisspellingReport {
    let unknown: Vec<Token> = tokenizer::tokenize(text)
        .into_iter()
        .filter(|token| !dictionary.contains(&token.text))
        .collect();

    let misspellings: Vec<Misspelling> = unknown
        .into_par_iter()
        .filter_map(|token| {
            let suggestions = suggestions::rank(
                &token.text,
                dictionary,
                options.max_distance,
                options.max_suggestions,
            );
            if suggestions.is_empty() {
                return None;
            }
            Some(Misspelling {
                position: token.position,
                word: token.text,
                suggestions,
            })
        })
        .collect();

    debug!(misspellings = misspellings.len(), "checked text");
    MisspellingReport { misspellings }
}

/// Dictionary entries containing `query`, see [`Dictionary::search_substring`].
pub fn search<'a>(query: &str, dictionary: &'a Dictionary, limit: usize) -> Vec<&'a DictionaryEntry> {
    dictionary.search_substring(query, limit)
}

/// A dictionary bundled with the options to check against it.
///
/// The dictionary sits behind an `Arc`, so clones are cheap and can be handed
/// to other threads.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Arc<Dictionary>,
    options: CheckOptions,
}

impl SpellChecker {
    pub fn new(dictionary: Arc<Dictionary>, options: CheckOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    pub fn check(&self, text: &str) -> MisspellingReport {
        check(text, &self.dictionary, &self.options)
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<&DictionaryEntry> {
        search(query, &self.dictionary, limit)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }
}
