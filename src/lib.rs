pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;

pub use checker::dictionary::{Dictionary, DictionaryEntry};
pub use checker::suggestions::Candidate;
pub use checker::tokenizer::Token;
pub use checker::{check, search, CheckOptions, SpellChecker};
pub use config::Config;
pub use error::{Error, Result};

use serde::Serialize;

/// An unknown word that has at least one suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    /// Index of the word in the token stream.
    pub position: usize,
    pub word: String,
    pub suggestions: Vec<Candidate>,
}

/// Misspellings in the order they appear in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MisspellingReport {
    pub misspellings: Vec<Misspelling>,
}

impl MisspellingReport {
    pub fn len(&self) -> usize {
        self.misspellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.misspellings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Misspelling> {
        self.misspellings.iter()
    }
}

impl IntoIterator for MisspellingReport {
    type Item = Misspelling;
    type IntoIter = std::vec::IntoIter<Misspelling>;

    fn into_iter(self) -> Self::IntoIter {
        self.misspellings.into_iter()
    }
}

impl<'a> IntoIterator for &'a MisspellingReport {
    type Item = &'a Misspelling;
    type IntoIter = std::slice::Iter<'a, Misspelling>;

    fn into_iter(self) -> Self::IntoIter {
        self.misspellings.iter()
    }
}
