//! Error types for medspell.
//!
//! The checking core has exactly one failure mode: a dictionary that cannot be
//! built. Everything else it does is total over its input. The remaining
//! variants belong to the word-list loader in [`crate::dict::loader`].

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The entry list was empty or held a malformed entry.
    #[error("Invalid dictionary: {0}")]
    InvalidDictionary(String),

    /// A word list could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A word list line could not be parsed.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl Error {
    pub fn invalid_dictionary<S: Into<String>>(reason: S) -> Self {
        Error::InvalidDictionary(reason.into())
    }

    pub fn parse<S: Into<String>>(line: usize, reason: S) -> Self {
        Error::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_dictionary(&self) -> bool {
        matches!(self, Error::InvalidDictionary(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
