pub mod loader;

use crate::checker::dictionary::Dictionary;
use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Medical vocabulary used when no word list is configured.
pub const SAMPLE_WORDS: &[(&str, u64)] = &[
    ("patient", 15000),
    ("patients", 12000),
    ("treatment", 8000),
    ("medical", 7000),
    ("study", 6500),
    ("disease", 5000),
    ("cancer", 4500),
    ("diabetes", 4000),
    ("therapy", 3500),
    ("clinical", 3000),
    ("diagnosis", 2800),
    ("symptoms", 2500),
    ("hospital", 2200),
    ("doctor", 2000),
    ("medicine", 1800),
    ("surgery", 1600),
    ("infection", 1400),
    ("health", 1200),
    ("blood", 1100),
    ("heart", 1000),
    ("brain", 900),
    ("liver", 800),
    ("kidney", 750),
    ("lung", 700),
];

pub fn sample_dictionary() -> Result<Dictionary> {
    Dictionary::from_entries(SAMPLE_WORDS.iter().copied())
}

/// Load the word list at `path`, or the sample vocabulary when there is none.
pub fn open(path: Option<&Path>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => loader::load_path(path)?,
        None => sample_dictionary()?,
    };

    info!(
        source = %path.map_or_else(|| "sample".to_string(), |p| p.display().to_string()),
        words = dictionary.len(),
        "dictionary ready"
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dictionary() {
        let dict = sample_dictionary().unwrap();
        assert_eq!(dict.len(), 24);
        assert_eq!(dict.most_common().word, "patient");
        assert_eq!(dict.frequency("lung"), Some(700));
    }

    #[test]
    fn test_open_without_path_uses_sample() {
        let dict = open(None).unwrap();
        assert!(dict.contains("diagnosis"));
    }
}
