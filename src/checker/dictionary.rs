use crate::error::{Error, Result};
use fst::automaton::Levenshtein;
use fst::{IntoStreamer, Map, Streamer};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryEntry {
    /// Lowercased canonical form.
    pub word: String,
    /// Corpus occurrence count. Only used to order suggestions.
    pub frequency: u64,
}

/// Immutable, case-normalized vocabulary.
///
/// Entries keep the order they were supplied in. Two derived structures sit
/// beside them: a hash map for membership and an FST keyed by word that lets
/// the ranker enumerate only words inside a Levenshtein neighbourhood.
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    lookup: HashMap<String, usize>,
    index: Map<Vec<u8>>,
    // The FST automaton misses matches on multi-byte words
    ascii: bool,
}

impl Dictionary {
    /// Build a dictionary from `(word, frequency)` pairs.
    ///
    /// Words are trimmed and lowercased. A word that repeats after
    /// normalization keeps its first position and the highest frequency seen.
    /// Fails when no entries are given or a word is blank.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut ordered: Vec<DictionaryEntry> = Vec::new();
        let mut lookup: HashMap<String, usize> = HashMap::new();
        let mut merged = 0usize;

        for (position, (word, frequency)) in entries.into_iter().enumerate() {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(Error::invalid_dictionary(format!(
                    "entry {} has an empty word",
                    position + 1
                )));
            }

            match lookup.get(&word) {
                Some(&existing) => {
                    let entry = &mut ordered[existing];
                    debug!(
                        word = %entry.word,
                        kept = entry.frequency.max(frequency),
                        "merging duplicate dictionary word"
                    );
                    entry.frequency = entry.frequency.max(frequency);
                    merged += 1;
                }
                None => {
                    lookup.insert(word.clone(), ordered.len());
                    ordered.push(DictionaryEntry { word, frequency });
                }
            }
        }

        if ordered.is_empty() {
            return Err(Error::invalid_dictionary("no entries"));
        }

        let index = build_index(&ordered)?;
        let ascii = ordered.iter().all(|entry| entry.word.is_ascii());
        debug!(entries = ordered.len(), merged, ascii, "built dictionary");

        Ok(Self {
            entries: ordered,
            lookup,
            index,
            ascii,
        })
    }

    /// Like [`Dictionary::from_entries`], for sources whose frequencies are
    /// signed. A negative frequency is a malformed entry.
    pub fn from_signed_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let checked = entries
            .into_iter()
            .enumerate()
            .map(|(position, (word, frequency))| {
                u64::try_from(frequency).map(|f| (word, f)).map_err(|_| {
                    Error::invalid_dictionary(format!(
                        "entry {} has negative frequency {}",
                        position + 1,
                        frequency
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_entries(checked)
    }

    /// Check if word exists in dictionary, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains_key(&word.to_lowercase())
    }

    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        self.lookup
            .get(&word.to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.get(word).map(|entry| entry.frequency)
    }

    /// Entries whose word contains `query` (case-insensitive), in insertion
    /// order, at most `limit` of them. An empty query matches nothing.
    pub fn search_substring(&self, query: &str, limit: usize) -> Vec<&DictionaryEntry> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| entry.word.contains(&query))
            .take(limit)
            .collect()
    }

    /// Highest-frequency entry; the earliest one wins a tie.
    ///
    /// This is not simply the first entry: word lists loaded from files are
    /// not necessarily sorted by frequency.
    pub fn most_common(&self) -> &DictionaryEntry {
        self.entries[1..]
            .iter()
            .fold(&self.entries[0], |best, entry| {
                if entry.frequency > best.frequency {
                    entry
                } else {
                    best
                }
            })
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of entries within `max_distance` edits of `word`, exact match
    /// included, in lexicographic order of the words.
    ///
    /// Returns `None` when the query or any dictionary word is not ASCII, or
    /// when the automaton is too large to build; callers then fall back to a
    /// full scan.
    pub(crate) fn neighbours(&self, word: &str, max_distance: usize) -> Option<Vec<usize>> {
        if !self.ascii || !word.is_ascii() {
            return None;
        }
        let distance = u32::try_from(max_distance).ok()?;
        let automaton = match Levenshtein::new(word, distance) {
            Ok(automaton) => automaton,
            Err(e) => {
                debug!(word, max_distance, error = %e, "levenshtein automaton unavailable");
                return None;
            }
        };

        let mut hits = Vec::new();
        let mut stream = self.index.search(automaton).into_stream();
        while let Some((_, idx)) = stream.next() {
            hits.push(idx as usize);
        }

        Some(hits)
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

fn build_index(entries: &[DictionaryEntry]) -> Result<Map<Vec<u8>>> {
    let mut keys: Vec<(&str, u64)> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| (entry.word.as_str(), idx as u64))
        .collect();
    keys.sort_unstable_by_key(|(word, _)| *word);

    Map::from_iter(keys)
        .map_err(|e| Error::invalid_dictionary(format!("failed to index words: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dictionary {
        Dictionary::from_entries([
            ("Patient", 15000),
            ("patients", 12000),
            ("clinical", 3000),
            ("clinic", 900),
            ("lung", 700),
        ])
        .unwrap()
    }

    #[test]
    fn test_contains_ignores_case() {
        let dict = small();
        assert!(dict.contains("patient"));
        assert!(dict.contains("PATIENT"));
        assert!(dict.contains("Lung"));
        assert!(!dict.contains("pateint"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_words_are_lowercased() {
        let dict = small();
        assert_eq!(dict.entries()[0].word, "patient");
        assert_eq!(dict.frequency("PATIENT"), Some(15000));
        assert_eq!(dict.get("heart"), None);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = Dictionary::from_entries(Vec::<(String, u64)>::new()).unwrap_err();
        assert!(err.is_invalid_dictionary());
    }

    #[test]
    fn test_blank_word_is_rejected() {
        let err = Dictionary::from_entries([("heart", 1), ("   ", 2)]).unwrap_err();
        assert!(err.is_invalid_dictionary());
        assert!(err.to_string().contains("entry 2"));
    }

    #[test]
    fn test_negative_frequency_is_rejected() {
        let err = Dictionary::from_signed_entries([("heart", 10), ("brain", -1)]).unwrap_err();
        assert!(err.is_invalid_dictionary());

        let dict = Dictionary::from_signed_entries([("heart", 10)]).unwrap();
        assert_eq!(dict.frequency("heart"), Some(10));
    }

    #[test]
    fn test_duplicates_keep_first_position_and_max_frequency() {
        let dict =
            Dictionary::from_entries([("blood", 10), ("Heart", 5), ("heart", 50), ("HEART", 20)])
                .unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entries()[1].word, "heart");
        assert_eq!(dict.frequency("heart"), Some(50));
    }

    #[test]
    fn test_search_substring_keeps_insertion_order() {
        let dict = small();
        let hits: Vec<_> = dict
            .search_substring("CLIN", 5)
            .into_iter()
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(hits, vec!["clinical", "clinic"]);
    }

    #[test]
    fn test_search_substring_limit_and_empty_query() {
        let dict = small();
        assert_eq!(dict.search_substring("i", 2).len(), 2);
        assert!(dict.search_substring("", 5).is_empty());
        assert!(dict.search_substring("xyz", 5).is_empty());
    }

    #[test]
    fn test_most_common_prefers_earliest_on_tie() {
        let dict = Dictionary::from_entries([("liver", 800), ("kidney", 900), ("lung", 900)])
            .unwrap();
        assert_eq!(dict.most_common().word, "kidney");
    }

    #[test]
    fn test_most_common_on_unsorted_list() {
        let dict = Dictionary::from_entries([("lung", 700), ("patient", 15000), ("liver", 800)])
            .unwrap();
        assert_eq!(dict.entries()[0].word, "lung");
        assert_eq!(dict.most_common().word, "patient");
    }

    #[test]
    fn test_neighbours_skips_non_ascii() {
        let dict = Dictionary::from_entries([("größe", 1), ("lung", 2)]).unwrap();
        assert!(dict.neighbours("lung", 1).is_none());

        let dict = small();
        assert!(dict.neighbours("clinïc", 1).is_none());
        assert!(dict.neighbours("clinik", 1).is_some());
    }

    #[test]
    fn test_neighbours_returns_words_within_distance() {
        let dict = small();
        let mut hits: Vec<_> = dict
            .neighbours("clinik", 1)
            .unwrap()
            .into_iter()
            .map(|idx| dict.entries()[idx].word.clone())
            .collect();
        hits.sort();
        assert_eq!(hits, vec!["clinic".to_string()]);

        let exact = dict.neighbours("lung", 0).unwrap();
        assert_eq!(exact.len(), 1);
        assert_eq!(dict.entries()[exact[0]].word, "lung");
    }
}
