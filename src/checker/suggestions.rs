use crate::checker::dictionary::{Dictionary, DictionaryEntry};
use crate::checker::distance::edit_distance;
use rayon::prelude::*;
use serde::Serialize;
use tracing::trace;

pub const DEFAULT_MAX_DISTANCE: usize = 2;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

// Below this many entries a sequential scan beats the rayon split overhead
const PARALLEL_SCAN_THRESHOLD: usize = 4096;

/// A dictionary word proposed as a correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub word: String,
    /// Always at least 1.
    pub distance: usize,
    pub frequency: u64,
}

/// Rank correction candidates for `word`.
///
/// Keeps dictionary words at distance `1..=max_distance`, ordered by distance,
/// then by descending frequency, then by dictionary order, and returns the
/// first `max_suggestions`. Candidates come from the dictionary's FST index
/// when possible; the result is identical to [`rank_scan`].
pub fn rank(
    word: &str,
    dictionary: &Dictionary,
    max_distance: usize,
    max_suggestions: usize,
) -> Vec<Candidate> {
    let word = word.to_lowercase();

    let scored = match dictionary.neighbours(&word, max_distance) {
        Some(indices) => indices
            .into_iter()
            .filter_map(|idx| {
                let distance = edit_distance(&word, &dictionary.entries()[idx].word);
                (distance > 0 && distance <= max_distance).then_some((idx, distance))
            })
            .collect(),
        None => scan(&word, dictionary, max_distance),
    };

    let candidates = finish(dictionary, scored, max_suggestions);
    trace!(word = %word, candidates = candidates.len(), "ranked candidates");
    candidates
}

/// Rank by computing the distance to every dictionary word.
pub fn rank_scan(
    word: &str,
    dictionary: &Dictionary,
    max_distance: usize,
    max_suggestions: usize,
) -> Vec<Candidate> {
    let word = word.to_lowercase();
    let scored = scan(&word, dictionary, max_distance);
    finish(dictionary, scored, max_suggestions)
}

/// `(entry index, distance)` for every entry in range.
fn scan(word: &str, dictionary: &Dictionary, max_distance: usize) -> Vec<(usize, usize)> {
    let word_len = word.chars().count();
    let within = |(idx, entry): (usize, &DictionaryEntry)| {
        // distance can never be below the length difference
        if entry.word.chars().count().abs_diff(word_len) > max_distance {
            return None;
        }
        let distance = edit_distance(word, &entry.word);
        (distance > 0 && distance <= max_distance).then_some((idx, distance))
    };

    let entries = dictionary.entries();
    if entries.len() >= PARALLEL_SCAN_THRESHOLD {
        entries.par_iter().enumerate().filter_map(within).collect()
    } else {
        entries.iter().enumerate().filter_map(within).collect()
    }
}

fn finish(
    dictionary: &Dictionary,
    mut scored: Vec<(usize, usize)>,
    max_suggestions: usize,
) -> Vec<Candidate> {
    let entries = dictionary.entries();

    scored.sort_unstable_by(|&(a_idx, a_dist), &(b_idx, b_dist)| {
        a_dist
            .cmp(&b_dist)
            .then_with(|| entries[b_idx].frequency.cmp(&entries[a_idx].frequency))
            .then_with(|| a_idx.cmp(&b_idx))
    });

    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(idx, distance)| Candidate {
            word: entries[idx].word.clone(),
            distance,
            frequency: entries[idx].frequency,
        })
        .collect()
}
