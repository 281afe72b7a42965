//! Word list loading.
//!
//! One entry per line, `word` and `frequency` separated by a tab, a comma or
//! spaces. A bare word gets frequency 0. Blank lines and `#` comments are
//! skipped, as is a leading `word,frequency` style header.

use crate::checker::dictionary::Dictionary;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

pub fn load_path(path: &Path) -> Result<Dictionary> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "reading word list");
    parse(BufReader::new(file))
}

pub fn parse<R: BufRead>(reader: R) -> Result<Dictionary> {
    let mut entries: Vec<(String, u64)> = Vec::new();
    let mut seen_data = false;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_idx + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == '\t' || c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();

        let (word, frequency) = match fields.as_slice() {
            [word] => (*word, 0),
            [word, frequency] => {
                if !seen_data && is_header(word, frequency) {
                    seen_data = true;
                    continue;
                }
                (*word, parse_frequency(frequency, line_no)?)
            }
            _ => {
                return Err(Error::parse(
                    line_no,
                    format!("expected `word frequency`, found {} fields", fields.len()),
                ))
            }
        };

        seen_data = true;
        entries.push((word.to_string(), frequency));
    }

    Dictionary::from_entries(entries)
}

fn is_header(word: &str, frequency: &str) -> bool {
    word.eq_ignore_ascii_case("word") && frequency.parse::<i64>().is_err()
}

fn parse_frequency(field: &str, line_no: usize) -> Result<u64> {
    let value: i64 = field
        .parse()
        .map_err(|_| Error::parse(line_no, format!("invalid frequency `{}`", field)))?;

    u64::try_from(value).map_err(|_| {
        Error::invalid_dictionary(format!("line {} has negative frequency {}", line_no, value))
    })
}
