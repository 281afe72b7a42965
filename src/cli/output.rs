use crate::{Dictionary, DictionaryEntry, MisspellingReport};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    total_errors: usize,
    errors: &'a MisspellingReport,
}

#[derive(Debug, Serialize)]
struct JsonSearch<'a> {
    query: &'a str,
    matches: &'a [&'a DictionaryEntry],
}

#[derive(Debug, Serialize)]
struct JsonInfo<'a> {
    source: &'a str,
    words: usize,
    most_common: &'a DictionaryEntry,
}

pub fn print_report(report: &MisspellingReport, colored_output: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_report(report, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json(&JsonReport {
            total_errors: report.len(),
            errors: report,
        }),
    }
}

fn print_text_report(report: &MisspellingReport, colored_output: bool) {
    for misspelling in report {
        let position = format!("#{}", misspelling.position);
        let suggestions = misspelling
            .suggestions
            .iter()
            .map(|c| {
                let detail = format!("(d={}, {})", c.distance, format_frequency(c.frequency));
                if colored_output {
                    format!("{} {}", c.word.green(), detail.dimmed())
                } else {
                    format!("{} {}", c.word, detail)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        if colored_output {
            println!("  {} {}", position.blue().bold(), misspelling.word.red().bold());
            println!("    {} {}", "→".dimmed(), suggestions);
        } else {
            println!("  {} {}", position, misspelling.word);
            println!("    → {}", suggestions);
        }
    }
}

pub fn print_check_summary(total_errors: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        if colored {
            println!(
                "{} {} spelling {} found",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word
            );
        } else {
            println!("✗ {} spelling {} found", total_errors, error_word);
        }
    }
}

pub fn print_search_results(
    query: &str,
    matches: &[&DictionaryEntry],
    colored: bool,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&JsonSearch { query, matches });
    }

    if matches.is_empty() {
        if colored {
            println!("{}", "No matches found".yellow());
        } else {
            println!("No matches found");
        }
        return Ok(());
    }

    if colored {
        println!("{}", "Matches found:".bold());
    } else {
        println!("Matches found:");
    }
    for entry in matches {
        let frequency = format_frequency(entry.frequency);
        if colored {
            println!("  • {} ({})", entry.word.cyan(), frequency.dimmed());
        } else {
            println!("  • {} ({})", entry.word, frequency);
        }
    }
    Ok(())
}

pub fn print_dictionary_info(
    dictionary: &Dictionary,
    source: &str,
    colored: bool,
    format: OutputFormat,
) -> Result<()> {
    let most_common = dictionary.most_common();

    if format == OutputFormat::Json {
        return print_json(&JsonInfo {
            source,
            words: dictionary.len(),
            most_common,
        });
    }

    if colored {
        println!("{}", "Dictionary".bold());
    } else {
        println!("Dictionary");
    }
    println!("  Source: {}", source);
    println!("  Words: {}", format_frequency(dictionary.len() as u64));
    println!(
        "  Most common: {} ({})",
        most_common.word,
        format_frequency(most_common.frequency)
    );
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// `15000` -> `"15,000"`
fn format_frequency(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
