use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use medspell::cli::output::{self, OutputFormat};
use medspell::config::Overrides;
use medspell::{dict, Config, SpellChecker};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "medspell")]
#[command(version, about = "A fuzzy spell checker with frequency-ranked suggestions", long_about = None)]
struct Cli {
    /// Word list to check against (one `word frequency` pair per line)
    #[arg(short, long, global = true, env = "MEDSPELL_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Largest edit distance for suggestions
    #[arg(long, global = true)]
    max_distance: Option<usize>,

    /// Number of suggestions per misspelling
    #[arg(short = 'n', long, global = true)]
    suggestions: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check text for misspellings (reads stdin when no text is given)
    Check {
        /// Text to check
        #[arg(value_name = "TEXT")]
        text: Vec<String>,

        /// Check the contents of a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Exit with code 0 even if errors are found
        #[arg(long)]
        no_fail: bool,
    },
    /// Search the dictionary for words containing a substring
    Search {
        query: String,

        /// Maximum number of matches
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DictCommands {
    /// Show dictionary info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("MEDSPELL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "medspell", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let limit = match &command {
        Commands::Search { limit, .. } => *limit,
        _ => None,
    };
    let config = Config::load(Overrides {
        dictionary: cli.dictionary,
        max_distance: cli.max_distance,
        max_suggestions: cli.suggestions,
        search_limit: limit,
    })?;

    let source = config
        .dictionary
        .as_ref()
        .map_or_else(|| "built-in sample".to_string(), |p| p.display().to_string());
    let dictionary = dict::open(config.dictionary.as_deref())
        .with_context(|| format!("Failed to load dictionary: {}", source))?;
    let checker = SpellChecker::new(Arc::new(dictionary), config.check_options());
    let colored = !cli.no_color;

    match command {
        Commands::Check {
            text,
            file,
            no_fail,
        } => {
            let text = read_input(text, file)?;
            if text.len() > config.max_text_bytes {
                anyhow::bail!(
                    "Input is {} bytes, larger than the {} byte limit",
                    text.len(),
                    config.max_text_bytes
                );
            }

            let report = checker.check(&text);
            output::print_report(&report, colored, cli.format)?;
            if cli.format == OutputFormat::Text {
                output::print_check_summary(report.len(), colored);
            }

            // Exit with appropriate code
            if !report.is_empty() && !no_fail {
                std::process::exit(1);
            }
        }
        Commands::Search { query, .. } => {
            let matches = checker.search(&query, config.search_limit);
            output::print_search_results(&query, &matches, colored, cli.format)?;
        }
        Commands::Dict {
            action: DictCommands::Info,
        } => {
            output::print_dictionary_info(checker.dictionary(), &source, colored, cli.format)?;
        }
    }

    Ok(())
}

fn read_input(text: Vec<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()));
    }
    if !text.is_empty() {
        return Ok(text.join(" "));
    }
    io::read_to_string(io::stdin()).context("Failed to read stdin")
}
