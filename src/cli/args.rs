//! Command line argument parsing for the Textum CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Textum - a small text analysis tool
#[derive(Parser, Debug, Clone)]
#[command(name = "textum")]
#[command(about = "Clean, segment, count, and extract patterns from text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextumArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextumArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show character, word, and sentence counts
    Stats(InputArgs),

    /// Split the text into sentences
    Sentences(InputArgs),

    /// Split the text into words
    Words(InputArgs),

    /// Extract email addresses
    Emails(InputArgs),

    /// Extract URLs
    Urls(InputArgs),

    /// Show sentence-level context around a target substring
    Context(ContextArgs),

    /// Find occurrences of a target substring (overlaps included)
    Occurrences(OccurrencesArgs),

    /// Apply the cleanup transforms and print the result
    Transform(TransformArgs),
}

/// Where the input text comes from: a file, an inline string, or stdin.
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Input file (reads stdin when neither FILE nor --text is given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Analyze this string instead of reading a file or stdin
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,
}

/// Arguments for the `context` command
#[derive(Parser, Debug, Clone)]
pub struct ContextArgs {
    /// Substring to search for
    #[arg(value_name = "TARGET")]
    pub target: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `occurrences` command
#[derive(Parser, Debug, Clone)]
pub struct OccurrencesArgs {
    /// Substring to search for
    #[arg(value_name = "TARGET")]
    pub target: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `transform` command
#[derive(Parser, Debug, Clone)]
pub struct TransformArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep special characters
    #[arg(long)]
    pub keep_special: bool,

    /// Keep digits
    #[arg(long)]
    pub keep_digits: bool,

    /// Keep spaces
    #[arg(long)]
    pub keep_spaces: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stats_with_text() {
        let args = TextumArgs::parse_from(["textum", "stats", "--text", "hello"]);
        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Stats(input) => assert_eq!(input.text.as_deref(), Some("hello")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = TextumArgs::parse_from(["textum", "-v", "-v", "--quiet", "words"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_parse_occurrences_target() {
        let args = TextumArgs::parse_from(["textum", "occurrences", "aXa", "--text", "aXaXa"]);
        match args.command {
            Command::Occurrences(occ) => {
                assert_eq!(occ.target, "aXa");
                assert_eq!(occ.input.text.as_deref(), Some("aXaXa"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_format() {
        let args = TextumArgs::parse_from(["textum", "-f", "json", "--pretty", "emails"]);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
