//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextumArgs};
use crate::error::Result;

/// Result structure for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub chars_original: usize,
    pub chars_transformed: usize,
    pub chars_without_special: usize,
    pub chars_without_digits: usize,
    pub chars_without_spaces: usize,
    pub words: usize,
    pub sentences: usize,
}

/// Result structure for the `sentences` and `words` commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentListResult {
    pub count: usize,
    pub segments: Vec<String>,
}

/// Result structure for the `emails` and `urls` commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchListResult {
    pub count: usize,
    pub matches: Vec<String>,
}

/// Result structure for the `context` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContextResult {
    pub target: String,
    pub count: usize,
    pub contexts: Vec<String>,
}

/// Result structure for the `occurrences` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct OccurrenceResult {
    pub target: String,
    pub count: usize,
    pub positions: Vec<usize>,
}

/// Result structure for the `transform` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformResult {
    pub text: String,
}

/// Human-readable rendering of a command result.
pub trait HumanReport {
    /// Render this result as human-readable text.
    fn human(&self) -> String;
}

impl HumanReport for StatsResult {
    fn human(&self) -> String {
        format!(
            "Characters:            {}\n\
             After all transforms:  {}\n\
             Without special chars: {}\n\
             Without digits:        {}\n\
             Without spaces:        {}\n\
             Words:                 {}\n\
             Sentences:             {}",
            self.chars_original,
            self.chars_transformed,
            self.chars_without_special,
            self.chars_without_digits,
            self.chars_without_spaces,
            self.words,
            self.sentences
        )
    }
}

impl HumanReport for SegmentListResult {
    fn human(&self) -> String {
        let mut out = format!("{} segment(s)", self.count);
        for segment in &self.segments {
            out.push('\n');
            out.push_str(segment);
        }
        out
    }
}

impl HumanReport for MatchListResult {
    fn human(&self) -> String {
        let mut out = format!("{} match(es)", self.count);
        for m in &self.matches {
            out.push('\n');
            out.push_str(m);
        }
        out
    }
}

impl HumanReport for ContextResult {
    fn human(&self) -> String {
        let mut out = format!("{} context(s) for {:?}", self.count, self.target);
        for context in &self.contexts {
            out.push('\n');
            out.push_str(context.trim());
        }
        out
    }
}

impl HumanReport for OccurrenceResult {
    fn human(&self) -> String {
        let positions: Vec<String> = self.positions.iter().map(|p| p.to_string()).collect();
        format!(
            "{} occurrence(s) of {:?} at [{}]",
            self.count,
            self.target,
            positions.join(", ")
        )
    }
}

impl HumanReport for TransformResult {
    fn human(&self) -> String {
        self.text.clone()
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanReport>(
    message: &str,
    result: &T,
    args: &TextumArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReport>(message: &str, result: &T, args: &TextumArgs) -> Result<()> {
    if args.verbosity() > 1 && !message.is_empty() {
        println!("{message}");
        println!();
    }
    println!("{}", result.human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextumArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_human_report() {
        let result = OccurrenceResult {
            target: "aXa".to_string(),
            count: 2,
            positions: vec![0, 2],
        };
        assert_eq!(result.human(), "2 occurrence(s) of \"aXa\" at [0, 2]");
    }

    #[test]
    fn test_match_list_human_report() {
        let result = MatchListResult {
            count: 1,
            matches: vec!["a@b.com".to_string()],
        };
        assert_eq!(result.human(), "1 match(es)\na@b.com");
    }

    #[test]
    fn test_stats_result_serializes() {
        let result = StatsResult {
            chars_original: 12,
            chars_transformed: 6,
            chars_without_special: 10,
            chars_without_digits: 10,
            chars_without_spaces: 10,
            words: 2,
            sentences: 1,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"chars_original\":12"));
    }
}
