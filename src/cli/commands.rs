//! Command implementations for the Textum CLI.

use std::fs;
use std::io::Read;

use crate::analysis::analyzer::TextAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: TextumArgs) -> Result<()> {
    match &args.command {
        Command::Stats(input) => {
            let result = stats(&load_input(input)?);
            output_result("Text statistics", &result, &args)
        }
        Command::Sentences(input) => {
            let result = sentences(&load_input(input)?);
            output_result("Sentences", &result, &args)
        }
        Command::Words(input) => {
            let result = words(&load_input(input)?);
            output_result("Words", &result, &args)
        }
        Command::Emails(input) => {
            let result = emails(&load_input(input)?);
            output_result("Email addresses", &result, &args)
        }
        Command::Urls(input) => {
            let result = urls(&load_input(input)?);
            output_result("URLs", &result, &args)
        }
        Command::Context(context_args) => {
            let result = context(&load_input(&context_args.input)?, &context_args.target)?;
            output_result("Context", &result, &args)
        }
        Command::Occurrences(occ_args) => {
            let result = occurrences(&load_input(&occ_args.input)?, &occ_args.target)?;
            output_result("Occurrences", &result, &args)
        }
        Command::Transform(transform_args) => {
            let result = transform(&load_input(&transform_args.input)?, transform_args);
            output_result("Transformed text", &result, &args)
        }
    }
}

/// Read the input text from a file, an inline string, or stdin.
fn load_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return Ok(fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Compute character, word, and sentence statistics.
fn stats(text: &str) -> StatsResult {
    let analyzer = TextAnalyzer::new(text);
    let (chars_transformed, chars_original) = analyzer.count_chars();
    let (chars_without_special, chars_without_digits, chars_without_spaces) =
        analyzer.aux_count_chars();
    StatsResult {
        chars_original,
        chars_transformed,
        chars_without_special,
        chars_without_digits,
        chars_without_spaces,
        words: analyzer.count_words(),
        sentences: analyzer.count_sentences(),
    }
}

/// Split the input into sentences.
fn sentences(text: &str) -> SegmentListResult {
    let segments = TextAnalyzer::new(text).split_sentences();
    SegmentListResult {
        count: segments.len(),
        segments,
    }
}

/// Split the input into words.
fn words(text: &str) -> SegmentListResult {
    let segments = TextAnalyzer::new(text).split_words();
    SegmentListResult {
        count: segments.len(),
        segments,
    }
}

/// Extract email addresses, sorted for stable output.
fn emails(text: &str) -> MatchListResult {
    let mut matches: Vec<String> = TextAnalyzer::new(text).extract_emails().into_iter().collect();
    matches.sort();
    MatchListResult {
        count: matches.len(),
        matches,
    }
}

/// Extract URLs, sorted for stable output.
fn urls(text: &str) -> MatchListResult {
    let mut matches: Vec<String> = TextAnalyzer::new(text).extract_urls().into_iter().collect();
    matches.sort();
    MatchListResult {
        count: matches.len(),
        matches,
    }
}

/// Extract sentence-level context around a target substring.
fn context(text: &str, target: &str) -> Result<ContextResult> {
    let contexts = TextAnalyzer::new(text).extract_context(target)?;
    Ok(ContextResult {
        target: target.to_string(),
        count: contexts.len(),
        contexts,
    })
}

/// Find all occurrences of a target substring.
fn occurrences(text: &str, target: &str) -> Result<OccurrenceResult> {
    let (count, positions) = TextAnalyzer::new(text).sentence_index_range(target)?;
    Ok(OccurrenceResult {
        target: target.to_string(),
        count,
        positions,
    })
}

/// Apply the cleanup transforms, honoring the `--keep-*` flags.
fn transform(text: &str, args: &TransformArgs) -> TransformResult {
    let analyzer = TextAnalyzer::new(text);
    if !args.keep_special && !args.keep_digits && !args.keep_spaces {
        return TransformResult {
            text: analyzer.all_transforms(),
        };
    }

    // Apply the requested subset in the same fixed order
    let mut out = text.to_string();
    if !args.keep_special {
        out = TextAnalyzer::new(out).clean_text();
    }
    if !args.keep_digits {
        out = TextAnalyzer::new(out).remove_numbers();
    }
    if !args.keep_spaces {
        out = TextAnalyzer::new(out).remove_spaces();
    }
    TransformResult { text: out }
}
