//! Size and emptiness guards run before any scanning.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, SizeLimit};

/// Default character bound for a snippet.
pub const MAX_CHARS: usize = 30_000;

/// Default line bound for a snippet.
pub const MAX_LINES: usize = 1_500;

/// Snippet bounds enforced by every analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

fn default_max_chars() -> usize {
    MAX_CHARS
}

fn default_max_lines() -> usize {
    MAX_LINES
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
            max_lines: MAX_LINES,
        }
    }
}

/// Split source into raw lines on `\n` or `\r\n`.
///
/// A trailing newline yields a final empty line, so the count matches what an
/// editor shows for the pasted text.
pub fn split_lines(source: &str) -> Vec<&str> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Check a snippet against the limits and return its lines.
pub fn check_snippet<'a>(source: &'a str, limits: &Limits) -> Result<Vec<&'a str>, AnalysisError> {
    if source.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let chars = source.chars().count();
    if chars > limits.max_chars {
        return Err(AnalysisError::SnippetTooLarge(SizeLimit::Characters {
            actual: chars,
            max: limits.max_chars,
        }));
    }

    let lines = split_lines(source);
    if lines.len() > limits.max_lines {
        return Err(AnalysisError::SnippetTooLarge(SizeLimit::Lines {
            actual: lines.len(),
            max: limits.max_lines,
        }));
    }

    Ok(lines)
}
