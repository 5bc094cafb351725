//! Error taxonomy for a single analysis call.

use std::fmt;

use thiserror::Error;

/// Which snippet bound was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeLimit {
    /// Source text is longer than the character bound.
    Characters { actual: usize, max: usize },
    /// Source text has more lines than the line bound.
    Lines { actual: usize, max: usize },
}

impl fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeLimit::Characters { actual, max } => {
                write!(f, "max {} characters, got {}", max, actual)
            }
            SizeLimit::Lines { actual, max } => write!(f, "max {} lines, got {}", max, actual),
        }
    }
}

/// Errors an analyzer can return instead of a result.
///
/// Every variant is terminal for the call: analyzers never hand back a
/// partially populated result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The AST-backed analyzer could not parse the snippet.
    #[error("invalid JavaScript: {message}")]
    Parse { message: String },
    #[error("no code provided")]
    EmptyInput,
    #[error("snippet too large ({0})")]
    SnippetTooLarge(SizeLimit),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl AnalysisError {
    /// Short machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Parse { .. } => "parse_error",
            AnalysisError::EmptyInput => "empty_input",
            AnalysisError::SnippetTooLarge(_) => "snippet_too_large",
            AnalysisError::UnsupportedLanguage(_) => "unsupported_language",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_limit_messages_are_distinct() {
        let chars = AnalysisError::SnippetTooLarge(SizeLimit::Characters {
            actual: 30_001,
            max: 30_000,
        });
        let lines = AnalysisError::SnippetTooLarge(SizeLimit::Lines {
            actual: 1_501,
            max: 1_500,
        });

        assert_eq!(
            chars.to_string(),
            "snippet too large (max 30000 characters, got 30001)"
        );
        assert_eq!(lines.to_string(), "snippet too large (max 1500 lines, got 1501)");
        assert_eq!(chars.kind(), lines.kind());
    }

    #[test]
    fn test_parse_error_keeps_parser_message() {
        let err = AnalysisError::Parse {
            message: "unexpected token (1:5)".to_string(),
        };
        assert_eq!(err.to_string(), "invalid JavaScript: unexpected token (1:5)");
        assert_eq!(err.kind(), "parse_error");
    }
}
