//! Glue between user input and the analysis engine.
//!
//! Normalises the snippet, settles the language and hands the text to the
//! matching analyzer. Everything here is I/O free so the CLI and the tests
//! drive the same path.

use std::path::PathBuf;

use tracing::debug;

use crate::analysis::{self, AnalysisError, Limits};
use crate::detect::{resolve_language, LanguageChoice};
use crate::report::Report;

/// Label used for snippets read from standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// One snippet to analyze.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub source: String,
    /// File the snippet came from, used for extension-based detection.
    pub path: Option<PathBuf>,
    pub language: LanguageChoice,
    pub function_name: String,
    pub limits: Limits,
}

impl AnalysisRequest {
    /// A request with auto-detection, no target function and default limits.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: None,
            language: LanguageChoice::Auto,
            function_name: String::new(),
            limits: Limits::default(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_language(mut self, language: LanguageChoice) -> Self {
        self.language = language;
        self
    }

    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Display label for the snippet's origin.
    pub fn origin(&self) -> String {
        match self.path {
            Some(ref p) if p.as_os_str() != "-" => p.display().to_string(),
            _ => STDIN_LABEL.to_string(),
        }
    }
}

/// Analyze one snippet and build its report.
pub fn run(request: &AnalysisRequest) -> Result<Report, AnalysisError> {
    let source = request.source.trim();
    let function_name = request.function_name.trim();

    if source.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let resolved = resolve_language(request.language, request.path.as_deref(), source);
    debug!(
        "language: {} ({})",
        resolved.language,
        if resolved.detected { "detected" } else { "requested" }
    );

    let result =
        analysis::analyze_with_limits(resolved.language, source, function_name, &request.limits)?;

    Ok(Report::new(
        &request.origin(),
        resolved.language,
        resolved.detected,
        function_name,
        result,
    ))
}
