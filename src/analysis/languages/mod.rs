//! Language-specific analyzer implementations.

#[cfg(feature = "tree-sitter")]
mod javascript;
mod java;
mod python;

#[cfg(feature = "tree-sitter")]
pub use javascript::JavaScriptAnalyzer;
pub use java::JavaAnalyzer;
pub use python::PythonAnalyzer;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

use super::{AnalysisError, ComplexityResult, Limits, StructuralAnalyzer};

/// Languages the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Java,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::JavaScript, Language::Python, Language::Java];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
        }
    }

    /// Determine the language from a file extension (without dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            other => Err(AnalysisError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Static storage for JavaScript analyzer.
#[cfg(feature = "tree-sitter")]
static JAVASCRIPT_ANALYZER: OnceCell<JavaScriptAnalyzer> = OnceCell::new();

/// Static storage for Python analyzer.
static PYTHON_ANALYZER: OnceCell<PythonAnalyzer> = OnceCell::new();

/// Static storage for Java analyzer.
static JAVA_ANALYZER: OnceCell<JavaAnalyzer> = OnceCell::new();

/// Whether analyzers have been registered.
static REGISTERED: AtomicBool = AtomicBool::new(false);

/// Register all available language analyzers.
///
/// This is idempotent - calling it multiple times is safe.
pub fn register_analyzers() {
    if REGISTERED.swap(true, Ordering::SeqCst) {
        return; // Already registered
    }

    #[cfg(feature = "tree-sitter")]
    JAVASCRIPT_ANALYZER.get_or_init(JavaScriptAnalyzer::new);
    PYTHON_ANALYZER.get_or_init(PythonAnalyzer::new);
    JAVA_ANALYZER.get_or_init(JavaAnalyzer::new);
}

/// Get the analyzer for a language.
///
/// Returns None when the language is compiled out (JavaScript without the
/// `tree-sitter` feature).
pub fn get_analyzer(language: Language) -> Option<&'static dyn StructuralAnalyzer> {
    register_analyzers();

    let analyzer: &'static dyn StructuralAnalyzer = match language {
        #[cfg(feature = "tree-sitter")]
        Language::JavaScript => JAVASCRIPT_ANALYZER.get_or_init(JavaScriptAnalyzer::new),
        #[cfg(not(feature = "tree-sitter"))]
        Language::JavaScript => return None,
        Language::Python => PYTHON_ANALYZER.get_or_init(PythonAnalyzer::new),
        Language::Java => JAVA_ANALYZER.get_or_init(JavaAnalyzer::new),
    };
    Some(analyzer)
}

/// Analyze a snippet in the given language under the given limits.
pub fn analyze_with_limits(
    language: Language,
    source: &str,
    function_name: &str,
    limits: &Limits,
) -> Result<ComplexityResult, AnalysisError> {
    let analyzer = get_analyzer(language)
        .ok_or_else(|| AnalysisError::UnsupportedLanguage(language.to_string()))?;
    analyzer.analyze_with_limits(source, function_name, limits)
}

/// Analyze a snippet in the given language under the default limits.
pub fn analyze(
    language: Language,
    source: &str,
    function_name: &str,
) -> Result<ComplexityResult, AnalysisError> {
    analyze_with_limits(language, source, function_name, &Limits::default())
}
