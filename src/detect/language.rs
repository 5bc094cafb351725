//! Heuristic language detection by per-line scoring.
//!
//! Each non-comment line adds weighted points to the languages whose
//! idioms it shows. The highest total wins; ties prefer Java, then Python.
//! Text that scores nothing is treated as JavaScript.

use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::{split_lines, AnalysisError, Language};

lazy_static! {
    static ref JAVA_METHOD: Regex = Regex::new(
        r"\b(?:public|private|protected)\s+(?:static\s+)?(?:void|int|boolean|String|double|float|long)\s+\w+\s*\("
    ).unwrap();
    static ref JAVA_COLLECTION: Regex =
        Regex::new(r"\bnew\s+(?:HashMap|HashSet|ArrayList|LinkedList)\s*[<(]").unwrap();
    static ref JAVA_TYPE_DECL: Regex =
        Regex::new(r"\b(?:class|interface|extends|implements)\s+\w+").unwrap();
    static ref JAVA_ARRAY_TYPE: Regex = Regex::new(r"\bint\[\]|\bString\[\]").unwrap();

    static ref PY_DEF: Regex = Regex::new(r"^def\s+\w+\s*\(").unwrap();
    static ref PY_KEYWORD: Regex = Regex::new(r"\b(?:self|True|False|None|elif|pass)\b").unwrap();
    static ref PY_BLOCK: Regex = Regex::new(r"\b(?:if|for|while|def|class)\b").unwrap();
    static ref PY_BUILTIN: Regex = Regex::new(r"\brange\s*\(|\benumerate\s*\(|\blen\s*\(").unwrap();

    static ref JS_DECL: Regex = Regex::new(r"\b(?:function|const|let|var)\s+\w+").unwrap();
    static ref JS_ARROW: Regex = Regex::new(r"=>\s*\{|=>\s*\w").unwrap();
    static ref JS_COLLECTION: Regex = Regex::new(r"\bnew\s+(?:Map|Set|Array)\s*[(<]").unwrap();
}

/// Accumulated detection scores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LanguageScores {
    pub java: f64,
    pub python: f64,
    pub javascript: f64,
}

impl LanguageScores {
    /// Score every line of `source`.
    pub fn of(source: &str) -> Self {
        let mut scores = Self::default();

        for raw_line in split_lines(source) {
            let line = raw_line.trim();
            if line.is_empty()
                || line.starts_with("//")
                || line.starts_with('#')
                || line.starts_with("/*")
                || line.starts_with('*')
            {
                continue;
            }
            scores.add_line(line);
        }

        scores
    }

    fn add_line(&mut self, line: &str) {
        if JAVA_METHOD.is_match(line) {
            self.java += 3.0;
        }
        if JAVA_COLLECTION.is_match(line) {
            self.java += 2.0;
        }
        if JAVA_TYPE_DECL.is_match(line) {
            self.java += 2.0;
        }
        if line.ends_with(';') && !line.contains("for") && !line.contains("while") {
            self.java += 0.5;
        }
        if JAVA_ARRAY_TYPE.is_match(line) {
            self.java += 1.0;
        }

        if PY_DEF.is_match(line) {
            self.python += 3.0;
        }
        if PY_KEYWORD.is_match(line) {
            self.python += 2.0;
        }
        if line.contains(':') && PY_BLOCK.is_match(line) {
            self.python += 1.0;
        }
        if PY_BUILTIN.is_match(line) {
            self.python += 1.0;
        }

        if JS_DECL.is_match(line) {
            self.javascript += 2.0;
        }
        if JS_ARROW.is_match(line) {
            self.javascript += 2.0;
        }
        if JS_COLLECTION.is_match(line) {
            self.javascript += 2.0;
        }
        if line.contains("===") || line.contains("!==") {
            self.javascript += 1.0;
        }
    }

    /// The winning language.
    pub fn best(&self) -> Language {
        let max = self.java.max(self.python).max(self.javascript);
        if max == 0.0 {
            Language::JavaScript
        } else if self.java == max {
            Language::Java
        } else if self.python == max {
            Language::Python
        } else {
            Language::JavaScript
        }
    }
}

/// Guess the language of a snippet from its text alone.
pub fn detect_language(source: &str) -> Language {
    if source.trim().is_empty() {
        return Language::JavaScript;
    }
    LanguageScores::of(source).best()
}

/// Language requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChoice {
    Auto,
    Fixed(Language),
}

impl FromStr for LanguageChoice {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(LanguageChoice::Auto)
        } else {
            s.parse().map(LanguageChoice::Fixed)
        }
    }
}

/// Outcome of resolving a [`LanguageChoice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLanguage {
    pub language: Language,
    /// True when the language was inferred rather than requested.
    pub detected: bool,
}

/// Resolve the language to analyze with.
///
/// `Auto` prefers a known file extension and falls back to scoring the text.
pub fn resolve_language(
    choice: LanguageChoice,
    path: Option<&Path>,
    source: &str,
) -> ResolvedLanguage {
    match choice {
        LanguageChoice::Fixed(language) => ResolvedLanguage {
            language,
            detected: false,
        },
        LanguageChoice::Auto => {
            let language = path
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .and_then(Language::from_extension)
                .unwrap_or_else(|| detect_language(source));
            ResolvedLanguage {
                language,
                detected: true,
            }
        }
    }
}
