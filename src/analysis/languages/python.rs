//! Python analyzer driven by indentation.
//!
//! Works line by line on common interview-style solutions. It does not parse
//! Python: multi-line expressions, decorators and odd indentation only make
//! the counts less precise.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::{AnalysisError, IndentScopes, Language, Signals, StructuralAnalyzer};

lazy_static! {
    /// `def name(` headers, optionally `async`.
    static ref DEF_PATTERN: Regex =
        Regex::new(r"^(?:async\s+)?def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap();

    /// `for ...` / `while ...` headers at line start.
    static ref LOOP_PATTERN: Regex = Regex::new(r"^(?:async\s+)?(?:for|while)\s+").unwrap();

    /// `list.sort(...)` or `sorted(...)`.
    static ref SORT_PATTERN: Regex = Regex::new(r"\.sort\(|\bsorted\s*\(").unwrap();

    /// Dict/set literals, comprehensions and constructors.
    static ref HASH_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\{[^}]*:").unwrap(),
        Regex::new(r"\{\s*\}").unwrap(),
        Regex::new(r"\{.*for.*in").unwrap(),
        Regex::new(r"\bdict\s*\(").unwrap(),
        Regex::new(r"\bset\s*\(").unwrap(),
        Regex::new(r"\b(?:defaultdict|Counter|OrderedDict)\s*\(").unwrap(),
    ];
}

pub struct PythonAnalyzer;

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralAnalyzer for PythonAnalyzer {
    fn language(&self) -> Language {
        Language::Python
    }

    fn collect_signals(
        &self,
        _source: &str,
        lines: &[&str],
        function_name: &str,
    ) -> Result<Signals, AnalysisError> {
        let mut signals = Signals::new();
        let mut scopes = IndentScopes::new();
        let call_marker = format!("{}(", function_name);

        for raw_line in lines {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let indent = IndentScopes::indent_of(raw_line);
            scopes.begin_line(indent);

            if let Some(caps) = DEF_PATTERN.captures(line) {
                scopes.enter_function(&caps[1], indent);
            }

            if LOOP_PATTERN.is_match(line) {
                let depth = scopes.enter_loop(indent);
                signals.record_loop(depth);
            }

            if SORT_PATTERN.is_match(line) {
                signals.record_sort();
            }

            if !signals.hash_usage && HASH_PATTERNS.iter().any(|p| p.is_match(line)) {
                signals.record_hash();
            }

            if !function_name.is_empty()
                && scopes.in_body_of(function_name)
                && line.contains(&call_marker)
            {
                signals.record_recursion();
            }

            scopes.end_line();
        }

        Ok(signals)
    }
}
