//! Core trait for structural analyzers.

use super::{check_snippet, AnalysisError, ComplexityResult, Language, Limits, Signals};

/// A language-specific structural analyzer.
///
/// Each variant (AST-backed, indentation-scoped, brace-scoped) measures the
/// same [`Signals`] from source text. Callers depend only on this trait; the
/// classifier runs on whatever signals come back.
///
/// Implementations hold no state across calls: analyzing the same input
/// twice yields identical results.
pub trait StructuralAnalyzer: Send + Sync {
    /// The language this analyzer handles.
    fn language(&self) -> Language;

    /// Measure signals from lines that already passed the snippet guards.
    ///
    /// `function_name` is already trimmed; empty means no recursion
    /// detection.
    fn collect_signals(
        &self,
        source: &str,
        lines: &[&str],
        function_name: &str,
    ) -> Result<Signals, AnalysisError>;

    /// Analyze a snippet under the default limits.
    fn analyze(&self, source: &str, function_name: &str) -> Result<ComplexityResult, AnalysisError> {
        self.analyze_with_limits(source, function_name, &Limits::default())
    }

    /// Analyze a snippet under caller-supplied limits.
    fn analyze_with_limits(
        &self,
        source: &str,
        function_name: &str,
        limits: &Limits,
    ) -> Result<ComplexityResult, AnalysisError> {
        let lines = check_snippet(source, limits)?;
        let signals = self.collect_signals(source, &lines, function_name.trim())?;

        tracing::debug!(
            language = %self.language(),
            loops = signals.loop_count,
            nesting = signals.max_nesting,
            sorts = signals.sort_calls,
            recursion = signals.recursion_calls,
            hash = signals.hash_usage,
            "collected signals"
        );

        Ok(ComplexityResult::from_signals(signals))
    }
}
