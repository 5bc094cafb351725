//! The signal schema shared by every structural analyzer.

use serde::{Deserialize, Serialize};

/// Structural signals measured from one snippet.
///
/// A fresh value is built per analysis call. Analyzers mutate it through the
/// `record_*` helpers while scanning and hand it back by value once done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signals {
    /// Total loop constructs seen, nested or not.
    pub loop_count: usize,
    /// Deepest simultaneous loop nesting seen anywhere in the snippet.
    pub max_nesting: usize,
    /// Recognized sort invocations.
    pub sort_calls: usize,
    /// Self-calls to the target function.
    pub recursion_calls: usize,
    /// Whether a hash/set/map-like container is built anywhere.
    pub hash_usage: bool,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a loop entered at the given nesting depth (1 = outermost).
    pub(crate) fn record_loop(&mut self, depth: usize) {
        self.loop_count += 1;
        self.max_nesting = self.max_nesting.max(depth);
    }

    pub(crate) fn record_sort(&mut self) {
        self.sort_calls += 1;
    }

    pub(crate) fn record_recursion(&mut self) {
        self.recursion_calls += 1;
    }

    /// Sticky: once set, stays set for the rest of the call.
    pub(crate) fn record_hash(&mut self) {
        self.hash_usage = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_nesting_is_running_maximum() {
        let mut signals = Signals::new();
        signals.record_loop(1);
        signals.record_loop(2);
        signals.record_loop(1);

        assert_eq!(signals.loop_count, 3);
        assert_eq!(signals.max_nesting, 2);
    }

    #[test]
    fn test_camel_case_serialization() {
        let mut signals = Signals::new();
        signals.record_loop(1);
        signals.record_hash();

        let json = serde_json::to_value(&signals).unwrap();
        assert_eq!(json["loopCount"], 1);
        assert_eq!(json["maxNesting"], 1);
        assert_eq!(json["sortCalls"], 0);
        assert_eq!(json["recursionCalls"], 0);
        assert_eq!(json["hashUsage"], true);
    }
}
