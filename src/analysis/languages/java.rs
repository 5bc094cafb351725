//! Java analyzer driven by brace depth.
//!
//! Not a Java parser. Method headers, loops and containers are recognized by
//! line patterns that fit typical single-class solutions.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::{AnalysisError, BraceScopes, Language, Signals, StructuralAnalyzer};

lazy_static! {
    /// `[modifier|type] type name(` method headers.
    static ref METHOD_PATTERN: Regex = Regex::new(
        r"\b(public|private|protected|static|\w+)\s+([\w<>\[\]]+)\s+([A-Za-z_]\w*)\s*\("
    ).unwrap();

    static ref LOOP_PATTERN: Regex = Regex::new(r"\b(?:for|while)\s*\(").unwrap();

    static ref DO_PATTERN: Regex = Regex::new(r"\bdo\s*\{").unwrap();

    /// Closing `} while (...);` of a do-while, already counted at `do {`,
    /// whether on its own line or after a one-line body.
    static ref DO_WHILE_TAIL: Regex = Regex::new(r"\}\s*while\s*\(.*\)\s*;").unwrap();

    static ref SORT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"Arrays\.sort\s*\(").unwrap(),
        Regex::new(r"Collections\.sort\s*\(").unwrap(),
        Regex::new(r"\.sort\s*\(").unwrap(),
        Regex::new(r"\.sorted\s*\(").unwrap(),
    ];

    static ref HASH_PATTERN: Regex = Regex::new(
        r"\bnew\s+(?:HashMap|HashSet|Hashtable|LinkedHashMap|LinkedHashSet|TreeMap|TreeSet|ConcurrentHashMap)\s*[<(]"
    ).unwrap();
}

/// Words that look like a modifier or type to the header pattern but start a
/// statement instead.
const STATEMENT_WORDS: &[&str] = &["new", "return", "throw", "else", "yield"];

/// Name declared by a method header on this line, if any.
fn method_name(line: &str) -> Option<&str> {
    let caps = METHOD_PATTERN.captures(line)?;
    let lead = caps.get(1)?.as_str();
    let ty = caps.get(2)?.as_str();
    if STATEMENT_WORDS.contains(&lead) || STATEMENT_WORDS.contains(&ty) {
        return None;
    }
    caps.get(3).map(|m| m.as_str())
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("/*") || line.starts_with('*')
}

pub struct JavaAnalyzer;

impl JavaAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralAnalyzer for JavaAnalyzer {
    fn language(&self) -> Language {
        Language::Java
    }

    fn collect_signals(
        &self,
        _source: &str,
        lines: &[&str],
        function_name: &str,
    ) -> Result<Signals, AnalysisError> {
        let mut signals = Signals::new();
        let mut scopes = BraceScopes::new();
        let call_marker = format!("{}(", function_name);

        for raw_line in lines {
            let line = raw_line.trim();
            if line.is_empty() || is_comment(line) {
                continue;
            }

            scopes.begin_line(line);

            if let Some(name) = method_name(line) {
                scopes.enter_function(name);
            }

            if LOOP_PATTERN.is_match(line) && !DO_WHILE_TAIL.is_match(line) {
                let depth = scopes.enter_loop();
                signals.record_loop(depth);
            }

            if DO_PATTERN.is_match(line) {
                let depth = scopes.enter_loop();
                signals.record_loop(depth);
            }

            if SORT_PATTERNS.iter().any(|p| p.is_match(line)) {
                signals.record_sort();
            }

            if !signals.hash_usage && HASH_PATTERN.is_match(line) {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(source: &str, name: &str) -> Signals {
        JavaAnalyzer::new().analyze(source, name).unwrap().signals
    }

    #[test]
    fn test_method_name() {
        assert_eq!(method_name("public int[] twoSum(int[] nums, int target) {"), Some("twoSum"));
        assert_eq!(method_name("private static long fib(int n) {"), Some("fib"));
        assert_eq!(method_name("public List<Integer> collect(Node root) {"), Some("collect"));
        assert_eq!(
            method_name("void f(int n) {"),
            None,
            "needs a modifier or type before the return type"
        );
        assert_eq!(method_name("throw new IllegalStateException(\"x\");"), None);
        assert_eq!(method_name("return helper(x);"), None);
        assert_eq!(method_name("int x = compute(y);"), None);
    }

    #[test]
    fn test_two_sum() {
        let source = r#"
public int[] twoSum(int[] nums, int target) {
    HashMap<Integer, Integer> seen = new HashMap<>();
    for (int i = 0; i < nums.length; i++) {
        int complement = target - nums[i];
        if (seen.containsKey(complement)) {
            return new int[] { seen.get(complement), i };
        }
        seen.put(nums[i], i);
    }
    return new int[] {};
}
"#;
        let result = JavaAnalyzer::new().analyze(source, "twoSum").unwrap();
        assert_eq!(result.signals.loop_count, 1);
        assert_eq!(result.signals.max_nesting, 1);
        assert!(result.signals.hash_usage);
        assert_eq!(result.signals.recursion_calls, 0);
        assert_eq!(result.inferred_time_complexity.to_string(), "O(n)");
    }

    #[test]
    fn test_nested_and_sibling_loops() {
        let source = r#"
void f(int n) {
    for (int i = 0; i < n; i++) {
        for (int j = 0; j < n; j++) {
            work(i, j);
        }
    }
    while (n > 0) {
        n--;
    }
}
"#;
        let result = JavaAnalyzer::new().analyze(source, "f").unwrap();
        assert_eq!(result.signals.loop_count, 3);
        assert_eq!(result.signals.max_nesting, 2);
        assert_eq!(result.inferred_time_complexity.to_string(), "O(n^2)");
    }

    #[test]
    fn test_do_while_counts_once() {
        let source = r#"
void drain(Queue<Integer> q) {
    do {
        q.poll();
    } while (!q.isEmpty());
}
"#;
        let signals = analyze(source, "");
        assert_eq!(signals.loop_count, 1);
        assert_eq!(signals.max_nesting, 1);

        let one_line = "void drain(Queue<Integer> q) {\n    do { q.poll(); } while (!q.isEmpty());\n}\n";
        let signals = analyze(one_line, "");
        assert_eq!(signals.loop_count, 1);
        assert_eq!(signals.max_nesting, 1);
        assert_eq!(
            JavaAnalyzer::new()
                .analyze(one_line, "")
                .unwrap()
                .inferred_time_complexity
                .to_string(),
            "O(n)"
        );
    }

    #[test]
    fn test_recursion() {
        let source = r#"
class Solution {
    public int fib(int n) {
        if (n < 2) {
            return n;
        }
        return fib(n - 1) + fib(n - 2);
    }

    public int run() {
        return fib(10);
    }
}
"#;
        let result = JavaAnalyzer::new().analyze(source, "fib").unwrap();
        assert_eq!(result.signals.recursion_calls, 1);
        assert_eq!(
            result.inferred_time_complexity.to_string(),
            "Recursive (depends on recurrence)"
        );
    }

    #[test]
    fn test_empty_name_disables_recursion() {
        let source = "public static int fib(int n) {\n    return fib(n - 1) + fib(n - 2);\n}\n";
        assert_eq!(analyze(source, "").recursion_calls, 0);
        assert_eq!(analyze(source, "   ").recursion_calls, 0);
        assert_eq!(analyze(source, "fib").recursion_calls, 1);
    }

    #[test]
    fn test_sort_inside_loop() {
        let source = r#"
public void sortRows(int[][] grid) {
    for (int[] row : grid) {
        Arrays.sort(row);
    }
}
"#;
        let result = JavaAnalyzer::new().analyze(source, "").unwrap();
        assert_eq!(result.signals.sort_calls, 1);
        assert_eq!(result.inferred_time_complexity.to_string(), "O(n log n)");
    }

    #[test]
    fn test_comments_are_skipped() {
        let source = r#"
// for (int i = 0; i < n; i++) {
/* while (true) {
 * new HashMap<>()
 */
int x = 1;
"#;
        let result = JavaAnalyzer::new().analyze(source, "").unwrap();
        assert_eq!(result.signals, Signals::new());
        assert_eq!(result.inferred_time_complexity.to_string(), "O(1)");
    }

    #[test]
    fn test_decorative_braces_do_not_fail() {
        let source = "}}}\nfor (;;) {\n{{\n";
        let signals = analyze(source, "");
        assert_eq!(signals.loop_count, 1);
    }
}
