//! Mapping from structural signals to a complexity label.
//!
//! Rules are evaluated in strict priority order, first match wins:
//!
//! 1. any recursion call -> `Recursive (depends on recurrence)`
//! 2. any sort call -> `O(n^k log n)` when nested, else `O(n log n)`
//! 3. nesting >= 2 -> `O(n^k)` with k = max nesting
//! 4. nesting == 1 -> `O(n)`
//! 5. otherwise -> `O(1)`
//!
//! Recursion dominates every other signal since the cost of a recurrence
//! cannot be read off iteration counts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Signals;

/// The closed set of time complexity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ComplexityLabel {
    Constant,
    Linear,
    Linearithmic,
    /// `O(n^k)` for k >= 2.
    Polynomial(usize),
    /// Sorting inside nested loops.
    PolynomialLog,
    Recursive,
}

impl ComplexityLabel {
    /// Colour bucket used by the presentation layer.
    pub fn rating(&self) -> Rating {
        match self {
            ComplexityLabel::Constant => Rating::Excellent,
            ComplexityLabel::Linear => Rating::Good,
            ComplexityLabel::Linearithmic => Rating::Moderate,
            ComplexityLabel::Polynomial(_)
            | ComplexityLabel::PolynomialLog
            | ComplexityLabel::Recursive => Rating::Poor,
        }
    }
}

impl fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityLabel::Constant => write!(f, "O(1)"),
            ComplexityLabel::Linear => write!(f, "O(n)"),
            ComplexityLabel::Linearithmic => write!(f, "O(n log n)"),
            ComplexityLabel::Polynomial(k) => write!(f, "O(n^{})", k),
            ComplexityLabel::PolynomialLog => write!(f, "O(n^k log n)"),
            ComplexityLabel::Recursive => write!(f, "Recursive (depends on recurrence)"),
        }
    }
}

impl FromStr for ComplexityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "O(1)" => Ok(ComplexityLabel::Constant),
            "O(n)" => Ok(ComplexityLabel::Linear),
            "O(n log n)" => Ok(ComplexityLabel::Linearithmic),
            "O(n^k log n)" => Ok(ComplexityLabel::PolynomialLog),
            "Recursive (depends on recurrence)" => Ok(ComplexityLabel::Recursive),
            other => other
                .strip_prefix("O(n^")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|k| k.parse::<usize>().ok())
                .filter(|k| *k >= 2)
                .map(ComplexityLabel::Polynomial)
                .ok_or_else(|| format!("unknown complexity label: {}", s)),
        }
    }
}

impl From<ComplexityLabel> for String {
    fn from(label: ComplexityLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for ComplexityLabel {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// How favourable a label is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Excellent => write!(f, "excellent"),
            Rating::Good => write!(f, "good"),
            Rating::Moderate => write!(f, "moderate"),
            Rating::Poor => write!(f, "poor"),
        }
    }
}

/// Signals plus the label inferred from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityResult {
    pub signals: Signals,
    pub inferred_time_complexity: ComplexityLabel,
}

impl ComplexityResult {
    pub fn from_signals(signals: Signals) -> Self {
        let inferred_time_complexity = classify(&signals);
        Self {
            signals,
            inferred_time_complexity,
        }
    }
}

/// Classify signals into a label.
pub fn classify(signals: &Signals) -> ComplexityLabel {
    if signals.recursion_calls > 0 {
        ComplexityLabel::Recursive
    } else if signals.sort_calls > 0 {
        if signals.max_nesting >= 2 {
            ComplexityLabel::PolynomialLog
        } else {
            ComplexityLabel::Linearithmic
        }
    } else if signals.max_nesting >= 2 {
        ComplexityLabel::Polynomial(signals.max_nesting)
    } else if signals.max_nesting == 1 {
        ComplexityLabel::Linear
    } else {
        ComplexityLabel::Constant
    }
}

/// Natural-language rationale for a label.
pub fn explain(label: ComplexityLabel, signals: &Signals) -> String {
    match label {
        ComplexityLabel::Recursive => "This solution uses recursion. The actual complexity depends \
             on the recurrence relation and the depth of the call tree."
            .to_string(),
        ComplexityLabel::Linearithmic => "This solution runs in linearithmic time because it sorts \
             the input, which is the dominant operation."
            .to_string(),
        ComplexityLabel::PolynomialLog => format!(
            "This solution sorts inside {} levels of nested iteration, so the sort cost is \
             multiplied by the nested loop cost.",
            signals.max_nesting
        ),
        ComplexityLabel::Polynomial(2) => "This solution runs in quadratic time because the outer \
             loop iterates n times, and for each iteration, the inner loop also runs n times."
            .to_string(),
        ComplexityLabel::Polynomial(k) => format!(
            "This solution has polynomial time complexity due to {} levels of nested iteration.",
            k
        ),
        ComplexityLabel::Linear if signals.hash_usage => "This solution runs in linear time \
             because it iterates through the input once and uses constant-time hash lookups."
            .to_string(),
        ComplexityLabel::Linear => "This solution runs in linear time because it makes a single \
             pass through the input."
            .to_string(),
        ComplexityLabel::Constant => "This solution runs in constant time. The operations \
             performed don't depend on the input size."
            .to_string(),
    }
}

/// A short note about one notable signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub icon: String,
    pub text: String,
}

impl Observation {
    fn new(icon: &str, text: impl Into<String>) -> Self {
        Self {
            icon: icon.to_string(),
            text: text.into(),
        }
    }
}

/// Key observations about the signals, in display order.
pub fn observations(signals: &Signals) -> Vec<Observation> {
    let mut notes = Vec::new();

    match signals.loop_count {
        0 => {}
        1 => notes.push(Observation::new("✓", "Single pass through input")),
        n => notes.push(Observation::new("↻", format!("{} loop structures detected", n))),
    }

    if signals.hash_usage {
        notes.push(Observation::new(
            "⚡",
            "Uses hash-based data structure for O(1) lookups",
        ));
    }

    if signals.max_nesting > 1 {
        notes.push(Observation::new(
            "▤",
            format!("{} levels of nested iteration", signals.max_nesting),
        ));
    }

    if signals.sort_calls > 0 {
        let plural = if signals.sort_calls > 1 { "s" } else { "" };
        notes.push(Observation::new(
            "⇅",
            format!(
                "Sorting operation detected ({} call{})",
                signals.sort_calls, plural
            ),
        ));
    }

    if signals.recursion_calls > 0 {
        notes.push(Observation::new("♻", "Recursive function calls present"));
    }

    if signals.loop_count == 0 && signals.recursion_calls == 0 {
        notes.push(Observation::new("⚡", "No loops or recursion detected"));
    }

    notes
}

/// Rough auxiliary space estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceEstimate {
    pub label: String,
    pub reason: String,
}

/// Hash containers grow with the input; everything else is assumed constant.
pub fn space_complexity(signals: &Signals) -> SpaceEstimate {
    if signals.hash_usage {
        SpaceEstimate {
            label: "O(n)".to_string(),
            reason: "Additional data structure allocation".to_string(),
        }
    } else {
        SpaceEstimate {
            label: "O(1)".to_string(),
            reason: "Uses constant extra space".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(loops: usize, nesting: usize, sorts: usize, recursion: usize) -> Signals {
        Signals {
            loop_count: loops,
            max_nesting: nesting,
            sort_calls: sorts,
            recursion_calls: recursion,
            hash_usage: false,
        }
    }

    #[test]
    fn test_recursion_dominates() {
        let s = signals(3, 3, 2, 1);
        assert_eq!(classify(&s), ComplexityLabel::Recursive);
        assert_eq!(
            classify(&s).to_string(),
            "Recursive (depends on recurrence)"
        );
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(classify(&signals(1, 1, 1, 0)).to_string(), "O(n log n)");
        assert_eq!(classify(&signals(0, 0, 1, 0)).to_string(), "O(n log n)");
        assert_eq!(classify(&signals(2, 2, 1, 0)).to_string(), "O(n^k log n)");
    }

    #[test]
    fn test_nesting_labels() {
        assert_eq!(classify(&signals(0, 0, 0, 0)).to_string(), "O(1)");
        assert_eq!(classify(&signals(2, 1, 0, 0)).to_string(), "O(n)");
        assert_eq!(classify(&signals(2, 2, 0, 0)).to_string(), "O(n^2)");
        assert_eq!(classify(&signals(4, 4, 0, 0)).to_string(), "O(n^4)");
    }

    #[test]
    fn test_label_string_round_trip() {
        for label in [
            ComplexityLabel::Constant,
            ComplexityLabel::Linear,
            ComplexityLabel::Linearithmic,
            ComplexityLabel::Polynomial(3),
            ComplexityLabel::PolynomialLog,
            ComplexityLabel::Recursive,
        ] {
            assert_eq!(label.to_string().parse::<ComplexityLabel>(), Ok(label));
        }
        assert!("O(n^1)".parse::<ComplexityLabel>().is_err());
        assert!("O(2^n)".parse::<ComplexityLabel>().is_err());
    }

    #[test]
    fn test_result_serializes_label_as_string() {
        let result = ComplexityResult::from_signals(signals(2, 2, 0, 0));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["inferredTimeComplexity"], "O(n^2)");
        assert_eq!(json["signals"]["maxNesting"], 2);

        let back: ComplexityResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_explanations() {
        let mut s = signals(1, 1, 0, 0);
        assert!(explain(ComplexityLabel::Linear, &s).contains("single pass"));
        s.hash_usage = true;
        assert!(explain(ComplexityLabel::Linear, &s).contains("hash lookups"));
        assert!(explain(ComplexityLabel::Polynomial(2), &s).contains("quadratic"));
        assert!(explain(ComplexityLabel::Polynomial(3), &s).contains("3 levels"));
    }

    #[test]
    fn test_observations() {
        let mut s = signals(2, 2, 2, 0);
        s.hash_usage = true;
        let texts: Vec<String> = observations(&s).into_iter().map(|o| o.text).collect();

        assert_eq!(
            texts,
            vec![
                "2 loop structures detected",
                "Uses hash-based data structure for O(1) lookups",
                "2 levels of nested iteration",
                "Sorting operation detected (2 calls)",
            ]
        );

        let idle: Vec<String> = observations(&signals(0, 0, 0, 0))
            .into_iter()
            .map(|o| o.text)
            .collect();
        assert_eq!(idle, vec!["No loops or recursion detected"]);
    }

    #[test]
    fn test_rating_and_space() {
        assert_eq!(ComplexityLabel::Constant.rating(), Rating::Excellent);
        assert_eq!(ComplexityLabel::Linear.rating(), Rating::Good);
        assert_eq!(ComplexityLabel::Linearithmic.rating(), Rating::Moderate);
        assert_eq!(ComplexityLabel::Polynomial(3).rating(), Rating::Poor);

        let mut s = signals(1, 1, 0, 0);
        assert_eq!(space_complexity(&s).label, "O(1)");
        s.hash_usage = true;
        assert_eq!(space_complexity(&s).label, "O(n)");
    }
}
