//! Built-in sample snippets, one per language.

use crate::analysis::Language;

/// A sample snippet shipped with the binary.
pub struct Sample {
    pub name: &'static str,
    pub language: Language,
    /// Function to pass for recursion detection.
    pub function: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

/// All available samples.
pub static SAMPLES: &[Sample] = &[
    Sample {
        name: "two-sum-javascript",
        language: Language::JavaScript,
        function: "twoSum",
        description: "Two Sum with a Map, single pass",
        content: include_str!("samples/two_sum.js"),
    },
    Sample {
        name: "two-sum-python",
        language: Language::Python,
        function: "twoSum",
        description: "Two Sum with a dict, single pass",
        content: include_str!("samples/two_sum.py"),
    },
    Sample {
        name: "two-sum-java",
        language: Language::Java,
        function: "twoSum",
        description: "Two Sum with a HashMap, single pass",
        content: include_str!("samples/two_sum.java"),
    },
];

/// The sample for a language.
pub fn for_language(language: Language) -> &'static Sample {
    SAMPLES
        .iter()
        .find(|s| s.language == language)
        .unwrap_or(&SAMPLES[0])
}
