//! Complexity signal extraction engine.
//!
//! Each language analyzer walks a snippet's structure and fills in the same
//! [`Signals`]: loop count, loop nesting, sort calls, self-calls to a target
//! function and hash container usage. The classifier maps those signals to a
//! small closed set of time complexity labels.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────────┐     ┌─────────┐     ┌──────────────────┐
//! │ Source text │────▶│ StructuralAnalyzer │────▶│ Signals │────▶│ classify()       │
//! └─────────────┘     │ JS: tree-sitter    │     └─────────┘     │ ComplexityResult │
//!                     │ Python: indents    │                     └──────────────────┘
//!                     │ Java: braces       │
//!                     └────────────────────┘
//! ```
//!
//! The three variants use different scoping rules on purpose. The
//! JavaScript analyzer counts a self-call anywhere in the tree, while the
//! Python and Java analyzers only count it inside the named function's body.
//!
//! Analysis is a pure function of `(source, function_name)`: analyzers keep
//! no state between calls and do no I/O.

mod classify;
mod error;
mod guard;
mod languages;
mod scope;
mod signals;
mod traits;

pub use classify::{
    classify, explain, observations, space_complexity, ComplexityLabel, ComplexityResult,
    Observation, Rating, SpaceEstimate,
};
pub use error::{AnalysisError, SizeLimit};
pub use guard::{check_snippet, split_lines, Limits, MAX_CHARS, MAX_LINES};
#[cfg(feature = "tree-sitter")]
pub use languages::JavaScriptAnalyzer;
pub use languages::{
    analyze, analyze_with_limits, get_analyzer, register_analyzers, JavaAnalyzer, Language,
    PythonAnalyzer,
};
pub use scope::{BraceScopes, IndentScopes, TAB_WIDTH};
pub use signals::Signals;
pub use traits::StructuralAnalyzer;
