//! Timecheck - heuristic time complexity estimation for code snippets.
//!
//! Timecheck reads a JavaScript, Python or Java snippet and estimates its
//! time complexity from structure alone: loops, loop nesting, sort calls,
//! self-recursion and hash container usage. Nothing is executed.
//!
//! # Architecture
//!
//! - `analysis`: signal extraction per language and the Big-O classifier
//! - `detect`: language auto-detection for unlabeled snippets
//! - `orchestrator`: input normalisation and analyzer dispatch
//! - `config`: optional YAML configuration
//! - `report`: output formatting (pretty, JSON)
//! - `store`: last-result persistence
//! - `samples`: built-in sample snippets
//!
//! # Adding a New Language
//!
//! See `src/analysis/languages/` for examples. Implement the
//! `StructuralAnalyzer` trait and register it in `languages/mod.rs`.
//!
//! ```
//! use timecheck::analysis::{analyze, Language};
//!
//! let source = "def f(n):\n    for i in range(n):\n        for j in range(n):\n            pass\n";
//! let result = analyze(Language::Python, source, "f").unwrap();
//! assert_eq!(result.inferred_time_complexity.to_string(), "O(n^2)");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detect;
pub mod orchestrator;
pub mod report;
pub mod samples;
pub mod store;

pub use analysis::{
    analyze, register_analyzers, AnalysisError, ComplexityLabel, ComplexityResult, Language,
    Signals, StructuralAnalyzer,
};
pub use config::Config;
pub use detect::{detect_language, LanguageChoice};
pub use orchestrator::{run, AnalysisRequest};
pub use report::Report;
pub use store::LastResultStore;

/// Initialize all subsystems.
///
/// Call this once at startup.
pub fn init() {
    register_analyzers();
}
