//! Language selection for incoming snippets.

mod language;

pub use language::{
    detect_language, resolve_language, LanguageChoice, LanguageScores, ResolvedLanguage,
};
