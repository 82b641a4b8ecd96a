//! Source listing catalog
//!
//! Supplies the plain-text listing shown next to a visualization, keyed by
//! algorithm and language. When a language has no listing for an algorithm the
//! catalog falls back to the [`DEFAULT_LANGUAGE`] listing and says so in the
//! returned [`SourceListing`]; a missing listing is never an error.

mod listings;

use crate::algorithms::Algorithm;
use crate::sync::{self, Language};
use crate::trace::Phase;

pub const DEFAULT_LANGUAGE: Language = Language::Python;

/// A listing together with the language it is actually written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceListing {
    pub algorithm: Algorithm,
    /// Language of `text`; differs from the requested one after a fallback
    pub language: Language,
    pub requested: Language,
    pub text: &'static str,
}

impl SourceListing {
    pub fn fell_back(&self) -> bool {
        self.language != self.requested
    }

    /// Line to highlight for `phase`, resolved against the shown language
    pub fn line_for(&self, phase: Phase) -> Option<usize> {
        sync::line_for(phase, self.language, self.text)
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Exact listing for `(algorithm, language)`, if one exists
pub fn exact(algorithm: Algorithm, language: Language) -> Option<&'static str> {
    use listings::*;

    match (algorithm, language) {
        (Algorithm::ContainsDuplicate, Language::Python) => Some(PYTHON_CONTAINS_DUPLICATE),
        (Algorithm::TwoSum, Language::Python) => Some(PYTHON_TWO_SUM),
        (Algorithm::MaxProfit, Language::Python) => Some(PYTHON_MAX_PROFIT),
        (Algorithm::ContainsDuplicate, Language::JavaScript) => Some(JS_CONTAINS_DUPLICATE),
        (Algorithm::TwoSum, Language::JavaScript) => Some(JS_TWO_SUM),
        (Algorithm::MaxProfit, Language::JavaScript) => Some(JS_MAX_PROFIT),
        (Algorithm::ContainsDuplicate, Language::Java) => Some(JAVA_CONTAINS_DUPLICATE),
        (Algorithm::TwoSum, Language::Java) => Some(JAVA_TWO_SUM),
        (Algorithm::MaxProfit, Language::Java) => Some(JAVA_MAX_PROFIT),
        (Algorithm::ContainsDuplicate, Language::Cpp) => Some(CPP_CONTAINS_DUPLICATE),
        (Algorithm::MaxProfit, Language::Cpp) => Some(CPP_MAX_PROFIT),
        (Algorithm::TwoSum, Language::Cpp) => None,
    }
}

/// Listing for `(algorithm, language)`, falling back to the default language
pub fn listing(algorithm: Algorithm, language: Language) -> SourceListing {
    match exact(algorithm, language) {
        Some(text) => SourceListing {
            algorithm,
            language,
            requested: language,
            text,
        },
        None => {
            tracing::warn!(
                algorithm = algorithm.id(),
                requested = language.id(),
                fallback = DEFAULT_LANGUAGE.id(),
                "no source listing for language, showing default"
            );
            SourceListing {
                algorithm,
                language: DEFAULT_LANGUAGE,
                requested: language,
                // Every algorithm ships a default-language listing
                text: exact(algorithm, DEFAULT_LANGUAGE).unwrap_or_default(),
            }
        }
    }
}
