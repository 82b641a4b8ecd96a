//! Source line synchronization
//!
//! Maps the phase of the current step to the line of the selected language's
//! source listing that implements it. The mapping is data, not code: the
//! [`table::SYNC_TABLE`] lists, for every `(phase, language)` pair, the idioms
//! that identify such a line. Adding a language or an algorithm is a matter of
//! adding rows or idioms there.
//!
//! # Matching
//!
//! For a `(phase, language)` pair the idioms are tried in order. Each idiom
//! scans the listing top to bottom and the first matching line wins. When no
//! idiom matches, [`line_for`] returns `None` and the caller shows no
//! highlight.

pub mod table;

use crate::trace::Phase;
use std::fmt;

/// Rendering language of a source listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    Java,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::JavaScript,
        Language::Java,
        Language::Cpp,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_ascii_lowercase();
        match id.as_str() {
            "py" => Some(Language::Python),
            "js" => Some(Language::JavaScript),
            "c++" => Some(Language::Cpp),
            _ => Self::ALL.into_iter().find(|lang| lang.id() == id),
        }
    }

    /// Cycle to the next language
    pub fn next(self) -> Self {
        match self {
            Language::Python => Language::JavaScript,
            Language::JavaScript => Language::Java,
            Language::Java => Language::Cpp,
            Language::Cpp => Language::Python,
        }
    }

    /// Line comment marker, used by the source pane
    pub fn comment_prefix(self) -> &'static str {
        match self {
            Language::Python => "#",
            Language::JavaScript | Language::Java | Language::Cpp => "//",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A textual pattern identifying a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    /// Line contains the text anywhere
    Contains(&'static str),
    /// Line starts with the text, ignoring indentation
    Prefix(&'static str),
}

impl Idiom {
    pub fn matches(self, line: &str) -> bool {
        match self {
            Idiom::Contains(text) => line.contains(text),
            Idiom::Prefix(text) => line.trim_start().starts_with(text),
        }
    }
}

/// Idioms for one `(phase, language)` pair, in priority order
#[derive(Debug, Clone, Copy)]
pub struct SyncRule {
    pub phase: Phase,
    pub language: Language,
    pub idioms: &'static [Idiom],
}

/// Idioms registered for `(phase, language)`; empty when there is no rule
pub fn idioms_for(phase: Phase, language: Language) -> &'static [Idiom] {
    table::SYNC_TABLE
        .iter()
        .find(|rule| rule.phase == phase && rule.language == language)
        .map_or(&[], |rule| rule.idioms)
}

/// 1-based line of `source` implementing `phase`, or None for no highlight
pub fn line_for(phase: Phase, language: Language, source: &str) -> Option<usize> {
    idioms_for(phase, language).iter().find_map(|idiom| {
        source
            .lines()
            .position(|line| idiom.matches(line))
            .map(|idx| idx + 1)
    })
}
