//! Declarative `(phase, language) -> idioms` table
//!
//! Idioms are shared across algorithms: each listing contains the idioms of
//! its own algorithm only, so the first hit is always the right line.

use super::{Idiom, Language, SyncRule};
use crate::trace::Phase;

use Idiom::{Contains, Prefix};

pub const SYNC_TABLE: &[SyncRule] = &[
    // ===== Python =====
    SyncRule {
        phase: Phase::Init,
        language: Language::Python,
        idioms: &[Prefix("seen = "), Prefix("min_price = ")],
    },
    SyncRule {
        phase: Phase::Scan,
        language: Language::Python,
        idioms: &[Contains(" in seen:"), Contains("< min_price")],
    },
    SyncRule {
        phase: Phase::Update,
        language: Language::Python,
        idioms: &[
            Contains("seen.add("),
            Contains("seen[num] = "),
            Contains("> max_profit"),
        ],
    },
    SyncRule {
        phase: Phase::Found,
        language: Language::Python,
        idioms: &[Contains("return True"), Contains("return [seen[")],
    },
    SyncRule {
        phase: Phase::Done,
        language: Language::Python,
        idioms: &[
            Contains("return False"),
            Contains("return []"),
            Contains("return max_profit"),
        ],
    },
    // ===== JavaScript =====
    SyncRule {
        phase: Phase::Init,
        language: Language::JavaScript,
        idioms: &[Prefix("const seen = "), Prefix("let minPrice = ")],
    },
    SyncRule {
        phase: Phase::Scan,
        language: Language::JavaScript,
        idioms: &[Contains("if (seen.has("), Contains("< minPrice")],
    },
    SyncRule {
        phase: Phase::Update,
        language: Language::JavaScript,
        idioms: &[
            Contains("seen.add("),
            Contains("seen.set("),
            Contains("> maxProfit"),
        ],
    },
    SyncRule {
        phase: Phase::Found,
        language: Language::JavaScript,
        idioms: &[Contains("return true"), Contains("return [seen.get(")],
    },
    SyncRule {
        phase: Phase::Done,
        language: Language::JavaScript,
        idioms: &[
            Contains("return false"),
            Contains("return []"),
            Contains("return maxProfit"),
        ],
    },
    // ===== Java =====
    SyncRule {
        phase: Phase::Init,
        language: Language::Java,
        idioms: &[Contains(" seen = new "), Prefix("int minPrice = ")],
    },
    SyncRule {
        phase: Phase::Scan,
        language: Language::Java,
        idioms: &[Contains("if (seen.contains"), Contains("< minPrice")],
    },
    SyncRule {
        phase: Phase::Update,
        language: Language::Java,
        idioms: &[
            Contains("seen.add("),
            Contains("seen.putIfAbsent("),
            Contains("> maxProfit"),
        ],
    },
    SyncRule {
        phase: Phase::Found,
        language: Language::Java,
        idioms: &[Contains("return true"), Contains("return new int[] {")],
    },
    SyncRule {
        phase: Phase::Done,
        language: Language::Java,
        idioms: &[
            Contains("return false"),
            Contains("return new int[0]"),
            Contains("return maxProfit"),
        ],
    },
    // ===== C++ =====
    SyncRule {
        phase: Phase::Init,
        language: Language::Cpp,
        idioms: &[
            Prefix("unordered_set<int> seen"),
            Prefix("unordered_map<int, int> seen"),
            Prefix("int minPrice = "),
        ],
    },
    SyncRule {
        phase: Phase::Scan,
        language: Language::Cpp,
        idioms: &[Contains("if (seen.count("), Contains("< minPrice")],
    },
    SyncRule {
        phase: Phase::Update,
        language: Language::Cpp,
        idioms: &[
            Contains("seen.insert("),
            Contains("seen.emplace("),
            Contains("> maxProfit"),
        ],
    },
    SyncRule {
        phase: Phase::Found,
        language: Language::Cpp,
        idioms: &[Contains("return true"), Contains("return {seen[")],
    },
    SyncRule {
        phase: Phase::Done,
        language: Language::Cpp,
        idioms: &[
            Contains("return false"),
            Contains("return {}"),
            Contains("return maxProfit"),
        ],
    },
];
