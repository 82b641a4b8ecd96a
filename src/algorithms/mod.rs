//! Trace generators
//!
//! Each algorithm module exposes a pure `generate` function turning a
//! validated input into a [`Trace`]. Generators never fail: the input boundary
//! ([`crate::input`]) rejects empty or malformed input before a generator is
//! called, and every generator produces a well-formed terminal step even when
//! the algorithm's answer is "nothing found".
//!
//! - [`contains_duplicate`]: hash-set membership scan
//! - [`two_sum`]: complement lookup in a value -> index map
//! - [`max_profit`]: running-minimum / running-best scan

pub mod contains_duplicate;
pub mod max_profit;
pub mod two_sum;

use crate::trace::Trace;
use std::fmt;

/// Validated problem input handed to a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInput {
    /// Non-empty list of numbers
    pub nums: Vec<i64>,
    /// Only consulted by algorithms where [`Algorithm::uses_target`] is true
    pub target: i64,
}

impl ProblemInput {
    pub fn new(nums: Vec<i64>, target: i64) -> Self {
        debug_assert!(!nums.is_empty(), "generators require a non-empty input");
        ProblemInput { nums, target }
    }
}

/// The algorithms available for visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    ContainsDuplicate,
    TwoSum,
    MaxProfit,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::ContainsDuplicate,
        Algorithm::TwoSum,
        Algorithm::MaxProfit,
    ];

    /// Stable identifier used by the config file, the CLI and the source catalog
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::ContainsDuplicate => "contains-duplicate",
            Algorithm::TwoSum => "two-sum",
            Algorithm::MaxProfit => "max-profit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::ContainsDuplicate => "Contains Duplicate",
            Algorithm::TwoSum => "Two Sum",
            Algorithm::MaxProfit => "Best Time to Buy and Sell Stock",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algo| algo.id() == id)
    }

    /// Cycle to the next algorithm
    pub fn next(self) -> Self {
        match self {
            Algorithm::ContainsDuplicate => Algorithm::TwoSum,
            Algorithm::TwoSum => Algorithm::MaxProfit,
            Algorithm::MaxProfit => Algorithm::ContainsDuplicate,
        }
    }

    pub fn uses_target(self) -> bool {
        matches!(self, Algorithm::TwoSum)
    }

    /// Name the input array is given in this algorithm's source listing
    pub fn input_name(self) -> &'static str {
        match self {
            Algorithm::MaxProfit => "prices",
            Algorithm::ContainsDuplicate | Algorithm::TwoSum => "nums",
        }
    }

    /// Generate the full trace for `input`
    pub fn trace(self, input: &ProblemInput) -> Trace {
        match self {
            Algorithm::ContainsDuplicate => contains_duplicate::generate(&input.nums),
            Algorithm::TwoSum => two_sum::generate(&input.nums, input.target),
            Algorithm::MaxProfit => max_profit::generate(&input.nums),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
