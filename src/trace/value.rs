//! Display values carried by a [`Step`](super::Step)
//!
//! This module defines the small value vocabulary a trace uses to describe the
//! algorithm's state. Everything here is plain owned data: a step never holds
//! a reference into the generator's working state.
//!
//! # Value Types
//!
//! - [`Scalar`]: one variable's current value (`i`, `num`, `min_price`, ...)
//! - [`AuxState`]: the working structure the algorithm is building
//! - [`Outcome`]: the final answer carried by the terminal step

use std::fmt;

/// A single variable value shown in the state pane
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scalar {
    Int(i64),
    Bool(bool),
    Index(usize),
    /// Positive infinity, used as the starting running minimum
    Infinity,
    #[default]
    Unset,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Index(i) => write!(f, "{}", i),
            Scalar::Infinity => write!(f, "∞"),
            Scalar::Unset => write!(f, "-"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<usize> for Scalar {
    fn from(i: usize) -> Self {
        Scalar::Index(i)
    }
}

/// Snapshot of the algorithm's working structure at one step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuxState {
    #[default]
    Empty,
    /// Members of a working set, in insertion order
    Set(Vec<i64>),
    /// Value -> index entries of a working map, in insertion order
    Map(Vec<(i64, usize)>),
    /// Provisional buy/sell positions of the best trade seen so far
    BestPair {
        buy: Option<usize>,
        sell: Option<usize>,
    },
}

impl AuxState {
    /// Number of entries held by a set or map snapshot
    pub fn len(&self) -> usize {
        match self {
            AuxState::Set(items) => items.len(),
            AuxState::Map(entries) => entries.len(),
            AuxState::Empty | AuxState::BestPair { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index positions this snapshot points at, for marking the array strip
    pub fn marked_indices(&self) -> Vec<usize> {
        match self {
            AuxState::BestPair { buy, sell } => buy.iter().chain(sell.iter()).copied().collect(),
            AuxState::Map(entries) => entries.iter().map(|(_, idx)| *idx).collect(),
            AuxState::Empty | AuxState::Set(_) => Vec::new(),
        }
    }
}

/// Final answer of a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Bool(bool),
    /// Indices of the two elements summing to the target, if any
    Pair(Option<(usize, usize)>),
    Profit {
        profit: i64,
        buy: Option<usize>,
        sell: Option<usize>,
    },
}

impl Outcome {
    /// Index positions the result refers to
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Outcome::Bool(_) => Vec::new(),
            Outcome::Pair(pair) => pair.iter().flat_map(|(a, b)| [*a, *b]).collect(),
            Outcome::Profit { buy, sell, .. } => buy.iter().chain(sell.iter()).copied().collect(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Bool(b) => write!(f, "{}", b),
            Outcome::Pair(Some((a, b))) => write!(f, "[{}, {}]", a, b),
            Outcome::Pair(None) => write!(f, "[]"),
            Outcome::Profit {
                profit,
                buy: Some(buy),
                sell: Some(sell),
            } => write!(f, "{} (buy @{}, sell @{})", profit, buy, sell),
            Outcome::Profit { profit, .. } => write!(f, "{}", profit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Int(-3).to_string(), "-3");
        assert_eq!(Scalar::Infinity.to_string(), "∞");
        assert_eq!(Scalar::Unset.to_string(), "-");
        assert_eq!(Scalar::from(true).to_string(), "true");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Pair(Some((0, 1))).to_string(), "[0, 1]");
        assert_eq!(Outcome::Pair(None).to_string(), "[]");
        let profit = Outcome::Profit {
            profit: 5,
            buy: Some(1),
            sell: Some(4),
        };
        assert_eq!(profit.to_string(), "5 (buy @1, sell @4)");
        assert_eq!(profit.indices(), vec![1, 4]);
    }

    #[test]
    fn test_aux_marked_indices() {
        let aux = AuxState::BestPair {
            buy: Some(2),
            sell: None,
        };
        assert_eq!(aux.marked_indices(), vec![2]);
        assert!(AuxState::Set(Vec::new()).is_empty());
    }
}
