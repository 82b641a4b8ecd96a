//! Duplicate detection with a hash set
//!
//! Step grammar:
//!
//! ```text
//! Init, (Scan, Update)*, Scan, Found      -- duplicate hit, stops early
//! Init, (Scan, Update)*, Done             -- loop exhausted, result false
//! ```

use crate::trace::value::{AuxState, Outcome};
use crate::trace::{Phase, Step, Trace, TraceBuilder};
use rustc_hash::FxHashSet;

/// Build the trace for `nums`
pub fn generate(nums: &[i64]) -> Trace {
    let mut builder = TraceBuilder::new();
    let mut seen: FxHashSet<i64> = FxHashSet::default();
    // Insertion order of `seen`, used for display snapshots
    let mut order: Vec<i64> = Vec::new();

    builder.push(
        Step::new(Phase::Init, "Create an empty set to remember the numbers seen so far.")
            .var("seen_size", 0usize)
            .with_aux(AuxState::Set(Vec::new())),
    );

    for (i, &num) in nums.iter().enumerate() {
        let hit = seen.contains(&num);

        let scan = Step::new(
            Phase::Scan,
            format!("Look at nums[{}] = {}. Is {} already in the set?", i, num, num),
        )
        .at(i)
        .var("i", i)
        .var("num", num)
        .var("seen_size", order.len())
        .var("in_seen", hit)
        .with_aux(AuxState::Set(order.clone()));

        if hit {
            builder.push(scan);
            let found = Step::new(
                Phase::Found,
                format!("{} is already in the set, so the array contains a duplicate.", num),
            )
            .at(i)
            .var("i", i)
            .var("num", num)
            .var("seen_size", order.len())
            .with_aux(AuxState::Set(order.clone()))
            .with_result(Outcome::Bool(true));
            return builder.finish(found);
        }

        builder.push(scan);

        seen.insert(num);
        order.push(num);

        builder.push(
            Step::new(
                Phase::Update,
                format!("{} was not seen before. Add it to the set.", num),
            )
            .at(i)
            .var("i", i)
            .var("num", num)
            .var("seen_size", order.len())
            .with_aux(AuxState::Set(order.clone())),
        );
    }

    builder.finish(
        Step::new(
            Phase::Done,
            "Every number was checked and none repeated. No duplicates.",
        )
        .var("seen_size", order.len())
        .with_aux(AuxState::Set(order))
        .with_result(Outcome::Bool(false)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_found() {
        let trace = generate(&[1, 2, 3, 1]);
        assert_eq!(trace.result(), Some(&Outcome::Bool(true)));
        assert_eq!(trace.terminal().phase, Phase::Found);
        assert_eq!(trace.terminal().cursor, Some(3));
        // Init + 3 * (Scan, Update) + final Scan
        assert_eq!(trace.non_terminal_count(), 8);
    }

    #[test]
    fn test_no_duplicate() {
        let trace = generate(&[1, 2, 3, 4]);
        assert_eq!(trace.result(), Some(&Outcome::Bool(false)));
        assert_eq!(trace.terminal().phase, Phase::Done);
        assert_eq!(trace.non_terminal_count(), 1 + 2 * 4);
        assert_eq!(trace.terminal().aux, AuxState::Set(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_early_exit_is_shorter() {
        let early = generate(&[1, 1, 2, 3]);
        let late = generate(&[1, 2, 3, 1]);
        assert!(early.non_terminal_count() < late.non_terminal_count());
    }

    #[test]
    fn test_snapshots_do_not_alias() {
        let trace = generate(&[5, 6, 7]);
        // The set grows over time; earlier snapshots keep their old contents
        assert_eq!(trace[0].aux, AuxState::Set(vec![]));
        assert_eq!(trace[2].aux, AuxState::Set(vec![5]));
        assert_eq!(trace[4].aux, AuxState::Set(vec![5, 6]));
        assert_eq!(trace.terminal().aux, AuxState::Set(vec![5, 6, 7]));
    }
}
