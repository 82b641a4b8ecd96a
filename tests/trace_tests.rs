// Integration tests for the trace generators

use algoscope::algorithms::{contains_duplicate, max_profit, two_sum, Algorithm, ProblemInput};
use algoscope::trace::value::Outcome;
use algoscope::trace::{Phase, Trace};
use proptest::prelude::*;

fn assert_single_terminal_last(trace: &Trace) {
    assert!(!trace.is_empty());
    let terminals = trace.steps().iter().filter(|s| s.is_terminal()).count();
    assert_eq!(terminals, 1, "expected exactly one terminal step");
    assert!(trace[trace.last_index()].is_terminal());
    assert!(trace.result().is_some());
}

#[test]
fn test_duplicate_found() {
    let trace = contains_duplicate::generate(&[1, 2, 3, 1]);
    assert_single_terminal_last(&trace);
    assert_eq!(trace.result(), Some(&Outcome::Bool(true)));
    assert_eq!(trace.terminal().phase, Phase::Found);
    assert_eq!(trace.terminal().cursor, Some(3));
}

#[test]
fn test_no_duplicate() {
    let trace = contains_duplicate::generate(&[1, 2, 3, 4]);
    assert_single_terminal_last(&trace);
    assert_eq!(trace.result(), Some(&Outcome::Bool(false)));
    assert_eq!(trace.terminal().phase, Phase::Done);
}

#[test]
fn test_duplicate_early_exit() {
    let early = contains_duplicate::generate(&[1, 1, 2, 3]);
    let late = contains_duplicate::generate(&[1, 2, 3, 1]);
    assert!(early.non_terminal_count() < late.non_terminal_count());

    let early = contains_duplicate::generate(&[1, 2, 3, 1, 5, 6]);
    let late = contains_duplicate::generate(&[1, 2, 3, 5, 6, 1]);
    assert!(early.non_terminal_count() < late.non_terminal_count());
}

#[test]
fn test_max_profit_example() {
    let trace = max_profit::generate(&[7, 1, 5, 3, 6, 4]);
    assert_single_terminal_last(&trace);
    assert_eq!(
        trace.result(),
        Some(&Outcome::Profit {
            profit: 5,
            buy: Some(1),
            sell: Some(4),
        })
    );
}

#[test]
fn test_max_profit_decreasing() {
    let trace = max_profit::generate(&[7, 6, 4, 3, 1]);
    match trace.result() {
        Some(Outcome::Profit { profit, sell, .. }) => {
            assert_eq!(*profit, 0);
            assert!(sell.is_none());
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_two_sum_pair() {
    let trace = two_sum::generate(&[2, 7, 11, 15], 9);
    assert_single_terminal_last(&trace);
    assert_eq!(trace.result(), Some(&Outcome::Pair(Some((0, 1)))));
}

#[test]
fn test_two_sum_no_pair() {
    let trace = two_sum::generate(&[1, 2, 3], 100);
    assert_eq!(trace.result(), Some(&Outcome::Pair(None)));
    assert_eq!(trace.terminal().phase, Phase::Done);
}

#[test]
fn test_two_sum_uses_same_value_twice() {
    let trace = two_sum::generate(&[3, 3], 6);
    assert_eq!(trace.result(), Some(&Outcome::Pair(Some((0, 1)))));
}

#[test]
fn test_dispatch_matches_generators() {
    let input = ProblemInput::new(vec![3, 2, 4], 6);
    assert_eq!(
        Algorithm::TwoSum.trace(&input),
        two_sum::generate(&input.nums, input.target)
    );
    assert_eq!(
        Algorithm::MaxProfit.trace(&input),
        max_profit::generate(&input.nums)
    );
    assert_eq!(
        Algorithm::ContainsDuplicate.trace(&input),
        contains_duplicate::generate(&input.nums)
    );
}

#[test]
fn test_single_element_inputs() {
    for algorithm in Algorithm::ALL {
        let trace = algorithm.trace(&ProblemInput::new(vec![42], 42));
        assert_single_terminal_last(&trace);
        assert_eq!(trace[0].phase, Phase::Init);
    }
}

fn small_nums() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 1..24)
}

proptest! {
    #[test]
    fn generators_are_deterministic(nums in small_nums(), target in -100i64..100) {
        let input = ProblemInput::new(nums, target);
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.trace(&input), algorithm.trace(&input));
        }
    }

    #[test]
    fn terminal_step_is_unique_and_last(nums in small_nums(), target in -100i64..100) {
        let input = ProblemInput::new(nums, target);
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&input);
            let terminals: Vec<usize> = trace
                .steps()
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_terminal())
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(terminals, vec![trace.last_index()]);
            prop_assert!(trace.terminal().result.is_some());
            prop_assert!(trace.steps()[..trace.last_index()].iter().all(|s| s.result.is_none()));
        }
    }

    #[test]
    fn cursors_stay_in_bounds(nums in small_nums(), target in -100i64..100) {
        let len = nums.len();
        let input = ProblemInput::new(nums, target);
        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&input);
            prop_assert!(trace[0].cursor.is_none());
            for step in trace.steps() {
                if let Some(cursor) = step.cursor {
                    prop_assert!(cursor < len);
                }
            }
        }
    }

    #[test]
    fn max_profit_step_count(prices in small_nums()) {
        let trace = max_profit::generate(&prices);
        prop_assert_eq!(trace.non_terminal_count(), 1 + 2 * prices.len());
        prop_assert_eq!(trace.len(), 2 + 2 * prices.len());
    }

    #[test]
    fn max_profit_matches_brute_force(prices in small_nums()) {
        let mut best = 0;
        for i in 0..prices.len() {
            for j in i + 1..prices.len() {
                best = best.max(prices[j] - prices[i]);
            }
        }
        let trace = max_profit::generate(&prices);
        match trace.result() {
            Some(Outcome::Profit { profit, .. }) => prop_assert_eq!(*profit, best),
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }

    #[test]
    fn contains_duplicate_matches_brute_force(nums in small_nums()) {
        let mut sorted = nums.clone();
        sorted.sort_unstable();
        let expected = sorted.windows(2).any(|w| w[0] == w[1]);
        let trace = contains_duplicate::generate(&nums);
        prop_assert_eq!(trace.result(), Some(&Outcome::Bool(expected)));
    }

    #[test]
    fn two_sum_pair_is_valid(nums in small_nums(), target in -100i64..100) {
        let trace = two_sum::generate(&nums, target);
        match trace.result() {
            Some(Outcome::Pair(Some((a, b)))) => {
                prop_assert!(a < b);
                prop_assert_eq!(nums[*a] + nums[*b], target);
            }
            Some(Outcome::Pair(None)) => {
                for i in 0..nums.len() {
                    for j in i + 1..nums.len() {
                        prop_assert_ne!(nums[i] + nums[j], target);
                    }
                }
            }
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
    }
}
