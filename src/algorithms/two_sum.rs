//! Pair-sum lookup with a complement map
//!
//! For every position the trace records a `Scan` (compute the complement and
//! look it up), then either the early `Found` terminal or an `Update` that
//! records the current number. When no pair exists a `Done` step with an empty
//! result closes the trace.
//!
//! A number already present in the map keeps its first index.

use crate::trace::value::{AuxState, Outcome, Scalar};
use crate::trace::{Phase, Step, Trace, TraceBuilder};
use rustc_hash::FxHashMap;

pub fn generate(nums: &[i64], target: i64) -> Trace {
    let mut builder = TraceBuilder::new();
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    let mut order: Vec<(i64, usize)> = Vec::new();

    builder.push(
        Step::new(
            Phase::Init,
            format!(
                "Create an empty map from number to index. We are looking for two numbers that add up to {}.",
                target
            ),
        )
        .var("target", target)
        .with_aux(AuxState::Map(Vec::new())),
    );

    for (i, &num) in nums.iter().enumerate() {
        // No i64 partner exists when the complement itself overflows
        let complement = target.checked_sub(num);
        let lookup = complement.and_then(|c| seen.get(&c).copied());

        let scan = Step::new(
            Phase::Scan,
            match (complement, lookup) {
                (Some(c), Some(j)) => format!(
                    "nums[{}] = {} needs {} = {} - {}. Found it at index {}.",
                    i, num, c, target, num, j
                ),
                (Some(c), None) => format!(
                    "nums[{}] = {} needs {} = {} - {}. It is not in the map yet.",
                    i, num, c, target, num
                ),
                (None, _) => format!(
                    "nums[{}] = {} would need {} - {}, which is out of range. No partner can exist.",
                    i, num, target, num
                ),
            },
        )
        .at(i)
        .var("target", target)
        .var("i", i)
        .var("num", num)
        .var("complement", complement_value(complement))
        .var("in_seen", lookup.is_some())
        .with_aux(AuxState::Map(order.clone()));
        builder.push(scan);

        if let Some(j) = lookup {
            return builder.finish(
                Step::new(
                    Phase::Found,
                    format!(
                        "nums[{}] + nums[{}] = {} + {} = {}. Return [{}, {}].",
                        j, i, nums[j], num, target, j, i
                    ),
                )
                .at(i)
                .var("target", target)
                .var("i", i)
                .var("num", num)
                .var("complement", complement_value(complement))
                .with_aux(AuxState::Map(order))
                .with_result(Outcome::Pair(Some((j, i)))),
            );
        }

        let description = match seen.get(&num) {
            Some(&first) => format!(
                "{} is already recorded at index {}. Keep the first index.",
                num, first
            ),
            None => {
                seen.insert(num, i);
                order.push((num, i));
                format!("Record {} -> {} in the map.", num, i)
            }
        };

        builder.push(
            Step::new(Phase::Update, description)
                .at(i)
                .var("target", target)
                .var("i", i)
                .var("num", num)
                .var("complement", complement_value(complement))
                .with_aux(AuxState::Map(order.clone())),
        );
    }

    builder.finish(
        Step::new(
            Phase::Done,
            format!("No two numbers add up to {}. Return an empty result.", target),
        )
        .var("target", target)
        .with_aux(AuxState::Map(order))
        .with_result(Outcome::Pair(None)),
    )
}

fn complement_value(complement: Option<i64>) -> Scalar {
    complement.map_or(Scalar::Unset, Scalar::Int)
}
