//! Best single buy/sell with a running minimum
//!
//! Every position emits exactly one `Scan` (running minimum check) and one
//! `Update` (best profit check), whether or not anything changed, so a trace
//! for `n` prices always has `1 + 2n` non-terminal steps followed by `Done`.
//!
//! Comparisons are strict: the first minimum and the first best profit win.
//!
//! Profits saturate at `i64::MAX`: a spread wider than that (only possible
//! when prices straddle zero near the ends of the range) is reported as
//! `i64::MAX`. Once the cap is reached, later and wider spreads compare equal
//! and do not move the sell day.

use crate::trace::value::{AuxState, Outcome, Scalar};
use crate::trace::{Phase, Step, Trace, TraceBuilder};

pub fn generate(prices: &[i64]) -> Trace {
    let mut builder = TraceBuilder::new();
    let mut min_price: Option<i64> = None;
    let mut min_index: Option<usize> = None;
    let mut max_profit: i64 = 0;
    let mut buy: Option<usize> = None;
    let mut sell: Option<usize> = None;

    builder.push(
        Step::new(
            Phase::Init,
            "Start with min_price = ∞ and max_profit = 0.",
        )
        .var("min_price", Scalar::Infinity)
        .var("max_profit", 0i64)
        .with_aux(AuxState::BestPair {
            buy: None,
            sell: None,
        }),
    );

    for (i, &price) in prices.iter().enumerate() {
        let lowered = min_price.map_or(true, |min| price < min);
        let description = if lowered {
            min_price = Some(price);
            min_index = Some(i);
            format!("prices[{}] = {} is the lowest price so far. min_price = {}.", i, price, price)
        } else {
            format!(
                "prices[{}] = {} is not below min_price = {}.",
                i,
                price,
                min_display(min_price)
            )
        };

        builder.push(
            Step::new(Phase::Scan, description)
                .at(i)
                .var("i", i)
                .var("price", price)
                .var("min_price", min_display(min_price))
                .var("max_profit", max_profit)
                .var("min_changed", lowered)
                .with_aux(AuxState::BestPair { buy, sell }),
        );

        // min_price is always set once the first price has been scanned
        let profit = min_price.map_or(0, |min| price.saturating_sub(min));
        let improved = profit > max_profit;
        let description = if improved {
            max_profit = profit;
            buy = min_index;
            sell = Some(i);
            format!(
                "Selling at {} gives profit {} - {} = {}. New best profit.",
                price,
                price,
                min_display(min_price),
                profit
            )
        } else {
            format!(
                "Selling at {} gives profit {}, which does not beat {}.",
                price, profit, max_profit
            )
        };

        builder.push(
            Step::new(Phase::Update, description)
                .at(i)
                .var("i", i)
                .var("price", price)
                .var("min_price", min_display(min_price))
                .var("profit", profit)
                .var("max_profit", max_profit)
                .var("profit_changed", improved)
                .with_aux(AuxState::BestPair { buy, sell }),
        );
    }

    let description = match (buy, sell) {
        (Some(b), Some(s)) => format!(
            "Buy on day {} and sell on day {} for a profit of {}.",
            b, s, max_profit
        ),
        _ => "Prices never rise after a low point. The best profit is 0.".to_string(),
    };

    builder.finish(
        Step::new(Phase::Done, description)
            .var("min_price", min_display(min_price))
            .var("max_profit", max_profit)
            .with_aux(AuxState::BestPair { buy, sell })
            .with_result(Outcome::Profit {
                profit: max_profit,
                buy,
                sell,
            }),
    )
}

fn min_display(min_price: Option<i64>) -> Scalar {
    min_price.map_or(Scalar::Infinity, Scalar::Int)
}
