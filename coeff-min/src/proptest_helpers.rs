// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{assignment::Assignment, logic_function::LogicFunction, position::PositionSubsets};
use proptest::{prelude::*, sample::subsequence};

const DEFAULT_WIDTHS: (usize, usize) = (1, 5);

impl Arbitrary for LogicFunction {
    /// The inclusive range of widths to generate, defaulting to 1 to 5.
    type Parameters = Option<(usize, usize)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (min_width, max_width) = params.unwrap_or(DEFAULT_WIDTHS);
        (min_width..=max_width)
            .prop_flat_map(logic_function)
            .boxed()
    }
}

/// Generates completely specified functions of exactly `width` variables with a non-empty
/// on-set.
///
/// # Panics
///
/// Panics if `width` is 0 or too wide to enumerate every row.
pub fn logic_function(width: usize) -> BoxedStrategy<LogicFunction> {
    assert!(
        (1..usize::BITS as usize).contains(&width),
        "width {} is out of range",
        width
    );
    prop::collection::vec(any::<bool>(), 1 << width)
        .prop_map(move |rows| {
            let mut off_set = Vec::new();
            let mut on_set = Vec::new();
            for (minterm, value) in rows.into_iter().enumerate() {
                let assignment = Assignment::from_minterm(minterm as u64, width)
                    .expect("minterm is below 2^width");
                if value {
                    on_set.push(assignment);
                } else {
                    off_set.push(assignment);
                }
            }
            LogicFunction::new(off_set, on_set)
        })
        .prop_filter("on-set must not be empty", |function| {
            !function.on_set.is_empty()
        })
        .boxed()
}

/// Generates a non-empty list of distinct position subsets over `width` variables, in random
/// order.
pub fn position_subsets(width: usize) -> BoxedStrategy<PositionSubsets> {
    let all: Vec<_> = PositionSubsets::all_combinations(width)
        .expect("width is in range")
        .subsets()
        .to_vec();
    let len = all.len();
    subsequence(all, 1..=len)
        .prop_shuffle()
        .prop_map(PositionSubsets::new)
        .boxed()
}

/// Generates a function together with a list of position subsets for it.
pub fn function_and_subsets(
    widths: Option<(usize, usize)>,
) -> BoxedStrategy<(LogicFunction, PositionSubsets)> {
    let (min_width, max_width) = widths.unwrap_or(DEFAULT_WIDTHS);
    (min_width..=max_width)
        .prop_flat_map(|width| (logic_function(width), position_subsets(width)))
        .boxed()
}
