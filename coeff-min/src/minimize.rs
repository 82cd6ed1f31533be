// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    assignment::Assignment,
    cover::{Cover, SelectionHeuristic},
    equation::{EquationSystem, ForbiddenSet},
    errors::MinimizeError,
    position::PositionSubsets,
};
use log::debug;

/// Minimizes the function that is 0 on `zeros` and 1 on `ones`, returning a sum-of-products
/// expression such as `x1-x2+x3`.
///
/// Candidate terms are built from `subsets`, in order. `zeros` and `ones` must be disjoint and
/// all assignments must be at least as wide as the largest position in `subsets`.
///
/// # Examples
///
/// ```
/// use coeff_min::{assignment::Assignment, minimize, position::PositionSubsets};
///
/// let parse = |s: &str| Assignment::parse(s).unwrap();
/// let zeros = [parse("000"), parse("001")];
/// let ones = [parse("010"), parse("100"), parse("111")];
/// let subsets = PositionSubsets::parse_list("1,2,3,").unwrap();
///
/// assert_eq!(minimize(&zeros, &ones, &subsets).unwrap(), "x2+x1");
/// ```
pub fn minimize(
    zeros: &[Assignment],
    ones: &[Assignment],
    subsets: &PositionSubsets,
) -> Result<String, MinimizeError> {
    Minimizer::new(subsets).minimize(zeros, ones)
}

/// Runs the minimization with a fixed list of position subsets.
#[derive(Clone, Debug)]
pub struct Minimizer<'a> {
    subsets: &'a PositionSubsets,
    heuristic: SelectionHeuristic,
}

impl<'a> Minimizer<'a> {
    pub fn new(subsets: &'a PositionSubsets) -> Self {
        Self {
            subsets,
            heuristic: SelectionHeuristic::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: SelectionHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[inline]
    pub fn subsets(&self) -> &'a PositionSubsets {
        self.subsets
    }

    #[inline]
    pub fn heuristic(&self) -> SelectionHeuristic {
        self.heuristic
    }

    /// Selects the cover for the function that is 0 on `zeros` and 1 on `ones`.
    pub fn minimize_to_cover(
        &self,
        zeros: &[Assignment],
        ones: &[Assignment],
    ) -> Result<Cover, MinimizeError> {
        if self.subsets.is_empty() {
            return Err(MinimizeError::NoPositionSubsets);
        }
        if ones.is_empty() {
            return Err(MinimizeError::NoOneAssignments);
        }
        debug!(
            "minimizing {} zeros and {} ones over {} subsets (heuristic: {:?})",
            zeros.len(),
            ones.len(),
            self.subsets.len(),
            self.heuristic
        );

        let forbidden = ForbiddenSet::collect(zeros, self.subsets)?;
        let system = EquationSystem::build(ones, self.subsets)?;
        Cover::select(&system, &forbidden, self.heuristic)
    }

    /// Minimizes and encodes the result as a sum-of-products expression.
    pub fn minimize(&self, zeros: &[Assignment], ones: &[Assignment]) -> Result<String, MinimizeError> {
        self.minimize_to_cover(zeros, ones)?.encode()
    }
}
