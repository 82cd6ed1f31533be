// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    assignment::Assignment, coefficient::Coefficient, errors::MinimizeError,
    position::PositionSubsets,
};
use log::debug;
use std::collections::BTreeSet;

/// The candidate coefficients for a single assignment, one per position subset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    assignment: Assignment,
    coefficients: Vec<Coefficient>,
}

impl Equation {
    /// Builds the equation for `assignment`, with coefficients in the same order as `subsets`.
    pub fn build(assignment: &Assignment, subsets: &PositionSubsets) -> Result<Self, MinimizeError> {
        let coefficients = subsets
            .subsets()
            .iter()
            .map(|subset| Coefficient::build(assignment, subset))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            assignment: assignment.clone(),
            coefficients,
        })
    }

    /// The assignment this equation was built from.
    #[inline]
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    #[inline]
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    #[inline]
    pub fn first(&self) -> Option<&Coefficient> {
        self.coefficients.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[inline]
    pub fn contains(&self, coefficient: &Coefficient) -> bool {
        self.coefficients.contains(coefficient)
    }

    /// Returns a copy of this equation with every forbidden coefficient removed.
    pub fn without(&self, forbidden: &ForbiddenSet) -> Self {
        Self {
            assignment: self.assignment.clone(),
            coefficients: self
                .coefficients
                .iter()
                .filter(|coefficient| !forbidden.contains(coefficient))
                .cloned()
                .collect(),
        }
    }
}

/// One equation per one-assignment, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquationSystem {
    equations: Vec<Equation>,
}

impl EquationSystem {
    pub fn build(ones: &[Assignment], subsets: &PositionSubsets) -> Result<Self, MinimizeError> {
        let equations = ones
            .iter()
            .map(|assignment| Equation::build(assignment, subsets))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            "built {} equations of {} coefficients each",
            equations.len(),
            subsets.len()
        );
        Ok(Self { equations })
    }

    #[inline]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }
}

/// Every coefficient that some zero-assignment produces. None of these may appear in a cover,
/// since the corresponding term would be true for that zero-assignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForbiddenSet {
    coefficients: BTreeSet<Coefficient>,
}

impl ForbiddenSet {
    pub fn collect(zeros: &[Assignment], subsets: &PositionSubsets) -> Result<Self, MinimizeError> {
        let mut coefficients = BTreeSet::new();
        for assignment in zeros {
            let equation = Equation::build(assignment, subsets)?;
            coefficients.extend(equation.coefficients);
        }
        debug!(
            "{} distinct forbidden coefficients from {} zero-assignments",
            coefficients.len(),
            zeros.len()
        );
        Ok(Self { coefficients })
    }

    #[inline]
    pub fn contains(&self, coefficient: &Coefficient) -> bool {
        self.coefficients.contains(coefficient)
    }

    #[inline]
    pub fn coefficients(&self) -> &BTreeSet<Coefficient> {
        &self.coefficients
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficient::coefficient;

    fn assignments(strings: &[&str]) -> Vec<Assignment> {
        strings
            .iter()
            .map(|s| Assignment::parse(s).unwrap())
            .collect()
    }

    #[test]
    fn test_equation_build() {
        let subsets = PositionSubsets::parse_list("1,2,3,13,").unwrap();
        let assignment = Assignment::parse("010").unwrap();
        let equation = Equation::build(&assignment, &subsets).unwrap();
        assert_eq!(equation.assignment(), &assignment);
        assert_eq!(
            equation.coefficients(),
            &[
                coefficient("0", "1"),
                coefficient("1", "2"),
                coefficient("0", "3"),
                coefficient("00", "13"),
            ]
        );
    }

    #[test]
    fn test_forbidden_set() {
        let subsets = PositionSubsets::parse_list("1,2,3,").unwrap();
        let forbidden = ForbiddenSet::collect(&assignments(&["000", "001"]), &subsets).unwrap();

        let expected: BTreeSet<_> = [
            coefficient("0", "1"),
            coefficient("0", "2"),
            coefficient("0", "3"),
            coefficient("1", "3"),
        ]
        .into_iter()
        .collect();
        assert_eq!(forbidden.coefficients(), &expected, "duplicates are merged");

        let empty = ForbiddenSet::collect(&[], &subsets).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_without() {
        let subsets = PositionSubsets::parse_list("1,2,3,").unwrap();
        let forbidden = ForbiddenSet::collect(&assignments(&["000", "001"]), &subsets).unwrap();

        let equation = Equation::build(&Assignment::parse("010").unwrap(), &subsets).unwrap();
        let stripped = equation.without(&forbidden);
        assert_eq!(stripped.coefficients(), &[coefficient("1", "2")]);
        assert_eq!(equation.len(), 3, "original is untouched");

        let equation = Equation::build(&Assignment::parse("001").unwrap(), &subsets).unwrap();
        assert!(equation.without(&forbidden).is_empty());
    }

    #[test]
    fn test_without_repeated_subsets() {
        // A repeated subset puts the same coefficient in an equation twice.
        let subsets = PositionSubsets::parse_list("1,1,2,").unwrap();
        let forbidden = ForbiddenSet::collect(&assignments(&["00"]), &subsets).unwrap();
        assert_eq!(forbidden.len(), 2);

        let equation = Equation::build(&Assignment::parse("01").unwrap(), &subsets).unwrap();
        assert_eq!(
            equation.coefficients(),
            &[coefficient("0", "1"), coefficient("0", "1"), coefficient("1", "2")]
        );
        assert_eq!(
            equation.without(&forbidden).coefficients(),
            &[coefficient("1", "2")]
        );

        let equation = Equation::build(&Assignment::parse("11").unwrap(), &subsets).unwrap();
        assert_eq!(equation.without(&forbidden).len(), 3, "allowed repeats are kept");
    }

    #[test]
    fn test_system_preserves_order() {
        let subsets = PositionSubsets::parse_list("12,").unwrap();
        let ones = assignments(&["11", "01", "10"]);
        let system = EquationSystem::build(&ones, &subsets).unwrap();
        let order: Vec<_> = system
            .equations()
            .iter()
            .map(|equation| equation.assignment().to_string())
            .collect();
        assert_eq!(order, ["11", "01", "10"]);
    }

    #[test]
    fn test_out_of_range() {
        let subsets = PositionSubsets::parse_list("1,4,").unwrap();
        let result = ForbiddenSet::collect(&assignments(&["000"]), &subsets);
        assert!(matches!(
            result,
            Err(MinimizeError::PositionOutOfRange { position: 4, .. })
        ));
    }
}
