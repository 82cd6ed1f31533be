// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    assignment::Assignment,
    errors::MinimizeError,
    position::{PositionSubset, MAX_SUBSET_LEN},
};
use arrayvec::ArrayVec;
use std::fmt;

/// A candidate product term: the values an assignment takes at a subset of positions.
///
/// Coefficients are plain values. Two coefficients built from different assignments are equal
/// if they pick the same values at the same positions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coefficient {
    pattern: ArrayVec<bool, MAX_SUBSET_LEN>,
    positions: PositionSubset,
}

impl Coefficient {
    /// Builds the coefficient of `assignment` for `subset`.
    ///
    /// Returns an error if `subset` names a position past the end of `assignment`.
    pub fn build(assignment: &Assignment, subset: &PositionSubset) -> Result<Self, MinimizeError> {
        let pattern = subset
            .positions()
            .iter()
            .map(|&position| {
                assignment
                    .value(position)
                    .ok_or_else(|| MinimizeError::PositionOutOfRange {
                        assignment: assignment.clone(),
                        position,
                        width: assignment.width(),
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            pattern,
            positions: subset.clone(),
        })
    }

    /// The literal pattern: one value per position in the subset, in subset order.
    #[inline]
    pub fn pattern(&self) -> &[bool] {
        &self.pattern
    }

    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    #[inline]
    pub fn positions(&self) -> &PositionSubset {
        &self.positions
    }

    /// Returns `(position, value)` pairs for each literal in the term.
    pub fn literals(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        self.positions
            .positions()
            .iter()
            .copied()
            .zip(self.pattern.iter().copied())
    }

    /// Returns true if every literal of this term is satisfied by `assignment`.
    ///
    /// Literals past the end of `assignment` are never satisfied.
    pub fn matches(&self, assignment: &Assignment) -> bool {
        self.literals()
            .all(|(position, value)| assignment.value(position) == Some(value))
    }

    #[inline]
    pub fn algebraic_display(&self) -> CoefficientAlgebraicDisplay<'_> {
        CoefficientAlgebraicDisplay::new(self)
    }
}

impl fmt::Debug for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pattern: String = self
            .pattern
            .iter()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect();
        f.debug_tuple("Coefficient")
            .field(&format_args!("{}", pattern))
            .field(&format_args!("{}", self.positions))
            .finish()
    }
}

/// Displays a coefficient as a product of literals, e.g. `x1-x3x4`.
pub struct CoefficientAlgebraicDisplay<'a> {
    coefficient: &'a Coefficient,
}

impl<'a> CoefficientAlgebraicDisplay<'a> {
    pub fn new(coefficient: &'a Coefficient) -> Self {
        Self { coefficient }
    }
}

impl<'a> fmt::Display for CoefficientAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (position, value) in self.coefficient.literals() {
            match value {
                true => write!(f, "x{}", position)?,
                false => write!(f, "-x{}", position)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn coefficient(pattern: &str, positions: &str) -> Coefficient {
    Coefficient {
        pattern: pattern.chars().map(|ch| ch == '1').collect(),
        positions: PositionSubset::parse(positions).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let assignment = Assignment::parse("101100").unwrap();
        let subset = PositionSubset::parse("136").unwrap();
        let actual = Coefficient::build(&assignment, &subset).unwrap();
        assert_eq!(actual, coefficient("110", "136"));
        assert_eq!(actual.pattern_len(), 3);

        // Positions are taken in the order the subset lists them.
        let subset = PositionSubset::parse("42").unwrap();
        let actual = Coefficient::build(&assignment, &subset).unwrap();
        assert_eq!(actual, coefficient("10", "42"));
    }

    #[test]
    fn test_build_out_of_range() {
        let assignment = Assignment::parse("101").unwrap();
        let subset = PositionSubset::parse("14").unwrap();
        assert_eq!(
            Coefficient::build(&assignment, &subset),
            Err(MinimizeError::PositionOutOfRange {
                assignment,
                position: 4,
                width: 3,
            })
        );
    }

    #[test]
    fn test_value_equality() {
        // Different assignments that agree on the subset's positions give equal coefficients.
        let subset = PositionSubset::parse("13").unwrap();
        let a = Coefficient::build(&Assignment::parse("101").unwrap(), &subset).unwrap();
        let b = Coefficient::build(&Assignment::parse("111").unwrap(), &subset).unwrap();
        assert_eq!(a, b);

        // Same pattern over different positions is a different term.
        assert_ne!(coefficient("11", "13"), coefficient("11", "12"));
    }

    #[test]
    fn test_matches() {
        let term = coefficient("10", "13");
        assert!(term.matches(&Assignment::parse("100").unwrap()));
        assert!(term.matches(&Assignment::parse("110").unwrap()));
        assert!(!term.matches(&Assignment::parse("101").unwrap()));
        assert!(!term.matches(&Assignment::parse("1").unwrap()), "too short");
    }

    #[test]
    fn test_algebraic_display() {
        assert_eq!(coefficient("101", "134").algebraic_display().to_string(), "x1-x3x4");
        assert_eq!(coefficient("0", "2").algebraic_display().to_string(), "-x2");
        assert_eq!(
            format!("{:?}", coefficient("01", "25")),
            "Coefficient(01, 25)"
        );
    }
}
