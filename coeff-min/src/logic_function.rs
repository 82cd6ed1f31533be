// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    assignment::Assignment,
    cover::Cover,
    errors::{MinimizeError, ParseError},
    minimize::Minimizer,
    position::PositionSubsets,
};
use thiserror::Error;

/// A completely specified function, given by the assignments it's false on and the
/// assignments it's true on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicFunction {
    pub off_set: Vec<Assignment>,
    pub on_set: Vec<Assignment>,
}

impl LogicFunction {
    pub fn new(off_set: Vec<Assignment>, on_set: Vec<Assignment>) -> Self {
        Self { off_set, on_set }
    }

    /// Builds a function from minterm indexes, each padded to `width` bits.
    pub fn from_minterms(
        zeros: impl IntoIterator<Item = u64>,
        ones: impl IntoIterator<Item = u64>,
        width: usize,
    ) -> Result<Self, ParseError> {
        let convert = |minterms: Vec<u64>| {
            minterms
                .into_iter()
                .map(|minterm| Assignment::from_minterm(minterm, width))
                .collect::<Result<Vec<_>, _>>()
        };
        Ok(Self {
            off_set: convert(zeros.into_iter().collect())?,
            on_set: convert(ones.into_iter().collect())?,
        })
    }

    /// Parses two comma-terminated minterm lists, such as the contents of a zeros file and a
    /// ones file.
    pub fn parse_minterm_lists(zeros: &str, ones: &str, width: usize) -> Result<Self, ParseError> {
        Ok(Self {
            off_set: Assignment::parse_minterm_list(zeros, width)?,
            on_set: Assignment::parse_minterm_list(ones, width)?,
        })
    }

    /// The width of the function's assignments, or `None` if it has none.
    pub fn width(&self) -> Option<usize> {
        self.on_set
            .first()
            .or_else(|| self.off_set.first())
            .map(Assignment::width)
    }

    pub fn minimize(&self, subsets: &PositionSubsets) -> Result<String, MinimizeError> {
        Minimizer::new(subsets).minimize(&self.off_set, &self.on_set)
    }

    pub fn minimize_to_cover(&self, minimizer: &Minimizer<'_>) -> Result<Cover, MinimizeError> {
        minimizer.minimize_to_cover(&self.off_set, &self.on_set)
    }

    /// Checks that `cover` is true on every assignment in the on-set and false on every
    /// assignment in the off-set.
    ///
    /// Returns the first violation found, checking the on-set first.
    pub fn verify(&self, cover: &Cover) -> Result<(), CoverViolation> {
        if let Some(one) = self.on_set.iter().find(|one| !cover.evaluate(one)) {
            return Err(CoverViolation::Uncovered(one.clone()));
        }
        if let Some(zero) = self.off_set.iter().find(|zero| cover.evaluate(zero)) {
            return Err(CoverViolation::Overcovered(zero.clone()));
        }
        Ok(())
    }
}

/// A cover that disagrees with the function it was built for.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CoverViolation {
    #[error("cover is false on one-assignment {0}")]
    Uncovered(Assignment),

    #[error("cover is true on zero-assignment {0}")]
    Overcovered(Assignment),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficient::coefficient;

    #[test]
    fn test_parse_minterm_lists() {
        let function = LogicFunction::parse_minterm_lists("0,1,", "2,3,\n", 6).unwrap();
        assert_eq!(function.width(), Some(6));
        assert_eq!(function.off_set[1].to_string(), "000001");
        assert_eq!(function.on_set[0].to_string(), "000010");

        assert!(LogicFunction::parse_minterm_lists("0,", "64,", 6).is_err());
        assert_eq!(LogicFunction::new(vec![], vec![]).width(), None);
    }

    #[test]
    fn test_verify() {
        let function = LogicFunction::from_minterms([0], [1, 3], 2).unwrap();

        assert_eq!(function.verify(&Cover::new([coefficient("1", "2")])), Ok(()));
        assert_eq!(
            function.verify(&Cover::new([coefficient("11", "12")])),
            Err(CoverViolation::Uncovered(Assignment::parse("01").unwrap()))
        );
        assert_eq!(
            function.verify(&Cover::new([coefficient("1", "2"), coefficient("0", "1")])),
            Err(CoverViolation::Overcovered(Assignment::parse("00").unwrap()))
        );
    }

    #[test]
    fn test_minimize() {
        // f = x1 over two variables.
        let function = LogicFunction::from_minterms([0, 1], [2, 3], 2).unwrap();
        let subsets = PositionSubsets::all_combinations(2).unwrap();
        assert_eq!(function.minimize(&subsets).unwrap(), "x1");

        let cover = function
            .minimize_to_cover(&Minimizer::new(&subsets))
            .unwrap();
        assert_eq!(function.verify(&cover), Ok(()));
    }
}
