// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::ParseError, tokens};
use bitvec::vec::BitVec;
use std::{fmt, str::FromStr};

/// The widest assignment that can be built from a minterm index.
pub const MAX_MINTERM_WIDTH: usize = 64;

/// One row of a truth table: a value for every variable.
///
/// Variables are addressed by 1-based position, left to right, so position 1 is the most
/// significant bit of the corresponding minterm index.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Assignment {
    bits: BitVec,
}

impl Assignment {
    pub fn new(values: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: values.into_iter().collect(),
        }
    }

    /// Parses a string of `'0'` and `'1'` characters.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let bits = input
            .chars()
            .enumerate()
            .map(|(index, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParseError::InvalidAssignment {
                    input: input.to_owned(),
                    index,
                    ch,
                }),
            })
            .collect::<Result<BitVec, _>>()?;
        Ok(Self { bits })
    }

    /// Builds the assignment for a minterm index, left-padded with zeros to `width` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use coeff_min::assignment::Assignment;
    ///
    /// let assignment = Assignment::from_minterm(5, 6).unwrap();
    /// assert_eq!(assignment.to_string(), "000101");
    /// ```
    pub fn from_minterm(minterm: u64, width: usize) -> Result<Self, ParseError> {
        check_width(width)?;
        if width < MAX_MINTERM_WIDTH && minterm >> width != 0 {
            return Err(ParseError::MintermTooWide { minterm, width });
        }
        Ok(Self::new(
            (0..width).rev().map(|shift| (minterm >> shift) & 1 == 1),
        ))
    }

    /// Parses a comma-terminated list of decimal minterm indexes, e.g. `0,3,5,`.
    pub fn parse_minterm_list(content: &str, width: usize) -> Result<Vec<Self>, ParseError> {
        check_width(width)?;
        tokens::comma_terminated(content)
            .map(|token| {
                let minterm = token
                    .parse::<u64>()
                    .map_err(|_| ParseError::InvalidMinterm {
                        token: token.to_owned(),
                    })?;
                Self::from_minterm(minterm, width)
            })
            .collect()
    }

    /// Returns the minterm index for this assignment, or `None` if it's too wide to fit.
    pub fn to_minterm(&self) -> Option<u64> {
        if self.width() > MAX_MINTERM_WIDTH {
            return None;
        }
        Some(
            self.bits
                .iter()
                .by_vals()
                .fold(0, |acc, bit| (acc << 1) | u64::from(bit)),
        )
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns the value of the variable at the 1-based `position`.
    #[inline]
    pub fn value(&self, position: u8) -> Option<bool> {
        let ix = usize::from(position).checked_sub(1)?;
        self.bits.get(ix).map(|bit| *bit)
    }

    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }
}

fn check_width(width: usize) -> Result<(), ParseError> {
    if (1..=MAX_MINTERM_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(ParseError::WidthOutOfRange {
            width,
            min: 1,
            max: MAX_MINTERM_WIDTH,
        })
    }
}

impl FromStr for Assignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in self.values() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Assignment")
            .field(&format_args!("{}", self))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let assignment = Assignment::parse("0110").unwrap();
        assert_eq!(assignment.width(), 4);
        assert_eq!(assignment.value(1), Some(false));
        assert_eq!(assignment.value(2), Some(true));
        assert_eq!(assignment.value(4), Some(false));
        assert_eq!(assignment.value(0), None, "positions are 1-based");
        assert_eq!(assignment.value(5), None);
        assert_eq!(assignment.to_string(), "0110");

        assert_eq!(
            Assignment::parse("01x"),
            Err(ParseError::InvalidAssignment {
                input: "01x".to_owned(),
                index: 2,
                ch: 'x',
            })
        );
    }

    #[test]
    fn test_minterm() {
        let assignment = Assignment::from_minterm(5, 6).unwrap();
        assert_eq!(assignment.to_string(), "000101");
        assert_eq!(assignment.to_minterm(), Some(5));

        assert_eq!(Assignment::from_minterm(63, 6).unwrap().to_string(), "111111");
        assert_eq!(
            Assignment::from_minterm(64, 6),
            Err(ParseError::MintermTooWide {
                minterm: 64,
                width: 6
            })
        );
        assert!(matches!(
            Assignment::from_minterm(0, 0),
            Err(ParseError::WidthOutOfRange { width: 0, .. })
        ));
        assert_eq!(
            Assignment::from_minterm(u64::MAX, 64).unwrap().to_minterm(),
            Some(u64::MAX)
        );
    }

    #[test]
    fn test_parse_minterm_list() {
        let assignments = Assignment::parse_minterm_list("0,3,\n5,", 3).unwrap();
        let strings: Vec<_> = assignments.iter().map(|a| a.to_string()).collect();
        assert_eq!(strings, ["000", "011", "101"]);

        assert_eq!(
            Assignment::parse_minterm_list("1,8,", 3),
            Err(ParseError::MintermTooWide {
                minterm: 8,
                width: 3
            })
        );
        assert!(matches!(
            Assignment::parse_minterm_list("99999999999999999999999,", 6),
            Err(ParseError::InvalidMinterm { .. })
        ));
    }
}
