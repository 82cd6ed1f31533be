// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::ParseError, tokens};
use arrayvec::ArrayVec;
use itertools::Itertools;
use once_cell::sync::OnceCell;
use std::{fmt, str::FromStr};

/// The most positions a subset can name. Positions are written as single digits, so this is
/// also the largest position.
pub const MAX_SUBSET_LEN: usize = 9;

/// An ordered selection of 1-based variable positions (a "low index").
///
/// A subset like `136` describes candidate product terms over variables 1, 3 and 6.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionSubset {
    positions: ArrayVec<u8, MAX_SUBSET_LEN>,
}

impl PositionSubset {
    pub fn new(positions: impl IntoIterator<Item = u8>) -> Result<Self, ParseError> {
        let positions: Vec<u8> = positions.into_iter().collect();
        let input = || positions.iter().join("");
        if positions.is_empty() {
            return Err(ParseError::EmptySubset);
        }
        if positions.len() > MAX_SUBSET_LEN {
            return Err(ParseError::SubsetTooLong {
                input: input(),
                max: MAX_SUBSET_LEN,
            });
        }
        if let Some(&bad) = positions
            .iter()
            .find(|&&position| !(1..=MAX_SUBSET_LEN as u8).contains(&position))
        {
            return Err(ParseError::PositionOutOfRange {
                input: input(),
                position: bad,
                max: MAX_SUBSET_LEN,
            });
        }
        Ok(Self {
            positions: positions.into_iter().collect(),
        })
    }

    /// Parses a subset written as a string of digits, e.g. `"136"`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.chars().count() > MAX_SUBSET_LEN {
            return Err(ParseError::SubsetTooLong {
                input: input.to_owned(),
                max: MAX_SUBSET_LEN,
            });
        }
        let positions = input
            .chars()
            .map(|ch| match ch.to_digit(10) {
                Some(digit @ 1..=9) => Ok(digit as u8),
                _ => Err(ParseError::InvalidPosition {
                    input: input.to_owned(),
                    ch,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(positions)
    }

    #[inline]
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn max_position(&self) -> u8 {
        self.positions.iter().copied().max().unwrap_or(0)
    }
}

impl FromStr for PositionSubset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PositionSubset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for position in &self.positions {
            write!(f, "{}", position)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PositionSubset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("PositionSubset")
            .field(&format_args!("{}", self))
            .finish()
    }
}

/// The ordered list of position subsets that defines which candidate terms are considered.
///
/// The order matters: it's the order coefficients appear in every equation, and so it decides
/// which coefficient represents an equation when the cover is built.
#[derive(Clone, Debug, Default)]
pub struct PositionSubsets {
    subsets: Vec<PositionSubset>,
    max_position: OnceCell<u8>,
}

impl PositionSubsets {
    pub fn new(subsets: impl IntoIterator<Item = PositionSubset>) -> Self {
        Self {
            subsets: subsets.into_iter().collect(),
            max_position: OnceCell::new(),
        }
    }

    /// Parses a comma-terminated list of subsets, e.g. `1,2,3,12,13,23,123,`.
    pub fn parse_list(content: &str) -> Result<Self, ParseError> {
        let subsets = tokens::comma_terminated(content)
            .map(PositionSubset::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(subsets))
    }

    /// Returns every non-empty subset of `1..=width`, smallest subsets first and
    /// lexicographically within a size.
    ///
    /// # Examples
    ///
    /// ```
    /// use coeff_min::position::PositionSubsets;
    ///
    /// let subsets = PositionSubsets::all_combinations(3).unwrap();
    /// assert_eq!(subsets.to_string(), "1,2,3,12,13,23,123,");
    /// ```
    pub fn all_combinations(width: usize) -> Result<Self, ParseError> {
        if !(1..=MAX_SUBSET_LEN).contains(&width) {
            return Err(ParseError::WidthOutOfRange {
                width,
                min: 1,
                max: MAX_SUBSET_LEN,
            });
        }
        let subsets = (1..=width)
            .flat_map(|size| (1..=width as u8).combinations(size))
            .map(PositionSubset::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(subsets))
    }

    #[inline]
    pub fn subsets(&self) -> &[PositionSubset] {
        &self.subsets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// The largest position named by any subset, or 0 if there are no subsets.
    pub fn max_position(&self) -> u8 {
        *self.max_position.get_or_init(|| {
            self.subsets
                .iter()
                .map(PositionSubset::max_position)
                .max()
                .unwrap_or(0)
        })
    }
}

impl PartialEq for PositionSubsets {
    fn eq(&self, other: &Self) -> bool {
        self.subsets == other.subsets
    }
}

impl Eq for PositionSubsets {}

impl FromIterator<PositionSubset> for PositionSubsets {
    fn from_iter<T: IntoIterator<Item = PositionSubset>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Writes the list in the comma-terminated format read by [`PositionSubsets::parse_list`].
impl fmt::Display for PositionSubsets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        tokens::write_list(f, &self.subsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subset() {
        let subset = PositionSubset::parse("136").unwrap();
        assert_eq!(subset.positions(), &[1, 3, 6]);
        assert_eq!(subset.max_position(), 6);
        assert_eq!(subset.to_string(), "136");

        let reordered = PositionSubset::parse("31").unwrap();
        assert_eq!(reordered.positions(), &[3, 1], "order is preserved");

        assert_eq!(
            PositionSubset::parse("102"),
            Err(ParseError::InvalidPosition {
                input: "102".to_owned(),
                ch: '0',
            })
        );
        assert_eq!(PositionSubset::parse(""), Err(ParseError::EmptySubset));
        assert!(matches!(
            PositionSubset::parse("1234567891"),
            Err(ParseError::SubsetTooLong { max: 9, .. })
        ));
    }

    #[test]
    fn test_new_subset() {
        assert_eq!(
            PositionSubset::new([1, 12]),
            Err(ParseError::PositionOutOfRange {
                input: "112".to_owned(),
                position: 12,
                max: 9,
            })
        );
        assert!(matches!(
            PositionSubset::new([0]),
            Err(ParseError::PositionOutOfRange { position: 0, .. })
        ));
        assert!(matches!(
            PositionSubset::new([1; 10]),
            Err(ParseError::SubsetTooLong { .. })
        ));
        assert_eq!(PositionSubset::new([]), Err(ParseError::EmptySubset));
    }

    #[test]
    fn test_parse_list() {
        let subsets = PositionSubsets::parse_list("1,2,\n12,\n123,4").unwrap();
        assert_eq!(subsets.len(), 4, "unterminated trailing entry is ignored");
        assert_eq!(subsets.max_position(), 3);
        assert_eq!(subsets.to_string(), "1,2,12,123,");

        let empty = PositionSubsets::parse_list("").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.max_position(), 0);

        assert!(PositionSubsets::parse_list("1,20,").is_err());

        // Only ASCII digits form tokens; other text between them is skipped.
        let subsets = PositionSubsets::parse_list("1,\u{663},2,").unwrap();
        assert_eq!(subsets.to_string(), "1,2,");
    }

    #[test]
    fn test_all_combinations() {
        let subsets = PositionSubsets::all_combinations(4).unwrap();
        assert_eq!(subsets.len(), 15);
        assert_eq!(
            subsets.to_string(),
            "1,2,3,4,12,13,14,23,24,34,123,124,134,234,1234,"
        );
        assert_eq!(subsets.max_position(), 4);

        assert_eq!(PositionSubsets::all_combinations(6).unwrap().len(), 63);
        assert_eq!(PositionSubsets::all_combinations(9).unwrap().len(), 511);
        assert!(PositionSubsets::all_combinations(0).is_err());
        assert!(PositionSubsets::all_combinations(10).is_err());
    }
}
