// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cover::Cover;
use itertools::{Itertools, Position};
use std::{borrow::Cow, fmt};

/// Displays a cover as a sum of products, e.g. `x1-x2+x3`.
///
/// An empty cover displays as nothing; use [`Cover::encode`] to treat that as an error.
pub struct CoverAlgebraicDisplay<'a> {
    cover: &'a Cover,
    separator: Cow<'a, str>,
}

impl<'a> CoverAlgebraicDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            separator: Cow::Borrowed("+"),
        }
    }

    /// Sets the string written between terms. Defaults to `+`.
    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl<'a> fmt::Display for CoverAlgebraicDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for elem in self.cover.coefficients().iter().with_position() {
            match elem {
                Position::First(coefficient) | Position::Middle(coefficient) => {
                    write!(f, "{}{}", coefficient.algebraic_display(), self.separator)?;
                }
                Position::Last(coefficient) | Position::Only(coefficient) => {
                    write!(f, "{}", coefficient.algebraic_display())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficient::coefficient;

    #[test]
    fn test_display() {
        let cover = Cover::new([
            coefficient("10", "12"),
            coefficient("1", "3"),
            coefficient("001", "456"),
        ]);
        let expected = "x1-x2+x3+-x4-x5x6";
        assert_eq!(cover.algebraic_display().to_string(), expected);
        assert_eq!(cover.encode().unwrap(), expected);
        assert_eq!(cover.encode().unwrap(), expected, "encoding is repeatable");

        assert_eq!(
            cover.algebraic_display().with_separator(" + ").to_string(),
            "x1-x2 + x3 + -x4-x5x6"
        );

        let single = Cover::new([coefficient("0", "2")]);
        assert_eq!(single.encode().unwrap(), "-x2");

        assert_eq!(Cover::default().algebraic_display().to_string(), "");
    }
}
