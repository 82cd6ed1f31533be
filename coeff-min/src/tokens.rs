// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The comma-terminated list format shared by minterm files and low-index files.
//!
//! A list is a sequence of ASCII decimal tokens, each immediately followed by a comma, e.g.
//! `1,2,3,12,13,`. Anything that isn't part of such a token is ignored, including
//! whitespace, line breaks and a final token with no comma after it.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+),").expect("token regex is valid"));

/// Returns the comma-terminated decimal tokens in `content`, in order.
pub(crate) fn comma_terminated(content: &str) -> impl Iterator<Item = &str> + '_ {
    TOKEN_RE
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Writes `items` in the comma-terminated list format.
pub(crate) fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for item in items {
        write!(f, "{},", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_terminated() {
        let tokens: Vec<_> = comma_terminated("1,2,\n 13, 123,45").collect();
        assert_eq!(tokens, ["1", "2", "13", "123"], "trailing token without comma is dropped");

        assert_eq!(comma_terminated("").count(), 0);
        assert_eq!(comma_terminated("12 13 14").count(), 0);

        let tokens: Vec<_> = comma_terminated("1,\u{663},2,\u{0663}4,").collect();
        assert_eq!(tokens, ["1", "2", "4"], "non-ASCII digits are not part of a token");
    }
}
