// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::assignment::Assignment;
use thiserror::Error;

/// An error produced while minimizing a function.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MinimizeError {
    /// The list of position subsets is empty, so no coefficient can be built.
    #[error("no position subsets were supplied")]
    NoPositionSubsets,

    /// A position subset refers to a variable past the end of an assignment.
    #[error("position {position} is out of range for assignment {assignment} of width {width}")]
    PositionOutOfRange {
        assignment: Assignment,
        position: u8,
        width: usize,
    },

    /// There are no one-assignments to seed the cover with.
    #[error("no one-assignments were supplied")]
    NoOneAssignments,

    /// Every coefficient of this one-assignment is also produced by some zero-assignment.
    #[error("one-assignment {assignment} has no coefficient that avoids every zero-assignment")]
    Uncoverable { assignment: Assignment },

    /// An empty cover has no expression.
    #[error("cannot encode an empty cover")]
    EmptyCover,
}

impl MinimizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoPositionSubsets | Self::PositionOutOfRange { .. } => ErrorKind::MalformedInput,
            Self::NoOneAssignments | Self::Uncoverable { .. } | Self::EmptyCover => {
                ErrorKind::EmptyCover
            }
        }
    }
}

/// Coarse classification of a [`MinimizeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The inputs violate the minimizer's contract.
    MalformedInput,
    /// No cover exists, or there is nothing to render.
    EmptyCover,
}

/// An error produced while parsing assignments, minterm lists or position subsets.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid character {ch:?} at index {index} of assignment {input:?} (expected '0' or '1')")]
    InvalidAssignment {
        input: String,
        index: usize,
        ch: char,
    },

    #[error("invalid position {ch:?} in position subset {input:?} (expected a digit 1-9)")]
    InvalidPosition { input: String, ch: char },

    #[error("position {position} in position subset {input:?} is out of range (expected 1..={max})")]
    PositionOutOfRange {
        input: String,
        position: u8,
        max: usize,
    },

    #[error("position subset {input:?} has more than {max} positions")]
    SubsetTooLong { input: String, max: usize },

    #[error("position subset is empty")]
    EmptySubset,

    #[error("width {width} is out of range (expected {min}..={max})")]
    WidthOutOfRange {
        width: usize,
        min: usize,
        max: usize,
    },

    #[error("minterm {token:?} is not a valid decimal number")]
    InvalidMinterm { token: String },

    #[error("minterm {minterm} does not fit in {width} bits")]
    MintermTooWide { minterm: u64, width: usize },
}
