// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimizes completely specified Boolean functions into sum-of-products form using a
//! heuristic variant of the method of undetermined coefficients.
//!
//! Every one-assignment of the function yields an *equation*: one candidate term (a
//! *coefficient*) per position subset. Coefficients that some zero-assignment also yields are
//! forbidden, and a cover is picked greedily from what's left. The result is small, but not
//! guaranteed to be minimal.

pub mod assignment;
pub mod coefficient;
pub mod cover;
pub mod equation;
pub mod errors;
pub mod logic_function;
pub mod minimize;
pub mod position;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
mod tokens;

pub use minimize::minimize;
