// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    assignment::Assignment,
    coefficient::Coefficient,
    cover::CoverAlgebraicDisplay,
    equation::{Equation, EquationSystem, ForbiddenSet},
    errors::MinimizeError,
};
use log::{debug, trace};

/// How equations are ordered before coefficients are picked greedily.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionHeuristic {
    /// Order equations by the pattern length of their first remaining coefficient.
    ///
    /// This ignores shorter coefficients further along in an equation, so it can miss more
    /// general terms. This is the default.
    FirstCoefficient,

    /// Order equations by the length of their shortest remaining coefficient.
    ShortestCoefficient,
}

impl SelectionHeuristic {
    fn sort_key(self, equation: &Equation) -> usize {
        match self {
            Self::FirstCoefficient => equation.first().map_or(0, Coefficient::pattern_len),
            Self::ShortestCoefficient => equation
                .coefficients()
                .iter()
                .map(Coefficient::pattern_len)
                .min()
                .unwrap_or(0),
        }
    }
}

impl Default for SelectionHeuristic {
    fn default() -> Self {
        Self::FirstCoefficient
    }
}

/// A set of coefficients such that every one-assignment's equation contains at least one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    coefficients: Vec<Coefficient>,
}

impl Cover {
    pub fn new(coefficients: impl IntoIterator<Item = Coefficient>) -> Self {
        Self {
            coefficients: coefficients.into_iter().collect(),
        }
    }

    /// Greedily selects a cover for `system`, never picking a coefficient in `forbidden`.
    ///
    /// Forbidden coefficients are stripped from every equation and the equations are sorted
    /// (stably) according to `heuristic`. Walking the sorted equations, the first coefficient
    /// of each equation not yet hit by the cover is added to it.
    ///
    /// Returns an error if `system` is empty, or if some equation has no coefficients left
    /// once forbidden ones are removed. In the latter case the first such one-assignment (in
    /// input order) is reported.
    pub fn select(
        system: &EquationSystem,
        forbidden: &ForbiddenSet,
        heuristic: SelectionHeuristic,
    ) -> Result<Self, MinimizeError> {
        if system.is_empty() {
            return Err(MinimizeError::NoOneAssignments);
        }

        let mut equations = system
            .equations()
            .iter()
            .map(|equation| {
                let stripped = equation.without(forbidden);
                if stripped.is_empty() {
                    Err(MinimizeError::Uncoverable {
                        assignment: equation.assignment().clone(),
                    })
                } else {
                    Ok(stripped)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        equations.sort_by_key(|equation| heuristic.sort_key(equation));

        let mut coefficients: Vec<Coefficient> = Vec::new();
        for equation in &equations {
            if coefficients.iter().any(|c| equation.contains(c)) {
                trace!("{} is already covered", equation.assignment());
                continue;
            }
            if let Some(first) = equation.first() {
                trace!(
                    "{} is not covered, selecting {}",
                    equation.assignment(),
                    first.algebraic_display()
                );
                coefficients.push(first.clone());
            }
        }

        debug!(
            "selected {} coefficients to cover {} equations",
            coefficients.len(),
            equations.len()
        );
        Ok(Self { coefficients })
    }

    #[inline]
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients
    }

    #[inline]
    pub fn term_count(&self) -> usize {
        self.coefficients.len()
    }

    /// The total number of literals over all terms.
    pub fn literal_count(&self) -> usize {
        self.coefficients.iter().map(Coefficient::pattern_len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns the value of the sum-of-products expression for `assignment`.
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        self.coefficients
            .iter()
            .any(|coefficient| coefficient.matches(assignment))
    }

    #[inline]
    pub fn algebraic_display(&self) -> CoverAlgebraicDisplay<'_> {
        CoverAlgebraicDisplay::new(self)
    }

    /// Renders the cover as a sum-of-products expression such as `x1-x2+x3`.
    ///
    /// Returns an error if the cover is empty, since there's no expression to render.
    pub fn encode(&self) -> Result<String, MinimizeError> {
        if self.is_empty() {
            return Err(MinimizeError::EmptyCover);
        }
        Ok(self.algebraic_display().to_string())
    }
}
