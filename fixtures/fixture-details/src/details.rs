// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use coeff_min::{
    assignment::Assignment, logic_function::LogicFunction, minimize::Minimizer,
    position::PositionSubsets,
};
use color_eyre::{
    eyre::{bail, eyre, WrapErr},
    Result,
};
use std::fs;

/// A single fixture: a function stored as a zeros file and a ones file, plus the expected
/// minimized expression.
///
/// Fixture names look like `w4-007`, where the number after `w` is the function's width.
#[derive(Clone, Debug)]
pub struct FixtureDetails {
    name: String,
    width: usize,
    function: LogicFunction,
}

impl FixtureDetails {
    pub fn new(width: usize, ix: usize, function: LogicFunction) -> Self {
        Self {
            name: format!("w{}-{:03}", width, ix),
            width,
            function,
        }
    }

    /// Loads the inputs for the fixture `name` from `dir`.
    pub fn load(dir: &Utf8Path, name: &str) -> Result<Self> {
        let width = parse_width(name)?;
        let zeros = read(&dir.join(format!("{}.zeros", name)))?;
        let ones = read(&dir.join(format!("{}.ones", name)))?;
        let function = LogicFunction::parse_minterm_lists(&zeros, &ones, width)
            .wrap_err_with(|| format!("failed to parse fixture {}", name))?;
        Ok(Self {
            name: name.to_owned(),
            width,
            function,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn function(&self) -> &LogicFunction {
        &self.function
    }

    pub fn expected_path(&self, dir: &Utf8Path) -> Utf8PathBuf {
        dir.join(format!("{}.expected", self.name))
    }

    pub fn write_inputs(&self, dir: &Utf8Path) -> Result<()> {
        write(
            &dir.join(format!("{}.zeros", self.name)),
            &minterm_list(&self.function.off_set)?,
        )?;
        write(
            &dir.join(format!("{}.ones", self.name)),
            &minterm_list(&self.function.on_set)?,
        )
    }

    /// Minimizes the function over every position subset and checks the result against it.
    pub fn compute_output(&self) -> Result<String> {
        let subsets = PositionSubsets::all_combinations(self.width)?;
        let cover = self
            .function
            .minimize_to_cover(&Minimizer::new(&subsets))
            .wrap_err_with(|| format!("failed to minimize fixture {}", self.name))?;
        self.function
            .verify(&cover)
            .wrap_err_with(|| format!("fixture {} minimized incorrectly", self.name))?;
        Ok(cover.encode()?)
    }

    /// Computes the output and stores it as the expected output, returning it.
    pub fn write_output(&self, dir: &Utf8Path) -> Result<String> {
        let output = self.compute_output()?;
        write(&self.expected_path(dir), &format!("{}\n", output))?;
        Ok(output)
    }

    /// Checks that the computed output matches the stored expected output.
    pub fn check_output(&self, dir: &Utf8Path) -> Result<()> {
        let expected = read(&self.expected_path(dir))?;
        let actual = self.compute_output()?;
        if expected.trim_end() != actual {
            bail!(
                "fixture {}: expected {}, got {}",
                self.name,
                expected.trim_end(),
                actual
            );
        }
        Ok(())
    }
}

fn parse_width(name: &str) -> Result<usize> {
    name.strip_prefix('w')
        .and_then(|rest| rest.split('-').next())
        .and_then(|width| width.parse().ok())
        .ok_or_else(|| eyre!("fixture name {} should look like w<width>-<index>", name))
}

fn minterm_list(assignments: &[Assignment]) -> Result<String> {
    let mut out = String::new();
    for assignment in assignments {
        let minterm = assignment
            .to_minterm()
            .ok_or_else(|| eyre!("assignment {} is too wide for a minterm", assignment))?;
        out.push_str(&format!("{},", minterm));
    }
    Ok(out)
}

fn read(path: &Utf8Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path))
}

fn write(path: &Utf8Path, contents: &str) -> Result<()> {
    fs::write(path, contents).wrap_err_with(|| format!("failed to write {}", path))
}
