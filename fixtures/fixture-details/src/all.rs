// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{details::FixtureDetails, value_generator::ValueGenerator};
use camino::{Utf8Path, Utf8PathBuf};
use coeff_min::{position::MAX_SUBSET_LEN, proptest_helpers::logic_function};
use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use once_cell::sync::Lazy;
use std::fs;

pub struct AllFixtures {
    dir: Utf8PathBuf,
}

static ALL_FIXTURES_STATIC: Lazy<AllFixtures> = Lazy::new(AllFixtures::init);

impl AllFixtures {
    pub fn get() -> &'static Self {
        &*ALL_FIXTURES_STATIC
    }

    fn init() -> Self {
        let dir: Utf8PathBuf = env!("CARGO_MANIFEST_DIR").into();
        let dir = match dir.parent() {
            Some(parent) => parent.join("data"),
            None => dir.join("data"),
        };
        Self { dir }
    }

    pub fn with_dir(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[inline]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Generates `count` random functions of `width` variables and writes them out as inputs.
    ///
    /// The same width and count always produce the same fixtures. `width` must be between 1
    /// and `MAX_SUBSET_LEN`, since outputs are computed over every position subset.
    pub fn generate_inputs(&self, count: usize, width: usize) -> Result<()> {
        if !(1..=MAX_SUBSET_LEN).contains(&width) {
            bail!(
                "width {} is out of range (must be between 1 and {})",
                width,
                MAX_SUBSET_LEN
            );
        }
        fs::create_dir_all(&self.dir)
            .wrap_err_with(|| format!("failed to create {}", self.dir))?;
        let mut value_gen = ValueGenerator::from_seed(format!("coeff-min_{}", width));

        for ix in 0..count {
            let mut gen = value_gen.partial_clone();
            let function = gen.generate(logic_function(width));
            FixtureDetails::new(width, ix, function).write_inputs(&self.dir)?;
        }

        println!("generated {} inputs of width {} in {}", count, width, self.dir);
        Ok(())
    }

    /// Loads every fixture in the directory, sorted by name.
    pub fn fixtures(&self) -> Result<Vec<FixtureDetails>> {
        let mut names = Vec::new();
        let entries =
            fs::read_dir(&self.dir).wrap_err_with(|| format!("failed to read {}", self.dir))?;
        for entry in entries {
            let path = Utf8PathBuf::try_from(entry?.path())?;
            if path.extension() == Some("zeros") {
                if let Some(name) = path.file_stem() {
                    names.push(name.to_owned());
                }
            }
        }
        names.sort();

        names
            .iter()
            .map(|name| FixtureDetails::load(&self.dir, name))
            .collect()
    }

    /// Minimizes every fixture and writes its expected output.
    pub fn generate_outputs(&self) -> Result<usize> {
        let fixtures = self.fixtures()?;
        let mut literal_count = 0;
        for fixture in &fixtures {
            let output = fixture.write_output(&self.dir)?;
            literal_count += output.matches('x').count();
        }

        println!(
            "wrote {} outputs ({} literals in total)",
            fixtures.len(),
            literal_count
        );
        Ok(fixtures.len())
    }

    /// Checks every fixture against its expected output.
    pub fn check(&self) -> Result<usize> {
        let fixtures = self.fixtures()?;
        for fixture in &fixtures {
            fixture.check_output(&self.dir)?;
        }
        Ok(fixtures.len())
    }
}
