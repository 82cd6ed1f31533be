// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use color_eyre::Result;
use fixture_details::AllFixtures;

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Subcommand)]
pub enum FixtureManagerCommand {
    /// Generate random functions as zeros and ones files
    GenerateInputs {
        #[clap(long, short, default_value_t = 64)]
        count: usize,

        #[clap(long, short, default_value_t = 6)]
        width: usize,
    },
    /// Minimize every fixture and store the result as its expected output
    GenerateOutputs,
    /// Check every fixture against its expected output
    Check,
}

impl FixtureManagerApp {
    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        let fixtures = AllFixtures::get();
        match self {
            Self::GenerateInputs { count, width } => {
                fixtures.generate_inputs(count, width)?;
                Ok(())
            }
            Self::GenerateOutputs => {
                fixtures.generate_outputs()?;
                Ok(())
            }
            Self::Check => {
                let count = fixtures.check()?;
                println!("{} fixtures match", count);
                Ok(())
            }
        }
    }
}
