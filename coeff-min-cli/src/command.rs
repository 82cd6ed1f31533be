// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgEnum, Parser, Subcommand};
use coeff_min::{
    cover::SelectionHeuristic, logic_function::LogicFunction, minimize::Minimizer,
    position::PositionSubsets,
};
use color_eyre::{eyre::WrapErr, Result};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fs;

/// Minimize Boolean functions with the method of undetermined coefficients.
#[derive(Debug, Parser)]
#[clap(name = "coeff-min", version)]
pub struct CoeffMinApp {
    /// Log more detail to stderr (-v for info, -vv for debug, -vvv for trace)
    #[clap(long, short, global = true, parse(from_occurrences))]
    verbose: u64,

    #[clap(subcommand)]
    command: CoeffMinCommand,
}

#[derive(Debug, Subcommand)]
pub enum CoeffMinCommand {
    /// Minimize the function given by a zeros file and a ones file
    Minimize {
        /// File of comma-terminated minterm indexes the function is 0 on
        #[clap(long)]
        zeros: Utf8PathBuf,

        /// File of comma-terminated minterm indexes the function is 1 on
        #[clap(long)]
        ones: Utf8PathBuf,

        /// File of comma-terminated position subsets [default: every subset of the variables]
        #[clap(long)]
        low_indexes: Option<Utf8PathBuf>,

        /// Number of variables
        #[clap(long, short, default_value_t = 6)]
        width: usize,

        /// How equations are ordered before picking terms
        #[clap(long, arg_enum, default_value = "first-coefficient")]
        heuristic: HeuristicArg,

        /// Check the result against both minterm lists before printing it
        #[clap(long)]
        verify: bool,
    },

    /// Print every position subset for a width, in low-index file format
    LowIndexes {
        /// Number of variables
        #[clap(long, short, default_value_t = 6)]
        width: usize,
    },
}

#[derive(ArgEnum, Copy, Clone, Debug)]
pub enum HeuristicArg {
    FirstCoefficient,
    ShortestCoefficient,
}

impl From<HeuristicArg> for SelectionHeuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::FirstCoefficient => SelectionHeuristic::FirstCoefficient,
            HeuristicArg::ShortestCoefficient => SelectionHeuristic::ShortestCoefficient,
        }
    }
}

impl CoeffMinApp {
    pub fn exec(self) -> Result<()> {
        init_logging(self.verbose)?;
        self.command.exec()
    }
}

impl CoeffMinCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::Minimize {
                zeros,
                ones,
                low_indexes,
                width,
                heuristic,
                verify,
            } => {
                let expression = minimize_files(
                    &zeros,
                    &ones,
                    low_indexes.as_deref(),
                    width,
                    heuristic.into(),
                    verify,
                )?;
                println!("{}", expression);
                Ok(())
            }
            Self::LowIndexes { width } => {
                println!("{}", all_combinations(width)?);
                Ok(())
            }
        }
    }
}

/// Minimizes the function stored in `zeros` and `ones`, returning the encoded expression.
pub fn minimize_files(
    zeros: &Utf8Path,
    ones: &Utf8Path,
    low_indexes: Option<&Utf8Path>,
    width: usize,
    heuristic: SelectionHeuristic,
    verify: bool,
) -> Result<String> {
    let function =
        LogicFunction::parse_minterm_lists(&read_input(zeros)?, &read_input(ones)?, width)
            .wrap_err_with(|| format!("failed to parse minterms in {} and {}", zeros, ones))?;

    let subsets = match low_indexes {
        Some(path) => PositionSubsets::parse_list(&read_input(path)?)
            .wrap_err_with(|| format!("failed to parse low indexes in {}", path))?,
        None => all_combinations(width)?,
    };
    info!(
        "read {} zeros, {} ones and {} position subsets",
        function.off_set.len(),
        function.on_set.len(),
        subsets.len()
    );

    let minimizer = Minimizer::new(&subsets).with_heuristic(heuristic);
    let cover = function
        .minimize_to_cover(&minimizer)
        .wrap_err("minimization failed")?;
    if verify {
        function
            .verify(&cover)
            .wrap_err("minimized expression does not match the input")?;
        info!("verified {} terms", cover.term_count());
    }

    Ok(cover.encode()?)
}

fn all_combinations(width: usize) -> Result<PositionSubsets> {
    PositionSubsets::all_combinations(width).wrap_err_with(|| {
        format!(
            "cannot enumerate position subsets for width {} (use --low-indexes instead)",
            width
        )
    })
}

fn read_input(path: &Utf8Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path))
}

fn init_logging(verbose: u64) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
