// Copyright (c) The coeff-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use coeff_min_cli::CoeffMinApp;
use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let app = CoeffMinApp::parse();
    app.exec()
}
