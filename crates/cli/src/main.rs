// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use flowrs::Cli;

fn main() {
    let cli = Cli::parse();
    flowrs::logging::init();
    if let Err(e) = flowrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
