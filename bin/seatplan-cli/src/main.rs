// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # seatplan
//!
//! Command-line interface for the exam seating toolkit.
//!
//! ## Usage
//! ```bash
//! # Assign seats interactively (prompts for random mode and seed)
//! seatplan assign --data-dir ./database --output ./generated
//!
//! # Reproducible run without prompts
//! seatplan assign --data-dir ./database --seed "midterm 2025"
//!
//! # Deterministic run: sorted students, first-N seats
//! seatplan assign --data-dir ./database --deterministic
//!
//! # Inspect the input tables and the quota plan they would produce
//! seatplan inspect --data-dir ./database
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seatplan",
    about = "Proportional exam seat assignment with reproducible draws",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (flags override its values).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign seats to students and write the report files.
    Assign {
        /// Root of the input tables (contains students/ and rooms/).
        #[arg(short, long)]
        data_dir: Option<std::path::PathBuf>,

        /// Directory the reports are written under.
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,

        /// Force random mode without prompting.
        #[arg(long, conflicts_with = "deterministic")]
        random: bool,

        /// Force deterministic (sorted-order) mode without prompting.
        #[arg(long)]
        deterministic: bool,

        /// Seed for random mode (any string; implies --random).
        #[arg(short, long, conflicts_with = "deterministic")]
        seed: Option<String>,
    },

    /// Inspect the input tables: rooms, availability, and the quota
    /// plan they would produce.
    Inspect {
        /// Root of the input tables (contains students/ and rooms/).
        #[arg(short, long)]
        data_dir: Option<std::path::PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Assign {
            data_dir,
            output,
            random,
            deterministic,
            seed,
        } => commands::assign::execute(cli.config, data_dir, output, random, deterministic, seed),
        Commands::Inspect { data_dir } => commands::inspect::execute(cli.config, data_dir),
    }
}
