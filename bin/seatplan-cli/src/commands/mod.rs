// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod assign;
pub mod inspect;

use seating_engine::RunConfig;
use std::path::PathBuf;

/// Initialises the tracing subscriber. Verbosity maps repeated `-v`
/// flags to filter levels; `RUST_LOG` wins when set. Diagnostics go to
/// stderr so stdout stays clean for prompts and tables.
pub fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves the run configuration: TOML file if given, defaults
/// otherwise, with path flags layered on top.
pub fn load_config(
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<RunConfig> {
    let mut cfg = match config {
        Some(path) => RunConfig::from_file(&path)?,
        None => RunConfig::default(),
    };
    if let Some(dir) = data_dir {
        cfg = cfg.with_data_dir(&dir);
    }
    if let Some(out) = output {
        cfg.output_dir = out;
    }
    tracing::debug!(
        students = %cfg.students_path.display(),
        rooms = %cfg.rooms_path.display(),
        output = %cfg.output_dir.display(),
        "run configuration resolved",
    );
    Ok(cfg)
}
