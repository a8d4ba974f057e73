// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `seatplan assign` command: run the full pipeline and write reports.
//!
//! Mode resolution order: `--seed`/`--random`/`--deterministic` flags
//! win; a `--config` file's values are used as-is; with neither, the
//! command asks interactively. The prompts accept only `y`/`yes`/`n`/
//! `no` (case-insensitive) and re-ask on anything else — ambiguous
//! input never silently picks a mode.

use seat_planner::TraceSink;
use seating_engine::SeatingEngine;
use seating_reports::{ReportPaths, RunSummary};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub fn execute(
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    random: bool,
    deterministic: bool,
    seed: Option<String>,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             seatplan · Seat Assignment              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Configuration ──────────────────────────────────────────
    let from_file = config.is_some();
    let mut cfg = super::load_config(config, data_dir, output)?;

    if let Some(seed) = seed {
        cfg.random_mode = true;
        cfg.seed = Some(seed);
    } else if random {
        cfg.random_mode = true;
    } else if deterministic {
        cfg.random_mode = false;
        cfg.seed = None;
    } else if !from_file {
        // Interactive fallback, validated explicitly.
        cfg.random_mode = prompt_yes_no("Do you want to enable random mode?")?;
        cfg.seed = None;
        if cfg.random_mode {
            if prompt_yes_no("Do you want to set a custom seed?")? {
                cfg.seed = Some(prompt_line("Enter your custom seed: ")?);
            } else {
                println!("Using the current time as seed.");
            }
        }
        println!();
    }

    println!("  Config:");
    println!("   Students: {}", cfg.students_path.display());
    println!("   Rooms:    {}", cfg.rooms_path.display());
    println!("   Seats:    {}", cfg.seats_dir.display());
    println!("   Output:   {}", cfg.output_dir.display());
    println!(
        "   Mode:     {}",
        if cfg.random_mode { "random" } else { "deterministic" },
    );
    if let Some(seed) = &cfg.seed {
        println!("   Seed:     {seed}");
    }
    println!();

    // ── Pipeline ───────────────────────────────────────────────
    println!("  [1/3] Loading students, rooms, and seats...");
    let loaded = SeatingEngine::new(cfg.clone()).load_roster()?;
    println!("        {}", loaded.roster().summary());
    println!();

    println!("  [2/3] Planning quotas and assigning seats...");
    let planned = loaded.plan()?;
    println!("        {}", planned.quota_plan().summary());
    let outcome = planned.assign(&mut TraceSink)?;
    println!("        {}", outcome.summary());
    println!();

    // ── Reports ────────────────────────────────────────────────
    println!("  [3/3] Writing reports...");
    let paths = ReportPaths::new(&cfg.output_dir);
    let summary = RunSummary {
        mode: outcome.mode.clone(),
        seed: outcome.seed.as_ref().map(|s| s.to_string()),
        total_students: outcome.plan.total_students,
        total_available_seats: outcome.plan.total_available_seats,
    };
    let bundle = seating_reports::write_all(&outcome.roster, &summary, &paths)?;
    println!(
        "        {} students → {}",
        bundle.students_written,
        bundle.students_csv.display(),
    );
    println!(
        "        {} room sheets → {}",
        bundle.room_sheets.len(),
        paths.rooms_dir().display(),
    );
    println!("        run report → {}", bundle.run_report.display());
    println!();

    println!("  Seat assignment completed successfully.");
    Ok(())
}

/// Asks a yes/no question until the answer is unambiguous.
fn prompt_yes_no(question: &str) -> anyhow::Result<bool> {
    let stdin = std::io::stdin();
    loop {
        print!("{question} (y/n): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed while waiting for a y/n answer");
        }
        match parse_yes_no(&line) {
            Some(answer) => return Ok(answer),
            None => println!("Please answer 'y' or 'n' (got '{}').", line.trim()),
        }
    }
}

/// Maps an answer line to a decision; anything ambiguous is `None` and
/// re-prompted rather than silently defaulting.
fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Reads one non-empty line.
fn prompt_line(question: &str) -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    loop {
        print!("{question}");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed while waiting for input");
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        println!("Please enter a value.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no_accepts_both_spellings() {
        assert_eq!(parse_yes_no("y\n"), Some(true));
        assert_eq!(parse_yes_no("YES\n"), Some(true));
        assert_eq!(parse_yes_no("n\n"), Some(false));
        assert_eq!(parse_yes_no("  No \n"), Some(false));
    }

    #[test]
    fn test_parse_yes_no_rejects_everything_else() {
        assert_eq!(parse_yes_no("\n"), None);
        assert_eq!(parse_yes_no("maybe\n"), None);
        assert_eq!(parse_yes_no("yep\n"), None);
    }
}
