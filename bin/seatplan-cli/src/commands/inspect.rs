// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `seatplan inspect` command: display the input tables and the quota
//! plan they would produce, without assigning or writing anything.

use roster_model::RosterLoader;
use seat_planner::compute_quotas;
use std::path::PathBuf;

pub fn execute(config: Option<PathBuf>, data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             seatplan · Roster Inspector             ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let cfg = super::load_config(config, data_dir, None)?;
    let roster = RosterLoader::load(&cfg.students_path, &cfg.rooms_path, &cfg.seats_dir)
        .map_err(|e| anyhow::anyhow!("failed to load roster: {e}"))?;

    // ── Summary ────────────────────────────────────────────────
    println!("  {}", roster.summary());
    println!();

    // ── Per-Room Detail ────────────────────────────────────────
    println!(
        "  {:<10} {:<24} {:>8} {:>8} {:>10}",
        "Room", "Name", "Capacity", "Seats", "Available",
    );
    println!("  {}", "-".repeat(64));
    for room in roster.iter_rooms() {
        println!(
            "  {:<10} {:<24} {:>8} {:>8} {:>10}",
            room.id.as_str(),
            truncate(&room.name, 24),
            room.capacity,
            room.seats().len(),
            room.available_seat_count(),
        );
    }
    println!();

    // ── Quota Plan ─────────────────────────────────────────────
    match compute_quotas(&roster) {
        Ok(plan) => {
            println!("  {}", plan.summary());
            println!();
            println!("  {:<10} {:>10} {:>8} {:>10}", "Room", "Available", "Quota", "Spare");
            println!("  {}", "-".repeat(42));
            for rq in &plan.rooms {
                println!(
                    "  {:<10} {:>10} {:>8} {:>10}",
                    rq.room.as_str(),
                    rq.available_seats,
                    rq.quota,
                    rq.available_seats - rq.quota,
                );
            }
        }
        Err(e) => println!("  Quota plan unavailable: {e}"),
    }
    println!();

    Ok(())
}

/// Truncates a string to `max_len` with ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{prefix}...")
    }
}
