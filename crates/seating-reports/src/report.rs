// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The human-readable run report.
//!
//! A plain-text summary written next to the CSV sheets: the run
//! configuration (draw mode and seed), totals, and one block per room
//! with its capacity, assigned-seat count, and the names of seats left
//! unassigned — the list invigilators check against the printed
//! sheets.

use crate::{ReportError, RoomSheet};
use std::fs;
use std::io::Write;
use std::path::Path;

const RULE: &str = "========================================================================";

/// Run-level facts echoed at the top of the report.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Draw strategy name ("seeded-random" or "sorted-order").
    pub mode: String,
    /// The seed as the user supplied it; `None` in deterministic mode.
    pub seed: Option<String>,
    pub total_students: usize,
    pub total_available_seats: usize,
}

/// Writes the run report.
pub fn write_run_report(
    path: &Path,
    summary: &RunSummary,
    sheets: &[RoomSheet],
) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\nSEATING RUN REPORT\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Draw mode:       {}\n", summary.mode));
    match &summary.seed {
        Some(seed) => out.push_str(&format!("Seed:            {seed}\n")),
        None => out.push_str("Seed:            (none, deterministic run)\n"),
    }
    out.push_str(&format!("Students:        {}\n", summary.total_students));
    out.push_str(&format!(
        "Available seats: {}\n",
        summary.total_available_seats,
    ));

    for sheet in sheets {
        out.push_str(&format!("\n--- Room {} ({}) ---\n", sheet.room, sheet.room_name));
        out.push_str(&format!("Capacity:         {}\n", sheet.capacity));
        out.push_str(&format!("Assigned seats:   {}\n", sheet.assigned_seats));
        out.push_str(&format!(
            "Unassigned seats: {}\n",
            sheet.unassigned_seat_names.len(),
        ));
        if !sheet.unassigned_seat_names.is_empty() {
            out.push_str(&format!(
                "Unassigned names: {}\n",
                sheet.unassigned_seat_names.join(", "),
            ));
        }
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');

    let mut file = fs::File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(out.as_bytes())
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), rooms = sheets.len(), "run report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_sheets() -> Vec<RoomSheet> {
        vec![
            RoomSheet {
                room: "R1".into(),
                room_name: "Room One".into(),
                capacity: 30,
                assigned_seats: 28,
                unassigned_seat_names: vec!["A-29".into(), "A-30".into()],
                path: PathBuf::from("generated/rooms/R1.csv"),
            },
            RoomSheet {
                room: "R2".into(),
                room_name: "Room Two".into(),
                capacity: 10,
                assigned_seats: 10,
                unassigned_seat_names: vec![],
                path: PathBuf::from("generated/rooms/R2.csv"),
            },
        ]
    }

    #[test]
    fn test_report_lists_unassigned_seat_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("report.txt");
        let summary = RunSummary {
            mode: "seeded-random".into(),
            seed: Some("midterm 2025".into()),
            total_students: 38,
            total_available_seats: 40,
        };

        write_run_report(&path, &summary, &sample_sheets()).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert!(text.contains("Draw mode:       seeded-random"));
        assert!(text.contains("Seed:            midterm 2025"));
        assert!(text.contains("Room R1"));
        assert!(text.contains("A-29, A-30"));
        assert!(text.contains("Unassigned seats: 0"));
    }

    #[test]
    fn test_deterministic_run_has_no_seed_line_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let summary = RunSummary {
            mode: "sorted-order".into(),
            seed: None,
            total_students: 5,
            total_available_seats: 8,
        };

        write_run_report(&path, &summary, &[]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("(none, deterministic run)"));
    }
}
