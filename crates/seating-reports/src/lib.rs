// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # seating-reports
//!
//! Output generation for the exam seating toolkit.
//!
//! Given a fully bound roster, the crate writes:
//! - `output_students.csv` — one row per student with the assigned
//!   room and seat names.
//! - `rooms/<room_id>.csv` — one sheet per room, one row per occupied
//!   seat, plus two blank columns ("actual seat", "signature") left for
//!   manual annotation after printing.
//! - `logs/report.txt` — the human-readable run report, including each
//!   room's unassigned seat names for operator auditing.
//!
//! Every CSV starts with a UTF-8 BOM so spreadsheet tools pick the
//! right encoding. Reports are only written after assignment succeeds;
//! an unwritable destination surfaces the offending path.

mod error;
mod paths;
mod report;
mod sheets;

pub use error::ReportError;
pub use paths::ReportPaths;
pub use report::{write_run_report, RunSummary};
pub use sheets::{write_room_sheets, write_student_sheet, RoomSheet};

use roster_model::{roster::Validated, Roster};
use std::path::PathBuf;

/// Everything one report run produced.
#[derive(Debug)]
pub struct ReportBundle {
    pub students_csv: PathBuf,
    pub students_written: usize,
    pub room_sheets: Vec<RoomSheet>,
    pub run_report: PathBuf,
}

/// Writes the full report set: student sheet, one sheet per room, and
/// the run report.
pub fn write_all(
    roster: &Roster<Validated>,
    summary: &RunSummary,
    paths: &ReportPaths,
) -> Result<ReportBundle, ReportError> {
    let students_csv = paths.students_csv();
    let students_written = write_student_sheet(roster, &students_csv)?;
    let room_sheets = write_room_sheets(roster, paths)?;
    let run_report = paths.run_report();
    write_run_report(&run_report, summary, &room_sheets)?;

    tracing::info!(
        students = students_written,
        rooms = room_sheets.len(),
        output = %paths.output_dir().display(),
        "reports written",
    );

    Ok(ReportBundle {
        students_csv,
        students_written,
        room_sheets,
        run_report,
    })
}
