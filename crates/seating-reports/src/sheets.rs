// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CSV sheet writers.
//!
//! The student sheet lists every student sorted by id; students that
//! ended up unassigned keep their row with blank room/seat columns.
//! Room sheets list only occupied seats, in ascending seat-id order,
//! and carry two empty columns for the invigilator to fill in by hand
//! ("actual seat", "signature"). Unassigned seats are omitted from the
//! sheet but collected into [`RoomSheet`] for the run report.

use crate::{ReportError, ReportPaths};
use roster_model::{roster::Validated, Room, RoomId, Roster};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Byte-order mark prefixed to every CSV so spreadsheet tools detect
/// UTF-8 (the `utf-8-sig` convention).
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

const STUDENT_SHEET_HEADER: [&str; 4] = ["student_id", "student_name", "room_name", "seat_name"];
const ROOM_SHEET_HEADER: [&str; 5] = [
    "student_id",
    "student_name",
    "seat_name",
    "actual_seat",
    "signature",
];

/// One row of the student sheet.
#[derive(Debug, serde::Serialize)]
struct StudentSheetRow<'a> {
    student_id: &'a str,
    student_name: &'a str,
    room_name: &'a str,
    seat_name: &'a str,
}

/// One row of a room sheet. The last two columns are reserved for
/// manual annotation and always written empty.
#[derive(Debug, serde::Serialize)]
struct RoomSheetRow<'a> {
    student_id: &'a str,
    student_name: &'a str,
    seat_name: &'a str,
    actual_seat: &'a str,
    signature: &'a str,
}

/// Statistics for one written room sheet, consumed by the run report.
#[derive(Debug, Clone)]
pub struct RoomSheet {
    pub room: RoomId,
    pub room_name: String,
    pub capacity: usize,
    pub assigned_seats: usize,
    /// Names of seats without a student, sorted by name.
    pub unassigned_seat_names: Vec<String>,
    pub path: PathBuf,
}

/// Writes the student sheet and returns the number of rows.
pub fn write_student_sheet(
    roster: &Roster<Validated>,
    path: &Path,
) -> Result<usize, ReportError> {
    let mut writer = sheet_writer(path)?;
    writer
        .write_record(STUDENT_SHEET_HEADER)
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows = 0;

    for student in roster.iter_students() {
        let report = match roster.student_report(&student.id) {
            Some(report) => report,
            None => continue,
        };
        writer
            .serialize(StudentSheetRow {
                student_id: report.id.as_str(),
                student_name: &report.name,
                room_name: report.room_name.as_deref().unwrap_or(""),
                seat_name: report.seat_name.as_deref().unwrap_or(""),
            })
            .map_err(|source| ReportError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        rows += 1;
    }

    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(rows, path = %path.display(), "student sheet written");
    Ok(rows)
}

/// Writes one sheet per room, in ascending room-id order.
pub fn write_room_sheets(
    roster: &Roster<Validated>,
    paths: &ReportPaths,
) -> Result<Vec<RoomSheet>, ReportError> {
    let mut rooms: Vec<&Room> = roster.iter_rooms().collect();
    rooms.sort_by(|a, b| a.id.cmp(&b.id));

    let mut sheets = Vec::with_capacity(rooms.len());
    for room in rooms {
        sheets.push(write_room_sheet(roster, room, &paths.room_csv(&room.id))?);
    }
    Ok(sheets)
}

/// Writes one room's sheet: occupied seats only, seats iterated in
/// ascending id order.
fn write_room_sheet(
    roster: &Roster<Validated>,
    room: &Room,
    path: &Path,
) -> Result<RoomSheet, ReportError> {
    let mut writer = sheet_writer(path)?;
    writer
        .write_record(ROOM_SHEET_HEADER)
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut assigned = 0;

    for seat_id in room.seats().keys() {
        let report = match roster.seat_report(&room.id, seat_id) {
            Some(report) => report,
            None => continue,
        };
        if report.is_unassigned() {
            continue;
        }
        writer
            .serialize(RoomSheetRow {
                student_id: report.student_id.as_ref().map(|id| id.as_str()).unwrap_or(""),
                student_name: report.student_name.as_deref().unwrap_or(""),
                seat_name: &report.seat_name,
                actual_seat: "",
                signature: "",
            })
            .map_err(|source| ReportError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        assigned += 1;
    }

    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let unassigned_seat_names = room.unassigned_seat_names();
    tracing::info!(
        room = %room.id,
        assigned,
        unassigned = unassigned_seat_names.len(),
        unassigned_names = ?unassigned_seat_names,
        "room sheet written",
    );

    Ok(RoomSheet {
        room: room.id.clone(),
        room_name: room.name.clone(),
        capacity: room.capacity,
        assigned_seats: assigned,
        unassigned_seat_names,
        path: path.to_path_buf(),
    })
}

/// Opens a CSV writer over the destination with the header written
/// explicitly (so empty sheets still carry one).
fn sheet_writer(path: &Path) -> Result<csv::Writer<fs::File>, ReportError> {
    Ok(csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(create_output_file(path)?))
}

/// Creates the destination file (and its parent directories) and
/// writes the BOM.
fn create_output_file(path: &Path) -> Result<fs::File, ReportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut file = fs::File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(UTF8_BOM).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Seat, SeatId, Student};
    use std::collections::BTreeMap;

    fn bound_roster() -> Roster<Validated> {
        let seats: BTreeMap<SeatId, Seat> = [
            ("A1", "A-1", true),
            ("A2", "A-2", true),
            ("A3", "A-3", false),
        ]
        .into_iter()
        .map(|(id, name, avail)| (SeatId::new(id), Seat::new(id, name, avail, "R1")))
        .collect();
        let available = vec![SeatId::new("A1"), SeatId::new("A2")];
        let room = Room::new("R1", "Room One", 3, seats, available);

        let students = vec![
            Student::new("s1", "Alice"),
            Student::new("s2", "Bob"),
            Student::new("s3", "Carol"),
        ];
        let mut roster = Roster::new(students, vec![room]).unwrap().validate().unwrap();
        roster
            .set_room_students(&"R1".into(), vec!["s1".into(), "s2".into()])
            .unwrap();
        roster
            .set_occupied_seats(&"R1".into(), vec!["A1".into(), "A2".into()])
            .unwrap();
        roster.bind_seat(&"R1".into(), &"A1".into(), &"s1".into()).unwrap();
        roster.bind_seat(&"R1".into(), &"A2".into(), &"s2".into()).unwrap();
        roster
    }

    #[test]
    fn test_student_sheet_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output_students.csv");
        let rows = write_student_sheet(&bound_roster(), &path).unwrap();
        assert_eq!(rows, 3);

        let raw = fs::read(&path).unwrap();
        assert!(raw.starts_with(UTF8_BOM));

        let text = String::from_utf8(raw[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("student_id,student_name,room_name,seat_name"),
        );
        assert_eq!(lines.next(), Some("s1,Alice,Room One,A-1"));
        assert_eq!(lines.next(), Some("s2,Bob,Room One,A-2"));
        // s3 stayed unassigned: row kept, columns blank.
        assert_eq!(lines.next(), Some("s3,Carol,,"));
    }

    #[test]
    fn test_room_sheet_skips_unassigned_and_collects_names() {
        let dir = tempfile::tempdir().unwrap();
        let roster = bound_roster();
        let paths = ReportPaths::new(dir.path());
        let sheets = write_room_sheets(&roster, &paths).unwrap();

        assert_eq!(sheets.len(), 1);
        let sheet = &sheets[0];
        assert_eq!(sheet.assigned_seats, 2);
        assert_eq!(sheet.unassigned_seat_names, vec!["A-3"]);

        let raw = fs::read(&sheet.path).unwrap();
        let text = String::from_utf8(raw[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("student_id,student_name,seat_name,actual_seat,signature"),
        );
        assert_eq!(lines.next(), Some("s1,Alice,A-1,,"));
        assert_eq!(lines.next(), Some("s2,Bob,A-2,,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_room_sheet_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let seats: BTreeMap<SeatId, Seat> = [("A1", "A-1", true)]
            .into_iter()
            .map(|(id, name, avail)| (SeatId::new(id), Seat::new(id, name, avail, "R1")))
            .collect();
        let available = vec![SeatId::new("A1")];
        let room = Room::new("R1", "Room One", 1, seats, available);
        let roster = Roster::new(vec![], vec![room]).unwrap().validate().unwrap();

        let paths = ReportPaths::new(dir.path());
        let sheets = write_room_sheets(&roster, &paths).unwrap();
        assert_eq!(sheets[0].assigned_seats, 0);
        assert_eq!(sheets[0].unassigned_seat_names, vec!["A-1"]);

        let raw = fs::read(&sheets[0].path).unwrap();
        let text = String::from_utf8(raw[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec!["student_id,student_name,seat_name,actual_seat,signature"],
        );
    }

    #[test]
    fn test_unwritable_destination_reports_path() {
        let roster = bound_roster();
        let result = write_student_sheet(&roster, Path::new("/dev/null/not-a-dir/out.csv"));
        assert!(matches!(result, Err(ReportError::Io { .. })));
    }
}
