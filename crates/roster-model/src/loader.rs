// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Roster loading from the CSV input tables.
//!
//! The loader reads three tables:
//! - `students.csv` — `student_id, student_name`.
//! - `rooms.csv` — `room_id, room_name, capacity`.
//! - `seats/<room_id>.csv` — `seat_id, seat_name, is_available`; the
//!   filename keys the seats to their room, so a rooms row without a
//!   matching file is an input error.
//!
//! Rows are deserialised through serde structs; the availability
//! column accepts the spellings spreadsheet exports produce
//! (`true`/`false`, `1`/`0`, `yes`/`no`, case-insensitive). A UTF-8
//! BOM at the start of any table is tolerated.

use crate::{Room, RoomId, Roster, RosterError, Seat, SeatId, Student, roster::Validated};
use std::collections::BTreeMap;
use std::path::Path;

/// One row of the students table.
#[derive(Debug, serde::Deserialize)]
struct StudentRow {
    student_id: String,
    student_name: String,
}

/// One row of the rooms table.
#[derive(Debug, serde::Deserialize)]
struct RoomRow {
    room_id: String,
    room_name: String,
    capacity: usize,
}

/// One row of a per-room seats table.
#[derive(Debug, serde::Deserialize)]
struct SeatRow {
    seat_id: String,
    seat_name: String,
    #[serde(deserialize_with = "flexible_bool")]
    is_available: bool,
}

/// Loads the CSV tables into a validated [`Roster`].
///
/// # Example
/// ```no_run
/// use roster_model::RosterLoader;
/// use std::path::Path;
///
/// let roster = RosterLoader::load(
///     Path::new("database/students/students.csv"),
///     Path::new("database/rooms/rooms.csv"),
///     Path::new("database/rooms/seats"),
/// ).unwrap();
/// ```
pub struct RosterLoader;

impl RosterLoader {
    /// Loads and validates a roster from the given table paths.
    ///
    /// Steps:
    /// 1. Parse the students table.
    /// 2. Parse the rooms table, and for each room its seats table.
    /// 3. Construct and validate the [`Roster`].
    pub fn load(
        students_path: &Path,
        rooms_path: &Path,
        seats_dir: &Path,
    ) -> Result<Roster<Validated>, RosterError> {
        let students = Self::load_students(students_path)?;
        let rooms = Self::load_rooms(rooms_path, seats_dir)?;
        Roster::new(students, rooms)?.validate()
    }

    /// Parses the students table.
    pub fn load_students(path: &Path) -> Result<Vec<Student>, RosterError> {
        let mut reader = open_table(path)?;
        let mut students = Vec::new();
        for row in reader.deserialize::<StudentRow>() {
            let row = row.map_err(|source| RosterError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            students.push(Student::new(row.student_id, row.student_name));
        }
        tracing::debug!(count = students.len(), path = %path.display(), "students table read");
        Ok(students)
    }

    /// Parses the rooms table and each room's seats table.
    pub fn load_rooms(rooms_path: &Path, seats_dir: &Path) -> Result<Vec<Room>, RosterError> {
        let mut reader = open_table(rooms_path)?;
        let mut rooms = Vec::new();
        for row in reader.deserialize::<RoomRow>() {
            let row = row.map_err(|source| RosterError::Csv {
                path: rooms_path.to_path_buf(),
                source,
            })?;
            let room_id = RoomId::new(row.room_id);
            let room = Self::load_room(room_id, row.room_name, row.capacity, seats_dir)?;
            tracing::debug!(
                room = %room.id,
                seats = room.seats().len(),
                available = room.available_seat_count(),
                "room read",
            );
            rooms.push(room);
        }
        Ok(rooms)
    }

    /// Builds one room by reading its seats table from
    /// `<seats_dir>/<room_id>.csv`.
    fn load_room(
        room_id: RoomId,
        room_name: String,
        capacity: usize,
        seats_dir: &Path,
    ) -> Result<Room, RosterError> {
        let path = seats_dir.join(format!("{room_id}.csv"));
        if !path.is_file() {
            return Err(RosterError::MissingSeatsFile {
                room: room_id,
                path,
            });
        }

        let mut reader = open_table(&path)?;
        let mut seats: BTreeMap<SeatId, Seat> = BTreeMap::new();
        let mut available = Vec::new();
        for row in reader.deserialize::<SeatRow>() {
            let row = row.map_err(|source| RosterError::Csv {
                path: path.clone(),
                source,
            })?;
            let seat_id = SeatId::new(row.seat_id);
            if row.is_available {
                available.push(seat_id.clone());
            }
            let seat = Seat::new(
                seat_id.clone(),
                row.seat_name,
                row.is_available,
                room_id.clone(),
            );
            if seats.insert(seat_id.clone(), seat).is_some() {
                return Err(RosterError::DuplicateSeat {
                    room: room_id,
                    seat: seat_id,
                });
            }
        }

        Ok(Room::new(room_id, room_name, capacity, seats, available))
    }
}

fn open_table(path: &Path) -> Result<csv::Reader<std::fs::File>, RosterError> {
    let file = std::fs::File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Reader::from_reader(file))
}

/// Accepts the boolean spellings spreadsheet exports produce.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "not a boolean: '{other}'"
        ))),
    }
}
