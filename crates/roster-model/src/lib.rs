// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # roster-model
//!
//! Entity model and input loading for the exam seating toolkit.
//!
//! The crate defines the three entities the assignment pipeline works
//! with and the registry that owns them:
//!
//! - [`Student`] — one row of the students table, with non-owning
//!   back-references to the room and seat it ends up assigned to.
//! - [`Seat`] — one seat in a room, with an availability flag and a
//!   non-owning back-reference to the student seated on it.
//! - [`Room`] — a room with its seat map, the sorted list of seat ids
//!   eligible for assignment, and the per-run assignment results.
//! - [`Roster`] — the run-scoped registry of students and rooms, with a
//!   **type-state pattern** (`Loaded` → `Validated`).
//! - [`RosterLoader`] — builds a validated roster from the CSV tables.
//!
//! # Input Format
//! Three CSV tables:
//! - `students.csv` — `student_id, student_name`.
//! - `rooms.csv` — `room_id, room_name, capacity`.
//! - `seats/<room_id>.csv` — `seat_id, seat_name, is_available`, one
//!   file per room.
//!
//! # Example
//! ```no_run
//! use roster_model::RosterLoader;
//! use std::path::Path;
//!
//! let roster = RosterLoader::load(
//!     Path::new("database/students/students.csv"),
//!     Path::new("database/rooms/rooms.csv"),
//!     Path::new("database/rooms/seats"),
//! ).unwrap();
//! println!("{}", roster.summary());
//! ```

mod error;
mod loader;
mod room;
pub mod roster;
mod seat;
mod student;

pub use error::RosterError;
pub use loader::RosterLoader;
pub use room::{Room, RoomId};
pub use roster::Roster;
pub use seat::{Seat, SeatId, SeatReport};
pub use student::{Student, StudentId, StudentReport};
