// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The run-scoped registry of students and rooms.
//!
//! # Type-State Pattern
//!
//! The roster transitions through states enforced at compile time:
//!
//! ```text
//! Roster<Loaded>     — tables parsed, not yet cross-checked.
//!       │  .validate()
//!       ▼
//! Roster<Validated>  — ids unique, seat lists consistent, ready for
//!                      quota planning and assignment.
//! ```
//!
//! This prevents the planner from ever receiving an inconsistent
//! registry. The transition consumes the old state and returns the new
//! one; the marker types are `PhantomData` (ZST).
//!
//! All assignment mutation goes through the registry (`set_room_students`,
//! `set_occupied_seats`, `bind_seat`) so the cross-entity invariants —
//! one room per student, at most one student per seat, bind both
//! back-references as a pair — are enforced in one place.

use crate::{Room, RoomId, RosterError, SeatId, SeatReport, Student, StudentId, StudentReport};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: tables have been parsed but not cross-checked.
#[derive(Debug, Clone)]
pub struct Loaded;

/// Marker: the registry is consistent and ready for assignment.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for roster states.
pub trait RosterState: fmt::Debug + Clone {}
impl RosterState for Loaded {}
impl RosterState for Validated {}

// ── Roster ─────────────────────────────────────────────────────────

/// The registry of all students and rooms for one run.
///
/// Students live in a `BTreeMap` so iteration is always in ascending
/// id order (the deterministic student universe). Rooms live in a
/// `Vec` in rooms-table order — that order defines room iteration
/// order for partitioning, and the **last** room in it absorbs the
/// rounding remainder.
#[derive(Debug, Clone)]
pub struct Roster<S: RosterState = Loaded> {
    students: BTreeMap<StudentId, Student>,
    rooms: Vec<Room>,
    room_index: HashMap<RoomId, usize>,
    total_available_seats: usize,
    _state: std::marker::PhantomData<S>,
}

// ── Loaded state ───────────────────────────────────────────────────

impl Roster<Loaded> {
    /// Creates a roster in the `Loaded` state.
    ///
    /// Rejects duplicate student ids immediately; everything else is
    /// checked by [`Roster::validate`].
    pub fn new(students: Vec<Student>, rooms: Vec<Room>) -> Result<Self, RosterError> {
        let mut map = BTreeMap::new();
        for student in students {
            let id = student.id.clone();
            if map.insert(id.clone(), student).is_some() {
                return Err(RosterError::DuplicateStudent { student: id });
            }
        }
        Ok(Self {
            students: map,
            rooms,
            room_index: HashMap::new(),
            total_available_seats: 0,
            _state: std::marker::PhantomData,
        })
    }

    /// Validates the registry and transitions to the `Validated` state.
    ///
    /// # Checks
    /// - At least one room exists.
    /// - Room ids are unique.
    /// - Every available-seat id resolves to a seat in that room with
    ///   `is_available == true`.
    pub fn validate(self) -> Result<Roster<Validated>, RosterError> {
        if self.rooms.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        let mut room_index = HashMap::with_capacity(self.rooms.len());
        for (idx, room) in self.rooms.iter().enumerate() {
            if room_index.insert(room.id.clone(), idx).is_some() {
                return Err(RosterError::DuplicateRoom {
                    room: room.id.clone(),
                });
            }
        }

        let mut total_available_seats = 0;
        for room in &self.rooms {
            for seat_id in room.available_seats() {
                match room.seats().get(seat_id) {
                    Some(seat) if seat.is_available => {}
                    _ => {
                        return Err(RosterError::UnavailableSeatListed {
                            room: room.id.clone(),
                            seat: seat_id.clone(),
                        })
                    }
                }
            }
            total_available_seats += room.available_seat_count();
        }

        tracing::debug!(
            students = self.students.len(),
            rooms = self.rooms.len(),
            available_seats = total_available_seats,
            "roster validated",
        );

        Ok(Roster {
            students: self.students,
            rooms: self.rooms,
            room_index,
            total_available_seats,
            _state: std::marker::PhantomData,
        })
    }
}

// ── Shared accessors ───────────────────────────────────────────────

impl<S: RosterState> Roster<S> {
    pub fn total_students(&self) -> usize {
        self.students.len()
    }

    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }
}

// ── Validated state ────────────────────────────────────────────────

impl Roster<Validated> {
    /// Total available seats across all rooms.
    pub fn total_available_seats(&self) -> usize {
        self.total_available_seats
    }

    /// Rooms in iteration (rooms-table) order.
    pub fn iter_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.room_index.get(id).map(|&idx| &self.rooms[idx])
    }

    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.get(id)
    }

    /// Students in ascending id order.
    pub fn iter_students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// The student-id universe, sorted ascending.
    pub fn sorted_student_ids(&self) -> Vec<StudentId> {
        self.students.keys().cloned().collect()
    }

    /// Stores a room's partitioned student chunk and sets each member's
    /// room back-reference. A student can only be partitioned once.
    pub fn set_room_students(
        &mut self,
        room_id: &RoomId,
        students: Vec<StudentId>,
    ) -> Result<(), RosterError> {
        let idx = self.require_room(room_id)?;

        for student_id in &students {
            let student =
                self.students
                    .get(student_id)
                    .ok_or_else(|| RosterError::UnknownStudent {
                        student: student_id.clone(),
                    })?;
            if student.assigned_room.is_some() {
                return Err(RosterError::StudentAlreadyAssigned {
                    student: student_id.clone(),
                });
            }
        }

        for student_id in &students {
            if let Some(student) = self.students.get_mut(student_id) {
                student.assigned_room = Some(room_id.clone());
            }
        }
        self.rooms[idx].assigned_students = students;
        Ok(())
    }

    /// Stores a room's selected seat ids. The list must be sorted
    /// ascending, duplicate-free, and a subset of the room's available
    /// seats.
    pub fn set_occupied_seats(
        &mut self,
        room_id: &RoomId,
        seats: Vec<SeatId>,
    ) -> Result<(), RosterError> {
        let idx = self.require_room(room_id)?;
        let room = &self.rooms[idx];

        for pair in seats.windows(2) {
            if pair[0] >= pair[1] {
                return Err(RosterError::DuplicateSeat {
                    room: room_id.clone(),
                    seat: pair[1].clone(),
                });
            }
        }
        for seat_id in &seats {
            if room.available_seats.binary_search(seat_id).is_err() {
                return Err(RosterError::SeatNotAvailable {
                    room: room_id.clone(),
                    seat: seat_id.clone(),
                });
            }
        }

        self.rooms[idx].occupied_seats = seats;
        Ok(())
    }

    /// Binds one student to one seat, setting both back-references as a
    /// pair. All failure cases are checked before either side is
    /// touched, so no partial bind is observable.
    pub fn bind_seat(
        &mut self,
        room_id: &RoomId,
        seat_id: &SeatId,
        student_id: &StudentId,
    ) -> Result<(), RosterError> {
        let idx = self.require_room(room_id)?;

        {
            let student =
                self.students
                    .get(student_id)
                    .ok_or_else(|| RosterError::UnknownStudent {
                        student: student_id.clone(),
                    })?;
            if student.assigned_seat.is_some() {
                return Err(RosterError::StudentAlreadyAssigned {
                    student: student_id.clone(),
                });
            }
            if student.assigned_room.as_ref() != Some(room_id) {
                return Err(RosterError::StudentNotInRoom {
                    student: student_id.clone(),
                    room: room_id.clone(),
                });
            }

            let seat =
                self.rooms[idx]
                    .seats
                    .get(seat_id)
                    .ok_or_else(|| RosterError::UnknownSeat {
                        room: room_id.clone(),
                        seat: seat_id.clone(),
                    })?;
            if !seat.is_available {
                return Err(RosterError::SeatNotAvailable {
                    room: room_id.clone(),
                    seat: seat_id.clone(),
                });
            }
            if seat.student.is_some() {
                return Err(RosterError::SeatAlreadyBound {
                    room: room_id.clone(),
                    seat: seat_id.clone(),
                });
            }
        }

        if let Some(seat) = self.rooms[idx].seats.get_mut(seat_id) {
            seat.student = Some(student_id.clone());
        }
        if let Some(student) = self.students.get_mut(student_id) {
            student.assigned_seat = Some(seat_id.clone());
        }
        Ok(())
    }

    /// The reporting tuple for one student, names resolved through the
    /// registry.
    pub fn student_report(&self, id: &StudentId) -> Option<StudentReport> {
        let student = self.students.get(id)?;
        let room = student.assigned_room.as_ref().and_then(|r| self.room(r));
        let room_name = room.map(|r| r.name.clone());
        let seat_name = match (room, &student.assigned_seat) {
            (Some(room), Some(seat_id)) => room.seats().get(seat_id).map(|s| s.name.clone()),
            _ => None,
        };
        Some(StudentReport {
            id: student.id.clone(),
            name: student.name.clone(),
            room_name,
            seat_name,
        })
    }

    /// The reporting tuple for one seat.
    pub fn seat_report(&self, room_id: &RoomId, seat_id: &SeatId) -> Option<SeatReport> {
        let seat = self.room(room_id)?.seats().get(seat_id)?;
        let student = seat.student().and_then(|id| self.students.get(id));
        Some(SeatReport {
            student_id: student.map(|s| s.id.clone()),
            student_name: student.map(|s| s.name.clone()),
            seat_name: seat.name.clone(),
        })
    }

    /// Returns a summary string describing the registry.
    pub fn summary(&self) -> String {
        let total_seats: usize = self.rooms.iter().map(|r| r.seats().len()).sum();
        format!(
            "Roster: {} students, {} rooms, {}/{} seats available",
            self.students.len(),
            self.rooms.len(),
            self.total_available_seats,
            total_seats,
        )
    }

    fn require_room(&self, room_id: &RoomId) -> Result<usize, RosterError> {
        self.room_index
            .get(room_id)
            .copied()
            .ok_or_else(|| RosterError::UnknownRoom {
                room: room_id.clone(),
            })
    }
}
