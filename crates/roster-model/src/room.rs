// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Room entity: a seat map plus the per-run assignment results.

use crate::{Seat, SeatId, StudentId};
use std::collections::BTreeMap;
use std::fmt;

/// A room identifier.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An exam room.
///
/// Owns its seats. `available_seats` is the sorted list of seat ids
/// eligible for assignment; `assigned_students` and `occupied_seats`
/// are empty until the assigner populates them. Invariant after
/// binding: `occupied_seats` is a subset of `available_seats` with the
/// same cardinality as `assigned_students`.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Declared capacity (metadata from the rooms table; not enforced
    /// against the seat count).
    pub capacity: usize,
    pub(crate) seats: BTreeMap<SeatId, Seat>,
    pub(crate) available_seats: Vec<SeatId>,
    pub(crate) assigned_students: Vec<StudentId>,
    pub(crate) occupied_seats: Vec<SeatId>,
}

impl Room {
    /// Creates a room from its seat map and available-seat list.
    /// The available list is sorted ascending so deterministic mode can
    /// take the first N ids directly.
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        capacity: usize,
        seats: BTreeMap<SeatId, Seat>,
        mut available_seats: Vec<SeatId>,
    ) -> Self {
        available_seats.sort();
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            seats,
            available_seats,
            assigned_students: Vec::new(),
            occupied_seats: Vec::new(),
        }
    }

    /// All seats in the room, iterated in ascending seat-id order.
    pub fn seats(&self) -> &BTreeMap<SeatId, Seat> {
        &self.seats
    }

    /// Seat ids eligible for assignment, sorted ascending.
    pub fn available_seats(&self) -> &[SeatId] {
        &self.available_seats
    }

    pub fn available_seat_count(&self) -> usize {
        self.available_seats.len()
    }

    /// Students partitioned into this room, in draw order.
    pub fn assigned_students(&self) -> &[StudentId] {
        &self.assigned_students
    }

    /// Seat ids selected for this room's students, sorted ascending.
    pub fn occupied_seats(&self) -> &[SeatId] {
        &self.occupied_seats
    }

    /// Display names of every seat without a student, sorted by name.
    ///
    /// Covers unavailable seats too: the room sheet omits them all, and
    /// the run report lists them for operator auditing.
    pub fn unassigned_seat_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .seats
            .values()
            .filter(|s| s.student().is_none())
            .map(|s| s.name.clone())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seat;

    fn seat(id: &str, available: bool) -> (SeatId, Seat) {
        (
            SeatId::new(id),
            Seat::new(id, format!("seat {id}"), available, "R1"),
        )
    }

    fn sample_room() -> Room {
        let seats: BTreeMap<SeatId, Seat> =
            [seat("A02", true), seat("A01", true), seat("A03", false)]
                .into_iter()
                .collect();
        let available = vec![SeatId::new("A02"), SeatId::new("A01")];
        Room::new("R1", "Room 1", 3, seats, available)
    }

    #[test]
    fn test_available_seats_sorted_on_construction() {
        let room = sample_room();
        assert_eq!(
            room.available_seats(),
            &[SeatId::new("A01"), SeatId::new("A02")]
        );
    }

    #[test]
    fn test_unassigned_names_cover_unavailable_seats() {
        let room = sample_room();
        assert_eq!(
            room.unassigned_seat_names(),
            vec!["seat A01", "seat A02", "seat A03"]
        );
    }

    #[test]
    fn test_fresh_room_has_no_assignments() {
        let room = sample_room();
        assert!(room.assigned_students().is_empty());
        assert!(room.occupied_seats().is_empty());
    }
}
