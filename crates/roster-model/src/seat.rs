// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Seat entity and its identifier.

use crate::{RoomId, StudentId};
use std::fmt;

/// A seat identifier, unique within its room.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SeatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One seat in an exam room.
///
/// A seat with `is_available == false` never appears in its room's
/// available-seat list and is never chosen for assignment. The student
/// back-reference is a non-owning id set at most once per run.
#[derive(Debug, Clone)]
pub struct Seat {
    /// Identifier, unique within the owning room.
    pub id: SeatId,
    /// Display name (what gets printed on the seating sheet).
    pub name: String,
    /// Whether this seat is eligible for assignment.
    pub is_available: bool,
    /// The owning room.
    pub room: RoomId,
    pub(crate) student: Option<StudentId>,
}

impl Seat {
    pub fn new(
        id: impl Into<SeatId>,
        name: impl Into<String>,
        is_available: bool,
        room: impl Into<RoomId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_available,
            room: room.into(),
            student: None,
        }
    }

    /// The student bound to this seat, if any.
    pub fn student(&self) -> Option<&StudentId> {
        self.student.as_ref()
    }

    /// Explicit ordering key: seats order by `(room, seat id)`.
    pub fn ordering_key(&self) -> (&RoomId, &SeatId) {
        (&self.room, &self.id)
    }
}

/// The reporting tuple for one seat: the bound student (or `None` for
/// an unassigned seat) plus the seat's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatReport {
    pub student_id: Option<StudentId>,
    pub student_name: Option<String>,
    pub seat_name: String,
}

impl SeatReport {
    /// Returns `true` when no student is bound to the seat.
    pub fn is_unassigned(&self) -> bool {
        self.student_id.is_none()
    }
}
