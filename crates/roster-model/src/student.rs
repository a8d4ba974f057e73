// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Student entity and its identifier.

use crate::{RoomId, SeatId};
use std::fmt;

/// A student identifier.
///
/// Identifiers are opaque strings ordered lexicographically by byte
/// value; this order defines the deterministic iteration order of the
/// student universe.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One student from the students table.
///
/// Created once per input row. The back-references are non-owning ids
/// resolved through the [`crate::Roster`]; they are set exactly once
/// per run by the assigner and never cleared.
#[derive(Debug, Clone)]
pub struct Student {
    /// Unique student identifier.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    pub(crate) assigned_room: Option<RoomId>,
    pub(crate) assigned_seat: Option<SeatId>,
}

impl Student {
    /// Creates an unassigned student.
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            assigned_room: None,
            assigned_seat: None,
        }
    }

    /// The room this student was partitioned into, if any.
    pub fn assigned_room(&self) -> Option<&RoomId> {
        self.assigned_room.as_ref()
    }

    /// The seat this student was bound to, if any.
    pub fn assigned_seat(&self) -> Option<&SeatId> {
        self.assigned_seat.as_ref()
    }

    /// Returns `true` once both a room and a seat have been assigned.
    pub fn is_assigned(&self) -> bool {
        self.assigned_room.is_some() && self.assigned_seat.is_some()
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The reporting tuple for one student: names resolved through the
/// registry, absent fields left as `None` for unassigned students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentReport {
    pub id: StudentId,
    pub name: String,
    pub room_name: Option<String>,
    pub seat_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_is_unassigned() {
        let s = Student::new("6610450001", "Alice Example");
        assert!(s.assigned_room().is_none());
        assert!(s.assigned_seat().is_none());
        assert!(!s.is_assigned());
    }

    #[test]
    fn test_id_ordering_is_lexicographic() {
        let a = StudentId::new("6610450001");
        let b = StudentId::new("6610450002");
        assert!(a < b);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(StudentId::new("s-1").to_string(), "s-1");
    }
}
