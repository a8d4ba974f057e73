// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Structured assignment events.
//!
//! The assignment core reports progress as typed events through an
//! injected [`EventSink`] rather than formatting log text inline, so
//! observability stays orthogonal to the algorithm. [`TraceSink`]
//! forwards events to `tracing`; [`NullSink`] discards them.

use roster_model::{RoomId, SeatId, StudentId};

/// One step of the assignment pipeline.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AssignmentEvent {
    /// A room's quota was taken from the plan.
    QuotaComputed {
        room: RoomId,
        available_seats: usize,
        quota: usize,
    },
    /// The student universe was arranged (shuffled or left sorted).
    StudentsArranged { strategy: String, students: usize },
    /// A contiguous chunk of students was partitioned into a room.
    RoomPartitioned { room: RoomId, students: usize },
    /// A room's occupied seats were selected.
    SeatsSelected { room: RoomId, seats: usize },
    /// One student was bound to one seat.
    SeatBound {
        room: RoomId,
        seat: SeatId,
        student: StudentId,
    },
}

/// Receiver for assignment events.
pub trait EventSink {
    fn emit(&mut self, event: &AssignmentEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AssignmentEvent) {}
}

/// Forwards events to `tracing`: per-room milestones at `info`,
/// per-seat detail at `debug`.
#[derive(Debug, Clone, Default)]
pub struct TraceSink;

impl EventSink for TraceSink {
    fn emit(&mut self, event: &AssignmentEvent) {
        match event {
            AssignmentEvent::QuotaComputed {
                room,
                available_seats,
                quota,
            } => {
                tracing::info!(
                    room = %room,
                    available_seats = *available_seats,
                    quota = *quota,
                    "room quota",
                );
            }
            AssignmentEvent::StudentsArranged { strategy, students } => {
                tracing::info!(
                    strategy = %strategy,
                    students = *students,
                    "student universe arranged",
                );
            }
            AssignmentEvent::RoomPartitioned { room, students } => {
                tracing::info!(room = %room, students = *students, "students partitioned into room");
            }
            AssignmentEvent::SeatsSelected { room, seats } => {
                tracing::info!(room = %room, seats = *seats, "occupied seats selected");
            }
            AssignmentEvent::SeatBound {
                room,
                seat,
                student,
            } => {
                tracing::debug!(room = %room, seat = %seat, student = %student, "seat bound");
            }
        }
    }
}

/// Collects events in memory; used by tests to assert the emission
/// order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<AssignmentEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AssignmentEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::default();
        sink.emit(&AssignmentEvent::StudentsArranged {
            strategy: "sorted-order".into(),
            students: 3,
        });
        sink.emit(&AssignmentEvent::RoomPartitioned {
            room: "R1".into(),
            students: 3,
        });
        assert_eq!(sink.events.len(), 2);
        assert!(matches!(
            sink.events[0],
            AssignmentEvent::StudentsArranged { .. }
        ));
    }

    #[test]
    fn test_null_sink_discards() {
        let mut sink = NullSink;
        sink.emit(&AssignmentEvent::SeatsSelected {
            room: "R1".into(),
            seats: 0,
        });
    }
}
