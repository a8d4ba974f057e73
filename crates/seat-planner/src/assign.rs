// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The two-phase assigner.
//!
//! Phase 1 ([`partition_students`]) slices the arranged student
//! universe into contiguous chunks sized by the quota plan, in room
//! iteration order. Phase 2 ([`bind_seats`]) selects each room's
//! occupied seats through the draw strategy and binds students to
//! them.
//!
//! Binding pairs the i-th assigned student with the i-th chosen seat
//! *after sorting both sides ascending independently*, so per room the
//! sorted student list and the sorted occupied-seat list always match
//! index-for-index. Both back-references are set as a pair through the
//! registry; a failed run leaves no partially bound pair behind
//! because any error aborts the whole run.

use crate::event::{AssignmentEvent, EventSink};
use crate::strategy::DrawStrategy;
use crate::{PlannerError, QuotaPlan};
use roster_model::{roster::Validated, Roster};

/// Runs both assignment phases in order.
pub fn assign_seats(
    roster: &mut Roster<Validated>,
    plan: &QuotaPlan,
    strategy: &mut dyn DrawStrategy,
    sink: &mut dyn EventSink,
) -> Result<(), PlannerError> {
    partition_students(roster, plan, strategy, sink)?;
    bind_seats(roster, strategy, sink)
}

/// Phase 1: partition students into rooms.
///
/// Consumes the sorted student-id universe, lets the strategy arrange
/// it, then slices it into per-room chunks in room iteration order.
/// Each chunk is stored on its room and every member's room
/// back-reference is set.
pub fn partition_students(
    roster: &mut Roster<Validated>,
    plan: &QuotaPlan,
    strategy: &mut dyn DrawStrategy,
    sink: &mut dyn EventSink,
) -> Result<(), PlannerError> {
    plan.validate()?;

    let mut ids = roster.sorted_student_ids();
    if plan.total_students != ids.len() {
        return Err(PlannerError::QuotaMismatch {
            expected: ids.len(),
            allocated: plan.total_students,
        });
    }

    strategy.arrange_students(&mut ids);
    sink.emit(&AssignmentEvent::StudentsArranged {
        strategy: strategy.name().to_string(),
        students: ids.len(),
    });

    let mut offset = 0;
    for room_quota in &plan.rooms {
        sink.emit(&AssignmentEvent::QuotaComputed {
            room: room_quota.room.clone(),
            available_seats: room_quota.available_seats,
            quota: room_quota.quota,
        });

        let chunk = ids[offset..offset + room_quota.quota].to_vec();
        offset += room_quota.quota;
        roster.set_room_students(&room_quota.room, chunk)?;
        sink.emit(&AssignmentEvent::RoomPartitioned {
            room: room_quota.room.clone(),
            students: room_quota.quota,
        });
    }

    Ok(())
}

/// Phase 2: select and bind seats, room by room.
///
/// For each room with N assigned students, N seat ids are drawn from
/// the available list, sorted ascending, stored as the room's occupied
/// seats, and bound index-for-index to the room's students sorted by
/// id.
pub fn bind_seats(
    roster: &mut Roster<Validated>,
    strategy: &mut dyn DrawStrategy,
    sink: &mut dyn EventSink,
) -> Result<(), PlannerError> {
    let room_ids: Vec<_> = roster.iter_rooms().map(|r| r.id.clone()).collect();

    for room_id in room_ids {
        let (available, mut students) = {
            let room = roster
                .room(&room_id)
                .ok_or_else(|| roster_model::RosterError::UnknownRoom {
                    room: room_id.clone(),
                })?;
            (
                room.available_seats().to_vec(),
                room.assigned_students().to_vec(),
            )
        };

        let mut chosen = strategy.select_seats(&available, students.len())?;
        chosen.sort();
        roster.set_occupied_seats(&room_id, chosen.clone())?;
        sink.emit(&AssignmentEvent::SeatsSelected {
            room: room_id.clone(),
            seats: chosen.len(),
        });

        students.sort();
        for (student_id, seat_id) in students.iter().zip(chosen.iter()) {
            roster.bind_seat(&room_id, seat_id, student_id)?;
            sink.emit(&AssignmentEvent::SeatBound {
                room: room_id.clone(),
                seat: seat_id.clone(),
                student: student_id.clone(),
            });
        }
    }

    Ok(())
}
