// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Quota plan: how many students each room receives.
//!
//! Every room except the last gets
//! `round(available_in_room / total_available × total_students)`,
//! rounded **half to even** (the convention this implementation
//! commits to; the tie-breaking rule determines exact boundary
//! outcomes). The last room in iteration order absorbs whatever is
//! left, so the quotas always sum to the student total even when the
//! per-room roundings do not.
//!
//! Computing a plan is a pure function over the read-only roster; the
//! plan is the contract between the partitioner and the assigner.

use crate::PlannerError;
use roster_model::{roster::Validated, RoomId, Roster};

/// One room's slice of the student pool.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RoomQuota {
    /// The room this quota belongs to.
    pub room: RoomId,
    /// The room's available-seat count used for the proportional share.
    pub available_seats: usize,
    /// Number of students this room receives.
    pub quota: usize,
}

/// The complete quota plan produced by [`compute_quotas`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct QuotaPlan {
    /// Per-room quotas, in room iteration order.
    pub rooms: Vec<RoomQuota>,
    /// The student total the plan distributes.
    pub total_students: usize,
    /// The available-seat total across all rooms.
    pub total_available_seats: usize,
}

impl QuotaPlan {
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// Returns the quota for the given room, if the plan covers it.
    pub fn quota_for(&self, room: &RoomId) -> Option<usize> {
        self.rooms.iter().find(|rq| &rq.room == room).map(|rq| rq.quota)
    }

    /// Validates the plan.
    ///
    /// # Checks
    /// - The available-seat total is non-zero.
    /// - No room's quota exceeds its available seats.
    /// - The quotas sum to exactly the student total.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.total_available_seats == 0 {
            return Err(PlannerError::NoAvailableSeats);
        }

        for rq in &self.rooms {
            if rq.quota > rq.available_seats {
                return Err(PlannerError::Oversubscribed {
                    room: rq.room.clone(),
                    quota: rq.quota,
                    available: rq.available_seats,
                });
            }
        }

        let allocated: usize = self.rooms.iter().map(|rq| rq.quota).sum();
        if allocated != self.total_students {
            return Err(PlannerError::QuotaMismatch {
                expected: self.total_students,
                allocated,
            });
        }

        Ok(())
    }

    /// Returns a human-readable summary of the plan.
    pub fn summary(&self) -> String {
        let quotas: Vec<String> = self
            .rooms
            .iter()
            .map(|rq| format!("{}: {}/{}", rq.room, rq.quota, rq.available_seats))
            .collect();
        format!(
            "Quota plan: {} students across {} rooms ({} available seats), [{}]",
            self.total_students,
            self.rooms.len(),
            self.total_available_seats,
            quotas.join(", "),
        )
    }
}

/// Computes the per-room quotas for the roster's student pool.
///
/// Pure function: reads the rooms' available-seat counts and the
/// student total, produces a validated [`QuotaPlan`]. Fails with
/// [`PlannerError::NoAvailableSeats`] when no seat is available
/// anywhere, and with [`PlannerError::Oversubscribed`] when a quota —
/// including the last room's absorbed remainder — exceeds the room's
/// available seats.
pub fn compute_quotas(roster: &Roster<Validated>) -> Result<QuotaPlan, PlannerError> {
    let total_available = roster.total_available_seats();
    if total_available == 0 {
        return Err(PlannerError::NoAvailableSeats);
    }

    let total_students = roster.total_students();
    let num_rooms = roster.num_rooms();
    let mut rooms = Vec::with_capacity(num_rooms);
    let mut remaining = total_students as i64;

    for (idx, room) in roster.iter_rooms().enumerate() {
        let available = room.available_seat_count();
        let quota = if idx + 1 == num_rooms {
            // The last room absorbs the rounding remainder.
            remaining
        } else {
            let share = available as f64 / total_available as f64;
            (share * total_students as f64).round_ties_even() as i64
        };

        if quota < 0 {
            // Earlier roundings over-allocated past the student total.
            return Err(PlannerError::QuotaMismatch {
                expected: total_students,
                allocated: (total_students as i64 - remaining) as usize,
            });
        }
        let quota = quota as usize;
        if quota > available {
            return Err(PlannerError::Oversubscribed {
                room: room.id.clone(),
                quota,
                available,
            });
        }

        remaining -= quota as i64;
        tracing::debug!(room = %room.id, available, quota, remaining, "room quota computed");
        rooms.push(RoomQuota {
            room: room.id.clone(),
            available_seats: available,
            quota,
        });
    }

    let plan = QuotaPlan {
        rooms,
        total_students,
        total_available_seats: total_available,
    };
    plan.validate()?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Room, Seat, SeatId, Student};
    use std::collections::BTreeMap;

    /// Builds a roster with the given available-seat counts per room
    /// and the given number of students.
    fn roster_with(available_per_room: &[usize], num_students: usize) -> Roster<Validated> {
        let rooms: Vec<Room> = available_per_room
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let room_id = format!("R{}", i + 1);
                let seats: BTreeMap<SeatId, Seat> = (0..n)
                    .map(|s| {
                        let sid = format!("S{s:02}");
                        (
                            SeatId::new(sid.clone()),
                            Seat::new(sid.clone(), sid, true, room_id.clone()),
                        )
                    })
                    .collect();
                let available = seats.keys().cloned().collect();
                Room::new(room_id.clone(), format!("Room {room_id}"), n, seats, available)
            })
            .collect();
        let students: Vec<Student> = (0..num_students)
            .map(|i| Student::new(format!("s{i:03}"), format!("Student {i}")))
            .collect();
        Roster::new(students, rooms).unwrap().validate().unwrap()
    }

    fn quotas(plan: &QuotaPlan) -> Vec<usize> {
        plan.rooms.iter().map(|rq| rq.quota).collect()
    }

    #[test]
    fn test_even_split() {
        let roster = roster_with(&[5, 5], 10);
        let plan = compute_quotas(&roster).unwrap();
        assert_eq!(quotas(&plan), vec![5, 5]);
    }

    #[test]
    fn test_fractional_ratios_sum_exactly() {
        // 10/10/9 available, 10 students: 3.45 → 3, 3.45 → 3, last
        // absorbs 4. The sum is exact regardless of per-room rounding.
        let roster = roster_with(&[10, 10, 9], 10);
        let plan = compute_quotas(&roster).unwrap();
        assert_eq!(quotas(&plan), vec![3, 3, 4]);
        assert_eq!(quotas(&plan).iter().sum::<usize>(), 10);
    }

    #[test]
    fn test_round_half_to_even_down() {
        // Share of the first room is 1/4 × 2 = 0.5 → rounds to 0.
        let roster = roster_with(&[1, 3], 2);
        let plan = compute_quotas(&roster).unwrap();
        assert_eq!(quotas(&plan), vec![0, 2]);
    }

    #[test]
    fn test_round_half_to_even_up() {
        // Share of the first room is 3/4 × 2 = 1.5 → rounds to 2.
        let roster = roster_with(&[3, 1], 2);
        let plan = compute_quotas(&roster).unwrap();
        assert_eq!(quotas(&plan), vec![2, 0]);
    }

    #[test]
    fn test_zero_available_seats_is_a_capacity_error() {
        let roster = roster_with(&[0, 0], 3);
        let result = compute_quotas(&roster);
        assert!(matches!(result, Err(PlannerError::NoAvailableSeats)));
    }

    #[test]
    fn test_zero_students_yields_zero_quotas() {
        let roster = roster_with(&[4, 2], 0);
        let plan = compute_quotas(&roster).unwrap();
        assert_eq!(quotas(&plan), vec![0, 0]);
    }

    #[test]
    fn test_oversubscription_detected_early() {
        // 3 students into 2 available seats: the first room's quota
        // rounds to 2 over 1 seat.
        let roster = roster_with(&[1, 1], 3);
        let result = compute_quotas(&roster);
        assert!(matches!(result, Err(PlannerError::Oversubscribed { .. })));
    }

    #[test]
    fn test_last_room_remainder_can_oversubscribe() {
        // Four rooms round 2.31 down to 2 each, leaving a remainder of
        // 2 for a last room with a single seat — even though the pool
        // fits the total capacity.
        let roster = roster_with(&[3, 3, 3, 3, 1], 10);
        match compute_quotas(&roster) {
            Err(PlannerError::Oversubscribed {
                room,
                quota,
                available,
            }) => {
                assert_eq!(room, "R5".into());
                assert_eq!(quota, 2);
                assert_eq!(available, 1);
            }
            other => panic!("expected Oversubscribed, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_remainder_is_a_quota_mismatch() {
        // Four rooms round 1.62 up to 2 each, over-allocating an
        // 8-over-7 total before the last room is reached.
        let roster = roster_with(&[3, 3, 3, 3, 1], 7);
        let result = compute_quotas(&roster);
        assert!(matches!(result, Err(PlannerError::QuotaMismatch { .. })));
    }

    #[test]
    fn test_quota_for() {
        let roster = roster_with(&[5, 5], 10);
        let plan = compute_quotas(&roster).unwrap();
        assert_eq!(plan.quota_for(&"R1".into()), Some(5));
        assert_eq!(plan.quota_for(&"R9".into()), None);
    }

    #[test]
    fn test_validate_rejects_tampered_plan() {
        let roster = roster_with(&[5, 5], 10);
        let mut plan = compute_quotas(&roster).unwrap();
        plan.rooms[0].quota = 6;
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_summary() {
        let roster = roster_with(&[10, 10, 9], 10);
        let plan = compute_quotas(&roster).unwrap();
        let s = plan.summary();
        assert!(s.contains("10 students"));
        assert!(s.contains("3 rooms"));
        assert!(s.contains("29 available seats"));
    }
}
