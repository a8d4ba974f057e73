// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # seat-planner
//!
//! The assignment core of the exam seating toolkit: splits the student
//! pool across rooms in proportion to available capacity, then maps
//! students to concrete seats.
//!
//! # Pipeline
//!
//! | Step | Entry point | Output |
//! |---|---|---|
//! | Quota partitioning | [`compute_quotas`] | [`QuotaPlan`] |
//! | Student partitioning | [`partition_students`] | room back-references |
//! | Seat selection + binding | [`bind_seats`] | seat back-references |
//!
//! [`assign_seats`] runs both assignment phases in order.
//!
//! # Draw Strategies
//!
//! Student arrangement and seat selection go through the
//! [`DrawStrategy`] trait, so the two modes share one code path:
//!
//! - [`SeededDraw`] — shuffles the student universe and samples seats
//!   uniformly without replacement from one seeded generator, making
//!   the whole run reproducible from its [`Seed`].
//! - [`SortedDraw`] — no shuffle, first-N seat selection; repeated
//!   runs on identical input are byte-identical.
//!
//! # Events
//!
//! The core emits structured [`AssignmentEvent`]s through an injected
//! [`EventSink`] instead of formatting log prose inline; pass
//! [`TraceSink`] to forward them to `tracing`, or [`NullSink`] to
//! discard them.
//!
//! # Example
//! ```
//! use seat_planner::{assign_seats, compute_quotas, NullSink, SortedDraw};
//! # use roster_model::{Room, Roster, Seat, SeatId, Student};
//! # use std::collections::BTreeMap;
//! # let seats: BTreeMap<SeatId, Seat> = [("A1", "A-1"), ("A2", "A-2")]
//! #     .into_iter()
//! #     .map(|(id, name)| (SeatId::new(id), Seat::new(id, name, true, "R1")))
//! #     .collect();
//! # let available = seats.keys().cloned().collect();
//! # let rooms = vec![Room::new("R1", "Room One", 2, seats, available)];
//! # let students = vec![Student::new("s1", "Alice"), Student::new("s2", "Bob")];
//! # let mut roster = Roster::new(students, rooms).unwrap().validate().unwrap();
//!
//! let plan = compute_quotas(&roster).unwrap();
//! assign_seats(&mut roster, &plan, &mut SortedDraw::new(), &mut NullSink).unwrap();
//! assert!(roster.iter_students().all(|s| s.is_assigned()));
//! ```

mod assign;
mod error;
mod event;
mod quota;
pub mod strategy;

pub use assign::{assign_seats, bind_seats, partition_students};
pub use error::PlannerError;
pub use event::{AssignmentEvent, EventSink, NullSink, RecordingSink, TraceSink};
pub use quota::{compute_quotas, QuotaPlan, RoomQuota};
pub use strategy::seeded::{Seed, SeededDraw};
pub use strategy::sorted::SortedDraw;
pub use strategy::DrawStrategy;
