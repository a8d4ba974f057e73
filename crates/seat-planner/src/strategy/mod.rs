// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`DrawStrategy`] trait and strategy implementations.

pub mod seeded;
pub mod sorted;

use crate::PlannerError;
use roster_model::{SeatId, StudentId};

/// Trait for draw strategies.
///
/// A strategy decides the order of the student universe before it is
/// sliced into rooms, and which seats a room's students receive. The
/// assigner sorts whatever the strategy returns, so a strategy only
/// controls *which* ids come out, not the binding order.
///
/// Strategies are purely algorithmic — no I/O — making them trivially
/// unit-testable.
pub trait DrawStrategy {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Permutes (or leaves sorted) the student-id universe before it
    /// is sliced into per-room chunks.
    fn arrange_students(&mut self, ids: &mut [StudentId]);

    /// Chooses `count` seat ids from the room's available list.
    ///
    /// `available` is sorted ascending. Asking for more seats than are
    /// available is rejected with [`PlannerError::NotEnoughSeats`].
    fn select_seats(
        &mut self,
        available: &[SeatId],
        count: usize,
    ) -> Result<Vec<SeatId>, PlannerError>;
}
