// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for quota planning and seat assignment.

use roster_model::{RoomId, RosterError};

/// Errors that can occur during quota planning or assignment.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// No room has any available seat; the proportional split is
    /// undefined.
    #[error("no available seats across any room")]
    NoAvailableSeats,

    /// A room's quota exceeds its available-seat count.
    #[error("room '{room}' oversubscribed: quota {quota} exceeds {available} available seats")]
    Oversubscribed {
        room: RoomId,
        quota: usize,
        available: usize,
    },

    /// A seat selection asked for more seats than the room offers.
    /// The quota check prevents this in normal operation; the draw
    /// strategies reject it anyway.
    #[error("cannot select {requested} seats: only {available} available")]
    NotEnoughSeats { requested: usize, available: usize },

    /// The per-room quotas do not add up to the student total.
    #[error("quota plan allocates {allocated} students but the roster has {expected}")]
    QuotaMismatch { expected: usize, allocated: usize },

    /// A registry mutation was rejected.
    #[error("registry error: {0}")]
    Roster(#[from] RosterError),
}
