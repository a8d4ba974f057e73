// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for roster loading and registry mutation.

use crate::{RoomId, SeatId, StudentId};
use std::path::PathBuf;

/// Errors that can occur when loading or mutating the roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// An input file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A CSV table is malformed.
    #[error("failed to parse '{path}': {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    /// A room listed in the rooms table has no seats file.
    #[error("room '{room}' has no seats file at '{path}'")]
    MissingSeatsFile { room: RoomId, path: PathBuf },

    /// The same student id appears twice in the students table.
    #[error("duplicate student id '{student}'")]
    DuplicateStudent { student: StudentId },

    /// The same room id appears twice in the rooms table.
    #[error("duplicate room id '{room}'")]
    DuplicateRoom { room: RoomId },

    /// The same seat id appears twice within one room's seats table.
    #[error("duplicate seat id '{seat}' in room '{room}'")]
    DuplicateSeat { room: RoomId, seat: SeatId },

    /// The rooms table is empty.
    #[error("roster contains no rooms")]
    EmptyRoster,

    /// An available-seat id does not resolve to an available seat.
    #[error("seat '{seat}' in room '{room}' is listed as available but is not")]
    UnavailableSeatListed { room: RoomId, seat: SeatId },

    /// A room id does not exist in the registry.
    #[error("unknown room '{room}'")]
    UnknownRoom { room: RoomId },

    /// A student id does not exist in the registry.
    #[error("unknown student '{student}'")]
    UnknownStudent { student: StudentId },

    /// A seat id does not exist in the given room.
    #[error("unknown seat '{seat}' in room '{room}'")]
    UnknownSeat { room: RoomId, seat: SeatId },

    /// A seat was selected for binding but is not eligible.
    #[error("seat '{seat}' in room '{room}' is not available for assignment")]
    SeatNotAvailable { room: RoomId, seat: SeatId },

    /// A seat already holds a student; rebinding within a run is not supported.
    #[error("seat '{seat}' in room '{room}' is already bound")]
    SeatAlreadyBound { room: RoomId, seat: SeatId },

    /// A student is already assigned; reassignment within a run is not supported.
    #[error("student '{student}' is already assigned")]
    StudentAlreadyAssigned { student: StudentId },

    /// A binding targeted a student partitioned into a different room.
    #[error("student '{student}' is not assigned to room '{room}'")]
    StudentNotInRoom { student: StudentId, room: RoomId },
}
