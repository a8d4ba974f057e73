// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the orchestration layer.

use roster_model::RosterError;
use seat_planner::PlannerError;

/// Errors surfaced by the seating engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The run configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Loading the input tables failed.
    #[error("input error: {0}")]
    Roster(#[from] RosterError),

    /// Quota planning or assignment failed.
    #[error("assignment error: {0}")]
    Planner(#[from] PlannerError),
}
