// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The seating engine: type-state–enforced pipeline orchestration.
//!
//! Each state transition consumes the old value and returns a new one,
//! making invalid stage sequences a compile error: you cannot assign
//! before planning, or plan before loading.

use crate::{EngineError, RunConfig};
use roster_model::{roster::Validated, Roster, RosterLoader};
use seat_planner::{assign_seats, compute_quotas, EventSink, QuotaPlan, Seed};

// ── Type-state markers ─────────────────────────────────────────────

/// Engine is created but no tables are loaded.
#[derive(Debug)]
pub struct Idle;

/// Input tables are loaded and validated.
#[derive(Debug)]
pub struct Loaded;

/// A quota plan has been computed and validated.
#[derive(Debug)]
pub struct Planned;

/// Sealed trait for engine states.
pub trait EngineState: std::fmt::Debug {}
impl EngineState for Idle {}
impl EngineState for Loaded {}
impl EngineState for Planned {}

// ── Outcome ────────────────────────────────────────────────────────

/// The result of a completed assignment run: the fully bound registry
/// plus the facts the reports need.
#[derive(Debug)]
pub struct AssignmentOutcome {
    /// The registry with every back-reference set.
    pub roster: Roster<Validated>,
    /// The quota plan the run used.
    pub plan: QuotaPlan,
    /// Draw strategy name ("seeded-random" or "sorted-order").
    pub mode: String,
    /// The resolved seed; `None` in deterministic mode.
    pub seed: Option<Seed>,
}

impl AssignmentOutcome {
    /// Returns a human-readable summary of the run.
    pub fn summary(&self) -> String {
        let seed = self
            .seed
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Assigned {} students across {} rooms (mode: {}, seed: {seed})",
            self.plan.total_students,
            self.plan.num_rooms(),
            self.mode,
        )
    }
}

// ── Engine ─────────────────────────────────────────────────────────

/// The pipeline orchestrator.
///
/// `S` is a type-state marker enforcing the stage order at compile
/// time.
///
/// # Example
/// ```no_run
/// use seating_engine::{RunConfig, SeatingEngine};
/// use seat_planner::TraceSink;
///
/// # fn example() -> Result<(), seating_engine::EngineError> {
/// let outcome = SeatingEngine::new(RunConfig::default())
///     .load_roster()?
///     .plan()?
///     .assign(&mut TraceSink)?;
/// println!("{}", outcome.summary());
/// # Ok(())
/// # }
/// ```
pub struct SeatingEngine<S: EngineState = Idle> {
    config: RunConfig,
    _state: std::marker::PhantomData<S>,
    // Fields populated as the engine transitions through states:
    roster: Option<Roster<Validated>>,
    plan: Option<QuotaPlan>,
}

// ── Idle → Loaded ──────────────────────────────────────────────────

impl SeatingEngine<Idle> {
    /// Creates a new engine from the given configuration.
    pub fn new(config: RunConfig) -> Self {
        tracing::info!(
            random_mode = config.random_mode,
            "seating engine created",
        );
        Self {
            config,
            _state: std::marker::PhantomData,
            roster: None,
            plan: None,
        }
    }

    /// Loads the input tables into a validated registry.
    /// Transitions to the `Loaded` state.
    pub fn load_roster(self) -> Result<SeatingEngine<Loaded>, EngineError> {
        let roster = RosterLoader::load(
            &self.config.students_path,
            &self.config.rooms_path,
            &self.config.seats_dir,
        )?;
        tracing::info!("{}", roster.summary());

        Ok(SeatingEngine {
            config: self.config,
            _state: std::marker::PhantomData,
            roster: Some(roster),
            plan: None,
        })
    }
}

// ── Loaded → Planned ───────────────────────────────────────────────

impl SeatingEngine<Loaded> {
    /// Convenience: builds a `Loaded` engine from a pre-validated
    /// roster (for testing without CSV files).
    pub fn from_roster(config: RunConfig, roster: Roster<Validated>) -> Self {
        SeatingEngine {
            config,
            _state: std::marker::PhantomData,
            roster: Some(roster),
            plan: None,
        }
    }

    pub fn roster(&self) -> &Roster<Validated> {
        self.roster.as_ref().expect("roster set in Loaded state")
    }

    /// Computes and validates the quota plan.
    /// Transitions to the `Planned` state.
    pub fn plan(self) -> Result<SeatingEngine<Planned>, EngineError> {
        let roster = self.roster.expect("roster set in Loaded state");
        let plan = compute_quotas(&roster)?;
        tracing::info!("{}", plan.summary());

        Ok(SeatingEngine {
            config: self.config,
            _state: std::marker::PhantomData,
            roster: Some(roster),
            plan: Some(plan),
        })
    }
}

// ── Planned → outcome ──────────────────────────────────────────────

impl SeatingEngine<Planned> {
    pub fn roster(&self) -> &Roster<Validated> {
        self.roster.as_ref().expect("roster set in Planned state")
    }

    pub fn quota_plan(&self) -> &QuotaPlan {
        self.plan.as_ref().expect("plan set in Planned state")
    }

    /// Runs both assignment phases and returns the bound registry.
    ///
    /// Consumes the engine: a run is one pass; rebinding an already
    /// assigned registry is not supported.
    pub fn assign(self, sink: &mut dyn EventSink) -> Result<AssignmentOutcome, EngineError> {
        let mut roster = self.roster.expect("roster set in Planned state");
        let plan = self.plan.expect("plan set in Planned state");

        let (mut strategy, seed) = self.config.create_strategy();
        tracing::info!(strategy = strategy.name(), "draw strategy selected");

        assign_seats(&mut roster, &plan, strategy.as_mut(), sink)?;

        let outcome = AssignmentOutcome {
            roster,
            plan,
            mode: strategy.name().to_string(),
            seed,
        };
        tracing::info!("{}", outcome.summary());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Room, Seat, SeatId, Student};
    use seat_planner::NullSink;
    use std::collections::BTreeMap;

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

    fn config(random: bool, seed: Option<&str>) -> RunConfig {
        RunConfig {
            random_mode: random,
            seed: seed.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_pipeline_from_roster() {
        let engine =
            SeatingEngine::from_roster(config(false, None), roster_with(&[5, 5], 10));
        let outcome = engine.plan().unwrap().assign(&mut NullSink).unwrap();

        assert_eq!(outcome.mode, "sorted-order");
        assert!(outcome.seed.is_none());
        assert!(outcome.roster.iter_students().all(|s| s.is_assigned()));
    }

    #[test]
    fn test_plan_is_exposed_before_assign() {
        let engine =
            SeatingEngine::from_roster(config(false, None), roster_with(&[10, 10, 9], 10));
        let planned = engine.plan().unwrap();
        let quotas: Vec<usize> = planned.quota_plan().rooms.iter().map(|r| r.quota).collect();
        assert_eq!(quotas, vec![3, 3, 4]);
    }

    #[test]
    fn test_zero_available_seats_fails_planning() {
        let engine = SeatingEngine::from_roster(config(true, None), roster_with(&[0], 2));
        let result = engine.plan();
        assert!(matches!(result, Err(EngineError::Planner(_))));
    }

    #[test]
    fn test_seeded_outcome_reports_seed() {
        let engine =
            SeatingEngine::from_roster(config(true, Some("99")), roster_with(&[4, 4], 6));
        let outcome = engine.plan().unwrap().assign(&mut NullSink).unwrap();
        assert_eq!(outcome.mode, "seeded-random");
        assert_eq!(outcome.seed.unwrap().value(), 99);
    }

    #[test]
    fn test_missing_tables_fail_loading() {
        let cfg = RunConfig::default().with_data_dir(std::path::Path::new("/nonexistent"));
        let result = SeatingEngine::new(cfg).load_roster();
        assert!(matches!(result, Err(EngineError::Roster(_))));
    }

    #[test]
    fn test_outcome_summary() {
        let engine =
            SeatingEngine::from_roster(config(true, Some("7")), roster_with(&[5, 5], 10));
        let outcome = engine.plan().unwrap().assign(&mut NullSink).unwrap();
        let s = outcome.summary();
        assert!(s.contains("10 students"));
        assert!(s.contains("2 rooms"));
        assert!(s.contains("seed: 7"));
    }
}
