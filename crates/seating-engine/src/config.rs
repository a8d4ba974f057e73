// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Run configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! students_path = "database/students/students.csv"
//! rooms_path = "database/rooms/rooms.csv"
//! seats_dir = "database/rooms/seats"
//! output_dir = "generated"
//! random_mode = true
//! seed = "midterm 2025"
//! ```

use crate::EngineError;
use seat_planner::{DrawStrategy, Seed, SeededDraw, SortedDraw};
use std::path::{Path, PathBuf};

/// Configuration for one seating run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RunConfig {
    /// Path to the students table.
    pub students_path: PathBuf,
    /// Path to the rooms table.
    pub rooms_path: PathBuf,
    /// Directory holding one `<room_id>.csv` seats table per room.
    pub seats_dir: PathBuf,
    /// Directory the reports are written under.
    pub output_dir: PathBuf,
    /// Whether student order and seat selection are randomised.
    #[serde(default = "default_true")]
    pub random_mode: bool,
    /// Optional user-supplied seed (any string; numeric strings are
    /// used verbatim). Ignored when `random_mode` is off; a wall-clock
    /// seed is derived when absent.
    #[serde(default)]
    pub seed: Option<String>,
}

fn default_true() -> bool {
    true
}

impl RunConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str)
            .map_err(|e| EngineError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Re-roots the three input paths under `dir`, keeping the
    /// original layout (`students/students.csv`, `rooms/rooms.csv`,
    /// `rooms/seats/`).
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.students_path = dir.join("students").join("students.csv");
        self.rooms_path = dir.join("rooms").join("rooms.csv");
        self.seats_dir = dir.join("rooms").join("seats");
        self
    }

    /// Creates the draw strategy this config asks for, resolving the
    /// seed exactly once. Returns the seed alongside (for the run
    /// report); `None` in deterministic mode.
    pub fn create_strategy(&self) -> (Box<dyn DrawStrategy>, Option<Seed>) {
        if self.random_mode {
            let seed = match &self.seed {
                Some(arg) => Seed::from_arg(arg),
                None => Seed::from_clock(),
            };
            (Box::new(SeededDraw::new(seed.clone())), Some(seed))
        } else {
            (Box::new(SortedDraw::new()), None)
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            students_path: PathBuf::from("database/students/students.csv"),
            rooms_path: PathBuf::from("database/rooms/rooms.csv"),
            seats_dir: PathBuf::from("database/rooms/seats"),
            output_dir: PathBuf::from("generated"),
            random_mode: true,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_follow_original_layout() {
        let c = RunConfig::default();
        assert_eq!(
            c.students_path,
            PathBuf::from("database/students/students.csv"),
        );
        assert_eq!(c.output_dir, PathBuf::from("generated"));
        assert!(c.random_mode);
        assert!(c.seed.is_none());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
students_path = "/tmp/students.csv"
rooms_path = "/tmp/rooms.csv"
seats_dir = "/tmp/seats"
output_dir = "/tmp/out"
random_mode = false
"#;
        let c = RunConfig::from_toml(toml).unwrap();
        assert_eq!(c.students_path, PathBuf::from("/tmp/students.csv"));
        assert!(!c.random_mode);
        assert!(c.seed.is_none());
    }

    #[test]
    fn test_toml_roundtrip() {
        let c = RunConfig {
            seed: Some("42".into()),
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = RunConfig::from_toml(&toml).unwrap();
        assert_eq!(back.seed.as_deref(), Some("42"));
        assert_eq!(back.rooms_path, c.rooms_path);
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let result = RunConfig::from_toml("students_path = [not toml");
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_with_data_dir() {
        let c = RunConfig::default().with_data_dir(Path::new("/data"));
        assert_eq!(c.students_path, PathBuf::from("/data/students/students.csv"));
        assert_eq!(c.rooms_path, PathBuf::from("/data/rooms/rooms.csv"));
        assert_eq!(c.seats_dir, PathBuf::from("/data/rooms/seats"));
    }

    #[test]
    fn test_create_strategy_random_with_seed() {
        let c = RunConfig {
            random_mode: true,
            seed: Some("7".into()),
            ..Default::default()
        };
        let (strategy, seed) = c.create_strategy();
        assert_eq!(strategy.name(), "seeded-random");
        assert_eq!(seed.unwrap().value(), 7);
    }

    #[test]
    fn test_create_strategy_deterministic() {
        let c = RunConfig {
            random_mode: false,
            seed: Some("ignored".into()),
            ..Default::default()
        };
        let (strategy, seed) = c.create_strategy();
        assert_eq!(strategy.name(), "sorted-order");
        assert!(seed.is_none());
    }
}
