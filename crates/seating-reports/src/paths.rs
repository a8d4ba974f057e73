// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Output directory layout.
//!
//! ```text
//! <output>/
//! ├── output_students.csv
//! ├── rooms/<room_id>.csv
//! └── logs/report.txt
//! ```

use roster_model::RoomId;
use std::path::{Path, PathBuf};

/// Resolves report destinations under one output directory.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    output_dir: PathBuf,
}

impl ReportPaths {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn students_csv(&self) -> PathBuf {
        self.output_dir.join("output_students.csv")
    }

    pub fn rooms_dir(&self) -> PathBuf {
        self.output_dir.join("rooms")
    }

    pub fn room_csv(&self, room: &RoomId) -> PathBuf {
        self.rooms_dir().join(format!("{room}.csv"))
    }

    pub fn run_report(&self) -> PathBuf {
        self.output_dir.join("logs").join("report.txt")
    }
}
