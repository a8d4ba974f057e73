// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for report generation.

use std::path::PathBuf;

/// Errors that can occur while writing reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The destination could not be created or written.
    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A CSV row failed to serialise.
    #[error("CSV error writing '{path}': {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
}
