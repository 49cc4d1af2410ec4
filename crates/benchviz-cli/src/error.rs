// Dweve BenchViz - Benchmark Result Visualization
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the BenchViz CLI.

use benchviz_chart::ChartError;
use benchviz_csv::CsvError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for BenchViz CLI operations.
///
/// Per-file load failures never reach this type; they are reported and
/// skipped. Anything that does is fatal and ends the run with a non-zero
/// exit status.
///
/// # Examples
///
/// ```rust,no_run
/// use benchviz_cli::error::CliError;
///
/// fn check(path: &str) -> Result<(), CliError> {
///     std::fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The results directory could not be scanned.
    #[error("Load error: {0}")]
    Load(String),

    /// A chart could not be written.
    #[error("Chart error: {0}")]
    Chart(String),

    /// Invalid input provided by the user or environment.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<CsvError> for CliError {
    fn from(source: CsvError) -> Self {
        Self::Load(source.to_string())
    }
}

impl From<ChartError> for CliError {
    fn from(source: ChartError) -> Self {
        match source {
            ChartError::Io { path, message } => Self::Io { path, message },
            ChartError::Render(message) => Self::Chart(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "results/charts",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("results/charts"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CliError::invalid_input("executable has no parent directory");
        assert_eq!(
            err.to_string(),
            "Invalid input: executable has no parent directory"
        );
    }

    #[test]
    fn test_csv_error_conversion() {
        let err: CliError = CsvError::Pattern {
            pattern: "[".to_string(),
            message: "invalid range pattern".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Load(_)));
        assert!(err.to_string().contains("Invalid file pattern"));
    }

    #[test]
    fn test_chart_error_conversion() {
        let err: CliError = ChartError::Render("no font".to_string()).into();
        assert_eq!(err.to_string(), "Chart error: no font");

        let err: CliError = ChartError::Io {
            path: PathBuf::from("charts"),
            message: "read-only".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::Chart("boom".to_string());
        assert_eq!(err.to_string(), err.clone().to_string());
    }
}
