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

//! Error types for loading benchmark summary files.

use thiserror::Error;

/// Errors raised while discovering or parsing summary files.
///
/// Parse errors are per file: the loader records them and moves on to the
/// next file rather than failing the whole directory.
///
/// # Examples
///
/// ```
/// use benchviz_csv::CsvError;
///
/// let err = CsvError::MissingColumn("Query".to_string());
/// assert_eq!(err.to_string(), "Missing required column: Query");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV parsing error at a specific line.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_csv::CsvError;
    ///
    /// let err = CsvError::ParseError {
    ///     line: 3,
    ///     message: "found record with 4 fields, but the previous record has 3 fields".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// Missing required column in the header.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Row count exceeded the configured limit.
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count reached when the limit tripped.
        actual: usize,
    },

    /// The discovery pattern is not a valid glob.
    #[error("Invalid file pattern '{pattern}': {message}")]
    Pattern {
        /// Pattern that failed to compile.
        pattern: String,
        /// Reason reported by the glob parser.
        message: String,
    },

    /// I/O error while reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;
