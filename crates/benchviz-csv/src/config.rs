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

//! Loader configuration.

/// File name pattern of per-platform summary files.
pub const DEFAULT_PATTERN: &str = "benchmark_summary_*.csv";

/// Default maximum number of data rows per file.
///
/// Summary files hold a handful of rows per query; the limit only guards
/// against pointing the loader at something that is not a summary file.
///
/// ```
/// # use benchviz_csv::LoaderConfig;
/// let config = LoaderConfig::default();
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for discovering and parsing summary files.
///
/// # Examples
///
/// ## Default Configuration
///
/// ```
/// # use benchviz_csv::LoaderConfig;
/// let config = LoaderConfig::default();
/// assert_eq!(config.pattern, "benchmark_summary_*.csv");
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// ```
///
/// ## Semicolon-Separated Exports
///
/// ```
/// # use benchviz_csv::LoaderConfig;
/// let config = LoaderConfig {
///     delimiter: b';',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Glob matched against file names inside the results directory
    /// (default: `benchmark_summary_*.csv`).
    pub pattern: String,

    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from headers and fields
    /// (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows per file (default: 1,000,000).
    ///
    /// A file over the limit fails with `CsvError::SecurityLimit` and is
    /// skipped like any other unparsable file.
    pub max_rows: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}
