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

//! Load every summary file of a results directory into one table.
//!
//! # Error Handling
//!
//! Failures are collected, not propagated. Each file that cannot be opened
//! or parsed becomes a [`SkippedFile`] and the remaining files are still
//! loaded. Only an invalid discovery pattern fails the whole call.

use crate::config::LoaderConfig;
use crate::error::{CsvError, Result};
use crate::parse::parse_source;
use crate::platform::platform_from_path;
use benchviz_core::ResultTable;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A summary file that was loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Platform derived from the file name, used for rows without one.
    pub platform: Option<String>,
    /// Number of rows contributed to the table.
    pub rows: usize,
}

/// A summary file that was skipped.
#[derive(Debug)]
pub struct SkippedFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Why it could not be loaded.
    pub error: CsvError,
}

/// Outcome of loading a results directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Every file matching the pattern, sorted by path.
    pub discovered: Vec<PathBuf>,
    /// Files that parsed, in load order.
    pub loaded: Vec<LoadedFile>,
    /// Files that failed, in load order.
    pub skipped: Vec<SkippedFile>,
    /// Concatenation of all loaded files, `None` when nothing loaded.
    pub table: Option<ResultTable>,
}

impl LoadReport {
    /// Whether no file matched the pattern.
    pub fn no_files(&self) -> bool {
        self.discovered.is_empty()
    }

    /// Take the unified table.
    pub fn into_table(self) -> Option<ResultTable> {
        self.table
    }
}

/// List the summary files of `dir`.
///
/// The directory part of the pattern is escaped, so glob metacharacters in
/// `dir` match literally. Only regular files are returned, sorted by path.
/// A directory that does not exist simply has no files.
///
/// # Errors
///
/// Returns `CsvError::Pattern` if `config.pattern` is not a valid glob.
pub fn discover_result_files(dir: &Path, config: &LoaderConfig) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let full = Path::new(&escaped).join(&config.pattern);

    let entries = glob::glob(&full.to_string_lossy()).map_err(|e| CsvError::Pattern {
        pattern: config.pattern.clone(),
        message: e.msg.to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "unreadable directory entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    Ok(files)
}

/// Parse one summary file, taking the fallback platform from its name.
///
/// Rows with a blank `Query` are dropped and logged with the file and line.
pub fn load_file(path: &Path, config: &LoaderConfig) -> Result<ResultTable> {
    let platform = platform_from_path(path);
    let file = File::open(path)?;
    parse_source(BufReader::new(file), Some(path), platform.as_deref(), config)
}

/// Load every summary file of `dir` into one table.
///
/// Rows keep file order (sorted by path), then row order within each file.
/// Duplicate (platform, query) rows are kept; aggregation happens later.
///
/// # Examples
///
/// ```no_run
/// use benchviz_csv::{load_results, LoaderConfig};
/// use std::path::Path;
///
/// let report = load_results(Path::new("benchmark_results"), &LoaderConfig::default()).unwrap();
/// for skipped in &report.skipped {
///     eprintln!("Error reading {}: {}", skipped.path.display(), skipped.error);
/// }
/// if let Some(table) = report.into_table() {
///     println!("{} rows", table.len());
/// }
/// ```
pub fn load_results(dir: &Path, config: &LoaderConfig) -> Result<LoadReport> {
    let discovered = discover_result_files(dir, config)?;
    debug!(dir = %dir.display(), files = discovered.len(), "discovered summary files");

    let mut report = LoadReport {
        discovered,
        ..Default::default()
    };
    let mut tables = Vec::new();

    for path in &report.discovered {
        match load_file(path, config) {
            Ok(table) => {
                debug!(file = %path.display(), rows = table.len(), "loaded summary file");
                report.loaded.push(LoadedFile {
                    path: path.clone(),
                    platform: platform_from_path(path),
                    rows: table.len(),
                });
                tables.push(table);
            }
            Err(error) => {
                warn!(file = %path.display(), %error, "skipping summary file");
                report.skipped.push(SkippedFile {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    report.table = ResultTable::concat(tables);
    Ok(report)
}
